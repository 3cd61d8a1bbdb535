use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use crate::Sample;
use crate::hypothesis::Classifier;

use super::predictions::CommitteePredictions;


/// An ordered collection of independently trained models,
/// together with the canonical class list all of them are
/// aligned with.
/// Member order is fixed at training time for reproducibility;
/// it does not affect any disagreement score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Committee<H> {
    members: Vec<H>,
    classes: Vec<f64>,
}


impl<H> Committee<H> {
    pub(crate) fn new(members: Vec<H>, classes: Vec<f64>) -> Self {
        Self { members, classes }
    }


    /// Number of committee members.
    pub fn len(&self) -> usize {
        self.members.len()
    }


    /// Returns `true` if the committee has no member.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }


    /// The canonical class list.
    pub fn classes(&self) -> &[f64] {
        &self.classes[..]
    }


    /// The trained members, in training order.
    pub fn members(&self) -> &[H] {
        &self.members[..]
    }
}


impl<H> Committee<H>
    where H: Classifier + Sync,
{
    /// Apply every member to `sample` and collect
    /// the per-member class-probability predictions.
    pub fn predict_proba(&self, sample: &Sample)
        -> CommitteePredictions
    {
        let members = self.members.par_iter()
            .map(|h| h.proba_all(sample))
            .collect::<Vec<_>>();

        CommitteePredictions::from_probabilities(
            members,
            self.classes.len(),
        )
    }
}
