use serde::{Serialize, Deserialize};

use crate::Sample;
use crate::hypothesis::Classifier;
use crate::common::utils;

use super::probability::Probability;


/// Multi-class naive Bayes classifier.
/// The class at position `k` of `classes` owns
/// `priors[k]` and `cond_densities[k]`.
/// A class absent from the training resample keeps a zero prior,
/// so it never receives posterior mass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NBayesClassifier<P> {
    pub(super) classes: Vec<f64>,
    pub(super) priors: Vec<f64>,
    pub(super) cond_densities: Vec<P>,
}


impl<P> NBayesClassifier<P> {
    /// The canonical class list this model is aligned with.
    pub fn classes(&self) -> &[f64] {
        &self.classes[..]
    }
}


impl<P> NBayesClassifier<P>
    where P: Probability
{
    /// Computes the logarithmic joint `ln p(y = k) + ln p(x | y = k)`
    /// per class for the given row.
    /// Classes with a zero prior get `-inf`.
    fn log_joints(&self, sample: &Sample, row: usize) -> Vec<f64> {
        self.priors.iter()
            .zip(&self.cond_densities[..])
            .map(|(&prior, density)| {
                if prior > 0f64 {
                    prior.ln() + density.log_probability(sample, row)
                } else {
                    f64::NEG_INFINITY
                }
            })
            .collect::<Vec<_>>()
    }


    /// Predicts the class **label** (not index) of the `row`-th row.
    pub fn predict_label(&self, sample: &Sample, row: usize) -> f64 {
        self.classes[self.predict(sample, row)]
    }
}


impl<P> Classifier for NBayesClassifier<P>
    where P: Probability
{
    fn proba(&self, sample: &Sample, row: usize) -> Vec<f64> {
        let joints = self.log_joints(sample, row);

        // Normalize in log space to avoid underflow.
        let max = joints.iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        if !max.is_finite() {
            // Every class is impossible. Cannot happen for models
            // fit on a non-empty sample, but keep the output a
            // valid distribution.
            let k = self.classes.len();
            return vec![1.0 / k as f64; k];
        }

        let mut proba = joints.into_iter()
            .map(|lj| (lj - max).exp())
            .collect::<Vec<_>>();
        utils::normalize(&mut proba);
        proba
    }
}
