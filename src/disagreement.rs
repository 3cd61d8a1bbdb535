//! Committee disagreement measures.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::committee::CommitteePredictions;
use crate::error::Error;


/// A measure of how much the committee members disagree about
/// the predicted class of one observation.
/// All three measures use the natural logarithm,
/// so scores of different measures are not comparable;
/// only the relative order within one measure feeds selection.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub enum Disagreement {
    /// Average Kullback-Leibler divergence of each member's
    /// predicted class distribution to the consensus
    /// (mean) distribution:
    /// `D(u) = (1/C) Σ_c Σ_k p_c[k] · ln( p_c[k] / p̄[k] )`.
    /// Zero when every member predicts the same distribution.
    #[default]
    Kullback,

    /// Entropy of the committee's hard-vote distribution:
    /// `D(u) = - Σ_k V_k · ln(V_k)`,
    /// where `V_k` is the fraction of members voting class `k`.
    /// Zero when all members agree;
    /// `ln K` when votes are split evenly across all `K` classes.
    VoteEntropy,

    /// Entropy of the averaged posterior:
    /// `D(u) = - Σ_k p̄[k] · ln(p̄[k])`.
    PostEntropy,
}


impl Disagreement {
    /// Computes one non-negative disagreement value per
    /// observation, in the same order as `predictions`.
    /// Pure: identical predictions always yield identical scores.
    pub fn score(&self, predictions: &CommitteePredictions) -> Vec<f64>
    {
        let n_observation = predictions.n_observations();
        (0..n_observation)
            .map(|u| {
                let d = match self {
                    Self::Kullback    => kullback(predictions, u),
                    Self::VoteEntropy => vote_entropy(predictions, u),
                    Self::PostEntropy => post_entropy(predictions, u),
                };
                // Float error can push a zero divergence slightly
                // below zero.
                d.max(0f64)
            })
            .collect::<Vec<_>>()
    }
}


impl fmt::Display for Disagreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Kullback    => "kullback",
            Self::VoteEntropy => "vote_entropy",
            Self::PostEntropy => "post_entropy",
        };
        write!(f, "{name}")
    }
}


impl FromStr for Disagreement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kullback"     => Ok(Self::Kullback),
            "vote_entropy" => Ok(Self::VoteEntropy),
            "post_entropy" => Ok(Self::PostEntropy),
            _ => Err(Error::InvalidConfiguration(format!(
                "unknown disagreement measure {s:?}. \
                 expected one of \
                 \"kullback\", \"vote_entropy\", \"post_entropy\"."
            ))),
        }
    }
}


/// Average per-member KL divergence to the consensus distribution.
/// Terms with `p_c[k] = 0` or `p̄[k] = 0` contribute 0
/// (`p̄[k] = 0` implies `p_c[k] = 0` for every member).
fn kullback(predictions: &CommitteePredictions, u: usize) -> f64 {
    let consensus = predictions.consensus(u);
    let c = predictions.n_members() as f64;

    predictions.members()
        .iter()
        .map(|member| {
            member[u].iter()
                .zip(&consensus[..])
                .map(|(&p, &q)| {
                    if p > 0f64 && q > 0f64 {
                        p * (p / q).ln()
                    } else {
                        0f64
                    }
                })
                .sum::<f64>()
        })
        .sum::<f64>()
        / c
}


/// Entropy of the vote distribution over classes.
fn vote_entropy(predictions: &CommitteePredictions, u: usize) -> f64 {
    let mut counts = vec![0usize; predictions.n_classes()];
    for k in predictions.votes(u) {
        counts[k] += 1;
    }

    let c = predictions.n_members() as f64;
    counts.into_iter()
        .map(|v| v as f64 / c)
        .map(neg_xlnx)
        .sum::<f64>()
}


/// Entropy of the averaged posterior distribution.
fn post_entropy(predictions: &CommitteePredictions, u: usize) -> f64 {
    predictions.consensus(u)
        .into_iter()
        .map(neg_xlnx)
        .sum::<f64>()
}


/// `- x ln(x)` with the convention `0 · ln(0) = 0`.
#[inline(always)]
fn neg_xlnx(x: f64) -> f64 {
    if x > 0f64 { - x * x.ln() } else { 0f64 }
}
