#![warn(missing_docs)]

//!
//! A crate that provides query-by-committee active learning
//! via bagging (bootstrap aggregating).
//!
//! Given a partially labeled [`Sample`],
//! this crate trains a committee of classifiers,
//! each fit on an independent bootstrap resample of the labeled rows,
//! and ranks the unlabeled rows by how much the committee members
//! disagree about their predicted class.
//! The top-ranked rows are the ones an oracle (a human annotator)
//! should be asked to label next.
//!
//! Three disagreement measures are available,
//! selected by the [`Disagreement`] enum:
//!
//! - [`Disagreement::Kullback`]
//!   Average Kullback-Leibler divergence of each member's
//!   predicted class distribution to the committee consensus.
//! - [`Disagreement::VoteEntropy`]
//!   Entropy of the committee's (hard) vote distribution.
//! - [`Disagreement::PostEntropy`]
//!   Entropy of the averaged posterior distribution.
//!
//! Any classifier family can join a committee by implementing
//! the [`Learner`] and [`Classifier`] traits.
//! A multi-class Gaussian naive Bayes learner,
//! [`GaussianNB`], is provided as a reference implementation.

pub mod error;
mod common;
pub mod sample;
pub mod hypothesis;
pub mod learner;
pub mod committee;
pub mod disagreement;
pub mod query;
pub mod research;

pub mod prelude;

pub use error::{Error, Result};

pub use sample::{
    Sample,
    SampleReader,
    Feature,
    Partition,
};

pub use hypothesis::Classifier;

pub use learner::{
    Learner,
    FitError,
    GaussianNB,
    NBayesClassifier,
};

pub use committee::{
    Bagging,
    Committee,
    CommitteePredictions,
};

pub use disagreement::Disagreement;

pub use query::{
    select,
    QueryByCommittee,
    QueryOutcome,
};

pub use research::Simulation;
