//! Exports the commonly used structs and traits.
//!
pub use crate::sample::{
    Sample,
    SampleReader,
    Feature,
    Partition,
};

pub use crate::hypothesis::Classifier;

pub use crate::learner::{
    Learner,
    FitError,

    // Gaussian naive Bayes
    GaussianNB,
    NBayesClassifier,
    Gaussian,
};

pub use crate::committee::{
    Bagging,
    Committee,
    CommitteePredictions,
};

pub use crate::disagreement::Disagreement;

pub use crate::query::{
    select,
    QueryByCommittee,
    QueryOutcome,
};

pub use crate::error::{
    Error,
    Result,
};
