//! The files in `learner/` directory define
//! the `Learner` trait and the built-in learners.

/// Provides the `Learner` trait.
pub mod core;

/// Defines Gaussian naive Bayes.
pub mod naive_bayes;


pub use self::core::{
    Learner,
    FitError,
};

pub use self::naive_bayes::{
    GaussianNB,
    NBayesClassifier,
    Gaussian,
    Probability,
};
