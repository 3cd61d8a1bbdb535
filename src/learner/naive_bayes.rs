//! Defines the Gaussian naive Bayes learner.

pub(crate) mod nbayes;
pub(crate) mod nbayes_classifier;
pub(crate) mod probability;


pub use nbayes::GaussianNB;
pub use nbayes_classifier::NBayesClassifier;
pub use probability::{
    Gaussian,
    Probability,
};
