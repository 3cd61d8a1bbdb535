//! The core library for the `Classifier` trait.

pub(crate) mod hypothesis_traits;

pub use hypothesis_traits::Classifier;
