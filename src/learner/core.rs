//! Provides the `Learner` trait.

use crate::Sample;
use crate::hypothesis::Classifier;


/// The boxed error a failing [`Learner::fit`] returns.
/// The committee trainer wraps it into
/// [`Error::Training`](crate::Error::Training),
/// preserving the cause text.
pub type FitError = Box<dyn std::error::Error + Send + Sync>;


/// The trait [`Learner`] defines the training capability
/// of a classifier family.
/// Together with [`Classifier`], it is the seam through which
/// any external model plugs into a committee:
/// given a labeled sample, produce a model;
/// given a model and new rows, produce class probabilities.
///
/// # Class alignment
/// `fit` receives the canonical class list of the **full**
/// labeled partition.
/// The produced model must emit probability vectors
/// index-aligned with that list;
/// a class absent from `sample`
/// (e.g., a bootstrap resample that lost it)
/// keeps zero probability mass.
pub trait Learner {
    /// The model that `fit` produces.
    type Model: Classifier;

    /// Returns the name of this learner.
    fn name(&self) -> &str;

    /// Fit a model on `sample` against the canonical
    /// class list `classes`.
    fn fit(&self, sample: &Sample, classes: &[f64])
        -> Result<Self::Model, FitError>;
}
