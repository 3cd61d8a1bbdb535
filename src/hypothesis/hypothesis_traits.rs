use crate::Sample;
use crate::common::utils;


/// A trait that defines the behavior of a probabilistic classifier.
/// You only need to implement the `proba` method.
///
/// Every probability vector is index-aligned with the canonical
/// class list the model was trained against,
/// so the `k`-th entry is the predicted probability of
/// the `k`-th class of that list.
/// A model that only emits hard labels degenerates to
/// a one-hot indicator vector.
pub trait Classifier {
    /// Computes the class-probability distribution of
    /// the `row`-th row of `sample`.
    /// The returned vector must be non-negative and sum to `1`.
    fn proba(&self, sample: &Sample, row: usize) -> Vec<f64>;


    /// Predicts the class **index** (into the canonical class list)
    /// of the `row`-th row of `sample`.
    /// The first maximum wins on ties.
    fn predict(&self, sample: &Sample, row: usize) -> usize {
        let p = self.proba(sample, row);
        utils::argmax(&p)
    }


    /// Computes the class-probability distribution of
    /// every row of `sample`.
    fn proba_all(&self, sample: &Sample) -> Vec<Vec<f64>> {
        let n_sample = sample.shape().0;
        (0..n_sample).map(|row| self.proba(sample, row))
            .collect::<Vec<_>>()
    }


    /// Predicts the class indices of every row of `sample`.
    fn predict_all(&self, sample: &Sample) -> Vec<usize> {
        let n_sample = sample.shape().0;
        (0..n_sample).map(|row| self.predict(sample, row))
            .collect::<Vec<_>>()
    }
}
