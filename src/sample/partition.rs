use fixedbitset::FixedBitSet;

use crate::error::{Error, Result};
use super::sample_struct::Sample;


/// The labeled/unlabeled halves of a partially labeled [`Sample`].
/// Both halves preserve the original relative row order.
#[derive(Debug, Clone)]
pub struct Partition {
    /// Rows whose label is known.
    /// Committee members are trained on bootstrap resamples
    /// of this sample.
    pub labeled: Sample,
    /// Rows whose label is missing.
    /// These are the candidates a disagreement measure ranks.
    pub unlabeled: Sample,
    /// Original row index of each labeled row.
    pub labeled_index: Vec<usize>,
    /// Original row index of each unlabeled row.
    pub unlabeled_index: Vec<usize>,
}


impl Sample {
    /// Split `self` into the rows with a known label and
    /// the rows whose label is missing,
    /// preserving the original relative row order in both halves.
    ///
    /// # Errors
    /// Returns [`Error::EmptyPartition`] when either half is empty,
    /// since training or querying is impossible in that case.
    pub fn partition(&self) -> Result<Partition> {
        self.target_is_specified();
        let n_sample = self.shape().0;

        let mut mask = FixedBitSet::with_capacity(n_sample);
        self.target()
            .iter()
            .enumerate()
            .for_each(|(i, y)| {
                if !y.is_nan() { mask.put(i); }
            });

        let labeled_index = mask.ones().collect::<Vec<usize>>();
        let unlabeled_index = (0..n_sample)
            .filter(|&i| !mask.contains(i))
            .collect::<Vec<usize>>();

        if labeled_index.is_empty() || unlabeled_index.is_empty() {
            return Err(Error::EmptyPartition {
                labeled: labeled_index.len(),
                unlabeled: unlabeled_index.len(),
            });
        }

        let labeled = self.subsample(&labeled_index);
        let unlabeled = self.subsample(&unlabeled_index);

        Ok(Partition { labeled, unlabeled, labeled_index, unlabeled_index })
    }
}
