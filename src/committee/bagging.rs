//! Provides the bagging committee trainer.
use rand::prelude::*;
use rayon::prelude::*;

use crate::Sample;
use crate::learner::Learner;
use crate::error::{Error, Result};
use crate::common::checker;

use super::committee_struct::Committee;


/// Default number of committee members.
pub const DEFAULT_COMMITTEE_SIZE: usize = 50;
const DEFAULT_SEED: u64 = 1234;


/// Trains a committee of independent models via
/// bagging (bootstrap aggregating):
/// each member is fit on a resample of the labeled sample,
/// drawn with replacement and of the same size.
///
/// Member `c` draws its resample from a generator seeded with
/// `seed + c`, so a fixed seed reproduces the exact committee
/// regardless of how the parallel fits are scheduled.
/// If any member's fit fails, the whole run fails with
/// [`Error::Training`]; there is no partial committee.
///
/// # Example
/// ```no_run
/// use qbag::prelude::*;
///
/// // Read the labeled training rows.
/// let sample = SampleReader::default()
///     .file("train.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let learner = GaussianNB::new();
/// let committee = Bagging::init(&sample)
///     .n_members(25)
///     .seed(777)
///     .run(&learner)
///     .unwrap();
/// assert_eq!(committee.len(), 25);
/// ```
pub struct Bagging<'a> {
    // Labeled training sample.
    sample: &'a Sample,

    // Committee size.
    n_members: usize,

    // Base seed for the per-member resamples.
    seed: u64,
}


impl<'a> Bagging<'a> {
    /// Initialize the trainer over the labeled `sample`.
    pub fn init(sample: &'a Sample) -> Self {
        Self {
            sample,
            n_members: DEFAULT_COMMITTEE_SIZE,
            seed: DEFAULT_SEED,
        }
    }


    /// Set the committee size.
    /// Default value is `50.`
    pub fn n_members(mut self, n_members: usize) -> Self {
        self.n_members = n_members;
        self
    }


    /// Set the seed of the randomness for the bootstrap resamples.
    /// Default value is `1234.`
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Train the committee.
    /// Members are fit in parallel; the returned committee keeps
    /// them ordered by member index.
    ///
    /// # Errors
    /// - [`Error::InvalidConfiguration`] when fewer than 2 members
    ///   are requested. A single-model committee has zero
    ///   disagreement everywhere.
    /// - [`Error::Training`] when any member's fit fails.
    ///   The cause text of the first failing member is preserved.
    pub fn run<L>(&self, learner: &L) -> Result<Committee<L::Model>>
        where L: Learner + Sync,
              L::Model: Send,
    {
        if self.n_members < 2 {
            return Err(Error::InvalidConfiguration(format!(
                "a committee needs at least 2 members, got {}",
                self.n_members,
            )));
        }
        checker::check_sample(self.sample);
        self.sample.target_is_specified();

        let classes = self.sample.classes();
        assert!(
            !classes.is_empty(),
            "the training sample has no labeled row"
        );

        let n_sample = self.sample.shape().0;

        let members = (0..self.n_members)
            .into_par_iter()
            .map(|c| {
                let mut rng = StdRng::seed_from_u64(
                    self.seed.wrapping_add(c as u64)
                );
                let ix = (0..n_sample)
                    .map(|_| rng.gen_range(0..n_sample))
                    .collect::<Vec<usize>>();
                let resample = self.sample.subsample(&ix);

                learner.fit(&resample, &classes)
                    .map_err(|e| Error::Training { cause: e.to_string() })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Committee::new(members, classes))
    }
}
