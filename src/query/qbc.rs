//! Provides the query-by-committee orchestrator.
use serde::{Serialize, Deserialize};

use crate::Sample;
use crate::learner::Learner;
use crate::committee::{Bagging, bagging::DEFAULT_COMMITTEE_SIZE};
use crate::disagreement::Disagreement;
use crate::error::Result;

use super::selector::select;


const DEFAULT_NUM_QUERY: usize = 1;
const DEFAULT_SEED: u64 = 1234;


/// The result of one query-by-committee round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryOutcome {
    /// Positions within the unlabeled ordering of the rows to
    /// query, most disagreement first.
    /// Length is `min(num_query, |U|)`,
    /// where `|U|` is the number of unlabeled rows.
    pub query: Vec<usize>,

    /// One disagreement score per unlabeled row,
    /// aligned with the unlabeled ordering.
    pub disagreement: Vec<f64>,

    /// Original row index of each unlabeled row.
    pub unlabeled_index: Vec<usize>,
}


impl QueryOutcome {
    /// The original rows to hand to the oracle,
    /// most disagreement first.
    pub fn queried_rows(&self) -> Vec<usize> {
        self.query.iter()
            .map(|&u| self.unlabeled_index[u])
            .collect::<Vec<_>>()
    }
}


/// Runs one round of query-by-committee over a partially labeled
/// sample:
/// partition the rows into labeled/unlabeled,
/// train a bagging committee on the labeled rows,
/// score the unlabeled rows with a [`Disagreement`] measure,
/// and rank them into a query batch.
///
/// # Example
/// ```no_run
/// use qbag::prelude::*;
///
/// // Rows with a `?` in the `class` column are unlabeled.
/// let sample = SampleReader::default()
///     .file("pool.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let learner = GaussianNB::new();
/// let outcome = QueryByCommittee::init(&sample)
///     .disagreement(Disagreement::VoteEntropy)
///     .n_members(25)
///     .num_query(5)
///     .run(&learner)
///     .unwrap();
///
/// // Ask the oracle to label these rows next.
/// println!("{:?}", outcome.queried_rows());
/// ```
pub struct QueryByCommittee<'a> {
    // Partially labeled sample.
    sample: &'a Sample,

    // Disagreement measure.
    disagreement: Disagreement,

    // Committee size.
    n_members: usize,

    // Size of the query batch.
    num_query: usize,

    // Base seed for the bootstrap resamples.
    seed: u64,
}


impl<'a> QueryByCommittee<'a> {
    /// Initialize the orchestrator over a partially labeled
    /// `sample`.
    pub fn init(sample: &'a Sample) -> Self {
        Self {
            sample,
            disagreement: Disagreement::default(),
            n_members: DEFAULT_COMMITTEE_SIZE,
            num_query: DEFAULT_NUM_QUERY,
            seed: DEFAULT_SEED,
        }
    }


    /// Set the disagreement measure.
    /// Default is [`Disagreement::Kullback`].
    pub fn disagreement(mut self, disagreement: Disagreement) -> Self {
        self.disagreement = disagreement;
        self
    }


    /// Set the committee size.
    /// Default value is `50.`
    pub fn n_members(mut self, n_members: usize) -> Self {
        self.n_members = n_members;
        self
    }


    /// Set the number of rows to query.
    /// Default value is `1.`
    /// A value larger than the number of unlabeled rows returns
    /// all of them, ranked;
    /// `0` returns an empty query batch.
    pub fn num_query(mut self, num_query: usize) -> Self {
        self.num_query = num_query;
        self
    }


    /// Set the seed of the randomness for the bootstrap
    /// resamples.
    /// Default value is `1234.`
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Run one query round.
    ///
    /// # Errors
    /// - [`Error::EmptyPartition`](crate::Error::EmptyPartition)
    ///   when the sample has no labeled or no unlabeled row.
    /// - [`Error::InvalidConfiguration`](crate::Error::InvalidConfiguration)
    ///   when fewer than 2 committee members are requested.
    /// - [`Error::Training`](crate::Error::Training)
    ///   when any member's fit fails.
    ///   No partial result is returned in that case.
    pub fn run<L>(&self, learner: &L) -> Result<QueryOutcome>
        where L: Learner + Sync,
              L::Model: Send + Sync,
    {
        let partition = self.sample.partition()?;

        let committee = Bagging::init(&partition.labeled)
            .n_members(self.n_members)
            .seed(self.seed)
            .run(learner)?;

        let predictions = committee.predict_proba(&partition.unlabeled);
        let disagreement = self.disagreement.score(&predictions);
        let query = select(&disagreement, self.num_query);

        Ok(QueryOutcome {
            query,
            disagreement,
            unlabeled_index: partition.unlabeled_index,
        })
    }
}
