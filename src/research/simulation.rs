use colored::Colorize;
use serde::Serialize;

use std::fs::File;
use std::io::{self, prelude::*};
use std::path::Path;
use std::time::Instant;

use crate::Sample;
use crate::learner::Learner;
use crate::disagreement::Disagreement;
use crate::query::QueryByCommittee;
use crate::committee::bagging::DEFAULT_COMMITTEE_SIZE;


const DEFAULT_ROUNDS: usize = 10;
const DEFAULT_NUM_QUERY: usize = 1;
const DEFAULT_SEED: u64 = 1234;
const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const HEADER: &str =
    "Round,Labeled,Unlabeled,MaxDisagreement,MeanDisagreement,Time\n";


/// One logged round of an active-learning session.
#[derive(Debug, Clone, Serialize)]
pub struct Round {
    /// Round number, starting from `1`.
    pub round: usize,
    /// Number of labeled rows after this round.
    pub labeled: usize,
    /// Number of unlabeled rows after this round.
    pub unlabeled: usize,
    /// Largest disagreement score of this round.
    pub max_disagreement: f64,
    /// Mean disagreement score of this round.
    pub mean_disagreement: f64,
    /// Cumulative running time in milliseconds.
    pub time: u128,
    /// Original rows sent to the oracle this round,
    /// most disagreement first.
    pub queried: Vec<usize>,
}


/// Serialize the logged rounds as a JSON string.
pub fn rounds_to_json(rounds: &[Round]) -> String {
    serde_json::to_string(rounds)
        .expect("Failed to serialize the session rounds")
}


/// Struct `Simulation` runs a full active-learning session:
/// in each round it queries the most disputed rows,
/// asks an `oracle` closure for their true labels,
/// folds the answers back into the sample, and retrains.
/// One CSV record per round is written to a log file.
///
/// All session state lives in this struct and is passed
/// explicitly; there is no global.
///
/// # Example
/// ```no_run
/// use qbag::prelude::*;
/// use qbag::Simulation;
///
/// let sample = SampleReader::default()
///     .file("pool.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// // The oracle knows the truth for every row.
/// let truth = vec![1.0, -1.0, 1.0, 1.0, -1.0];
/// let oracle = |row: usize| truth[row];
///
/// let rounds = Simulation::new(sample, GaussianNB::new(), oracle)
///     .disagreement(Disagreement::VoteEntropy)
///     .num_query(2)
///     .n_rounds(5)
///     .verbose(true)
///     .run("session.csv")
///     .unwrap();
/// println!("{} rounds run", rounds.len());
/// ```
pub struct Simulation<L, O> {
    sample: Sample,
    learner: L,
    oracle: O,

    disagreement: Disagreement,
    n_members: usize,
    num_query: usize,
    seed: u64,
    n_rounds: usize,
    verbose: bool,
}


impl<L, O> Simulation<L, O> {
    /// Construct a new session over `sample`.
    /// The `oracle` maps an original row index to its true label.
    pub fn new(sample: Sample, learner: L, oracle: O) -> Self {
        Self {
            sample,
            learner,
            oracle,
            disagreement: Disagreement::default(),
            n_members: DEFAULT_COMMITTEE_SIZE,
            num_query: DEFAULT_NUM_QUERY,
            seed: DEFAULT_SEED,
            n_rounds: DEFAULT_ROUNDS,
            verbose: false,
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


    /// Set the number of rows queried per round.
    /// Default value is `1.`
    pub fn num_query(mut self, num_query: usize) -> Self {
        self.num_query = num_query;
        self
    }


    /// Set the base seed.
    /// Round `r` trains its committee with seed `seed + r`.
    /// Default value is `1234.`
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the number of rounds.
    /// The session stops earlier when no unlabeled row remains.
    /// Default value is `10.`
    pub fn n_rounds(mut self, n_rounds: usize) -> Self {
        self.n_rounds = n_rounds;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `Simulation` prints one status row per round.
    /// Default value is `false.`
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}


impl<L, O> Simulation<L, O>
    where L: Learner + Sync,
          L::Model: Send + Sync,
          O: FnMut(usize) -> f64,
{
    #[inline(always)]
    fn print_log_header(&self) {
        println!(
            "      {:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "ROUND".bold().red(),
            "LABELED".bold().green(),
            "MAX".bold().blue(),
            "MEAN".bold().yellow(),
        );
    }


    /// Run the session and write one CSV record per round to
    /// `filename`.
    /// Returns the logged rounds.
    /// Failures of the inner query rounds are surfaced as
    /// `io::Error` with the original message attached.
    pub fn run<P: AsRef<Path>>(mut self, filename: P)
        -> io::Result<Vec<Round>>
    {
        let mut file = File::create(filename)?;
        file.write_all(HEADER.as_bytes())?;

        let mut rounds = Vec::with_capacity(self.n_rounds);
        let mut time_acc = 0;

        if self.verbose { self.print_log_header(); }

        for round in 1..=self.n_rounds {
            if self.sample.n_unlabeled() == 0 {
                break;
            }

            let now = Instant::now();

            let outcome = QueryByCommittee::init(&self.sample)
                .disagreement(self.disagreement)
                .n_members(self.n_members)
                .num_query(self.num_query)
                .seed(self.seed.wrapping_add(round as u64))
                .run(&self.learner)
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

            let queried = outcome.queried_rows();
            for &row in &queried {
                let label = (self.oracle)(row);
                self.sample.set_label(row, label);
            }

            time_acc += now.elapsed().as_millis();

            let n_u = outcome.disagreement.len() as f64;
            let max = outcome.disagreement.iter()
                .copied()
                .fold(f64::NEG_INFINITY, f64::max);
            let mean = outcome.disagreement.iter().sum::<f64>() / n_u;

            let labeled = self.sample.n_labeled();
            let unlabeled = self.sample.n_unlabeled();

            let line = format!(
                "{round},{labeled},{unlabeled},{max},{mean},{time_acc}\n"
            );
            file.write_all(line.as_bytes())?;

            if self.verbose {
                println!(
                    "{} {}\t{}\t{}\t{}",
                    "[LOG]".bold().magenta(),
                    format!("{round:>WIDTH$}").red(),
                    format!("{labeled:>WIDTH$}").green(),
                    format!("{max:>WIDTH$.PREC_WIDTH$}").blue(),
                    format!("{mean:>WIDTH$.PREC_WIDTH$}").yellow(),
                );
            }

            rounds.push(Round {
                round,
                labeled,
                unlabeled,
                max_disagreement: max,
                mean_disagreement: mean,
                time: time_acc,
                queried,
            });
        }

        if self.verbose {
            println!(
                "{} {} rounds, {} labeled rows",
                "[FIN]".bold().bright_green(),
                rounds.len(),
                self.sample.n_labeled(),
            );
        }

        Ok(rounds)
    }
}
