use std::env;
use std::fs;

use polars::prelude::*;

use rand::prelude::*;
use rand_distr::Normal;

use qbag::prelude::*;
use qbag::research::{Simulation, rounds_to_json};


fn two_cluster_pool(n: usize, n_labeled: usize, seed: u64) -> Sample {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 0.7).unwrap();

    let mut xs = Vec::new();
    let mut labels = Vec::new();
    for k in 0..2 {
        for i in 0..n {
            xs.push(5.0 * k as f64 + noise.sample(&mut rng));
            let label = if i < n_labeled {
                k as f64
            } else {
                f64::NAN
            };
            labels.push(label);
        }
    }

    let df = DataFrame::new(vec![Series::new("x", &xs)]).unwrap();
    let target = Series::new("class", &labels);
    Sample::from_dataframe(df, target).unwrap()
}


/// Tests for a full active-learning session.
#[cfg(test)]
pub mod simulation_tests {
    use super::*;


    #[test]
    fn session_labels_the_pool_round_by_round() {
        let sample = two_cluster_pool(10, 3, 99);
        // The true label of any row in this pool.
        let oracle = |row: usize| if row < 10 { 0.0 } else { 1.0 };

        let log = env::temp_dir().join("session_rounds.csv");
        let rounds = Simulation::new(sample, GaussianNB::new(), oracle)
            .disagreement(Disagreement::VoteEntropy)
            .n_members(8)
            .num_query(2)
            .n_rounds(4)
            .run(&log)
            .unwrap();

        assert_eq!(rounds.len(), 4);
        for (i, round) in rounds.iter().enumerate() {
            assert_eq!(round.round, i + 1);
            // Two unlabeled rows become labeled per round.
            assert_eq!(round.labeled, 6 + 2 * (i + 1));
            assert_eq!(round.unlabeled, 14 - 2 * (i + 1));
            assert_eq!(round.queried.len(), 2);
            assert!(round.max_disagreement >= round.mean_disagreement);
        }

        let contents = fs::read_to_string(&log).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Round,Labeled,Unlabeled,MaxDisagreement,MeanDisagreement,Time",
        );
        assert_eq!(lines.count(), 4);

        fs::remove_file(&log).ok();
    }


    #[test]
    fn session_stops_when_the_pool_is_exhausted() {
        let sample = two_cluster_pool(4, 3, 5);
        // One unlabeled row per class,
        // so the pool empties after the first round.
        let oracle = |row: usize| if row < 4 { 0.0 } else { 1.0 };

        let log = env::temp_dir().join("session_exhausted.csv");
        let rounds = Simulation::new(sample, GaussianNB::new(), oracle)
            .n_members(5)
            .num_query(10)
            .n_rounds(100)
            .run(&log)
            .unwrap();

        assert_eq!(rounds.len(), 1);
        assert_eq!(rounds[0].unlabeled, 0);

        fs::remove_file(&log).ok();
    }


    #[test]
    fn rounds_serialize_to_json() {
        let sample = two_cluster_pool(5, 2, 11);
        let oracle = |row: usize| if row < 5 { 0.0 } else { 1.0 };

        let log = env::temp_dir().join("session_json.csv");
        let rounds = Simulation::new(sample, GaussianNB::new(), oracle)
            .n_members(5)
            .n_rounds(2)
            .run(&log)
            .unwrap();

        let json = rounds_to_json(&rounds);
        assert!(json.starts_with('['));
        assert!(json.contains("\"round\":1"));
        assert!(json.contains("\"queried\""));

        fs::remove_file(&log).ok();
    }
}
