use rand::prelude::*;
use rand_distr::Normal;

use polars::prelude::*;

use qbag::prelude::*;


/// Build a pool of `n` rows per class around the given centers.
/// Only the first `n_labeled` rows of each class keep their label.
fn gaussian_pool(
    centers: &[(f64, f64)],
    n: usize,
    n_labeled: usize,
    seed: u64,
) -> Sample
{
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 0.8).unwrap();

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    let mut labels = Vec::new();
    for (k, &(cx, cy)) in centers.iter().enumerate() {
        for i in 0..n {
            xs.push(cx + noise.sample(&mut rng));
            ys.push(cy + noise.sample(&mut rng));
            let label = if i < n_labeled {
                k as f64
            } else {
                f64::NAN
            };
            labels.push(label);
        }
    }

    let df = DataFrame::new(vec![
        Series::new("x", &xs),
        Series::new("y", &ys),
    ]).unwrap();
    let target = Series::new("class", &labels);

    Sample::from_dataframe(df, target).unwrap()
}


/// A learner whose fit never succeeds.
struct Failing;

impl Learner for Failing {
    type Model = NBayesClassifier<Gaussian>;

    fn name(&self) -> &str {
        "Failing"
    }

    fn fit(&self, _sample: &Sample, _classes: &[f64])
        -> std::result::Result<Self::Model, FitError>
    {
        Err("boom".into())
    }
}


/// Tests for one full query-by-committee round.
#[cfg(test)]
pub mod qbc_tests {
    use super::*;


    #[test]
    fn query_round_on_gaussian_clusters() {
        let sample = gaussian_pool(
            &[(0.0, 0.0), (6.0, 6.0)], 20, 5, 42,
        );
        assert_eq!(sample.n_labeled(), 10);
        assert_eq!(sample.n_unlabeled(), 30);

        let learner = GaussianNB::new();
        let outcome = QueryByCommittee::init(&sample)
            .disagreement(Disagreement::Kullback)
            .n_members(10)
            .num_query(5)
            .run(&learner)
            .unwrap();

        assert_eq!(outcome.disagreement.len(), 30);
        assert_eq!(outcome.unlabeled_index.len(), 30);
        assert_eq!(outcome.query.len(), 5);
        assert!(outcome.disagreement.iter().all(|&d| d >= 0f64));

        // The batch is ranked by descending disagreement.
        let scores = outcome.query.iter()
            .map(|&u| outcome.disagreement[u])
            .collect::<Vec<_>>();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));

        // Queried rows are original row indices of unlabeled rows.
        for row in outcome.queried_rows() {
            assert!(sample.target()[row].is_nan());
        }
    }


    #[test]
    fn same_seed_same_batch() {
        let sample = gaussian_pool(
            &[(0.0, 0.0), (5.0, 5.0)], 15, 4, 7,
        );
        let learner = GaussianNB::new();

        let run = |seed: u64| {
            QueryByCommittee::init(&sample)
                .disagreement(Disagreement::VoteEntropy)
                .n_members(8)
                .num_query(3)
                .seed(seed)
                .run(&learner)
                .unwrap()
        };

        assert_eq!(run(1234), run(1234));
    }


    #[test]
    fn batch_never_exceeds_the_unlabeled_pool() {
        let sample = gaussian_pool(
            &[(0.0, 0.0), (5.0, 5.0)], 5, 4, 0,
        );
        assert_eq!(sample.n_unlabeled(), 2);

        let outcome = QueryByCommittee::init(&sample)
            .n_members(5)
            .num_query(100)
            .run(&GaussianNB::new())
            .unwrap();

        assert_eq!(outcome.query.len(), 2);
    }


    #[test]
    fn committee_members_share_the_class_list() {
        // Three classes with a single labeled row each.
        // Most bootstrap resamples lose a class,
        // yet every member must predict over all three.
        let sample = gaussian_pool(
            &[(0.0, 0.0), (5.0, 5.0), (10.0, 0.0)], 8, 1, 3,
        );

        let partition = sample.partition().unwrap();
        let committee = Bagging::init(&partition.labeled)
            .n_members(20)
            .run(&GaussianNB::new())
            .unwrap();

        let predictions = committee.predict_proba(&partition.unlabeled);
        assert_eq!(predictions.n_members(), 20);
        assert_eq!(predictions.n_classes(), 3);
    }


    #[test]
    fn a_committee_of_one_is_rejected() {
        let sample = gaussian_pool(&[(0.0, 0.0), (5.0, 5.0)], 6, 3, 0);

        let e = QueryByCommittee::init(&sample)
            .n_members(1)
            .run(&GaussianNB::new())
            .unwrap_err();
        assert!(matches!(e, Error::InvalidConfiguration(_)));
    }


    #[test]
    fn a_fully_unlabeled_pool_is_rejected() {
        let sample = gaussian_pool(&[(0.0, 0.0), (5.0, 5.0)], 6, 0, 0);

        let e = QueryByCommittee::init(&sample)
            .run(&GaussianNB::new())
            .unwrap_err();
        assert!(matches!(e, Error::EmptyPartition { labeled: 0, .. }));
    }


    #[test]
    fn a_failing_fit_surfaces_its_cause() {
        let sample = gaussian_pool(&[(0.0, 0.0), (5.0, 5.0)], 6, 3, 0);

        let e = QueryByCommittee::init(&sample)
            .n_members(4)
            .run(&Failing)
            .unwrap_err();
        assert_eq!(e, Error::Training { cause: String::from("boom") });
    }
}
