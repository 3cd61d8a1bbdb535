use qbag::{
    Classifier,
    GaussianNB,
    Learner,
    Sample,
};

use polars::prelude::*;


// Toy example  (o/x are the pos/neg examples)
//
// 15|
//   |                   x
//   |                              x
// 10|       x
//   |                 Mean(x)           o
//   |
//   |                         o    Mean(o)
//  5|                                       o
//   |
//   |            x
//   |__________________________________________
//  0            5           10            15
//


/// Tests for the Gaussian naive Bayes reference learner.
#[cfg(test)]
pub mod nbayes_tests {
    use super::*;

    const TOL: f64 = 1e-9;


    fn toy_sample() -> Sample {
        let s1 = Series::new(
            "x", &[10.0, 14.0, 15.0, 5.0, 3.0, 8.0, 12.0],
        );
        let s2 = Series::new(
            "y", &[5.0, 8.0, 3.0, 1.0, 9.0, 13.0, 11.0],
        );
        let target = Series::new(
            "class", &[1_f64, 1.0, 1.0, -1.0, -1.0, -1.0, -1.0],
        );

        let df = DataFrame::new(vec![s1, s2]).unwrap();
        Sample::from_dataframe(df, target).unwrap()
    }


    #[test]
    fn toy_clusters_are_separated() {
        let sample = toy_sample();
        let classes = sample.classes();
        assert_eq!(classes, vec![-1.0, 1.0]);

        let nbayes = GaussianNB::new();
        let f = nbayes.fit(&sample, &classes[..]).unwrap();

        let predictions = (0..7)
            .map(|row| f.predict_label(&sample, row))
            .collect::<Vec<_>>();
        assert_eq!(predictions, sample.target());
    }


    #[test]
    fn proba_is_a_distribution() {
        let sample = toy_sample();
        let classes = sample.classes();

        let f = GaussianNB::new().fit(&sample, &classes[..]).unwrap();

        for row in 0..sample.shape().0 {
            let proba = f.proba(&sample, row);
            assert_eq!(proba.len(), classes.len());
            assert!(proba.iter().all(|&p| (0.0..=1.0).contains(&p)));
            assert!((proba.iter().sum::<f64>() - 1.0).abs() < 1e-5);
        }
    }


    #[test]
    fn absent_class_keeps_zero_posterior_mass() {
        // The canonical class list has a class the training
        // rows never exhibit, as happens on bootstrap resamples.
        let sample = toy_sample();
        let classes = vec![-1.0, 1.0, 2.0];

        let f = GaussianNB::new().fit(&sample, &classes[..]).unwrap();

        for row in 0..sample.shape().0 {
            let proba = f.proba(&sample, row);
            assert_eq!(proba.len(), 3);
            assert!(proba[2].abs() < TOL);
        }
    }


    #[test]
    fn missing_label_fails_the_fit() {
        let s1 = Series::new("x", &[1.0, 2.0]);
        let target = Series::new("class", &[0.0, f64::NAN]);
        let df = DataFrame::new(vec![s1]).unwrap();
        let sample = Sample::from_dataframe(df, target).unwrap();

        assert!(GaussianNB::new().fit(&sample, &[0.0]).is_err());
    }


    #[test]
    fn label_outside_the_class_list_fails_the_fit() {
        let sample = toy_sample();
        assert!(GaussianNB::new().fit(&sample, &[0.0, 1.0]).is_err());
    }


    #[test]
    fn variance_floor_keeps_the_density_proper() {
        // A constant feature has zero empirical variance.
        let s1 = Series::new("x", &[3.0, 3.0, 3.0, 8.0]);
        let target = Series::new("class", &[0.0, 0.0, 0.0, 1.0]);
        let df = DataFrame::new(vec![s1]).unwrap();
        let sample = Sample::from_dataframe(df, target).unwrap();

        let f = GaussianNB::new()
            .var_smoothing(1e-9)
            .fit(&sample, &[0.0, 1.0])
            .unwrap();

        let proba = f.proba(&sample, 0);
        assert!(proba.iter().all(|p| p.is_finite()));
        assert!((proba.iter().sum::<f64>() - 1.0).abs() < 1e-5);
    }
}
