use rayon::prelude::*;

use crate::Sample;
use crate::learner::core::{Learner, FitError};

use super::probability::Gaussian;
use super::nbayes_classifier::NBayesClassifier;


const DEFAULT_VAR_SMOOTHING: f64 = 1e-9;


/// A learner that produces a multi-class Gaussian naive Bayes
/// classifier.
/// The struct name comes from scikit-learn.
///
/// Class priors and per-class feature means/variances are computed
/// with uniform weights over the training rows,
/// so fitting on a bootstrap resample naturally weights rows by
/// how often they were drawn.
pub struct GaussianNB {
    var_smoothing: f64,
}


impl GaussianNB {
    /// Initializes the GaussianNB instance.
    pub fn new() -> Self {
        Self { var_smoothing: DEFAULT_VAR_SMOOTHING }
    }


    /// Set the variance floor.
    /// Per-class feature variances below this value are clamped
    /// to it, so a class observed in a single row still yields
    /// a proper density.
    /// Default is `1e-9.`
    pub fn var_smoothing(mut self, eps: f64) -> Self {
        assert!(eps > 0f64, "variance floor must be positive. got {eps}.");
        self.var_smoothing = eps;
        self
    }
}


impl Default for GaussianNB {
    fn default() -> Self {
        Self::new()
    }
}


impl Learner for GaussianNB {
    type Model = NBayesClassifier<Gaussian>;


    fn name(&self) -> &str {
        "GaussianNB"
    }


    fn fit(&self, sample: &Sample, classes: &[f64])
        -> Result<Self::Model, FitError>
    {
        let (n_sample, n_feature) = sample.shape();
        if n_sample == 0 || n_feature == 0 {
            return Err("cannot fit GaussianNB on an empty sample".into());
        }
        if classes.is_empty() {
            return Err("the canonical class list is empty".into());
        }

        let target = sample.target();
        for &y in target {
            if y.is_nan() {
                return Err(
                    "the training sample contains a missing label".into()
                );
            }
            if !classes.iter().any(|&c| c == y) {
                return Err(format!(
                    "label {y} does not appear in \
                     the canonical class list {classes:?}"
                ).into());
            }
        }

        let uni = 1.0 / n_sample as f64;
        let weights = vec![uni; n_sample];

        // Weighted class frequencies. With uniform weights this is
        // the fraction of training rows per class.
        let priors = classes.iter()
            .map(|&y| {
                target.iter()
                    .zip(&weights[..])
                    .filter(|&(&t, _)| t == y)
                    .map(|(_, &w)| w)
                    .sum::<f64>()
            })
            .collect::<Vec<f64>>();

        let cond_densities = classes.iter()
            .zip(&priors[..])
            .map(|(&y, &prior)| {
                if prior == 0f64 {
                    // The class never occurs in this resample.
                    // Its zero prior removes it from the posterior,
                    // so any proper density works here.
                    return Gaussian::new(
                        vec![0f64; n_feature],
                        vec![1f64; n_feature],
                    );
                }

                let means = sample.features()
                    .par_iter()
                    .map(|feat| {
                        feat.weighted_mean_for_label(y, target, &weights)
                            / prior
                    })
                    .collect::<Vec<f64>>();

                let vars = sample.features()
                    .par_iter()
                    .zip(&means[..])
                    .map(|(feat, &mean)| {
                        feat.weighted_variance_for_label(
                            mean, y, target, &weights,
                        )
                        .max(self.var_smoothing)
                    })
                    .collect::<Vec<f64>>();

                Gaussian::new(means, vars)
            })
            .collect::<Vec<_>>();

        Ok(NBayesClassifier {
            classes: classes.to_vec(),
            priors,
            cond_densities,
        })
    }
}
