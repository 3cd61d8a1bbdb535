use serde::{Serialize, Deserialize};

use std::f64::consts::PI;
use crate::Sample;


/// A probability density over the rows of a [`Sample`].
pub trait Probability {
    /// Computes the logarithmic density of the `row`-th row.
    fn log_probability(&self, sample: &Sample, row: usize) -> f64;

    /// Computes the density of the `row`-th row.
    fn probability(&self, sample: &Sample, row: usize) -> f64 {
        self.log_probability(sample, row).exp()
    }
}


/// Gaussian density with independent features.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Gaussian {
    pub(super) means: Vec<f64>,
    pub(super) vars: Vec<f64>,
}

impl Gaussian {
    pub(super) fn new(means: Vec<f64>, vars: Vec<f64>) -> Self {
        assert_eq!(means.len(), vars.len());
        assert!(vars.iter().all(|v| *v > 0f64));
        Self { means, vars }
    }
}


impl Probability for Gaussian {
    #[inline(always)]
    fn log_probability(&self, sample: &Sample, row: usize) -> f64 {
        debug_assert_eq!(self.means.len(), sample.shape().1);
        let n_feature = self.means.len() as f64;

        let gauss_const: f64 = n_feature * (2.0_f64 * PI).ln();

        let non_const = self.means.iter()
            .zip(&self.vars[..])
            .zip(sample.features())
            .map(|((&mean, &var), feat)| {
                let x = feat[row];

                ((x - mean).powi(2) / var) + var.ln()
            })
            .sum::<f64>();

        - 0.5 * (gauss_const + non_const)
    }
}
