use std::ops::Index;

use polars::prelude::*;

const BUF_SIZE: usize = 256;


/// A single feature (column) of a [`Sample`](crate::Sample),
/// stored in dense or sparse form.
#[derive(Debug, Clone)]
pub enum Feature {
    /// Dense representation of a feature.
    Dense {
        /// Feature name.
        name: String,
        /// Feature values, one per row.
        vals: Vec<f64>,
    },
    /// Sparse representation of a feature.
    /// Only the non-zero entries are stored.
    Sparse {
        /// Feature name.
        name: String,
        /// Pairs of row index and feature value,
        /// sorted by row index.
        vals: Vec<(usize, f64)>,
        /// Number of rows.
        /// Note that `size >= vals.len()`.
        size: usize,
    },
}


impl Feature {
    /// Construct an empty dense feature.
    pub fn dense<T: ToString>(name: T) -> Self {
        Self::Dense {
            name: name.to_string(),
            vals: Vec::with_capacity(BUF_SIZE),
        }
    }


    /// Construct an empty sparse feature over `size` rows.
    pub fn sparse<T: ToString>(name: T, size: usize) -> Self {
        Self::Sparse {
            name: name.to_string(),
            vals: Vec::with_capacity(BUF_SIZE),
            size,
        }
    }


    /// Get the feature name.
    pub fn name(&self) -> &str {
        match self {
            Self::Dense  { name, .. } => name,
            Self::Sparse { name, .. } => name,
        }
    }


    /// Returns `true` if this feature is stored in sparse form.
    pub fn is_sparse(&self) -> bool {
        match self {
            Self::Dense  { .. } => false,
            Self::Sparse { .. } => true,
        }
    }


    /// Returns `true` if this feature has no stored value.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Dense  { vals, .. } => vals.is_empty(),
            Self::Sparse { vals, .. } => vals.is_empty(),
        }
    }


    /// Convert this feature into a dense value vector.
    pub fn into_vals(self) -> Vec<f64> {
        match self {
            Self::Dense  { vals, .. } => vals,
            Self::Sparse { vals, size, .. } => {
                let mut ret = vec![0f64; size];
                vals.into_iter()
                    .for_each(|(i, v)| { ret[i] = v; });
                ret
            },
        }
    }


    pub(crate) fn append(&mut self, (ix, val): (usize, f64)) {
        match self {
            Self::Dense  { vals, .. } => vals.push(val),
            Self::Sparse { vals, .. } => {
                if val != 0f64 { vals.push((ix, val)); }
            },
        }
    }


    pub(crate) fn set_size(&mut self, size: usize) {
        let s = size;
        if let Self::Sparse { size, .. } = self { *size = s; }
    }


    pub(super) fn from_series(series: &Series) -> Self {
        let name = series.name().to_string();
        let vals = series.f64()
            .expect("The feature is not a dtype f64")
            .into_iter()
            .map(|x| x.unwrap_or(f64::NAN))
            .collect::<Vec<_>>();
        Self::Dense { name, vals }
    }


    /// Compute the weighted mean of this feature
    /// over the rows whose label equals `label`.
    /// The `weights` vector must be non-negative.
    pub(crate) fn weighted_mean_for_label(
        &self,
        label: f64,
        labels:  &[f64],
        weights: &[f64],
    ) -> f64
    {
        match self {
            Self::Dense { vals, .. } => {
                vals.iter()
                    .zip(weights)
                    .zip(labels)
                    .filter(|&(_, &l)| l == label)
                    .map(|((&v, &w), _)| v * w)
                    .sum()
            },
            Self::Sparse { vals, .. } => {
                vals.iter()
                    .filter(|&(i, _)| labels[*i] == label)
                    .map(|&(i, v)| weights[i] * v)
                    .sum()
            },
        }
    }


    /// Compute the weighted variance around `mean` of this feature
    /// over the rows whose label equals `label`.
    /// The weight mass on those rows must be positive.
    pub(crate) fn weighted_variance_for_label(
        &self,
        mean:       f64,
        label:      f64,
        labels:  &[f64],
        weights: &[f64],
    ) -> f64
    {
        let total = labels.iter()
            .zip(weights)
            .filter(|&(&l, _)| l == label)
            .map(|(_, &w)| w)
            .sum::<f64>();
        assert!(
            total > 0f64,
            "weight sum for label y = {label} is zero."
        );

        match self {
            Self::Dense { vals, .. } => {
                vals.iter()
                    .zip(weights)
                    .zip(labels)
                    .filter(|&(_, &l)| l == label)
                    .map(|((&v, &w), _)| w * (v - mean).powi(2))
                    .sum::<f64>()
                    / total
            },
            Self::Sparse { vals, .. } => {
                // Rows absent from `vals` hold a zero,
                // which still contributes `w * mean^2`.
                let w0 = {
                    let nonzero = vals.iter()
                        .filter(|&&(i, _)| labels[i] == label)
                        .map(|&(i, _)| weights[i])
                        .sum::<f64>();
                    total - nonzero
                };
                let variance = vals.iter()
                    .filter(|&&(i, _)| labels[i] == label)
                    .map(|&(i, v)| weights[i] * (v - mean).powi(2))
                    .sum::<f64>()
                    + w0 * mean.powi(2);
                variance / total
            },
        }
    }
}


impl Index<usize> for Feature {
    type Output = f64;
    fn index(&self, idx: usize) -> &Self::Output {
        match self {
            Self::Dense  { vals, .. } => &vals[idx],
            Self::Sparse { vals, .. } => {
                let pos = vals.binary_search_by(|(i, _)| i.cmp(&idx));
                match pos {
                    Ok(p)  => &vals[p].1,
                    Err(_) => &0f64,
                }
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_vals_dense() {
        let mut f = Feature::dense("f");
        f.append((0,  0.7));
        f.append((8,  0.0));
        f.append((0,  9.3));

        assert_eq!(f.into_vals(), vec![0.7, 0.0, 9.3]);
    }

    #[test]
    fn test_into_vals_sparse() {
        let mut f = Feature::sparse("f", 5);
        f.append((0,  0.7));
        f.append((2,  0.0));
        f.append((3, -1.5));

        assert_eq!(f.into_vals(), vec![0.7, 0.0, 0.0, -1.5, 0.0]);
    }

    #[test]
    fn test_index_sparse() {
        let mut f = Feature::sparse("f", 4);
        f.append((1, 2.0));
        f.append((3, 5.0));

        assert_eq!(f[0], 0.0);
        assert_eq!(f[1], 2.0);
        assert_eq!(f[3], 5.0);
    }

    #[test]
    fn test_mean_for_label() {
        let mut f = Feature::dense("f");
        for v in [1.0, 2.0, 3.0, 10.0] {
            f.append((0, v));
        }
        let labels  = [1.0, -1.0, 1.0, -1.0];
        let weights = [0.25; 4];

        let mean = f.weighted_mean_for_label(1.0, &labels, &weights) / 0.5;
        assert!((mean - 2.0).abs() < 1e-9);
    }
}
