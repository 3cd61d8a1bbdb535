//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::Sample;


pub(crate) const PROBABILITY_TOLERANCE: f64 = 1e-5;


/// Check whether the training sample is valid or not.
#[inline(always)]
pub(crate) fn check_sample(sample: &Sample)
{
    let (n_sample, n_feature) = sample.shape();

    // `data` and `target` must have the length greater than `0`.
    assert!(n_sample > 0);

    // `data` must have a feature.
    assert!(n_feature > 0);
}


/// Check whether `slice` is a probability vector.
#[inline(always)]
pub(crate) fn check_probability_simplex(slice: &[f64])
{
    let sum = slice.iter().sum::<f64>();
    assert!(
        (sum - 1f64).abs() < PROBABILITY_TOLERANCE,
        "sum(proba[..]) = {sum}"
    );

    let ub = 1f64 + PROBABILITY_TOLERANCE;
    assert!(
        slice.iter().all(|p| (0f64..=ub).contains(p)),
        "probability entries must be in [0, 1]"
    );
}
