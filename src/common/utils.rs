//! Provides some helper functions.

/// Normalize `slice` so that the entries sum to `1`.
/// Leaves `slice` untouched when the sum is zero.
#[inline(always)]
pub(crate) fn normalize(slice: &mut [f64]) {
    let sum = slice.iter().sum::<f64>();
    if sum <= 0f64 { return; }
    slice.iter_mut()
        .for_each(|s| { *s /= sum; });
}


/// Returns the position of the largest entry of `slice`.
/// The first maximum wins on ties.
#[inline(always)]
pub(crate) fn argmax(slice: &[f64]) -> usize {
    assert!(!slice.is_empty());
    let mut best = 0;
    for (i, &v) in slice.iter().enumerate().skip(1) {
        if v > slice[best] {
            best = i;
        }
    }
    best
}
