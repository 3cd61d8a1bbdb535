//! Ranked query selection.


/// Returns the indices of the top `num_query` entries of
/// `disagreement`, most-disagreement-first.
/// Indices point into the order of `disagreement` itself,
/// i.e., the original unlabeled-row ordering.
///
/// Equal scores resolve to the earlier original index:
/// the sort is stable and only compares scores,
/// so tied observations keep their input order.
/// When `num_query` exceeds the number of observations,
/// all indices are returned, ranked ("head" semantics).
/// `num_query == 0` yields an empty sequence.
pub fn select(disagreement: &[f64], num_query: usize) -> Vec<usize> {
    let mut indices = (0..disagreement.len()).collect::<Vec<usize>>();
    indices.sort_by(|&i, &j| {
        disagreement[j].partial_cmp(&disagreement[i]).unwrap()
    });
    indices.truncate(num_query);
    indices
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_prefer_earlier_index() {
        let scores = [0.5, 0.7, 0.5, 0.7];
        assert_eq!(select(&scores, 4), vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_head_semantics() {
        let scores = [0.1, 0.9];
        assert_eq!(select(&scores, 10), vec![1, 0]);
        assert!(select(&scores, 0).is_empty());
    }
}
