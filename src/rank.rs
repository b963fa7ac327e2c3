use ndarray::{Array1, ArrayBase, Data, Ix1};

/// Fractional ranks (1-based) of `data`, in input order.
///
/// Tied values share the mean of the ordinal positions they span: a run of
/// `k` equal values starting at sorted position `s` gets `s + (k - 1) / 2`.
/// NaNs of either sign sort after every number and, never comparing equal,
/// each keep their own position.
pub fn rank_data<S>(data: &ArrayBase<S, Ix1>) -> Array1<f64>
where
    S: Data<Elem = f64>,
{
    let n = data.len();
    tracing::trace!(n, "ranking sequence");

    let mut indexed_data: Vec<(usize, f64)> = data.iter().copied().enumerate().collect();
    indexed_data.sort_by(|a, b| {
        a.1.is_nan()
            .cmp(&b.1.is_nan())
            .then_with(|| a.1.total_cmp(&b.1))
    });

    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        let mut j = i;
        while j + 1 < n && indexed_data[j + 1].1 == indexed_data[i].1 {
            j += 1;
        }
        // Mean of the 1-based positions i + 1 ..= j + 1.
        let rank = (i + j) as f64 / 2.0 + 1.0;
        for &(original, _) in &indexed_data[i..=j] {
            ranks[original] = rank;
        }
        i = j + 1;
    }
    Array1::from(ranks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, ArrayView1};

    #[test]
    fn ranks_without_ties() {
        assert_eq!(rank_data(&array![3.2, 2.6, 3.8]), array![2.0, 1.0, 3.0]);
    }

    #[test]
    fn ties_share_average_rank() {
        assert_eq!(rank_data(&array![5.0, 5.0, 1.0]), array![2.5, 2.5, 1.0]);
        assert_eq!(
            rank_data(&array![7.0, 7.0, 7.0, 7.0]),
            array![2.5, 2.5, 2.5, 2.5]
        );
        assert_eq!(
            rank_data(&array![2.0, 1.0, 2.0, 3.0, 2.0, 0.0]),
            array![4.0, 2.0, 4.0, 6.0, 4.0, 1.0]
        );
    }

    #[test]
    fn accepts_views_and_leaves_input_untouched() {
        let values = vec![10.0, -1.0, 4.0, 4.0];
        let ranks = rank_data(&ArrayView1::from(&values));
        assert_eq!(ranks, array![4.0, 1.0, 2.5, 2.5]);
        assert_eq!(values, vec![10.0, -1.0, 4.0, 4.0]);
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(rank_data(&Array1::<f64>::zeros(0)).len(), 0);
        assert_eq!(rank_data(&array![42.0]), array![1.0]);
    }

    #[test]
    fn signed_zeros_tie() {
        assert_eq!(rank_data(&array![0.0, -0.0, 1.0]), array![1.5, 1.5, 3.0]);
    }

    #[test]
    fn nan_does_not_panic() {
        let ranks = rank_data(&array![f64::NAN, 1.0, f64::NAN, 0.5]);
        assert_eq!(ranks[1], 2.0);
        assert_eq!(ranks[3], 1.0);
        assert!(ranks[0] >= 3.0 && ranks[2] >= 3.0);
        assert_ne!(ranks[0], ranks[2]);
    }

    #[test]
    fn negative_nan_ranks_last() {
        let ranks = rank_data(&array![-f64::NAN, 1.0, 0.5]);
        assert_eq!(ranks, array![3.0, 2.0, 1.0]);

        let ranks = rank_data(&array![f64::NAN, -f64::NAN, -3.0]);
        assert_eq!(ranks[2], 1.0);
        assert!(ranks[0] >= 2.0 && ranks[1] >= 2.0);
    }

    #[test]
    fn rank_sum_is_invariant() {
        let ranks = rank_data(&array![1.0, 3.0, 3.0, 2.0, 3.0, 9.0, 2.0]);
        assert_eq!(ranks.sum(), 28.0);
    }
}
