//! Property tests for the correlation invariants.

use bicorr::{
    BidirectionalConditionalProbability, BooleanMatrix, SparseBooleanMatrix, accumulate_overlap,
    compute_correlation,
};
use proptest::prelude::*;

/// Random relation where every entity has at least one context.
fn relation() -> impl Strategy<Value = SparseBooleanMatrix> {
    (1usize..12, 1usize..10).prop_flat_map(|(entities, contexts)| {
        prop::collection::vec(prop::collection::vec(0..contexts, 1..6), entities)
            .prop_map(|rows| SparseBooleanMatrix::from_rows(rows))
    })
}

proptest! {
    #[test]
    fn overlap_is_symmetric(data in relation()) {
        let n = data.num_rows();
        let overlap = accumulate_overlap(&data.transpose(), n).unwrap();
        for x in 0..n {
            prop_assert_eq!(overlap.get(x, x) as usize, data.num_entries_by_row(x));
            for y in 0..n {
                prop_assert_eq!(overlap.get(x, y), overlap.get(y, x));
            }
        }
    }

    #[test]
    fn diagonal_is_one(data in relation(), alpha in -1.0f32..2.0) {
        let cp = BidirectionalConditionalProbability::create(&data, alpha).unwrap();
        for i in 0..data.num_rows() {
            prop_assert_eq!(cp.get(i, i), 1.0);
        }
    }

    #[test]
    fn alpha_half_is_symmetric(data in relation()) {
        let cp = BidirectionalConditionalProbability::create(&data, 0.5).unwrap();
        let n = data.num_rows();
        for x in 0..n {
            for y in 0..n {
                prop_assert_eq!(cp.get(x, y), cp.get(y, x));
            }
        }
    }

    #[test]
    fn alpha_one_and_zero_are_swapped_ratios(data in relation()) {
        let one = BidirectionalConditionalProbability::create(&data, 1.0).unwrap();
        let zero = BidirectionalConditionalProbability::create(&data, 0.0).unwrap();
        let overlap = accumulate_overlap(&data.transpose(), data.num_rows()).unwrap();

        for x in 0..data.num_rows() {
            for y in 0..data.num_rows() {
                if x == y {
                    continue;
                }
                let shared = overlap.get(x, y) as f64;
                let x_given_y = (shared / data.num_entries_by_row(x) as f64) as f32;
                let y_given_x = (shared / data.num_entries_by_row(y) as f64) as f32;

                prop_assert_eq!(one.get(x, y), x_given_y);
                prop_assert_eq!(one.get(y, x), y_given_x);
                prop_assert_eq!(zero.get(x, y), y_given_x);
                prop_assert_eq!(zero.get(y, x), x_given_y);
            }
        }
    }

    #[test]
    fn values_are_probabilities(data in relation(), alpha in 0.0f32..=1.0) {
        let cp = BidirectionalConditionalProbability::create(&data, alpha).unwrap();
        for x in 0..data.num_rows() {
            for &v in cp.matrix().row(x) {
                prop_assert!((0.0..=1.0).contains(&v), "value {} out of [0, 1]", v);
            }
        }
    }

    #[test]
    fn pairwise_self_correlation_is_one(v in prop::collection::btree_set(0usize..100, 1..20)) {
        let v: Vec<usize> = v.into_iter().collect();
        prop_assert_eq!(compute_correlation(&v, &v, 0.5), 1.0);
    }
}
