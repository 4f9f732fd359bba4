//! # Correlation over Binary Data
//!
//! `BinaryDataCorrelation` is the capability a host pipeline needs from a
//! similarity measure: fill a matrix from a boolean relation, or score two
//! arbitrary entity collections directly.
//!
//! ## Implementations
//!
//! | Measure | Module | Description |
//! |---------|--------|-------------|
//! | `BidirectionalConditionalProbability` | `bidirectional` | Alpha-blended overlap ratios, asymmetric |
//!
//! `SharedCorrelation` wraps a measure for hosts that read from several
//! threads while occasionally recomputing.

pub mod bidirectional;
pub mod shared;

use hashbrown::HashSet;

use crate::model::BooleanMatrix;
use crate::Result;

pub use bidirectional::{accumulate_overlap, BidirectionalConditionalProbability};
pub use shared::SharedCorrelation;

// ============================================================================
// Trait
// ============================================================================

/// A correlation measure computed from binary co-occurrence data.
pub trait BinaryDataCorrelation {
    /// Recompute every entry from `entity_data`, whose rows are entities and
    /// whose columns are contexts.
    fn compute_correlations<M>(&mut self, entity_data: &M) -> Result<()>
    where
        M: BooleanMatrix + ?Sized;

    /// Correlation of two entities given directly as their context collections.
    fn compute_correlation(&self, vector_i: &[usize], vector_j: &[usize]) -> f32;
}

// ============================================================================
// Free functions
// ============================================================================

/// Alpha-blended conditional probability of two context collections.
///
/// Counts the contexts of `vector_j` also present in `vector_i`, then
/// normalizes that overlap by each collection's own size:
///
/// ```text
/// (overlap / |i|)^alpha · (overlap / |j|)^(1 - alpha)
/// ```
///
/// Both collections are expected to be duplicate-free. A repeated element
/// still counts toward its collection's size, and one repeated in `vector_j`
/// counts toward the overlap once per occurrence. An empty collection yields
/// a non-finite result.
pub fn compute_correlation(vector_i: &[usize], vector_j: &[usize], alpha: f32) -> f32 {
    let set_i: HashSet<usize> = vector_i.iter().copied().collect();
    let overlap = vector_j.iter().filter(|k| set_i.contains(*k)).count() as f64;

    blend(
        overlap / vector_i.len() as f64,
        overlap / vector_j.len() as f64,
        alpha,
    )
}

/// Entities with no context at all. Any of these makes its row and column
/// of the correlation matrix non-finite.
pub fn entities_without_occurrences<M>(entity_data: &M) -> Vec<usize>
where
    M: BooleanMatrix + ?Sized,
{
    (0..entity_data.num_rows())
        .filter(|&entity| entity_data.num_entries_by_row(entity) == 0)
        .collect()
}

/// `forward^alpha · backward^(1 - alpha)`, evaluated in `f64`.
#[inline]
pub(crate) fn blend(forward: f64, backward: f64, alpha: f32) -> f32 {
    let one_minus_alpha = 1.0 - alpha;
    (forward.powf(f64::from(alpha)) * backward.powf(f64::from(one_minus_alpha))) as f32
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SparseBooleanMatrix;

    #[test]
    fn test_self_correlation_is_one() {
        let v = [1, 4, 9, 16];
        assert_eq!(compute_correlation(&v, &v, 0.5), 1.0);
    }

    #[test]
    fn test_disjoint_is_zero() {
        assert_eq!(compute_correlation(&[0, 1], &[2, 3], 0.5), 0.0);
    }

    #[test]
    fn test_normalizes_by_each_side() {
        // overlap 1, |i| = 2, |j| = 1
        let i = [0, 1];
        let j = [1];
        assert_eq!(compute_correlation(&i, &j, 1.0), 0.5);
        assert_eq!(compute_correlation(&i, &j, 0.0), 1.0);
        assert!((compute_correlation(&i, &j, 0.5) - 0.5f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_empty_collection_is_not_finite() {
        assert!(!compute_correlation(&[], &[1], 0.5).is_finite());
    }

    #[test]
    fn test_duplicates_count_per_occurrence() {
        // |i| = 2 with a repeat, overlap 1
        assert_eq!(compute_correlation(&[1, 1], &[1], 1.0), 0.5);
        // |j| = 2 with a repeat, overlap 2
        assert_eq!(compute_correlation(&[1], &[1, 1], 1.0), 2.0);
        assert_eq!(compute_correlation(&[1], &[1, 1], 0.0), 1.0);
    }

    #[test]
    fn test_entities_without_occurrences() {
        let data = SparseBooleanMatrix::from_rows([vec![0], vec![], vec![1, 2], vec![]]);
        assert_eq!(entities_without_occurrences(&data), vec![1, 3]);
    }
}
