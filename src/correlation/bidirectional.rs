//! Bidirectional conditional probability.
//!
//! For entities `x` and `y` sharing `overlap(x, y)` contexts:
//!
//! ```text
//! x_given_y = overlap(x, y) / count(x)
//! y_given_x = overlap(x, y) / count(y)
//! [x, y]    = x_given_y^alpha · y_given_x^(1 - alpha)
//! [y, x]    = y_given_x^alpha · x_given_y^(1 - alpha)
//! ```
//!
//! `x_given_y` is normalized by `x`'s own count. The name is kept as is;
//! existing consumers depend on this exact arithmetic.
//!
//! The diagonal is always 1. An entity with no contexts divides by zero and
//! leaves non-finite values in its row and column; callers that cannot rule
//! this out should check `entities_without_occurrences` first.

use crate::config::CorrelationConfig;
use crate::model::{BooleanMatrix, CorrelationMatrix, SymmetricMatrix};
use crate::{Error, Result};
use super::{blend, BinaryDataCorrelation};

/// Asymmetric correlation matrix of alpha-blended conditional probabilities.
#[derive(Debug, Clone)]
pub struct BidirectionalConditionalProbability {
    alpha: f32,
    matrix: CorrelationMatrix,
    computed: bool,
}

impl BidirectionalConditionalProbability {
    /// Allocate an uncomputed matrix for `num_entities` entities.
    ///
    /// Fails with `TooManyEntities` when `num_entities²` cells cannot be
    /// addressed. Alpha outside `[0, 1]` is logged, not rejected.
    pub fn new(num_entities: usize, alpha: f32) -> Result<Self> {
        Self::from_config(num_entities, &CorrelationConfig::new(alpha))
    }

    pub fn from_config(num_entities: usize, config: &CorrelationConfig) -> Result<Self> {
        config.check();
        let matrix = CorrelationMatrix::new(num_entities).inspect_err(|_| {
            tracing::error!(num_entities, "Too many entities: {num_entities}");
        })?;

        Ok(Self {
            alpha: config.alpha,
            matrix,
            computed: false,
        })
    }

    /// Build and fill a matrix sized to `entity_data`'s rows.
    pub fn create<M>(entity_data: &M, alpha: f32) -> Result<Self>
    where
        M: BooleanMatrix + ?Sized,
    {
        let mut correlation = Self::new(entity_data.num_rows(), alpha)?;
        correlation.compute_correlations(entity_data)?;
        Ok(correlation)
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn num_entities(&self) -> usize {
        self.matrix.num_entities()
    }

    /// Whether a full pass has completed. Until then every entry reads 0.
    pub fn is_computed(&self) -> bool {
        self.computed
    }

    /// Correlation of `x` with `y`. Panics if either index is out of range.
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.matrix.get(x, y)
    }

    pub fn matrix(&self) -> &CorrelationMatrix {
        &self.matrix
    }

    /// Consume the measure, keeping only its values.
    pub fn into_matrix(self) -> CorrelationMatrix {
        self.matrix
    }

    /// Swap in a completely filled matrix for the same entity count and alpha.
    pub(crate) fn publish(&mut self, matrix: CorrelationMatrix) {
        debug_assert_eq!(matrix.num_entities(), self.matrix.num_entities());
        self.matrix = matrix;
        self.computed = true;
    }
}

impl BinaryDataCorrelation for BidirectionalConditionalProbability {
    fn compute_correlations<M>(&mut self, entity_data: &M) -> Result<()>
    where
        M: BooleanMatrix + ?Sized,
    {
        let mut next = CorrelationMatrix::new(self.num_entities())?;
        fill(&mut next, entity_data, self.alpha)?;
        self.publish(next);
        Ok(())
    }

    fn compute_correlation(&self, vector_i: &[usize], vector_j: &[usize]) -> f32 {
        super::compute_correlation(vector_i, vector_j, self.alpha)
    }
}

// ============================================================================
// Computation pass
// ============================================================================

/// Overwrite every entry of `matrix` from `entity_data`.
///
/// All checks and allocations happen before the first write, so an error
/// leaves `matrix` untouched.
pub(crate) fn fill<M>(matrix: &mut CorrelationMatrix, entity_data: &M, alpha: f32) -> Result<()>
where
    M: BooleanMatrix + ?Sized,
{
    let num_entities = matrix.num_entities();
    if entity_data.num_rows() != num_entities {
        return Err(Error::DimensionMismatch {
            expected: num_entities,
            got: entity_data.num_rows(),
        });
    }

    let contexts = entity_data.transpose();
    tracing::debug!(
        num_entities,
        num_contexts = contexts.num_rows(),
        alpha,
        "computing bidirectional conditional probabilities"
    );

    let overlap = accumulate_overlap(&contexts, num_entities)?;

    matrix.set_diagonal(1.0);

    for x in 0..num_entities {
        let count_x = entity_data.num_entries_by_row(x) as f64;
        for y in 0..x {
            let shared = overlap.get(x, y) as f64;
            let x_given_y = shared / count_x;
            let y_given_x = shared / entity_data.num_entries_by_row(y) as f64;

            matrix.set(x, y, blend(x_given_y, y_given_x, alpha));
            matrix.set(y, x, blend(y_given_x, x_given_y, alpha));
        }
    }

    tracing::debug!(num_entities, "correlation matrix computed");
    Ok(())
}

/// Count, for every unordered pair of entities, the contexts they share.
/// `overlap(x, x)` is the number of contexts containing `x`.
///
/// `contexts` has one row per context listing the entities in it. Counts are
/// `u64`, so they cannot wrap for any context count that fits in memory.
pub fn accumulate_overlap<M>(contexts: &M, num_entities: usize) -> Result<SymmetricMatrix<u64>>
where
    M: BooleanMatrix + ?Sized,
{
    let mut overlap = SymmetricMatrix::<u64>::new(num_entities)?;

    for context in 0..contexts.num_rows() {
        let entities = contexts.entries_by_row(context);
        for (i, &x) in entities.iter().enumerate() {
            // (x, y) and (y, x) share a cell; visit each unordered pair once.
            for &y in &entities[..=i] {
                overlap.increment(x, y);
            }
        }
    }

    Ok(overlap)
}

// ============================================================================
// Tests
// ============================================================================
