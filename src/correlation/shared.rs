//! Shared, recomputable correlation handle.
//!
//! Readers take a read lock per lookup. `recompute()` builds the new matrix
//! without holding any lock and publishes it with one write-lock swap, so a
//! reader sees either the previous complete matrix or the new complete one.

use std::sync::Arc;
use parking_lot::{RwLock, RwLockReadGuard};

use crate::model::{BooleanMatrix, CorrelationMatrix};
use crate::Result;
use super::bidirectional::{fill, BidirectionalConditionalProbability};

/// Cloneable handle to a `BidirectionalConditionalProbability` shared
/// between readers and a recomputing writer.
#[derive(Debug, Clone)]
pub struct SharedCorrelation {
    inner: Arc<RwLock<BidirectionalConditionalProbability>>,
}

impl SharedCorrelation {
    pub fn new(correlation: BidirectionalConditionalProbability) -> Self {
        Self {
            inner: Arc::new(RwLock::new(correlation)),
        }
    }

    /// Rebuild from `entity_data` and publish the result atomically.
    ///
    /// On error the published matrix is unchanged.
    pub fn recompute<M>(&self, entity_data: &M) -> Result<()>
    where
        M: BooleanMatrix + ?Sized,
    {
        let (num_entities, alpha) = {
            let current = self.inner.read();
            (current.num_entities(), current.alpha())
        };

        let mut next = CorrelationMatrix::new(num_entities)?;
        fill(&mut next, entity_data, alpha)?;

        self.inner.write().publish(next);
        Ok(())
    }

    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.inner.read().get(x, y)
    }

    pub fn is_computed(&self) -> bool {
        self.inner.read().is_computed()
    }

    /// Hold a read lock for several lookups against one consistent matrix.
    pub fn read(&self) -> RwLockReadGuard<'_, BidirectionalConditionalProbability> {
        self.inner.read()
    }
}

impl From<BidirectionalConditionalProbability> for SharedCorrelation {
    fn from(correlation: BidirectionalConditionalProbability) -> Self {
        Self::new(correlation)
    }
}

// ============================================================================
// Tests
// ============================================================================
