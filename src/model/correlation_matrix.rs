//! Dense asymmetric correlation matrix.

use crate::{Error, Result};
use super::checked_storage;

/// Dense row-major `n × n` matrix of `f32` correlations.
///
/// `[x, y]` and `[y, x]` are independent cells. Construction checks that
/// `n²` cells fit in memory addressing before allocating anything.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    num_entities: usize,
    data: Vec<f32>,
}

impl CorrelationMatrix {
    /// Zero-filled matrix for `num_entities` entities.
    pub fn new(num_entities: usize) -> Result<Self> {
        let cells = checked_storage::<f32>(num_entities.checked_mul(num_entities))
            .ok_or(Error::TooManyEntities { num_entities })?;

        Ok(Self {
            num_entities,
            data: vec![0.0; cells],
        })
    }

    pub fn num_entities(&self) -> usize {
        self.num_entities
    }

    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        let i = self.index(x, y);
        self.data[i] = value;
    }

    /// Correlations of `x` with every entity, indexed by the other entity.
    pub fn row(&self, x: usize) -> &[f32] {
        assert!(x < self.num_entities, "row {x} out of bounds for {} entities", self.num_entities);
        let start = x * self.num_entities;
        &self.data[start..start + self.num_entities]
    }

    pub fn set_diagonal(&mut self, value: f32) {
        for i in 0..self.num_entities {
            self.set(i, i, value);
        }
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.num_entities && y < self.num_entities,
            "index ({x}, {y}) out of bounds for {} entities",
            self.num_entities
        );
        x * self.num_entities + y
    }
}

// ============================================================================
// Tests
// ============================================================================
