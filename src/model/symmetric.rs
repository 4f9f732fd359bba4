//! Symmetric square matrix with triangular storage.
//!
//! Only the lower triangle (including the diagonal) is kept, so `(x, y)` and
//! `(y, x)` address the same cell and memory is `n(n+1)/2` instead of `n²`.

use std::ops::AddAssign;

use crate::{Error, Result};
use super::checked_storage;

/// Symmetric `n × n` matrix; one stored value per unordered pair.
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricMatrix<T> {
    size: usize,
    data: Vec<T>,
}

impl<T: Copy + Default> SymmetricMatrix<T> {
    /// Zero-filled matrix for `size` entities.
    ///
    /// Fails with `TooManyEntities` when the triangle cannot be allocated.
    pub fn new(size: usize) -> Result<Self> {
        let cells = size
            .checked_add(1)
            .and_then(|s1| {
                // n(n+1)/2 without overflowing the intermediate product.
                if size % 2 == 0 { (size / 2).checked_mul(s1) } else { size.checked_mul(s1 / 2) }
            });
        let cells = checked_storage::<T>(cells)
            .ok_or(Error::TooManyEntities { num_entities: size })?;

        Ok(Self {
            size,
            data: vec![T::default(); cells],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) {
        let i = self.index(x, y);
        self.data[i] = value;
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.size && y < self.size,
            "index ({x}, {y}) out of bounds for symmetric matrix of size {}",
            self.size
        );
        let (hi, lo) = if x >= y { (x, y) } else { (y, x) };
        hi * (hi + 1) / 2 + lo
    }
}

impl<T: Copy + Default + AddAssign + From<u8>> SymmetricMatrix<T> {
    /// Add one to the shared cell of `(x, y)` and `(y, x)`.
    pub fn increment(&mut self, x: usize, y: usize) {
        let i = self.index(x, y);
        self.data[i] += T::from(1);
    }
}

// ============================================================================
// Tests
// ============================================================================
