//! # Correlation Data Model
//!
//! The values the engine reads and writes: the boolean relation it consumes,
//! the symmetric overlap counter it accumulates into, and the dense matrix it
//! produces.
//!
//! Design rule: this module is pure data — no logging, no locking, no
//! knowledge of the blending formula.

pub mod boolean_matrix;
pub mod symmetric;
pub mod correlation_matrix;

pub use boolean_matrix::{BooleanMatrix, SparseBooleanMatrix};
pub use symmetric::SymmetricMatrix;
pub use correlation_matrix::CorrelationMatrix;

/// Passes a cell count through if a `Vec<T>` of that many cells can be
/// allocated without wrapping; `None` otherwise (including an already
/// overflowed count).
///
/// `Vec` refuses allocations above `isize::MAX` bytes, so that is the bound.
pub(crate) fn checked_storage<T>(cells: Option<usize>) -> Option<usize> {
    let cells = cells?;
    let bytes = cells.checked_mul(std::mem::size_of::<T>())?;
    (bytes <= isize::MAX as usize).then_some(cells)
}
