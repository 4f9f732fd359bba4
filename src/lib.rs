//! # bicorr — Bidirectional Conditional-Probability Correlation
//!
//! Builds a dense, asymmetric entity × entity similarity matrix from binary
//! co-occurrence data. For every ordered pair `(x, y)` the value blends the
//! two directional overlap ratios with a tunable exponent `alpha`:
//!
//! ```text
//! x_given_y = overlap(x, y) / count(x)
//! y_given_x = overlap(x, y) / count(y)
//! [x, y]    = x_given_y^alpha · y_given_x^(1 - alpha)
//! [y, x]    = y_given_x^alpha · x_given_y^(1 - alpha)
//! ```
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `BooleanMatrix` is the contract between the engine and the data source
//! 2. **Pure storage**: `SymmetricMatrix` and `CorrelationMatrix` are plain values with checked sizes
//! 3. **Build, then publish**: a pass fills a fresh matrix and swaps it in only when complete
//!
//! ## Quick Start
//!
//! ```rust
//! use bicorr::{BidirectionalConditionalProbability, SparseBooleanMatrix};
//!
//! # fn example() -> bicorr::Result<()> {
//! // Entities 0 (A), 1 (B), 2 (C); contexts {A,B} and {A,B,C}.
//! let data = SparseBooleanMatrix::from_pairs(3, 2, [(0, 0), (1, 0), (0, 1), (1, 1), (2, 1)]);
//!
//! let engine = BidirectionalConditionalProbability::create(&data, 0.5)?;
//! assert_eq!(engine.get(0, 1), 1.0);
//! assert!((engine.get(0, 2) - 0.5f32.sqrt()).abs() < 1e-6);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod correlation;
pub mod config;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{BooleanMatrix, SparseBooleanMatrix, SymmetricMatrix, CorrelationMatrix};

// ============================================================================
// Re-exports: Correlation
// ============================================================================

pub use correlation::{
    BinaryDataCorrelation, BidirectionalConditionalProbability, SharedCorrelation,
    accumulate_overlap, compute_correlation, entities_without_occurrences,
};

// ============================================================================
// Re-exports: Configuration
// ============================================================================

pub use config::CorrelationConfig;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Too many entities: {num_entities}")]
    TooManyEntities { num_entities: usize },

    #[error("Dimension mismatch: expected {expected} entities, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
