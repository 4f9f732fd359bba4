//! Correlation configuration.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Default blending exponent: the geometric mean of both directions.
pub const DEFAULT_ALPHA: f32 = 0.5;

/// Parameters for a bidirectional conditional-probability matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrelationConfig {
    /// Blending exponent. Conventionally in `[0, 1]`; other values are
    /// accepted and produce the same exponentiated blend.
    pub alpha: f32,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self { alpha: DEFAULT_ALPHA }
    }
}

impl CorrelationConfig {
    pub fn new(alpha: f32) -> Self {
        Self { alpha }
    }

    /// Parse from JSON, e.g. `{"alpha": 0.3}`. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether alpha lies in the conventional `[0, 1]` range. Logs a warning
    /// if not; the value is still used as given.
    pub fn check(&self) -> bool {
        let conventional = (0.0..=1.0).contains(&self.alpha);
        if !conventional {
            tracing::warn!(alpha = self.alpha, "alpha outside [0, 1]; blend is unconventional");
        }
        conventional
    }
}

// ============================================================================
// Tests
// ============================================================================
