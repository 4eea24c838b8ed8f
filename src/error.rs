//! Error types for shingle configuration and batch input validation.

use thiserror::Error;

/// Errors reported by metric construction and batch scoring.
///
/// Metric computation itself is total: once a metric value exists, every
/// `(a, b)` pair produces a finite scalar. Errors only arise from invalid
/// configuration or mismatched batch inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShingleError {
    /// Shingle length of zero at construction time. Rejected outright
    /// rather than clamped to some minimum.
    #[error("shingle length must be at least 1, got {k}")]
    InvalidShingleLength { k: usize },

    /// Paired batch inputs of unequal length.
    #[error("paired inputs must have equal length: left has {left}, right has {right}")]
    LengthMismatch { left: usize, right: usize },
}
