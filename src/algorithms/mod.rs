//! Shingle-profile string metrics.
//!
//! Each metric is implemented as a standalone function for composability,
//! plus an immutable value type configured only by the shingle length `k`.

pub mod normalize;
pub mod qgram;
pub mod sorensen_dice;

pub use qgram::*;
pub use sorensen_dice::*;

/// Trait for normalized similarity metrics.
/// Returns a value between 0.0 (completely different) and 1.0 (identical).
pub trait Similarity: Send + Sync {
    fn similarity(&self, a: &str, b: &str) -> f64;

    /// Convenience method for distance (1.0 - similarity)
    fn distance(&self, a: &str, b: &str) -> f64 {
        1.0 - self.similarity(a, b)
    }

    /// Name of the algorithm for debugging/logging
    fn name(&self) -> &'static str;
}
