//! Sørensen-Dice coefficient over k-shingle sets.
//!
//! Similar to the Jaccard index: the strings are reduced to their sets of
//! distinct k-shingles (occurrence counts beyond presence are ignored), then
//! similarity is 2 * |A inter B| / (|A| + |B|) and distance is its
//! complement. Attention: Sorensen-Dice distance does not satisfy the
//! triangle inequality.

use crate::algorithms::Similarity;
use crate::error::ShingleError;
use crate::profile::{ShingleProfiler, DEFAULT_SHINGLE_LENGTH};

/// Sørensen-Dice similarity calculator over k-character shingles.
///
/// Set-based, unlike [`crate::QGram`]: two strings whose distinct shingle
/// sets coincide score 1.0 even when occurrence counts differ. Immutable
/// once constructed; each call builds its own profiling session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SorensenDice {
    k: usize,
}

impl Default for SorensenDice {
    fn default() -> Self {
        Self {
            k: DEFAULT_SHINGLE_LENGTH,
        }
    }
}

impl SorensenDice {
    /// Create a Sørensen-Dice metric with shingle length `k`.
    ///
    /// # Errors
    /// Returns [`ShingleError::InvalidShingleLength`] if `k` is zero.
    pub fn new(k: usize) -> Result<Self, ShingleError> {
        if k == 0 {
            return Err(ShingleError::InvalidShingleLength { k });
        }
        Ok(Self { k })
    }

    /// Configured shingle length.
    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Similarity in [0, 1]: 2 * |A inter B| / (|A| + |B|) over the two
    /// strings' distinct shingle sets.
    ///
    /// When both strings are shorter than `k` characters neither has any
    /// shingles and the formula degenerates to 0/0. That case is defined
    /// here as 1.0: at this granularity the strings are vacuously
    /// identical. The result is always finite, never NaN.
    #[must_use]
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return 1.0;
        }

        let mut session = ShingleProfiler::with_validated(self.k);
        let profile_a = session.profile(a);
        let profile_b = session.profile(b);

        let length = profile_a.len().max(profile_b.len());
        let mut inter = 0usize;
        let mut sum = 0usize;
        for i in 0..length {
            let in_a = profile_a.get(i).copied().unwrap_or(0) > 0;
            let in_b = profile_b.get(i).copied().unwrap_or(0) > 0;
            if in_a && in_b {
                inter += 1;
            }
            if in_a {
                sum += 1;
            }
            if in_b {
                sum += 1;
            }
        }

        if sum == 0 {
            return 1.0;
        }
        2.0 * inter as f64 / sum as f64
    }

    /// Complement of [`Self::similarity`], in [0, 1].
    #[must_use]
    pub fn distance(&self, a: &str, b: &str) -> f64 {
        1.0 - self.similarity(a, b)
    }
}

impl Similarity for SorensenDice {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        SorensenDice::similarity(self, a, b)
    }

    fn name(&self) -> &'static str {
        "sorensen_dice"
    }
}

/// Sørensen-Dice similarity between `a` and `b` using `k`-character shingles.
///
/// # Errors
/// Returns [`ShingleError::InvalidShingleLength`] if `k` is zero.
pub fn sorensen_dice_similarity(a: &str, b: &str, k: usize) -> Result<f64, ShingleError> {
    SorensenDice::new(k).map(|metric| metric.similarity(a, b))
}

/// Sørensen-Dice distance (1 - similarity) between `a` and `b`.
///
/// # Errors
/// Returns [`ShingleError::InvalidShingleLength`] if `k` is zero.
pub fn sorensen_dice_distance(a: &str, b: &str, k: usize) -> Result<f64, ShingleError> {
    SorensenDice::new(k).map(|metric| metric.distance(a, b))
}
