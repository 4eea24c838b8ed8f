//! Q-gram distance, as defined by Ukkonen in "Approximate string-matching
//! with q-grams and maximal matches".
//!
//! The distance between two strings is the L1 norm of the difference of
//! their k-shingle profiles: SUM |v1[i] - v2[i]|, where v1 and v2 are
//! occurrence counts over a shared shingle index space. Scaled by 1/(2k),
//! the q-gram distance is a lower bound on Levenshtein distance, and it is
//! computed in O(|a| + |b|) where Levenshtein requires O(|a| * |b|).
//!
//! # Complexity
//! - Time: O(|a| + |b|) for profiling and the aggregation pass
//! - Space: O(distinct shingles) for the session index

use crate::error::ShingleError;
use crate::profile::{ShingleProfiler, DEFAULT_SHINGLE_LENGTH};

/// Q-gram distance calculator over k-character shingles.
///
/// Immutable once constructed; each call builds its own profiling session,
/// so one value can be shared freely across threads.
///
/// Unlike the normalized metrics this distance is unbounded: it counts
/// mismatched shingle occurrences, so its range grows with input length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QGram {
    k: usize,
}

impl Default for QGram {
    fn default() -> Self {
        Self {
            k: DEFAULT_SHINGLE_LENGTH,
        }
    }
}

impl QGram {
    /// Create a Q-gram distance with shingle length `k`.
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

    /// L1 distance between the shingle profiles of `a` and `b`.
    ///
    /// Symmetric and non-negative; 0.0 exactly when the two strings have
    /// identical shingle multisets. Strings shorter than `k` characters
    /// have an empty profile, so two such strings are at distance 0.0 and
    /// the distance from an empty profile to any other equals that
    /// profile's total occurrence count.
    #[must_use]
    pub fn distance(&self, a: &str, b: &str) -> f64 {
        let mut session = ShingleProfiler::with_validated(self.k);
        let profile_a = session.profile(a);
        let profile_b = session.profile(b);

        // Treat the shorter vector as zero-padded: an unassigned index
        // means zero occurrences.
        let length = profile_a.len().max(profile_b.len());
        let mut d = 0u64;
        for i in 0..length {
            let count_a = profile_a.get(i).copied().unwrap_or(0);
            let count_b = profile_b.get(i).copied().unwrap_or(0);
            d += u64::from(count_a.abs_diff(count_b));
        }

        d as f64
    }
}

/// Q-gram distance between `a` and `b` using `k`-character shingles.
///
/// # Errors
/// Returns [`ShingleError::InvalidShingleLength`] if `k` is zero.
pub fn qgram_distance(a: &str, b: &str, k: usize) -> Result<f64, ShingleError> {
    QGram::new(k).map(|metric| metric.distance(a, b))
}
