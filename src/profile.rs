//! K-shingle profiling.
//!
//! A shingle (also called a q-gram or k-gram) is a contiguous run of exactly
//! `k` characters extracted with a sliding window. The profiler assigns each
//! distinct shingle a stable index in discovery order and produces frequency
//! vectors over that index space. Shingles are plain character windows: no
//! padding, no case folding, no Unicode normalization. Callers that want
//! preprocessed comparison apply [`crate::algorithms::normalize`] first.

use ahash::AHashMap;

use crate::error::ShingleError;

/// Shingle length used when none is configured.
pub const DEFAULT_SHINGLE_LENGTH: usize = 3;

/// Per-comparison shingle indexing session.
///
/// Both strings of a comparison must be profiled through the same session so
/// that their frequency vectors share one shingle-to-index assignment; vectors
/// from different sessions are not comparable. Sessions are cheap to build,
/// and the metric types create a fresh one per call, which keeps calls
/// independent and makes a shared metric value safe to use from many threads.
#[derive(Debug, Clone)]
pub struct ShingleProfiler {
    k: usize,
    index: AHashMap<String, usize>,
}

impl ShingleProfiler {
    /// Start a session for shingles of `k` characters.
    ///
    /// # Errors
    /// Returns [`ShingleError::InvalidShingleLength`] if `k` is zero.
    pub fn new(k: usize) -> Result<Self, ShingleError> {
        if k == 0 {
            return Err(ShingleError::InvalidShingleLength { k });
        }
        Ok(Self::with_validated(k))
    }

    /// Internal constructor for the metric types, which validate `k` once
    /// at their own construction time.
    pub(crate) fn with_validated(k: usize) -> Self {
        debug_assert!(k >= 1);
        Self {
            k,
            index: AHashMap::new(),
        }
    }

    /// Configured shingle length.
    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of distinct shingles discovered so far in this session.
    #[must_use]
    pub fn distinct_shingles(&self) -> usize {
        self.index.len()
    }

    /// Enumerate the shingle occurrences of `s` in window order.
    ///
    /// Repeated shingles appear once per occurrence. This is exactly the
    /// enumeration [`Self::profile`] counts; it does not touch the
    /// session's index state.
    #[must_use]
    pub fn shingles(&self, s: &str) -> Vec<String> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() < self.k {
            return vec![];
        }
        chars
            .windows(self.k)
            .map(|window| window.iter().collect())
            .collect()
    }

    /// Build the frequency vector for `s` over this session's index space.
    ///
    /// Slides a `k`-character window across `s` at every offset. The first
    /// occurrence of a distinct shingle (counting all strings profiled in
    /// this session) is assigned the next unused index, starting at 0;
    /// further occurrences increment the count at that index.
    ///
    /// The returned vector covers every index assigned in the session so
    /// far, in discovery order, so a later profile can be longer than an
    /// earlier one. Positions for shingles absent from `s` hold zero.
    ///
    /// A string shorter than `k` characters contributes no shingles; a
    /// string of `L >= k` characters contributes exactly `L - k + 1`
    /// occurrences, repeats counted.
    pub fn profile(&mut self, s: &str) -> Vec<u32> {
        let mut counts = vec![0u32; self.index.len()];

        for shingle in self.shingles(s) {
            let next = self.index.len();
            let idx = *self.index.entry(shingle).or_insert(next);
            if idx == counts.len() {
                counts.push(0);
            }
            counts[idx] += 1;
        }

        counts
    }
}
