//! ShingleSim - string similarity from k-shingle profiles
//!
//! Compares strings through their decomposition into overlapping k-character
//! substrings (k-shingles / q-grams), for fuzzy matching, deduplication and
//! record linkage without the quadratic cost of edit-distance algorithms.
//!
//! # Features
//! - Shingle profiler with a shared per-comparison index space
//! - Q-gram distance (Ukkonen): L1 norm over shingle frequency profiles,
//!   bounding Levenshtein from below (up to a 2k factor) in linear time
//! - Sørensen-Dice similarity and distance over distinct shingle sets
//! - Parallel batch scoring
//! - Unicode support: shingles are character windows, never byte windows
//!
//! # Example
//! ```
//! use shinglesim::{QGram, SorensenDice};
//!
//! let qgram = QGram::new(2)?;
//! assert_eq!(qgram.distance("night", "nacht"), 6.0);
//!
//! let dice = SorensenDice::new(2)?;
//! assert_eq!(dice.similarity("night", "nacht"), 0.25);
//! # Ok::<(), shinglesim::ShingleError>(())
//! ```
//!
//! Metric values are immutable and configured only by `k`; every call builds
//! its own profiling session, so sharing one value across threads is safe.

pub mod algorithms;
pub mod batch;
pub mod error;
pub mod profile;

pub use algorithms::{
    normalize::{normalize_pair, normalize_string, NormalizationMode},
    qgram_distance, sorensen_dice_distance, sorensen_dice_similarity, QGram, Similarity,
    SorensenDice,
};
pub use batch::{batch_dice_similarity, batch_qgram_distance, dice_cdist};
pub use error::ShingleError;
pub use profile::{ShingleProfiler, DEFAULT_SHINGLE_LENGTH};
