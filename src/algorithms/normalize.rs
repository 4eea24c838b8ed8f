//! String normalization utilities
//!
//! The metrics themselves never normalize: shingles are exact character
//! windows. These helpers are for callers that want case-insensitive or
//! Unicode-insensitive comparison, and are threaded through the batch API
//! as an opt-in preprocessing step.

use serde::{Deserialize, Serialize};

/// Normalization mode for string preprocessing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalizationMode {
    /// Convert to lowercase only
    Lowercase,
    /// Apply Unicode NFKD normalization
    UnicodeNFKD,
    /// Remove all whitespace
    RemoveWhitespace,
    /// NFKD, then lowercase, then strip whitespace
    Strict,
}

/// Normalize a string according to the specified mode
#[must_use]
pub fn normalize_string(s: &str, mode: NormalizationMode) -> String {
    match mode {
        NormalizationMode::Lowercase => s.to_lowercase(),
        NormalizationMode::UnicodeNFKD => {
            use unicode_normalization::UnicodeNormalization;
            s.nfkd().collect()
        }
        NormalizationMode::RemoveWhitespace => s.chars().filter(|c| !c.is_whitespace()).collect(),
        NormalizationMode::Strict => {
            use unicode_normalization::UnicodeNormalization;
            s.nfkd()
                .collect::<String>()
                .to_lowercase()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect()
        }
    }
}

/// Normalize both strings according to the specified mode
#[must_use]
pub fn normalize_pair(a: &str, b: &str, mode: NormalizationMode) -> (String, String) {
    (normalize_string(a, mode), normalize_string(b, mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase() {
        assert_eq!(
            normalize_string("Night Watch", NormalizationMode::Lowercase),
            "night watch"
        );
    }

    #[test]
    fn test_unicode_nfkd() {
        // Precomposed e-acute (U+00E9) decomposes to e + combining acute.
        assert_eq!(
            normalize_string("caf\u{e9}", NormalizationMode::UnicodeNFKD),
            "cafe\u{301}"
        );
    }

    #[test]
    fn test_remove_whitespace() {
        assert_eq!(
            normalize_string("night watch", NormalizationMode::RemoveWhitespace),
            "nightwatch"
        );
    }

    #[test]
    fn test_strict() {
        assert_eq!(
            normalize_string("  Night Watch ", NormalizationMode::Strict),
            "nightwatch"
        );
    }

    #[test]
    fn test_normalize_pair() {
        let (a, b) = normalize_pair("Night", "NACHT", NormalizationMode::Lowercase);
        assert_eq!(a, "night");
        assert_eq!(b, "nacht");
    }
}
