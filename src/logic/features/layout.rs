//! Feature Layout - Centralized Feature Definition
//!
//! **This file controls the URL feature schema.**
//!
//! ## Rules (NEVER break these):
//! 1. Add feature -> increment URL_FEATURE_VERSION
//! 2. Change order -> increment URL_FEATURE_VERSION
//! 3. Remove feature -> increment URL_FEATURE_VERSION
//!
//! The trained URL model expects exactly this layout. The layout hash is
//! logged when an artifact loads so a mismatch between extractor and model
//! is at least visible in the logs; runtime enforcement is deliberately not
//! attempted (the contract lives at training time).

use crc32fast::Hasher;

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
/// MUST be incremented when layout changes
pub const URL_FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in the exact order they appear in the vector.
/// This is the SINGLE SOURCE OF TRUTH for the URL feature layout.
pub const URL_FEATURE_LAYOUT: &[&str] = &[
    "url_length",       // 0: Total URL length in characters
    "domain_dot_count", // 1: Dots in the netloc
    "hyphen_count",     // 2: Hyphens anywhere in the URL
    "has_at_symbol",    // 3: 1.0 if "@" present (obfuscation)
    "insecure_http",    // 4: 1.0 if "http" present without "https"
    "domain_has_digit", // 5: 1.0 if the netloc contains a digit
];

/// Total number of URL features
/// IMPORTANT: Must match URL_FEATURE_LAYOUT.len()!
pub const URL_FEATURE_COUNT: usize = 6;

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// CRC32 hash over version + feature names, used to tag artifacts and logs.
pub fn layout_hash() -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(&[URL_FEATURE_VERSION]);
    for name in URL_FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }
    hasher.finalize()
}

/// Index of a feature by name
pub fn feature_index(name: &str) -> Option<usize> {
    URL_FEATURE_LAYOUT.iter().position(|&n| n == name)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_count() {
        assert_eq!(URL_FEATURE_COUNT, 6);
        assert_eq!(URL_FEATURE_LAYOUT.len(), URL_FEATURE_COUNT);
    }

    #[test]
    fn test_layout_hash_consistency() {
        assert_eq!(layout_hash(), layout_hash());
    }

    #[test]
    fn test_layout_hash_non_zero() {
        assert_ne!(layout_hash(), 0);
    }

    #[test]
    fn test_feature_index() {
        assert_eq!(feature_index("url_length"), Some(0));
        assert_eq!(feature_index("domain_has_digit"), Some(5));
        assert_eq!(feature_index("nonexistent"), None);
    }
}
