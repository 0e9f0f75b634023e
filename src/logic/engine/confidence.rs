//! Confidence Calculator
//!
//! The single source of truth for confidence formatting. No other module
//! formats percentages or owns the fixed literals.

use crate::logic::model::ProbabilityVector;

// ============================================================================
// FIXED LITERALS
// ============================================================================

/// Whitelist hit
pub const CONFIDENCE_TRUSTED: &str = "100% (Trusted)";

/// Trigger phrase hit
pub const CONFIDENCE_KEYWORD: &str = "100% (Keyword Detected)";

/// Classifier has no calibrated probability output
pub const CONFIDENCE_UNAVAILABLE: &str = "N/A";

/// Model missing or failing
pub const CONFIDENCE_DEGRADED: &str = "0%";

// ============================================================================
// FORMATTING
// ============================================================================

/// Percentage of the winning class, one decimal place, or `"N/A"` when the
/// classifier cannot estimate probabilities.
///
/// For a binary classifier whose probabilities sum to 1, the result always
/// lies in `["50.0%".."100.0%"]`.
pub fn confidence_from_probability(probs: Option<ProbabilityVector>) -> String {
    match probs {
        Some(p) => format!("{:.1}%", p.max() * 100.0),
        None => CONFIDENCE_UNAVAILABLE.to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_decimal_place() {
        let probs = ProbabilityVector::new(0.123, 0.877);
        assert_eq!(confidence_from_probability(Some(probs)), "87.7%");
    }

    #[test]
    fn test_unavailable_is_na() {
        assert_eq!(confidence_from_probability(None), CONFIDENCE_UNAVAILABLE);
    }

    #[test]
    fn test_even_split_is_fifty() {
        let probs = ProbabilityVector::new(0.5, 0.5);
        assert_eq!(confidence_from_probability(Some(probs)), "50.0%");
    }

    #[test]
    fn test_certain_is_hundred() {
        let probs = ProbabilityVector::new(0.0, 1.0);
        assert_eq!(confidence_from_probability(Some(probs)), "100.0%");
    }

    #[test]
    fn test_binary_confidence_range() {
        // max(p, 1-p) is always >= 0.5, so formatted confidence stays in
        // the 50.0%..100.0% band
        for i in 0..=100 {
            let p = i as f32 / 100.0;
            let s = confidence_from_probability(Some(ProbabilityVector::new(p, 1.0 - p)));
            let value: f32 = s.trim_end_matches('%').parse().expect("numeric");
            assert!((50.0..=100.0).contains(&value), "{s} out of range");
        }
    }
}
