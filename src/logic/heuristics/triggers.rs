//! Trigger Matcher
//!
//! Case-insensitive substring match of email text against known
//! social-engineering phrases. One or more hits is treated as conclusive
//! phishing evidence, overriding the classifier.

// ============================================================================
// TRIGGER PHRASE SET
// ============================================================================

/// Literal phrases indicating pressure tactics.
pub const PHISHING_TRIGGERS: &[&str] = &[
    "verify your identity",
    "verify your account",
    "account suspended",
    "unusual sign-in activity",
    "bank account locked",
    "update your payment",
    "password expiration",
    "unauthorized access",
    "confirm your details",
    "immediate action required",
    "your account will be closed",
    "pay now",
];

// ============================================================================
// MATCHING
// ============================================================================

/// Number of trigger phrases present in `text` (each phrase counted once).
///
/// Returns a count rather than a bool: the override logic fires at >= 1, and
/// the count is useful diagnostic context in logs.
pub fn trigger_count(text: &str) -> usize {
    let lowered = text.to_lowercase();
    PHISHING_TRIGGERS
        .iter()
        .filter(|phrase| lowered.contains(*phrase))
        .count()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_trigger() {
        assert_eq!(trigger_count("please pay now to continue"), 1);
    }

    #[test]
    fn test_multiple_triggers_counted_once_each() {
        let text = "Your account will be closed, verify your identity now";
        assert_eq!(trigger_count(text), 2);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(trigger_count("ACCOUNT SUSPENDED - Verify Your Account"), 2);
    }

    #[test]
    fn test_benign_text_has_no_triggers() {
        assert_eq!(trigger_count("See you at the meeting tomorrow"), 0);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(trigger_count(""), 0);
    }
}
