//! Whitelist Matcher
//!
//! Substring match of a request's domain against known-safe second-level
//! domains. A hit bypasses the classifier entirely.

// ============================================================================
// TRUSTED DOMAIN SET
// ============================================================================

/// Known-safe second-level domains.
///
/// Matched as substrings of the normalized request domain. This tolerates
/// subdomains (`mail.google.com`) but also matches domains that merely embed
/// a trusted string (`google.com.evil.net`) - an accepted heuristic risk,
/// kept as-is because changing match semantics changes observable behavior.
pub const TRUSTED_DOMAINS: &[&str] = &[
    "google.com",
    "facebook.com",
    "amazon.com",
    "youtube.com",
    "wikipedia.org",
    "twitter.com",
    "linkedin.com",
    "microsoft.com",
    "apple.com",
    "netflix.com",
    "github.com",
    "stackoverflow.com",
    "reddit.com",
    "zoom.us",
    "bing.com",
    "live.com",
];

// ============================================================================
// MATCHING
// ============================================================================

/// Strip the leading `www.` from a host. Scheme and path are already gone
/// by the time a domain reaches the whitelist.
pub fn normalize_domain(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}

/// True iff any trusted domain is a substring of `domain`.
pub fn is_trusted_domain(domain: &str) -> bool {
    TRUSTED_DOMAINS.iter().any(|trusted| domain.contains(trusted))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_domain_is_trusted() {
        assert!(is_trusted_domain("google.com"));
        assert!(is_trusted_domain("zoom.us"));
    }

    #[test]
    fn test_subdomain_is_trusted() {
        assert!(is_trusted_domain("mail.google.com"));
        assert!(is_trusted_domain("gist.github.com"));
    }

    #[test]
    fn test_embedded_trusted_substring_matches() {
        // Documented heuristic weakness: substring match also accepts
        // malicious domains that embed a trusted one.
        assert!(is_trusted_domain("google.com.evil.net"));
    }

    #[test]
    fn test_unrelated_domain_is_not_trusted() {
        assert!(!is_trusted_domain("secure-login.paypal.com.verify-now.info"));
        assert!(!is_trusted_domain("example.org"));
    }

    #[test]
    fn test_empty_domain_is_not_trusted() {
        assert!(!is_trusted_domain(""));
    }

    #[test]
    fn test_normalize_strips_www_prefix_only() {
        assert_eq!(normalize_domain("www.google.com"), "google.com");
        assert_eq!(normalize_domain("google.com"), "google.com");
        // Only the prefix is stripped, not interior occurrences
        assert_eq!(normalize_domain("sub.www.example.com"), "sub.www.example.com");
    }
}
