//! Integration Tests for URL Feature Extraction
//!
//! Checks the extractor against known inputs and the purity/totality
//! guarantees the trained model depends on.

#[cfg(test)]
mod extraction_tests {
    use crate::logic::features::{extract_url_features, netloc, URL_FEATURE_COUNT};

    #[test]
    fn test_known_phishing_url_features() {
        let url = "http://secure-login.paypal.com.verify-now.info/update";
        let features = extract_url_features(url);

        assert_eq!(features[0], 53.0, "url_length");
        assert_eq!(features[1], 4.0, "domain_dot_count");
        assert_eq!(features[2], 2.0, "hyphen_count");
        assert_eq!(features[3], 0.0, "has_at_symbol");
        assert_eq!(features[4], 1.0, "insecure_http (http without https)");
        assert_eq!(features[5], 0.0, "domain_has_digit");
    }

    #[test]
    fn test_https_url_is_not_insecure() {
        let features = extract_url_features("https://example.com/login");
        assert_eq!(features[4], 0.0);
    }

    #[test]
    fn test_ip_style_host_sets_digit_flag() {
        let features = extract_url_features("http://192.168.0.1/login");
        assert_eq!(features[5], 1.0);
        assert_eq!(features[1], 3.0);
    }

    #[test]
    fn test_at_symbol_flag() {
        let features = extract_url_features("http://user@evil.com/");
        assert_eq!(features[3], 1.0);
    }

    #[test]
    fn test_extraction_is_pure() {
        let url = "HTTP://Example.COM/Path";
        assert_eq!(extract_url_features(url), extract_url_features(url));
        // Case differences collapse to the same vector
        assert_eq!(
            extract_url_features(url),
            extract_url_features("http://example.com/path")
        );
    }

    #[test]
    fn test_empty_string_yields_zero_vector() {
        assert_eq!(extract_url_features(""), [0.0; URL_FEATURE_COUNT]);
    }

    #[test]
    fn test_netloc_with_scheme() {
        assert_eq!(netloc("https://www.google.com/search?q=test"), "www.google.com");
        assert_eq!(netloc("http://a.b.c"), "a.b.c");
        assert_eq!(netloc("http://host?x=1"), "host");
        assert_eq!(netloc("http://host#frag"), "host");
    }

    #[test]
    fn test_netloc_keeps_userinfo_and_port() {
        assert_eq!(netloc("http://user@google.com:8080/x"), "user@google.com:8080");
    }

    #[test]
    fn test_netloc_without_scheme_is_empty() {
        assert_eq!(netloc("google.com/search"), "");
        assert_eq!(netloc(""), "");
    }

    #[test]
    fn test_protocol_relative_netloc() {
        assert_eq!(netloc("//cdn.example.com/app.js"), "cdn.example.com");
    }
}
