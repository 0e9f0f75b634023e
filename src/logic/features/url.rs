//! URL Feature Extractor
//!
//! Pure function from a raw URL string to the fixed 6-value vector defined
//! in `layout.rs`. No hidden state, no network access, total over all string
//! inputs including the empty string.

use super::layout::URL_FEATURE_COUNT;

/// Ordered URL feature values; see `URL_FEATURE_LAYOUT` for the schema.
pub type UrlFeatures = [f32; URL_FEATURE_COUNT];

// ============================================================================
// NETLOC PARSING
// ============================================================================

/// Authority component of a URL: everything between `//` and the first
/// `/`, `?` or `#`. Empty when the URL carries no scheme, matching the
/// parsing the model was trained against (userinfo and port are kept).
pub fn netloc(url: &str) -> &str {
    let rest = if let Some(idx) = url.find("://") {
        &url[idx + 3..]
    } else if let Some(stripped) = url.strip_prefix("//") {
        stripped
    } else {
        return "";
    };

    match rest.find(|c| c == '/' || c == '?' || c == '#') {
        Some(end) => &rest[..end],
        None => rest,
    }
}

// ============================================================================
// EXTRACTION
// ============================================================================

/// Extract the 6 URL features. Lower-cases its input so repeated calls on
/// the same string always agree.
pub fn extract_url_features(url: &str) -> UrlFeatures {
    let url = url.to_lowercase();
    let host = netloc(&url);

    [
        url.chars().count() as f32,
        host.matches('.').count() as f32,
        url.matches('-').count() as f32,
        if url.contains('@') { 1.0 } else { 0.0 },
        if !url.contains("https") && url.contains("http") { 1.0 } else { 0.0 },
        if host.chars().any(|c| c.is_ascii_digit()) { 1.0 } else { 0.0 },
    ]
}
