//! Features Module - URL Feature Extraction
//!
//! Maps a raw URL string to the fixed numeric vector the URL classifier was
//! trained against. Extraction is a pure function; the layout is versioned in
//! `layout.rs` because changing it without retraining invalidates the model.

pub mod layout;
pub mod url;

#[cfg(test)]
mod tests;

// Re-export common items
pub use layout::{layout_hash, URL_FEATURE_COUNT, URL_FEATURE_LAYOUT, URL_FEATURE_VERSION};
pub use url::{extract_url_features, netloc, UrlFeatures};
