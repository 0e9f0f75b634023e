//! Central Configuration Constants
//!
//! Single source of truth for artifact locations and defaults.
//! To change where models are looked up, only edit this file.

use std::path::PathBuf;

/// App name
pub const APP_NAME: &str = "PhishGuard";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default URL classifier artifact file name
pub const DEFAULT_URL_MODEL_FILE: &str = "url_model.onnx";

/// Default email classifier artifact file name
pub const DEFAULT_EMAIL_MODEL_FILE: &str = "email_model.onnx";

/// Default email vectorizer artifact file name
pub const DEFAULT_VECTORIZER_FILE: &str = "vectorizer.json";

/// Environment variable overriding the model directory
pub const ENV_MODEL_DIR: &str = "PHISHGUARD_MODEL_DIR";

/// Per-artifact environment overrides
pub const ENV_URL_MODEL: &str = "PHISHGUARD_URL_MODEL";
pub const ENV_EMAIL_MODEL: &str = "PHISHGUARD_EMAIL_MODEL";
pub const ENV_VECTORIZER: &str = "PHISHGUARD_VECTORIZER";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Resolve the model directory: env override, then the platform data
/// directory, then `./models` as a last resort.
pub fn model_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(ENV_MODEL_DIR) {
        return PathBuf::from(dir);
    }

    dirs::data_local_dir()
        .map(|d| d.join("phishguard").join("models"))
        .unwrap_or_else(|| PathBuf::from("models"))
}

/// Resolve a single artifact path: per-artifact env override, otherwise
/// `model_dir()/<default_file>`.
pub fn artifact_path(env_key: &str, default_file: &str) -> PathBuf {
    std::env::var(env_key)
        .map(PathBuf::from)
        .unwrap_or_else(|_| model_dir().join(default_file))
}
