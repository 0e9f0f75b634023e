//! Engine Configuration
//!
//! Resolves where the trained artifacts live. Defaults come from
//! `constants.rs` (env overrides first, then the platform data directory).

use std::path::PathBuf;

use crate::constants::{
    artifact_path, DEFAULT_EMAIL_MODEL_FILE, DEFAULT_URL_MODEL_FILE, DEFAULT_VECTORIZER_FILE,
    ENV_EMAIL_MODEL, ENV_URL_MODEL, ENV_VECTORIZER,
};

/// Locations of the trained artifacts consumed by the engine.
///
/// The artifact formats themselves are opaque to the core: the URL and email
/// classifiers are ONNX graphs, the vectorizer is the JSON export of the
/// fitted TF-IDF vocabulary.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub url_model_path: PathBuf,
    pub email_model_path: PathBuf,
    pub vectorizer_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            url_model_path: artifact_path(ENV_URL_MODEL, DEFAULT_URL_MODEL_FILE),
            email_model_path: artifact_path(ENV_EMAIL_MODEL, DEFAULT_EMAIL_MODEL_FILE),
            vectorizer_path: artifact_path(ENV_VECTORIZER, DEFAULT_VECTORIZER_FILE),
        }
    }
}

impl EngineConfig {
    /// Point every artifact at a single directory, keeping the default
    /// file names.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            url_model_path: dir.join(DEFAULT_URL_MODEL_FILE),
            email_model_path: dir.join(DEFAULT_EMAIL_MODEL_FILE),
            vectorizer_path: dir.join(DEFAULT_VECTORIZER_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dir_uses_default_file_names() {
        let config = EngineConfig::from_dir("/opt/phishguard");
        assert!(config.url_model_path.ends_with("url_model.onnx"));
        assert!(config.email_model_path.ends_with("email_model.onnx"));
        assert!(config.vectorizer_path.ends_with("vectorizer.json"));
    }
}
