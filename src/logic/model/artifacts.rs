//! Artifact Loading
//!
//! Resolves trained artifacts from disk into engine dependencies. A failed
//! load never aborts the process: the caller leaves the corresponding engine
//! slot empty and every scan against it reports a degraded result.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::logic::features::{layout_hash, URL_FEATURE_VERSION};

use super::inference::{InferenceError, OnnxClassifier};
use super::vectorizer::{TfidfVectorizer, VectorizerArtifact};

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("artifact not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read artifact: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse artifact: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Inference(#[from] InferenceError),
}

// ============================================================================
// METADATA
// ============================================================================

/// Provenance of a loaded model, reported through `EngineStatus`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub path: String,
    pub sha256: String,
    pub loaded_at: DateTime<Utc>,
}

/// SHA-256 checksum of a file, hex encoded.
pub fn file_checksum(path: &Path) -> Result<String, ArtifactError> {
    let bytes = std::fs::read(path)?;
    let digest = Sha256::digest(&bytes);
    Ok(hex::encode(digest))
}

// ============================================================================
// LOADERS
// ============================================================================

/// Load an ONNX classifier and record its provenance.
pub fn load_classifier(path: &Path) -> Result<(OnnxClassifier, ModelMetadata), ArtifactError> {
    if !path.exists() {
        return Err(ArtifactError::NotFound(path.to_path_buf()));
    }

    let sha256 = file_checksum(path)?;
    let classifier = OnnxClassifier::from_file(path)?;

    log::info!(
        "model loaded: {} (sha256 {}, feature layout v{} {:08x})",
        path.display(),
        &sha256[..12],
        URL_FEATURE_VERSION,
        layout_hash()
    );

    Ok((
        classifier,
        ModelMetadata {
            path: path.display().to_string(),
            sha256,
            loaded_at: Utc::now(),
        },
    ))
}

/// Load the fitted TF-IDF vectorizer from its JSON export.
pub fn load_vectorizer(path: &Path) -> Result<TfidfVectorizer, ArtifactError> {
    if !path.exists() {
        return Err(ArtifactError::NotFound(path.to_path_buf()));
    }

    let raw = std::fs::read_to_string(path)?;
    let artifact: VectorizerArtifact = serde_json::from_str(&raw)?;
    let vectorizer = TfidfVectorizer::from_artifact(artifact);

    log::info!(
        "vectorizer loaded: {} ({} features)",
        path.display(),
        vectorizer.num_features()
    );

    Ok(vectorizer)
}

// ============================================================================
// TESTS
// ============================================================================
