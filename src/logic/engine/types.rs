//! Engine Types
//!
//! Data structures only - no decision logic.

use serde::{Deserialize, Serialize};

use crate::logic::model::ModelMetadata;

use super::confidence::CONFIDENCE_DEGRADED;

// ============================================================================
// VERDICT
// ============================================================================

/// Final classification of a scan request.
///
/// Serialized forms are the wire strings upstream consumers already expect:
/// `"SAFE"`, `"PHISHING"`, `"Error"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "SAFE")]
    Safe,
    #[serde(rename = "PHISHING")]
    Phishing,
    #[serde(rename = "Error")]
    Error,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Safe => "SAFE",
            Verdict::Phishing => "PHISHING",
            Verdict::Error => "Error",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SCAN RESULT
// ============================================================================

/// Verdict plus human-facing confidence. Always well-formed: every failure
/// path inside the engine resolves to one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub result: Verdict,
    pub confidence: String,
}

impl ScanResult {
    pub fn safe(confidence: impl Into<String>) -> Self {
        Self {
            result: Verdict::Safe,
            confidence: confidence.into(),
        }
    }

    pub fn phishing(confidence: impl Into<String>) -> Self {
        Self {
            result: Verdict::Phishing,
            confidence: confidence.into(),
        }
    }

    /// Degraded result for a missing or failing model.
    pub fn error() -> Self {
        Self {
            result: Verdict::Error,
            confidence: CONFIDENCE_DEGRADED.to_string(),
        }
    }
}

// ============================================================================
// ENGINE STATUS
// ============================================================================

/// Which artifacts are loaded, plus scan counters.
#[derive(Debug, Clone, Serialize)]
pub struct EngineStatus {
    pub url_model_loaded: bool,
    pub email_model_loaded: bool,
    pub vectorizer_loaded: bool,
    pub url_model: Option<ModelMetadata>,
    pub email_model: Option<ModelMetadata>,
    pub scan_count: u64,
    pub avg_latency_ms: f32,
}
