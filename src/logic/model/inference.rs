//! Inference Engine - ONNX Runtime Integration
//!
//! The `Classifier` trait is the seam between the decision engine and the
//! trained artifacts: label prediction is required, probability estimation
//! is optional (not every classifier is calibrated). The ONNX implementation
//! follows the skl2onnx export convention: output 0 is the int64 label,
//! output 1 (when present) is the float probability tensor.

use std::path::Path;

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Binary class label (0 = safe, 1 = phishing)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    Safe,
    Phishing,
}

impl Label {
    /// Map the raw model output; anything non-zero is phishing.
    pub fn from_raw(value: i64) -> Self {
        if value == 1 {
            Label::Phishing
        } else {
            Label::Safe
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Safe => "safe",
            Label::Phishing => "phishing",
        }
    }
}

/// Per-class probabilities, indexed by class label {0=safe, 1=phishing}.
/// Values sum to 1.0 within floating tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityVector {
    pub safe: f32,
    pub phishing: f32,
}

impl ProbabilityVector {
    pub fn new(safe: f32, phishing: f32) -> Self {
        Self { safe, phishing }
    }

    /// Probability of the winning class.
    pub fn max(&self) -> f32 {
        self.safe.max(self.phishing)
    }
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("model session error: {0}")]
    Session(String),
    #[error("tensor error: {0}")]
    Tensor(String),
    #[error("model output error: {0}")]
    Output(String),
}

// ============================================================================
// CLASSIFIER TRAIT
// ============================================================================

/// Adapter over a trained binary classifier.
///
/// Implementations must be deterministic and must never mutate the
/// underlying model. A missing probability output is `None`, never an error.
pub trait Classifier: Send + Sync {
    fn predict_label(&self, features: &[f32]) -> Result<Label, InferenceError>;
    fn predict_probability(&self, features: &[f32]) -> Option<ProbabilityVector>;
}

// ============================================================================
// ONNX IMPLEMENTATION
// ============================================================================

/// `Classifier` backed by an ONNX Runtime session.
///
/// The session sits behind a mutex because `ort` takes `&mut` to run; the
/// model itself is read-only for the process lifetime.
#[derive(Debug)]
pub struct OnnxClassifier {
    session: Mutex<Session>,
    label_output: String,
    prob_output: Option<String>,
}

impl OnnxClassifier {
    /// Load an ONNX graph from disk and record its output names.
    pub fn from_file(path: &Path) -> Result<Self, InferenceError> {
        let session = Session::builder()
            .map_err(|e| InferenceError::Session(format!("failed to create session builder: {e}")))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| InferenceError::Session(format!("failed to set optimization: {e}")))?
            .commit_from_file(path)
            .map_err(|e| InferenceError::Session(format!("failed to load model: {e}")))?;

        let label_output = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| InferenceError::Output("model defines no outputs".to_string()))?;
        let prob_output = session.outputs.get(1).map(|o| o.name.clone());

        if prob_output.is_none() {
            log::info!("model has no probability output - confidence will report N/A");
        }

        Ok(Self {
            session: Mutex::new(session),
            label_output,
            prob_output,
        })
    }

}

impl Classifier for OnnxClassifier {
    fn predict_label(&self, features: &[f32]) -> Result<Label, InferenceError> {
        let array = Array2::<f32>::from_shape_vec((1, features.len()), features.to_vec())
            .map_err(|e| InferenceError::Tensor(format!("array error: {e}")))?;
        let input = Value::from_array(array)
            .map_err(|e| InferenceError::Tensor(format!("tensor error: {e}")))?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![input])
            .map_err(|e| InferenceError::Session(format!("inference failed: {e}")))?;

        let output = outputs
            .get(&self.label_output)
            .ok_or_else(|| InferenceError::Output("label output missing".to_string()))?;
        let data = output
            .try_extract_tensor::<i64>()
            .map_err(|e| InferenceError::Output(format!("extract error: {e}")))?
            .1;

        let raw = data
            .first()
            .copied()
            .ok_or_else(|| InferenceError::Output("empty label tensor".to_string()))?;

        Ok(Label::from_raw(raw))
    }

    fn predict_probability(&self, features: &[f32]) -> Option<ProbabilityVector> {
        let name = self.prob_output.as_ref()?;

        let array = Array2::<f32>::from_shape_vec((1, features.len()), features.to_vec()).ok()?;
        let input = Value::from_array(array).ok()?;

        let mut session = self.session.lock();
        let outputs = match session.run(ort::inputs![input]) {
            Ok(outputs) => outputs,
            Err(e) => {
                log::debug!("probability inference failed ({e}), reporting unavailable");
                return None;
            }
        };

        let output = outputs.get(name)?;
        let data = output.try_extract_tensor::<f32>().ok()?.1;

        if data.len() < 2 {
            log::debug!("probability tensor too short ({} values)", data.len());
            return None;
        }

        Some(ProbabilityVector::new(data[0], data[1]))
    }
}

// ============================================================================
// TESTS
// ============================================================================
