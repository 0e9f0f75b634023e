//! Model Module - ML Inference
//!
//! Wraps the trained artifacts behind narrow interfaces so the decision
//! engine never touches ONNX or vocabulary details:
//! - `inference`: `Classifier` trait + ONNX-backed implementation
//! - `vectorizer`: TF-IDF transform matching the fitted vocabulary
//! - `artifacts`: loading, checksums, metadata

pub mod artifacts;
pub mod inference;
pub mod vectorizer;

// Re-export main types for convenience
pub use artifacts::{load_classifier, load_vectorizer, ArtifactError, ModelMetadata};
pub use inference::{Classifier, InferenceError, Label, OnnxClassifier, ProbabilityVector};
pub use vectorizer::{TfidfVectorizer, VectorizerArtifact};
