//! Logic Module - Engines of the Triage Core
//!
//! ## Structure
//! - `heuristics/` - Deterministic overrides (whitelist, trigger phrases)
//! - `features/`   - URL feature extraction (versioned layout)
//! - `model/`      - ML inference (ONNX adapter, TF-IDF vectorizer, artifacts)
//! - `engine/`     - Decision combiner + confidence formatting
//! - `config`      - Artifact path configuration

pub mod config;
pub mod engine;
pub mod features;
pub mod heuristics;
pub mod model;
