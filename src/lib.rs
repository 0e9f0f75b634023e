//! PhishGuard Core - Hybrid Phishing Triage Engine
//!
//! Classifies URLs and email bodies as SAFE or PHISHING with a human-facing
//! confidence string. Deterministic heuristics (trusted-domain whitelist,
//! phishing-phrase triggers) take precedence over the statistical classifiers;
//! the model is consulted only when no heuristic fires.
//!
//! ## Structure
//! - `logic/heuristics` - Whitelist & trigger-phrase matching
//! - `logic/features`   - URL feature extraction (fixed 6-value layout)
//! - `logic/model`      - ONNX model adapter + TF-IDF vectorizer
//! - `logic/engine`     - Decision combiner, confidence formatting
//!
//! ## Usage
//! ```ignore
//! use phishguard_core::{EngineConfig, ScanEngine};
//!
//! let engine = ScanEngine::from_config(&EngineConfig::default());
//! let verdict = engine.scan_url("https://www.google.com/search?q=test");
//! println!("{} ({})", verdict.result, verdict.confidence);
//! ```

pub mod constants;
pub mod logic;

// Re-export the main entry points for convenience
pub use logic::config::EngineConfig;
pub use logic::engine::{EngineStatus, ScanEngine, ScanResult, Verdict};
