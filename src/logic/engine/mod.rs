//! Engine Module - Decision Combiner
//!
//! This is the CORE STEP - where heuristics and model output collapse into
//! one verdict plus one confidence string.
//!
//! ## Structure
//! - `types`: Verdict, ScanResult, EngineStatus
//! - `confidence`: single source of truth for confidence formatting
//! - `combiner`: `ScanEngine` and the per-path state machines
//!
//! ## Precedence
//! Whitelist only asserts SAFE, triggers only assert PHISHING; the model is
//! consulted only when no heuristic fires.

pub mod combiner;
pub mod confidence;
pub mod types;


// Re-export main types for convenience
pub use combiner::ScanEngine;
pub use confidence::{
    confidence_from_probability, CONFIDENCE_DEGRADED, CONFIDENCE_KEYWORD, CONFIDENCE_TRUSTED,
    CONFIDENCE_UNAVAILABLE,
};
pub use types::{EngineStatus, ScanResult, Verdict};
