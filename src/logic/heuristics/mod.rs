//! Heuristics Module - Deterministic Overrides
//!
//! The safety nets that run before any model call:
//! - `whitelist`: trusted domains asserting SAFE
//! - `triggers`: phishing phrases asserting PHISHING
//!
//! Both sets are fixed at compile time and immutable for the process
//! lifetime. Match semantics are substring based and intentionally loose;
//! tightening them changes observable behavior.

pub mod triggers;
pub mod whitelist;

pub use triggers::{trigger_count, PHISHING_TRIGGERS};
pub use whitelist::{is_trusted_domain, normalize_domain, TRUSTED_DOMAINS};
