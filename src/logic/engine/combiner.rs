//! Decision Combiner
//!
//! `ScanEngine` holds the loaded artifacts as explicit dependencies and runs
//! the per-path state machines. States are checked in order; the first match
//! is terminal:
//!
//! URL:   whitelist -> model missing -> features+model
//! Email: model missing -> triggers -> vectorize+model
//!
//! Heuristics always beat the model in the one direction each is defined
//! for; the model is consulted only when no heuristic fires.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::logic::config::EngineConfig;
use crate::logic::features::{extract_url_features, netloc};
use crate::logic::heuristics::{is_trusted_domain, normalize_domain, trigger_count};
use crate::logic::model::{
    load_classifier, load_vectorizer, Classifier, Label, ModelMetadata, TfidfVectorizer,
};

use super::confidence::{confidence_from_probability, CONFIDENCE_KEYWORD, CONFIDENCE_TRUSTED};
use super::types::{EngineStatus, ScanResult};

// ============================================================================
// SCAN ENGINE
// ============================================================================

/// The hybrid decision engine.
///
/// All artifact slots are optional: a missing artifact degrades the matching
/// path to `{Error, "0%"}` per request instead of failing at startup. After
/// construction everything is read-only; scans take `&self` and are safe to
/// run concurrently.
pub struct ScanEngine {
    url_model: Option<Arc<dyn Classifier>>,
    email_model: Option<Arc<dyn Classifier>>,
    vectorizer: Option<TfidfVectorizer>,
    url_metadata: Option<ModelMetadata>,
    email_metadata: Option<ModelMetadata>,
    scan_count: AtomicU64,
    latency_sum_us: AtomicU64,
}

impl ScanEngine {
    /// Dependency-injecting constructor. Tests pass mock classifiers here;
    /// production code usually goes through [`ScanEngine::from_config`].
    pub fn new(
        url_model: Option<Arc<dyn Classifier>>,
        email_model: Option<Arc<dyn Classifier>>,
        vectorizer: Option<TfidfVectorizer>,
    ) -> Self {
        Self {
            url_model,
            email_model,
            vectorizer,
            url_metadata: None,
            email_metadata: None,
            scan_count: AtomicU64::new(0),
            latency_sum_us: AtomicU64::new(0),
        }
    }

    /// Load every artifact named by the config. Each failure is logged and
    /// leaves its slot empty; the engine always constructs.
    pub fn from_config(config: &EngineConfig) -> Self {
        let (url_model, url_metadata) = match load_classifier(&config.url_model_path) {
            Ok((classifier, metadata)) => {
                (Some(Arc::new(classifier) as Arc<dyn Classifier>), Some(metadata))
            }
            Err(e) => {
                log::warn!("URL model unavailable: {e}");
                (None, None)
            }
        };

        let (email_model, email_metadata) = match load_classifier(&config.email_model_path) {
            Ok((classifier, metadata)) => {
                (Some(Arc::new(classifier) as Arc<dyn Classifier>), Some(metadata))
            }
            Err(e) => {
                log::warn!("email model unavailable: {e}");
                (None, None)
            }
        };

        let vectorizer = match load_vectorizer(&config.vectorizer_path) {
            Ok(vectorizer) => Some(vectorizer),
            Err(e) => {
                log::warn!("vectorizer unavailable: {e}");
                None
            }
        };

        Self {
            url_model,
            email_model,
            vectorizer,
            url_metadata,
            email_metadata,
            scan_count: AtomicU64::new(0),
            latency_sum_us: AtomicU64::new(0),
        }
    }

    // ========================================================================
    // SCAN OPERATIONS
    // ========================================================================

    /// Classify a URL. Infallible: every failure path resolves to a
    /// well-formed result.
    pub fn scan_url(&self, url: &str) -> ScanResult {
        let start = Instant::now();
        let result = self.scan_url_inner(url);
        self.track(start);
        log::debug!("url scan -> {} ({})", result.result, result.confidence);
        result
    }

    /// Classify an email body.
    pub fn scan_email(&self, text: &str) -> ScanResult {
        let start = Instant::now();
        let result = self.scan_email_inner(text);
        self.track(start);
        log::debug!("email scan -> {} ({})", result.result, result.confidence);
        result
    }

    fn scan_url_inner(&self, url: &str) -> ScanResult {
        let lowered = url.to_lowercase();
        let domain = normalize_domain(netloc(&lowered));

        // 1. Whitelist hit is terminal: no feature extraction, no model call
        if is_trusted_domain(domain) {
            return ScanResult::safe(CONFIDENCE_TRUSTED);
        }

        // 2. Degraded state: model never loaded
        let Some(model) = &self.url_model else {
            return ScanResult::error();
        };

        // 3. Statistical verdict
        let features = extract_url_features(&lowered);
        match model.predict_label(&features) {
            Ok(label) => {
                let confidence = confidence_from_probability(model.predict_probability(&features));
                match label {
                    Label::Phishing => ScanResult::phishing(confidence),
                    Label::Safe => ScanResult::safe(confidence),
                }
            }
            Err(e) => {
                log::warn!("url model inference failed: {e}");
                ScanResult::error()
            }
        }
    }

    fn scan_email_inner(&self, text: &str) -> ScanResult {
        // 1. Degraded state: classifier or vectorizer never loaded
        let (Some(model), Some(vectorizer)) = (&self.email_model, &self.vectorizer) else {
            return ScanResult::error();
        };

        // 2. Trigger evidence outranks the classifier; model not invoked
        let hits = trigger_count(text);
        if hits >= 1 {
            log::debug!("trigger override: {hits} phrase(s) matched");
            return ScanResult::phishing(CONFIDENCE_KEYWORD);
        }

        // 3. Statistical verdict
        let row = vectorizer.transform(text);
        match model.predict_label(&row) {
            Ok(label) => {
                let confidence = confidence_from_probability(model.predict_probability(&row));
                match label {
                    Label::Phishing => ScanResult::phishing(confidence),
                    Label::Safe => ScanResult::safe(confidence),
                }
            }
            Err(e) => {
                log::warn!("email model inference failed: {e}");
                ScanResult::error()
            }
        }
    }

    // ========================================================================
    // STATUS
    // ========================================================================

    /// Loaded/absent state of every artifact plus scan counters.
    pub fn status(&self) -> EngineStatus {
        let count = self.scan_count.load(Ordering::Relaxed);
        let sum = self.latency_sum_us.load(Ordering::Relaxed);
        let avg = if count > 0 {
            (sum as f32 / count as f32) / 1000.0
        } else {
            0.0
        };

        EngineStatus {
            url_model_loaded: self.url_model.is_some(),
            email_model_loaded: self.email_model.is_some(),
            vectorizer_loaded: self.vectorizer.is_some(),
            url_model: self.url_metadata.clone(),
            email_model: self.email_metadata.clone(),
            scan_count: count,
            avg_latency_ms: avg,
        }
    }

    fn track(&self, start: Instant) {
        self.scan_count.fetch_add(1, Ordering::Relaxed);
        self.latency_sum_us
            .fetch_add(start.elapsed().as_micros() as u64, Ordering::Relaxed);
    }
}
