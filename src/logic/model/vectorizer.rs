//! TF-IDF Vectorizer
//!
//! Transforms email text into the fixed-width numeric representation the
//! email classifier was trained on. The vocabulary, idf weights and stop
//! words come from a JSON artifact exported at training time; they are
//! opaque trained data and the transform here must match the fitting
//! pipeline exactly (word tokens of 2+ characters, stop-word removal,
//! n-grams, tf*idf, L2 normalization).

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Word token pattern: two or more word characters
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\w\w+\b").expect("token pattern is valid")
});

// ============================================================================
// ARTIFACT FORMAT
// ============================================================================

/// On-disk JSON form of the fitted vectorizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerArtifact {
    /// Term (unigram or space-joined n-gram) -> column index
    pub vocabulary: HashMap<String, usize>,
    /// Per-column inverse document frequency weights
    pub idf: Vec<f32>,
    /// Inclusive n-gram range, e.g. [1, 2] for unigrams + bigrams
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    /// Output width; 0 means "use idf length"
    #[serde(default)]
    pub num_features: usize,
    /// Stop words removed before n-gram construction
    #[serde(default)]
    pub stop_words: Vec<String>,
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

// ============================================================================
// VECTORIZER
// ============================================================================

/// Fitted TF-IDF transform.
#[derive(Debug)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
    ngram_range: (usize, usize),
    num_features: usize,
    stop_words: HashSet<String>,
}

impl TfidfVectorizer {
    pub fn from_artifact(artifact: VectorizerArtifact) -> Self {
        let num_features = if artifact.num_features > 0 {
            artifact.num_features
        } else {
            artifact.idf.len()
        };

        Self {
            vocabulary: artifact.vocabulary,
            idf: artifact.idf,
            ngram_range: artifact.ngram_range,
            num_features,
            stop_words: artifact.stop_words.into_iter().collect(),
        }
    }

    /// Output vector width.
    pub fn num_features(&self) -> usize {
        self.num_features
    }

    /// Transform text into a dense tf-idf row.
    ///
    /// Unknown terms are ignored; empty text yields the zero vector.
    pub fn transform(&self, text: &str) -> Vec<f32> {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = TOKEN_RE
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|t| !self.stop_words.contains(*t))
            .collect();

        let mut row = vec![0.0f32; self.num_features];
        let (lo, hi) = self.ngram_range;

        for n in lo.max(1)..=hi {
            if tokens.len() < n {
                break;
            }
            for window in tokens.windows(n) {
                let term = window.join(" ");
                if let Some(&idx) = self.vocabulary.get(term.as_str()) {
                    if idx < self.num_features {
                        row[idx] += 1.0;
                    }
                }
            }
        }

        for (i, value) in row.iter_mut().enumerate() {
            *value *= self.idf.get(i).copied().unwrap_or(1.0);
        }

        let norm = row.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in row.iter_mut() {
                *value /= norm;
            }
        }

        row
    }
}

// ============================================================================
// TESTS
// ============================================================================
