//! Cryptanalysis pipeline
//!
//! Runs both key-length estimators, accepts one according to the
//! configuration, derives the key and decrypts. Progress goes to an
//! injected `AnalysisSink`; the pipeline itself never logs.

use crate::decrypt::decrypt;
use crate::frequency::key_with_frequency_analysis;
use crate::friedman::{best_score, score_key_lengths, KeyLengthScore, FRIEDMAN_FALLBACK};
use crate::kasiski::{examine, KasiskiExamination, KASISKI_NO_ESTIMATE};
use cryptan_config::{AnalysisConfig, Estimator};
use serde::Serialize;

/// Where the accepted key length came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyLengthSource {
    Friedman,
    Kasiski,
    /// Forced through `AnalysisConfig::key_length`
    Configured,
}

/// Receives pipeline events in order: Kasiski, each Friedman score,
/// accepted key length, derived key.
pub trait AnalysisSink {
    fn on_kasiski(&self, _examination: &KasiskiExamination) {}
    fn on_friedman_score(&self, _score: &KeyLengthScore) {}
    fn on_key_length(&self, _key_length: usize, _source: KeyLengthSource) {}
    fn on_key(&self, _key: &str) {}
}

/// Sink that drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl AnalysisSink for NullSink {}

/// Everything one pipeline run found out
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub kasiski: KasiskiExamination,
    pub friedman_scores: Vec<KeyLengthScore>,
    pub friedman_key_length: usize,
    pub key_length: usize,
    pub key_length_source: KeyLengthSource,
    pub key: String,
    pub plaintext: String,
}

/// Configured pipeline runner
#[derive(Debug, Clone, Default)]
pub struct Cryptanalyst {
    config: AnalysisConfig,
}

impl Cryptanalyst {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn analyze(&self, message: &str, sink: &dyn AnalysisSink) -> Analysis {
        let kasiski = examine(message, self.config.min_word_length, self.config.top_words);
        sink.on_kasiski(&kasiski);

        let friedman_scores = score_key_lengths(message, self.config.max_key_length, self.config.english_ic);
        for score in &friedman_scores {
            sink.on_friedman_score(score);
        }
        let friedman_key_length = best_score(&friedman_scores).map_or(FRIEDMAN_FALLBACK, |s| s.key_length);

        let (key_length, key_length_source) = self.accept_key_length(kasiski.key_length, friedman_key_length);
        sink.on_key_length(key_length, key_length_source);

        let key = key_with_frequency_analysis(message, key_length);
        sink.on_key(&key);

        let plaintext = decrypt(message, &key);

        Analysis {
            kasiski,
            friedman_scores,
            friedman_key_length,
            key_length,
            key_length_source,
            key,
            plaintext,
        }
    }

    fn accept_key_length(&self, kasiski: usize, friedman: usize) -> (usize, KeyLengthSource) {
        if let Some(forced) = self.config.key_length.filter(|&n| n > 0) {
            return (forced, KeyLengthSource::Configured);
        }

        match self.config.estimator {
            Estimator::Kasiski if kasiski != KASISKI_NO_ESTIMATE => (kasiski, KeyLengthSource::Kasiski),
            _ => (friedman, KeyLengthSource::Friedman),
        }
    }
}
