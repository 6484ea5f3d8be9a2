//! Pipeline events as tracing output

use cryptan_vigenere::{AnalysisSink, KasiskiExamination, KeyLengthScore, KeyLengthSource};
use tracing::{debug, info};

/// Forwards every pipeline event to `tracing`
pub struct TracingSink;

impl AnalysisSink for TracingSink {
    fn on_kasiski(&self, examination: &KasiskiExamination) {
        match examination.words.first() {
            Some(top) => info!(
                word = %top.word,
                count = top.count,
                key_length = examination.key_length,
                "Kasiski examination"
            ),
            None => info!(
                min_word_length = examination.min_word_length,
                "Kasiski: no recurring word"
            ),
        }

        for word in &examination.words {
            debug!(
                word = %word.word,
                count = word.count,
                distances = ?word.distances,
                gcd = word.gcd,
                "recurring word"
            );
        }
    }

    fn on_friedman_score(&self, score: &KeyLengthScore) {
        debug!(
            key_length = score.key_length,
            average_ic = score.average_ic,
            difference = score.difference,
            "Friedman candidate"
        );
    }

    fn on_key_length(&self, key_length: usize, source: KeyLengthSource) {
        info!(key_length, source = ?source, "Key length accepted");
    }

    fn on_key(&self, key: &str) {
        info!(%key, "Key derived");
    }
}
