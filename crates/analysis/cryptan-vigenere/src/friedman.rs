//! Friedman test
//!
//! A column enciphered under a single key letter keeps the plaintext's
//! Index of Coincidence (English ≈ 0.067), a mixture of alphabets drifts
//! toward uniform text (1/26 ≈ 0.0385). The candidate key length whose
//! average column IC is closest to the language baseline wins.

use crate::columns::split_columns;
use crate::frequency::LetterFrequencies;
use cryptan_core::{average, LATIN};
use serde::Serialize;

/// Index of Coincidence of English plaintext
pub const ENGLISH_IC: f64 = 0.067;

/// Index of Coincidence of uniformly random Latin text
pub const RANDOM_IC: f64 = 1.0 / 26.0;

/// Key length reported when no candidate could be scored
pub const FRIEDMAN_FALLBACK: usize = 1;

/// Smallest candidate tested; the monoalphabetic case is not a candidate
pub const MIN_CANDIDATE: usize = 2;

/// Score of one candidate key length
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KeyLengthScore {
    pub key_length: usize,
    pub average_ic: f64,
    /// `|average_ic - baseline|`
    pub difference: f64,
}

/// Index of Coincidence of the Latin letters in `text` (case-insensitive).
///
/// Probability that two letters drawn without replacement are equal;
/// 0.0 when fewer than two letters are present.
pub fn index_of_coincidence(text: &str) -> f64 {
    LetterFrequencies::count(text).index_of_coincidence()
}

/// Score every candidate in `[2, max_key_length)`, in increasing order.
///
/// A message without any letter has nothing to measure and yields no
/// scores, so the estimate is `FRIEDMAN_FALLBACK` (1). Scoring it anyway
/// would give every candidate an average IC of 0.0 and pick 2, a length
/// with no evidence behind it.
pub fn score_key_lengths(message: &str, max_key_length: usize, baseline: f64) -> Vec<KeyLengthScore> {
    if !message.chars().any(|c| LATIN.contains(c)) {
        return Vec::new();
    }

    (MIN_CANDIDATE..max_key_length)
        .filter_map(|key_length| {
            let ics: Vec<f64> = split_columns(message, key_length)
                .iter()
                .map(|column| index_of_coincidence(column))
                .collect();
            if ics.is_empty() {
                return None;
            }

            let average_ic = average(&ics);
            Some(KeyLengthScore {
                key_length,
                average_ic,
                difference: (average_ic - baseline).abs(),
            })
        })
        .collect()
}

/// The first score with the smallest difference.
///
/// Later candidates only win on a strictly smaller difference, so an equally
/// good multiple of the true length never replaces it.
pub fn best_score(scores: &[KeyLengthScore]) -> Option<&KeyLengthScore> {
    let mut best: Option<&KeyLengthScore> = None;
    for score in scores {
        if best.map_or(true, |b| score.difference < b.difference) {
            best = Some(score);
        }
    }
    best
}

/// Friedman estimate against a custom IC baseline
pub fn find_key_length_friedman_with_baseline(message: &str, max_key_length: usize, baseline: f64) -> usize {
    let scores = score_key_lengths(message, max_key_length, baseline);
    best_score(&scores).map_or(FRIEDMAN_FALLBACK, |s| s.key_length)
}

/// Friedman estimate against `ENGLISH_IC`.
///
/// Tests `[2, max_key_length)`; returns `FRIEDMAN_FALLBACK` (1) when no
/// candidate can be scored.
pub fn find_key_length_friedman(message: &str, max_key_length: usize) -> usize {
    find_key_length_friedman_with_baseline(message, max_key_length, ENGLISH_IC)
}
