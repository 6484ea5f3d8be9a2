//! # Cryptan Vigenère
//!
//! Breaks periodic polyalphabetic ciphers without the key.
//!
//! ```text
//!                 ┌──▶ kasiski  (repeat distances ─▶ gcd) ──┐
//! ciphertext ─────┤                                         ├─▶ key length
//!                 └──▶ columns ─▶ friedman (avg column IC) ─┘        │
//!                                                                    ▼
//!                    plaintext ◀── decrypt ◀── key ◀── frequency (most frequent ≙ 'E')
//! ```
//!
//! # Modules
//! - `columns` - split ciphertext into key-length columns / row blocks
//! - `kasiski` - recurring words, distances, GCD key length
//! - `friedman` - Index of Coincidence, key-length sweep
//! - `frequency` - letter counts, per-column key derivation
//! - `decrypt` - keyed decryption
//! - `pipeline` - all of the above behind one configurable call
//!
//! Every function is pure. Degenerate input maps to a documented fallback
//! value rather than an error: Kasiski reports `0` when it has no estimate,
//! Friedman reports `1`.

pub mod columns;
pub mod decrypt;
pub mod frequency;
pub mod friedman;
pub mod kasiski;
pub mod pipeline;
pub mod sample;

pub use columns::{split_columns, split_rows};
pub use decrypt::{decrypt, decrypt_rows, validate_key};
pub use frequency::{key_with_frequency_analysis, most_frequent_letter, LetterFrequencies, KEY_SENTINEL};
pub use friedman::{
    find_key_length_friedman, find_key_length_friedman_with_baseline, index_of_coincidence,
    score_key_lengths, KeyLengthScore, ENGLISH_IC, FRIEDMAN_FALLBACK,
};
pub use kasiski::{
    examine, find_distances, find_key_length_kasiski, find_recurring_words, KasiskiExamination,
    RecurringWord, WordOccurrence, KASISKI_NO_ESTIMATE,
};
pub use pipeline::{Analysis, AnalysisSink, Cryptanalyst, KeyLengthSource, NullSink};

pub use cryptan_core::{Error, Result};
