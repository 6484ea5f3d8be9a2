//! Keyed Vigenère decryption
//!
//! The key schedule is positional: the character at position `i` is
//! shifted back by `key[i % key.len()]`, and non-letters consume a key
//! position like any other character. That is the same partition the
//! column-based estimators work on, so a derived key lines up with the
//! message it was derived from.

use crate::columns::split_rows;
use crate::frequency::KEY_SENTINEL;
use cryptan_core::{Error, Result, LATIN};

/// Shift per key position; `None` for a key character outside the alphabet
fn key_shifts(key: &str) -> Vec<Option<usize>> {
    key.chars().map(|c| LATIN.index_of(c)).collect()
}

/// Decrypt one character. Non-letters and unknown shifts pass through,
/// the case of the ciphertext letter is kept.
fn decrypt_char(c: char, shift: Option<usize>) -> char {
    match (LATIN.index_of(c), shift) {
        (Some(index), Some(shift)) => {
            let plain = LATIN.wrapping_char_at(index as i64 - shift as i64);
            if c.is_lowercase() {
                plain.to_ascii_lowercase()
            } else {
                plain
            }
        }
        _ => c,
    }
}

/// Decrypt `message` with `key`.
///
/// An empty key yields an empty string. A key position holding
/// `KEY_SENTINEL` (or any non-letter) leaves its ciphertext letters as they are.
pub fn decrypt(message: &str, key: &str) -> String {
    let shifts = key_shifts(key);
    if shifts.is_empty() {
        return String::new();
    }

    message
        .chars()
        .enumerate()
        .map(|(i, c)| decrypt_char(c, shifts[i % shifts.len()]))
        .collect()
}

/// Blockwise variant of `decrypt`: row block `r` of `split_rows` is
/// decrypted with the key aligned to its start. Produces the same
/// plaintext as `decrypt`.
pub fn decrypt_rows(message: &str, key: &str) -> String {
    let shifts = key_shifts(key);
    if shifts.is_empty() {
        return String::new();
    }

    split_rows(message, shifts.len())
        .iter()
        .flat_map(|row| {
            row.chars()
                .zip(shifts.iter())
                .map(|(c, &shift)| decrypt_char(c, shift))
                .collect::<Vec<char>>()
        })
        .collect()
}

/// Check a user supplied key: non-empty, only letters or `KEY_SENTINEL`.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::InvalidKey("Key must be non-empty".into()));
    }
    if let Some(bad) = key.chars().find(|&c| !LATIN.contains(c) && c != KEY_SENTINEL) {
        return Err(Error::InvalidKey(format!(
            "'{}' is not a letter (only A-Z and '{}' are allowed)",
            bad, KEY_SENTINEL
        )));
    }
    Ok(())
}
