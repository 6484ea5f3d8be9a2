//! Property-based tests for cryptan-vigenere
//!
//! Invariants that must hold for arbitrary ciphertext, not just English.

use proptest::prelude::*;
use cryptan_core::LATIN;
use cryptan_vigenere::{
    decrypt, decrypt_rows, find_key_length_friedman, index_of_coincidence, key_with_frequency_analysis,
    split_columns, KEY_SENTINEL,
};

// Mostly letters, with enough spaces and punctuation to exercise pass-through
fn message_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z ,.!?'-]{0,200}"
}

fn key_strategy() -> impl Strategy<Value = String> {
    "[A-Z]{1,12}"
}

proptest! {
    #[test]
    fn test_columns_partition_message(message in message_strategy(), key_length in 1usize..30) {
        let columns = split_columns(&message, key_length);
        prop_assert_eq!(columns.len(), key_length);

        let lengths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
        prop_assert_eq!(lengths.iter().sum::<usize>(), message.chars().count());

        let longest = *lengths.iter().max().unwrap();
        let shortest = *lengths.iter().min().unwrap();
        prop_assert!(longest - shortest <= 1);
    }

    #[test]
    fn test_ic_is_permutation_invariant(message in message_strategy(), rotation in 0usize..200) {
        let mut chars: Vec<char> = message.chars().collect();
        if !chars.is_empty() {
            let mid = rotation % chars.len();
            chars.rotate_left(mid);
            chars.reverse();
        }
        let shuffled: String = chars.into_iter().collect();

        let original = index_of_coincidence(&message);
        prop_assert!((original - index_of_coincidence(&shuffled)).abs() < 1e-12);
        prop_assert!((0.0..=1.0).contains(&original));
    }

    #[test]
    fn test_friedman_stays_below_bound(message in message_strategy(), max_key_length in 2usize..25) {
        let key_length = find_key_length_friedman(&message, max_key_length);
        prop_assert!(key_length >= 1);
        prop_assert!(key_length < max_key_length);
    }

    #[test]
    fn test_decrypt_keeps_non_letters(message in message_strategy(), key in key_strategy()) {
        let plain = decrypt(&message, &key);
        prop_assert_eq!(plain.chars().count(), message.chars().count());

        for (p, c) in plain.chars().zip(message.chars()) {
            if LATIN.index_of(c).is_none() {
                prop_assert_eq!(p, c);
            } else {
                prop_assert!(LATIN.index_of(p).is_some());
                prop_assert_eq!(p.is_lowercase(), c.is_lowercase());
            }
        }
    }

    #[test]
    fn test_blockwise_matches_positional(message in message_strategy(), key in key_strategy()) {
        prop_assert_eq!(decrypt_rows(&message, &key), decrypt(&message, &key));
    }

    #[test]
    fn test_derived_key_shape(message in message_strategy(), key_length in 0usize..15) {
        let key = key_with_frequency_analysis(&message, key_length);
        prop_assert_eq!(key.chars().count(), key_length);
        prop_assert!(key.chars().all(|c| c == KEY_SENTINEL || c.is_ascii_uppercase()));
    }
}
