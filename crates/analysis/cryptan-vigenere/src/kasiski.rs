//! Kasiski examination
//!
//! Plaintext fragments that repeat at the same key phase produce repeated
//! ciphertext fragments whose distances are multiples of the key length.
//! The GCD of those distances estimates the key length. Coincidental
//! repeats pollute the sample, so the estimate is a heuristic.

use cryptan_core::gcd;
use serde::Serialize;
use std::collections::HashMap;

/// Key length reported when no recurring word exists
pub const KASISKI_NO_ESTIMATE: usize = 0;

/// A fixed-length window that occurs at least twice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordOccurrence {
    pub word: String,
    pub count: usize,
}

/// A recurring word together with its distance set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecurringWord {
    pub word: String,
    pub count: usize,
    pub distances: Vec<usize>,
    pub gcd: usize,
}

/// Result of a full Kasiski pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KasiskiExamination {
    pub min_word_length: usize,
    /// Most frequent recurring words, best first
    pub words: Vec<RecurringWord>,
    /// GCD of the top word's distances, `KASISKI_NO_ESTIMATE` without one
    pub key_length: usize,
}

/// All windows of exactly `min_length` characters that occur at least twice.
///
/// Windows overlap. Sorted by count descending, ties by word ascending.
/// Empty when `min_length` is 0 or longer than the message.
pub fn find_recurring_words(message: &str, min_length: usize) -> Vec<WordOccurrence> {
    let chars: Vec<char> = message.chars().collect();
    if min_length == 0 || min_length > chars.len() {
        return Vec::new();
    }

    let mut counts: HashMap<String, usize> = HashMap::new();
    for window in chars.windows(min_length) {
        *counts.entry(window.iter().collect()).or_insert(0) += 1;
    }

    let mut words: Vec<WordOccurrence> = counts
        .into_iter()
        .filter(|&(_, count)| count >= 2)
        .map(|(word, count)| WordOccurrence { word, count })
        .collect();
    words.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    words
}

/// Gaps between consecutive start offsets of `word` in `message`.
///
/// Occurrences may overlap (`"AAA"` occurs in `"AAAA"` at 0 and 1).
/// Fewer than two occurrences give an empty list.
pub fn find_distances(message: &str, word: &str) -> Vec<usize> {
    let haystack: Vec<char> = message.chars().collect();
    let needle: Vec<char> = word.chars().collect();
    if needle.is_empty() || needle.len() > haystack.len() {
        return Vec::new();
    }

    let offsets: Vec<usize> = haystack
        .windows(needle.len())
        .enumerate()
        .filter(|(_, window)| *window == needle.as_slice())
        .map(|(i, _)| i)
        .collect();

    offsets.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

/// Key length estimate: GCD of the distances of the most frequent
/// recurring word, `KASISKI_NO_ESTIMATE` (0) when there is none.
pub fn find_key_length_kasiski(message: &str, min_length: usize) -> usize {
    match find_recurring_words(message, min_length).first() {
        Some(top) => gcd(&find_distances(message, &top.word)),
        None => KASISKI_NO_ESTIMATE,
    }
}

/// Run the whole examination, keeping the `top` most frequent words.
///
/// `key_length` always equals `find_key_length_kasiski(message, min_length)`.
pub fn examine(message: &str, min_length: usize, top: usize) -> KasiskiExamination {
    let recurring = find_recurring_words(message, min_length);

    let words: Vec<RecurringWord> = recurring
        .into_iter()
        .take(top.max(1))
        .map(|occurrence| {
            let distances = find_distances(message, &occurrence.word);
            RecurringWord {
                gcd: gcd(&distances),
                word: occurrence.word,
                count: occurrence.count,
                distances,
            }
        })
        .collect();

    let key_length = words.first().map_or(KASISKI_NO_ESTIMATE, |w| w.gcd);

    KasiskiExamination {
        min_word_length: min_length,
        words,
        key_length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recurring_words_sorted() {
        let words = find_recurring_words("ABCXYABCYABCZXY", 2);
        let found: Vec<(&str, usize)> = words.iter().map(|w| (w.word.as_str(), w.count)).collect();
        assert_eq!(found, vec![("AB", 3), ("BC", 3), ("XY", 2), ("YA", 2)]);
    }

    #[test]
    fn test_recurring_words_degenerate_lengths() {
        assert!(find_recurring_words("ABAB", 0).is_empty());
        assert!(find_recurring_words("ABAB", 5).is_empty());
        assert!(find_recurring_words("", 1).is_empty());
    }

    #[test]
    fn test_distances() {
        assert_eq!(find_distances("ABCXXABCXXXXABC", "ABC"), vec![5, 7]);
        assert_eq!(find_distances("ABC", "ABC"), Vec::<usize>::new());
        assert_eq!(find_distances("ABC", ""), Vec::<usize>::new());
    }

    #[test]
    fn test_distances_allow_overlap() {
        assert_eq!(find_distances("AAAA", "AAA"), vec![1]);
    }

    #[test]
    fn test_no_repeat_gives_zero() {
        assert_eq!(find_key_length_kasiski("ABCDEFG", 4), 0);
        assert_eq!(find_key_length_kasiski("ABCDEFG", 0), 0);
    }

    #[test]
    fn test_key_length_from_gcd() {
        // "THE" repeats at 0, 6, 15: distances 6 and 9, gcd 3.
        let message = "THEXYZTHEABCDEFTHE";
        assert_eq!(find_distances(message, "THE"), vec![6, 9]);
        assert_eq!(find_key_length_kasiski(message, 3), 3);
    }

    #[test]
    fn test_examine_matches_estimator() {
        let message = "THEXYZTHEABCDEFTHE";
        let exam = examine(message, 3, 2);
        assert_eq!(exam.key_length, find_key_length_kasiski(message, 3));
        assert_eq!(exam.words[0].word, "THE");
        assert_eq!(exam.words[0].distances, vec![6, 9]);

        let empty = examine("ABCDEFG", 4, 5);
        assert!(empty.words.is_empty());
        assert_eq!(empty.key_length, KASISKI_NO_ESTIMATE);
    }
}
