//! Frequency analysis
//!
//! Letter counts over the Latin alphabet and per-column key derivation.
//! Key derivation assumes the most frequent plaintext letter of every
//! column is `E`.

use crate::columns::split_columns;
use cryptan_core::LATIN;

/// Key character emitted for a column without any letter
pub const KEY_SENTINEL: char = '?';

/// Plaintext letter assumed to dominate every column
pub const ASSUMED_MOST_FREQUENT: char = 'E';

/// Case-insensitive letter counts; non-letters are ignored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterFrequencies {
    counts: [usize; 26],
    total: usize,
}

impl LetterFrequencies {
    pub fn count(text: &str) -> Self {
        let mut counts = [0usize; 26];
        let mut total = 0;

        for i in text.chars().filter_map(|c| LATIN.index_of(c)) {
            counts[i] += 1;
            total += 1;
        }

        Self { counts, total }
    }

    /// Occurrences of `c` (any case)
    pub fn get(&self, c: char) -> usize {
        LATIN.index_of(c).map_or(0, |i| self.counts[i])
    }

    /// Number of letters counted
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn percent(&self, c: char) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.get(c) as f64 / self.total as f64 * 100.0
    }

    /// Index of Coincidence: `Σ f(f-1) / N(N-1)`, 0.0 below two letters
    pub fn index_of_coincidence(&self) -> f64 {
        if self.total < 2 {
            return 0.0;
        }

        let sum: usize = self.counts.iter().map(|&f| f * f.saturating_sub(1)).sum();
        let n = self.total;
        sum as f64 / (n * (n - 1)) as f64
    }

    /// Top `n` letters by count, ties alphabetical
    pub fn top(&self, n: usize) -> Vec<(char, usize)> {
        let mut sorted: Vec<(char, usize)> = LATIN
            .chars()
            .iter()
            .zip(self.counts.iter())
            .filter(|&(_, &count)| count > 0)
            .map(|(&c, &count)| (c, count))
            .collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted.into_iter().take(n).collect()
    }

    /// Render as ASCII frequency chart
    pub fn render_ascii(&self) -> String {
        let mut lines = Vec::new();
        lines.push("LETTER FREQUENCIES".to_string());
        lines.push("═".repeat(40));

        let max_count = self.counts.iter().copied().max().unwrap_or(0).max(1);
        let scale = 30.0 / max_count as f64;

        for (&c, &count) in LATIN.chars().iter().zip(self.counts.iter()) {
            let bar = "█".repeat((count as f64 * scale) as usize);
            lines.push(format!("{}: {:5.2}% |{}", c, self.percent(c), bar));
        }

        lines.push(String::new());
        lines.push(format!("Index of Coincidence: {:.4}", self.index_of_coincidence()));
        lines.join("\n")
    }
}

/// Most frequent letter of `text`, uppercased.
///
/// Scans left to right and only replaces the leader on a strictly greater
/// count, so among tied letters the one that reached the count first wins.
/// `None` when `text` has no letter.
pub fn most_frequent_letter(text: &str) -> Option<char> {
    let mut counts = [0usize; 26];
    let mut leader: Option<(usize, usize)> = None;

    for i in text.chars().filter_map(|c| LATIN.index_of(c)) {
        counts[i] += 1;
        if leader.map_or(true, |(_, best)| counts[i] > best) {
            leader = Some((i, counts[i]));
        }
    }

    leader.and_then(|(i, _)| LATIN.char_at(i))
}

/// Key character for one column, `KEY_SENTINEL` without letters
pub fn key_char_for_column(column: &str) -> char {
    let (Some(top), Some(e)) = (
        most_frequent_letter(column).and_then(|c| LATIN.index_of(c)),
        LATIN.index_of(ASSUMED_MOST_FREQUENT),
    ) else {
        return KEY_SENTINEL;
    };
    LATIN.wrapping_char_at(top as i64 - e as i64)
}

/// Derive a key of `key_length` characters, one per column.
///
/// Empty for `key_length == 0`.
pub fn key_with_frequency_analysis(message: &str, key_length: usize) -> String {
    split_columns(message, key_length)
        .iter()
        .map(|column| key_char_for_column(column))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_frequencies() {
        let freq = LetterFrequencies::count("Hello, World");
        assert_eq!(freq.total(), 10);
        assert_eq!(freq.get('l'), 3);
        assert_eq!(freq.get('L'), 3);
        assert_eq!(freq.get(','), 0);
        assert!((freq.percent('O') - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_letters() {
        let top = LetterFrequencies::count("AAABBC").top(2);
        assert_eq!(top, vec![('A', 3), ('B', 2)]);
    }

    #[test]
    fn test_most_frequent_letter() {
        assert_eq!(most_frequent_letter("abcbcb"), Some('B'));
        assert_eq!(most_frequent_letter("x y Z z"), Some('Z'));
        assert_eq!(most_frequent_letter("123 !?"), None);
        assert_eq!(most_frequent_letter(""), None);
    }

    #[test]
    fn test_first_maximum_wins_ties() {
        // Both reach 2; B gets there first.
        assert_eq!(most_frequent_letter("ABBA"), Some('B'));
        // Both reach 2; A gets there first.
        assert_eq!(most_frequent_letter("AABB"), Some('A'));
    }

    #[test]
    fn test_key_char_assumes_e() {
        assert_eq!(key_char_for_column("EEE"), 'A');
        assert_eq!(key_char_for_column("IIX"), 'E');
        // 'A' - 'E' wraps around to 'W'.
        assert_eq!(key_char_for_column("aab"), 'W');
        assert_eq!(key_char_for_column(" . "), KEY_SENTINEL);
    }

    #[test]
    fn test_key_derivation() {
        assert_eq!(key_with_frequency_analysis("ANYTHING", 0), "");
        // Columns "IIZ" / "FFY" / "..." -> 'I' ⇒ E, 'F' ⇒ B, none ⇒ ?
        assert_eq!(key_with_frequency_analysis("IF.IF.ZY.", 3), "EB?");
    }
}
