//! Alphabet Mapper
//!
//! Bidirectional character <-> index mapping over an ordered charset.
//! Lookups are case-insensitive; a character outside the charset maps to
//! `None` ("not a letter") rather than an error.

use crate::math::modulo;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;

/// Charset of the default alphabet
pub const LATIN_CHARSET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

lazy_static! {
    /// The 26-letter Latin alphabet every analysis routine works over
    pub static ref LATIN: Alphabet = Alphabet::latin();
}

/// Ordered set of distinct characters defining the integer encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
    lookup: HashMap<char, usize>,
}

impl Alphabet {
    /// The 26-letter Latin alphabet (`A` = 0 ... `Z` = 25)
    pub fn latin() -> Self {
        Self::build(LATIN_CHARSET.chars().collect())
    }

    /// `chars` must be distinct. Case variants never shadow a character
    /// the charset lists itself.
    fn build(chars: Vec<char>) -> Self {
        let mut lookup: HashMap<char, usize> = chars
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i))
            .collect();

        for (i, &c) in chars.iter().enumerate() {
            let variants = [single_char(c.to_lowercase()), single_char(c.to_uppercase())];
            for v in variants.into_iter().flatten() {
                lookup.entry(v).or_insert(i);
            }
        }

        Self { chars, lookup }
    }

    /// Number of characters in the alphabet
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Index of `c`, case-insensitive. `None` if `c` is not in the alphabet.
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.lookup.get(&c).copied()
    }

    /// Character at `index`, `None` when out of range
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Character at `index` reduced modulo the alphabet size
    pub fn wrapping_char_at(&self, index: i64) -> char {
        self.chars[modulo(index, self.chars.len())]
    }

    pub fn contains(&self, c: char) -> bool {
        self.lookup.contains_key(&c)
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Characters of `text` that belong to the alphabet, in order
    pub fn retain(&self, text: &str) -> String {
        text.chars().filter(|&c| self.contains(c)).collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::latin()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

fn single_char(mut it: impl Iterator<Item = char>) -> Option<char> {
    let c = it.next()?;
    match it.next() {
        None => Some(c),
        Some(_) => None,
    }
}
