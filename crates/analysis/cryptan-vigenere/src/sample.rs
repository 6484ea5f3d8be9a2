//! Bundled ciphertext for demos.

/// Letters-only Vigenère ciphertext from the coursework exercise
/// (3164 characters, period 7 by Kasiski examination).
pub const EXERCISE_CIPHERTEXT: &str = include_str!("../data/exercise.txt");
