//! Arithmetic helpers
//!
//! `gcd` and `average` follow the reduction conventions of the estimators:
//! an empty input reduces to `0` / `0.0` instead of failing.

/// Greatest common divisor of every value in `numbers`.
///
/// Returns 0 for an empty slice. Zeros are neutral (`gcd(0, n) == n`).
pub fn gcd(numbers: &[usize]) -> usize {
    numbers.iter().fold(0, |acc, &n| gcd_pair(acc, n))
}

fn gcd_pair(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Arithmetic mean, 0.0 for an empty slice.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Non-negative remainder of `value` modulo `modulus`.
///
/// A zero modulus yields 0.
pub fn modulo(value: i64, modulus: usize) -> usize {
    if modulus == 0 {
        return 0;
    }
    value.rem_euclid(modulus as i64) as usize
}

/// `modulo(value, 26)`
pub fn mod26(value: i64) -> usize {
    modulo(value, 26)
}
