//! Columnizer
//!
//! For an assumed key length `k`, column `j` holds every character at a
//! position `≡ j (mod k)`: the characters enciphered with the same key
//! letter. Positions count `char`s, not bytes.

/// Split `message` into `key_length` interleaved columns.
///
/// Returns no columns for `key_length == 0`. Column lengths sum to the
/// message length and differ by at most one. One `String` is allocated per
/// column, so callers bound `key_length` by the message length.
pub fn split_columns(message: &str, key_length: usize) -> Vec<String> {
    if key_length == 0 {
        return Vec::new();
    }

    let mut columns = vec![String::new(); key_length];
    for (i, c) in message.chars().enumerate() {
        columns[i % key_length].push(c);
    }
    columns
}

/// Transpose the column view back into row blocks.
///
/// Row `r` holds the `r`-th character of every column, in column order,
/// which is exactly the `r`-th run of `key_length` characters of the
/// message. The last row is shorter when the length is not a multiple.
pub fn split_rows(message: &str, key_length: usize) -> Vec<String> {
    if key_length == 0 {
        return Vec::new();
    }

    let chars: Vec<char> = message.chars().collect();
    chars
        .chunks(key_length)
        .map(|row| row.iter().collect())
        .collect()
}
