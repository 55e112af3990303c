// SPDX-License-Identifier: MIT
//! Bounded-length text splitting for display surfaces that truncate
//! or reject long messages.

/// Split `text` into consecutive, non-overlapping pieces of at most
/// `max_len` characters each, preserving order.
///
/// Concatenating the pieces reconstructs `text` exactly. Every piece
/// except the last holds exactly `max_len` characters. An empty input
/// yields an empty vec, not a vec holding one empty string.
///
/// Lengths are counted in characters, not bytes, so a split never
/// lands inside a multi-byte UTF-8 sequence.
pub fn split_text(text: &str, max_len: usize) -> Vec<String> {
    assert!(max_len > 0, "max_len must be positive");

    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut count = 0;
    for ch in text.chars() {
        current.push(ch);
        count += 1;
        if count == max_len {
            pieces.push(std::mem::take(&mut current));
            count = 0;
        }
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}
