//! Formatting utilities for terminal output

use crate::core::Word;

/// Position of the single changed character between two ladder words
///
/// Returns `None` when the words are identical, differ in length, or differ in
/// more than one position.
#[must_use]
pub fn changed_position(prev: &Word, next: &Word) -> Option<usize> {
    if prev.char_count() != next.char_count() {
        return None;
    }

    let mut changed = prev
        .chars()
        .iter()
        .zip(next.chars())
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(i, _)| i);

    match (changed.next(), changed.next()) {
        (Some(position), None) => Some(position),
        _ => None,
    }
}

/// Join ladder words with arrows
#[must_use]
pub fn chain_to_arrows(chain: &[Word]) -> String {
    chain
        .iter()
        .map(Word::text)
        .collect::<Vec<_>>()
        .join(" → ")
}
