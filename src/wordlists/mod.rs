//! Word lists for ladder queries
//!
//! File loading plus a small dictionary compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{SAMPLE_DICTIONARY, SAMPLE_DICTIONARY_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_count_matches_const() {
        assert_eq!(SAMPLE_DICTIONARY.len(), SAMPLE_DICTIONARY_COUNT);
    }

    #[test]
    fn sample_words_are_non_empty_and_unique() {
        let unique: std::collections::HashSet<_> = SAMPLE_DICTIONARY.iter().collect();
        assert_eq!(unique.len(), SAMPLE_DICTIONARY.len());
        assert!(SAMPLE_DICTIONARY.iter().all(|w| !w.is_empty()));
    }

    #[test]
    fn sample_keeps_file_order() {
        assert_eq!(SAMPLE_DICTIONARY.first(), Some(&"КОТ"));
        assert_eq!(SAMPLE_DICTIONARY.last(), Some(&"РОТР"));
        assert_eq!(SAMPLE_DICTIONARY_COUNT, 14);
    }
}
