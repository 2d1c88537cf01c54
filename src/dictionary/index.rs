//! Dictionary with a first-character index
//!
//! Words are stored once, in insertion order, and addressed by a stable `WordId`.
//! The first-character buckets hold ids only, so growing the dictionary never
//! invalidates them.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Stable handle to a word stored in a [`DictionaryIndex`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(usize);

impl WordId {
    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Position of the word in insertion order
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Set of unique dictionary words plus a multi-map from leading character to words
///
/// Bucket order is the insertion order of each word's first occurrence, which
/// makes search order reproducible for a given word list.
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    words: Vec<Word>,
    lookup: FxHashMap<Word, WordId>,
    first_chars: FxHashMap<char, Vec<WordId>>,
}

impl DictionaryIndex {
    /// Create an empty dictionary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word
    ///
    /// Returns the word's id and whether it was newly inserted. Duplicates keep
    /// their original id and are not registered in the buckets again.
    pub fn insert(&mut self, word: Word) -> (WordId, bool) {
        if let Some(&id) = self.lookup.get(&word) {
            return (id, false);
        }

        let id = WordId(self.words.len());
        self.first_chars.entry(word.first()).or_default().push(id);
        self.lookup.insert(word.clone(), id);
        self.words.push(word);

        (id, true)
    }

    /// Exact membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains_key(word)
    }

    /// Id of a stored word
    #[inline]
    #[must_use]
    pub fn id_of(&self, word: &str) -> Option<WordId> {
        self.lookup.get(word).copied()
    }

    /// Word behind an id
    ///
    /// # Panics
    /// Panics if the id was not issued by this dictionary.
    #[inline]
    #[must_use]
    pub fn word(&self, id: WordId) -> &Word {
        &self.words[id.0]
    }

    /// Ids of all words starting with `first`, in bucket order
    ///
    /// Returns an empty slice if no word starts with that character.
    #[inline]
    #[must_use]
    pub fn bucket(&self, first: char) -> &[WordId] {
        self.first_chars
            .get(&first)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// All words starting with `first`, in bucket order
    pub fn candidates_starting_with(&self, first: char) -> impl Iterator<Item = &Word> + '_ {
        self.bucket(first).iter().map(|&id| self.word(id))
    }

    /// All words in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Number of unique words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> IntoIterator for &'a DictionaryIndex {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Word> for DictionaryIndex {
    fn extend<I: IntoIterator<Item = Word>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl FromIterator<Word> for DictionaryIndex {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn index_of(words: &[&str]) -> DictionaryIndex {
        words_from_slice(words).into_iter().collect()
    }

    fn texts<'a>(words: impl Iterator<Item = &'a Word>) -> Vec<&'a str> {
        words.map(Word::text).collect()
    }

    #[test]
    fn insert_and_contains() {
        let mut index = DictionaryIndex::new();
        assert!(index.is_empty());

        let (_, inserted) = index.insert(Word::new("КОТ").unwrap());
        assert!(inserted);
        assert!(index.contains("КОТ"));
        assert!(!index.contains("ТОТ"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn duplicate_insert_is_idempotent() {
        let mut index = DictionaryIndex::new();
        let (first_id, _) = index.insert(Word::new("ТОН").unwrap());
        let (second_id, inserted) = index.insert(Word::new("ТОН").unwrap());

        assert!(!inserted);
        assert_eq!(first_id, second_id);
        assert_eq!(index.len(), 1);
        assert_eq!(index.bucket('Т').len(), 1);
    }

    #[test]
    fn buckets_keep_insertion_order() {
        let index = index_of(&["РОТ", "КОТ", "РОТА", "ТОТ", "РОТР"]);

        assert_eq!(
            texts(index.candidates_starting_with('Р')),
            vec!["РОТ", "РОТА", "РОТР"]
        );
        assert_eq!(texts(index.candidates_starting_with('К')), vec!["КОТ"]);
    }

    #[test]
    fn missing_bucket_is_empty() {
        let index = index_of(&["КОТ"]);
        assert!(index.bucket('Ж').is_empty());
        assert_eq!(index.candidates_starting_with('Ж').count(), 0);
    }

    #[test]
    fn ids_stay_valid_after_growth() {
        let mut index = DictionaryIndex::new();
        let (id, _) = index.insert(Word::new("НОТА").unwrap());

        index.extend(words_from_slice(&["НОТН", "АОТА", "АОТР", "РОТР", "ЫОТЫ"]));

        assert_eq!(index.word(id).text(), "НОТА");
        assert_eq!(index.id_of("НОТА"), Some(id));
        assert_eq!(id.index(), 0);
    }

    #[test]
    fn iter_follows_insertion_order() {
        let index = index_of(&["ТОН", "КОТ", "ТОН", "АОТА"]);
        assert_eq!(texts(index.iter()), vec!["ТОН", "КОТ", "АОТА"]);
    }

    #[test]
    fn mixed_lengths_share_buckets() {
        let index = index_of(&["РОТ", "РОТА"]);
        assert_eq!(index.bucket('Р').len(), 2);
    }
}
