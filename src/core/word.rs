//! Ladder word representation
//!
//! A Word keeps its text together with the decoded code points, so position-wise
//! comparisons work on characters rather than on the UTF-8 encoding.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// A non-empty ladder word
///
/// Equality, hashing and ordering are defined by the text alone. Ordering of UTF-8
/// text is the same as ordering of its code-point sequence.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    chars: Box<[char]>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must contain at least one character")]
    Empty,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is taken verbatim: no trimming and no case folding.
    ///
    /// # Errors
    /// Returns `WordError::Empty` if the text has no characters.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("КОТ").unwrap();
    /// assert_eq!(word.char_count(), 3);
    /// assert_eq!(word.last(), 'Т');
    ///
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();
        let chars: Box<[char]> = text.chars().collect();

        if chars.is_empty() {
            return Err(WordError::Empty);
        }

        Ok(Self { text, chars })
    }

    /// Build a Word from a character sequence
    ///
    /// # Errors
    /// Returns `WordError::Empty` if `chars` is empty.
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Result<Self, WordError> {
        let chars: Box<[char]> = chars.into_iter().collect();

        if chars.is_empty() {
            return Err(WordError::Empty);
        }

        Ok(Self {
            text: chars.iter().collect(),
            chars,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the decoded characters
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters (not bytes)
    #[inline]
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.chars.len()
    }

    /// Leading character
    #[inline]
    #[must_use]
    pub fn first(&self) -> char {
        self.chars[0]
    }

    /// Trailing character
    #[inline]
    #[must_use]
    pub fn last(&self) -> char {
        self.chars[self.chars.len() - 1]
    }

    /// Copy of this word with the leading character replaced
    #[must_use]
    pub fn with_first(&self, first: char) -> Self {
        let mut chars = self.chars.clone();
        chars[0] = first;

        Self {
            text: chars.iter().collect(),
            chars,
        }
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

// Hash and Eq agree with `str`, so maps keyed by Word can be queried with `&str`.
impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
