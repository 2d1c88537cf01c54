//! Query validation errors

use crate::core::WordError;
use thiserror::Error;

/// Errors for malformed ladder queries
///
/// Every variant is an invalid-input condition: fatal to the call and never
/// retried. An unsolvable query is not an error; see
/// [`LadderOutcome`](super::LadderOutcome).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LadderError {
    #[error("Invalid word: {0}")]
    InvalidWord(#[from] WordError),

    #[error("Words must be same sizes: '{from}' has {from_len} characters, '{to}' has {to_len}")]
    LengthMismatch {
        from: String,
        from_len: usize,
        to: String,
        to_len: usize,
    },

    #[error("Query must contain exactly 2 words, got {0}")]
    WrongWordCount(usize),
}
