//! Core domain types for word ladders
//!
//! Words and the adjacency relation between them. Everything here is pure and
//! independent of the dictionary and the search.

mod adjacency;
mod word;

pub use adjacency::{is_ladder_step, one_or_zero_letter_diff};
pub use word::{Word, WordError};
