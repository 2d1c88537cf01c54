//! Word Ladder
//!
//! Builds a chain of dictionary words from a start word to an end word of the same
//! length, changing one character per step. A greedy fast path handles the forced
//! moves; a backtracking depth-first search takes over when it stalls.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::ladder::{LadderConfig, LadderSolver};
//!
//! let mut solver = LadderSolver::new(LadderConfig::default());
//! solver.set_dictionary(["КОТ", "ТОН", "НОТА", "КОТЫ", "РОТ", "РОТА", "ТОТ"]);
//!
//! let chain = solver.find_chain("КОТ", "ТОН").unwrap();
//! assert_eq!(chain, vec!["КОТ", "ТОТ", "ТОН"]);
//! ```

// Core domain types
pub mod core;

// Dictionary storage
pub mod dictionary;

// Ladder construction
pub mod ladder;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
