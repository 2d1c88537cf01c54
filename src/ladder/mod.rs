//! Ladder construction
//!
//! A query runs in two straight-line phases: the greedy fast path, then a
//! depth-first search with backtracking when the greedy phase stalls.

mod config;
mod error;
mod report;
pub mod rotator;
pub mod search;
mod solver;

pub use config::{LadderConfig, MissingWordPolicy};
pub use error::LadderError;
pub use report::{LadderOutcome, LadderReport, SearchStats};
pub use rotator::{GreedyRun, GreedyStop, greedy_successor, run_greedy};
pub use search::{CandidateScope, SearchOutcome, search};
pub use solver::LadderSolver;
