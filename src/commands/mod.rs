//! Command implementations

pub mod solve;

pub use solve::{SolveConfig, SolveResult, solve_query};
