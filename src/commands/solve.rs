//! Ladder solving command
//!
//! Runs one query against a solver and times it.

use crate::ladder::{LadderError, LadderReport, LadderSolver};
use crate::wordlists::loader::parse_query;
use std::time::{Duration, Instant};

/// Query to solve
pub struct SolveConfig {
    pub source: String,
    pub destination: String,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(source: String, destination: String) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Build a query from the lines of an input file
    ///
    /// # Errors
    ///
    /// Returns `LadderError` unless the lines hold exactly two words of equal length.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, LadderError> {
        let (source, destination) = parse_query(lines)?;
        Ok(Self::new(
            source.text().to_string(),
            destination.text().to_string(),
        ))
    }
}

/// Result of solving a query
pub struct SolveResult {
    pub report: LadderReport,
    pub duration: Duration,
}

/// Solve a query with the given solver
///
/// # Errors
///
/// Returns an error if the query words are empty or of different lengths.
pub fn solve_query(config: &SolveConfig, solver: &LadderSolver) -> Result<SolveResult, LadderError> {
    let start = Instant::now();
    let report = solver.solve(&config.source, &config.destination)?;

    Ok(SolveResult {
        report,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ladder::{LadderConfig, LadderOutcome};
    use crate::wordlists::SAMPLE_DICTIONARY;

    fn sample_solver() -> LadderSolver {
        let mut solver = LadderSolver::new(LadderConfig::default());
        solver.set_dictionary(SAMPLE_DICTIONARY.iter().copied());
        solver
    }

    #[test]
    fn solve_query_succeeds() {
        let solver = sample_solver();
        let config = SolveConfig::new("КОТ".to_string(), "ТОН".to_string());

        let result = solve_query(&config, &solver).unwrap();

        assert!(result.report.is_found());
        assert_eq!(result.report.chain().len(), 3);
    }

    #[test]
    fn solve_query_without_ladder_is_not_an_error() {
        let solver = sample_solver();
        let config = SolveConfig::new("КОТ".to_string(), "РОТ".to_string());

        let result = solve_query(&config, &solver).unwrap();

        assert_eq!(result.report.outcome, LadderOutcome::NoPath);
    }

    #[test]
    fn solve_query_rejects_length_mismatch() {
        let solver = sample_solver();
        let config = SolveConfig::new("КОТ".to_string(), "РОТА".to_string());

        assert!(solve_query(&config, &solver).is_err());
    }

    #[test]
    fn config_from_lines() {
        let config = SolveConfig::from_lines(&["КОТЫ", "РОТА"]).unwrap();
        assert_eq!(config.source, "КОТЫ");
        assert_eq!(config.destination, "РОТА");

        assert!(SolveConfig::from_lines(&["КОТЫ"]).is_err());
    }
}
