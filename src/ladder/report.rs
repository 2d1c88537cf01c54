//! Query outcomes and statistics

use crate::core::Word;

/// Final result of one ladder query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LadderOutcome {
    /// Ladder from source to destination, both included
    Found(Vec<Word>),
    /// The greedy phase needed this word and the dictionary lacks it
    MissingWord(Word),
    /// The search explored every reachable word without reaching the destination
    NoPath,
    /// The configured step budget ran out
    BudgetExhausted { steps: usize },
}

/// Counters collected while answering a query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub greedy_steps: usize,
    pub pushes: usize,
    pub backtracks: usize,
}

/// Outcome of a query together with its inputs and statistics
#[derive(Debug, Clone)]
pub struct LadderReport {
    pub source: Word,
    pub destination: Word,
    pub outcome: LadderOutcome,
    pub stats: SearchStats,
}

impl LadderReport {
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self.outcome, LadderOutcome::Found(_))
    }

    /// The ladder, or an empty slice if none was found
    #[must_use]
    pub fn chain(&self) -> &[Word] {
        match &self.outcome {
            LadderOutcome::Found(chain) => chain,
            _ => &[],
        }
    }

    /// Consume the report, yielding the ladder or an empty vector
    #[must_use]
    pub fn into_chain(self) -> Vec<Word> {
        match self.outcome {
            LadderOutcome::Found(chain) => chain,
            _ => Vec::new(),
        }
    }

    /// Number of single-letter changes in the ladder
    #[must_use]
    pub fn step_count(&self) -> Option<usize> {
        match &self.outcome {
            LadderOutcome::Found(chain) => Some(chain.len().saturating_sub(1)),
            _ => None,
        }
    }
}
