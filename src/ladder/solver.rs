//! Main ladder solver interface

use super::config::{LadderConfig, MissingWordPolicy};
use super::error::LadderError;
use super::report::{LadderOutcome, LadderReport, SearchStats};
use super::rotator::{GreedyStop, run_greedy};
use super::search::{CandidateScope, SearchOutcome, search};
use crate::core::Word;
use crate::dictionary::DictionaryIndex;
use tracing::{debug, warn};

/// Word ladder solver
///
/// Owns the dictionary, which persists across queries. Each query builds its own
/// search state and discards it when done.
#[derive(Debug, Clone, Default)]
pub struct LadderSolver {
    dictionary: DictionaryIndex,
    config: LadderConfig,
}

impl LadderSolver {
    /// Create a solver with an empty dictionary
    #[must_use]
    pub fn new(config: LadderConfig) -> Self {
        Self {
            dictionary: DictionaryIndex::new(),
            config,
        }
    }

    /// Create a solver over an existing dictionary
    #[must_use]
    pub const fn with_dictionary(dictionary: DictionaryIndex, config: LadderConfig) -> Self {
        Self { dictionary, config }
    }

    /// Add words to the dictionary
    ///
    /// Entries that are not valid words are skipped. Returns how many new words
    /// were stored.
    pub fn set_dictionary<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut added = 0;
        for text in words {
            match Word::new(text) {
                Ok(word) => {
                    if self.dictionary.insert(word).1 {
                        added += 1;
                    }
                }
                Err(e) => debug!("skipping dictionary entry: {e}"),
            }
        }
        added
    }

    /// True if at least one word is stored
    #[must_use]
    pub fn has_dictionary(&self) -> bool {
        !self.dictionary.is_empty()
    }

    #[must_use]
    pub const fn dictionary(&self) -> &DictionaryIndex {
        &self.dictionary
    }

    #[must_use]
    pub const fn config(&self) -> &LadderConfig {
        &self.config
    }

    /// Find a ladder and return it as strings
    ///
    /// An empty vector means no ladder was found. Diagnostics for that case are
    /// emitted through `tracing`.
    ///
    /// # Errors
    ///
    /// Returns `LadderError` if either word is empty or the lengths differ.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::ladder::{LadderConfig, LadderSolver};
    ///
    /// let mut solver = LadderSolver::new(LadderConfig::default());
    /// solver.set_dictionary(["КОТ", "ТОН", "ТОТ"]);
    ///
    /// let chain = solver.find_chain("КОТ", "ТОН").unwrap();
    /// assert_eq!(chain, vec!["КОТ", "ТОТ", "ТОН"]);
    ///
    /// assert!(solver.find_chain("КОТ", "КОТЫ").is_err());
    /// ```
    pub fn find_chain(&self, source: &str, destination: &str) -> Result<Vec<String>, LadderError> {
        let report = self.solve(source, destination)?;

        Ok(report
            .into_chain()
            .into_iter()
            .map(|word| word.text().to_string())
            .collect())
    }

    /// Validate the query and solve it
    ///
    /// # Errors
    ///
    /// Returns `LadderError` if either word is empty or the lengths differ.
    pub fn solve(&self, source: &str, destination: &str) -> Result<LadderReport, LadderError> {
        let source = Word::new(source)?;
        let destination = Word::new(destination)?;
        self.solve_words(source, destination)
    }

    /// Solve a query given as words
    ///
    /// # Errors
    ///
    /// Returns `LadderError::LengthMismatch` if the words differ in length.
    pub fn solve_words(
        &self,
        source: Word,
        destination: Word,
    ) -> Result<LadderReport, LadderError> {
        if source.char_count() != destination.char_count() {
            return Err(LadderError::LengthMismatch {
                from: source.text().to_string(),
                from_len: source.char_count(),
                to: destination.text().to_string(),
                to_len: destination.char_count(),
            });
        }

        let mut stats = SearchStats::default();
        let outcome = self.run(&source, &destination, &mut stats);

        Ok(LadderReport {
            source,
            destination,
            outcome,
            stats,
        })
    }

    /// Greedy phase, then the depth-first fallback
    fn run(&self, source: &Word, destination: &Word, stats: &mut SearchStats) -> LadderOutcome {
        let greedy = run_greedy(&self.dictionary, source, destination);
        let mut chain = greedy.chain;
        stats.greedy_steps = chain.len() - 1;

        let scope = match greedy.stop {
            GreedyStop::Reached => return LadderOutcome::Found(chain),
            GreedyStop::Stalled => CandidateScope::FirstCharBucket,
            GreedyStop::Missing(word) => match self.config.on_missing_word {
                MissingWordPolicy::Abort => {
                    warn!("Need word: {word}");
                    return LadderOutcome::MissingWord(word);
                }
                MissingWordPolicy::Search => {
                    warn!("Need word: {word}, searching the whole dictionary instead");
                    CandidateScope::Dictionary
                }
            },
        };

        let Some(seed) = chain.last().cloned() else {
            return LadderOutcome::NoPath;
        };

        match search(
            &self.dictionary,
            scope,
            &seed,
            destination,
            self.config.max_steps,
            stats,
        ) {
            SearchOutcome::Found(tail) => {
                chain.extend(tail);
                LadderOutcome::Found(chain)
            }
            SearchOutcome::Exhausted => {
                warn!("No way from {source} to {destination} in dictionary");
                LadderOutcome::NoPath
            }
            SearchOutcome::BudgetExhausted { steps } => {
                warn!("Step budget exhausted after {steps} steps searching from {source} to {destination}");
                LadderOutcome::BudgetExhausted { steps }
            }
        }
    }
}
