//! Depth-first ladder search with resumable backtracking
//!
//! Each stack frame pairs an on-path word with a cursor into its candidate range.
//! After a backtrack the parent's cursor continues where it stopped, so no
//! candidate is examined twice from the same node.

use super::report::SearchStats;
use crate::core::{Word, one_or_zero_letter_diff};
use crate::dictionary::{DictionaryIndex, WordId};
use rustc_hash::FxHashSet;
use std::ops::Range;
use std::slice;
use tracing::debug;

/// Which dictionary words a node may step to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateScope {
    /// Words whose first character is the node's last character
    FirstCharBucket,
    /// Every dictionary word, in insertion order
    Dictionary,
}

/// Remaining unexplored candidates of one node
#[derive(Debug, Clone)]
enum Cursor<'a> {
    Bucket(slice::Iter<'a, WordId>),
    Dictionary(Range<usize>),
}

impl Iterator for Cursor<'_> {
    type Item = WordId;

    fn next(&mut self) -> Option<WordId> {
        match self {
            Self::Bucket(ids) => ids.next().copied(),
            Self::Dictionary(positions) => positions.next().map(WordId::from_index),
        }
    }
}

#[derive(Debug)]
struct Frame<'a> {
    word: &'a Word,
    cursor: Cursor<'a>,
}

/// Per-query search state
///
/// A word is in `on_path` exactly while it has a frame on the stack. Words in
/// `visited` were fully explored and are never pushed again.
#[derive(Debug)]
struct Frontier<'a> {
    dictionary: &'a DictionaryIndex,
    scope: CandidateScope,
    stack: Vec<Frame<'a>>,
    on_path: FxHashSet<&'a Word>,
    visited: FxHashSet<&'a Word>,
}

impl<'a> Frontier<'a> {
    fn new(dictionary: &'a DictionaryIndex, scope: CandidateScope, seed: &'a Word) -> Self {
        let mut frontier = Self {
            dictionary,
            scope,
            stack: Vec::new(),
            on_path: FxHashSet::default(),
            visited: FxHashSet::default(),
        };
        frontier.push(seed);
        frontier
    }

    fn top(&self) -> Option<&'a Word> {
        self.stack.last().map(|frame| frame.word)
    }

    fn push(&mut self, word: &'a Word) {
        let cursor = match self.scope {
            CandidateScope::FirstCharBucket => {
                Cursor::Bucket(self.dictionary.bucket(word.last()).iter())
            }
            CandidateScope::Dictionary => Cursor::Dictionary(0..self.dictionary.len()),
        };

        self.on_path.insert(word);
        self.stack.push(Frame { word, cursor });
    }

    /// Pop the top word and mark it as explored
    fn backtrack(&mut self) {
        if let Some(frame) = self.stack.pop() {
            self.on_path.remove(frame.word);
            self.visited.insert(frame.word);
        }
    }

    /// Advance the top cursor to the first pushable candidate
    fn next_candidate(&mut self) -> Option<&'a Word> {
        let dictionary = self.dictionary;
        let frame = self.stack.last_mut()?;
        let top = frame.word;

        for id in frame.cursor.by_ref() {
            let candidate = dictionary.word(id);

            if self.visited.contains(candidate) {
                continue;
            }

            let same_size = candidate.char_count() == top.char_count();
            if same_size
                && one_or_zero_letter_diff(candidate, top)
                && !self.on_path.contains(candidate)
            {
                return Some(candidate);
            }
        }

        None
    }

    /// Path below the seed, root to leaf
    fn into_tail(self) -> Vec<Word> {
        self.stack
            .into_iter()
            .skip(1)
            .map(|frame| frame.word.clone())
            .collect()
    }
}

/// How a depth-first search ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Words after the seed up to and including the destination
    Found(Vec<Word>),
    /// Every reachable candidate was explored
    Exhausted,
    /// The step budget ran out first
    BudgetExhausted { steps: usize },
}

/// Depth-first search from `seed` to `destination`
///
/// Deterministic for a fixed dictionary: the first qualifying candidate in cursor
/// order is always taken. The ladder found is not necessarily the shortest.
pub fn search(
    dictionary: &DictionaryIndex,
    scope: CandidateScope,
    seed: &Word,
    destination: &Word,
    max_steps: Option<usize>,
    stats: &mut SearchStats,
) -> SearchOutcome {
    let mut frontier = Frontier::new(dictionary, scope, seed);
    let mut steps = 0;

    while let Some(top) = frontier.top() {
        if top == destination {
            return SearchOutcome::Found(frontier.into_tail());
        }

        if max_steps.is_some_and(|limit| steps >= limit) {
            return SearchOutcome::BudgetExhausted { steps };
        }
        steps += 1;

        if let Some(candidate) = frontier.next_candidate() {
            debug!(from = %top, to = %candidate, depth = frontier.stack.len(), "push");
            frontier.push(candidate);
            stats.pushes += 1;
        } else {
            frontier.backtrack();
            debug!(word = %top, "backtrack");
            stats.backtracks += 1;
        }
    }

    SearchOutcome::Exhausted
}
