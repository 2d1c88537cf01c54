//! Search configuration

/// What to do when the greedy fast path needs a word the dictionary lacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingWordPolicy {
    /// Give up immediately and report the missing word
    #[default]
    Abort,
    /// Fall back to a depth-first search over every same-length dictionary word
    Search,
}

impl MissingWordPolicy {
    /// Create policy from name string
    ///
    /// Supported names: "abort", "search". Defaults to abort if unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "search" => Self::Search,
            _ => Self::Abort,
        }
    }
}

/// Configuration for a [`LadderSolver`](super::LadderSolver)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LadderConfig {
    pub on_missing_word: MissingWordPolicy,
    /// Upper bound on depth-first transitions (pushes plus backtracks)
    pub max_steps: Option<usize>,
}

impl LadderConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            on_missing_word: MissingWordPolicy::Abort,
            max_steps: None,
        }
    }

    #[must_use]
    pub const fn with_missing_word_policy(mut self, policy: MissingWordPolicy) -> Self {
        self.on_missing_word = policy;
        self
    }

    #[must_use]
    pub const fn with_max_steps(mut self, max_steps: Option<usize>) -> Self {
        self.max_steps = max_steps;
        self
    }
}
