//! Greedy fast path
//!
//! Repeatedly replaces the leading character of the current word with its trailing
//! character. Once the two agree the replacement is a no-op and the greedy phase
//! stalls, handing over to the depth-first search.

use crate::core::Word;
use crate::dictionary::DictionaryIndex;
use tracing::debug;

/// Why the greedy phase stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GreedyStop {
    /// The chain ends at the destination
    Reached,
    /// No forced move remains
    Stalled,
    /// The forced move needs a word the dictionary lacks
    Missing(Word),
}

/// Chain built by the greedy phase, starting at the source word
#[derive(Debug, Clone)]
pub struct GreedyRun {
    pub chain: Vec<Word>,
    pub stop: GreedyStop,
}

/// The forced successor of a word: trailing character moved to the front, rest kept
///
/// # Examples
/// ```
/// use word_ladder::core::Word;
/// use word_ladder::ladder::greedy_successor;
///
/// let kot = Word::new("КОТ").unwrap();
/// assert_eq!(greedy_successor(&kot).text(), "ТОТ");
///
/// // First and last already agree: fixed point
/// let tot = Word::new("ТОТ").unwrap();
/// assert_eq!(greedy_successor(&tot), tot);
/// ```
#[must_use]
pub fn greedy_successor(word: &Word) -> Word {
    word.with_first(word.last())
}

/// Run the greedy phase from `source` towards `destination`
///
/// Every accepted step must be a dictionary member, including a step landing on
/// the destination.
#[must_use]
pub fn run_greedy(dictionary: &DictionaryIndex, source: &Word, destination: &Word) -> GreedyRun {
    let mut chain = vec![source.clone()];
    let mut current = source.clone();

    let stop = loop {
        if current == *destination {
            break GreedyStop::Reached;
        }

        let next = greedy_successor(&current);
        if next == current {
            break GreedyStop::Stalled;
        }

        if !dictionary.contains(next.text()) {
            break GreedyStop::Missing(next);
        }

        debug!(from = %current, to = %next, "greedy step");
        chain.push(next.clone());
        current = next;
    };

    GreedyRun { chain, stop }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn dictionary(words: &[&str]) -> DictionaryIndex {
        words_from_slice(words).into_iter().collect()
    }

    fn texts(chain: &[Word]) -> Vec<&str> {
        chain.iter().map(Word::text).collect()
    }

    #[test]
    fn successor_replaces_first_with_last() {
        assert_eq!(greedy_successor(&word("КОТЫ")).text(), "ЫОТЫ");
        assert_eq!(greedy_successor(&word("abcd")).text(), "dbcd");
    }

    #[test]
    fn single_character_word_is_fixed_point() {
        let w = word("я");
        assert_eq!(greedy_successor(&w), w);
    }

    #[test]
    fn reaches_destination_in_one_step() {
        let dict = dictionary(&["КОТ", "ТОТ"]);
        let run = run_greedy(&dict, &word("КОТ"), &word("ТОТ"));

        assert_eq!(run.stop, GreedyStop::Reached);
        assert_eq!(texts(&run.chain), vec!["КОТ", "ТОТ"]);
    }

    #[test]
    fn source_equal_to_destination_needs_no_dictionary() {
        let run = run_greedy(&DictionaryIndex::new(), &word("КОТ"), &word("КОТ"));

        assert_eq!(run.stop, GreedyStop::Reached);
        assert_eq!(texts(&run.chain), vec!["КОТ"]);
    }

    #[test]
    fn stalls_after_forced_move() {
        let dict = dictionary(&["КОТ", "ТОН", "ТОТ"]);
        let run = run_greedy(&dict, &word("КОТ"), &word("ТОН"));

        assert_eq!(run.stop, GreedyStop::Stalled);
        assert_eq!(texts(&run.chain), vec!["КОТ", "ТОТ"]);
    }

    #[test]
    fn stalls_immediately_when_first_equals_last() {
        let run = run_greedy(&DictionaryIndex::new(), &word("ТОТ"), &word("ТОН"));

        assert_eq!(run.stop, GreedyStop::Stalled);
        assert_eq!(texts(&run.chain), vec!["ТОТ"]);
    }

    #[test]
    fn reports_missing_forced_word() {
        let run = run_greedy(&DictionaryIndex::new(), &word("КОТ"), &word("ТОТ"));

        assert_eq!(run.stop, GreedyStop::Missing(word("ТОТ")));
        assert_eq!(texts(&run.chain), vec!["КОТ"]);
    }
}
