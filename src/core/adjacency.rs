//! Adjacency test between ladder words

use super::Word;

/// Returns true if the words are identical or differ in exactly one position
///
/// Only defined for words of equal length; characters past the shorter word are
/// not compared. This is a filter, not a distance: it stops at the second difference.
///
/// # Examples
/// ```
/// use word_ladder::core::{Word, one_or_zero_letter_diff};
///
/// let kot = Word::new("КОТ").unwrap();
/// let tot = Word::new("ТОТ").unwrap();
/// let ton = Word::new("ТОН").unwrap();
///
/// assert!(one_or_zero_letter_diff(&kot, &tot));
/// assert!(one_or_zero_letter_diff(&kot, &kot));
/// assert!(!one_or_zero_letter_diff(&kot, &ton));
/// ```
#[must_use]
pub fn one_or_zero_letter_diff(lhs: &Word, rhs: &Word) -> bool {
    let mut differences = lhs
        .chars()
        .iter()
        .zip(rhs.chars())
        .filter(|(a, b)| a != b);

    differences.next().is_none() || differences.next().is_none()
}

/// Returns true if `next` is a valid ladder step from `prev`
///
/// Same length and exactly one differing position.
#[must_use]
pub fn is_ladder_step(prev: &Word, next: &Word) -> bool {
    prev.char_count() == next.char_count() && prev != next && one_or_zero_letter_diff(prev, next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn identical_words_are_adjacent() {
        assert!(one_or_zero_letter_diff(&word("НОТА"), &word("НОТА")));
    }

    #[test]
    fn single_difference_at_any_position() {
        let base = word("НОТА");
        assert!(one_or_zero_letter_diff(&base, &word("АОТА")));
        assert!(one_or_zero_letter_diff(&base, &word("НЫТА")));
        assert!(one_or_zero_letter_diff(&base, &word("НОКА")));
        assert!(one_or_zero_letter_diff(&base, &word("НОТН")));
    }

    #[test]
    fn two_or_more_differences_rejected() {
        assert!(!one_or_zero_letter_diff(&word("ЫОТН"), &word("НОТА")));
        assert!(!one_or_zero_letter_diff(&word("АОТР"), &word("РОТА")));
        assert!(!one_or_zero_letter_diff(&word("abcd"), &word("wxyz")));
    }

    #[test]
    fn adjacency_is_symmetric() {
        let pairs = [("КОТ", "ТОТ"), ("ТОТ", "ТОН"), ("КОТ", "ТОН")];
        for (a, b) in pairs {
            assert_eq!(
                one_or_zero_letter_diff(&word(a), &word(b)),
                one_or_zero_letter_diff(&word(b), &word(a)),
                "asymmetric for {a}/{b}"
            );
        }
    }

    #[test]
    fn ladder_step_requires_a_change() {
        assert!(is_ladder_step(&word("КОТ"), &word("ТОТ")));
        assert!(!is_ladder_step(&word("КОТ"), &word("КОТ")));
    }

    #[test]
    fn ladder_step_requires_equal_length() {
        assert!(!is_ladder_step(&word("РОТ"), &word("РОТА")));
    }
}
