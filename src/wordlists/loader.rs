//! Word list loading utilities
//!
//! Reads the query and dictionary files and turns raw lines into words.

use crate::core::Word;
use crate::ladder::LadderError;
use std::fs;
use std::io;
use std::path::Path;

/// Read a file as a list of lines
///
/// Surrounding whitespace is trimmed and empty lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not valid UTF-8.
pub fn read_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let lines = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    Ok(lines)
}

/// Load dictionary words from a file, one per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::loader::load_dictionary;
///
/// let words = load_dictionary("data/sample_dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let words = read_lines(path)?
        .into_iter()
        .filter_map(|line| Word::new(line).ok())
        .collect();

    Ok(words)
}

/// Split query lines into a source and destination word
///
/// # Errors
///
/// Returns `LadderError` unless there are exactly two non-empty words of equal
/// length.
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::parse_query;
///
/// let (from, to) = parse_query(&["КОН", "ДОР"]).unwrap();
/// assert_eq!(from.text(), "КОН");
/// assert_eq!(to.text(), "ДОР");
///
/// assert!(parse_query(&["КО", "ДОР"]).is_err());
/// ```
pub fn parse_query<S: AsRef<str>>(lines: &[S]) -> Result<(Word, Word), LadderError> {
    let [from, to] = lines else {
        return Err(LadderError::WrongWordCount(lines.len()));
    };

    let from = Word::new(from.as_ref())?;
    let to = Word::new(to.as_ref())?;

    if from.char_count() != to.char_count() {
        return Err(LadderError::LengthMismatch {
            from_len: from.char_count(),
            to_len: to.char_count(),
            from: from.text().to_string(),
            to: to.text().to_string(),
        });
    }

    Ok((from, to))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::words_from_slice;
/// use word_ladder::wordlists::SAMPLE_DICTIONARY;
///
/// let words = words_from_slice(SAMPLE_DICTIONARY);
/// assert_eq!(words.len(), SAMPLE_DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "word_ladder_{}_{name}.txt",
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn read_lines_from_input() {
        let path = temp_file("input", "КОТ\nТОН\n");
        let lines = read_lines(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(lines, vec!["КОТ", "ТОН"]);
    }

    #[test]
    fn read_lines_skips_blank_and_trims() {
        let path = temp_file("blank", "  КОТ \r\n\n\nТОН\n   \n");
        let lines = read_lines(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(lines, vec!["КОТ", "ТОН"]);
    }

    #[test]
    fn read_lines_from_missing_file() {
        let path = std::env::temp_dir().join("word_ladder_does_not_exist.txt");
        assert!(read_lines(path).is_err());
    }

    #[test]
    fn load_dictionary_keeps_file_order() {
        let path = temp_file("dict", "РОТ\nКОТ\nРОТА\n");
        let words = load_dictionary(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["РОТ", "КОТ", "РОТА"]);
    }

    #[test]
    fn parse_query_from_two_words() {
        let (from, to) = parse_query(&["КОН".to_string(), "ДОР".to_string()]).unwrap();
        assert_eq!(from.text(), "КОН");
        assert_eq!(to.text(), "ДОР");
    }

    #[test]
    fn parse_query_wrong_word_count() {
        assert_eq!(
            parse_query(&["КО", "ДОР", "ДОР"]),
            Err(LadderError::WrongWordCount(3))
        );
        assert_eq!(parse_query(&["КОТ"]), Err(LadderError::WrongWordCount(1)));
        assert_eq!(
            parse_query::<&str>(&[]),
            Err(LadderError::WrongWordCount(0))
        );
    }

    #[test]
    fn parse_query_length_mismatch() {
        assert!(matches!(
            parse_query(&["КО", "ДОР"]),
            Err(LadderError::LengthMismatch {
                from_len: 2,
                to_len: 3,
                ..
            })
        ));
    }

    #[test]
    fn parse_query_counts_characters_not_bytes() {
        // Same byte length, different character count
        assert!(parse_query(&["ab", "я"]).is_err());
        assert!(parse_query(&["КОТ", "cat"]).is_ok());
    }

    #[test]
    fn words_from_slice_skips_empty() {
        let words = words_from_slice(&["КОТ", "", "ТОТ"]);
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "ТОТ");
    }
}
