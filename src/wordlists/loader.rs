//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use std::fs;
use std::io;
use std::path::Path;

use crate::core::normalize;

/// Load words from a newline-delimited file
///
/// Entries are normalized (lowercased, trimmed); blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened. Callers treat
/// this as fatal at startup: the game cannot proceed without a root word.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} root words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let word = normalize(line);
            if word.is_empty() { None } else { Some(word) }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to an owned word list
///
/// # Examples
/// ```
/// use word_scramble::wordlists::STARTERS;
/// use word_scramble::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(STARTERS);
/// assert_eq!(words.len(), STARTERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&word| normalize(word)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_normalizes() {
        let input = &["Silkworm", "KEYBOARD ", "notebook"];
        let words = words_from_slice(input);

        assert_eq!(words, ["silkworm", "keyboard", "notebook"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn load_from_embedded_starters() {
        use crate::wordlists::STARTERS;

        let words = words_from_slice(STARTERS);
        assert_eq!(words.len(), STARTERS.len());
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        let result = load_from_file("data/no_such_list.txt");
        assert!(result.is_err());
    }
}
