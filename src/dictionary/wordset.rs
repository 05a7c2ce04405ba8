//! Word-set dictionary backend
//!
//! A hashed set of known words, tagged with the single language it answers
//! for. Lookups for any other language tag are misses.

use rustc_hash::FxHashSet;

use super::SpellChecker;
use crate::wordlists::DICTIONARY;

/// Dictionary backed by a hashed word set
#[derive(Debug, Clone)]
pub struct WordSet {
    words: FxHashSet<String>,
    language: String,
}

impl WordSet {
    /// Build a word set from an iterator of words
    ///
    /// Entries are lowercased; lookups are case-insensitive.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{SpellChecker, WordSet};
    ///
    /// let checker = WordSet::from_words(["silk", "Worm"], "en");
    /// assert!(checker.is_recognized("silk", "en"));
    /// assert!(checker.is_recognized("worm", "en"));
    /// assert!(!checker.is_recognized("silk", "fr"));
    /// ```
    pub fn from_words<I, S>(words: I, language: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();

        Self {
            words,
            language: language.to_string(),
        }
    }

    /// The embedded English dictionary
    #[must_use]
    pub fn english() -> Self {
        Self::from_words(DICTIONARY.iter().copied(), "en")
    }

    /// An empty word set recognizing nothing (useful in tests)
    #[must_use]
    pub fn empty(language: &str) -> Self {
        Self {
            words: FxHashSet::default(),
            language: language.to_string(),
        }
    }

    /// Check membership without the language gate
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// The language tag this set answers for
    #[inline]
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of words in the set
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SpellChecker for WordSet {
    fn is_recognized(&self, word: &str, language: &str) -> bool {
        language.eq_ignore_ascii_case(&self.language) && self.contains(word)
    }
}
