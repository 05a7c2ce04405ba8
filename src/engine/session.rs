//! Game session state and the submission pipeline
//!
//! A `Session` owns the root word, the used-word list, and the running
//! score. It is single-threaded by design; concurrent play needs one
//! session per player or external serialization.

use std::fmt;

use rand::prelude::IndexedRandom;

use super::rules::{Outcome, Rejection};
use super::scoring;
use crate::core::{LetterPool, letter_count, normalize};
use crate::dictionary::SpellChecker;

/// Language tag used when none is given
pub const DEFAULT_LANGUAGE: &str = "en";

/// Error starting or restarting a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The supplied word list had no entries to pick a root word from
    EmptyWordList,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "word list is empty, no root word to pick"),
        }
    }
}

impl std::error::Error for SessionError {}

/// One play-through: a fixed root word, the accepted words, and the score
///
/// Mutation happens only through [`Session::submit`] and
/// [`Session::restart`]; everything else is read-only.
#[derive(Debug)]
pub struct Session<C> {
    checker: C,
    language: String,
    root: String,
    letters: LetterPool,
    used: Vec<String>,
    score: f64,
}

/// Read-only copy of the observable session state
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub root_word: String,
    pub used_words: Vec<String>,
    pub score: f64,
}

impl<C: SpellChecker> Session<C> {
    /// Start a session with a root word picked uniformly at random
    ///
    /// Uses [`DEFAULT_LANGUAGE`] for dictionary lookups.
    ///
    /// # Errors
    /// Returns [`SessionError::EmptyWordList`] if `word_list` has no entries.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::WordSet;
    /// use word_scramble::engine::Session;
    ///
    /// let checker = WordSet::from_words(["silk"], "en");
    /// let session = Session::start(&["silkworm"], checker).unwrap();
    /// assert_eq!(session.root_word(), "silkworm");
    /// assert_eq!(session.score(), 0.0);
    /// ```
    pub fn start<S: AsRef<str>>(word_list: &[S], checker: C) -> Result<Self, SessionError> {
        Self::start_in_language(word_list, checker, DEFAULT_LANGUAGE)
    }

    /// Start a session that queries the dictionary in a specific language
    ///
    /// # Errors
    /// Returns [`SessionError::EmptyWordList`] if `word_list` has no entries.
    pub fn start_in_language<S: AsRef<str>>(
        word_list: &[S],
        checker: C,
        language: &str,
    ) -> Result<Self, SessionError> {
        let root = pick_root(word_list)?;
        let letters = LetterPool::new(&root);

        Ok(Self {
            checker,
            language: language.to_string(),
            root,
            letters,
            used: Vec::new(),
            score: 0.0,
        })
    }

    /// Submit a candidate word
    ///
    /// The candidate is normalized (lowercased, trimmed), then checked
    /// against the three rules in order: originality, constructibility,
    /// real word. The first failing rule costs one point and reports the
    /// rejection; passing all three records the word at the front of the
    /// used list and awards points. Blank input is ignored entirely.
    pub fn submit(&mut self, input: &str) -> Outcome {
        let word = normalize(input);

        if word.is_empty() {
            return Outcome::Empty;
        }

        if let Err(rejection) = self.validate(&word) {
            self.score -= scoring::PENALTY;
            return Outcome::Rejected(rejection);
        }

        self.used.insert(0, word.clone());
        let awarded = scoring::award(self.used.len(), letter_count(&word));
        self.score += awarded;

        Outcome::Accepted { word, awarded }
    }

    /// Tear the session down and start over with a fresh root word
    ///
    /// Clears the used-word list, resets the score to zero, and picks a new
    /// root at random. There is no partial reset.
    ///
    /// # Errors
    /// Returns [`SessionError::EmptyWordList`] if `word_list` has no
    /// entries; the current session state is left untouched in that case.
    pub fn restart<S: AsRef<str>>(&mut self, word_list: &[S]) -> Result<&str, SessionError> {
        let root = pick_root(word_list)?;
        self.letters = LetterPool::new(&root);
        self.root = root;
        self.used.clear();
        self.score = 0.0;

        Ok(&self.root)
    }

    fn validate(&self, word: &str) -> Result<(), Rejection> {
        // Originality: not played before this session
        if self.used.iter().any(|used| used == word) {
            return Err(Rejection::AlreadyUsed);
        }

        // Constructible: letters drawn from the root word's pool
        if !self.letters.can_spell(word) {
            return Err(Rejection::NotConstructible);
        }

        // Real word: long enough, not the root itself, and in the dictionary
        if letter_count(word) < 3
            || word == self.root
            || !self.checker.is_recognized(word, &self.language)
        {
            return Err(Rejection::NotARealWord);
        }

        Ok(())
    }

    /// The session's fixed root word
    #[inline]
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used
    }

    /// The running score
    #[inline]
    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }

    /// The language dictionary lookups are made in
    #[inline]
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Read-only copy of the observable state, for presentation layers
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            root_word: self.root.clone(),
            used_words: self.used.clone(),
            score: self.score,
        }
    }
}

/// Pick a root word uniformly at random, normalized for letter matching
fn pick_root<S: AsRef<str>>(word_list: &[S]) -> Result<String, SessionError> {
    word_list
        .choose(&mut rand::rng())
        .map(|word| normalize(word.as_ref()))
        .ok_or(SessionError::EmptyWordList)
}
