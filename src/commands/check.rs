//! One-shot validation command
//!
//! Plays a fixed sequence of candidates against a chosen root word and
//! reports each outcome plus the final score.

use crate::dictionary::SpellChecker;
use crate::engine::{DEFAULT_LANGUAGE, Outcome, Session, SessionError};

/// Configuration for a check run
pub struct CheckConfig {
    pub root: String,
    pub candidates: Vec<String>,
    pub language: String,
}

impl CheckConfig {
    #[must_use]
    pub fn new(root: String, candidates: Vec<String>) -> Self {
        Self {
            root,
            candidates,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// Result of a check run
#[derive(Debug)]
pub struct CheckResult {
    pub root: String,
    pub steps: Vec<CheckStep>,
    pub score: f64,
    pub accepted: usize,
}

/// A single candidate and its outcome
#[derive(Debug)]
pub struct CheckStep {
    pub input: String,
    pub outcome: Outcome,
}

/// Validate candidates in order against a fixed root word
///
/// The session is started over a one-word list, so the root is exactly the
/// configured word (normalized).
///
/// # Errors
///
/// Returns [`SessionError::EmptyWordList`] only if the root word is blank.
pub fn run_check<C: SpellChecker>(
    config: CheckConfig,
    checker: C,
) -> Result<CheckResult, SessionError> {
    if config.root.trim().is_empty() {
        return Err(SessionError::EmptyWordList);
    }

    let mut session =
        Session::start_in_language(std::slice::from_ref(&config.root), checker, &config.language)?;

    let mut steps = Vec::with_capacity(config.candidates.len());
    for input in &config.candidates {
        let outcome = session.submit(input);
        steps.push(CheckStep {
            input: input.clone(),
            outcome,
        });
    }

    let accepted = steps.iter().filter(|s| s.outcome.is_accepted()).count();

    Ok(CheckResult {
        root: session.root_word().to_string(),
        steps,
        score: session.score(),
        accepted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordSet;
    use crate::engine::Rejection;

    fn checker() -> WordSet {
        WordSet::from_words(["silk", "worms", "worm"], "en")
    }

    #[test]
    fn check_plays_candidates_in_order() {
        let config = CheckConfig::new(
            "silkworm".to_string(),
            vec!["silk".to_string(), "worms".to_string(), "xyz".to_string()],
        );

        let result = run_check(config, checker()).unwrap();

        assert_eq!(result.root, "silkworm");
        assert_eq!(result.steps.len(), 3);
        assert_eq!(result.accepted, 2);
        assert!(result.steps[0].outcome.is_accepted());
        assert!(result.steps[1].outcome.is_accepted());
        assert_eq!(
            result.steps[2].outcome,
            Outcome::Rejected(Rejection::NotConstructible)
        );
        // 5 + 3 - 1
        assert!((result.score - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn check_root_is_normalized() {
        let config = CheckConfig::new("  SilkWorm ".to_string(), vec!["silk".to_string()]);

        let result = run_check(config, checker()).unwrap();
        assert_eq!(result.root, "silkworm");
        assert_eq!(result.accepted, 1);
    }

    #[test]
    fn check_blank_root_is_an_error() {
        let config = CheckConfig::new("   ".to_string(), vec![]);

        let result = run_check(config, checker());
        assert_eq!(result.unwrap_err(), SessionError::EmptyWordList);
    }

    #[test]
    fn check_counts_blank_candidates_as_ignored() {
        let config = CheckConfig::new(
            "silkworm".to_string(),
            vec![String::new(), "silk".to_string()],
        );

        let result = run_check(config, checker()).unwrap();
        assert_eq!(result.steps[0].outcome, Outcome::Empty);
        assert_eq!(result.accepted, 1);
        assert!((result.score - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn check_respects_language_override() {
        let mut config = CheckConfig::new("silkworm".to_string(), vec!["silk".to_string()]);
        config.language = "de".to_string();

        let result = run_check(config, checker()).unwrap();
        assert_eq!(
            result.steps[0].outcome,
            Outcome::Rejected(Rejection::NotARealWord)
        );
    }
}
