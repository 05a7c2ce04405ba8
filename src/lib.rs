//! Word Scramble
//!
//! An anagram word-game engine: pick a random root word, submit candidate
//! words, validate each against three rules (originality, constructibility,
//! real word), and keep score.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::dictionary::WordSet;
//! use word_scramble::engine::{Outcome, Session};
//!
//! let checker = WordSet::from_words(["silk"], "en");
//! let mut session = Session::start(&["silkworm"], checker).unwrap();
//!
//! assert_eq!(session.root_word(), "silkworm");
//! match session.submit("silk") {
//!     Outcome::Accepted { word, awarded } => {
//!         assert_eq!(word, "silk");
//!         assert!((awarded - 5.0).abs() < f64::EPSILON);
//!     }
//!     other => panic!("expected acceptance, got {other:?}"),
//! }
//! ```

// Core domain types
pub mod core;

// Validation and scoring engine
pub mod engine;

// Dictionary lookup capability
pub mod dictionary;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
