//! Dictionary lookup capability
//!
//! Spell checking is an injected capability with a boolean contract; the
//! engine never sees how a backend stores its words.

mod wordset;

pub use wordset::WordSet;

/// A capability answering whether a word is correctly spelled in a language
pub trait SpellChecker {
    /// Report whether `word` is a recognized word of `language`
    fn is_recognized(&self, word: &str, language: &str) -> bool;
}

impl<C: SpellChecker + ?Sized> SpellChecker for &C {
    fn is_recognized(&self, word: &str, language: &str) -> bool {
        (**self).is_recognized(word, language)
    }
}
