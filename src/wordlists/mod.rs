//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary for zero-cost access.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, STARTERS, STARTERS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starters_count_matches_const() {
        assert_eq!(STARTERS.len(), STARTERS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn starters_are_valid_root_words() {
        // All starters should be 8 letters, lowercase
        for &word in STARTERS {
            assert_eq!(word.len(), 8, "Starter '{word}' is not 8 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Starter '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_words_are_valid() {
        // All dictionary words should be lowercase and playable (3+ letters)
        for &word in &DICTIONARY[..10] {
            // Just check first 10 for speed
            assert!(word.len() >= 3, "Word '{word}' is too short to play");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn starters_subset_of_dictionary() {
        // Every root word is itself a real word
        let dictionary_set: std::collections::HashSet<_> = DICTIONARY.iter().collect();

        for &starter in &STARTERS[..10] {
            // Check first 10 for speed
            assert!(
                dictionary_set.contains(&starter),
                "Starter '{starter}' not in dictionary"
            );
        }
    }

    #[test]
    fn expected_counts() {
        assert_eq!(STARTERS_COUNT, 326, "Expected 326 starter words");
        assert_eq!(DICTIONARY_COUNT, 4258, "Expected 4,258 dictionary words");
    }
}
