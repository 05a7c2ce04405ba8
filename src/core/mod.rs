//! Core domain types for the word game
//!
//! This module contains the fundamental domain operations with zero game
//! state: letter-multiset arithmetic and candidate normalization.

mod candidate;
mod letters;

pub use candidate::{letter_count, normalize};
pub use letters::LetterPool;
