//! Submission outcomes and rejection reasons
//!
//! Rejections are expected, user-facing results rather than errors; each one
//! carries a stable title/message pair for display.

use std::fmt;

/// Result of submitting a candidate word
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Candidate passed all three rules and was recorded
    Accepted {
        /// The normalized word as it entered the used list
        word: String,
        /// Points added to the score for this word
        awarded: f64,
    },
    /// Candidate failed a rule; a one-point penalty was applied
    Rejected(Rejection),
    /// Blank submission; ignored without penalty or state change
    Empty,
}

impl Outcome {
    /// Whether the submission was accepted
    #[inline]
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Why a candidate was rejected
///
/// Rules are checked in this order and short-circuit on the first failure,
/// so exactly one reason applies per rejected submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The word was already played this session
    AlreadyUsed,
    /// The word cannot be spelled from the root word's letters
    NotConstructible,
    /// Too short, identical to the root word, or not in the dictionary
    NotARealWord,
}

impl Rejection {
    /// Short display title for this rejection
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Word used already",
            Self::NotConstructible => "Word not possible",
            Self::NotARealWord => "Word not recognized",
        }
    }

    /// Longer display message for this rejection
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Be more original",
            Self::NotConstructible => "You can't spell that from the root word",
            Self::NotARealWord => "You can't just make them up, you know!",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}
