//! Validation and scoring engine
//!
//! Session state, the three submission rules, and score bookkeeping.

mod rules;
mod scoring;
mod session;

pub use rules::{Outcome, Rejection};
pub use scoring::{PENALTY, award};
pub use session::{DEFAULT_LANGUAGE, Session, SessionError, Snapshot};
