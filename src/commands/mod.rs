//! Command implementations

pub mod check;
pub mod play;

pub use check::{CheckConfig, CheckResult, CheckStep, run_check};
pub use play::run_play;
