//! Error types for review-scheduler.

use thiserror::Error;

/// Result type alias using SchedulerError.
pub type Result<T> = std::result::Result<T, SchedulerError>;

/// Errors raised at the edges of the scheduler (parsing and settings).
///
/// Scheduling itself never fails.
#[derive(Debug, Error, PartialEq)]
pub enum SchedulerError {
    #[error("unknown rating: {0}")]
    UnknownRating(String),

    #[error("quality {0} is outside the 0-5 scale")]
    UnknownQuality(u8),

    #[error("spread factor {0} must be within [0, 1]")]
    SpreadFactorOutOfRange(f64),

    #[error("max new cards per day must be at least 1")]
    ZeroNewCardLimit,

    #[error("daily reset hour {0} must be within 0-23")]
    ResetHourOutOfRange(u32),
}
