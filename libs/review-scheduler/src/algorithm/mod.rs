//! Spaced repetition algorithm.

pub mod sm2;
pub mod spread;

pub use sm2::{preview_intervals, rate_review, IntervalPreview, MAX_INTERVAL_DAYS};
pub use spread::{FixedSpread, NoSpread, RandomSpread, SpreadSource};
