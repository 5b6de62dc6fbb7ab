//! Review bookkeeping layered on top of the SM-2 update.

use crate::algorithm::sm2::rate_review;
use crate::algorithm::spread::SpreadSource;
use crate::types::{CardState, Rating, ReviewStats};
use chrono::NaiveDate;

impl ReviewStats {
    /// Counters after one more review with `rating`.
    pub fn record(self, rating: Rating) -> Self {
        let correct = rating.is_correct();
        Self {
            review_count: self.review_count.saturating_add(1),
            correct_count: self.correct_count.saturating_add(u32::from(correct)),
            incorrect_count: self.incorrect_count.saturating_add(u32::from(!correct)),
        }
    }
}

/// Full review event: reschedule, then update statistics and
/// `last_reviewed`. The result replaces the stored state.
pub fn apply_review(
    state: &CardState,
    rating: Rating,
    today: NaiveDate,
    spread_factor: f64,
    source: &mut impl SpreadSource,
) -> CardState {
    let mut next = rate_review(state, rating, spread_factor, today, source);
    next.stats = state.stats.record(rating);
    next.last_reviewed = Some(today);
    next
}
