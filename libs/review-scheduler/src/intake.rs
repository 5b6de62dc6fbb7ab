//! New-card intake throttling.
//!
//! A freshly created card is placed on the first day, within a short
//! horizon, that still has room under the daily cap.

use crate::date::add_days;
use crate::queue::count_due_on;
use crate::types::{CardState, Schedulable};
use chrono::NaiveDate;

/// How many days past today intake planning looks for capacity.
///
/// When every day in the horizon is full the card lands on today
/// anyway. Cards can therefore overcrowd a day rather than be pushed
/// indefinitely into the future.
pub const INTAKE_SEARCH_HORIZON_DAYS: u32 = 7;

/// Day offset (0 = today) for a new card's first review.
pub fn plan_new_card_intake<T: Schedulable>(
    today: NaiveDate,
    existing: &[T],
    max_new_per_day: u32,
) -> u32 {
    let cap = max_new_per_day as usize;
    if count_due_on(existing, today) < cap {
        return 0;
    }

    let offset = (1..=INTAKE_SEARCH_HORIZON_DAYS)
        .find(|&day| count_due_on(existing, add_days(today, day)) < cap);

    match offset {
        Some(day) => {
            tracing::debug!(day, max_new_per_day, "today is full, deferring new card");
            day
        }
        None => {
            tracing::warn!(
                horizon = INTAKE_SEARCH_HORIZON_DAYS,
                max_new_per_day,
                "no capacity within intake horizon, scheduling new card today"
            );
            0
        }
    }
}

/// Initial state for a card created on `today`, placed by the intake plan.
pub fn new_card_state<T: Schedulable>(
    today: NaiveDate,
    existing: &[T],
    max_new_per_day: u32,
) -> CardState {
    let offset = plan_new_card_intake(today, existing, max_new_per_day);
    CardState {
        interval: offset,
        next_review: add_days(today, offset),
        ..CardState::new(today)
    }
}
