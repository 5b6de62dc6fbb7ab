//! SM-2 spaced repetition algorithm.
//!
//! Classic SuperMemo 2: the ease factor moves with each review's
//! quality, and successful reviews climb the 1, 6, `interval * ease`
//! ladder. A lapse sends the card back to a one-day interval.

use super::spread::{spread_days, NoSpread, SpreadSource};
use crate::date::add_days;
use crate::types::{CardState, Rating, MINIMUM_EASE};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Interval after the first successful review.
pub const FIRST_INTERVAL: u32 = 1;

/// Interval after the second consecutive successful review.
pub const SECOND_INTERVAL: u32 = 6;

/// Interval forced by a lapse.
pub const LAPSE_INTERVAL: u32 = 1;

/// Longest spread-free interval, about a hundred years.
pub const MAX_INTERVAL_DAYS: u32 = 36500;

/// SM-2 ease adjustment for a 0-5 quality score.
pub fn ease_delta(quality: u8) -> f64 {
    let miss = f64::from(5 - quality.min(5));
    0.1 - miss * (0.08 + miss * 0.02)
}

/// Ease after a review, clamped to the floor but not yet rounded.
fn next_ease(ease_factor: f64, quality: u8) -> f64 {
    (ease_factor + ease_delta(quality)).max(MINIMUM_EASE)
}

fn round_ease(ease_factor: f64) -> f64 {
    (ease_factor * 100.0).round() / 100.0
}

/// Repetitions and spread-free interval after a review.
fn next_step(state: &CardState, rating: Rating, ease_factor: f64) -> (u32, u32) {
    if rating.is_lapse() {
        return (0, LAPSE_INTERVAL);
    }

    let repetitions = state.repetitions.saturating_add(1);
    let interval = match repetitions {
        1 => FIRST_INTERVAL,
        2 => SECOND_INTERVAL,
        _ => {
            // an externally corrupted zero interval would otherwise stick at zero
            let previous = state.interval.max(1);
            (f64::from(previous) * ease_factor).round() as u32
        }
    };
    (repetitions, interval.min(MAX_INTERVAL_DAYS))
}

/// Compute the next scheduling state after rating a review on `today`.
///
/// Only the four SM-2 fields change: `ease_factor`, `repetitions`,
/// `interval` and `next_review`. Statistics and `last_reviewed` are
/// copied through untouched; see [`crate::review::apply_review`] for
/// the bookkeeping layer.
///
/// `spread_factor` is clamped into `[0, 1]`. The returned `interval`
/// includes any spread days.
pub fn rate_review(
    state: &CardState,
    rating: Rating,
    spread_factor: f64,
    today: NaiveDate,
    source: &mut impl SpreadSource,
) -> CardState {
    let ease_factor = next_ease(state.ease_factor, rating.quality());
    let (repetitions, interval) = next_step(state, rating, ease_factor);

    let spread_factor = if spread_factor.is_nan() {
        0.0
    } else {
        spread_factor.clamp(0.0, 1.0)
    };
    let spread = if spread_factor > 0.0 && repetitions > 0 {
        spread_days(interval, spread_factor, source)
    } else {
        0
    };
    let interval = interval.saturating_add(spread);

    tracing::debug!(
        %rating,
        repetitions,
        interval,
        spread,
        ease_factor,
        "rated review"
    );

    CardState {
        ease_factor: round_ease(ease_factor),
        interval,
        repetitions,
        next_review: add_days(today, interval),
        last_reviewed: state.last_reviewed,
        stats: state.stats,
    }
}

/// Spread-free interval each rating would produce, for labelling buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalPreview {
    pub again: u32,
    pub hard: u32,
    pub good: u32,
    pub easy: u32,
}

impl IntervalPreview {
    pub fn get(&self, rating: Rating) -> u32 {
        match rating {
            Rating::Again => self.again,
            Rating::Hard => self.hard,
            Rating::Good => self.good,
            Rating::Easy => self.easy,
        }
    }
}

/// Project the interval of every rating without touching `state`.
pub fn preview_intervals(state: &CardState) -> IntervalPreview {
    // the date is irrelevant to the interval
    let today = state.next_review;
    let interval = |rating| rate_review(state, rating, 0.0, today, &mut NoSpread).interval;
    IntervalPreview {
        again: interval(Rating::Again),
        hard: interval(Rating::Hard),
        good: interval(Rating::Good),
        easy: interval(Rating::Easy),
    }
}
