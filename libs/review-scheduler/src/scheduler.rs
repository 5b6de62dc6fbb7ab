//! Review scheduler bundling settings with a spread source.

use crate::algorithm::sm2::{preview_intervals, rate_review, IntervalPreview};
use crate::algorithm::spread::{RandomSpread, SpreadSource};
use crate::date;
use crate::error::Result;
use crate::intake::{new_card_state, plan_new_card_intake};
use crate::queue;
use crate::review::apply_review;
use crate::settings::EffectiveSettings;
use crate::types::{CardState, Rating, Schedulable};
use chrono::{NaiveDate, NaiveDateTime};

/// Scheduler for one subject's settings.
///
/// Holds no card data; every call takes the states it works on and
/// returns replacements.
#[derive(Debug, Clone)]
pub struct ReviewScheduler<S = RandomSpread> {
    settings: EffectiveSettings,
    spread: S,
}

impl ReviewScheduler<RandomSpread> {
    /// Scheduler spreading due dates with the thread-local RNG.
    pub fn new(settings: EffectiveSettings) -> Result<Self> {
        Self::with_spread_source(settings, RandomSpread::new())
    }
}

impl<S: SpreadSource> ReviewScheduler<S> {
    pub fn with_spread_source(settings: EffectiveSettings, spread: S) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings, spread })
    }

    pub fn settings(&self) -> &EffectiveSettings {
        &self.settings
    }

    /// Calendar day `now` belongs to under the configured reset hour.
    pub fn study_day(&self, now: NaiveDateTime) -> NaiveDate {
        date::study_day(now, self.settings.daily_reset_hour)
    }

    /// SM-2 update only, see [`rate_review`].
    pub fn rate(&mut self, state: &CardState, rating: Rating, today: NaiveDate) -> CardState {
        rate_review(state, rating, self.settings.spread_factor, today, &mut self.spread)
    }

    /// SM-2 update plus statistics and `last_reviewed`.
    pub fn review(&mut self, state: &CardState, rating: Rating, today: NaiveDate) -> CardState {
        apply_review(state, rating, today, self.settings.spread_factor, &mut self.spread)
    }

    pub fn preview(&self, state: &CardState) -> IntervalPreview {
        preview_intervals(state)
    }

    pub fn is_due(&self, state: &CardState, today: NaiveDate) -> bool {
        queue::is_due(state, today)
    }

    pub fn days_until_due(&self, state: &CardState, today: NaiveDate) -> i64 {
        queue::days_until_due(state, today)
    }

    /// Review queue for `today`, capped at the configured review limit.
    pub fn due_cards<'a, T: Schedulable>(&self, cards: &'a [T], today: NaiveDate) -> Vec<&'a T> {
        queue::select_due_cards(cards, today, self.settings.review_limit)
    }

    pub fn plan_intake<T: Schedulable>(&self, today: NaiveDate, existing: &[T]) -> u32 {
        plan_new_card_intake(today, existing, self.settings.max_new_per_day)
    }

    pub fn new_card<T: Schedulable>(&self, today: NaiveDate, existing: &[T]) -> CardState {
        new_card_state(today, existing, self.settings.max_new_per_day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::spread::{FixedSpread, NoSpread};
    use crate::error::SchedulerError;
    use crate::settings::SchedulerSettings;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn settings() -> EffectiveSettings {
        EffectiveSettings::from(&SchedulerSettings::default())
    }

    #[test]
    fn rejects_invalid_settings() {
        let mut bad = settings();
        bad.max_new_per_day = 0;
        let err = ReviewScheduler::with_spread_source(bad, NoSpread).unwrap_err();
        assert_eq!(err, SchedulerError::ZeroNewCardLimit);
    }

    #[test]
    fn rate_uses_configured_spread() {
        let mut scheduler = ReviewScheduler::with_spread_source(settings(), FixedSpread(0.75)).unwrap();
        let card = CardState {
            repetitions: 1,
            interval: 1,
            ..CardState::new(today())
        };
        assert_eq!(scheduler.rate(&card, Rating::Good, today()).interval, 7);

        let mut calm = settings();
        calm.spread_factor = 0.0;
        let mut scheduler = ReviewScheduler::with_spread_source(calm, FixedSpread(0.75)).unwrap();
        assert_eq!(scheduler.rate(&card, Rating::Good, today()).interval, 6);
    }

    #[test]
    fn preview_does_not_consume_spread() {
        let scheduler = ReviewScheduler::with_spread_source(settings(), NoSpread).unwrap();
        let card = CardState::new(today());
        let preview = scheduler.preview(&card);
        assert_eq!(preview.good, 1);
        assert_eq!(preview.again, 1);
    }

    #[test]
    fn due_cards_respect_review_limit() {
        let mut limited = settings();
        limited.review_limit = Some(1);
        let scheduler = ReviewScheduler::with_spread_source(limited, NoSpread).unwrap();
        let cards = vec![CardState::new(today()), CardState::new(today())];
        assert_eq!(scheduler.due_cards(&cards, today()).len(), 1);
    }

    #[test]
    fn study_day_follows_reset_hour() {
        let mut late = settings();
        late.daily_reset_hour = 3;
        let scheduler = ReviewScheduler::with_spread_source(late, NoSpread).unwrap();
        let now = today().and_hms_opt(1, 0, 0).unwrap();
        assert_eq!(scheduler.study_day(now), NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
    }

    #[test]
    fn default_scheduler_uses_thread_rng() {
        let mut scheduler = ReviewScheduler::new(settings()).unwrap();
        let card = CardState {
            repetitions: 5,
            interval: 100,
            ..CardState::new(today())
        };
        let next = scheduler.review(&card, Rating::Good, today());
        // 250 days plus fewer than ceil(250 * 0.2) spread days
        assert!((250..=300).contains(&next.interval));
        assert_eq!(next.stats.review_count, 1);
    }
}
