//! Due-card checks and review queue ordering.

use crate::date::{add_days, days_between};
use crate::types::{CardState, Schedulable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Whether the card is due on `today` (scheduled today or earlier).
pub fn is_due(state: &CardState, today: NaiveDate) -> bool {
    state.next_review <= today
}

/// Days until the card is due. Zero means today, negative means overdue.
pub fn days_until_due(state: &CardState, today: NaiveDate) -> i64 {
    days_between(today, state.next_review)
}

/// Due cards in review order, truncated to `limit`.
///
/// Most overdue first. Cards due on the same day go by descending
/// repetitions, so the streaks closest to graduating are protected
/// from further delay. The sort is stable, so equal cards keep their
/// input order.
pub fn select_due_cards<T: Schedulable>(
    cards: &[T],
    today: NaiveDate,
    limit: Option<usize>,
) -> Vec<&T> {
    let mut due: Vec<&T> = cards
        .iter()
        .filter(|card| is_due(card.card_state(), today))
        .collect();

    due.sort_by_key(|card| {
        let state = card.card_state();
        (state.next_review, Reverse(state.repetitions))
    });

    if let Some(limit) = limit {
        due.truncate(limit);
    }
    due
}

/// Number of cards scheduled exactly on `date`.
pub fn count_due_on<T: Schedulable>(cards: &[T], date: NaiveDate) -> usize {
    cards
        .iter()
        .filter(|card| card.card_state().next_review == date)
        .count()
}

/// Due-state breakdown of a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueSummary {
    pub overdue: usize,
    pub due_today: usize,
    pub upcoming: usize,
    pub total: usize,
}

impl DueSummary {
    /// Cards that should be reviewed now.
    pub fn due(&self) -> usize {
        self.overdue + self.due_today
    }
}

/// Count overdue, due-today and upcoming cards.
pub fn summarize<T: Schedulable>(cards: &[T], today: NaiveDate) -> DueSummary {
    cards.iter().fold(DueSummary::default(), |mut summary, card| {
        match days_until_due(card.card_state(), today) {
            d if d < 0 => summary.overdue += 1,
            0 => summary.due_today += 1,
            _ => summary.upcoming += 1,
        }
        summary.total += 1;
        summary
    })
}

/// Review load for each of the next `days` days starting at `today`.
///
/// Overdue cards count towards day 0; cards beyond the window are ignored.
pub fn forecast<T: Schedulable>(cards: &[T], today: NaiveDate, days: u32) -> Vec<usize> {
    let mut load = vec![0; days as usize];
    if load.is_empty() {
        return load;
    }
    let horizon = add_days(today, days);
    for card in cards {
        let next_review = card.card_state().next_review;
        if next_review >= horizon {
            continue;
        }
        let offset = days_between(today, next_review).max(0) as usize;
        load[offset] += 1;
    }
    load
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn due_in(days: i64, repetitions: u32) -> CardState {
        CardState {
            repetitions,
            next_review: today() + chrono::Duration::days(days),
            ..CardState::new(today())
        }
    }

    #[test]
    fn due_today_or_earlier() {
        assert!(is_due(&due_in(0, 0), today()));
        assert!(is_due(&due_in(-4, 0), today()));
        assert!(!is_due(&due_in(1, 0), today()));
    }

    #[test]
    fn days_until_due_sign() {
        assert_eq!(days_until_due(&due_in(3, 0), today()), 3);
        assert_eq!(days_until_due(&due_in(0, 0), today()), 0);
        assert_eq!(days_until_due(&due_in(-2, 0), today()), -2);
    }

    #[test]
    fn date_precedes_repetitions() {
        let cards = vec![due_in(-1, 5), due_in(-3, 2)];
        let due = select_due_cards(&cards, today(), None);
        assert_eq!(due, vec![&cards[1], &cards[0]]);
    }

    #[test]
    fn same_day_orders_by_repetitions_descending() {
        let cards = vec![due_in(0, 1), due_in(0, 4), due_in(2, 9), due_in(0, 2)];
        let order: Vec<u32> = select_due_cards(&cards, today(), None)
            .iter()
            .map(|c| c.repetitions)
            .collect();
        assert_eq!(order, vec![4, 2, 1]);
    }

    #[test]
    fn limit_truncates_after_ordering() {
        let cards = vec![due_in(0, 0), due_in(-5, 0), due_in(-1, 0)];
        let due = select_due_cards(&cards, today(), Some(2));
        assert_eq!(due, vec![&cards[1], &cards[2]]);

        assert_eq!(select_due_cards(&cards, today(), Some(10)).len(), 3);
        assert!(select_due_cards(&cards, today(), Some(0)).is_empty());
    }

    #[test]
    fn selects_from_filtered_references() {
        let cards = vec![due_in(-1, 0), due_in(0, 4), due_in(-2, 1), due_in(3, 2)];
        // e.g. the cards of one subject, borrowed out of the full collection
        let subset: Vec<&CardState> = cards.iter().filter(|c| c.repetitions > 0).collect();
        let due = select_due_cards(&subset, today(), None);
        assert_eq!(due, vec![&&cards[2], &&cards[1]]);
        assert_eq!(summarize(&subset, today()).upcoming, 1);
    }

    #[test]
    fn summary_buckets() {
        let cards = vec![due_in(-2, 0), due_in(0, 0), due_in(0, 1), due_in(5, 0)];
        let summary = summarize(&cards, today());
        assert_eq!(
            summary,
            DueSummary {
                overdue: 1,
                due_today: 2,
                upcoming: 1,
                total: 4,
            }
        );
        assert_eq!(summary.due(), 3);
    }

    #[test]
    fn forecast_folds_overdue_into_today() {
        let cards = vec![due_in(-2, 0), due_in(0, 0), due_in(1, 0), due_in(2, 0), due_in(3, 0)];
        assert_eq!(forecast(&cards, today(), 3), vec![2, 1, 1]);
        assert!(forecast(&cards, today(), 0).is_empty());
    }

    #[test]
    fn count_due_on_is_exact_day() {
        let cards = vec![due_in(-1, 0), due_in(0, 0), due_in(0, 3)];
        assert_eq!(count_due_on(&cards, today()), 2);
    }
}
