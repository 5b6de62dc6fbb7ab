//! Calendar-day helpers.
//!
//! The scheduler works on whole days. Timestamps are reduced to a
//! [`NaiveDate`] once, at the boundary, so due checks never depend on
//! time-of-day or DST.

use chrono::{DateTime, Days, Duration, NaiveDate, NaiveDateTime, TimeZone, Timelike};

/// Strip time-of-day, keeping the calendar date in the timestamp's own zone.
pub fn normalize<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> NaiveDate {
    timestamp.date_naive()
}

/// Calendar day a study session belongs to.
///
/// Before `daily_reset_hour` the session still counts towards the
/// previous day, so late-night reviews land on the day they started.
pub fn study_day(now: NaiveDateTime, daily_reset_hour: u32) -> NaiveDate {
    if now.hour() < daily_reset_hour {
        (now - Duration::days(1)).date()
    } else {
        now.date()
    }
}

/// `date` shifted forward by `days`, saturating at [`NaiveDate::MAX`].
pub fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}

/// Whole days from `from` to `to`; negative when `to` is earlier.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}
