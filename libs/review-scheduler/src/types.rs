//! Core types for the review scheduler.

use crate::error::SchedulerError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ease factor given to every new card.
pub const INITIAL_EASE: f64 = 2.5;

/// Floor applied to the ease factor after every review.
pub const MINIMUM_EASE: f64 = 1.3;

/// Rating for a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Again,
    Hard,
    Good,
    Easy,
}

impl Rating {
    /// Every rating, in button order.
    pub const ALL: [Rating; 4] = [Self::Again, Self::Hard, Self::Good, Self::Easy];

    /// SM-2 quality score on the 0-5 scale.
    pub fn quality(self) -> u8 {
        match self {
            Self::Again => 0,
            Self::Hard => 3,
            Self::Good => 4,
            Self::Easy => 5,
        }
    }

    /// Map a 0-5 quality score back to a rating.
    ///
    /// Anything below 3 is a failed recall.
    pub fn from_quality(quality: u8) -> Result<Self, SchedulerError> {
        match quality {
            0..=2 => Ok(Self::Again),
            3 => Ok(Self::Hard),
            4 => Ok(Self::Good),
            5 => Ok(Self::Easy),
            other => Err(SchedulerError::UnknownQuality(other)),
        }
    }

    /// Whether the review statistics count this rating as a correct answer.
    ///
    /// `Hard` is a pass for scheduling but counts as incorrect here.
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Good | Self::Easy)
    }

    /// Whether SM-2 treats this rating as a lapse.
    pub fn is_lapse(self) -> bool {
        self.quality() < 3
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Again => "again",
            Self::Hard => "hard",
            Self::Good => "good",
            Self::Easy => "easy",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rating {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "again" => Ok(Self::Again),
            "hard" => Ok(Self::Hard),
            "good" => Ok(Self::Good),
            "easy" => Ok(Self::Easy),
            _ => Err(SchedulerError::UnknownRating(s.to_string())),
        }
    }
}

/// Informational review counters. The scheduling math never reads them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    pub review_count: u32,
    pub correct_count: u32,
    pub incorrect_count: u32,
}

impl ReviewStats {
    /// Share of correct answers, 0.0 for a card never reviewed.
    pub fn accuracy(&self) -> f64 {
        f64::from(self.correct_count) / f64::from(self.review_count.max(1))
    }
}

/// Scheduling state of one flashcard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardState {
    pub ease_factor: f64,
    /// Days between the last review and the next one.
    pub interval: u32,
    /// Consecutive passing reviews since the last lapse.
    pub repetitions: u32,
    pub next_review: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reviewed: Option<NaiveDate>,
    #[serde(flatten)]
    pub stats: ReviewStats,
}

impl CardState {
    /// Fresh state due on `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            ease_factor: INITIAL_EASE,
            interval: 0,
            repetitions: 0,
            next_review: today,
            last_reviewed: None,
            stats: ReviewStats::default(),
        }
    }
}

/// Flashcard record as the persistence layer stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub subject: String,
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synthesis_id: Option<String>,
    #[serde(flatten)]
    pub state: CardState,
}

/// Anything that carries a [`CardState`] the queue can inspect.
pub trait Schedulable {
    fn card_state(&self) -> &CardState;
}

impl Schedulable for CardState {
    fn card_state(&self) -> &CardState {
        self
    }
}

impl Schedulable for Card {
    fn card_state(&self) -> &CardState {
        &self.state
    }
}

impl<T: Schedulable + ?Sized> Schedulable for &T {
    fn card_state(&self) -> &CardState {
        (**self).card_state()
    }
}
