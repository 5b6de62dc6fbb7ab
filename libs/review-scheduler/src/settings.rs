//! Scheduler settings: global defaults with per-subject overrides.

use crate::error::{Result, SchedulerError};
use serde::{Deserialize, Serialize};

/// Global settings configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerSettings {
    /// Cap on cards becoming due on one day through new-card intake.
    pub max_new_per_day: u32,
    /// Jitter strength in `[0, 1]`; 0 disables spreading.
    pub spread_factor: f64,
    /// Maximum cards per review session, unlimited when `None`.
    pub review_limit: Option<usize>,
    /// Hour of day (0-23) when a new study day begins.
    pub daily_reset_hour: u32,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            max_new_per_day: 20,
            spread_factor: 1.0,
            review_limit: None,
            daily_reset_hour: 0,
        }
    }
}

impl SchedulerSettings {
    pub fn validate(&self) -> Result<()> {
        EffectiveSettings::from(self).validate()
    }
}

/// Per-subject settings (all fields optional for overrides).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectSettings {
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_new_per_day: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spread_factor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_limit: Option<usize>,
}

impl SubjectSettings {
    /// Create subject settings with only the subject set.
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            max_new_per_day: None,
            spread_factor: None,
            review_limit: None,
        }
    }
}

/// Effective settings (global merged with subject overrides).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectiveSettings {
    pub max_new_per_day: u32,
    pub spread_factor: f64,
    pub review_limit: Option<usize>,
    pub daily_reset_hour: u32,
}

impl EffectiveSettings {
    /// Merge global settings with optional subject settings.
    pub fn merge(global: &SchedulerSettings, subject: Option<&SubjectSettings>) -> Self {
        match subject {
            Some(s) => Self {
                max_new_per_day: s.max_new_per_day.unwrap_or(global.max_new_per_day),
                spread_factor: s.spread_factor.unwrap_or(global.spread_factor),
                review_limit: s.review_limit.or(global.review_limit),
                daily_reset_hour: global.daily_reset_hour,
            },
            None => Self {
                max_new_per_day: global.max_new_per_day,
                spread_factor: global.spread_factor,
                review_limit: global.review_limit,
                daily_reset_hour: global.daily_reset_hour,
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_new_per_day == 0 {
            return Err(SchedulerError::ZeroNewCardLimit);
        }
        if !(0.0..=1.0).contains(&self.spread_factor) {
            return Err(SchedulerError::SpreadFactorOutOfRange(self.spread_factor));
        }
        if self.daily_reset_hour > 23 {
            return Err(SchedulerError::ResetHourOutOfRange(self.daily_reset_hour));
        }
        Ok(())
    }
}

impl From<&SchedulerSettings> for EffectiveSettings {
    fn from(global: &SchedulerSettings) -> Self {
        Self::merge(global, None)
    }
}
