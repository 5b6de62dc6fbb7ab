//! Spaced repetition scheduling for the study app's flashcards.
//!
//! Provides:
//! - SM-2 review updates with optional due-date spreading
//! - Due checks and review queue ordering
//! - New-card intake throttling
//! - Review bookkeeping and scheduler settings
//!
//! Everything here is pure: the caller supplies "today" and a spread
//! source, and persists the returned states.

pub mod algorithm;
pub mod date;
pub mod error;
pub mod intake;
pub mod queue;
pub mod review;
pub mod scheduler;
pub mod settings;
pub mod types;

pub use algorithm::{
    preview_intervals, rate_review, FixedSpread, IntervalPreview, NoSpread, RandomSpread,
    SpreadSource,
};
pub use error::{Result, SchedulerError};
pub use intake::{new_card_state, plan_new_card_intake, INTAKE_SEARCH_HORIZON_DAYS};
pub use queue::{days_until_due, forecast, is_due, select_due_cards, summarize, DueSummary};
pub use review::apply_review;
pub use scheduler::ReviewScheduler;
pub use settings::{EffectiveSettings, SchedulerSettings, SubjectSettings};
pub use types::{Card, CardState, Rating, ReviewStats, Schedulable};
