//! Random sources for the review-date spread.
//!
//! Spreading adds a few days of jitter to long intervals so cards
//! created together don't all fall due together. The draw is injected
//! so tests can pin it.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniform samples in `[0, 1)`.
pub trait SpreadSource {
    fn sample(&mut self) -> f64;
}

/// Spread drawn from a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomSpread<R = ThreadRng> {
    rng: R,
}

impl RandomSpread<ThreadRng> {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomSpread<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSpread<StdRng> {
    /// Reproducible spread for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomSpread<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> SpreadSource for RandomSpread<R> {
    fn sample(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Never spreads.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSpread;

impl SpreadSource for NoSpread {
    fn sample(&mut self) -> f64 {
        0.0
    }
}

/// Always returns the same sample, clamped into `[0, 1)`.
#[derive(Debug, Clone, Copy)]
pub struct FixedSpread(pub f64);

impl SpreadSource for FixedSpread {
    fn sample(&mut self) -> f64 {
        if self.0.is_nan() {
            return 0.0;
        }
        self.0.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

impl<S: SpreadSource + ?Sized> SpreadSource for &mut S {
    fn sample(&mut self) -> f64 {
        (**self).sample()
    }
}

/// Extra days added on top of an interval.
///
/// `max_spread = ceil(interval * 0.2 * spread_factor)`, and the result
/// is uniform in `[0, max_spread)`.
pub fn spread_days(interval: u32, spread_factor: f64, source: &mut impl SpreadSource) -> u32 {
    let max_spread = (f64::from(interval) * 0.2 * spread_factor).ceil();
    if max_spread <= 0.0 {
        return 0;
    }
    let days = (source.sample() * max_spread).floor();
    // sample < 1, so days < max_spread; the min guards a bad custom source
    (days.max(0.0) as u32).min(max_spread as u32 - 1)
}
