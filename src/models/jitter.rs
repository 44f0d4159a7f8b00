use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::CHART_CONFIG;

/// Source of the small vertical offset given to NEUTRAL articles so they don't
/// all sit on top of each other on the zero line.
pub trait Jitter {
    fn sample(&mut self) -> f64;
}

/// Any closure producing offsets is a jitter source (handy for fixed offsets in tests).
impl<F> Jitter for F
where
    F: FnMut() -> f64,
{
    fn sample(&mut self) -> f64 {
        self()
    }
}

/// Uniform jitter in `[-amplitude, +amplitude]`.
pub struct RandomJitter<R: Rng> {
    rng: R,
    amplitude: f64,
}

impl<R: Rng> RandomJitter<R> {
    pub fn new(rng: R, amplitude: f64) -> Self {
        Self {
            rng,
            amplitude: amplitude.abs(),
        }
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }
}

impl RandomJitter<StdRng> {
    /// Entropy-seeded jitter with the configured amplitude.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy(), CHART_CONFIG.neutral_jitter)
    }

    /// Reproducible jitter for tests.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed), CHART_CONFIG.neutral_jitter)
    }
}

impl<R: Rng> Jitter for RandomJitter<R> {
    fn sample(&mut self) -> f64 {
        if self.amplitude == 0.0 {
            return 0.0;
        }
        self.rng.gen_range(-self.amplitude..=self.amplitude)
    }
}
