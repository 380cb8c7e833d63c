//! Stochastic path simulation.
//!
//! Derives log-return statistics from a historical price series and emits a
//! synthetic price path of the requested length: returns are resampled from
//! a normal distribution fitted to the source, an independent zero-mean
//! perturbation of standard deviation `noise_level` is added per day, and
//! the path is reconstructed by exponentiating the cumulative return sum.
//!
//! Key design choices:
//! - Population standard deviation for the fitted return distribution.
//! - Day 0 carries a pinned zero return, so the path starts at exactly
//!   `source[0]`; resampled returns and noise apply from day 1 onward.
//! - Statistics are recomputed per call, never cached.

use rand::rngs::StdRng;
use rand::Rng;
use rand_distr::Normal;
use thiserror::Error;

use crate::domain::PriceSeries;

/// Errors from path simulation.
#[derive(Debug, Error)]
pub enum SimulateError {
    #[error("horizon must be at least 1 day")]
    EmptyHorizon,

    #[error("noise level {noise_level} must be non-negative and finite")]
    InvalidNoise { noise_level: f64 },
}

/// Mean and standard deviation of a series' log-returns.
///
/// Population standard deviation: a 2-point series has one return and a
/// standard deviation of 0, making the resampled path deterministic apart
/// from injected noise. That is a valid degenerate input, not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnStatistics {
    pub mean: f64,
    pub std_dev: f64,
}

impl ReturnStatistics {
    pub fn from_series(series: &PriceSeries) -> Self {
        let returns = series.log_returns();
        let n = returns.len() as f64;
        let mean = returns.iter().sum::<f64>() / n;
        let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
        Self {
            mean,
            std_dev: variance.sqrt(),
        }
    }
}

/// Parameters for one synthetic path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationRequest {
    /// Standard deviation of the independent per-day perturbation.
    pub noise_level: f64,
    /// Length of the output path in days.
    pub horizon_days: usize,
}

impl SimulationRequest {
    /// A request whose horizon matches the source series length — the shape
    /// the evaluation harness uses for every trial.
    pub fn matching(series: &PriceSeries, noise_level: f64) -> Self {
        Self {
            noise_level,
            horizon_days: series.len(),
        }
    }

    /// Check bounds without running a simulation. The evaluation harness
    /// calls this for every noise level before entering its trial loop.
    pub fn validate(&self) -> Result<(), SimulateError> {
        if self.horizon_days == 0 {
            return Err(SimulateError::EmptyHorizon);
        }
        if !(self.noise_level.is_finite() && self.noise_level >= 0.0) {
            return Err(SimulateError::InvalidNoise {
                noise_level: self.noise_level,
            });
        }
        Ok(())
    }
}

/// Generate one synthetic price path.
///
/// The output has length `request.horizon_days`, starts at exactly
/// `source.first()`, and is strictly positive throughout (each price is an
/// exponential of a finite sum). Draws `2 * (horizon_days - 1)` samples from
/// `rng`: one resampled return and one noise perturbation per day after
/// day 0.
pub fn simulate_path(
    source: &PriceSeries,
    request: SimulationRequest,
    rng: &mut StdRng,
) -> Result<PriceSeries, SimulateError> {
    request.validate()?;

    let stats = ReturnStatistics::from_series(source);
    // Validation guarantees both standard deviations are finite and >= 0.
    let resample = Normal::new(stats.mean, stats.std_dev)
        .expect("return std dev is non-negative and finite");
    let noise = Normal::new(0.0, request.noise_level)
        .expect("noise level is non-negative and finite");

    let first = source.first();
    let mut prices = Vec::with_capacity(request.horizon_days);
    let mut cumulative = 0.0;

    // Day 0: pinned zero return, so the path starts unperturbed.
    prices.push(first);
    for _ in 1..request.horizon_days {
        cumulative += rng.sample(resample) + rng.sample(noise);
        prices.push(first * cumulative.exp());
    }

    Ok(PriceSeries::from_raw(prices))
}
