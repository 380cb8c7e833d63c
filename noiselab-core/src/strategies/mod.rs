//! Trading strategies — pure functions from a price series to realized profit.
//!
//! Each strategy is a two-state machine over {Flat, Long}, driven by rolling
//! indicators and tracked by a `PositionTracker` constructed per execution.
//! Only closed trades count: an open Long at series end contributes nothing.
//!
//! Dispatch is closed: `StrategySpec` is a tagged enum over the three known
//! variants, and `StrategySpec::from_name` rejects unrecognized names at the
//! boundary, before any simulation work happens.

pub mod ma_crossover;
pub mod mean_reversion;
pub mod momentum;

pub use ma_crossover::MaCrossover;
pub use mean_reversion::MeanReversion;
pub use momentum::Momentum;

use thiserror::Error;

use crate::domain::PriceSeries;

/// Errors from strategy resolution.
#[derive(Debug, Error)]
pub enum StrategyError {
    #[error(
        "unknown strategy '{name}', expected one of: moving_average_crossover, mean_reversion, momentum"
    )]
    Unknown { name: String },
}

/// One strategy execution: series in, realized profit out.
///
/// Implementations are pure given a deterministic series — no state survives
/// across calls. Indices before the rolling windows are fully populated
/// produce no signal and no transition.
pub trait Strategy: Send + Sync {
    /// Stable identifier, also accepted by `StrategySpec::from_name`.
    fn name(&self) -> &'static str;

    /// Number of leading bars that can never produce a signal.
    fn warmup(&self) -> usize;

    /// Replay the series and return the profit from closed trades.
    fn run(&self, series: &PriceSeries) -> f64;
}

/// Closed set of strategy configurations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrategySpec {
    MaCrossover { short_window: usize, long_window: usize },
    MeanReversion { window: usize, threshold: f64 },
    Momentum { window: usize },
}

impl StrategySpec {
    /// The recognized strategy names, in dispatch order.
    pub const KNOWN_NAMES: [&'static str; 3] =
        ["moving_average_crossover", "mean_reversion", "momentum"];

    /// Resolve a strategy name to its spec with default parameters.
    ///
    /// This is the dispatch boundary: anything outside the three known names
    /// is rejected here, before any trial runs.
    pub fn from_name(name: &str) -> Result<Self, StrategyError> {
        match name {
            "moving_average_crossover" => Ok(Self::MaCrossover {
                short_window: 5,
                long_window: 30,
            }),
            "mean_reversion" => Ok(Self::MeanReversion {
                window: 5,
                threshold: 1.5,
            }),
            "momentum" => Ok(Self::Momentum { window: 5 }),
            other => Err(StrategyError::Unknown {
                name: other.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::MaCrossover { .. } => "moving_average_crossover",
            Self::MeanReversion { .. } => "mean_reversion",
            Self::Momentum { .. } => "momentum",
        }
    }

    /// Instantiate the strategy behind this spec.
    pub fn build(&self) -> Box<dyn Strategy> {
        match *self {
            Self::MaCrossover {
                short_window,
                long_window,
            } => Box::new(MaCrossover::new(short_window, long_window)),
            Self::MeanReversion { window, threshold } => {
                Box::new(MeanReversion::new(window, threshold))
            }
            Self::Momentum { window } => Box::new(Momentum::new(window)),
        }
    }
}
