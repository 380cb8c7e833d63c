//! Evaluation result rows and the per-strategy report.

use serde::{Deserialize, Serialize};

/// Aggregated outcome of all trials at one noise level.
///
/// `sharpe_ratio` and `resilience_index` may be non-finite when the profit
/// samples have zero variance; that is an expected degenerate case, not a
/// failure (renderers must handle it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseLevelResult {
    /// Standard deviation of the injected per-day perturbation.
    pub noise_level: f64,
    /// Arithmetic mean of realized profit across trials.
    pub mean_profit: f64,
    /// Max minus min of the historical input series (input-derived proxy,
    /// identical for every noise level of one evaluation).
    pub max_drawdown: f64,
    /// Mean profit over the population standard deviation of profit.
    pub sharpe_ratio: f64,
    /// `(mean_profit - max_drawdown) * sharpe_ratio`.
    pub resilience_index: f64,
}

/// Complete result of evaluating one strategy across a noise sweep.
///
/// Rows preserve the input order of the noise levels. The master seed is
/// recorded so any report can be reproduced exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub strategy: String,
    pub trials: usize,
    pub master_seed: u64,
    pub rows: Vec<NoiseLevelResult>,
}
