//! Validated price series.
//!
//! A `PriceSeries` is an ordered sequence of positive, finite prices —
//! either the historical input or a synthetic path. Validation happens once
//! at construction; afterwards the series is immutable and every consumer
//! can rely on the invariants without re-checking.

use thiserror::Error;

/// Errors from price-series construction.
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("price series has {len} points, need at least 2 to compute a return")]
    TooShort { len: usize },

    #[error("price at index {index} is {value}, prices must be positive and finite")]
    InvalidPrice { index: usize, value: f64 },
}

/// An ordered sequence of prices, length >= 2, every value positive and finite.
///
/// Positivity is required for log-return computation; it is checked once
/// here rather than at every `ln()` call site. There is deliberately no
/// serde derive: a series must not enter the system without passing `new`.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries(Vec<f64>);

impl PriceSeries {
    /// Validate and construct a series.
    pub fn new(values: Vec<f64>) -> Result<Self, SeriesError> {
        if values.len() < 2 {
            return Err(SeriesError::TooShort { len: values.len() });
        }
        for (index, &value) in values.iter().enumerate() {
            if !(value.is_finite() && value > 0.0) {
                return Err(SeriesError::InvalidPrice { index, value });
            }
        }
        Ok(Self(values))
    }

    /// Construct without validation. Callers must guarantee positivity (the
    /// simulator does: its paths are exponentials of finite sums). Unlike
    /// `new`, a single-point series is accepted — a degenerate one-day
    /// synthetic horizon produces one.
    pub(crate) fn from_raw(values: Vec<f64>) -> Self {
        debug_assert!(!values.is_empty());
        debug_assert!(values.iter().all(|v| *v > 0.0));
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: an empty series cannot be constructed.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn first(&self) -> f64 {
        self.0[0]
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Log-returns: `ln(p[i]) - ln(p[i-1])`, length `len() - 1`.
    pub fn log_returns(&self) -> Vec<f64> {
        self.0.windows(2).map(|w| w[1].ln() - w[0].ln()).collect()
    }

    /// Max price minus min price over the series.
    ///
    /// A simplified range proxy, not a peak-to-trough equity drawdown.
    pub fn price_range(&self) -> f64 {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in &self.0 {
            min = min.min(v);
            max = max.max(v);
        }
        max - min
    }
}
