//! Momentum — sign of the rolling mean of percentage returns.
//!
//! While Flat, a positive rolling return mean opens a Long; while Long, a
//! negative one closes it. A zero mean (constant prices) produces no signal
//! either way.

use crate::domain::{PositionTracker, PriceSeries};
use crate::indicators::{pct_change, rolling_mean};

use super::Strategy;

#[derive(Debug, Clone)]
pub struct Momentum {
    window: usize,
}

impl Momentum {
    pub fn new(window: usize) -> Self {
        assert!(window >= 1, "window must be >= 1");
        Self { window }
    }
}

impl Strategy for Momentum {
    fn name(&self) -> &'static str {
        "momentum"
    }

    fn warmup(&self) -> usize {
        self.window
    }

    fn run(&self, series: &PriceSeries) -> f64 {
        let prices = series.values();
        let returns = pct_change(prices);
        // The NaN at returns[0] keeps the first rolling value at index
        // `window` rather than `window - 1`, matching the warmup.
        let momentum = rolling_mean(&returns, self.window);

        let mut tracker = PositionTracker::new();

        for i in self.window..prices.len() {
            if momentum[i] > 0.0 {
                tracker.enter(prices[i]);
            } else if momentum[i] < 0.0 {
                tracker.exit(prices[i]);
            }
        }

        tracker.realized_profit()
    }
}
