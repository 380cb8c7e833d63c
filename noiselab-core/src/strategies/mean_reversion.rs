//! Mean reversion — band entry below, band exit above.
//!
//! Rolling mean and sample standard deviation over one window form a band
//! of `threshold` standard deviations. While Flat, a price below the lower
//! band opens a Long; while Long, a price above the upper band closes it.

use crate::domain::{PositionTracker, PriceSeries};
use crate::indicators::{rolling_mean, rolling_std};

use super::Strategy;

#[derive(Debug, Clone)]
pub struct MeanReversion {
    window: usize,
    threshold: f64,
}

impl MeanReversion {
    pub fn new(window: usize, threshold: f64) -> Self {
        assert!(window >= 2, "window must be >= 2");
        assert!(
            threshold.is_finite() && threshold >= 0.0,
            "threshold must be non-negative and finite"
        );
        Self { window, threshold }
    }
}

impl Strategy for MeanReversion {
    fn name(&self) -> &'static str {
        "mean_reversion"
    }

    fn warmup(&self) -> usize {
        self.window
    }

    fn run(&self, series: &PriceSeries) -> f64 {
        let prices = series.values();
        let mean = rolling_mean(prices, self.window);
        let std = rolling_std(prices, self.window);

        let mut tracker = PositionTracker::new();

        for i in self.window..prices.len() {
            if prices[i] < mean[i] - self.threshold * std[i] {
                tracker.enter(prices[i]);
            } else if prices[i] > mean[i] + self.threshold * std[i] {
                tracker.exit(prices[i]);
            }
        }

        tracker.realized_profit()
    }
}
