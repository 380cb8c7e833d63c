//! Moving average crossover — golden cross entry, death cross exit.
//!
//! Enters Long when the short MA crosses above the long MA, exits when it
//! crosses below. A signal variable distinct from the position suppresses
//! repeated transitions while a crossing persists: the machine fires on the
//! crossing edge, not on every bar the condition holds.

use crate::domain::{PositionTracker, PriceSeries};
use crate::indicators::rolling_mean;

use super::Strategy;

/// Last crossing direction observed. Distinct from `Position`: a death
/// cross is remembered even while Flat, so a sustained down-crossing never
/// re-fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CrossSignal {
    Neutral,
    Bullish,
    Bearish,
}

#[derive(Debug, Clone)]
pub struct MaCrossover {
    short_window: usize,
    long_window: usize,
}

impl MaCrossover {
    pub fn new(short_window: usize, long_window: usize) -> Self {
        assert!(short_window >= 1, "short_window must be >= 1");
        assert!(
            long_window > short_window,
            "long_window must be > short_window"
        );
        Self {
            short_window,
            long_window,
        }
    }
}

impl Strategy for MaCrossover {
    fn name(&self) -> &'static str {
        "moving_average_crossover"
    }

    fn warmup(&self) -> usize {
        self.long_window
    }

    fn run(&self, series: &PriceSeries) -> f64 {
        let prices = series.values();
        let short_ma = rolling_mean(prices, self.short_window);
        let long_ma = rolling_mean(prices, self.long_window);

        let mut tracker = PositionTracker::new();
        let mut signal = CrossSignal::Neutral;

        for i in self.long_window..prices.len() {
            if short_ma[i] > long_ma[i] && signal != CrossSignal::Bullish {
                signal = CrossSignal::Bullish;
                tracker.enter(prices[i]);
            } else if short_ma[i] < long_ma[i] && signal != CrossSignal::Bearish {
                signal = CrossSignal::Bearish;
                tracker.exit(prices[i]);
            }
        }

        tracker.realized_profit()
    }
}
