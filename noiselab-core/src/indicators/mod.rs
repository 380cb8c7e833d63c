//! Rolling-window primitives over raw price slices.
//!
//! All functions return a vector the same length as the input, with
//! `f64::NAN` in the warmup prefix (indices where the window is not yet
//! fully populated) and NaN propagation inside windows. Strategies start
//! iterating past the warmup, so in the common path they never observe NaN;
//! the propagation matters when the input itself carries a NaN prefix
//! (e.g. a percent-change series).

pub mod roc;
pub mod sma;
pub mod stddev;

pub use roc::pct_change;
pub use sma::rolling_mean;
pub use stddev::rolling_std;

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
