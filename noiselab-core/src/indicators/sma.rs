//! Rolling mean.
//!
//! Simple moving average over a lookback window.
//! Lookback: window - 1 (first valid value at index window-1).

/// Rolling mean of `values` over `window`.
///
/// Output[i] is the mean of `values[i+1-window ..= i]`, NaN while the window
/// is not fully populated and NaN whenever the window contains a NaN.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    assert!(window >= 1, "rolling_mean window must be >= 1");

    let n = values.len();
    let mut result = vec![f64::NAN; n];

    if n < window {
        return result;
    }

    // Compute initial window sum
    let mut sum = 0.0;
    let mut nan_in_window = false;
    for &v in values.iter().take(window) {
        if v.is_nan() {
            nan_in_window = true;
        }
        sum += v;
    }

    if !nan_in_window {
        result[window - 1] = sum / window as f64;
    }

    // Roll the window forward
    for i in window..n {
        let leaving = values[i - window];
        let entering = values[i];
        sum = sum - leaving + entering;

        // A NaN entering or leaving poisons the running sum; rescan the
        // window to recover an exact value.
        if entering.is_nan() || leaving.is_nan() || nan_in_window {
            nan_in_window = false;
            sum = 0.0;
            for &v in &values[(i + 1 - window)..=i] {
                if v.is_nan() {
                    nan_in_window = true;
                }
                sum += v;
            }
            if nan_in_window {
                result[i] = f64::NAN;
                continue;
            }
        }

        result[i] = sum / window as f64;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn rolling_mean_5_basic() {
        let values = [10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0];
        let result = rolling_mean(&values, 5);

        assert_eq!(result.len(), 7);
        for i in 0..4 {
            assert!(result[i].is_nan(), "expected NaN at index {i}");
        }
        assert_approx(result[4], 12.0, DEFAULT_EPSILON);
        assert_approx(result[5], 13.0, DEFAULT_EPSILON);
        assert_approx(result[6], 14.0, DEFAULT_EPSILON);
    }

    #[test]
    fn window_1_is_identity() {
        let values = [100.0, 200.0, 300.0];
        let result = rolling_mean(&values, 1);
        assert_approx(result[0], 100.0, DEFAULT_EPSILON);
        assert_approx(result[1], 200.0, DEFAULT_EPSILON);
        assert_approx(result[2], 300.0, DEFAULT_EPSILON);
    }

    #[test]
    fn nan_propagation() {
        let mut values = vec![10.0, 11.0, 12.0, 13.0, 14.0, 15.0];
        values[2] = f64::NAN;
        let result = rolling_mean(&values, 3);
        // First valid at index 2; every window containing index 2 is NaN.
        assert!(result[2].is_nan());
        assert!(result[3].is_nan());
        assert!(result[4].is_nan());
        assert_approx(result[5], 14.0, DEFAULT_EPSILON);
    }

    #[test]
    fn leading_nan_shifts_first_valid() {
        // A percent-change series: NaN at index 0.
        let values = [f64::NAN, 0.01, 0.02, 0.03];
        let result = rolling_mean(&values, 3);
        assert!(result[2].is_nan()); // window covers the NaN
        assert_approx(result[3], 0.02, DEFAULT_EPSILON);
    }

    #[test]
    fn too_few_values() {
        let values = [10.0, 11.0];
        let result = rolling_mean(&values, 5);
        assert!(result.iter().all(|v| v.is_nan()));
    }
}
