//! Rolling standard deviation.
//!
//! Sample standard deviation (n - 1 denominator) over a lookback window.
//! Lookback: window - 1 (first valid value at index window-1). A window of
//! 1 has no dispersion estimate and yields NaN everywhere.

/// Rolling sample standard deviation of `values` over `window`.
///
/// Output[i] covers `values[i+1-window ..= i]`, NaN while the window is not
/// fully populated and NaN whenever the window contains a NaN.
pub fn rolling_std(values: &[f64], window: usize) -> Vec<f64> {
    assert!(window >= 1, "rolling_std window must be >= 1");

    let n = values.len();
    let mut result = vec![f64::NAN; n];

    if n < window || window < 2 {
        return result;
    }

    for i in (window - 1)..n {
        let slice = &values[(i + 1 - window)..=i];
        if slice.iter().any(|v| v.is_nan()) {
            continue;
        }
        let mean = slice.iter().sum::<f64>() / window as f64;
        let sum_sq: f64 = slice.iter().map(|v| (v - mean) * (v - mean)).sum();
        result[i] = (sum_sq / (window - 1) as f64).sqrt();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn rolling_std_3_basic() {
        let values = [2.0, 4.0, 6.0, 8.0];
        let result = rolling_std(&values, 3);

        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        // std([2,4,6]) with n-1 denominator = 2.0
        assert_approx(result[2], 2.0, DEFAULT_EPSILON);
        assert_approx(result[3], 2.0, DEFAULT_EPSILON);
    }

    #[test]
    fn constant_window_has_zero_std() {
        let values = [5.0; 6];
        let result = rolling_std(&values, 4);
        for i in 3..6 {
            assert_approx(result[i], 0.0, DEFAULT_EPSILON);
        }
    }

    #[test]
    fn window_1_is_all_nan() {
        let values = [1.0, 2.0, 3.0];
        let result = rolling_std(&values, 1);
        assert!(result.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn nan_propagation() {
        let values = [1.0, f64::NAN, 3.0, 4.0, 5.0];
        let result = rolling_std(&values, 2);
        assert!(result[1].is_nan());
        assert!(result[2].is_nan());
        assert!(!result[3].is_nan());
    }

    #[test]
    fn too_few_values() {
        let values = [1.0, 2.0];
        let result = rolling_std(&values, 5);
        assert!(result.iter().all(|v| v.is_nan()));
    }
}
