//! Profit-sample statistics — pure functions over trial results.
//!
//! Every function is slice in, scalar out, with no dependency on the
//! harness. The standard deviation is the population form (n denominator):
//! the trial set is the whole population being summarized, not a sample
//! from a larger one.

/// Arithmetic mean. Returns 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (n denominator). Returns 0.0 for an empty
/// slice; a single value has zero dispersion.
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
