//! Descriptive statistics primitives.
//!
//! Plain slice-based building blocks for the rolling volatility estimation
//! in the model layer. The standard deviation here is the population form
//! (divide by n, not n − 1): the window is treated as the whole population
//! of interest, not a sample from a larger one.

/// Arithmetic mean of `values`.
///
/// Returns 0.0 for an empty slice.
///
/// # Examples
/// ```
/// use quant_core::math::statistics::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation of `values`.
///
/// Computes √(Σ(vᵢ − mean)² / n). Returns 0.0 for an empty slice.
///
/// # Examples
/// ```
/// use quant_core::math::statistics::population_std_dev;
///
/// // {2, 4, 4, 4, 5, 5, 7, 9} is the textbook example with σ = 2
/// let sigma = population_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
/// assert!((sigma - 2.0).abs() < 1e-12);
/// ```
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mu = mean(values);
    let sum_squared_differences: f64 = values.iter().map(|v| (v - mu) * (v - mu)).sum();
    (sum_squared_differences / values.len() as f64).sqrt()
}

/// Element-wise relative changes of a series.
///
/// Entry `i` is `(vᵢ − vᵢ₋₁) / vᵢ₋₁`; the first entry, which has no
/// predecessor, is pinned to 0.0. The output has the same length as the
/// input.
///
/// Division by a zero predecessor yields a non-finite entry; callers working
/// with price series enforce positivity before transforming.
///
/// # Examples
/// ```
/// use quant_core::math::statistics::relative_changes;
///
/// let changes = relative_changes(&[100.0, 110.0, 99.0]);
/// assert_eq!(changes[0], 0.0);
/// assert!((changes[1] - 0.1).abs() < 1e-12);
/// assert!((changes[2] - -0.1).abs() < 1e-12);
/// ```
pub fn relative_changes(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .enumerate()
        .map(|(i, &current)| {
            if i == 0 {
                0.0
            } else {
                (current - values[i - 1]) / values[i - 1]
            }
        })
        .collect()
}
