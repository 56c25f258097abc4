//! Standard normal distribution functions.
//!
//! The cumulative distribution function is built on the complementary error
//! function rather than `erf` directly: `erfc` keeps full relative precision
//! in the tail where `1 - erf(x)` would cancel catastrophically, which is
//! exactly where deep in/out-of-the-money option prices live.

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) for X ~ N(0, 1) as `0.5 * erfc(-x / sqrt(2))`.
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The probability P(X <= x), always in [0, 1]. Saturates to exactly 0 or 1
/// for large |x|; never panics for any finite input.
///
/// # Accuracy
/// `libm::erfc` is accurate to within a few ulp, so the absolute error is
/// far below 1e-9 across the practical domain |x| <= 10.
///
/// # Examples
/// ```
/// use quant_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-12);
/// assert!(norm_cdf(-10.0) >= 0.0);
/// assert!(norm_cdf(10.0) <= 1.0);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    let phi = 0.5 * libm::erfc(-x / std::f64::consts::SQRT_2);
    // erfc rounding can leave the result a few ulp outside [0, 1]
    phi.clamp(0.0, 1.0)
}
