//! Rounding that matches dataframe-library semantics.

/// Round to `decimals` places, breaking ties to the even neighbour.
///
/// NaN and infinities are returned unchanged.
///
/// # Examples
///
/// ```
/// use mlb_common::round_half_even;
///
/// assert_eq!(round_half_even(2.5, 0), 2.0);
/// assert_eq!(round_half_even(3.5, 0), 4.0);
/// assert_eq!(round_half_even(0.26789, 3), 0.268);
/// ```
pub fn round_half_even(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}

/// Divide, returning `None` when the denominator is zero or either side is
/// missing or the quotient is not finite.
pub fn checked_ratio(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    let (n, d) = (numerator?, denominator?);
    if d == 0.0 {
        return None;
    }
    let ratio = n / d;
    ratio.is_finite().then_some(ratio)
}
