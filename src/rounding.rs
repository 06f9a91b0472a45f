/// Round to the nearest integer with ties going toward positive infinity,
/// so `2.5 -> 3` and `-2.5 -> -2`.
///
/// This differs from [`f64::round`], which rounds ties away from zero.
/// Non-finite values are returned unchanged.
pub fn round_half_up(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round `value` to `digits` decimal places using [`round_half_up`].
///
/// A negative `digits` rounds to tens, hundreds, etc.
///
/// # Examples
///
/// ```
/// use routefmt::rounding::round_number;
///
/// assert_eq!(round_number(59.913868, 4), 59.9139);
/// assert_eq!(round_number(1234.0, -2), 1200.0);
/// ```
pub fn round_number(value: f64, digits: i32) -> f64 {
    let multiple = 10f64.powi(digits);
    round_half_up(value * multiple) / multiple
}
