/// Render a number for a label. Whole values below 1e15 print without a
/// fraction (`-0.0` prints as `0`), others in shortest form (`12.3`).
/// NaN and infinities come out as `NaN`, `inf` and `-inf`.
pub fn format_number(v: f64) -> String {
    if v.is_finite() && v == v.trunc() && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}
