/// Bounds of zero or below count as missing, SuperJob sends `0` for an empty bound.
fn present(bound: Option<i64>) -> Option<i64> {
    bound.filter(|value| *value > 0)
}

/// Reduce a salary range to a single number
///
/// With both bounds the midpoint is taken (floor division), a lone lower bound
/// is raised by 20%, a lone upper bound is lowered by 20%. A bound too large to
/// scale gives no estimate.
pub fn predict_salary(lower: Option<i64>, upper: Option<i64>) -> Option<i64> {
    match (present(lower), present(upper)) {
        // both positive, the midpoint cannot overflow
        (Some(lower), Some(upper)) => Some(lower + (upper - lower).div_euclid(2)),
        (Some(lower), None) => lower.checked_mul(12).map(|scaled| scaled / 10),
        (None, Some(upper)) => upper.checked_mul(8).map(|scaled| scaled / 10),
        (None, None) => None,
    }
}
