//! Small text and number helpers shared by the checks.

/// Whether an optional string is present and non-blank after trimming.
pub fn has_content(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Count whitespace-delimited tokens.
pub fn word_count(value: &str) -> usize {
    value.split_whitespace().count()
}

/// Filter a configured numeric value down to one that is actually set.
///
/// Zero and NaN count as "not configured", matching how the web store
/// leaves numeric requirement fields before they are fetched.
pub fn is_set(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// Render an amount the way the UI prints numbers: integers without a
/// trailing `.0`, fractional values as-is.
pub fn format_amount(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
