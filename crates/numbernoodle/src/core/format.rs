//! Display formatting for results

// Fixed-point range; outside it ten decimals lose the value or print noise digits.
const MIN_FIXED: f64 = 1e-10;
const MAX_FIXED: f64 = 1e21;

/// Formats a result for display
///
/// Whole numbers print without a fractional part, other values with at
/// most ten decimals and no trailing zeros. Magnitudes below `1e-10` or
/// from `1e21` up switch to exponent notation, so a nonzero value never
/// prints as `0`. Non-finite values use the names `Infinity`, `-Infinity`
/// and `NaN`.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value != 0.0 && !(MIN_FIXED..MAX_FIXED).contains(&value.abs()) {
        return format!("{value:e}");
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        // `{:.0}` prints -0.0 as "-0"
        let value = if value == 0.0 { 0.0 } else { value };
        format!("{value:.0}")
    } else {
        let formatted = format!("{value:.10}");
        let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
        if trimmed == "-0" {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    }
}
