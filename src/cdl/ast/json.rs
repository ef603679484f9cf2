//! Shared helpers for the two serialization strategies

/// Spaces per indent level in formatted output.
pub(crate) const INDENT_WIDTH: usize = 2;

pub(crate) fn push_indent(out: &mut String, level: usize) {
    for _ in 0..level * INDENT_WIDTH {
        out.push(' ');
    }
}

/// Render a number the way the source format writes it: integral values
/// without a fractional part, everything else in the shortest f64 form.
pub(crate) fn format_number(value: f64) -> String {
    const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0; // 2^53
    if value.is_finite() && value.fract() == 0.0 && value.abs() < MAX_EXACT_INT {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
