//! Numeric parsing with the permissive rules of a form input.
//!
//! Surrounding whitespace is ignored, `5.0` is the integer 5, and only
//! finite values count as numbers (`NaN` and `inf` are rejected).

/// Parse `text` as a finite number. Blank input is not a number.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parse `text` as an integer that fits in `i64`.
pub fn parse_integer(text: &str) -> Option<i64> {
    parse_number(text).and_then(as_integer)
}

/// Parse `text` as a strictly positive integer that fits in `u32`.
pub fn parse_positive_integer(text: &str) -> Option<u32> {
    parse_integer(text)
        .filter(|value| *value > 0)
        .and_then(|value| u32::try_from(value).ok())
}

/// Integral value of `value`, if it has no fractional part.
pub fn as_integer(value: f64) -> Option<i64> {
    if value.fract() != 0.0 || value < i64::MIN as f64 || value > i64::MAX as f64 {
        return None;
    }
    Some(value as i64)
}
