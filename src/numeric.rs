//! This file holds the small numeric helpers that every color space leans on when it turns a float
//! into text: rounding to a number of decimal places and printing a fixed number of decimals. They
//! are kept separate because the rounding rules have some warts (negative zero, floating artifacts
//! on exact inputs, and an "infinite precision" escape hatch) that should only be dealt with once.

/// Any precision above this value is treated as "do not round at all". Formatting then falls back to
/// the shortest representation that round-trips the float.
pub const MAX_ROUNDED_PRECISION: u32 = 100;

/// Returns true if the given precision is large enough to disable rounding.
pub fn is_unrounded(digits: u32) -> bool {
    digits > MAX_ROUNDED_PRECISION
}

/// Rounds `value` to `digits` decimal places, with halves rounded away from zero. Exact `0` and `1`
/// are returned untouched, and a result that rounds to zero is always positive zero.
///
/// # Example
/// ```
/// # use colorati::numeric::round_to;
/// assert_eq!(round_to(77.41935483870967, 2), 77.42);
/// assert_eq!(round_to(59.375, 0), 59.);
/// assert_eq!(round_to(-0.001, 2).to_string(), "0");
/// ```
pub fn round_to(value: f64, digits: u32) -> f64 {
    if is_unrounded(digits) || value == 0.0 || value == 1.0 {
        return value;
    }
    if digits == 0 {
        // adding positive zero turns -0 into 0
        return value.round() + 0.0;
    }
    let base = 10f64.powi(digits as i32);
    (value * base).round() / base + 0.0
}

/// Formats `value` with exactly `digits` decimals, padding with trailing zeros. Never uses exponent
/// notation, because Rust's float formatting doesn't.
///
/// # Example
/// ```
/// # use colorati::numeric::format_fixed;
/// assert_eq!(format_fixed(47.798804909525074, 2), "47.80");
/// assert_eq!(format_fixed(-13.069756984708025, 2), "-13.07");
/// assert_eq!(format_fixed(0.1, 200), "0.1");
/// ```
pub fn format_fixed(value: f64, digits: u32) -> String {
    if is_unrounded(digits) {
        return format!("{}", value);
    }
    format!("{:.*}", digits as usize, round_to(value, digits))
}

/// Formats `value` rounded to `digits` places, but without padding: `1` stays `"1"` and `0.25098`
/// becomes `"0.25"`. This is the format used for alpha.
pub fn format_trimmed(value: f64, digits: u32) -> String {
    format!("{}", round_to(value, digits))
}
