//! Parsing of hex color strings, `#RRGGBB` or `#RRGGBBAA`. The `#` is optional and the digits may
//! be in either case.

use regex::Regex;

use crate::color::RGBColor;
use crate::error::ColorError;

lazy_static! {
    static ref HEX_RE: Regex = Regex::new(r"^#?([0-9A-Fa-f]{6})([0-9A-Fa-f]{2})?$")
        .expect("hex color pattern is invalid");
}

fn parse_byte(digits: &str, hex: &str) -> Result<u8, ColorError> {
    u8::from_str_radix(digits, 16).map_err(|_| ColorError::InvalidHex(hex.to_string()))
}

/// Parses a hex string into its color and, when an alpha byte is present, the alpha fraction.
///
/// # Example
/// ```
/// # use colorati::color::RGBColor;
/// # use colorati::parse::parse_hex;
/// assert_eq!(parse_hex("#f1f091").unwrap(), (RGBColor::new(241, 240, 145), None));
/// assert_eq!(parse_hex("F1F09140").unwrap().1, Some(64. / 255.));
/// assert!(parse_hex("#F1F0").is_err());
/// ```
pub fn parse_hex(hex: &str) -> Result<(RGBColor, Option<f64>), ColorError> {
    let trimmed = hex.trim();
    let caps = HEX_RE
        .captures(trimmed)
        .ok_or_else(|| ColorError::InvalidHex(hex.to_string()))?;
    let digits = &caps[1];
    let rgb = RGBColor::new(
        parse_byte(&digits[0..2], hex)?,
        parse_byte(&digits[2..4], hex)?,
        parse_byte(&digits[4..6], hex)?,
    );
    let alpha = match caps.get(2) {
        Some(byte) => Some(f64::from(parse_byte(byte.as_str(), hex)?) / 255.0),
        None => None,
    };
    Ok((rgb, alpha))
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_valid_hex() {
        assert_eq!(
            parse_hex("#000000").unwrap(),
            (RGBColor::new(0, 0, 0), None)
        );
        assert_eq!(
            parse_hex(" #FfFfFf ").unwrap(),
            (RGBColor::new(255, 255, 255), None)
        );
        assert_eq!(
            parse_hex("#F1F091A6").unwrap(),
            (RGBColor::new(241, 240, 145), Some(166.0 / 255.0))
        );
    }
    #[test]
    fn test_invalid_hex() {
        for bad in &["", "#", "#12345", "#1234567", "#GGGGGG", "##123456", "#123456789"] {
            assert_eq!(
                parse_hex(bad),
                Err(ColorError::InvalidHex(bad.to_string())),
                "{} should not parse",
                bad
            );
        }
    }
}
