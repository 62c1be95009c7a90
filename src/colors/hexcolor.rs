//! Hexadecimal notation: `#RRGGBB`, optionally followed by an `AA` alpha byte. The digits are always
//! uppercase and zero-padded.

use crate::color::RGBColor;

/// Packs the channels into a 24-bit integer and prints it as six uppercase hex digits, without the
/// leading `#`.
///
/// # Example
/// ```
/// # use colorati::color::RGBColor;
/// # use colorati::colors::hexcolor::rgb_to_hex;
/// assert_eq!(rgb_to_hex(&RGBColor::new(241, 240, 145)), "F1F091");
/// assert_eq!(rgb_to_hex(&RGBColor::new(0, 0, 10)), "00000A");
/// ```
pub fn rgb_to_hex(rgb: &RGBColor) -> String {
    let packed = (u32::from(rgb.r) << 16) | (u32::from(rgb.g) << 8) | u32::from(rgb.b);
    format!("{:06X}", packed)
}

/// Scales an alpha fraction to a byte and prints it as two uppercase hex digits. Fractions outside
/// 0-1 saturate at `00` and `FF`.
pub fn alpha_to_hex(alpha: f64) -> String {
    format!("{:02X}", (alpha * 255.0).round() as u8)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(&RGBColor::new(255, 255, 255)), "FFFFFF");
        assert_eq!(rgb_to_hex(&RGBColor::new(0, 0, 0)), "000000");
        assert_eq!(rgb_to_hex(&RGBColor::new(1, 2, 3)), "010203");
    }
    #[test]
    fn test_alpha_to_hex() {
        assert_eq!(alpha_to_hex(64.0 / 255.0), "40");
        assert_eq!(alpha_to_hex(0.65), "A6");
        assert_eq!(alpha_to_hex(1.0), "FF");
        assert_eq!(alpha_to_hex(0.0), "00");
        assert_eq!(alpha_to_hex(1.5), "FF");
    }
}
