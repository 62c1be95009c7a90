//! Conversion to the two ANSI terminal palettes. Neither is a color space in the usual sense: each
//! maps a color to a single palette index, so they carry no channels and no alpha.

use crate::color::RGBColor;

/// The code of the first ANSI foreground color, black.
const ANSI16_BASE: u8 = 30;
/// Added to a 16-color code to select the bright variant.
const ANSI16_BRIGHT_OFFSET: u8 = 60;
/// The index of the first entry of the 6x6x6 color cube in the 256-color palette.
const ANSI256_CUBE_BASE: u8 = 16;

/// Converts to the nearest 16-color ANSI foreground code: 30-37, or 90-97 for the bright range.
///
/// The brightest channel decides between off, normal, and bright; each channel then contributes one
/// bit depending on whether it is closer to 0 or 255.
///
/// # Example
/// ```
/// # use colorati::color::RGBColor;
/// # use colorati::colors::ansicolor::rgb_to_ansi16;
/// assert_eq!(rgb_to_ansi16(&RGBColor::new(0, 0, 0)), 30);
/// assert_eq!(rgb_to_ansi16(&RGBColor::new(255, 0, 0)), 91);
/// assert_eq!(rgb_to_ansi16(&RGBColor::new(128, 0, 0)), 31);
/// ```
pub fn rgb_to_ansi16(rgb: &RGBColor) -> u8 {
    let frac = rgb.fractional();
    let max = frac.x.max(frac.y).max(frac.z) * 100.0;
    let value = (max / 50.0).round() as u8;
    if value == 0 {
        return ANSI16_BASE;
    }
    let bit = |v: f64| v.round() as u8;
    let code = ANSI16_BASE + ((bit(frac.z) << 2) | (bit(frac.y) << 1) | bit(frac.x));
    if value == 2 {
        code + ANSI16_BRIGHT_OFFSET
    } else {
        code
    }
}

/// Converts to the nearest entry of the 256-color ANSI palette. Colors whose channels agree in their
/// high nibble go to the 24-step grayscale ramp (or the black and white corners of the cube); the
/// rest go to the 6x6x6 color cube.
///
/// # Example
/// ```
/// # use colorati::color::RGBColor;
/// # use colorati::colors::ansicolor::rgb_to_ansi256;
/// assert_eq!(rgb_to_ansi256(&RGBColor::new(112, 112, 112)), 242);
/// assert_eq!(rgb_to_ansi256(&RGBColor::new(241, 240, 145)), 229);
/// ```
pub fn rgb_to_ansi256(rgb: &RGBColor) -> u8 {
    let RGBColor { r, g, b } = *rgb;
    if r >> 4 == g >> 4 && g >> 4 == b >> 4 {
        // close enough to gray to use the ramp
        if r < 8 {
            return 16;
        }
        if r > 248 {
            return 231;
        }
        return ((f64::from(r) - 8.0) / 247.0 * 24.0).round() as u8 + 232;
    }
    let frac = rgb.fractional();
    let level = |v: f64| (v * 5.0).round() as u8;
    ANSI256_CUBE_BASE + 36 * level(frac.x) + 6 * level(frac.y) + level(frac.z)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_ansi16() {
        assert_eq!(rgb_to_ansi16(&RGBColor::new(0, 0, 0)), 30);
        assert_eq!(rgb_to_ansi16(&RGBColor::new(20, 20, 20)), 30);
        assert_eq!(rgb_to_ansi16(&RGBColor::new(0, 0, 255)), 94);
        assert_eq!(rgb_to_ansi16(&RGBColor::new(255, 255, 255)), 97);
        assert_eq!(rgb_to_ansi16(&RGBColor::new(100, 200, 50)), 92);
        assert_eq!(rgb_to_ansi16(&RGBColor::new(241, 240, 145)), 97);
    }
    #[test]
    fn test_ansi256_grayscale() {
        assert_eq!(rgb_to_ansi256(&RGBColor::new(7, 7, 7)), 16);
        assert_eq!(rgb_to_ansi256(&RGBColor::new(250, 250, 250)), 231);
        assert_eq!(rgb_to_ansi256(&RGBColor::new(112, 112, 112)), 242);
    }
    #[test]
    fn test_ansi256_cube() {
        assert_eq!(rgb_to_ansi256(&RGBColor::new(255, 0, 0)), 196);
        assert_eq!(rgb_to_ansi256(&RGBColor::new(0, 128, 255)), 39);
        assert_eq!(rgb_to_ansi256(&RGBColor::new(241, 240, 145)), 229);
    }
}
