//! Readability classification: whether text drawn on top of a color should be dark or light. Uses
//! the W3C relative luminance, compared against the point where black and white text have equal
//! contrast ratios.

use crate::color::RGBColor;
use crate::consts::{LUMINANCE_LINEAR_CUTOFF, LUMINANCE_WEIGHTS};

/// The luminance above which dark text has the better contrast ratio. Solves
/// `(L + 0.05) / 0.05 = 1.05 / (L + 0.05)` for `L`.
pub fn dark_contrast_threshold() -> f64 {
    (1.05f64 * 0.05).sqrt() - 0.05
}

/// The relative luminance of a color, 0 for black and 1 for white.
///
/// # Example
/// ```
/// # use colorati::color::RGBColor;
/// # use colorati::contrast::relative_luminance;
/// assert_eq!(relative_luminance(&RGBColor::new(255, 255, 255)), 1.0);
/// assert_eq!(relative_luminance(&RGBColor::new(255, 0, 0)), 0.2126);
/// ```
pub fn relative_luminance(rgb: &RGBColor) -> f64 {
    let linear = rgb.fractional().map(|c| {
        if c <= LUMINANCE_LINEAR_CUTOFF {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    });
    linear
        .to_array()
        .iter()
        .zip(LUMINANCE_WEIGHTS.iter())
        .map(|(c, w)| c * w)
        .sum()
}

/// Returns true if dark text should be used on top of this color, i.e., the color is light.
pub fn has_dark_contrast(rgb: &RGBColor) -> bool {
    relative_luminance(rgb) >= dark_contrast_threshold()
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn test_threshold() {
        assert!(approx_eq!(
            f64,
            dark_contrast_threshold(),
            0.17912878474779204,
            epsilon = 1e-12
        ));
    }
    #[test]
    fn test_extremes() {
        assert!(has_dark_contrast(&RGBColor::new(255, 255, 255)));
        assert!(!has_dark_contrast(&RGBColor::new(0, 0, 0)));
        assert_eq!(relative_luminance(&RGBColor::new(0, 0, 0)), 0.0);
    }
    #[test]
    fn test_grays_and_primaries() {
        assert!(has_dark_contrast(&RGBColor::new(128, 128, 128)));
        assert!(!has_dark_contrast(&RGBColor::new(100, 100, 100)));
        assert!(has_dark_contrast(&RGBColor::new(255, 0, 0)));
        assert!(!has_dark_contrast(&RGBColor::new(0, 0, 255)));
        assert!(has_dark_contrast(&RGBColor::new(241, 240, 145)));
    }
}
