//! HWB describes a color as a hue plus how much white and how much black are mixed into it, which is
//! how people tend to tint and shade paint. It shares its hue with HSL.

use super::hslcolor::hexagonal_hue;
use crate::color::{css_hue, css_percent, Color, ColorSpace, RGBColor};
use crate::coord::Coord;
use crate::options::ColorConfig;

/// A color in the HWB space. Whiteness and blackness are percentages and sum to at most 100.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HWBColor {
    /// The hue, in degrees in `[0, 360)`.
    pub h: f64,
    /// The whiteness: the smallest sRGB channel, 0-100.
    pub w: f64,
    /// The blackness: one minus the largest sRGB channel, 0-100.
    pub b: f64,
}

impl Color for HWBColor {
    const SPACE: ColorSpace = ColorSpace::Hwb;

    fn from_rgb(rgb: &RGBColor) -> HWBColor {
        HWBColor {
            h: hexagonal_hue(rgb.fractional()),
            w: f64::from(rgb.min()) / 255.0 * 100.0,
            b: (1.0 - f64::from(rgb.max()) / 255.0) * 100.0,
        }
    }
    fn channels(&self) -> Vec<f64> {
        vec![self.h, self.w, self.b]
    }
    fn css_channels(&self, config: &ColorConfig) -> Vec<String> {
        vec![
            css_hue(self.h),
            css_percent(self.w, config),
            css_percent(self.b, config),
        ]
    }
}

impl From<Coord> for HWBColor {
    fn from(c: Coord) -> HWBColor {
        HWBColor {
            h: c.x,
            w: c.y,
            b: c.z,
        }
    }
}

impl From<HWBColor> for Coord {
    fn from(hwb: HWBColor) -> Coord {
        Coord {
            x: hwb.h,
            y: hwb.w,
            z: hwb.b,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn test_hwb_known_color() {
        let hwb = HWBColor::from_rgb(&RGBColor::new(241, 240, 145));
        assert_eq!(hwb.h, 59.375);
        assert!(approx_eq!(f64, hwb.w, 56.86274509803921, epsilon = 1e-9));
        assert!(approx_eq!(f64, hwb.b, 5.490196078431375, epsilon = 1e-9));
        let config = ColorConfig::default();
        assert_eq!(hwb.to_css(1.0, &config), "hwb(59 56.86% 5.49% / 1)");
    }
    #[test]
    fn test_hwb_extremes() {
        let white = HWBColor::from_rgb(&RGBColor::new(255, 255, 255));
        assert_eq!(Coord::from(white).to_array(), [0., 100., 0.]);
        let black = HWBColor::from_rgb(&RGBColor::new(0, 0, 0));
        assert_eq!(Coord::from(black).to_array(), [0., 0., 100.]);
    }
}
