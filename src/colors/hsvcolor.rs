//! This module implements the HSV color space, a cousin of the HSL color space. The definition of
//! value differs from lightness: it goes from black to full saturation instead of black to
//! white. This makes value an extraordinarily poor analog of luminance (dark purple is the same
//! value as white, despite reflecting one-tenth the light), but does make the hue and saturation a
//! bit more meaningful than HSL. There is no CSS function for HSV, so it prints in the same shape as
//! `hsl()` under the name `hsv()`.

use super::hslcolor::hexagonal_hue;
use crate::color::{css_hue, css_percent, Color, ColorSpace, RGBColor};
use crate::coord::Coord;
use crate::options::ColorConfig;

/// An HSV color, defining parameters for hue, saturation, and value from the sRGB space.
/// # Example
/// ```
/// # use colorati::color::{Color, RGBColor};
/// # use colorati::colors::HSVColor;
/// let hsv = HSVColor::from_rgb(&RGBColor::new(204, 102, 102));
/// assert_eq!(hsv.h, 0.);
/// assert!((hsv.s - 50.).abs() <= 1e-9);
/// assert!((hsv.v - 80.).abs() <= 1e-9);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSVColor {
    /// The hue, in degrees in `[0, 360)`. Exactly the same as the hue of HSL.
    pub h: f64,
    /// The saturation: the distance between the color and the gray of equal value, relative to the
    /// value. Ranges between 0 and 100.
    pub s: f64,
    /// The value, defined as the largest sRGB channel. Ranges between 0 and 100.
    pub v: f64,
}

impl Color for HSVColor {
    const SPACE: ColorSpace = ColorSpace::Hsv;

    fn from_rgb(rgb: &RGBColor) -> HSVColor {
        let frac = rgb.fractional();
        let max_c = frac.x.max(frac.y).max(frac.z);
        let min_c = frac.x.min(frac.y).min(frac.z);
        let chroma = max_c - min_c;
        let saturation = if max_c == 0.0 {
            // this would be a divide by 0 otherwise, and black has no saturation anyway
            0.0
        } else {
            chroma / max_c
        };
        HSVColor {
            h: hexagonal_hue(frac),
            s: saturation * 100.0,
            v: max_c * 100.0,
        }
    }
    fn channels(&self) -> Vec<f64> {
        vec![self.h, self.s, self.v]
    }
    fn css_channels(&self, config: &ColorConfig) -> Vec<String> {
        vec![
            css_hue(self.h),
            css_percent(self.s, config),
            css_percent(self.v, config),
        ]
    }
}

impl From<Coord> for HSVColor {
    fn from(c: Coord) -> HSVColor {
        HSVColor {
            h: c.x,
            s: c.y,
            v: c.z,
        }
    }
}

impl From<HSVColor> for Coord {
    fn from(hsv: HSVColor) -> Coord {
        Coord {
            x: hsv.h,
            y: hsv.s,
            z: hsv.v,
        }
    }
}
