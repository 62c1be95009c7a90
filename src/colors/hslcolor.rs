//! This file implements HSL: a simple transformation of sRGB that creates a cylindrical space. HSL
//! has the same problems with perceptual uniformity as sRGB does, but it has some conception of
//! common color attributes, and rotating its hue is how every color harmony is built. *Lightness*
//! runs from black, through fully saturated in the middle, to white at the end.
//!
//! The projection used is hexagonal rather than circular: the hue is the position along the
//! hexagon through the point, measured by which channel is largest. Gray has no hue, and is given a
//! hue of 0 degrees.

use crate::color::{css_hue, css_percent, Color, ColorSpace, RGBColor};
use crate::coord::{wrap_degrees, Coord};
use crate::options::ColorConfig;

/// A color in the HSL color space, with saturation and lightness reported as percentages so that
/// they print the way CSS expects.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSLColor {
    /// The hue component, in degrees in `[0, 360)`.
    pub h: f64,
    /// The saturation component, 0-100.
    pub s: f64,
    /// The lightness component, 0-100.
    pub l: f64,
}

/// Computes the hexagonal hue, in degrees, from fractional RGB. Shared with HWB and HSV, which have
/// the exact same hue. Returns 0 for grays.
pub(crate) fn hexagonal_hue(rgb: Coord) -> f64 {
    let Coord { x: r, y: g, z: b } = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    if delta == 0.0 {
        return 0.0;
    }
    // which sector of the hexagon we're in depends on the largest channel: the other two push the
    // hue up or down from that sector's center
    let sector = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    wrap_degrees(sector * 60.0)
}

impl Color for HSLColor {
    const SPACE: ColorSpace = ColorSpace::Hsl;

    fn from_rgb(rgb: &RGBColor) -> HSLColor {
        let frac = rgb.fractional();
        let max = frac.x.max(frac.y).max(frac.z);
        let min = frac.x.min(frac.y).min(frac.z);
        let lightness = (max + min) / 2.0;
        if max == min {
            // no chroma: a gray, with no hue or saturation
            return HSLColor {
                h: 0.0,
                s: 0.0,
                l: lightness * 100.0,
            };
        }
        let delta = max - min;
        // saturation is chroma relative to the largest chroma possible at this lightness, which
        // shrinks toward both black and white
        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };
        HSLColor {
            h: hexagonal_hue(frac),
            s: saturation * 100.0,
            l: lightness * 100.0,
        }
    }
    fn channels(&self) -> Vec<f64> {
        vec![self.h, self.s, self.l]
    }
    fn css_channels(&self, config: &ColorConfig) -> Vec<String> {
        vec![
            css_hue(self.h),
            css_percent(self.s, config),
            css_percent(self.l, config),
        ]
    }
}

impl HSLColor {
    /// Returns the same color with its hue rotated by `degrees`, wrapped back into `[0, 360)`.
    pub fn rotate_hue(&self, degrees: f64) -> HSLColor {
        HSLColor {
            h: (self.h + degrees) % 360.0,
            ..*self
        }
    }

    /// Converts back to 8-bit sRGB, rounding each channel to the nearest integer. This is the inverse
    /// of [`from_rgb`](#method.from_rgb) to within one unit per channel.
    ///
    /// # Example
    /// ```
    /// # use colorati::color::{Color, RGBColor};
    /// # use colorati::colors::HSLColor;
    /// let lavender = HSLColor{h: 245.0, s: 50.0, l: 60.0};
    /// assert_eq!(lavender.to_rgb().to_string(), "#6E66CC");
    /// ```
    pub fn to_rgb(&self) -> RGBColor {
        let hue = self.h / 360.0;
        let saturation = self.s / 100.0;
        let lightness = self.l / 100.0;
        let to_byte = |v: f64| (v * 255.0).round() as u8;

        if saturation == 0.0 {
            let gray = to_byte(lightness);
            return RGBColor::new(gray, gray, gray);
        }

        // the two lightness-dependent bounds every channel is interpolated between
        let upper = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let lower = 2.0 * lightness - upper;

        // red leads the hue by a third of a turn, blue lags it by a third
        let channel = |offset: f64| {
            let mut phase = hue + offset;
            if phase < 0.0 {
                phase += 1.0;
            }
            if phase > 1.0 {
                phase -= 1.0;
            }
            let value = if 6.0 * phase < 1.0 {
                lower + (upper - lower) * 6.0 * phase
            } else if 2.0 * phase < 1.0 {
                upper
            } else if 3.0 * phase < 2.0 {
                lower + (upper - lower) * (2.0 / 3.0 - phase) * 6.0
            } else {
                lower
            };
            to_byte(value)
        };

        RGBColor::new(channel(1.0 / 3.0), channel(0.0), channel(-1.0 / 3.0))
    }
}

impl From<Coord> for HSLColor {
    fn from(c: Coord) -> HSLColor {
        HSLColor {
            h: c.x,
            s: c.y,
            l: c.z,
        }
    }
}

impl From<HSLColor> for Coord {
    fn from(hsl: HSLColor) -> Coord {
        Coord {
            x: hsl.h,
            y: hsl.s,
            z: hsl.l,
        }
    }
}
