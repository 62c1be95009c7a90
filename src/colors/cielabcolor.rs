//! A module that implements the [CIELAB color
//! space](https://en.wikipedia.org/wiki/Lab_color_space#CIELAB). CIELAB is a device-independent
//! space with an L value for lightness and two opponent color axes for chromaticity. Formally the
//! three values are called L\*, a\*, and b\*, but for convenience they are just `l`, `a`, and `b`
//! here.
//!
//! Unlike CSS's own `lab()`, which is defined against D50, this conversion stays in D65 (the white
//! point of sRGB) and skips chromatic adaptation. The numbers are therefore those of a D65 Lab.

use crate::color::{css_number, css_percent, Color, ColorSpace, RGBColor};
use crate::consts::{D65_WHITE_POINT, STANDARD_RGB_TO_XYZ};
use crate::coord::Coord;
use crate::options::ColorConfig;

/// A color in the CIELAB color space.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELABColor {
    /// The lightness of a given color. 0 is black, whereas 100 is the value of diffuse white.
    pub l: f64,
    /// The first opponent color axis, from green (negative) to magenta (positive). Roughly -128 to
    /// 127 for visible colors.
    pub a: f64,
    /// The second opponent color axis, from blue (negative) to yellow (positive). Roughly -128 to
    /// 127 for visible colors.
    pub b: f64,
}

/// The CIE nonlinearity that models human lightness perception: a cube root, switching to a line
/// near zero so the slope stays finite.
fn lab_f(t: f64) -> f64 {
    let delta: f64 = 6.0 / 29.0;
    if t > delta.powi(3) {
        t.cbrt()
    } else {
        t / (3.0 * delta * delta) + 4.0 / 29.0
    }
}

impl Color for CIELABColor {
    const SPACE: ColorSpace = ColorSpace::Lab;

    fn from_rgb(rgb: &RGBColor) -> CIELABColor {
        // https://en.wikipedia.org/wiki/Lab_color_space#CIELAB-CIEXYZ_conversions
        let xyz = rgb.linear().transform(&STANDARD_RGB_TO_XYZ) * 100u8;
        let f = xyz.scale_by(D65_WHITE_POINT).map(lab_f);
        // f was modified to allow for the nonlinearity of vision, so this is just linear formulae
        // note how a and b are opponent color axes
        CIELABColor {
            l: 116.0 * f.y - 16.0,
            a: 500.0 * (f.x - f.y),
            b: 200.0 * (f.y - f.z),
        }
    }
    fn channels(&self) -> Vec<f64> {
        vec![self.l, self.a, self.b]
    }
    fn css_channels(&self, config: &ColorConfig) -> Vec<String> {
        vec![
            css_percent(self.l, config),
            css_number(self.a, config),
            css_number(self.b, config),
        ]
    }
}

impl From<Coord> for CIELABColor {
    fn from(c: Coord) -> CIELABColor {
        CIELABColor {
            l: c.x,
            a: c.y,
            b: c.z,
        }
    }
}

impl From<CIELABColor> for Coord {
    fn from(lab: CIELABColor) -> Coord {
        Coord {
            x: lab.l,
            y: lab.a,
            z: lab.b,
        }
    }
}
