//! This module implements [OkLab](https://bottosson.github.io/posts/oklab/), a perceptual color
//! space that keeps the shape of CIELAB but fixes its worst hue shifts, especially in blues. The
//! conversion goes from linear sRGB to approximate cone responses, takes a cube root, and mixes the
//! result into lightness and two opponent axes. All three are multiplied by 100 so they read like
//! percentages next to CIELAB.

use crate::color::{css_number, css_percent, Color, ColorSpace, RGBColor};
use crate::consts::{OKLAB_LMS_MAT, OKLAB_MIX_MAT};
use crate::coord::Coord;
use crate::options::ColorConfig;

/// A color in the OkLab color space, scaled by 100.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct OkLabColor {
    /// Perceived lightness, 0-100.
    pub l: f64,
    /// The green-red opponent axis.
    pub a: f64,
    /// The blue-yellow opponent axis.
    pub b: f64,
}

impl Color for OkLabColor {
    const SPACE: ColorSpace = ColorSpace::OkLab;

    fn from_rgb(rgb: &RGBColor) -> OkLabColor {
        let lms = rgb.linear().transform(&OKLAB_LMS_MAT).map(f64::cbrt);
        let lab = lms.transform(&OKLAB_MIX_MAT) * 100u8;
        lab.into()
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

impl From<Coord> for OkLabColor {
    fn from(c: Coord) -> OkLabColor {
        OkLabColor {
            l: c.x,
            a: c.y,
            b: c.z,
        }
    }
}

impl From<OkLabColor> for Coord {
    fn from(lab: OkLabColor) -> Coord {
        Coord {
            x: lab.l,
            y: lab.a,
            z: lab.b,
        }
    }
}
