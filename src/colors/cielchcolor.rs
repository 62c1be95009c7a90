//! This file implements the CIELCH color space, a cylindrical transformation of CIELAB that uses
//! chroma and hue instead of two opponent color axes.

use super::cielabcolor::CIELABColor;
use crate::color::{css_number, css_percent, Color, ColorSpace, RGBColor};
use crate::coord::Coord;
use crate::options::ColorConfig;

/// A cylindrical form of CIELAB, analogous to the relationship between HSL and RGB.
/// # Example
///
/// ```
/// # use colorati::color::{Color, RGBColor};
/// # use colorati::colors::CIELCHColor;
/// let yellow = CIELCHColor::from_rgb(&RGBColor::new(241, 240, 145));
/// // a pale yellow sits a little past the +b axis
/// assert!(yellow.h > 90. && yellow.h < 120.);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELCHColor {
    /// The lightness component, identical to CIELAB's. Ranges between 0 and 100.
    pub l: f64,
    /// The chroma component: the distance from the gray of the same lightness. In the cylindrical
    /// space, this is the radius.
    pub c: f64,
    /// The hue component, in degrees in `[0, 360)`.
    pub h: f64,
}

impl From<CIELABColor> for CIELCHColor {
    fn from(lab: CIELABColor) -> CIELCHColor {
        let (c, h) = Coord::from(lab).polar_yz();
        CIELCHColor { l: lab.l, c, h }
    }
}

impl Color for CIELCHColor {
    const SPACE: ColorSpace = ColorSpace::Lch;

    fn from_rgb(rgb: &RGBColor) -> CIELCHColor {
        CIELABColor::from_rgb(rgb).into()
    }
    fn channels(&self) -> Vec<f64> {
        vec![self.l, self.c, self.h]
    }
    fn css_channels(&self, config: &ColorConfig) -> Vec<String> {
        vec![
            css_percent(self.l, config),
            css_number(self.c, config),
            css_number(self.h, config),
        ]
    }
}

impl From<Coord> for CIELCHColor {
    fn from(c: Coord) -> CIELCHColor {
        CIELCHColor {
            l: c.x,
            c: c.y,
            h: c.z,
        }
    }
}

impl From<CIELCHColor> for Coord {
    fn from(lch: CIELCHColor) -> Coord {
        Coord {
            x: lch.l,
            y: lch.c,
            z: lch.h,
        }
    }
}
