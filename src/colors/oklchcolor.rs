//! The cylindrical form of OkLab, built from it exactly the way CIELCH is built from CIELAB.

use super::oklabcolor::OkLabColor;
use crate::color::{css_number, css_percent, Color, ColorSpace, RGBColor};
use crate::coord::Coord;
use crate::options::ColorConfig;

/// A color in OkLCH, scaled by 100 like [`OkLabColor`](../oklabcolor/struct.OkLabColor.html).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct OkLCHColor {
    /// Perceived lightness, 0-100.
    pub l: f64,
    /// Chroma: the radius in the a/b plane.
    pub c: f64,
    /// Hue, in degrees in `[0, 360)`.
    pub h: f64,
}

impl From<OkLabColor> for OkLCHColor {
    fn from(lab: OkLabColor) -> OkLCHColor {
        let (c, h) = Coord::from(lab).polar_yz();
        OkLCHColor { l: lab.l, c, h }
    }
}

impl Color for OkLCHColor {
    const SPACE: ColorSpace = ColorSpace::OkLch;

    fn from_rgb(rgb: &RGBColor) -> OkLCHColor {
        OkLabColor::from_rgb(rgb).into()
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

impl From<Coord> for OkLCHColor {
    fn from(c: Coord) -> OkLCHColor {
        OkLCHColor {
            l: c.x,
            c: c.y,
            h: c.z,
        }
    }
}

impl From<OkLCHColor> for Coord {
    fn from(lch: OkLCHColor) -> Coord {
        Coord {
            x: lch.l,
            y: lch.c,
            z: lch.h,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn test_oklch_known_color() {
        let lch = OkLCHColor::from_rgb(&RGBColor::new(241, 240, 145));
        assert!(approx_eq!(f64, lch.l, 93.54604293519239, epsilon = 1e-9));
        assert!(approx_eq!(f64, lch.c, 11.735184879622878, epsilon = 1e-9));
        assert!(approx_eq!(f64, lch.h, 107.94421062548885, epsilon = 1e-9));
        let config = ColorConfig::default();
        assert_eq!(lch.to_css(0.65, &config), "oklch(93.55% 11.74 107.94 / 0.65)");
    }
}
