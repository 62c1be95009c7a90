//! The naive device CMYK conversion: no ink profile, no undercolor removal, just the key (black)
//! pulled out as one minus the brightest channel and the three inks scaled to what remains. Printed
//! with CSS's `device-cmyk()`.

use crate::color::{css_percent, Color, ColorSpace, RGBColor};
use crate::options::ColorConfig;

/// A color in device CMYK, each channel a percentage.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CMYKColor {
    /// Cyan ink, 0-100.
    pub c: f64,
    /// Magenta ink, 0-100.
    pub m: f64,
    /// Yellow ink, 0-100.
    pub y: f64,
    /// Black ink, 0-100.
    pub k: f64,
}

impl Color for CMYKColor {
    const SPACE: ColorSpace = ColorSpace::Cmyk;

    fn from_rgb(rgb: &RGBColor) -> CMYKColor {
        let frac = rgb.fractional();
        let key = 1.0 - frac.x.max(frac.y).max(frac.z);
        // pure black leaves nothing to split between the inks: avoid 0/0
        let ink = |v: f64| {
            let amount = (1.0 - v - key) / (1.0 - key);
            if amount.is_finite() {
                amount + 0.0
            } else {
                0.0
            }
        };
        CMYKColor {
            c: ink(frac.x) * 100.0,
            m: ink(frac.y) * 100.0,
            y: ink(frac.z) * 100.0,
            k: key * 100.0,
        }
    }
    fn channels(&self) -> Vec<f64> {
        vec![self.c, self.m, self.y, self.k]
    }
    fn css_channels(&self, config: &ColorConfig) -> Vec<String> {
        self.channels()
            .into_iter()
            .map(|v| css_percent(v, config))
            .collect()
    }
}
