//! This file defines the base color every representation is derived from, [`RGBColor`], the
//! [`Color`] trait that every channel-array color space implements, and [`ColorSpace`], the tag that
//! names each representation a color can be viewed in.
//!
//! [`RGBColor`]: struct.RGBColor.html
//! [`Color`]: trait.Color.html
//! [`ColorSpace`]: enum.ColorSpace.html

use std::fmt;
use std::str::FromStr;

use crate::consts::SRGB_LINEAR_CUTOFF;
use crate::coord::Coord;
use crate::error::ColorError;
use crate::numeric::{format_fixed, format_trimmed, round_to};
use crate::options::ColorConfig;

/// A color in sRGB with 8-bit channels. This is the canonical color: every other space is computed
/// from it, and it never changes once created.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel, 0-255.
    pub r: u8,
    /// The green channel, 0-255.
    pub g: u8,
    /// The blue channel, 0-255.
    pub b: u8,
}

impl RGBColor {
    /// Creates a color from its three channels.
    pub fn new(r: u8, g: u8, b: u8) -> RGBColor {
        RGBColor { r, g, b }
    }
    /// The channels scaled to 0-1.
    pub fn fractional(&self) -> Coord {
        Coord {
            x: f64::from(self.r),
            y: f64::from(self.g),
            z: f64::from(self.b),
        } / 255u8
    }
    /// The channels scaled to 0-1 with the sRGB transfer function removed.
    pub fn linear(&self) -> Coord {
        self.fractional().map(|v| {
            if v > SRGB_LINEAR_CUTOFF {
                ((v + 0.055) / 1.055).powf(2.4)
            } else {
                v / 12.92
            }
        })
    }
    /// The channels as an array.
    pub fn to_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
    /// The largest channel.
    pub fn max(&self) -> u8 {
        self.r.max(self.g).max(self.b)
    }
    /// The smallest channel.
    pub fn min(&self) -> u8 {
        self.r.min(self.g).min(self.b)
    }
}

impl From<[u8; 3]> for RGBColor {
    fn from([r, g, b]: [u8; 3]) -> RGBColor {
        RGBColor { r, g, b }
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    fn from((r, g, b): (u8, u8, u8)) -> RGBColor {
        RGBColor { r, g, b }
    }
}

/// Prints the color as `#RRGGBB`.
impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A color space whose value is a fixed list of numeric channels plus alpha. Every such space is a
/// pure function of the base [`RGBColor`], and knows how to print itself as a CSS color function.
///
/// [`RGBColor`]: struct.RGBColor.html
pub trait Color: Sized + Copy {
    /// The tag for this space.
    const SPACE: ColorSpace;
    /// Converts from the base color.
    fn from_rgb(rgb: &RGBColor) -> Self;
    /// The channels, in the order they are printed.
    fn channels(&self) -> Vec<f64>;
    /// The channels formatted for CSS, in order, without alpha. `config` supplies the precision.
    fn css_channels(&self, config: &ColorConfig) -> Vec<String>;
    /// The full CSS string: `name(c1 c2 c3 / alpha)`.
    fn to_css(&self, alpha: f64, config: &ColorConfig) -> String {
        format!(
            "{}({} / {})",
            Self::SPACE.css_function(),
            self.css_channels(config).join(" "),
            format_trimmed(alpha, config.alpha_precision)
        )
    }
}

/// The RGB space simply reports the base channels.
impl Color for RGBColor {
    const SPACE: ColorSpace = ColorSpace::Rgb;
    fn from_rgb(rgb: &RGBColor) -> RGBColor {
        *rgb
    }
    fn channels(&self) -> Vec<f64> {
        vec![f64::from(self.r), f64::from(self.g), f64::from(self.b)]
    }
    fn css_channels(&self, _config: &ColorConfig) -> Vec<String> {
        self.to_array().iter().map(|c| c.to_string()).collect()
    }
}

/// Formats a hue for the HSL family, which always prints whole degrees.
pub(crate) fn css_hue(hue: f64) -> String {
    format!("{}", round_to(hue, 0))
}

/// Formats a percentage channel with the configured precision.
pub(crate) fn css_percent(value: f64, config: &ColorConfig) -> String {
    format!("{}%", format_fixed(value, config.channel_precision))
}

/// Formats a plain channel with the configured precision.
pub(crate) fn css_number(value: f64, config: &ColorConfig) -> String {
    format_fixed(value, config.channel_precision)
}

/// Every representation a color can be viewed in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    /// The 16-color ANSI foreground codes 30-37 and 90-97.
    Ansi16,
    /// The 256-color ANSI palette.
    Ansi256,
    /// Device CMYK, as percentages.
    Cmyk,
    /// `#RRGGBB` or `#RRGGBBAA`.
    Hex,
    /// Hue, saturation, lightness.
    Hsl,
    /// Hue, saturation, value.
    Hsv,
    /// Hue, whiteness, blackness.
    Hwb,
    /// CIELAB under D65.
    Lab,
    /// The cylindrical form of CIELAB.
    Lch,
    /// OkLab, scaled by 100.
    OkLab,
    /// The cylindrical form of OkLab.
    OkLch,
    /// sRGB with 8-bit channels.
    Rgb,
}

impl ColorSpace {
    /// Every space, in alphabetical order.
    pub const ALL: [ColorSpace; 12] = [
        ColorSpace::Ansi16,
        ColorSpace::Ansi256,
        ColorSpace::Cmyk,
        ColorSpace::Hex,
        ColorSpace::Hsl,
        ColorSpace::Hsv,
        ColorSpace::Hwb,
        ColorSpace::Lab,
        ColorSpace::Lch,
        ColorSpace::OkLab,
        ColorSpace::OkLch,
        ColorSpace::Rgb,
    ];

    /// The key used to look this space up, e.g. `"oklch"`.
    pub fn key(self) -> &'static str {
        match self {
            ColorSpace::Ansi16 => "ansi16",
            ColorSpace::Ansi256 => "ansi256",
            ColorSpace::Cmyk => "cmyk",
            ColorSpace::Hex => "hex",
            ColorSpace::Hsl => "hsl",
            ColorSpace::Hsv => "hsv",
            ColorSpace::Hwb => "hwb",
            ColorSpace::Lab => "lab",
            ColorSpace::Lch => "lch",
            ColorSpace::OkLab => "oklab",
            ColorSpace::OkLch => "oklch",
            ColorSpace::Rgb => "rgb",
        }
    }

    /// The name of the CSS function that prints this space. Only CMYK differs from the key.
    pub fn css_function(self) -> &'static str {
        match self {
            ColorSpace::Cmyk => "device-cmyk",
            other => other.key(),
        }
    }

    /// The position of this space in [`ALL`](#associatedconstant.ALL), used to index caches.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for ColorSpace {
    type Err = ColorError;

    /// Parses a space key, ignoring ASCII case.
    fn from_str(s: &str) -> Result<ColorSpace, ColorError> {
        ColorSpace::ALL
            .iter()
            .copied()
            .find(|space| space.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| ColorError::UnknownSpace(s.to_string()))
    }
}
