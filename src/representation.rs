//! A [`Representation`] is one view of a color in one space: its channels, its alpha, its CSS
//! string, and its JSON form. Every space shares the same struct; what differs is the [`Model`] it
//! wraps, a tagged union with one variant per space, so behavior is picked by matching on the space
//! rather than through layers of subtypes.
//!
//! Three shapes come out of this:
//!
//! - array spaces (RGB, HSL, Lab, ...) have numeric channels, a numeric alpha, and a CSS function;
//! - hex has string channels (`"F1F091"`), a string alpha byte when alpha is in use, and `#...` CSS;
//! - the ANSI palettes have a single numeric code and nothing else.
//!
//! [`Representation`]: struct.Representation.html
//! [`Model`]: enum.Model.html

use std::fmt;

use once_cell::sync::OnceCell;
use serde::{Serialize, Serializer};

use crate::color::{Color, ColorSpace, RGBColor};
use crate::colors::ansicolor::{rgb_to_ansi16, rgb_to_ansi256};
use crate::colors::hexcolor::{alpha_to_hex, rgb_to_hex};
use crate::colors::{
    CIELABColor, CIELCHColor, CMYKColor, HSLColor, HSVColor, HWBColor, OkLCHColor, OkLabColor,
};
use crate::options::ColorConfig;

/// The converted color in one space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Model {
    /// A 16-color ANSI code.
    Ansi16(u8),
    /// A 256-color ANSI code.
    Ansi256(u8),
    /// Device CMYK.
    Cmyk(CMYKColor),
    /// Hex notation, which is just the base color printed differently.
    Hex(RGBColor),
    /// HSL.
    Hsl(HSLColor),
    /// HSV.
    Hsv(HSVColor),
    /// HWB.
    Hwb(HWBColor),
    /// CIELAB.
    Lab(CIELABColor),
    /// CIELCH.
    Lch(CIELCHColor),
    /// OkLab.
    OkLab(OkLabColor),
    /// OkLCH.
    OkLch(OkLCHColor),
    /// sRGB.
    Rgb(RGBColor),
}

/// Calls `$func` on the typed color inside every array-space variant, or evaluates `$other` for hex
/// and ANSI.
macro_rules! with_array_color {
    ($model:expr, $color:ident => $func:expr, $other:expr) => {
        match $model {
            Model::Cmyk($color) => $func,
            Model::Hsl($color) => $func,
            Model::Hsv($color) => $func,
            Model::Hwb($color) => $func,
            Model::Lab($color) => $func,
            Model::Lch($color) => $func,
            Model::OkLab($color) => $func,
            Model::OkLch($color) => $func,
            Model::Rgb($color) => $func,
            Model::Hex(_) | Model::Ansi16(_) | Model::Ansi256(_) => $other,
        }
    };
}

impl Model {
    /// Converts the base color into the given space.
    pub fn from_rgb(space: ColorSpace, rgb: &RGBColor) -> Model {
        match space {
            ColorSpace::Ansi16 => Model::Ansi16(rgb_to_ansi16(rgb)),
            ColorSpace::Ansi256 => Model::Ansi256(rgb_to_ansi256(rgb)),
            ColorSpace::Cmyk => Model::Cmyk(CMYKColor::from_rgb(rgb)),
            ColorSpace::Hex => Model::Hex(*rgb),
            ColorSpace::Hsl => Model::Hsl(HSLColor::from_rgb(rgb)),
            ColorSpace::Hsv => Model::Hsv(HSVColor::from_rgb(rgb)),
            ColorSpace::Hwb => Model::Hwb(HWBColor::from_rgb(rgb)),
            ColorSpace::Lab => Model::Lab(CIELABColor::from_rgb(rgb)),
            ColorSpace::Lch => Model::Lch(CIELCHColor::from_rgb(rgb)),
            ColorSpace::OkLab => Model::OkLab(OkLabColor::from_rgb(rgb)),
            ColorSpace::OkLch => Model::OkLch(OkLCHColor::from_rgb(rgb)),
            ColorSpace::Rgb => Model::Rgb(*rgb),
        }
    }

    /// The space this model is in.
    pub fn space(&self) -> ColorSpace {
        match self {
            Model::Ansi16(_) => ColorSpace::Ansi16,
            Model::Ansi256(_) => ColorSpace::Ansi256,
            Model::Cmyk(_) => ColorSpace::Cmyk,
            Model::Hex(_) => ColorSpace::Hex,
            Model::Hsl(_) => ColorSpace::Hsl,
            Model::Hsv(_) => ColorSpace::Hsv,
            Model::Hwb(_) => ColorSpace::Hwb,
            Model::Lab(_) => ColorSpace::Lab,
            Model::Lch(_) => ColorSpace::Lch,
            Model::OkLab(_) => ColorSpace::OkLab,
            Model::OkLch(_) => ColorSpace::OkLch,
            Model::Rgb(_) => ColorSpace::Rgb,
        }
    }

    /// The numeric channels of an array space, or `None` for hex and ANSI.
    pub fn numeric_channels(&self) -> Option<Vec<f64>> {
        with_array_color!(self, color => Some(color.channels()), None)
    }
}

/// The channels of a representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Channels {
    /// The numeric channels of an array space, without alpha.
    Numeric(Vec<f64>),
    /// The six hex digits of hex notation, without `#` or alpha.
    Text(String),
}

/// The alpha of a representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Alpha {
    /// The alpha fraction of an array space.
    Numeric(f64),
    /// The two hex digits of the alpha byte.
    Text(String),
}

/// The value of a representation: channels followed by alpha, where alpha applies.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Channels then alpha, e.g. `[241, 240, 145, 1]`.
    Numeric(Vec<f64>),
    /// A palette code.
    Code(u8),
    /// Hex digits then the alpha byte, e.g. `"F1F09140"`.
    Text(String),
}

/// One item produced by iterating a representation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Component {
    /// A channel or alpha of an array space, or the code of an ANSI palette.
    Number(f64),
    /// A character of a hex string.
    Char(char),
}

/// One color viewed in one space. Channels, CSS, and value are each computed once, on first use,
/// and then reused: asking twice always gives the same answer.
///
/// # Example
/// ```
/// # use colorati::prelude::*;
/// let color = Colorati::from_channels([241, 240, 145], 64. / 255., ColorOptions::new());
/// let hsl = color.hsl();
/// assert_eq!(hsl.css(), Some("hsl(59 77.42% 75.69% / 1)"));
/// assert_eq!(color.ansi256().code(), Some(229));
/// assert_eq!(color.hex().to_string(), "#F1F091");
/// ```
#[derive(Debug, Clone)]
pub struct Representation {
    model: Model,
    computed_alpha: f64,
    config: ColorConfig,
    channels: OnceCell<Option<Channels>>,
    css: OnceCell<Option<String>>,
    value: OnceCell<Value>,
}

impl Representation {
    /// Converts the base color into `space`. `computed_alpha` is the alpha derived from the hash,
    /// which `config` may override or ignore.
    pub fn new(
        space: ColorSpace,
        rgb: &RGBColor,
        computed_alpha: f64,
        config: ColorConfig,
    ) -> Representation {
        Representation {
            model: Model::from_rgb(space, rgb),
            computed_alpha,
            config,
            channels: OnceCell::new(),
            css: OnceCell::new(),
            value: OnceCell::new(),
        }
    }

    /// The space this representation is in.
    pub fn space(&self) -> ColorSpace {
        self.model.space()
    }

    /// The typed color behind this representation.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// The configuration this representation formats with.
    pub fn config(&self) -> &ColorConfig {
        &self.config
    }

    /// The channels without alpha. `None` for the ANSI palettes.
    pub fn channels(&self) -> Option<&Channels> {
        self.channels
            .get_or_init(|| match self.model {
                Model::Hex(rgb) => Some(Channels::Text(rgb_to_hex(&rgb))),
                model => model.numeric_channels().map(Channels::Numeric),
            })
            .as_ref()
    }

    /// The alpha, as the configuration reports it. `None` for the ANSI palettes, and for hex when
    /// alpha is ignored.
    pub fn alpha(&self) -> Option<Alpha> {
        let alpha = self.config.resolve_alpha(self.computed_alpha);
        match self.model {
            Model::Ansi16(_) | Model::Ansi256(_) => None,
            Model::Hex(_) if self.config.has_alpha() => Some(Alpha::Text(alpha_to_hex(alpha))),
            Model::Hex(_) => None,
            _ => Some(Alpha::Numeric(alpha)),
        }
    }

    /// The palette code of an ANSI representation.
    pub fn code(&self) -> Option<u8> {
        match self.model {
            Model::Ansi16(code) | Model::Ansi256(code) => Some(code),
            _ => None,
        }
    }

    /// The CSS string. `None` for the ANSI palettes.
    pub fn css(&self) -> Option<&str> {
        self.css
            .get_or_init(|| {
                let alpha = self.config.resolve_alpha(self.computed_alpha);
                match self.model {
                    Model::Ansi16(_) | Model::Ansi256(_) => None,
                    Model::Hex(_) => match self.value() {
                        Value::Text(digits) => Some(format!("#{}", digits)),
                        _ => None,
                    },
                    model => {
                        with_array_color!(model, color => Some(color.to_css(alpha, &self.config)), None)
                    }
                }
            })
            .as_ref()
            .map(String::as_str)
    }

    /// The channels followed by alpha where alpha applies, or the palette code for ANSI.
    pub fn value(&self) -> &Value {
        self.value.get_or_init(|| {
            if let Some(code) = self.code() {
                return Value::Code(code);
            }
            match (self.channels(), self.alpha()) {
                (Some(Channels::Numeric(channels)), Some(Alpha::Numeric(alpha))) => {
                    let mut value = channels.clone();
                    value.push(alpha);
                    Value::Numeric(value)
                }
                (Some(Channels::Text(digits)), Some(Alpha::Text(alpha))) => {
                    Value::Text(format!("{}{}", digits, alpha))
                }
                (Some(Channels::Text(digits)), _) => Value::Text(digits.clone()),
                (Some(Channels::Numeric(channels)), _) => Value::Numeric(channels.clone()),
                (None, _) => Value::Code(0),
            }
        })
    }

    /// Gets the `i`th number of the value of an array space: the channels, then alpha.
    pub fn get(&self, i: usize) -> Option<f64> {
        match self.value() {
            Value::Numeric(values) => values.get(i).copied(),
            _ => None,
        }
    }

    /// Iterates over the representation: channels then alpha for array spaces, the characters of
    /// the CSS string for hex, and the code alone for ANSI.
    pub fn iter(&self) -> std::vec::IntoIter<Component> {
        let components: Vec<Component> = match (self.value(), self.css()) {
            (Value::Numeric(values), _) => values.iter().map(|&v| Component::Number(v)).collect(),
            (Value::Code(code), _) => vec![Component::Number(f64::from(*code))],
            (Value::Text(_), Some(css)) => css.chars().map(Component::Char).collect(),
            (Value::Text(digits), None) => digits.chars().map(Component::Char).collect(),
        };
        components.into_iter()
    }
}

impl<'a> IntoIterator for &'a Representation {
    type Item = Component;
    type IntoIter = std::vec::IntoIter<Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Prints the CSS string, or the bare code for ANSI.
impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.css(), self.code()) {
            (Some(css), _) => write!(f, "{}", css),
            (None, Some(code)) => write!(f, "{}", code),
            (None, None) => Ok(()),
        }
    }
}

/// Serializes to the CSS string, or to the bare code for ANSI: never a wrapper object.
impl Serialize for Representation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match (self.css(), self.code()) {
            (_, Some(code)) => serializer.serialize_u8(code),
            (Some(css), None) => serializer.serialize_str(css),
            (None, None) => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::options::ColorOptions;

    const RGB: RGBColor = RGBColor {
        r: 241,
        g: 240,
        b: 145,
    };
    const ALPHA: f64 = 64.0 / 255.0;

    fn repr(space: ColorSpace, opts: ColorOptions) -> Representation {
        Representation::new(space, &RGB, ALPHA, ColorConfig::from(opts))
    }

    #[test]
    fn test_array_representation() {
        let rgb = repr(ColorSpace::Rgb, ColorOptions::new().with_alpha(true));
        assert_eq!(rgb.channels(), Some(&Channels::Numeric(vec![241., 240., 145.])));
        assert_eq!(rgb.alpha(), Some(Alpha::Numeric(ALPHA)));
        assert_eq!(rgb.value(), &Value::Numeric(vec![241., 240., 145., ALPHA]));
        assert_eq!(rgb.css(), Some("rgb(241 240 145 / 0.25)"));
        assert_eq!(rgb.get(3), Some(ALPHA));
        assert_eq!(rgb.get(4), None);
        let items: Vec<Component> = rgb.iter().collect();
        assert_eq!(
            items,
            vec![
                Component::Number(241.),
                Component::Number(240.),
                Component::Number(145.),
                Component::Number(ALPHA)
            ]
        );
    }
    #[test]
    fn test_hex_representation() {
        let opaque = repr(ColorSpace::Hex, ColorOptions::new());
        assert_eq!(opaque.alpha(), None);
        assert_eq!(opaque.channels(), Some(&Channels::Text("F1F091".to_string())));
        assert_eq!(opaque.value(), &Value::Text("F1F091".to_string()));
        assert_eq!(opaque.css(), Some("#F1F091"));
        assert_eq!(opaque.iter().count(), 7);

        let computed = repr(ColorSpace::Hex, ColorOptions::new().with_alpha(true));
        assert_eq!(computed.alpha(), Some(Alpha::Text("40".to_string())));
        assert_eq!(computed.css(), Some("#F1F09140"));
        let chars: String = computed
            .iter()
            .filter_map(|c| match c {
                Component::Char(c) => Some(c),
                Component::Number(_) => None,
            })
            .collect();
        assert_eq!(chars, "#F1F09140");

        let manual = repr(ColorSpace::Hex, ColorOptions::new().with_manual_alpha(0.65));
        assert_eq!(manual.value(), &Value::Text("F1F091A6".to_string()));
    }
    #[test]
    fn test_ansi_representation() {
        let ansi = repr(ColorSpace::Ansi16, ColorOptions::new().with_alpha(true));
        assert_eq!(ansi.code(), Some(97));
        assert_eq!(ansi.alpha(), None);
        assert_eq!(ansi.channels(), None);
        assert_eq!(ansi.css(), None);
        assert_eq!(ansi.value(), &Value::Code(97));
        assert_eq!(ansi.to_string(), "97");
        assert_eq!(ansi.iter().collect::<Vec<_>>(), vec![Component::Number(97.)]);
    }
    #[test]
    fn test_json() {
        let ansi = repr(ColorSpace::Ansi256, ColorOptions::new());
        assert_eq!(serde_json::to_string(&ansi).unwrap(), "229");
        let hsl = repr(ColorSpace::Hsl, ColorOptions::new().with_manual_alpha(0.65));
        assert_eq!(
            serde_json::to_string(&hsl).unwrap(),
            "\"hsl(59 77.42% 75.69% / 0.65)\""
        );
        let hex = repr(ColorSpace::Hex, ColorOptions::new());
        assert_eq!(serde_json::to_string(&hex).unwrap(), "\"#F1F091\"");
    }
    #[test]
    fn test_css_is_cached() {
        let lab = repr(ColorSpace::Lab, ColorOptions::new());
        let first = lab.css().unwrap().as_ptr();
        let second = lab.css().unwrap().as_ptr();
        assert_eq!(first, second);
        assert_eq!(lab.to_string(), "lab(93.04% -13.07 45.98 / 1)");
    }
    #[test]
    fn test_precision() {
        let hsl = repr(
            ColorSpace::Hsl,
            ColorOptions::new()
                .with_alpha(true)
                .with_channel_precision(0)
                .with_alpha_precision(3),
        );
        assert_eq!(hsl.css(), Some("hsl(59 77% 76% / 0.251)"));
        let lch = repr(ColorSpace::Lch, ColorOptions::new().with_channel_precision(4));
        assert_eq!(lch.css(), Some("lch(93.0437% 47.7988 105.8686 / 1)"));
    }
}
