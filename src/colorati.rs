//! The [`Colorati`] handle: one base color, its configuration, and every view of it. Nothing is
//! computed up front. Each representation, the contrast flag, and the harmonies are built the first
//! time they are asked for and then kept, so asking again hands back the very same value.
//!
//! [`Colorati`]: struct.Colorati.html

use std::fmt;

use log::{debug, trace};
use once_cell::sync::OnceCell;
use serde::Serialize;

use crate::color::{ColorSpace, RGBColor};
use crate::contrast;
use crate::error::ColorError;
use crate::harmonies::Harmonies;
use crate::hash::{hash_value, split_hash};
use crate::named;
use crate::options::{ColorConfig, ColorOptions};
use crate::parse::parse_hex;
use crate::representation::Representation;

/// A color derived from a value, viewable in every supported space.
///
/// The base channels and the computed alpha never change; a differently configured copy is made
/// with [`clone_with`](#method.clone_with).
///
/// # Example
/// ```
/// # use colorati::prelude::*;
/// let color = Colorati::from_channels([241, 240, 145], 64. / 255., ColorOptions::new().with_alpha(true));
/// assert_eq!(color.rgb().to_string(), "rgb(241 240 145 / 0.25)");
/// assert_eq!(color.hex().to_string(), "#F1F09140");
/// assert_eq!(color.oklch().to_string(), "oklch(93.55% 11.74 107.94 / 0.25)");
/// assert!(color.has_dark_contrast());
/// ```
#[derive(Debug, Clone)]
pub struct Colorati {
    rgb: RGBColor,
    computed_alpha: f64,
    config: ColorConfig,
    representations: [OnceCell<Representation>; 12],
    dark_contrast: OnceCell<bool>,
    harmonies: OnceCell<Harmonies>,
}

impl Colorati {
    /// Hashes `value` and builds a color from the hash.
    pub fn new<T: Serialize + ?Sized>(
        value: &T,
        options: ColorOptions,
    ) -> Result<Colorati, ColorError> {
        let hash = hash_value(value)?;
        Ok(Colorati::from_hash(hash, options))
    }

    /// Builds a color from a precomputed 32-bit hash: the low three bytes are the channels and the
    /// top byte is the computed alpha.
    pub fn from_hash(hash: u32, options: ColorOptions) -> Colorati {
        let (rgb, alpha) = split_hash(hash);
        debug!("hash {:#010x} gives base color {} with alpha {}", hash, rgb, alpha);
        Colorati::from_channels(rgb.to_array(), alpha, options)
    }

    /// Builds a color from explicit channels and the alpha to use when alpha is computed.
    pub fn from_channels(channels: [u8; 3], computed_alpha: f64, options: ColorOptions) -> Colorati {
        Colorati::with_config(
            RGBColor::from(channels),
            computed_alpha,
            ColorConfig::from(options),
        )
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`. The alpha byte, if present, becomes the computed alpha;
    /// otherwise the computed alpha is 1.
    ///
    /// # Example
    /// ```
    /// # use colorati::prelude::*;
    /// let color = Colorati::from_hex("#6495ED", ColorOptions::new()).unwrap();
    /// assert_eq!(color.name(), Some("cornflowerblue"));
    /// assert!(Colorati::from_hex("6495", ColorOptions::new()).is_err());
    /// ```
    pub fn from_hex(hex: &str, options: ColorOptions) -> Result<Colorati, ColorError> {
        let (rgb, alpha) = parse_hex(hex)?;
        Ok(Colorati::from_channels(rgb.to_array(), alpha.unwrap_or(1.0), options))
    }

    /// Looks up a CSS color name. The computed alpha is 1.
    pub fn from_name(name: &str, options: ColorOptions) -> Result<Colorati, ColorError> {
        let rgb = named::rgb_of(name)?;
        Ok(Colorati::from_channels(rgb.to_array(), 1.0, options))
    }

    pub(crate) fn with_config(rgb: RGBColor, computed_alpha: f64, config: ColorConfig) -> Colorati {
        Colorati {
            rgb,
            computed_alpha,
            config,
            representations: Default::default(),
            dark_contrast: OnceCell::new(),
            harmonies: OnceCell::new(),
        }
    }

    /// The base color.
    pub fn base(&self) -> RGBColor {
        self.rgb
    }

    /// The alpha derived from the hashed value, whether or not the configuration reports it.
    pub fn computed_alpha(&self) -> f64 {
        self.computed_alpha
    }

    /// The alpha every representation reports under the current configuration.
    pub fn alpha(&self) -> f64 {
        self.config.resolve_alpha(self.computed_alpha)
    }

    /// The configuration.
    pub fn config(&self) -> &ColorConfig {
        &self.config
    }

    /// The view of this color in `space`. Built on first use; later calls return the same instance.
    pub fn representation(&self, space: ColorSpace) -> &Representation {
        self.representations[space.index()].get_or_init(|| {
            trace!("building {} representation of {}", space, self.rgb);
            Representation::new(space, &self.rgb, self.computed_alpha, self.config)
        })
    }

    /// Looks a representation up by its key, such as `"oklch"`.
    ///
    /// # Example
    /// ```
    /// # use colorati::prelude::*;
    /// let color = Colorati::from_channels([241, 240, 145], 1., ColorOptions::new());
    /// assert_eq!(color.get("hwb").unwrap().to_string(), "hwb(59 56.86% 5.49% / 1)");
    /// assert_eq!(
    ///     color.get("hsp").unwrap_err().to_string(),
    ///     "Invalid type \"hsp\" requested"
    /// );
    /// ```
    pub fn get(&self, key: &str) -> Result<&Representation, ColorError> {
        Ok(self.representation(key.parse()?))
    }

    /// The 16-color ANSI code.
    pub fn ansi16(&self) -> &Representation {
        self.representation(ColorSpace::Ansi16)
    }
    /// The 256-color ANSI code.
    pub fn ansi256(&self) -> &Representation {
        self.representation(ColorSpace::Ansi256)
    }
    /// Device CMYK.
    pub fn cmyk(&self) -> &Representation {
        self.representation(ColorSpace::Cmyk)
    }
    /// Hex notation.
    pub fn hex(&self) -> &Representation {
        self.representation(ColorSpace::Hex)
    }
    /// HSL.
    pub fn hsl(&self) -> &Representation {
        self.representation(ColorSpace::Hsl)
    }
    /// HSV.
    pub fn hsv(&self) -> &Representation {
        self.representation(ColorSpace::Hsv)
    }
    /// HWB.
    pub fn hwb(&self) -> &Representation {
        self.representation(ColorSpace::Hwb)
    }
    /// CIELAB.
    pub fn lab(&self) -> &Representation {
        self.representation(ColorSpace::Lab)
    }
    /// CIELCH.
    pub fn lch(&self) -> &Representation {
        self.representation(ColorSpace::Lch)
    }
    /// OkLab.
    pub fn oklab(&self) -> &Representation {
        self.representation(ColorSpace::OkLab)
    }
    /// OkLCH.
    pub fn oklch(&self) -> &Representation {
        self.representation(ColorSpace::OkLch)
    }
    /// sRGB.
    pub fn rgb(&self) -> &Representation {
        self.representation(ColorSpace::Rgb)
    }

    /// Whether dark text reads better than light text on this color. Computed once.
    pub fn has_dark_contrast(&self) -> bool {
        *self
            .dark_contrast
            .get_or_init(|| contrast::has_dark_contrast(&self.rgb))
    }

    /// The hue-rotated siblings of this color.
    pub fn harmonies(&self) -> &Harmonies {
        self.harmonies.get_or_init(|| Harmonies::new(self))
    }

    /// The CSS name of the base color, if it has one.
    pub fn name(&self) -> Option<&'static str> {
        named::name_of(&self.rgb)
    }

    /// A new color with the same base channels and computed alpha, and this configuration with
    /// `overrides` merged on top. None of the cached values carry over.
    ///
    /// # Example
    /// ```
    /// # use colorati::prelude::*;
    /// let color = Colorati::from_channels([241, 240, 145], 64. / 255., ColorOptions::new());
    /// let faded = color.clone_with(&ColorOptions::new().with_manual_alpha(0.65));
    /// assert_eq!(faded.rgb().to_string(), "rgb(241 240 145 / 0.65)");
    /// assert_eq!(color.rgb().to_string(), "rgb(241 240 145 / 1)");
    /// ```
    pub fn clone_with(&self, overrides: &ColorOptions) -> Colorati {
        Colorati::with_config(self.rgb, self.computed_alpha, self.config.merge(overrides))
    }
}

/// Two colors are equal if they have the same base, computed alpha, and configuration. Caches are
/// not compared.
impl PartialEq for Colorati {
    fn eq(&self, other: &Colorati) -> bool {
        self.rgb == other.rgb
            && self.computed_alpha == other.computed_alpha
            && self.config == other.config
    }
}

/// Prints the RGB CSS string.
impl fmt::Display for Colorati {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.rgb())
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::representation::Value;
    use float_cmp::approx_eq;

    const ALPHA: f64 = 64.0 / 255.0;

    fn sample(opts: ColorOptions) -> Colorati {
        Colorati::from_channels([241, 240, 145], ALPHA, opts)
    }

    #[test]
    fn test_every_space() {
        let color = sample(ColorOptions::new());
        let expected = vec![
            (ColorSpace::Ansi16, "97"),
            (ColorSpace::Ansi256, "229"),
            (ColorSpace::Cmyk, "device-cmyk(0.00% 0.41% 39.83% 5.49% / 1)"),
            (ColorSpace::Hex, "#F1F091"),
            (ColorSpace::Hsl, "hsl(59 77.42% 75.69% / 1)"),
            (ColorSpace::Hsv, "hsv(59 39.83% 94.51% / 1)"),
            (ColorSpace::Hwb, "hwb(59 56.86% 5.49% / 1)"),
            (ColorSpace::Lab, "lab(93.04% -13.07 45.98 / 1)"),
            (ColorSpace::Lch, "lch(93.04% 47.80 105.87 / 1)"),
            (ColorSpace::OkLab, "oklab(93.55% -3.62 11.16 / 1)"),
            (ColorSpace::OkLch, "oklch(93.55% 11.74 107.94 / 1)"),
            (ColorSpace::Rgb, "rgb(241 240 145 / 1)"),
        ];
        for (space, text) in expected {
            assert_eq!(color.representation(space).to_string(), text);
            assert_eq!(color.get(space.key()).unwrap().to_string(), text);
        }
    }
    #[test]
    fn test_accessors_are_cached() {
        let color = sample(ColorOptions::new());
        assert!(std::ptr::eq(color.hsl(), color.hsl()));
        assert!(std::ptr::eq(color.hsl(), color.get("hsl").unwrap()));
        assert!(std::ptr::eq(color.lab(), color.representation(ColorSpace::Lab)));
        assert!(std::ptr::eq(color.harmonies(), color.harmonies()));
        assert_eq!(color.hsl().css(), color.hsl().css());
    }
    #[test]
    fn test_unknown_space() {
        let color = sample(ColorOptions::new());
        assert_eq!(
            color.get("hsp").unwrap_err(),
            ColorError::UnknownSpace("hsp".to_string())
        );
    }
    #[test]
    fn test_alpha_modes() {
        let ignored = sample(ColorOptions::new());
        assert_eq!(ignored.rgb().value(), &Value::Numeric(vec![241., 240., 145., 1.]));
        let computed = ignored.clone_with(&ColorOptions::new().with_alpha(true));
        assert!(approx_eq!(f64, computed.alpha(), 0.25098039215686274, ulps = 2));
        assert_eq!(computed.hex().to_string(), "#F1F09140");
        let manual = computed.clone_with(&ColorOptions::new().with_manual_alpha(0.65));
        assert_eq!(manual.alpha(), 0.65);
        assert_eq!(manual.hex().to_string(), "#F1F091A6");
        assert_eq!(manual.hsv().to_string(), "hsv(59 39.83% 94.51% / 0.65)");
        assert_eq!(manual.config().channel_precision, 2);
        assert_eq!(manual.base(), ignored.base());
        assert_eq!(manual.computed_alpha(), ALPHA);
    }
    #[test]
    fn test_clone_with_keeps_unset_fields() {
        let precise = sample(ColorOptions::new().with_channel_precision(4));
        let cloned = precise.clone_with(&ColorOptions::new().with_alpha(true));
        assert_eq!(cloned.config().channel_precision, 4);
        assert_eq!(cloned.lab().to_string(), "lab(93.0437% -13.0698 45.9772 / 0.25)");
        assert_eq!(precise.clone_with(&ColorOptions::new()), precise);
    }
    #[test]
    fn test_from_hash_is_deterministic() {
        let first = Colorati::new(&vec!["a", "b"], ColorOptions::new()).unwrap();
        let second = Colorati::new(&vec!["a", "b"], ColorOptions::new()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.hsl().to_string(), second.hsl().to_string());

        let hashed = Colorati::from_hash(0x40F1F091, ColorOptions::new().with_alpha(true));
        assert_eq!(hashed, sample(ColorOptions::new().with_alpha(true)));
    }
    #[test]
    fn test_from_hex_and_name() {
        let color = Colorati::from_hex("#F1F09140", ColorOptions::new().with_alpha(true)).unwrap();
        assert_eq!(color, sample(ColorOptions::new().with_alpha(true)));
        assert_eq!(color.name(), None);

        let named = Colorati::from_name("RebeccaPurple", ColorOptions::new()).unwrap();
        assert_eq!(named.hex().to_string(), "#663399");
        assert_eq!(named.name(), Some("rebeccapurple"));
        assert_eq!(named.computed_alpha(), 1.0);
        assert!(Colorati::from_name("not a color", ColorOptions::new()).is_err());
    }
    #[test]
    fn test_dark_contrast() {
        assert!(sample(ColorOptions::new()).has_dark_contrast());
        let white = Colorati::from_channels([255, 255, 255], 1.0, ColorOptions::new());
        let black = Colorati::from_channels([0, 0, 0], 1.0, ColorOptions::new());
        assert!(white.has_dark_contrast());
        assert!(!black.has_dark_contrast());
    }
    #[test]
    fn test_json() {
        let color = sample(ColorOptions::new().with_alpha(true));
        let json = serde_json::to_string(&vec![color.ansi16(), color.hex(), color.rgb()]).unwrap();
        assert_eq!(json, r##"[97,"#F1F09140","rgb(241 240 145 / 0.25)"]"##);
    }
}
