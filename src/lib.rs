//! Colorati turns any value into a color. The value is hashed, the hash picks a base color in sRGB,
//! and from there the color can be viewed in every space CSS and the terminal care about: RGB, HSL,
//! HSV, HWB, CIELAB and CIELCH, OkLab and OkLCH, device CMYK, hex, and the two ANSI palettes. The
//! same value always gives the same color, so it's a cheap way to give users, tags, or log sources
//! a stable identity without keeping a palette around.
//!
//! On top of the conversions come hue-rotated harmonies (complement, triad, and so on) and a check
//! for whether dark or light text reads better on top of the color.
//!
//! ```
//! # use colorati::prelude::*;
//! let color = colorati::colorati("some user id", ColorOptions::new()).unwrap();
//! let again = colorati::colorati("some user id", ColorOptions::new()).unwrap();
//! assert_eq!(color.hsl().to_string(), again.hsl().to_string());
//!
//! let color = Colorati::from_channels([241, 240, 145], 64. / 255., ColorOptions::new());
//! assert_eq!(color.hsl().to_string(), "hsl(59 77.42% 75.69% / 1)");
//! assert_eq!(color.lch().to_string(), "lch(93.04% 47.80 105.87 / 1)");
//! assert_eq!(color.harmonies().complement()[1].hex().to_string(), "#9192F1");
//! ```

#![doc(html_root_url = "https://docs.rs/colorati/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.96924 with -0.96_924
#![allow(clippy::unreadable_literal)]

#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;

use serde::Serialize;

pub mod color;
pub mod colorati;
pub mod colors;
mod consts;
pub mod contrast;
pub mod coord;
pub mod error;
pub mod harmonies;
pub mod hash;
pub mod named;
pub mod numeric;
pub mod options;
pub mod parse;
pub mod prelude;
pub mod representation;

use crate::colorati::Colorati;
use crate::error::ColorError;
use crate::options::ColorOptions;

/// Derives a color from any serializable value. Fails only if the value can't be serialized to
/// JSON, such as a map with non-string keys.
pub fn colorati<T: Serialize + ?Sized>(
    value: &T,
    options: ColorOptions,
) -> Result<Colorati, ColorError> {
    Colorati::new(value, options)
}
