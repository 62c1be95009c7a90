//! This module simply brings the most common functionality under a single namespace, to prevent
//! excessive imports: the [`Colorati`] handle, the options it is configured
//! with, the [`Color`] trait with the base [`RGBColor`], the space and harmony tags, and the error
//! type. The individual color space types in the [`colors`] module are not included.
//!
//! [`Colorati`]: ../colorati/struct.Colorati.html
//! [`Color`]: ../color/trait.Color.html
//! [`RGBColor`]: ../color/struct.RGBColor.html
//! [`colors`]: ../colors/index.html

pub use crate::color::{Color, ColorSpace, RGBColor};
pub use crate::colorati::Colorati;
pub use crate::error::ColorError;
pub use crate::harmonies::{Harmonies, Harmony};
pub use crate::options::{ColorConfig, ColorOptions};
pub use crate::representation::{Alpha, Channels, Representation, Value};
