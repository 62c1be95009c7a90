//! This module contains one file per color space a color can be viewed in. Every space with a list
//! of numeric channels has a type implementing [`Color`]; the ANSI palettes and hex notation are
//! plain conversion functions, since they boil down to a single code or string. For convenience,
//! each main type is imported into this module's namespace directly.
//!
//! [`Color`]: ../color/trait.Color.html
pub mod ansicolor;
pub mod cielabcolor;
pub mod cielchcolor;
pub mod cmykcolor;
pub mod hexcolor;
pub mod hslcolor;
pub mod hsvcolor;
pub mod hwbcolor;
pub mod oklabcolor;
pub mod oklchcolor;

// for convenience, use this namespace for the color objects
pub use self::cielabcolor::CIELABColor;
pub use self::cielchcolor::CIELCHColor;
pub use self::cmykcolor::CMYKColor;
pub use self::hslcolor::HSLColor;
pub use self::hsvcolor::HSVColor;
pub use self::hwbcolor::HWBColor;
pub use self::oklabcolor::OkLabColor;
pub use self::oklchcolor::OkLCHColor;
