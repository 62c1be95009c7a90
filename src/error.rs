//! The error type shared by every fallible operation in the crate. Numeric conversion itself never
//! fails: errors only come from looking things up by name or from reading input.

use std::error::Error;
use std::fmt;

/// An error from building or querying a color.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum ColorError {
    /// A color space was requested by a key that doesn't name one, such as `"hsp"`.
    UnknownSpace(String),
    /// A harmony was requested by a key that doesn't name one.
    UnknownHarmony(String),
    /// A string that should have been `#RRGGBB` or `#RRGGBBAA` wasn't.
    InvalidHex(String),
    /// A color name that isn't in the CSS named color table.
    UnknownName(String),
    /// The value to derive a color from could not be serialized for hashing. Holds the serializer's
    /// message.
    Unhashable(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ColorError::UnknownSpace(key) => write!(f, "Invalid type \"{}\" requested", key),
            ColorError::UnknownHarmony(key) => write!(f, "Invalid harmony \"{}\" requested", key),
            ColorError::InvalidHex(hex) => write!(f, "Invalid hex color \"{}\"", hex),
            ColorError::UnknownName(name) => write!(f, "Unknown color name \"{}\"", name),
            ColorError::Unhashable(msg) => write!(f, "Value could not be hashed: {}", msg),
        }
    }
}

impl Error for ColorError {}

impl From<serde_json::Error> for ColorError {
    fn from(err: serde_json::Error) -> ColorError {
        ColorError::Unhashable(err.to_string())
    }
}
