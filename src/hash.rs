//! Turning an arbitrary value into a color. The value is serialized to compact JSON, hashed with
//! SHA-256, and the first four bytes of the digest are read as a big-endian `u32`. The low three
//! bytes become red, green, and blue; the top byte becomes alpha.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::color::RGBColor;
use crate::error::ColorError;

/// Hashes any serializable value to 32 bits. Equal values always hash the same way, across runs
/// and machines.
///
/// # Example
/// ```
/// # use colorati::hash::hash_value;
/// assert_eq!(hash_value("hello").unwrap(), 0x5aa762ae);
/// assert_eq!(hash_value(&42).unwrap(), 0x73475cb4);
/// ```
pub fn hash_value<T: Serialize + ?Sized>(value: &T) -> Result<u32, ColorError> {
    let bytes = serde_json::to_vec(value)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    let digest = hasher.finalize();
    Ok(u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]))
}

/// Splits a hash into the base color and the computed alpha.
pub fn split_hash(hash: u32) -> (RGBColor, f64) {
    let rgb = RGBColor::new(
        ((hash >> 16) & 0xff) as u8,
        ((hash >> 8) & 0xff) as u8,
        (hash & 0xff) as u8,
    );
    let alpha = f64::from(hash >> 24) / 255.0;
    (rgb, alpha)
}
