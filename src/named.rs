//! The CSS named colors, and lookups in both directions. The table is embedded from
//! `data/css-color-names.csv` and parsed once, on first use.

use std::collections::HashMap;

use crate::color::RGBColor;
use crate::error::ColorError;

const CSS_COLOR_NAMES: &str = include_str!("../data/css-color-names.csv");

#[derive(Debug, Deserialize)]
struct Record {
    name: String,
    red: u8,
    green: u8,
    blue: u8,
}

fn read_named_colors() -> Vec<(String, RGBColor)> {
    let mut reader = csv::Reader::from_reader(CSS_COLOR_NAMES.as_bytes());
    reader
        .deserialize()
        .map(|result| {
            // this file ships with the crate, so bad data is a bug
            let record: Record = result.expect("named color table is malformed");
            (
                record.name,
                RGBColor::new(record.red, record.green, record.blue),
            )
        })
        .collect()
}

lazy_static! {
    static ref NAMED_COLORS: Vec<(String, RGBColor)> = read_named_colors();
    static ref BY_NAME: HashMap<&'static str, RGBColor> = NAMED_COLORS
        .iter()
        .map(|(name, rgb)| (name.as_str(), *rgb))
        .collect();
}

/// Every named color, in alphabetical order.
pub fn named_colors() -> impl Iterator<Item = (&'static str, RGBColor)> {
    NAMED_COLORS.iter().map(|(name, rgb)| (name.as_str(), *rgb))
}

/// The CSS name of a color, if it has one. Where two names share a color (`aqua` and `cyan`, `gray`
/// and `grey`), the alphabetically first is returned.
///
/// # Example
/// ```
/// # use colorati::color::RGBColor;
/// # use colorati::named::name_of;
/// assert_eq!(name_of(&RGBColor::new(102, 51, 153)), Some("rebeccapurple"));
/// assert_eq!(name_of(&RGBColor::new(0, 255, 255)), Some("aqua"));
/// assert_eq!(name_of(&RGBColor::new(241, 240, 145)), None);
/// ```
pub fn name_of(rgb: &RGBColor) -> Option<&'static str> {
    named_colors()
        .find(|(_, named)| named == rgb)
        .map(|(name, _)| name)
}

/// Looks a color up by its CSS name, ignoring ASCII case and surrounding whitespace.
pub fn rgb_of(name: &str) -> Result<RGBColor, ColorError> {
    BY_NAME
        .get(name.trim().to_ascii_lowercase().as_str())
        .copied()
        .ok_or_else(|| ColorError::UnknownName(name.to_string()))
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_table() {
        assert_eq!(named_colors().count(), 148);
        let names: Vec<&str> = named_colors().map(|(name, _)| name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
    #[test]
    fn test_rgb_of() {
        assert_eq!(rgb_of("white"), Ok(RGBColor::new(255, 255, 255)));
        assert_eq!(rgb_of(" LightGoldenrodYellow "), Ok(RGBColor::new(250, 250, 210)));
        assert_eq!(rgb_of("grey"), rgb_of("gray"));
        assert_eq!(
            rgb_of("notacolor"),
            Err(ColorError::UnknownName("notacolor".to_string()))
        );
    }
    #[test]
    fn test_name_of_round_trips() {
        for (name, rgb) in named_colors() {
            assert_eq!(rgb_of(name), Ok(rgb));
            let canonical = name_of(&rgb).unwrap();
            assert_eq!(rgb_of(canonical), Ok(rgb));
        }
        assert_eq!(name_of(&RGBColor::new(255, 0, 255)), Some("fuchsia"));
    }
}
