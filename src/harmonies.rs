//! Color harmonies: sets of colors whose hues sit at fixed angles from an origin color on the HSL
//! wheel, keeping its saturation, lightness, alpha, and configuration. Each set starts with the
//! origin itself, followed by one color per offset.

use std::fmt;
use std::str::FromStr;

use log::debug;
use once_cell::sync::OnceCell;

use crate::color::{Color, RGBColor};
use crate::colorati::Colorati;
use crate::colors::HSLColor;
use crate::error::ColorError;
use crate::options::ColorConfig;

/// The kinds of harmony.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Harmony {
    /// Five neighbors 30 degrees apart.
    Analogous,
    /// The two colors at right angles.
    Clash,
    /// The opposite color.
    Complement,
    /// Five close neighbors 15 degrees apart.
    Neutral,
    /// The two neighbors of the complement.
    Split,
    /// The other three corners of a square.
    Tetrad,
    /// The other two corners of an equilateral triangle.
    Triad,
}

impl Harmony {
    /// Every harmony, in alphabetical order.
    pub const ALL: [Harmony; 7] = [
        Harmony::Analogous,
        Harmony::Clash,
        Harmony::Complement,
        Harmony::Neutral,
        Harmony::Split,
        Harmony::Tetrad,
        Harmony::Triad,
    ];

    /// The key used to look this harmony up.
    pub fn key(self) -> &'static str {
        match self {
            Harmony::Analogous => "analogous",
            Harmony::Clash => "clash",
            Harmony::Complement => "complement",
            Harmony::Neutral => "neutral",
            Harmony::Split => "split",
            Harmony::Tetrad => "tetrad",
            Harmony::Triad => "triad",
        }
    }

    /// The first offset, the last offset (inclusive), and the step between them, in degrees.
    fn range(self) -> (u32, u32, u32) {
        match self {
            Harmony::Analogous => (30, 150, 30),
            Harmony::Clash => (90, 270, 180),
            Harmony::Complement => (180, 180, 1),
            Harmony::Neutral => (15, 75, 15),
            Harmony::Split => (150, 210, 60),
            Harmony::Tetrad => (90, 270, 90),
            Harmony::Triad => (120, 240, 120),
        }
    }

    /// The hue offsets, in degrees, of the colors this harmony adds to the origin.
    ///
    /// # Example
    /// ```
    /// # use colorati::harmonies::Harmony;
    /// assert_eq!(Harmony::Tetrad.offsets(), vec![90, 180, 270]);
    /// assert_eq!(Harmony::Clash.offsets(), vec![90, 270]);
    /// ```
    pub fn offsets(self) -> Vec<u32> {
        let (start, end, step) = self.range();
        (start..=end).step_by(step as usize).collect()
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Harmony {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Harmony, ColorError> {
        Harmony::ALL
            .iter()
            .copied()
            .find(|harmony| harmony.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| ColorError::UnknownHarmony(s.to_string()))
    }
}

/// The harmonies of one origin color. Each set is derived the first time it is asked for.
///
/// Only a snapshot of the origin is kept, so the colors here are independent of the
/// [`Colorati`](../colorati/struct.Colorati.html) they came from.
///
/// # Example
/// ```
/// # use colorati::prelude::*;
/// let color = Colorati::from_channels([241, 240, 145], 1., ColorOptions::new());
/// let triad: Vec<String> = color.harmonies().triad().iter().map(|c| c.hex().to_string()).collect();
/// assert_eq!(triad, vec!["#F1F091", "#91F1F0", "#F091F1"]);
/// ```
#[derive(Debug, Clone)]
pub struct Harmonies {
    origin: RGBColor,
    hsl: HSLColor,
    computed_alpha: f64,
    config: ColorConfig,
    sets: [OnceCell<Vec<Colorati>>; 7],
}

impl Harmonies {
    /// Snapshots `origin` for deriving harmonies.
    pub fn new(origin: &Colorati) -> Harmonies {
        let rgb = origin.base();
        Harmonies {
            origin: rgb,
            hsl: HSLColor::from_rgb(&rgb),
            computed_alpha: origin.computed_alpha(),
            config: *origin.config(),
            sets: Default::default(),
        }
    }

    fn derive(&self, harmony: Harmony) -> Vec<Colorati> {
        debug!("deriving {} harmony of {}", harmony, self.origin);
        let siblings = harmony
            .offsets()
            .into_iter()
            .map(|offset| self.hsl.rotate_hue(f64::from(offset)).to_rgb());
        std::iter::once(self.origin)
            .chain(siblings)
            .map(|rgb| Colorati::with_config(rgb, self.computed_alpha, self.config))
            .collect()
    }

    /// The origin followed by the colors of `harmony`.
    pub fn get(&self, harmony: Harmony) -> &[Colorati] {
        self.sets[harmony.index()].get_or_init(|| self.derive(harmony))
    }

    /// Looks a harmony up by its key, such as `"triad"`.
    pub fn get_by_key(&self, key: &str) -> Result<&[Colorati], ColorError> {
        Ok(self.get(key.parse()?))
    }

    /// The origin and five neighbors 30 degrees apart.
    pub fn analogous(&self) -> &[Colorati] {
        self.get(Harmony::Analogous)
    }
    /// The origin and the colors at 90 and 270 degrees.
    pub fn clash(&self) -> &[Colorati] {
        self.get(Harmony::Clash)
    }
    /// The origin and the color opposite it.
    pub fn complement(&self) -> &[Colorati] {
        self.get(Harmony::Complement)
    }
    /// The origin and five neighbors 15 degrees apart.
    pub fn neutral(&self) -> &[Colorati] {
        self.get(Harmony::Neutral)
    }
    /// The origin and the colors at 150 and 210 degrees.
    pub fn split(&self) -> &[Colorati] {
        self.get(Harmony::Split)
    }
    /// The origin and the colors at 90, 180, and 270 degrees.
    pub fn tetrad(&self) -> &[Colorati] {
        self.get(Harmony::Tetrad)
    }
    /// The origin and the colors at 120 and 240 degrees.
    pub fn triad(&self) -> &[Colorati] {
        self.get(Harmony::Triad)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::options::ColorOptions;
    use maplit::hashmap;

    const ALPHA: f64 = 64.0 / 255.0;

    fn origin(opts: ColorOptions) -> Colorati {
        Colorati::from_channels([241, 240, 145], ALPHA, opts)
    }

    fn channels(colors: &[Colorati]) -> Vec<[u8; 3]> {
        colors.iter().map(|c| c.base().to_array()).collect()
    }

    #[test]
    fn test_cardinality() {
        let color = origin(ColorOptions::new());
        let sizes = hashmap! {
            Harmony::Analogous => 6,
            Harmony::Clash => 3,
            Harmony::Complement => 2,
            Harmony::Neutral => 6,
            Harmony::Split => 3,
            Harmony::Tetrad => 4,
            Harmony::Triad => 3,
        };
        for (harmony, size) in sizes {
            let set = color.harmonies().get(harmony);
            assert_eq!(set.len(), size, "{}", harmony);
            assert_eq!(set[0].base(), color.base());
        }
    }
    #[test]
    fn test_known_harmonies() {
        let color = origin(ColorOptions::new());
        let harmonies = color.harmonies();
        let base = [241, 240, 145];
        assert_eq!(
            channels(harmonies.analogous()),
            vec![
                base,
                [194, 241, 145],
                [146, 241, 145],
                [145, 241, 192],
                [145, 241, 240],
                [145, 194, 241]
            ]
        );
        assert_eq!(
            channels(harmonies.neutral()),
            vec![
                base,
                [218, 241, 145],
                [194, 241, 145],
                [170, 241, 145],
                [146, 241, 145],
                [145, 241, 168]
            ]
        );
        assert_eq!(
            channels(harmonies.clash()),
            vec![base, [145, 241, 192], [241, 145, 194]]
        );
        assert_eq!(
            channels(harmonies.split()),
            vec![base, [145, 194, 241], [192, 145, 241]]
        );
        assert_eq!(
            channels(harmonies.triad()),
            vec![base, [145, 241, 240], [240, 145, 241]]
        );
        assert_eq!(
            channels(harmonies.tetrad()),
            vec![base, [145, 241, 192], [145, 146, 241], [241, 145, 194]]
        );
        assert_eq!(channels(harmonies.complement()), vec![base, [145, 146, 241]]);
    }
    #[test]
    fn test_harmonies_share_alpha_and_config() {
        let color = origin(ColorOptions::new().with_alpha(true).with_channel_precision(3));
        for sibling in color.harmonies().tetrad() {
            assert_eq!(sibling.computed_alpha(), ALPHA);
            assert_eq!(sibling.config(), color.config());
            assert!(sibling.hex().to_string().ends_with("40"));
        }
    }
    #[test]
    fn test_complement_symmetry() {
        for rgb in &[[241, 240, 145], [10, 200, 90], [255, 0, 0], [30, 60, 200]] {
            let color = Colorati::from_channels(*rgb, 1.0, ColorOptions::new());
            let complement = &color.harmonies().complement()[1];
            let back = complement.harmonies().complement()[1].base().to_array();
            for (orig, round_trip) in rgb.iter().zip(back.iter()) {
                assert!((i16::from(*orig) - i16::from(*round_trip)).abs() <= 1);
            }
        }
    }
    #[test]
    fn test_sets_are_cached() {
        let color = origin(ColorOptions::new());
        let first = color.harmonies().triad().as_ptr();
        assert_eq!(first, color.harmonies().triad().as_ptr());
        assert_eq!(
            color.harmonies().get_by_key("Triad").unwrap().as_ptr(),
            first
        );
    }
    #[test]
    fn test_unknown_harmony() {
        let color = origin(ColorOptions::new());
        assert_eq!(
            color.harmonies().get_by_key("square").unwrap_err(),
            ColorError::UnknownHarmony("square".to_string())
        );
        assert_eq!("clash".parse::<Harmony>(), Ok(Harmony::Clash));
    }
    #[test]
    fn test_gray_has_gray_harmonies() {
        let gray = Colorati::from_channels([128, 128, 128], 1.0, ColorOptions::new());
        for sibling in gray.harmonies().analogous() {
            assert_eq!(sibling.base(), RGBColor::new(128, 128, 128));
        }
    }
}
