//! Configuration for a color. [`ColorOptions`] is what a caller hands in: every field is optional and
//! it deserializes from the same camelCase keys a JSON config would use. [`ColorConfig`] is the
//! normalized form every representation and harmony works from.
//!
//! [`ColorOptions`]: struct.ColorOptions.html
//! [`ColorConfig`]: struct.ColorConfig.html

/// Decimal places used for alpha when none is given.
pub const DEFAULT_ALPHA_PRECISION: u32 = 2;
/// Decimal places used for non-integer channels when none is given.
pub const DEFAULT_CHANNEL_PRECISION: u32 = 2;

/// The `alpha` option as written by a caller: either a flag or a fixed value.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AlphaOption {
    /// `false` ignores alpha, `true` computes it from the hashed value.
    Flag(bool),
    /// Fixes alpha to the given fraction.
    Value(f64),
}

/// How alpha is reported by every representation of a color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AlphaMode {
    /// Alpha is always 1.
    Ignored,
    /// Alpha is taken from the top byte of the hash.
    Computed,
    /// Alpha is the given fraction.
    Manual(f64),
}

impl From<AlphaOption> for AlphaMode {
    fn from(opt: AlphaOption) -> AlphaMode {
        match opt {
            AlphaOption::Flag(false) => AlphaMode::Ignored,
            AlphaOption::Flag(true) => AlphaMode::Computed,
            AlphaOption::Value(v) => AlphaMode::Manual(v),
        }
    }
}

/// Caller-facing options. Unset fields fall back to the defaults, or to the current configuration
/// when used as overrides in [`Colorati::clone_with`].
///
/// # Example
/// ```
/// # use colorati::options::{AlphaMode, ColorConfig, ColorOptions};
/// let opts: ColorOptions = serde_json::from_str(r#"{"alpha": 0.65, "colorPrecision": 3}"#).unwrap();
/// let config = ColorConfig::from(opts);
/// assert_eq!(config.alpha, AlphaMode::Manual(0.65));
/// assert_eq!(config.channel_precision, 3);
/// assert_eq!(config.alpha_precision, 2);
/// ```
///
/// [`Colorati::clone_with`]: ../colorati/struct.Colorati.html#method.clone_with
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ColorOptions {
    /// Whether and how to report alpha.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<AlphaOption>,
    /// Decimal places for alpha in formatted strings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha_precision: Option<u32>,
    /// Decimal places for non-integer channels in formatted strings.
    #[serde(default, alias = "colorPrecision", skip_serializing_if = "Option::is_none")]
    pub channel_precision: Option<u32>,
}

impl ColorOptions {
    /// Options with nothing set.
    pub fn new() -> ColorOptions {
        ColorOptions::default()
    }
    /// Sets whether alpha is computed from the hash (`true`) or ignored (`false`).
    pub fn with_alpha(mut self, computed: bool) -> ColorOptions {
        self.alpha = Some(AlphaOption::Flag(computed));
        self
    }
    /// Fixes alpha to the given fraction.
    pub fn with_manual_alpha(mut self, alpha: f64) -> ColorOptions {
        self.alpha = Some(AlphaOption::Value(alpha));
        self
    }
    /// Sets the decimal places for alpha.
    pub fn with_alpha_precision(mut self, digits: u32) -> ColorOptions {
        self.alpha_precision = Some(digits);
        self
    }
    /// Sets the decimal places for non-integer channels.
    pub fn with_channel_precision(mut self, digits: u32) -> ColorOptions {
        self.channel_precision = Some(digits);
        self
    }
}

/// The normalized configuration attached to a color and shared, unchanged, with everything derived
/// from it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorConfig {
    /// The alpha policy.
    pub alpha: AlphaMode,
    /// Decimal places for alpha. Anything above 100 disables rounding.
    pub alpha_precision: u32,
    /// Decimal places for non-integer channels. Anything above 100 disables rounding.
    pub channel_precision: u32,
}

impl Default for ColorConfig {
    fn default() -> ColorConfig {
        ColorConfig {
            alpha: AlphaMode::Ignored,
            alpha_precision: DEFAULT_ALPHA_PRECISION,
            channel_precision: DEFAULT_CHANNEL_PRECISION,
        }
    }
}

impl From<ColorOptions> for ColorConfig {
    fn from(opts: ColorOptions) -> ColorConfig {
        ColorConfig::default().merge(&opts)
    }
}

impl ColorConfig {
    /// Shallow merge: every field set in `overrides` replaces the current one.
    pub fn merge(&self, overrides: &ColorOptions) -> ColorConfig {
        ColorConfig {
            alpha: overrides.alpha.map(AlphaMode::from).unwrap_or(self.alpha),
            alpha_precision: overrides.alpha_precision.unwrap_or(self.alpha_precision),
            channel_precision: overrides.channel_precision.unwrap_or(self.channel_precision),
        }
    }
    /// The alpha to report, given the alpha derived from the hash.
    pub fn resolve_alpha(&self, computed: f64) -> f64 {
        match self.alpha {
            AlphaMode::Ignored => 1.0,
            AlphaMode::Computed => computed,
            AlphaMode::Manual(alpha) => alpha,
        }
    }
    /// Whether alpha should show up in formats that can leave it out, such as hex.
    pub fn has_alpha(&self) -> bool {
        self.alpha != AlphaMode::Ignored
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ColorConfig::from(ColorOptions::new());
        assert_eq!(config.alpha, AlphaMode::Ignored);
        assert_eq!(config.alpha_precision, 2);
        assert_eq!(config.channel_precision, 2);
        assert_eq!(config.resolve_alpha(0.25), 1.0);
        assert!(!config.has_alpha());
    }
    #[test]
    fn test_alpha_modes() {
        let computed = ColorConfig::from(ColorOptions::new().with_alpha(true));
        assert_eq!(computed.resolve_alpha(0.25), 0.25);
        let ignored = ColorConfig::from(ColorOptions::new().with_alpha(false));
        assert_eq!(ignored.alpha, AlphaMode::Ignored);
        let manual = ColorConfig::from(ColorOptions::new().with_manual_alpha(0.65));
        assert_eq!(manual.resolve_alpha(0.25), 0.65);
        assert!(manual.has_alpha());
    }
    #[test]
    fn test_merge_overrides_win() {
        let base = ColorConfig::from(ColorOptions::new().with_alpha(true).with_channel_precision(4));
        let merged = base.merge(&ColorOptions::new().with_manual_alpha(0.5));
        assert_eq!(merged.alpha, AlphaMode::Manual(0.5));
        assert_eq!(merged.channel_precision, 4);
        assert_eq!(base.merge(&ColorOptions::new()), base);
    }
    #[test]
    fn test_deserialize() {
        let opts: ColorOptions = serde_json::from_str(r#"{"alpha": true}"#).unwrap();
        assert_eq!(opts.alpha, Some(AlphaOption::Flag(true)));
        let opts: ColorOptions =
            serde_json::from_str(r#"{"alphaPrecision": 1, "channelPrecision": 0}"#).unwrap();
        assert_eq!(opts.alpha_precision, Some(1));
        assert_eq!(opts.channel_precision, Some(0));
        assert!(serde_json::from_str::<ColorOptions>(r#"{"hue": 3}"#).is_err());
    }
}
