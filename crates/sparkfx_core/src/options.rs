//! # Option Bags
//!
//! The configuration a host passes to `trigger`. Two options are understood
//! by every recipe:
//!
//! - `intensity` - scales particle counts and ranges (default 1)
//! - `colors` - palette override
//!
//! Anything else is a recipe-specific extra (`angle`, `direction`, ...),
//! read only by the recipe that cares. Unknown keys are ignored.
//!
//! Malformed values never fail: negative intensity becomes 0, unparseable
//! colors are dropped, an empty palette falls back to the recipe default.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Upper bound on `intensity`, keeping particle batches small.
pub const MAX_INTENSITY: f32 = 8.0;

/// A recipe-specific option value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// A boolean flag.
    Bool(bool),
    /// A number.
    Number(f64),
    /// A string.
    Text(String),
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<f32> for OptionValue {
    fn from(v: f32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// Options supplied at trigger time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawOptions", into = "RawOptions")]
pub struct EffectOptions {
    intensity: Option<f32>,
    colors: Vec<Color>,
    extras: BTreeMap<String, OptionValue>,
}

impl EffectOptions {
    /// Empty option bag: every recipe default applies.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the intensity.
    #[must_use]
    pub fn with_intensity(mut self, intensity: f32) -> Self {
        if !(0.0..=MAX_INTENSITY).contains(&intensity) {
            tracing::debug!("Intensity {} out of range, clamping", intensity);
        }
        self.intensity = Some(intensity);
        self
    }

    /// Overrides the palette with already parsed colors.
    #[must_use]
    pub fn with_palette(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors = colors.into_iter().collect();
        self
    }

    /// Overrides the palette from color strings. Unparseable entries are
    /// skipped with a warning.
    #[must_use]
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.colors = parse_lenient(colors);
        self
    }

    /// Sets a recipe-specific option.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    /// Intensity, clamped to `[0, MAX_INTENSITY]`. Missing or non-finite is 1.
    #[must_use]
    pub fn intensity(&self) -> f32 {
        match self.intensity {
            Some(v) if v.is_finite() => v.clamp(0.0, MAX_INTENSITY),
            _ => 1.0,
        }
    }

    /// Scales a recipe's base particle count by the intensity.
    #[must_use]
    pub fn scaled_count(&self, base: usize) -> usize {
        (base as f32 * self.intensity()).round() as usize
    }

    /// The palette override, or `default` if none was given.
    #[must_use]
    pub fn palette<'a>(&'a self, default: &'a [Color]) -> &'a [Color] {
        if self.colors.is_empty() {
            default
        } else {
            &self.colors
        }
    }

    /// A numeric extra.
    #[must_use]
    pub fn number(&self, key: &str) -> Option<f32> {
        match self.extras.get(key) {
            Some(OptionValue::Number(v)) if v.is_finite() => Some(*v as f32),
            _ => None,
        }
    }

    /// A string extra.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.extras.get(key) {
            Some(OptionValue::Text(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    /// A boolean extra.
    #[must_use]
    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.extras.get(key) {
            Some(OptionValue::Bool(v)) => Some(*v),
            _ => None,
        }
    }
}

fn parse_lenient<I, S>(colors: I) -> Vec<Color>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    colors
        .into_iter()
        .filter_map(|s| match Color::parse(s.as_ref()) {
            Ok(color) => Some(color),
            Err(err) => {
                tracing::warn!("ignoring palette entry: {}", err);
                None
            }
        })
        .collect()
}

/// Wire shape of [`EffectOptions`]: colors as strings, extras flattened.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    intensity: Option<f32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    colors: Vec<String>,
    #[serde(flatten)]
    extras: BTreeMap<String, OptionValue>,
}

impl From<RawOptions> for EffectOptions {
    fn from(raw: RawOptions) -> Self {
        Self {
            intensity: raw.intensity,
            colors: parse_lenient(raw.colors),
            extras: raw.extras,
        }
    }
}

impl From<EffectOptions> for RawOptions {
    fn from(options: EffectOptions) -> Self {
        Self {
            intensity: options.intensity,
            colors: options.colors.iter().map(ToString::to_string).collect(),
            extras: options.extras,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_defaults_and_clamps() {
        assert!((EffectOptions::new().intensity() - 1.0).abs() < f32::EPSILON);
        assert!(EffectOptions::new().with_intensity(-2.0).intensity().abs() < f32::EPSILON);
        assert!(
            (EffectOptions::new().with_intensity(1e9).intensity() - MAX_INTENSITY).abs()
                < f32::EPSILON
        );
        assert!(
            (EffectOptions::new().with_intensity(f32::NAN).intensity() - 1.0).abs()
                < f32::EPSILON
        );
    }

    #[test]
    fn test_scaled_count() {
        let opts = EffectOptions::new().with_intensity(1.5);
        assert_eq!(opts.scaled_count(20), 30);
        assert_eq!(EffectOptions::new().with_intensity(0.0).scaled_count(20), 0);
    }

    #[test]
    fn test_palette_falls_back_when_empty_or_invalid() {
        let default = [Color::WHITE];
        let opts = EffectOptions::new().with_colors(["not-a-color", "#zz0000"]);
        assert_eq!(opts.palette(&default), &default);

        let opts = EffectOptions::new().with_colors(["#ff0000", "bogus"]);
        assert_eq!(opts.palette(&default), &[Color::rgb(255, 0, 0)]);
    }

    #[test]
    fn test_extras_are_typed() {
        let opts = EffectOptions::new()
            .with("angle", 45.0_f32)
            .with("direction", "up")
            .with("loop", true);
        assert_eq!(opts.number("angle"), Some(45.0));
        assert_eq!(opts.text("direction"), Some("up"));
        assert_eq!(opts.flag("loop"), Some(true));
        // Wrong type or missing reads as absent.
        assert_eq!(opts.number("direction"), None);
        assert_eq!(opts.text("missing"), None);
    }

    #[test]
    fn test_deserializes_from_toml() {
        let opts: EffectOptions = toml::from_str(
            r##"
            intensity = 2.5
            colors = ["#ff0000", "nope", "gold"]
            angle = 30
            direction = "left"
            "##,
        )
        .unwrap();

        assert!((opts.intensity() - 2.5).abs() < f32::EPSILON);
        assert_eq!(
            opts.palette(&[]),
            &[Color::rgb(255, 0, 0), Color::rgb(255, 215, 0)]
        );
        assert_eq!(opts.number("angle"), Some(30.0));
        assert_eq!(opts.text("direction"), Some("left"));
    }
}
