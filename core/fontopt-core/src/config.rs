//! Serialisable form of [`FontOptions`] (made by FontLab https://www.fontlab.com/)

use std::io::Read;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::options::{validate_heights, FontOptions, DEFAULT_FONT_HEIGHT};
use crate::typeface::MetricsKind;
use crate::variation::AxisSetting;

/// JSON-friendly mirror of [`FontOptions`].
///
/// Every field is optional on input. A typeface handle cannot be written
/// out; its name and style survive as plain strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontOptionsConfig {
    pub name: String,
    pub style: String,
    pub fallbacks: Vec<String>,
    pub fallback_enabled: bool,
    pub height: Option<f32>,
    pub point_height: Option<f32>,
    pub kerning_factor: f32,
    pub horizontal_scale: f32,
    pub underline: bool,
    pub metrics_kind: MetricsKind,
    pub ascent_override: Option<f32>,
    pub descent_override: Option<f32>,
    pub variations: Vec<AxisSetting>,
}

impl Default for FontOptionsConfig {
    /// Option defaults, except that no height is chosen yet so a config may
    /// name either one.
    fn default() -> Self {
        FontOptionsConfig {
            height: None,
            ..FontOptions::default().to_config()
        }
    }
}

impl FontOptionsConfig {
    /// Build options, rejecting a config that sets both heights.
    ///
    /// With neither height given the default pixel height applies.
    pub fn into_options(self) -> Result<FontOptions> {
        validate_heights(self.height, self.point_height)?;

        let sized = match (self.height, self.point_height) {
            (_, Some(points)) => FontOptions::new().with_point_height(points),
            (height, None) => FontOptions::new().with_height(height.unwrap_or(DEFAULT_FONT_HEIGHT)),
        };

        Ok(sized
            .with_name(self.name)
            .with_style(self.style)
            .with_fallbacks(self.fallbacks)
            .with_fallback_enabled(self.fallback_enabled)
            .with_kerning_factor(self.kerning_factor)
            .with_horizontal_scale(self.horizontal_scale)
            .with_underline(self.underline)
            .with_metrics_kind(self.metrics_kind)
            .with_ascent_override(self.ascent_override)
            .with_descent_override(self.descent_override)
            .with_variations(self.variations))
    }

    /// Fail on NaN or infinite numbers, naming the field.
    ///
    /// JSON has no spelling for them (`serde_json` writes `null`), so a
    /// config holding one would not read back.
    pub fn check_finite(&self) -> Result<()> {
        let optional = [
            ("height", self.height),
            ("point_height", self.point_height),
            ("ascent_override", self.ascent_override),
            ("descent_override", self.descent_override),
        ];
        let plain = [
            ("kerning_factor", self.kerning_factor),
            ("horizontal_scale", self.horizontal_scale),
        ];
        let fields = optional
            .into_iter()
            .filter_map(|(field, value)| value.map(|v| (field, v)))
            .chain(plain);
        for (field, value) in fields {
            if !value.is_finite() {
                bail!("{field} must be finite to be written as JSON, got {value}");
            }
        }
        for setting in &self.variations {
            if !setting.value.is_finite() {
                bail!(
                    "variation {} must be finite to be written as JSON, got {}",
                    setting.tag.to_text(),
                    setting.value
                );
            }
        }
        Ok(())
    }
}

impl FontOptions {
    pub fn to_config(&self) -> FontOptionsConfig {
        FontOptionsConfig {
            name: self.name().to_string(),
            style: self.style().to_string(),
            fallbacks: self.fallbacks().to_vec(),
            fallback_enabled: self.fallback_enabled(),
            height: self.height(),
            point_height: self.point_height(),
            kerning_factor: self.kerning_factor(),
            horizontal_scale: self.horizontal_scale(),
            underline: self.underline(),
            metrics_kind: self.metrics_kind(),
            ascent_override: self.ascent_override(),
            descent_override: self.descent_override(),
            variations: self.variations().to_vec(),
        }
    }
}

/// Parse options from a JSON string.
pub fn parse_config(text: &str) -> Result<FontOptions> {
    let config: FontOptionsConfig =
        serde_json::from_str(text).context("parsing font options JSON")?;
    config.into_options()
}

/// Read options from any JSON source (file, stdin, ...).
pub fn load_config(mut reader: impl Read) -> Result<FontOptions> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .context("reading font options")?;
    parse_config(&text)
}
