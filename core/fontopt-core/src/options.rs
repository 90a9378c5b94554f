//! Font selection options (made by FontLab https://www.fontlab.com/)

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use anyhow::{anyhow, Result};
use log::{debug, warn};

use crate::ord::{total, Total};
use crate::style::FontStyleFlags;
use crate::tags::AxisTag;
use crate::typeface::{handle_addr, MetricsKind, TypefaceHandle, TypefaceMetrics};
use crate::variation::{dedup_settings, upsert, AxisSetting};

/// Height used when no other size is given.
pub const DEFAULT_FONT_HEIGHT: f32 = 14.0;

/// Everything needed to pick and size a font, built in a fluent style.
///
/// A value either names a family and style, or carries a typeface handle
/// whose own name and style take their place. Exactly one of the pixel
/// height and the point height is set at a time.
///
/// ```
/// use fontopt_core::options::FontOptions;
/// use fontopt_core::tags::AxisTag;
///
/// let opts = FontOptions::new()
///     .with_name("Inter")
///     .with_point_height(11.0)
///     .with_variation(AxisTag::new(b"wght"), 650.0);
///
/// assert_eq!(opts.height(), None);
/// assert_eq!(opts.point_height(), Some(11.0));
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct FontOptions {
    name: String,
    style: String,
    typeface: Option<TypefaceHandle>,
    fallbacks: Vec<String>,
    metrics_kind: MetricsKind,
    height: Option<f32>,
    point_height: Option<f32>,
    tracking: f32,
    horizontal_scale: f32,
    ascent_override: Option<f32>,
    descent_override: Option<f32>,
    fallback_enabled: bool,
    underlined: bool,
    variations: Vec<AxisSetting>,
}

impl Default for FontOptions {
    fn default() -> Self {
        Self {
            name: String::new(),
            style: String::new(),
            typeface: None,
            fallbacks: Vec::new(),
            metrics_kind: MetricsKind::default(),
            height: Some(DEFAULT_FONT_HEIGHT),
            point_height: None,
            tracking: 0.0,
            horizontal_scale: 1.0,
            ascent_override: None,
            descent_override: None,
            fallback_enabled: true,
            underlined: false,
            variations: Vec::new(),
        }
    }
}

impl FontOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_height(height: f32) -> Self {
        Self::new().with_height(height)
    }

    /// Height plus plain/bold/italic/underlined flags.
    pub fn from_height_and_flags(height: f32, flags: FontStyleFlags) -> Self {
        Self::from_name(String::new(), height, flags)
    }

    /// Family name, height and flags; the style name comes from the flags.
    pub fn from_name(name: impl Into<String>, height: f32, flags: FontStyleFlags) -> Self {
        Self::from_name_and_style(name, flags.style_name(), height)
            .with_underline(flags.contains(FontStyleFlags::UNDERLINED))
    }

    pub fn from_name_and_style(
        name: impl Into<String>,
        style: impl Into<String>,
        height: f32,
    ) -> Self {
        Self::new()
            .with_name(name)
            .with_style(style)
            .with_height(height)
    }

    /// Options that use `typeface` directly, at the default height.
    pub fn from_typeface(typeface: TypefaceHandle) -> Self {
        Self::new().with_typeface(Some(typeface))
    }

    /// Family name to resolve. Ignored (and left unchanged) while a typeface
    /// is attached; detach it first with `with_typeface(None)`.
    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.try_with_name(name).unwrap_or_else(|(opts, err)| {
            warn!("{err}");
            opts
        })
    }

    /// Style name to resolve. Same typeface rule as [`with_name`](Self::with_name).
    pub fn with_style(self, style: impl Into<String>) -> Self {
        self.try_with_style(style).unwrap_or_else(|(opts, err)| {
            warn!("{err}");
            opts
        })
    }

    /// Like [`with_name`](Self::with_name), but hands the unchanged options
    /// back together with an error when a typeface is attached.
    pub fn try_with_name(
        mut self,
        name: impl Into<String>,
    ) -> std::result::Result<Self, (Self, anyhow::Error)> {
        let name = name.into();
        if let Some(face) = &self.typeface {
            let err = anyhow!(
                "ignoring name {name:?}: typeface {:?} is attached",
                face.name()
            );
            return Err((self, err));
        }
        self.name = name;
        Ok(self)
    }

    pub fn try_with_style(
        mut self,
        style: impl Into<String>,
    ) -> std::result::Result<Self, (Self, anyhow::Error)> {
        let style = style.into();
        if let Some(face) = &self.typeface {
            let err = anyhow!(
                "ignoring style {style:?}: typeface {:?} is attached",
                face.name()
            );
            return Err((self, err));
        }
        self.style = style;
        Ok(self)
    }

    /// Attach or detach a typeface. Attaching copies the handle's name and
    /// style over the current ones; detaching keeps them.
    pub fn with_typeface(mut self, typeface: Option<TypefaceHandle>) -> Self {
        if let Some(face) = &typeface {
            if !self.name.is_empty() && self.name != face.name() {
                debug!("typeface {:?} replaces name {:?}", face.name(), self.name);
            }
            if !self.style.is_empty() && self.style != face.style() {
                debug!("typeface {:?} replaces style {:?}", face.style(), self.style);
            }
            self.name = face.name().to_string();
            self.style = face.style().to_string();
        }
        self.typeface = typeface;
        self
    }

    pub fn with_fallbacks(mut self, fallbacks: Vec<String>) -> Self {
        self.fallbacks = fallbacks;
        self
    }

    pub fn with_fallback_enabled(mut self, enabled: bool) -> Self {
        self.fallback_enabled = enabled;
        self
    }

    /// Pixel height (can be fractional). Clears the point height.
    pub fn with_height(mut self, height: f32) -> Self {
        if height <= 0.0 {
            warn!("font height should be positive, got {height}");
        }
        self.height = Some(height);
        self.point_height = None;
        self
    }

    /// Height in points (can be fractional). Clears the pixel height.
    pub fn with_point_height(mut self, point_height: f32) -> Self {
        if point_height <= 0.0 {
            warn!("font point height should be positive, got {point_height}");
        }
        self.point_height = Some(point_height);
        self.height = None;
        self
    }

    /// Extra spacing between glyphs, also called tracking.
    pub fn with_kerning_factor(mut self, factor: f32) -> Self {
        self.tracking = factor;
        self
    }

    pub fn with_horizontal_scale(mut self, scale: f32) -> Self {
        self.horizontal_scale = scale;
        self
    }

    pub fn with_underline(mut self, underlined: bool) -> Self {
        self.underlined = underlined;
        self
    }

    pub fn with_metrics_kind(mut self, kind: MetricsKind) -> Self {
        self.metrics_kind = kind;
        self
    }

    /// Ascent as a multiple of the point size; `None` (or a negative value)
    /// falls back to the typeface's own metric.
    pub fn with_ascent_override(mut self, ascent: Option<f32>) -> Self {
        self.ascent_override = ascent.filter(|v| *v >= 0.0);
        self
    }

    /// Descent counterpart of [`with_ascent_override`](Self::with_ascent_override).
    pub fn with_descent_override(mut self, descent: Option<f32>) -> Self {
        self.descent_override = descent.filter(|v| *v >= 0.0);
        self
    }

    /// Replace all axis settings. Repeated tags collapse to one entry.
    pub fn with_variations(mut self, variations: Vec<AxisSetting>) -> Self {
        self.variations = dedup_settings(variations);
        self
    }

    /// Set one axis, keeping its position if it was already set.
    pub fn with_variation(mut self, tag: AxisTag, value: f32) -> Self {
        upsert(&mut self.variations, tag, value);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn typeface(&self) -> Option<&TypefaceHandle> {
        self.typeface.as_ref()
    }

    pub fn fallbacks(&self) -> &[String] {
        &self.fallbacks
    }

    pub fn fallback_enabled(&self) -> bool {
        self.fallback_enabled
    }

    pub fn height(&self) -> Option<f32> {
        self.height
    }

    pub fn point_height(&self) -> Option<f32> {
        self.point_height
    }

    pub fn kerning_factor(&self) -> f32 {
        self.tracking
    }

    pub fn horizontal_scale(&self) -> f32 {
        self.horizontal_scale
    }

    pub fn underline(&self) -> bool {
        self.underlined
    }

    pub fn metrics_kind(&self) -> MetricsKind {
        self.metrics_kind
    }

    pub fn ascent_override(&self) -> Option<f32> {
        self.ascent_override
    }

    pub fn descent_override(&self) -> Option<f32> {
        self.descent_override
    }

    pub fn variations(&self) -> &[AxisSetting] {
        &self.variations
    }

    pub fn variation(&self, tag: AxisTag) -> Option<f32> {
        self.variations
            .iter()
            .find(|s| s.tag == tag)
            .map(|s| s.value)
    }

    /// Metrics of the attached typeface for this metrics kind, with any
    /// ascent/descent overrides applied. `None` without a typeface.
    pub fn resolve_metrics(&self) -> Option<TypefaceMetrics> {
        let face = self.typeface.as_ref()?;
        let base = face.metrics(self.metrics_kind);
        Some(TypefaceMetrics {
            ascent: self.ascent_override.unwrap_or(base.ascent),
            descent: self.descent_override.unwrap_or(base.descent),
        })
    }

    #[allow(clippy::type_complexity)]
    fn key(
        &self,
    ) -> (
        (&str, &str, Option<usize>, &[String], MetricsKind),
        (Option<Total>, Option<Total>, Total, Total),
        (Option<Total>, Option<Total>, bool, bool, &[AxisSetting]),
    ) {
        (
            (
                self.name.as_str(),
                self.style.as_str(),
                self.typeface.as_ref().map(handle_addr),
                self.fallbacks.as_slice(),
                self.metrics_kind,
            ),
            (
                total(self.height),
                total(self.point_height),
                Total(self.tracking),
                Total(self.horizontal_scale),
            ),
            (
                total(self.ascent_override),
                total(self.descent_override),
                self.fallback_enabled,
                self.underlined,
                self.variations.as_slice(),
            ),
        )
    }
}

impl PartialEq for FontOptions {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for FontOptions {}

impl PartialOrd for FontOptions {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FontOptions {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Hash for FontOptions {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// Check the one-height invariant for values built outside the fluent API.
pub(crate) fn validate_heights(height: Option<f32>, point_height: Option<f32>) -> Result<()> {
    if height.is_some() && point_height.is_some() {
        return Err(anyhow!(
            "height and point_height are mutually exclusive (got {height:?} and {point_height:?})"
        ));
    }
    Ok(())
}
