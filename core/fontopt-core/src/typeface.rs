//! Typeface boundary (made by FontLab https://www.fontlab.com/)
//!
//! Typefaces are loaded, cached and rasterised elsewhere. Option sets only
//! hold a shared handle and read a name, a style and vertical metrics from it.

use std::fmt::Debug;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Which set of vertical metrics a typeface should report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricsKind {
    /// Platform-specific metrics, matching older layout behaviour.
    Legacy,
    /// Metrics that lay out identically on every platform.
    #[default]
    Portable,
}

/// Ascent and descent as proportions of the font height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypefaceMetrics {
    pub ascent: f32,
    pub descent: f32,
}

impl TypefaceMetrics {
    pub fn height(&self) -> f32 {
        self.ascent + self.descent
    }
}

/// A loaded typeface, as seen by an option set.
pub trait Typeface: Debug + Send + Sync {
    /// Family name, e.g. `Inter`.
    fn name(&self) -> &str;

    /// Style name within the family, e.g. `Bold Italic`.
    fn style(&self) -> &str;

    fn metrics(&self, kind: MetricsKind) -> TypefaceMetrics;
}

/// Shared, externally owned typeface.
pub type TypefaceHandle = Arc<dyn Typeface>;

/// Typeface described entirely in memory.
///
/// Useful for hosts that resolve fonts themselves and only need to carry a
/// name, style and metrics through option sets.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticTypeface {
    name: String,
    style: String,
    portable: TypefaceMetrics,
    legacy: TypefaceMetrics,
}

impl StaticTypeface {
    pub fn new(name: impl Into<String>, style: impl Into<String>, metrics: TypefaceMetrics) -> Self {
        Self {
            name: name.into(),
            style: style.into(),
            portable: metrics,
            legacy: metrics,
        }
    }

    pub fn with_legacy_metrics(mut self, metrics: TypefaceMetrics) -> Self {
        self.legacy = metrics;
        self
    }

    pub fn into_handle(self) -> TypefaceHandle {
        Arc::new(self)
    }
}

impl Typeface for StaticTypeface {
    fn name(&self) -> &str {
        &self.name
    }

    fn style(&self) -> &str {
        &self.style
    }

    fn metrics(&self, kind: MetricsKind) -> TypefaceMetrics {
        match kind {
            MetricsKind::Portable => self.portable,
            MetricsKind::Legacy => self.legacy,
        }
    }
}

/// Identity of a handle, used to order and hash option sets.
pub(crate) fn handle_addr(handle: &TypefaceHandle) -> usize {
    Arc::as_ptr(handle) as *const () as usize
}
