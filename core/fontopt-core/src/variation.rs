//! Variable-font axis settings (made by FontLab https://www.fontlab.com/)

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::ord::Total;
use crate::tags::AxisTag;

/// One axis assignment, e.g. `wght=700`.
///
/// Compared as the `(tag, value)` pair; values use total float ordering so
/// settings can be sorted and used as map keys.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AxisSetting {
    pub tag: AxisTag,
    pub value: f32,
}

impl AxisSetting {
    pub fn new(tag: AxisTag, value: f32) -> Self {
        Self { tag, value }
    }

    fn key(&self) -> (AxisTag, Total) {
        (self.tag, Total(self.value))
    }
}

impl PartialEq for AxisSetting {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for AxisSetting {}

impl PartialOrd for AxisSetting {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AxisSetting {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Hash for AxisSetting {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for AxisSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.tag.to_text();
        let trimmed = text.trim_end();
        let tag = if trimmed.is_empty() { text.as_str() } else { trimmed };
        write!(f, "{tag}={}", self.value)
    }
}

impl FromStr for AxisSetting {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        parse_axis_setting(raw)
    }
}

/// Parse `tag=value` (e.g. `wght=700`, `opsz=12.5`, `0x00000001=3`).
///
/// Surrounding whitespace is ignored unless the tag is nothing but spaces,
/// which names the all-space tag.
pub fn parse_axis_setting(raw: &str) -> Result<AxisSetting> {
    let (tag, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("axis setting must look like tag=value: {raw}"))?;
    let trimmed = tag.trim();
    let tag = if trimmed.is_empty() && !tag.is_empty() {
        AxisTag::parse(" ")?
    } else {
        AxisTag::from_text(trimmed)?
    };
    let value: f32 = value
        .trim()
        .parse()
        .with_context(|| format!("invalid axis value in {raw}"))?;
    Ok(AxisSetting::new(tag, value))
}

/// Parse a list of `tag=value` strings, keeping their order.
pub fn parse_axis_settings(raw: &[String]) -> Result<Vec<AxisSetting>> {
    raw.iter().map(|s| parse_axis_setting(s)).collect()
}

/// Set `tag` to `value`: update in place when present, else append.
pub fn upsert(settings: &mut Vec<AxisSetting>, tag: AxisTag, value: f32) {
    match settings.iter_mut().find(|s| s.tag == tag) {
        Some(existing) => existing.value = value,
        None => settings.push(AxisSetting::new(tag, value)),
    }
}

/// Collapse repeated tags: each tag keeps its first position and last value.
pub fn dedup_settings(settings: Vec<AxisSetting>) -> Vec<AxisSetting> {
    let mut out = Vec::with_capacity(settings.len());
    for setting in settings {
        upsert(&mut out, setting.tag, setting.value);
    }
    out
}
