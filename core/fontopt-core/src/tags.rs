/// Axis tags: the four-letter names variable fonts give their dials
///
/// A variable font calls its weight dial `wght` and its width dial `wdth`,
/// and expects everyone else to do the same. This module turns friendly
/// strings into those packed 4-byte tags and back again, so option sets can
/// say which dial they want turned without anyone counting bytes.
///
/// Made with curiosity at FontLab https://www.fontlab.com/
use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use read_fonts::types::Tag;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Packs 1-4 printable ASCII characters into a font tag.
///
/// Short input is right-padded with spaces, the way OpenType spells `cvt `
/// or `wdt `. Anything empty, longer than four bytes, or outside the
/// printable ASCII range is turned away.
pub fn tag4(raw: &str) -> Result<Tag> {
    if raw.is_empty() || raw.len() > 4 {
        return Err(anyhow!("tag must be 1-4 printable ASCII chars: {raw:?}"));
    }

    let mut buf = [b' '; 4];
    for (i, byte) in raw.as_bytes().iter().enumerate() {
        if !(0x20..=0x7E).contains(byte) {
            return Err(anyhow!("tag byte out of range: {raw:?}"));
        }
        buf[i] = *byte;
    }

    Ok(Tag::new(&buf))
}

/// Renders a tag as its four characters, padding included.
pub fn tag_to_string(tag: Tag) -> String {
    String::from_utf8_lossy(&tag.to_be_bytes()).to_string()
}

/// Identifier of a variable-font axis, such as `wght` or `opsz`.
///
/// Equality, ordering and hashing all follow the packed big-endian `u32`,
/// so tags sort the same way whether they came from a string or a number.
#[derive(Clone, Copy)]
pub struct AxisTag(Tag);

impl AxisTag {
    /// Builds a tag from its four bytes.
    pub const fn new(bytes: &[u8; 4]) -> Self {
        Self(Tag::new(bytes))
    }

    /// Builds a tag from a raw big-endian bit pattern.
    pub fn from_u32(raw: u32) -> Self {
        Self(Tag::from_u32(raw))
    }

    /// Parses a 1-4 character tag; see [`tag4`] for the padding rule.
    pub fn parse(raw: &str) -> Result<Self> {
        tag4(raw).map(Self)
    }

    pub fn to_u32(self) -> u32 {
        u32::from_be_bytes(self.0.to_be_bytes())
    }

    pub fn to_be_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// The underlying font-types tag, for handing to shaping or parsing code.
    pub fn as_tag(self) -> Tag {
        self.0
    }

    /// Whether all four bytes are printable ASCII, i.e. [`parse`](Self::parse)
    /// can rebuild the tag from its characters.
    pub fn is_printable(self) -> bool {
        self.to_be_bytes().iter().all(|b| (0x20..=0x7E).contains(b))
    }

    /// Text form that [`from_text`](Self::from_text) reads back for every
    /// `u32`: the four characters when printable, else `0x` plus 8 hex digits.
    pub fn to_text(self) -> String {
        if self.is_printable() {
            tag_to_string(self.0)
        } else {
            format!("0x{:08X}", self.to_u32())
        }
    }

    /// Inverse of [`to_text`](Self::to_text). Also accepts the short, unpadded
    /// forms [`parse`](Self::parse) takes.
    pub fn from_text(raw: &str) -> Result<Self> {
        let hex = raw
            .strip_prefix("0x")
            .filter(|h| h.len() == 8 && h.bytes().all(|b| b.is_ascii_hexdigit()));
        if let Some(hex) = hex {
            let value = u32::from_str_radix(hex, 16)
                .map_err(|_| anyhow!("invalid hex tag: {raw:?}"))?;
            return Ok(Self::from_u32(value));
        }
        Self::parse(raw)
    }
}

impl Default for AxisTag {
    fn default() -> Self {
        Self::from_u32(0)
    }
}

impl From<Tag> for AxisTag {
    fn from(tag: Tag) -> Self {
        Self(tag)
    }
}

impl From<AxisTag> for Tag {
    fn from(tag: AxisTag) -> Self {
        tag.0
    }
}

impl From<u32> for AxisTag {
    fn from(raw: u32) -> Self {
        Self::from_u32(raw)
    }
}

impl TryFrom<&str> for AxisTag {
    type Error = anyhow::Error;

    fn try_from(raw: &str) -> Result<Self> {
        Self::parse(raw)
    }
}

impl FromStr for AxisTag {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        Self::parse(raw)
    }
}

impl PartialEq for AxisTag {
    fn eq(&self, other: &Self) -> bool {
        self.to_u32() == other.to_u32()
    }
}

impl Eq for AxisTag {}

impl PartialOrd for AxisTag {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AxisTag {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_u32().cmp(&other.to_u32())
    }
}

impl std::hash::Hash for AxisTag {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.to_u32().hash(state);
    }
}

impl fmt::Display for AxisTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&tag_to_string(self.0))
    }
}

impl fmt::Debug for AxisTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AxisTag({:?})", tag_to_string(self.0))
    }
}

impl Serialize for AxisTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_text())
    }
}

impl<'de> Deserialize<'de> for AxisTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        AxisTag::from_text(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_short_tags_with_spaces() {
        let tag = AxisTag::parse("wdt").unwrap();
        assert_eq!(tag.to_string(), "wdt ");
        assert_eq!(tag.to_be_bytes(), *b"wdt ");
    }

    #[test]
    fn rejects_empty_long_and_non_ascii() {
        assert!(AxisTag::parse("").is_err());
        assert!(AxisTag::parse("abcde").is_err());
        assert!(AxisTag::parse("w\u{e9}").is_err());
        assert!(AxisTag::parse("a\tb").is_err());
    }

    #[test]
    fn integer_and_string_forms_agree() {
        let from_str = AxisTag::parse("wght").unwrap();
        let from_int = AxisTag::from_u32(0x7767_6874);
        assert_eq!(from_str, from_int);
        assert_eq!(from_int.to_u32(), 0x7767_6874);
        assert_eq!(from_int.to_string(), "wght");
    }

    #[test]
    fn orders_by_raw_value() {
        let mut tags = vec![
            AxisTag::parse("wght").unwrap(),
            AxisTag::parse("GRAD").unwrap(),
            AxisTag::parse("opsz").unwrap(),
        ];
        tags.sort();
        let rendered: Vec<String> = tags.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["GRAD", "opsz", "wght"]);
        assert!(AxisTag::from_u32(1) < AxisTag::from_u32(2));
    }

    #[test]
    fn serializes_as_string() {
        let tag = AxisTag::parse("slnt").unwrap();
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, "\"slnt\"");
        let back: AxisTag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tag);
        assert!(serde_json::from_str::<AxisTag>("\"toolong\"").is_err());
    }

    #[test]
    fn non_printable_tags_use_hex_text() {
        for tag in [AxisTag::default(), AxisTag::from_u32(1), AxisTag::from_u32(u32::MAX)] {
            assert!(!tag.is_printable());
            let json = serde_json::to_string(&tag).unwrap();
            assert!(json.starts_with("\"0x"), "json: {json}");
            let back: AxisTag = serde_json::from_str(&json).unwrap();
            assert_eq!(back, tag);
        }
        assert_eq!(AxisTag::from_u32(1).to_text(), "0x00000001");
        assert!(AxisTag::from_text("0x0000000G").is_err());
    }

    #[test]
    fn short_hex_looking_text_is_a_plain_tag() {
        let tag = AxisTag::from_text("0x01").unwrap();
        assert_eq!(tag.to_be_bytes(), *b"0x01");
        assert_eq!(tag.to_text(), "0x01");
        assert_eq!(AxisTag::from_text(&tag.to_text()).unwrap(), tag);
    }
}
