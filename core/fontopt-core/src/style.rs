//! Style bit-flags (made by FontLab https://www.fontlab.com/)

use std::ops::{BitOr, BitOrAssign};

use anyhow::{anyhow, Result};

/// Combination of plain/bold/italic/underlined, as passed to the
/// flag-taking [`FontOptions`](crate::options::FontOptions) constructors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FontStyleFlags(u8);

impl FontStyleFlags {
    pub const PLAIN: Self = Self(0);
    pub const BOLD: Self = Self(1);
    pub const ITALIC: Self = Self(2);
    pub const UNDERLINED: Self = Self(4);

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Keeps only the known bits.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & 0b111)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Typeface style name implied by the bold and italic bits.
    pub fn style_name(self) -> &'static str {
        match (self.contains(Self::BOLD), self.contains(Self::ITALIC)) {
            (true, true) => "Bold Italic",
            (true, false) => "Bold",
            (false, true) => "Italic",
            (false, false) => "Regular",
        }
    }

    /// Parse a single flag name (`plain`, `bold`, `italic`, `underlined`).
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "plain" | "regular" => Ok(Self::PLAIN),
            "bold" => Ok(Self::BOLD),
            "italic" => Ok(Self::ITALIC),
            "underline" | "underlined" => Ok(Self::UNDERLINED),
            other => Err(anyhow!("unknown style flag: {other}")),
        }
    }
}

impl BitOr for FontStyleFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for FontStyleFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Parse and combine a list of flag names.
pub fn parse_style_flags(raw: &[String]) -> Result<FontStyleFlags> {
    let mut flags = FontStyleFlags::PLAIN;
    for name in raw {
        flags |= FontStyleFlags::parse(name)?;
    }
    Ok(flags)
}
