use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color '{input}' must have exactly six hex digits")]
    Length { input: String },

    #[error("color '{input}' contains a non-hex character")]
    Digits { input: String },
}

/// An opaque 24-bit RGB colour.
///
/// Written as `#RRGGBB` in config files; `RRGGBB` and `0xRRGGBB` are also
/// accepted when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const WHITE: Color = Color(0xFFFFFF);
    pub const GRAY: Color = Color(0x7F7F7F);
    pub const LIGHT_GRAY: Color = Color(0xAAAAAA);
    pub const BLUE: Color = Color(0x0000FF);

    /// Builds a colour from `0xRRGGBB`. Bits above 24 are dropped.
    pub const fn from_hex(hex: u32) -> Self {
        Color(hex & 0xFF_FFFF)
    }

    pub const fn hex(self) -> u32 {
        self.0
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.chars().count() != 6 {
            return Err(ColorParseError::Length {
                input: s.to_string(),
            });
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::Digits {
                input: s.to_string(),
            });
        }

        u32::from_str_radix(digits, 16)
            .map(Color)
            .map_err(|_| ColorParseError::Digits {
                input: s.to_string(),
            })
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
