//! UniFFI bindings for the mobilekit widget layer
//!
//! Gives the Swift and Kotlin widgets access to link parsing, initials,
//! checksums and avatar colours. Ranges handed across the boundary are in
//! UTF-16 code units so they drop straight into `NSRange` or Java string
//! offsets.

use mobilekit_engine::{
    Color, LinkToken, ParsedText, Theme, ThemePreset, UserLogo, crc32 as engine_crc32,
    initials as engine_initials, parse_links as engine_parse_links,
};

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Invalid color: {reason}")]
    InvalidColor { reason: String },
}

// ============ DTOs ============

/// Display text plus the links found in it.
#[derive(Debug, uniffi::Record)]
pub struct ParsedTextDto {
    /// Text to show, with each link reduced to its label
    pub display_text: String,
    /// Links in the order they appear
    pub links: Vec<LinkDto>,
}

impl ParsedTextDto {
    fn from_engine(parsed: ParsedText) -> Self {
        let links = parsed
            .links
            .iter()
            .map(|link| LinkDto::from_engine(link, &parsed.display_text))
            .collect();
        Self {
            display_text: parsed.display_text,
            links,
        }
    }
}

/// One clickable label.
#[derive(Debug, uniffi::Record)]
pub struct LinkDto {
    pub label: String,
    pub target: String,
    /// UTF-16 offset of the label in `display_text`
    pub location: u64,
    /// UTF-16 length of the label
    pub length: u64,
}

impl LinkDto {
    fn from_engine(link: &LinkToken, display_text: &str) -> Self {
        // Label spans always sit on char boundaries of the display text
        let (location, length) = link.label_span.to_utf16(display_text).unwrap_or_default();
        Self {
            label: link.label.clone(),
            target: link.target.clone(),
            location: location as u64,
            length: length as u64,
        }
    }
}

#[derive(Debug, Clone, Copy, uniffi::Enum)]
pub enum ThemePresetDto {
    Default,
    Green,
    Custom,
}

impl From<ThemePresetDto> for ThemePreset {
    fn from(preset: ThemePresetDto) -> Self {
        match preset {
            ThemePresetDto::Default => ThemePreset::Default,
            ThemePresetDto::Green => ThemePreset::Green,
            ThemePresetDto::Custom => ThemePreset::Custom,
        }
    }
}

/// Initials and `0xRRGGBB` colour for an avatar badge.
#[derive(Debug, uniffi::Record)]
pub struct UserLogoDto {
    pub initials: String,
    pub color: u32,
}

impl From<UserLogo> for UserLogoDto {
    fn from(logo: UserLogo) -> Self {
        Self {
            initials: logo.initials,
            color: logo.color.hex(),
        }
    }
}

// ============ Standalone Functions ============

/// Strip `[label](target)` links down to their labels.
#[uniffi::export]
pub fn parse_links(text: String) -> ParsedTextDto {
    ParsedTextDto::from_engine(engine_parse_links(&text))
}

/// First letter of each word in `name`, at most `limit` of them.
#[uniffi::export]
pub fn initials(name: String, limit: u32) -> String {
    engine_initials(&name, limit as usize)
}

/// IEEE CRC-32 of the UTF-8 bytes of `text`.
#[uniffi::export]
pub fn crc32(text: String) -> u32 {
    engine_crc32(&text)
}

/// Avatar initials and colour for `name` under a built-in theme.
#[uniffi::export]
pub fn user_logo(name: Option<String>, preset: ThemePresetDto, limit: u32) -> UserLogoDto {
    let theme = Theme::from(ThemePreset::from(preset));
    UserLogo::for_name(name.as_deref(), &theme, limit as usize).into()
}

/// Parse `#RRGGBB` (or `RRGGBB`, `0xRRGGBB`) into `0xRRGGBB`.
#[uniffi::export]
pub fn parse_color(hex: String) -> Result<u32, FfiError> {
    hex.parse::<Color>()
        .map(Color::hex)
        .map_err(|e| FfiError::InvalidColor {
            reason: e.to_string(),
        })
}
