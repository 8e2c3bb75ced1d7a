//! # Theme
//!
//! Colours shared by the widgets. A [`Theme`] is a plain value: build one
//! from a [`ThemePreset`] (or deserialize it) and hand it to whatever needs
//! it. Nothing here is global.

pub mod color;

pub use color::{Color, ColorParseError};

use serde::{Deserialize, Serialize};

/// Avatar colours, picked per name by checksum.
pub const NAME_PALETTE: [Color; 5] = [
    Color::from_hex(0x42AD48),
    Color::from_hex(0xA71B19),
    Color::from_hex(0x026DCE),
    Color::from_hex(0x813296),
    Color::from_hex(0xF26C21),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    #[default]
    Default,
    Green,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub primary_text: Color,
    pub secondary_text: Color,
    pub link: Color,

    pub paging_selector_control: Color,
    pub paging_selection_indicator: Color,

    pub navigation_bar: Color,
    pub navigation_tint: Color,
    pub navigation_text: Color,

    /// Avatar outline when there is no name to pick a colour from.
    pub logo_fallback: Color,
    /// Avatar colours, indexed by name checksum. Empty falls back to
    /// `logo_fallback`.
    pub name_palette: Vec<Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_text: Color::BLACK,
            secondary_text: Color::GRAY,
            link: Color::from_hex(0x007AFF),
            paging_selector_control: Color::LIGHT_GRAY,
            paging_selection_indicator: Color::WHITE,
            navigation_bar: Color::BLUE,
            navigation_tint: Color::WHITE,
            navigation_text: Color::WHITE,
            logo_fallback: Color::BLUE,
            name_palette: NAME_PALETTE.to_vec(),
        }
    }
}

impl From<ThemePreset> for Theme {
    fn from(preset: ThemePreset) -> Self {
        let base = Theme::default();
        match preset {
            ThemePreset::Default => base,
            ThemePreset::Green => Theme {
                navigation_bar: Color::from_hex(0x42AD48),
                paging_selector_control: Color::from_hex(0x6ABD5E),
                ..base
            },
            ThemePreset::Custom => Theme {
                navigation_bar: Color::from_hex(0x42AD48),
                paging_selector_control: Color::WHITE,
                paging_selection_indicator: Color::from_hex(0x026DCE),
                primary_text: Color::from_hex(0x595959),
                secondary_text: Color::from_hex(0x595959),
                ..base
            },
        }
    }
}
