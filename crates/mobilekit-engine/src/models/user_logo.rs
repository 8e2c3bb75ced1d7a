use crate::{
    text::{crc32, initials},
    theme::{Color, Theme},
};

/// What an avatar badge shows: a few initials in a per-name colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLogo {
    pub initials: String,
    pub color: Color,
}

impl UserLogo {
    /// Builds the logo for `name`, or the theme's fallback when there is no
    /// name.
    pub fn for_name(name: Option<&str>, theme: &Theme, limit: usize) -> Self {
        match name {
            Some(name) => Self {
                initials: initials(name, limit),
                color: name_color(name, theme),
            },
            None => Self {
                initials: String::new(),
                color: theme.logo_fallback,
            },
        }
    }

    /// Same as [`UserLogo::for_name`] but with a fixed colour.
    pub fn with_color(name: Option<&str>, color: Color, limit: usize) -> Self {
        Self {
            initials: name.map(|n| initials(n, limit)).unwrap_or_default(),
            color,
        }
    }
}

/// Picks a palette colour for `name`. Stable across runs and platforms.
pub fn name_color(name: &str, theme: &Theme) -> Color {
    let palette = &theme.name_palette;
    if palette.is_empty() {
        return theme.logo_fallback;
    }
    palette[crc32(name) as usize % palette.len()]
}
