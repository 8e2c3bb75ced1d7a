pub mod models;
pub mod parsing;
pub mod text;
pub mod theme;

// Re-export key types for easier usage
pub use models::{UserLogo, name_color};
pub use parsing::{LinkToken, ParsedText, Span, parse_links};
pub use text::{DEFAULT_INITIALS_LIMIT, crc32, crc32_hex, initials};
pub use theme::{Color, ColorParseError, NAME_PALETTE, Theme, ThemePreset};
