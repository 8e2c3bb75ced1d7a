//! # Text Utilities
//!
//! Small string helpers used by the avatar and badge widgets.
//!
//! - **`initials`**: first letter of each word, capped at a limit
//! - **`checksum`**: CRC-32 of a string, as a number or hex digits

pub mod checksum;
pub mod initials;

pub use checksum::{crc32, crc32_hex};
pub use initials::{DEFAULT_INITIALS_LIMIT, initials};
