/// IEEE CRC-32 of the UTF-8 bytes of `s`.
pub fn crc32(s: &str) -> u32 {
    crc32fast::hash(s.as_bytes())
}

/// [`crc32`] as eight lowercase hex digits.
pub fn crc32_hex(s: &str) -> String {
    format!("{:08x}", crc32(s))
}
