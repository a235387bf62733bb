//! Hex helpers.
//!
//! Frames are logged with `bytes_to_hex_spaced`; `parse_hex` accepts the
//! same notation back, which is convenient for fixtures and demos.

use std::fmt::Write;

use crate::{Error, Result};

/// Lowercase hex without separators: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        // writing to a String cannot fail
        let _ = write!(s, "{:02x}", b);
        s
    })
}

/// Uppercase hex with one space between bytes: `&[0xde, 0xad]` -> `"DE AD"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a hex string, ignoring ASCII whitespace.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let digits: Vec<u8> = s.bytes().filter(|c| !c.is_ascii_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err(Error::InvalidHex("odd number of digits".into()));
    }

    digits
        .chunks(2)
        .map(|pair| {
            let pair = std::str::from_utf8(pair)
                .map_err(|_| Error::InvalidHex("non-ascii input".into()))?;
            u8::from_str_radix(pair, 16)
                .map_err(|e| Error::InvalidHex(format!("'{}': {}", pair, e)))
        })
        .collect()
}
