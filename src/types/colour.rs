//! Hex colour type and parsing.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{Result, SchemeError};

/// A 6-digit RGB hex colour as written in a palette.
///
/// The source text is kept verbatim (case included) so that `K-hex` values in
/// rendered templates match the palette exactly. Channel values are parsed
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor {
    text: String,
    rgb: [u8; 3],
}

impl HexColor {
    /// Parse a colour value belonging to `key`.
    ///
    /// Accepts exactly six hex digits with no `#` prefix. Surrounding
    /// whitespace is not trimmed.
    pub fn parse(key: &str, value: &str) -> Result<Self> {
        let invalid = || SchemeError::InvalidColorFormat {
            key: key.to_string(),
            value: format!("{:?}", value),
            help: Some("Colours are exactly 6 hex digits without a leading #, e.g. 1e1e2e".to_string()),
        };

        if value.len() != 6 || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let r = parse_hex_byte(&value[0..2]).ok_or_else(invalid)?;
        let g = parse_hex_byte(&value[2..4]).ok_or_else(invalid)?;
        let b = parse_hex_byte(&value[4..6]).ok_or_else(invalid)?;

        Ok(Self {
            text: value.to_string(),
            rgb: [r, g, b],
        })
    }

    /// The colour exactly as written.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Two-digit hex substrings for red, green and blue.
    pub fn hex_channels(&self) -> [&str; 3] {
        [&self.text[0..2], &self.text[2..4], &self.text[4..6]]
    }

    /// Integer channels in `0..=255`.
    pub fn rgb(&self) -> [u8; 3] {
        self.rgb
    }

    /// Fractional channels in `0.0..=1.0` (channel / 255).
    pub fn dec(&self) -> [f64; 3] {
        self.rgb.map(|c| f64::from(c) / 255.0)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Option<u8> {
    u8::from_str_radix(s, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lowercase() {
        let c = HexColor::parse("base00", "1a1a2e").unwrap();
        assert_eq!(c.rgb(), [0x1a, 0x1a, 0x2e]);
        assert_eq!(c.as_str(), "1a1a2e");
    }

    #[test]
    fn test_parse_preserves_case() {
        let c = HexColor::parse("base00", "FF8000").unwrap();
        assert_eq!(c.as_str(), "FF8000");
        assert_eq!(c.hex_channels(), ["FF", "80", "00"]);
        assert_eq!(c.rgb(), [255, 128, 0]);
    }

    #[test]
    fn test_parse_rejects_hash_prefix() {
        let err = HexColor::parse("TERMINAL_COLOR1", "#ff0000").unwrap_err();
        match err {
            SchemeError::InvalidColorFormat { key, value, help } => {
                assert_eq!(key, "TERMINAL_COLOR1");
                assert_eq!(value, "\"#ff0000\"");
                assert!(help.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_invalid() {
        assert!(HexColor::parse("k", "").is_err());
        assert!(HexColor::parse("k", "fff").is_err());
        assert!(HexColor::parse("k", "12345").is_err());
        assert!(HexColor::parse("k", "1234567").is_err());
        assert!(HexColor::parse("k", "gggggg").is_err());
        assert!(HexColor::parse("k", " 12345").is_err());
        // Multi-byte characters must not panic on slicing
        assert!(HexColor::parse("k", "ééé").is_err());
    }

    #[test]
    fn test_dec_extremes() {
        assert_eq!(HexColor::parse("k", "000000").unwrap().dec(), [0.0, 0.0, 0.0]);
        assert_eq!(HexColor::parse("k", "ffffff").unwrap().dec(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_display() {
        let c = HexColor::parse("k", "AbCdEf").unwrap();
        assert_eq!(c.to_string(), "AbCdEf");
    }
}
