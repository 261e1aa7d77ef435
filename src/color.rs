/// Color utilities
///
/// QR colors are written as CSS-style hex strings (`#1e293b`) in the
/// config file and converted to RGB bytes for rasterization.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// An opaque sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    /// Dark slate used for QR modules by default
    pub const SLATE_800: Rgb = Rgb([0x1e, 0x29, 0x3b]);
    pub const WHITE: Rgb = Rgb([0xff, 0xff, 0xff]);

    /// Parse `#rrggbb` or the short `#rgb` form (leading `#` optional)
    pub fn from_hex(hex: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidColor(hex.to_string());
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
                Ok(Rgb([
                    channel(0).map_err(|_| invalid())?,
                    channel(2).map_err(|_| invalid())?,
                    channel(4).map_err(|_| invalid())?,
                ]))
            }
            3 => {
                // #abc expands to #aabbcc
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).map(|v| v * 17);
                Ok(Rgb([
                    channel(0).map_err(|_| invalid())?,
                    channel(1).map_err(|_| invalid())?,
                    channel(2).map_err(|_| invalid())?,
                ]))
            }
            _ => Err(invalid()),
        }
    }

    /// Lowercase `#rrggbb` form
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.0;
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        assert_eq!(Rgb::from_hex("#1e293b").unwrap(), Rgb::SLATE_800);
        assert_eq!(Rgb::from_hex("FFFFFF").unwrap(), Rgb::WHITE);
    }

    #[test]
    fn test_parse_short_form() {
        assert_eq!(Rgb::from_hex("#fff").unwrap(), Rgb::WHITE);
        assert_eq!(Rgb::from_hex("#0a0").unwrap(), Rgb([0x00, 0xaa, 0x00]));
    }

    #[test]
    fn test_rejects_garbage() {
        for bad in ["", "#", "#12345", "#gggggg", "#1e293b00", "slate"] {
            assert!(Rgb::from_hex(bad).is_err(), "{bad:?} should fail");
        }
    }

    #[test]
    fn test_hex_output() {
        assert_eq!(Rgb::SLATE_800.to_hex(), "#1e293b");
        assert_eq!("#ABCDEF".parse::<Rgb>().unwrap().to_string(), "#abcdef");
    }
}
