/// Rendering style for generated QR codes
///
/// This struct controls how the encoder rasterizes a QR symbol.
/// It can be overridden from the `[style]` table of the config file;
/// any key left out keeps its default.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::ConfigError;

/// Largest accepted image side, to keep PNGs a sane size
pub const MAX_PIXEL_WIDTH: u32 = 4096;

/// Largest accepted quiet zone, in modules
pub const MAX_MARGIN_MODULES: u32 = 16;

/// Style configuration passed to the encoder with every request
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct EncodeStyle {
    /// Target side length of the square image in pixels
    /// - The symbol plus quiet zone is scaled to exactly this size
    /// - If smaller than the module count, 4 px per module is used instead
    pub pixel_width: u32,

    /// Quiet zone width on every side, in modules
    pub margin_modules: u32,

    /// Color of dark modules
    pub foreground: Rgb,

    /// Color of light modules and the quiet zone
    pub background: Rgb,
}

impl Default for EncodeStyle {
    /// 300px, 2-module margin, dark slate on white
    fn default() -> Self {
        Self {
            pixel_width: 300,
            margin_modules: 2,
            foreground: Rgb::SLATE_800,
            background: Rgb::WHITE,
        }
    }
}

impl EncodeStyle {
    /// Check that values loaded from config are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_PIXEL_WIDTH).contains(&self.pixel_width) {
            return Err(ConfigError::InvalidValue(format!(
                "pixel_width must be between 1 and {MAX_PIXEL_WIDTH}"
            )));
        }
        if self.margin_modules > MAX_MARGIN_MODULES {
            return Err(ConfigError::InvalidValue(format!(
                "margin_modules must be at most {MAX_MARGIN_MODULES}"
            )));
        }
        if self.foreground == self.background {
            return Err(ConfigError::InvalidValue(
                "foreground and background must differ".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let style = EncodeStyle::default();
        assert_eq!(style.pixel_width, 300);
        assert_eq!(style.margin_modules, 2);
        assert_eq!(style.foreground.to_hex(), "#1e293b");
        assert_eq!(style.background.to_hex(), "#ffffff");
        assert!(style.validate().is_ok());
    }

    #[test]
    fn test_partial_table_keeps_defaults() {
        let style: EncodeStyle = toml::from_str("pixel_width = 512").unwrap();
        assert_eq!(style.pixel_width, 512);
        assert_eq!(style.margin_modules, 2);
        assert_eq!(style.foreground, Rgb::SLATE_800);
    }

    #[test]
    fn test_colors_deserialize_from_hex() {
        let style: EncodeStyle =
            toml::from_str("foreground = \"#000\"\nbackground = \"#fafafa\"").unwrap();
        assert_eq!(style.foreground, Rgb([0, 0, 0]));
        assert_eq!(style.background, Rgb([0xfa, 0xfa, 0xfa]));
    }

    #[test]
    fn test_bad_color_fails_to_parse() {
        let result: Result<EncodeStyle, _> = toml::from_str("foreground = \"blue\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut style = EncodeStyle::default();
        style.pixel_width = 0;
        assert!(style.validate().is_err());

        let mut style = EncodeStyle::default();
        style.margin_modules = 100;
        assert!(style.validate().is_err());

        let mut style = EncodeStyle::default();
        style.background = style.foreground;
        assert!(style.validate().is_err());
    }
}
