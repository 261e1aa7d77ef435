use image::{DynamicImage, ImageFormat, Rgb as Pixel, RgbImage};
use qrcode::{EcLevel, QrCode};
use std::io::Cursor;

use crate::error::EncodeError;
use crate::state::data::ImageArtifact;
use crate::state::style::EncodeStyle;

/// Pixels per module when the requested width is too small for the symbol
const FALLBACK_SCALE: u32 = 4;

/// Error correction is fixed; it is not user-configurable
const ERROR_CORRECTION: EcLevel = EcLevel::M;

/// Anything that can turn text into a QR image
pub trait Encoder {
    fn encode(&self, text: &str, style: &EncodeStyle) -> Result<ImageArtifact, EncodeError>;
}

/// Encoder backed by the `qrcode` crate, producing PNG output
#[derive(Debug, Clone, Copy, Default)]
pub struct QrEncoder;

impl Encoder for QrEncoder {
    fn encode(&self, text: &str, style: &EncodeStyle) -> Result<ImageArtifact, EncodeError> {
        let code = QrCode::with_error_correction_level(text.as_bytes(), ERROR_CORRECTION)
            .map_err(|e| EncodeError::from_message(e.to_string()))?;

        let img = rasterize(&code, style);
        let side = img.width();

        let mut png = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| EncodeError::from_message(format!("PNG encode error: {e}")))?;

        Ok(ImageArtifact::from_png(png, side))
    }
}

/// Draw the symbol plus its quiet zone into a square RGB image
///
/// The image side is `style.pixel_width` when that is at least one pixel
/// per module, otherwise 4 px per module. Each pixel takes the color of
/// the module it falls in.
fn rasterize(code: &QrCode, style: &EncodeStyle) -> RgbImage {
    let modules = code.width() as u32;
    let margin = style.margin_modules;
    let total = modules + 2 * margin;

    let side = if style.pixel_width >= total {
        style.pixel_width
    } else {
        total * FALLBACK_SCALE
    };

    let colors = code.to_colors();
    let foreground = Pixel(style.foreground.0);
    let mut img = RgbImage::from_pixel(side, side, Pixel(style.background.0));

    // Map a pixel coordinate to its module coordinate inside the symbol
    let module_at = |p: u32| -> Option<u32> {
        let cell = (p as u64 * total as u64 / side as u64) as u32;
        cell.checked_sub(margin).filter(|&m| m < modules)
    };

    for y in 0..side {
        let Some(my) = module_at(y) else { continue };
        for x in 0..side {
            let Some(mx) = module_at(x) else { continue };
            if colors[(my * modules + mx) as usize] == qrcode::Color::Dark {
                img.put_pixel(x, y, foreground);
            }
        }
    }

    img
}
