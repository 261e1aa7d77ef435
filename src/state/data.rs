/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the encoder, the history store and the UI layer.

use base64::Engine;
use chrono::{DateTime, Local};
use iced::widget::image::Handle;

use crate::validate::{looks_like_url, ValidatedInput};

/// A rendered QR code
///
/// Holds the encoded PNG plus a preview handle built once at encode
/// time, so the UI never re-decodes the bytes on redraw.
#[derive(Debug, Clone)]
pub struct ImageArtifact {
    png: Vec<u8>,
    side: u32,
    handle: Handle,
}

impl ImageArtifact {
    pub fn from_png(png: Vec<u8>, side: u32) -> Self {
        let handle = Handle::from_bytes(png.clone());
        Self { png, side, handle }
    }

    /// Raw PNG bytes
    pub fn png(&self) -> &[u8] {
        &self.png
    }

    /// Width and height of the square image in pixels
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Handle for the iced image widget
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    /// Embeddable `data:image/png;base64,...` form
    pub fn data_url(&self) -> String {
        format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&self.png)
        )
    }
}

// Handles get a fresh id per construction, so compare the pixels instead
impl PartialEq for ImageArtifact {
    fn eq(&self, other: &Self) -> bool {
        self.side == other.side && self.png == other.png
    }
}

/// What kind of content a record encodes (picks the card label)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Link,
    Text,
}

impl ContentKind {
    pub fn of(text: &str) -> Self {
        if looks_like_url(text) {
            ContentKind::Link
        } else {
            ContentKind::Text
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContentKind::Link => "Link",
            ContentKind::Text => "Text",
        }
    }
}

/// One successful generation, kept in the session history
///
/// Immutable once created. Can only be built from validated input,
/// so `source_text` is never blank.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRecord {
    source_text: String,
    image: ImageArtifact,
    created_at: DateTime<Local>,
}

impl GenerationRecord {
    pub fn new(input: ValidatedInput, image: ImageArtifact) -> Self {
        Self {
            source_text: input.into_inner(),
            image,
            created_at: Local::now(),
        }
    }

    /// Exactly what the user submitted
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn image(&self) -> &ImageArtifact {
        &self.image
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn kind(&self) -> ContentKind {
        ContentKind::of(&self.source_text)
    }

    /// Suggested filename for saving: `qrcode-<first 10 chars>.png`
    ///
    /// Characters are passed through as-is. Two records with the same
    /// leading text get the same name.
    pub fn download_file_name(&self) -> String {
        let prefix: String = self.source_text.chars().take(10).collect();
        format!("qrcode-{}.png", prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;

    fn record(text: &str) -> GenerationRecord {
        let artifact = ImageArtifact::from_png(vec![1, 2, 3], 3);
        GenerationRecord::new(validate(text).unwrap(), artifact)
    }

    #[test]
    fn test_download_name_takes_ten_chars() {
        assert_eq!(
            record("https://example.com").download_file_name(),
            "qrcode-https://ex.png"
        );
        assert_eq!(record("short").download_file_name(), "qrcode-short.png");
    }

    #[test]
    fn test_download_name_counts_chars_not_bytes() {
        assert_eq!(
            record("ñandú ñandú ñandú").download_file_name(),
            "qrcode-ñandú ñand.png"
        );
    }

    #[test]
    fn test_identical_text_gives_identical_names() {
        assert_eq!(
            record("same prefix A").download_file_name(),
            record("same prefix B").download_file_name()
        );
    }

    #[test]
    fn test_content_kind() {
        assert_eq!(record("https://example.com").kind(), ContentKind::Link);
        assert_eq!(record("http://a.b").kind(), ContentKind::Link);
        assert_eq!(record("hello").kind(), ContentKind::Text);
        assert_eq!(record("www.example.com").kind(), ContentKind::Text);
    }

    #[test]
    fn test_data_url() {
        let artifact = ImageArtifact::from_png(vec![0x89, b'P', b'N', b'G'], 1);
        assert_eq!(artifact.data_url(), "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn test_source_text_preserved() {
        assert_eq!(record("  spaced  ").source_text(), "  spaced  ");
    }
}
