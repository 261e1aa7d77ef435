/// Saving generated codes to disk
///
/// Opens the native save dialog with the suggested filename and writes
/// the PNG if the user picks a location. Fire-and-forget from the
/// controller's point of view; the outcome is only logged.

use rfd::AsyncFileDialog;
use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::state::controller::SaveRequest;

/// Ask the user where to save, then write the file
///
/// Returns `Ok(None)` if the dialog was cancelled.
pub async fn save_with_dialog(request: SaveRequest) -> Result<Option<PathBuf>, ExportError> {
    let picked = AsyncFileDialog::new()
        .set_title("Save QR Code")
        .set_file_name(request.file_name.as_str())
        .add_filter("PNG image", &["png"])
        .save_file()
        .await;

    let Some(handle) = picked else {
        return Ok(None);
    };

    let path = handle.path().to_path_buf();
    write_png(&path, &request.png).await?;
    Ok(Some(path))
}

/// Write PNG bytes to `path`, replacing any existing file
pub async fn write_png(path: &Path, png: &[u8]) -> Result<(), ExportError> {
    tokio::fs::write(path, png)
        .await
        .map_err(|source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        })
}
