//! Native save dialog as a download destination.

use std::path::PathBuf;

use rfd::FileDialog;
use studio_core::{DownloadSink, StudioError, StudioResult};
use tracing::info;

/// Asks where to save every export, starting in `start_dir` with the
/// computed filename filled in.
///
/// Runs on the exporter's blocking task, so the dialog never stalls the UI.
pub struct DialogSink {
    start_dir: PathBuf,
}

impl DialogSink {
    pub fn new(start_dir: PathBuf) -> Self {
        Self { start_dir }
    }
}

impl DownloadSink for DialogSink {
    fn save(&self, filename: &str, png: &[u8]) -> StudioResult<PathBuf> {
        let path = FileDialog::new()
            .set_title("Export PNG")
            .set_directory(&self.start_dir)
            .set_file_name(filename)
            .add_filter("PNG image", &["png"])
            .save_file()
            .ok_or(StudioError::ExportCancelled)?;

        std::fs::write(&path, png)?;
        info!(path = %path.display(), bytes = png.len(), "PNG saved");
        Ok(path)
    }
}
