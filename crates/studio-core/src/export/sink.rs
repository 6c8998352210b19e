//! Download destinations for exported PNGs.

use std::path::PathBuf;

use tracing::info;

use crate::error::StudioResult;

/// Where finished PNGs go.
///
/// `save` may block (disk, native dialogs); the exporter calls it from a
/// blocking task after rasterization has finished.
pub trait DownloadSink: Send + Sync {
    fn save(&self, filename: &str, png: &[u8]) -> StudioResult<PathBuf>;
}

/// Writes files into a fixed directory, creating it on first use.
///
/// An existing file with the same name is overwritten.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DownloadSink for DirectorySink {
    fn save(&self, filename: &str, png: &[u8]) -> StudioResult<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(filename);
        std::fs::write(&path, png)?;
        info!(path = %path.display(), bytes = png.len(), "PNG saved");
        Ok(path)
    }
}

/// `~/Downloads` (or platform equivalent), falling back to `.`
pub fn default_download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}
