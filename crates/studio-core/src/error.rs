//! Error types for Product Image Studio

use thiserror::Error;

/// Main error type for studio operations
#[derive(Error, Debug)]
pub enum StudioError {
    /// Colour string was not a 6-digit hex value
    #[error("Invalid hex colour: {0}")]
    InvalidHex(String),

    /// Layout identifier did not name one of the card layouts
    #[error("Unknown layout: {0}")]
    UnknownLayout(String),

    /// Card SVG could not be parsed by the rasterizer
    #[error("SVG error: {0}")]
    Svg(String),

    /// Rasterization failed (pixmap allocation, bad dimensions)
    #[error("Raster error: {0}")]
    Raster(String),

    /// PNG encoding failed
    #[error("Encode error: {0}")]
    Encode(#[from] image::ImageError),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// User dismissed the save dialog
    #[error("Export cancelled")]
    ExportCancelled,

    /// Background task panicked or was cancelled
    #[error("Task error: {0}")]
    Task(String),

    /// Product brief could not be decoded
    #[error("Brief error: {0}")]
    Brief(#[from] serde_json::Error),
}

/// Result type alias using StudioError
pub type StudioResult<T> = Result<T, StudioError>;
