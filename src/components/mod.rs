//! Studio page sections

mod editor;
mod preview;

pub use editor::EditorPanel;
pub use preview::PreviewGallery;
