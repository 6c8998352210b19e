//! Product Image Studio Core Library
//!
//! Marketing cards for a product, rendered from a handful of copy fields and
//! a colour palette, exported as PNG.
//!
//! ## Overview
//!
//! - [`palette`]: the compiled-in colour moods and lookup-by-id
//! - [`color`]: hex parsing and translucent accent derivation
//! - [`form`]: the editable copy record ([`FormState`])
//! - [`card`]: the pure renderer producing a [`Card`] tree and its SVG
//! - [`export`]: surface registry, rasterization and download sinks
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use studio_core::{
//!     render_card, DirectorySink, Exporter, FormState, LayoutVariant, ResvgRasterizer, SurfaceRegistry,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut form = FormState::default();
//!     form.set_product_name("Orbit Desk Lamp");
//!     form.set_palette("nebula");
//!
//!     let mut surfaces = SurfaceRegistry::new();
//!     surfaces.mount(&render_card(&form, form.palette(), LayoutVariant::Spotlight));
//!
//!     let exporter = Exporter::new(
//!         Arc::new(ResvgRasterizer::new()),
//!         Arc::new(DirectorySink::new("./out")),
//!     );
//!     if let Some(done) = exporter
//!         .export_layout(&surfaces, LayoutVariant::Spotlight, &form.product_name)
//!         .await?
//!     {
//!         println!("wrote {}", done.path.display());
//!     }
//!     Ok(())
//! }
//! ```

pub mod card;
pub mod color;
pub mod error;
pub mod export;
pub mod form;
pub mod layout;
pub mod palette;

// Re-exports
pub use card::{render_card, Card, Node, TextBlock, CARD_HEIGHT, CARD_WIDTH, COMPACT_FOOTER_FALLBACK};
pub use color::{alpha_color, Rgba};
pub use error::{StudioError, StudioResult};
pub use export::{
    default_download_dir, export_filename, slugify, DirectorySink, DownloadSink, ExportOutcome, Exporter, RasterImage, RasterOptions,
    Rasterizer, ResvgRasterizer, SurfaceHandle, SurfaceRegistry,
};
pub use form::{visible_features, FormState, FEATURE_INPUTS, MAX_VISIBLE_FEATURES};
pub use layout::LayoutVariant;
pub use palette::{find_palette, palette_ids, Palette, DEFAULT_PALETTE_ID, PALETTES};
