//! Export action: surface → PNG → download.
//!
//! ## Flow
//!
//! ```text
//! SurfaceRegistry::get(layout)
//!        │ None ──► no-op (card not mounted yet)
//!        ▼
//! spawn_blocking {
//!     Rasterizer::rasterize   (2x, white background)
//!     DownloadSink::save      ("<slug>-<layout>.png")
//! }
//! ```
//!
//! Exports are independent of each other: two clicks on the same layout run
//! two full jobs.

mod raster;
mod sink;
mod surface;

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, error, info};

use crate::error::{StudioError, StudioResult};
use crate::layout::LayoutVariant;

pub use raster::{RasterImage, RasterOptions, Rasterizer, ResvgRasterizer};
pub use sink::{default_download_dir, DirectorySink, DownloadSink};
pub use surface::{SurfaceHandle, SurfaceRegistry};

/// Used when the product name has no filename-safe characters
pub const FALLBACK_SLUG: &str = "product";

/// Lowercase the name and collapse every run outside `[a-z0-9]` to `-`,
/// trimming hyphens at both ends.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// `<slug>-<layout>.png`, with [`FALLBACK_SLUG`] for an empty slug
pub fn export_filename(product_name: &str, layout: LayoutVariant) -> String {
    let slug = slugify(product_name);
    let slug = if slug.is_empty() { FALLBACK_SLUG } else { slug.as_str() };
    format!("{}-{}.png", slug, layout.id())
}

/// Result of a completed export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOutcome {
    pub layout: LayoutVariant,
    pub filename: String,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub bytes: usize,
}

/// Rasterizes mounted surfaces and hands the PNGs to a sink
#[derive(Clone)]
pub struct Exporter {
    rasterizer: Arc<dyn Rasterizer>,
    sink: Arc<dyn DownloadSink>,
    options: RasterOptions,
}

impl Exporter {
    pub fn new(rasterizer: Arc<dyn Rasterizer>, sink: Arc<dyn DownloadSink>) -> Self {
        Self {
            rasterizer,
            sink,
            options: RasterOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RasterOptions) -> Self {
        self.options = options;
        self
    }

    /// Export whatever is currently mounted for `layout`.
    ///
    /// The surface and filename are captured now; the returned future owns
    /// everything it needs. Resolves to `Ok(None)` if nothing is mounted.
    pub fn export_layout(
        &self,
        surfaces: &SurfaceRegistry,
        layout: LayoutVariant,
        product_name: &str,
    ) -> impl Future<Output = StudioResult<Option<ExportOutcome>>> + Send + 'static {
        let job = surfaces
            .get(layout)
            .map(|surface| (self.clone(), surface, export_filename(product_name, layout)));

        async move {
            let Some((exporter, surface, filename)) = job else {
                debug!(layout = %layout, "export skipped: surface not mounted");
                return Ok(None);
            };
            exporter.export_surface(surface, filename).await.map(Some)
        }
    }

    /// Rasterize one surface and save it under `filename`
    pub async fn export_surface(&self, surface: SurfaceHandle, filename: String) -> StudioResult<ExportOutcome> {
        let layout = surface.layout;
        let rasterizer = Arc::clone(&self.rasterizer);
        let sink = Arc::clone(&self.sink);
        let options = self.options;

        let result = tokio::task::spawn_blocking(move || {
            let image = rasterizer.rasterize(&surface, &options)?;
            let path = sink.save(&filename, &image.png)?;
            Ok::<_, StudioError>(ExportOutcome {
                layout,
                filename,
                path,
                width: image.width,
                height: image.height,
                bytes: image.png.len(),
            })
        })
        .await
        .map_err(|e| StudioError::Task(e.to_string()))?;

        match &result {
            Ok(outcome) => info!(
                layout = %layout,
                path = %outcome.path.display(),
                width = outcome.width,
                height = outcome.height,
                "export complete"
            ),
            Err(StudioError::ExportCancelled) => info!(layout = %layout, "export cancelled"),
            Err(e) => error!(layout = %layout, "export failed: {}", e),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_collapses_runs_and_trims() {
        assert_eq!(slugify("Luminex Glow Serum!!"), "luminex-glow-serum");
        assert_eq!(slugify("  --Hello,   World--  "), "hello-world");
        assert_eq!(slugify("ABC123"), "abc123");
        assert_eq!(slugify("Café Crème"), "caf-cr-me");
    }

    #[test]
    fn slug_of_punctuation_is_empty() {
        assert_eq!(slugify("---"), "");
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("日本語"), "");
    }

    #[test]
    fn filename_uses_fallback() {
        assert_eq!(
            export_filename("Luminex Glow Serum!!", LayoutVariant::Angled),
            "luminex-glow-serum-angled.png"
        );
        assert_eq!(export_filename("---", LayoutVariant::Angled), "product-angled.png");
        assert_eq!(export_filename("", LayoutVariant::Compact), "product-compact.png");
    }
}
