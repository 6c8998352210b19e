//! Export pipeline tests
//!
//! Exercise the exporter end to end: registry lookup, rasterization off the
//! async runtime, filename derivation and the download sink.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use studio_core::{
    render_card, DirectorySink, DownloadSink, Exporter, FormState, LayoutVariant, RasterImage, RasterOptions,
    Rasterizer, ResvgRasterizer, StudioError, StudioResult, SurfaceHandle, SurfaceRegistry,
};
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Sink that records saves in memory
#[derive(Default)]
struct RecordingSink {
    saved: Mutex<Vec<(String, usize)>>,
}

impl RecordingSink {
    fn saved(&self) -> Vec<(String, usize)> {
        self.saved.lock().unwrap().clone()
    }
}

impl DownloadSink for RecordingSink {
    fn save(&self, filename: &str, png: &[u8]) -> StudioResult<PathBuf> {
        self.saved.lock().unwrap().push((filename.to_string(), png.len()));
        Ok(PathBuf::from(filename))
    }
}

/// Rasterizer that always fails
struct BrokenRasterizer;

impl Rasterizer for BrokenRasterizer {
    fn rasterize(&self, _surface: &SurfaceHandle, _options: &RasterOptions) -> StudioResult<RasterImage> {
        Err(StudioError::Raster("unsupported content".to_string()))
    }
}

/// Sink that behaves like a dismissed save dialog
struct CancellingSink;

impl DownloadSink for CancellingSink {
    fn save(&self, _filename: &str, _png: &[u8]) -> StudioResult<PathBuf> {
        Err(StudioError::ExportCancelled)
    }
}

fn mounted(form: &FormState, layouts: &[LayoutVariant]) -> SurfaceRegistry {
    let mut registry = SurfaceRegistry::new();
    for layout in layouts {
        registry.mount(&render_card(form, form.palette(), *layout));
    }
    registry
}

// ============================================================================
// Export Tests
// ============================================================================

#[tokio::test]
async fn test_export_unmounted_layout_is_noop() {
    let sink = Arc::new(RecordingSink::default());
    let exporter = Exporter::new(Arc::new(ResvgRasterizer::without_fonts()), sink.clone());
    let registry = mounted(&FormState::default(), &[LayoutVariant::Spotlight]);

    let outcome = exporter
        .export_layout(&registry, LayoutVariant::Compact, "Anything")
        .await
        .unwrap();

    assert!(outcome.is_none());
    assert!(sink.saved().is_empty());
}

#[tokio::test]
async fn test_export_writes_png_at_double_density() {
    let tmp = TempDir::new().unwrap();
    let exporter = Exporter::new(
        Arc::new(ResvgRasterizer::without_fonts()),
        Arc::new(DirectorySink::new(tmp.path())),
    );
    let form = FormState::default();
    let registry = mounted(&form, &LayoutVariant::ALL);

    let outcome = exporter
        .export_layout(&registry, LayoutVariant::Angled, &form.product_name)
        .await
        .unwrap()
        .expect("angled surface is mounted");

    assert_eq!(outcome.filename, "luminex-glow-serum-angled.png");
    assert_eq!(outcome.path, tmp.path().join("luminex-glow-serum-angled.png"));
    assert_eq!((outcome.width, outcome.height), (960, 1200));

    let decoded = image::open(&outcome.path).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (960, 1200));
    // Rounded corner shows the opaque white background
    assert_eq!(decoded.get_pixel(0, 0).0, [255, 255, 255, 255]);
}

#[tokio::test]
async fn test_export_uses_fallback_slug() {
    let sink = Arc::new(RecordingSink::default());
    let exporter = Exporter::new(Arc::new(ResvgRasterizer::without_fonts()), sink.clone());
    let registry = mounted(&FormState::default(), &[LayoutVariant::Angled]);

    exporter
        .export_layout(&registry, LayoutVariant::Angled, "---")
        .await
        .unwrap();

    let saved = sink.saved();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].0, "product-angled.png");
    assert!(saved[0].1 > 0);
}

#[tokio::test]
async fn test_export_reflects_latest_mount() {
    let tmp = TempDir::new().unwrap();
    let exporter = Exporter::new(
        Arc::new(ResvgRasterizer::without_fonts()),
        Arc::new(DirectorySink::new(tmp.path())),
    );
    let mut form = FormState::default();
    let mut registry = mounted(&form, &[LayoutVariant::Spotlight]);
    let first = registry.get(LayoutVariant::Spotlight).unwrap();

    form.set_palette("sunset");
    registry.mount(&render_card(&form, form.palette(), LayoutVariant::Spotlight));
    let current = registry.get(LayoutVariant::Spotlight).unwrap();
    assert!(current.generation > first.generation);
    assert!(current.svg.contains(r#"data-palette="sunset""#));

    let outcome = exporter
        .export_layout(&registry, LayoutVariant::Spotlight, &form.product_name)
        .await
        .unwrap()
        .unwrap();
    assert!(outcome.path.exists());
}

#[tokio::test]
async fn test_rasterization_failure_is_surfaced() {
    let sink = Arc::new(RecordingSink::default());
    let exporter = Exporter::new(Arc::new(BrokenRasterizer), sink.clone());
    let registry = mounted(&FormState::default(), &[LayoutVariant::Compact]);

    let err = exporter
        .export_layout(&registry, LayoutVariant::Compact, "Lamp")
        .await
        .unwrap_err();

    assert!(matches!(err, StudioError::Raster(_)));
    assert!(sink.saved().is_empty(), "nothing is downloaded after a failed capture");
}

#[tokio::test]
async fn test_cancelled_save_is_reported() {
    let exporter = Exporter::new(Arc::new(ResvgRasterizer::without_fonts()), Arc::new(CancellingSink));
    let registry = mounted(&FormState::default(), &[LayoutVariant::Spotlight]);

    let err = exporter
        .export_layout(&registry, LayoutVariant::Spotlight, "Lamp")
        .await
        .unwrap_err();
    assert!(matches!(err, StudioError::ExportCancelled));
}

#[tokio::test]
async fn test_concurrent_exports_run_independently() {
    let sink = Arc::new(RecordingSink::default());
    let exporter = Exporter::new(Arc::new(ResvgRasterizer::without_fonts()), sink.clone());
    let registry = mounted(&FormState::default(), &[LayoutVariant::Compact]);

    let first = exporter.export_layout(&registry, LayoutVariant::Compact, "Lamp");
    let second = exporter.export_layout(&registry, LayoutVariant::Compact, "Lamp");
    let (a, b) = tokio::join!(first, second);

    assert!(a.unwrap().is_some());
    assert!(b.unwrap().is_some());
    let saved = sink.saved();
    assert_eq!(saved.len(), 2);
    assert!(saved.iter().all(|(name, _)| name == "lamp-compact.png"));
}

#[tokio::test]
async fn test_export_future_outlives_registry_borrow() {
    let sink = Arc::new(RecordingSink::default());
    let exporter = Exporter::new(Arc::new(ResvgRasterizer::without_fonts()), sink.clone());

    let future = {
        let registry = mounted(&FormState::default(), &[LayoutVariant::Angled]);
        exporter.export_layout(&registry, LayoutVariant::Angled, "Detached")
    };

    let handle = tokio::spawn(future);
    let outcome = handle.await.unwrap().unwrap().unwrap();
    assert_eq!(outcome.filename, "detached-angled.png");
}
