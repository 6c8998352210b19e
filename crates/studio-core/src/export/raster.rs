//! Rasterization of card surfaces to PNG.

use std::io::Cursor;
use std::sync::{Arc, OnceLock};

use image::{DynamicImage, ImageFormat, RgbaImage};
use resvg::tiny_skia;
use resvg::usvg;
use tracing::{debug, info};

use crate::color::Rgba;
use crate::error::{StudioError, StudioResult};

use super::surface::SurfaceHandle;

/// Rasterization settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterOptions {
    /// Output pixels per logical pixel
    pub pixel_ratio: f32,
    /// Painted under the surface before rendering
    pub background: Rgba,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            pixel_ratio: 2.0,
            background: Rgba::WHITE,
        }
    }
}

/// Largest output the rasterizer will allocate (64 megapixels)
const MAX_OUTPUT_PIXELS: u64 = 8192 * 8192;

/// An encoded PNG and its pixel size
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

/// Turns a surface into a PNG.
///
/// Implementations are blocking; callers run them off the UI thread.
pub trait Rasterizer: Send + Sync {
    fn rasterize(&self, surface: &SurfaceHandle, options: &RasterOptions) -> StudioResult<RasterImage>;
}

/// `resvg` backed rasterizer.
///
/// System fonts are loaded on the first call, inside the caller's blocking
/// task, and kept for later calls. The SVG is parsed fresh every time so the
/// output always reflects the surface as it is now.
pub struct ResvgRasterizer {
    fontdb: OnceLock<Arc<usvg::fontdb::Database>>,
}

impl ResvgRasterizer {
    /// Rasterizer using the system's installed fonts
    pub fn new() -> Self {
        Self { fontdb: OnceLock::new() }
    }

    /// Rasterizer with an empty font database (text is skipped)
    pub fn without_fonts() -> Self {
        Self {
            fontdb: OnceLock::from(Arc::new(usvg::fontdb::Database::new())),
        }
    }

    fn fontdb(&self) -> Arc<usvg::fontdb::Database> {
        let db = self.fontdb.get_or_init(|| {
            let mut db = usvg::fontdb::Database::new();
            db.load_system_fonts();
            info!(faces = db.len(), "font database loaded");
            Arc::new(db)
        });
        Arc::clone(db)
    }
}

impl Default for ResvgRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for ResvgRasterizer {
    fn rasterize(&self, surface: &SurfaceHandle, options: &RasterOptions) -> StudioResult<RasterImage> {
        if !(options.pixel_ratio.is_finite() && options.pixel_ratio > 0.0) {
            return Err(StudioError::Raster(format!("invalid pixel ratio {}", options.pixel_ratio)));
        }

        let opt = usvg::Options {
            fontdb: self.fontdb(),
            ..usvg::Options::default()
        };
        let tree = usvg::Tree::from_str(&surface.svg, &opt).map_err(|e| StudioError::Svg(e.to_string()))?;

        let scale = options.pixel_ratio;
        let (width, height) = output_size(tree.size().width(), tree.size().height(), scale)?;
        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| StudioError::Raster(format!("cannot allocate {width}x{height} pixmap")))?;

        let bg = options.background;
        pixmap.fill(tiny_skia::Color::from_rgba8(bg.r, bg.g, bg.b, bg.alpha_u8()));
        resvg::render(&tree, tiny_skia::Transform::from_scale(scale, scale), &mut pixmap.as_mut());

        let png = encode_png(&pixmap)?;
        debug!(
            layout = %surface.layout,
            generation = surface.generation,
            width,
            height,
            bytes = png.len(),
            "surface rasterized"
        );

        Ok(RasterImage { width, height, png })
    }
}

/// Pixel size of the output, refusing anything over [`MAX_OUTPUT_PIXELS`]
fn output_size(width: f32, height: f32, scale: f32) -> StudioResult<(u32, u32)> {
    let w = (f64::from(width) * f64::from(scale)).ceil();
    let h = (f64::from(height) * f64::from(scale)).ceil();
    if w * h > MAX_OUTPUT_PIXELS as f64 {
        return Err(StudioError::Raster(format!(
            "{w}x{h} output at pixel ratio {scale} exceeds the {MAX_OUTPUT_PIXELS} pixel limit"
        )));
    }
    Ok((w as u32, h as u32))
}

/// Encode a premultiplied pixmap as straight-alpha PNG
fn encode_png(pixmap: &tiny_skia::Pixmap) -> StudioResult<Vec<u8>> {
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    let buffer = RgbaImage::from_raw(pixmap.width(), pixmap.height(), rgba)
        .ok_or_else(|| StudioError::Raster("pixel buffer size mismatch".to_string()))?;

    let mut png = Vec::new();
    DynamicImage::ImageRgba8(buffer).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutVariant;

    fn surface(svg: &str) -> SurfaceHandle {
        SurfaceHandle {
            layout: LayoutVariant::Spotlight,
            generation: 1,
            svg: Arc::from(svg),
            width: 10.0,
            height: 10.0,
        }
    }

    #[test]
    fn renders_at_pixel_ratio_over_background() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="8" viewBox="0 0 10 8"><rect x="5" y="0" width="5" height="8" fill="rgb(255,0,0)"/></svg>"#;
        let image = ResvgRasterizer::without_fonts()
            .rasterize(&surface(svg), &RasterOptions::default())
            .unwrap();

        assert_eq!((image.width, image.height), (20, 16));
        let decoded = image::load_from_memory(&image.png).unwrap().to_rgba8();
        assert_eq!(decoded.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(decoded.get_pixel(19, 15).0, [255, 0, 0, 255]);
    }

    #[test]
    fn malformed_svg_is_reported() {
        let err = ResvgRasterizer::without_fonts()
            .rasterize(&surface("<svg"), &RasterOptions::default())
            .unwrap_err();
        assert!(matches!(err, StudioError::Svg(_)));
    }

    #[test]
    fn oversize_output_is_rejected_before_allocating() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="480" height="600" viewBox="0 0 480 600"/>"#;
        let options = RasterOptions {
            pixel_ratio: 10_000.0,
            ..RasterOptions::default()
        };
        let err = ResvgRasterizer::without_fonts()
            .rasterize(&surface(svg), &options)
            .unwrap_err();
        assert!(matches!(err, StudioError::Raster(_)));
    }

    #[test]
    fn output_size_budget() {
        assert_eq!(output_size(480.0, 600.0, 2.0).unwrap(), (960, 1200));
        assert_eq!(output_size(480.0, 600.0, 0.5).unwrap(), (240, 300));
        assert!(output_size(8192.0, 8192.0, 1.0).is_ok());
        assert!(output_size(8192.0, 8193.0, 1.0).is_err());
    }

    #[test]
    fn system_fonts_load_on_first_use() {
        let rasterizer = ResvgRasterizer::new();
        assert!(rasterizer.fontdb.get().is_none());

        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"/>"#;
        rasterizer.rasterize(&surface(svg), &RasterOptions::default()).unwrap();
        assert!(rasterizer.fontdb.get().is_some());
    }

    #[test]
    fn zero_ratio_is_rejected() {
        let options = RasterOptions {
            pixel_ratio: 0.0,
            ..RasterOptions::default()
        };
        let err = ResvgRasterizer::without_fonts()
            .rasterize(&surface("<svg/>"), &options)
            .unwrap_err();
        assert!(matches!(err, StudioError::Raster(_)));
    }
}
