//! Benchmarks for card rendering and export
//!
//! Run with: cargo bench -p studio-core
//!
//! These benchmarks establish baselines for:
//! - Building the card tree for each layout
//! - SVG serialization
//! - Rasterization at export density

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use studio_core::{
    find_palette, render_card, FormState, LayoutVariant, RasterOptions, Rasterizer, ResvgRasterizer,
    SurfaceRegistry,
};

// ============================================================================
// Render Benchmarks
// ============================================================================

fn bench_render(c: &mut Criterion) {
    let form = FormState::default();
    let palette = find_palette("aurora");
    let mut group = c.benchmark_group("render_card");

    for layout in LayoutVariant::ALL {
        group.bench_function(layout.id(), |b| {
            b.iter(|| black_box(render_card(&form, palette, layout)))
        });
    }
    group.finish();
}

fn bench_svg(c: &mut Criterion) {
    let form = FormState::default();
    let card = render_card(&form, find_palette("nebula"), LayoutVariant::Angled);
    c.bench_function("to_svg_angled", |b| b.iter(|| black_box(card.to_svg())));
}

// ============================================================================
// Raster Benchmarks
// ============================================================================

fn bench_rasterize(c: &mut Criterion) {
    let form = FormState::default();
    let mut registry = SurfaceRegistry::new();
    registry.mount(&render_card(&form, form.palette(), LayoutVariant::Spotlight));
    let surface = registry.get(LayoutVariant::Spotlight).expect("mounted");

    let rasterizer = Arc::new(ResvgRasterizer::without_fonts());
    let options = RasterOptions::default();

    let mut group = c.benchmark_group("rasterize");
    group.sample_size(10);
    group.bench_function("spotlight_2x", |b| {
        b.iter(|| black_box(rasterizer.rasterize(&surface, &options).unwrap()))
    });
    group.finish();
}

criterion_group!(benches, bench_render, bench_svg, bench_rasterize);
criterion_main!(benches);
