//! Studio context for the editor and preview components.
//!
//! ## Usage
//!
//! ```ignore
//! // In App
//! use_context_provider(|| form);
//! use_context_provider(|| surfaces);
//! use_context_provider(|| exporter);
//!
//! // In child components
//! let mut form = use_form();
//! form.write().set_product_name("Orbit Desk Lamp");
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use studio_core::{DirectorySink, DownloadSink, Exporter, FormState, ResvgRasterizer, SurfaceRegistry};

use crate::dialog::DialogSink;
use crate::LaunchOptions;

/// Hook to access the form being edited.
///
/// Every setter call through `form.write()` re-renders the three previews.
pub fn use_form() -> Signal<FormState> {
    use_context::<Signal<FormState>>()
}

/// Hook to access the mounted card surfaces, one slot per layout.
pub fn use_surfaces() -> Signal<SurfaceRegistry> {
    use_context::<Signal<SurfaceRegistry>>()
}

/// Hook to access the shared exporter
pub fn use_exporter() -> Exporter {
    use_context::<Exporter>()
}

/// Initial form: defaults with the startup palette selected
pub fn initial_form(options: &LaunchOptions) -> FormState {
    let mut form = FormState::default();
    form.set_palette(options.palette.clone());
    form
}

/// Exporter wired to the configured download destination
pub fn build_exporter(options: &LaunchOptions) -> Exporter {
    let sink: Arc<dyn DownloadSink> = if options.ask {
        Arc::new(DialogSink::new(options.out_dir.clone()))
    } else {
        Arc::new(DirectorySink::new(options.out_dir.clone()))
    };
    Exporter::new(Arc::new(ResvgRasterizer::new()), sink)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_form_uses_startup_palette() {
        let options = LaunchOptions {
            palette: "zen".to_string(),
            ..LaunchOptions::default()
        };
        let form = initial_form(&options);
        assert_eq!(form.selected_palette_id, "zen");
        assert_eq!(form.product_name, FormState::default().product_name);
    }
}
