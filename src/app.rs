use dioxus::prelude::*;
use studio_core::SurfaceRegistry;

use crate::components::{EditorPanel, PreviewGallery};
use crate::context::{build_exporter, initial_form};
use crate::launch_options;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the form, the surface registry and the exporter, and lays out the
/// editor beside the preview gallery.
#[component]
pub fn App() -> Element {
    let form = use_signal(|| initial_form(&launch_options()));
    let surfaces = use_signal(SurfaceRegistry::new);

    use_context_provider(|| form);
    use_context_provider(|| surfaces);
    use_context_provider(|| build_exporter(&launch_options()));

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "studio",
            EditorPanel {}
            PreviewGallery {}
        }
    }
}
