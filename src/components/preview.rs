//! Preview gallery: one live card per layout, each with its own export.

use std::path::PathBuf;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use dioxus::prelude::*;
use studio_core::{render_card, LayoutVariant, StudioError, CARD_HEIGHT, CARD_WIDTH};
use studio_ui::Button;

use crate::context::{use_exporter, use_form, use_surfaces};

/// Right-hand gallery with the three layouts side by side
#[component]
pub fn PreviewGallery() -> Element {
    rsx! {
        section { class: "preview-gallery",
            h2 { class: "section-title", "Preview Gallery" }
            div { class: "preview-grid",
                for layout in LayoutVariant::ALL {
                    PreviewPanel { key: "{layout}", layout: layout }
                }
            }
        }
    }
}

/// A single layout: live card, export button, result line.
///
/// The rendered card is (re)mounted in the surface registry whenever it
/// changes and unmounted when the panel goes away, so an export always
/// captures exactly what is on screen.
#[component]
fn PreviewPanel(layout: LayoutVariant) -> Element {
    let form = use_form();
    let mut surfaces = use_surfaces();
    let exporter = use_exporter();

    let mut in_flight = use_signal(|| 0usize);
    let mut last_path = use_signal(|| Option::<PathBuf>::None);
    let mut error = use_signal(|| Option::<String>::None);

    let svg = use_memo(move || {
        let form = form.read();
        let card = render_card(&form, form.palette(), layout);
        Arc::<str>::from(card.to_svg())
    });

    use_effect(move || {
        let current = svg();
        surfaces.write().mount_svg(layout, current, CARD_WIDTH, CARD_HEIGHT);
    });

    use_drop(move || {
        if let Ok(mut registry) = surfaces.try_write() {
            registry.unmount(layout);
        }
    });

    let export = move |_: ()| {
        // Capture the surface and name now; the job owns its copies
        let job = exporter.export_layout(&surfaces.read(), layout, &form.read().product_name);
        *in_flight.write() += 1;
        error.set(None);

        spawn(async move {
            match job.await {
                Ok(Some(outcome)) => last_path.set(Some(outcome.path)),
                Ok(None) => {}
                Err(StudioError::ExportCancelled) => {}
                Err(e) => error.set(Some(e.to_string())),
            }
            *in_flight.write() -= 1;
        });
    };

    let exporting = in_flight() > 0;
    let src = svg_data_uri(&svg.read());

    rsx! {
        article { class: "preview-panel",
            header { class: "preview-header",
                h3 { class: "preview-title", "{layout.title()}" }
                Button {
                    busy: exporting,
                    onclick: export,
                    if exporting { "Exporting..." } else { "Export PNG" }
                }
            }
            div { class: "preview-frame",
                img {
                    class: "preview-card",
                    src: "{src}",
                    alt: "{layout.title()} card",
                    width: "{CARD_WIDTH}",
                    height: "{CARD_HEIGHT}",
                }
            }
            if let Some(message) = error() {
                p { class: "preview-error", role: "alert", "Export failed: {message}" }
            }
            if let Some(path) = last_path() {
                p { class: "preview-path", "Saved to {path.display()}" }
            }
        }
    }
}

/// `data:` URI that displays the SVG in an `img`
fn svg_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_round_trips_svg() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"/>"#;
        let uri = svg_data_uri(svg);
        let encoded = uri.strip_prefix("data:image/svg+xml;base64,").unwrap();
        assert_eq!(STANDARD.decode(encoded).unwrap(), svg.as_bytes());
    }
}
