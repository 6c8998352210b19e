//! Editor pane: copy fields, highlight inputs and the palette picker.

use dioxus::prelude::*;
use studio_core::FEATURE_INPUTS;
use studio_ui::{Input, PalettePicker, TextArea};

use crate::context::use_form;

/// Left-hand editor bound field-for-field to the form.
#[component]
pub fn EditorPanel() -> Element {
    let mut form = use_form();
    let current = form.read().clone();

    rsx! {
        section { class: "editor-panel",
            header { class: "editor-header",
                h1 { class: "page-title", "Product Image Studio" }
                p { class: "page-intro",
                    "Write your product copy once, pick a mood, and export three ready-to-post cards."
                }
            }

            Input {
                id: "product-name".to_string(),
                label: "Product Name".to_string(),
                value: current.product_name.clone(),
                oninput: move |value: String| form.write().set_product_name(value),
            }
            Input {
                id: "tagline".to_string(),
                label: "Tagline".to_string(),
                value: current.tagline.clone(),
                oninput: move |value: String| form.write().set_tagline(value),
            }
            TextArea {
                id: "product-story".to_string(),
                label: "Product Story".to_string(),
                value: current.description.clone(),
                rows: 4,
                oninput: move |value: String| form.write().set_description(value),
            }
            Input {
                id: "cta".to_string(),
                label: "Call to Action".to_string(),
                value: current.cta.clone(),
                oninput: move |value: String| form.write().set_cta(value),
            }

            fieldset { class: "form-group",
                legend { class: "input-label", "Signature Highlights" }
                for index in 0..FEATURE_INPUTS {
                    Input {
                        key: "{index}",
                        id: format!("feature-{}", index + 1),
                        placeholder: format!("Feature {}", index + 1),
                        value: current.feature(index).to_string(),
                        oninput: move |value: String| form.write().set_feature(index, value),
                    }
                }
            }

            fieldset { class: "form-group",
                legend { class: "input-label", "Palette Mood" }
                PalettePicker {
                    selected: current.selected_palette_id.clone(),
                    on_select: move |id: String| form.write().set_palette(id),
                }
            }
        }
    }
}
