//! Palette Picker Component
//!
//! Single-select radio group over the palette table, laid out as a
//! two-column grid of gradient swatches.

use dioxus::prelude::*;
use studio_core::{Palette, PALETTES};

/// Properties for the PalettePicker component
#[derive(Clone, PartialEq, Props)]
pub struct PalettePickerProps {
    /// Id of the selected palette
    pub selected: String,
    /// Called with the id of the chosen palette
    pub on_select: EventHandler<String>,
    /// Radio group name
    #[props(default = "palette".to_string())]
    pub name: String,
}

/// Radio group of palette swatches
///
/// Each option is a native radio input wrapped in its label, so keyboard
/// navigation and screen readers work without extra wiring.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     PalettePicker {
///         selected: form.read().selected_palette_id.clone(),
///         on_select: move |id| form.write().set_palette(id),
///     }
/// }
/// ```
#[component]
pub fn PalettePicker(props: PalettePickerProps) -> Element {
    rsx! {
        div {
            class: "palette-grid",
            role: "radiogroup",
            "aria-label": "Palette Mood",
            for palette in PALETTES.iter() {
                {
                    let is_selected = props.selected == palette.id;
                    let on_select = props.on_select;
                    let id = palette.id;
                    let background = swatch_background(palette);
                    rsx! {
                        label {
                            key: "{id}",
                            class: if is_selected { "palette-option selected" } else { "palette-option" },
                            input {
                                class: "palette-radio",
                                r#type: "radio",
                                name: "{props.name}",
                                value: "{id}",
                                checked: is_selected,
                                onchange: move |_| on_select.call(id.to_string()),
                            }
                            span { class: "palette-swatch", style: "background: {background};" }
                            span { class: "palette-name", "{palette.name}" }
                            if is_selected {
                                span { class: "palette-check", "aria-hidden": "true", "\u{2713}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// CSS `linear-gradient(...)` matching the palette's card backdrop
pub fn swatch_background(palette: &Palette) -> String {
    let stops = palette
        .gradient
        .iter()
        .map(|stop| format!("{} {}%", stop.color, (stop.offset * 100.0).round()))
        .collect::<Vec<_>>()
        .join(", ");
    format!("linear-gradient({}deg, {})", palette.gradient_angle, stops)
}
