//! Input Field Components
//!
//! Labelled single-line inputs and textareas. Labels are tied to their
//! control through an id derived from the label text.

use dioxus::prelude::*;
use studio_core::slugify;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called with the full new value on every edit
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    /// Optional ID; derived from the label when absent
    #[props(default)]
    pub id: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Text input field
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         label: "Product Name".to_string(),
///         value: form.read().product_name.clone(),
///         oninput: move |s| form.write().set_product_name(s),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = control_id("input", props.id.as_deref(), props.label.as_deref(), props.placeholder.as_deref());
    let input_class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("input-field {extra}"),
        _ => "input-field".to_string(),
    };

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{id}", "{label}" }
            }
            input {
                id: "{id}",
                class: "{input_class}",
                r#type: "text",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    /// Number of visible rows
    #[props(default = 4)]
    pub rows: u32,
    #[props(default)]
    pub id: Option<String>,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let id = control_id("textarea", props.id.as_deref(), props.label.as_deref(), props.placeholder.as_deref());

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{id}", "{label}" }
            }
            textarea {
                id: "{id}",
                class: "input-field textarea",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Stable element id: the explicit id, else `<kind>-<slug of label or placeholder>`
pub fn control_id(kind: &str, id: Option<&str>, label: Option<&str>, placeholder: Option<&str>) -> String {
    if let Some(id) = id.filter(|id| !id.is_empty()) {
        return id.to_string();
    }
    let slug = label.or(placeholder).map(slugify).unwrap_or_default();
    if slug.is_empty() {
        kind.to_string()
    } else {
        format!("{kind}-{slug}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_id_prefers_explicit_id() {
        assert_eq!(control_id("input", Some("name"), Some("Product Name"), None), "name");
    }

    #[test]
    fn control_id_from_label_or_placeholder() {
        assert_eq!(control_id("input", None, Some("Product Name"), None), "input-product-name");
        assert_eq!(control_id("input", Some(""), None, Some("Feature 2")), "input-feature-2");
        assert_eq!(control_id("textarea", None, None, None), "textarea");
    }
}
