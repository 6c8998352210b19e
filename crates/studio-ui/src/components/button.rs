//! Button Components

use dioxus::prelude::*;

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Button content
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Shows the busy style; clicks still go through
    #[props(default = false)]
    pub busy: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Filled button for the main action of a panel
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         busy: exporting,
///         onclick: move |_| export(),
///         if exporting { "Exporting..." } else { "Export PNG" }
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = button_class(props.busy, props.class.as_deref());

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            "aria-busy": if props.busy { "true" } else { "false" },
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

fn button_class(busy: bool, extra: Option<&str>) -> String {
    let mut class = String::from("btn-primary");
    if busy {
        class.push_str(" is-busy");
    }
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_button_class() {
        assert_eq!(button_class(false, None), "btn-primary");
        assert_eq!(button_class(false, Some("")), "btn-primary");
    }

    #[test]
    fn busy_and_extra_classes() {
        assert_eq!(button_class(true, None), "btn-primary is-busy");
        assert_eq!(button_class(true, Some("wide")), "btn-primary is-busy wide");
    }
}
