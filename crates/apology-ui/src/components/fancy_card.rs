//! Card frame
//!
//! White, heavily rounded panel with a faint oversized glyph in the corner.

use dioxus::prelude::*;

use super::button::join_classes;

/// Properties for the FancyCard component
#[derive(Clone, PartialEq, Props)]
pub struct FancyCardProps {
    pub children: Element,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    /// Decorative glyph shown faintly in the top-right corner
    #[props(default)]
    pub watermark: Option<String>,
}

#[component]
pub fn FancyCard(props: FancyCardProps) -> Element {
    let full_class = join_classes("fancy-card", props.class.as_deref());

    rsx! {
        div { class: "{full_class}",
            if let Some(mark) = &props.watermark {
                div { class: "card-watermark", "aria-hidden": "true", "{mark}" }
            }
            div { class: "card-body", {props.children} }
        }
    }
}
