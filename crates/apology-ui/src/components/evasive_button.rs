//! Evasive Button
//!
//! The "no" button on the apology step. It jumps away on hover or
//! touch-start and has no click behavior.

use apology_core::evasive::EVASIVE_SPRING;
use apology_core::EvasiveOffset;
use dioxus::prelude::*;

/// Properties for the EvasiveButton component
#[derive(Clone, PartialEq, Props)]
pub struct EvasiveButtonProps {
    /// Current offset from the resting position
    pub offset: EvasiveOffset,
    /// Fired when the pointer enters or a touch starts
    pub on_evade: EventHandler<()>,
    pub children: Element,
}

/// Inline style placing the button at `offset` with the spring transition.
pub fn evasive_style(offset: EvasiveOffset) -> String {
    format!(
        "transform: {}; transition: {};",
        offset.css_transform(),
        EVASIVE_SPRING.css_transition("transform")
    )
}

#[component]
pub fn EvasiveButton(props: EvasiveButtonProps) -> Element {
    let style = evasive_style(props.offset);
    let on_evade = props.on_evade;

    rsx! {
        button {
            class: "btn-muted evasive",
            r#type: "button",
            style: "{style}",
            onmouseenter: move |_| {
                tracing::trace!("evasive button hovered");
                on_evade.call(());
            },
            ontouchstart: move |_| on_evade.call(()),
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_style() {
        assert_eq!(
            evasive_style(EvasiveOffset::ORIGIN),
            "transform: translate(0.0px, 0.0px); transition: transform 0.44s cubic-bezier(0.34, 1.56, 0.64, 1);"
        );
    }
}
