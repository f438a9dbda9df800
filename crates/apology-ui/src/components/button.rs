//! Button Components
//!
//! The card uses four button looks:
//! - Primary: rose, full-width call to action
//! - Dark: slate, used on the reunion step
//! - Link: underlined text, used for "see it again"
//! - Muted: the grey evasive button

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Rose call to action
    #[default]
    Primary,
    /// Slate call to action
    Dark,
    /// Underlined text link
    Link,
    /// Grey, non-functional look
    Muted,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Dark => "btn-dark",
            ButtonVariant::Link => "btn-link",
            ButtonVariant::Muted => "btn-muted",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Joins a base class with optional extra classes.
pub fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Dark,
///         onclick: move |_| flow.write().apply(Action::Primary, &mut ThreadRandom),
///         "Da, vreau 🤍"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Label with a short form for narrow screens and a long form otherwise.
#[component]
pub fn ResponsiveLabel(short: String, long: String) -> Element {
    rsx! {
        span { class: "label-short", "{short}" }
        span { class: "label-long", "{long}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Dark.class(), "btn-dark");
        assert_eq!(ButtonVariant::Link.class(), "btn-link");
        assert_eq!(ButtonVariant::Muted.class(), "btn-muted");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn join_classes_skips_empty() {
        assert_eq!(join_classes("btn-primary", None), "btn-primary");
        assert_eq!(join_classes("btn-primary", Some("")), "btn-primary");
        assert_eq!(join_classes("btn-primary", Some("wide")), "btn-primary wide");
    }
}
