//! Character illustration
//!
//! The card only references images by path. A missing file is left to the
//! webview to render as a broken image.

use dioxus::prelude::*;

/// Illustration sizes used across the steps
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CharacterSize {
    /// Single hero image on the intro
    #[default]
    Hero,
    /// Side-by-side pair on the apology step
    Pair,
}

impl CharacterSize {
    pub fn class(&self) -> &'static str {
        match self {
            CharacterSize::Hero => "character-hero",
            CharacterSize::Pair => "character-pair",
        }
    }
}

#[component]
pub fn CharacterImage(
    src: String,
    label: String,
    #[props(default)] size: CharacterSize,
) -> Element {
    let img_class = format!("character-img {}", size.class());

    rsx! {
        div { class: "character",
            img {
                class: "{img_class}",
                src: "{src}",
                alt: "{label}",
                draggable: "false",
            }
        }
    }
}
