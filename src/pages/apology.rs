//! Apology step - the goose asks for forgiveness.
//!
//! "Let's fix this" accepts and moves on; the grey "no" button runs away
//! from the pointer and can never be pressed.

use apology_core::motion::{BADGER_SPRING, GOOSE_SPRING};
use apology_core::Action;
use apology_ui::{Button, CharacterImage, CharacterSize, EvasiveButton};
use dioxus::prelude::*;

use crate::context::{dispatch, use_content, use_flow};

#[component]
pub fn ApologyStep() -> Element {
    let flow = use_flow();
    let content = use_content();
    let content = content.read();

    let (pose, offset) = {
        let state = flow.read();
        (state.pose(), state.evasive_offset())
    };
    let goose_style = format!(
        "transform: {}; transition: {};",
        pose.goose_transform(),
        GOOSE_SPRING.css_transition("transform")
    );
    let badger_style = format!(
        "transform: {}; transition: {};",
        pose.badger_transform(),
        BADGER_SPRING.css_transition("transform")
    );

    rsx! {
        div { class: "step-apology",
            div { class: "character-pair-row",
                div { style: "{goose_style}",
                    CharacterImage {
                        src: content.images.goose_sad_flowers.clone(),
                        label: "Gus 🦢".to_string(),
                        size: CharacterSize::Pair,
                    }
                }
                div { style: "{badger_style}",
                    CharacterImage {
                        src: content.images.badger_soft_sad.clone(),
                        label: "Bursuc 🦡".to_string(),
                        size: CharacterSize::Pair,
                    }
                }
            }

            h2 { class: "title-dark", "Îmi pare rău, te rog…" }

            p { class: "lead italic wide-text",
                "Pe "
                span { class: "date-highlight strong", "{content.important_date}" }
                " am fost răcit și m-am simțit foarte rău."
                br {}
                "Dar asta "
                span { class: "bold", "nu schimbă" }
                " cum te-ai simțit tu."
                br {}
                "Nu vreau doar să explic — vreau să "
                span { class: "date-highlight strong", "repar" }
                "."
            }

            div { class: "choice-row",
                Button {
                    class: "accept".to_string(),
                    onclick: move |_| {
                        dispatch(flow, Action::Accept);
                    },
                    "Haide sa reparam "
                    span { class: "icon", "💬" }
                }

                EvasiveButton {
                    offset: offset,
                    on_evade: move |_| {
                        dispatch(flow, Action::Decline);
                    },
                    "Nu vreau sa vorbesc cu tine."
                }
            }
        }
    }
}
