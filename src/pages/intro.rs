//! Intro step - the sad badger and the invitation to listen.

use apology_core::Action;
use apology_ui::{Button, ButtonVariant, CharacterImage, FancyCard, ResponsiveLabel};
use dioxus::prelude::*;

use crate::context::{dispatch, use_content, use_flow};

#[component]
pub fn IntroStep() -> Element {
    let flow = use_flow();
    let content = use_content();
    let content = content.read();

    rsx! {
        div { class: "step-intro",
            FancyCard { class: "centered".to_string(), watermark: "♥".to_string(),
                CharacterImage {
                    src: content.images.badger_sad.clone(),
                    label: "Bursuc 🦡".to_string(),
                }

                h1 { class: "title-rose", "Bursucica mea…" }

                p { class: "lead italic",
                    "Știu că te-a durut. Pe "
                    span { class: "date-highlight", "{content.important_date}" }
                    " meritai să te simți iubită și aleasă."
                    br {}
                    "Și faptul că nu am fost acolo te-a ranit..."
                }

                div { class: "action-row narrow",
                    Button {
                        variant: ButtonVariant::Primary,
                        class: "wide".to_string(),
                        onclick: move |_| {
                            dispatch(flow, Action::Primary);
                        },
                        ResponsiveLabel {
                            short: "Vrei să auzi ce-ți spune Gus?".to_string(),
                            long: "Vrei să auzi ce are Gus să-ți spună?".to_string(),
                        }
                        span { class: "arrow", "→" }
                    }
                }
            }
        }
    }
}
