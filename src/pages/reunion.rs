//! Reunion step - the photo and the proposed day.

use apology_core::Action;
use apology_ui::{Button, ButtonVariant, FancyCard, ResponsiveLabel};
use dioxus::prelude::*;

use crate::context::{dispatch, use_content, use_flow};

#[component]
pub fn ReunionStep() -> Element {
    let flow = use_flow();
    let content = use_content();
    let content = content.read();

    rsx! {
        div { class: "step-reunion",
            FancyCard { class: "reunion-card centered".to_string(), watermark: "📅".to_string(),
                div { class: "pill", "Noi doi 🤍" }

                div { class: "photo-row",
                    img {
                        class: "photo",
                        src: "{content.images.us_together}",
                        alt: "Us Together",
                    }
                }

                h2 { class: "title-dark", "Noi Doi, din nou" }

                p { class: "lead wide-text",
                    span { class: "date-highlight strong", "{content.repair_date}" }
                    " vreau să fie ziua noastră."
                    br {}
                    "O zi în care doar noi contăm."
                }

                div { class: "action-row",
                    Button {
                        variant: ButtonVariant::Dark,
                        onclick: move |_| {
                            dispatch(flow, Action::Primary);
                        },
                        ResponsiveLabel {
                            short: "Da, vreau 🤍".to_string(),
                            long: "Da, vreau să fim noi 🤍".to_string(),
                        }
                        span { class: "arrow", "→" }
                    }
                }
            }
        }
    }
}
