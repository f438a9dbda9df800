//! Voucher step - the final coupon, with a way back to the start.

use apology_core::Action;
use apology_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

use crate::context::{dispatch, use_content, use_flow};

#[component]
pub fn VoucherStep() -> Element {
    let flow = use_flow();
    let content = use_content();
    let content = content.read();

    rsx! {
        div { class: "step-voucher",
            div { class: "voucher",
                div { class: "voucher-watermark", "aria-hidden": "true", "♥" }

                div { class: "voucher-body",
                    header { class: "voucher-header",
                        h3 { class: "voucher-kicker", "Voucher pentru Fericire" }
                        p { class: "voucher-title", "Ediția noastră 🦡🦢" }
                    }

                    div { class: "voucher-lines",
                        VoucherLine { label: "Beneficiar:", value: content.recipient.clone(), highlight: true }
                        VoucherLine { label: "De la:", value: content.sender.clone() }
                        VoucherLine { label: "Include:", value: "Tot ce te face fericită" }
                    }

                    div { class: "voucher-promise",
                        "„Promit să fiu aici, prezent și atent. Te iubesc.”"
                    }

                    div { class: "voucher-code-block",
                        div { class: "voucher-code", "{content.coupon_code}" }
                        p { class: "voucher-validity", "Valabil pe viață ❤️" }
                    }

                    div { class: "action-row",
                        Button {
                            variant: ButtonVariant::Link,
                            onclick: move |_| {
                                dispatch(flow, Action::Reset);
                            },
                            "Vezi din nou"
                        }
                    }
                }
            }

            p { class: "signature", "Cu dragoste, {content.signature}." }
        }
    }
}

#[component]
fn VoucherLine(label: String, value: String, #[props(default)] highlight: bool) -> Element {
    rsx! {
        div { class: "voucher-line",
            span { class: "voucher-label", "{label}" }
            span { class: if highlight { "voucher-value highlight" } else { "voucher-value" }, "{value}" }
        }
    }
}
