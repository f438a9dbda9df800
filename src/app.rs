use apology_core::{PresentationFlow, Step, StepMotion};
use apology_ui::FloatingParticles;
use dioxus::prelude::*;

use crate::pages::{ApologyStep, IntroStep, ReunionStep, VoucherStep};
use crate::theme::colors::root_variables;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the flow and content context, and renders the
/// page matching the current step over the particle background.
#[component]
pub fn App() -> Element {
    let flow: Signal<PresentationFlow> = use_signal(PresentationFlow::new);
    let content = use_signal(crate::get_content);

    use_context_provider(|| flow);
    use_context_provider(|| content);

    let palette = use_hook(root_variables);
    let step = flow.read().step();
    let motion_class = StepMotion::for_step(step).class();

    rsx! {
        style { {palette} }
        style { {GLOBAL_STYLES} }
        div { class: "page",
            {match step {
                Step::Intro => rsx! { div { class: "step {motion_class}", IntroStep {} } },
                Step::Apology => rsx! { div { class: "step {motion_class}", ApologyStep {} } },
                Step::Reunion => rsx! { div { class: "step {motion_class}", ReunionStep {} } },
                Step::Voucher => rsx! { div { class: "step {motion_class}", VoucherStep {} } },
            }}
            FloatingParticles {}
        }
    }
}
