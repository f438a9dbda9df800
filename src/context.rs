//! Card context for the step pages.
//!
//! The root `App` owns the flow and the content; pages reach them through
//! these hooks.
//!
//! ## Usage
//!
//! ```ignore
//! let mut flow = use_flow();
//! let content = use_content();
//!
//! flow.write().apply(Action::Primary, &mut ThreadRandom);
//! ```

use apology_core::{Action, CardContent, Outcome, PresentationFlow, ThreadRandom};
use dioxus::prelude::*;

/// Hook to access the card's step state.
pub fn use_flow() -> Signal<PresentationFlow> {
    use_context::<Signal<PresentationFlow>>()
}

/// Hook to access the card content.
pub fn use_content() -> Signal<CardContent> {
    use_context::<Signal<CardContent>>()
}

/// Apply a user gesture to the shared flow, drawing from the thread rng.
pub fn dispatch(mut flow: Signal<PresentationFlow>, action: Action) {
    if let Outcome::Advanced { to, .. } = flow.write().apply(action, &mut ThreadRandom) {
        tracing::info!("Card moved to {} step", to);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use apology_core::Step;

    use super::*;

    thread_local! {
        static SEEN: Cell<Option<(Step, bool)>> = const { Cell::new(None) };
    }

    fn DispatchHost() -> Element {
        let flow = use_signal(PresentationFlow::new);
        use_hook(|| {
            dispatch(flow, Action::Primary);
            dispatch(flow, Action::Decline);
            dispatch(flow, Action::Accept);
        });
        let state = flow.peek();
        SEEN.with(|seen| seen.set(Some((state.step(), state.is_forgiven()))));
        rsx! { div {} }
    }

    #[test]
    fn dispatch_applies_actions_to_shared_flow() {
        let mut dom = VirtualDom::new(DispatchHost);
        dom.rebuild_in_place();
        assert_eq!(SEEN.with(|seen| seen.get()), Some((Step::Reunion, true)));
    }
}
