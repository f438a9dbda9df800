//! Floating Particles Background
//!
//! Swans, badgers and hearts drifting down behind the card. The field is
//! drawn once when the component mounts and stays stable across re-renders.

use apology_core::particles::drift_keyframes;
use apology_core::{ParticleField, ThreadRandom};
use dioxus::prelude::*;

/// Particle field of the current mount. Drawn on the first render only.
pub fn use_particle_field() -> ParticleField {
    use_hook(|| ParticleField::generate(&mut ThreadRandom))
}

#[component]
pub fn FloatingParticles() -> Element {
    let field = use_particle_field();
    let keyframes = use_hook(drift_keyframes);

    rsx! {
        style { {keyframes} }
        div { class: "particle-field", "aria-hidden": "true",
            for particle in field.particles().iter() {
                {
                    let style = particle.css_style();
                    let glyph = particle.glyph.symbol();
                    rsx! {
                        div {
                            key: "{particle.index}",
                            class: "particle",
                            style: "{style}",
                            span { class: "particle-glyph", "{glyph}" }
                        }
                    }
                }
            }
        }
    }
}
