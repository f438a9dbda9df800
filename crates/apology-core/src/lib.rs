//! Apology Card Core Library
//!
//! Everything the card does that is not markup: the four-step narrative
//! machine, the randomized cosmetics (evasive button, floating particles),
//! spring easing and the personalization content.
//!
//! ## Overview
//!
//! The card walks through four steps: intro, apology, reunion and a final
//! voucher. A single [`PresentationFlow`] owns the current step, the
//! `forgiven` flag and the evasive button offset. All randomness goes
//! through [`RandomSource`] so tests can script exact draws.
//!
//! ## Quick Start
//!
//! ```
//! use apology_core::{Action, PresentationFlow, Step, ThreadRandom};
//!
//! let mut flow = PresentationFlow::new();
//! let mut random = ThreadRandom;
//!
//! flow.apply(Action::Primary, &mut random);
//! assert_eq!(flow.step(), Step::Apology);
//!
//! flow.apply(Action::Accept, &mut random);
//! assert!(flow.is_forgiven());
//! ```

pub mod content;
pub mod error;
pub mod evasive;
pub mod flow;
pub mod motion;
pub mod particles;
pub mod random;

// Re-exports
pub use content::{CardContent, CardImages};
pub use error::{CardError, CardResult};
pub use evasive::{EvasiveOffset, EvasiveRange};
pub use flow::{Action, Outcome, PresentationFlow, Step};
pub use motion::{CharacterPose, Spring, StepMotion};
pub use particles::{ParticleDescriptor, ParticleField, ParticleGlyph, PARTICLE_COUNT};
pub use random::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
