//! The card's step machine.
//!
//! ```text
//! intro    --(primary)--> apology
//! apology  --(accept)---> reunion   [forgiven = true]
//! apology  --(decline)--> apology   [evasive button moves]
//! reunion  --(primary)--> voucher
//! voucher  --(reset)----> intro     [forgiven = false]
//! ```
//!
//! Any other action on a step is ignored.

use std::fmt;

use crate::evasive::{EvasiveOffset, EvasiveRange};
use crate::motion::CharacterPose;
use crate::random::RandomSource;

/// The four narrative steps, in display order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Step {
    #[default]
    Intro,
    Apology,
    Reunion,
    Voucher,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Intro, Step::Apology, Step::Reunion, Step::Voucher];

    /// Stable lowercase name, used as the render key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Intro => "intro",
            Step::Apology => "apology",
            Step::Reunion => "reunion",
            Step::Voucher => "voucher",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user gesture on one of the card's controls.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Action {
    /// The main "continue" button on intro and reunion
    Primary,
    /// "Let's fix this" on the apology step
    Accept,
    /// Hover or touch on the evasive "no" button
    Decline,
    /// "See it again" on the voucher
    Reset,
}

/// What applying an action did.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Outcome {
    Advanced { from: Step, to: Step },
    Relocated(EvasiveOffset),
    Ignored,
}

/// Session state of the card.
///
/// Owned by the root component; nothing here outlives the page view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PresentationFlow {
    step: Step,
    forgiven: bool,
    evasive: EvasiveOffset,
    evasive_range: EvasiveRange,
}

impl PresentationFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_evasive_range(mut self, range: EvasiveRange) -> Self {
        self.evasive_range = range;
        self
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn is_forgiven(&self) -> bool {
        self.forgiven
    }

    pub fn evasive_offset(&self) -> EvasiveOffset {
        self.evasive
    }

    pub fn pose(&self) -> CharacterPose {
        CharacterPose::for_forgiven(self.forgiven)
    }

    /// Jump straight to `target`. No legality check.
    pub fn advance(&mut self, target: Step) {
        self.step = target;
    }

    pub fn set_forgiven(&mut self, forgiven: bool) {
        self.forgiven = forgiven;
    }

    /// Move the evasive button to a fresh random offset.
    pub fn relocate_evasive<R: RandomSource + ?Sized>(&mut self, random: &mut R) -> EvasiveOffset {
        self.evasive = EvasiveOffset::random_within(self.evasive_range, random);
        self.evasive
    }

    /// Restore the state the card starts with.
    pub fn reset(&mut self) {
        let range = self.evasive_range;
        *self = Self::default().with_evasive_range(range);
    }

    /// Apply a user gesture according to the transition table.
    pub fn apply<R: RandomSource + ?Sized>(&mut self, action: Action, random: &mut R) -> Outcome {
        let from = self.step;
        let outcome = match (from, action) {
            (Step::Intro, Action::Primary) => {
                self.advance(Step::Apology);
                Outcome::Advanced { from, to: Step::Apology }
            }
            (Step::Apology, Action::Accept) => {
                self.set_forgiven(true);
                self.advance(Step::Reunion);
                Outcome::Advanced { from, to: Step::Reunion }
            }
            (Step::Apology, Action::Decline) => Outcome::Relocated(self.relocate_evasive(random)),
            (Step::Reunion, Action::Primary) => {
                self.advance(Step::Voucher);
                Outcome::Advanced { from, to: Step::Voucher }
            }
            (Step::Voucher, Action::Reset) => {
                self.reset();
                Outcome::Advanced { from, to: Step::Intro }
            }
            _ => Outcome::Ignored,
        };

        match outcome {
            Outcome::Advanced { from, to } => {
                tracing::debug!(%from, %to, forgiven = self.forgiven, "step advanced");
            }
            Outcome::Relocated(offset) => {
                tracing::trace!(x = offset.x, y = offset.y, "evasive button relocated");
            }
            Outcome::Ignored => {
                tracing::trace!(step = %from, ?action, "action ignored");
            }
        }

        outcome
    }
}
