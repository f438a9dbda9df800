//! Animation parameters shared by the card's views.
//!
//! The views are plain CSS; this module turns spring and pose descriptions
//! into the transition and transform strings the components emit.

use crate::flow::Step;

/// A damped spring with unit mass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
}

impl Spring {
    /// Damping ratio `c / (2 * sqrt(k))`.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * self.stiffness.sqrt())
    }

    /// Approximate time to settle within 2%, `4 / (zeta * omega)` = `8 / c`.
    pub fn settle_secs(&self) -> f64 {
        if self.damping <= 0.0 {
            return 1.0;
        }
        8.0 / self.damping
    }

    /// Cubic-bezier that overshoots for underdamped springs.
    pub fn css_easing(&self) -> &'static str {
        if self.damping_ratio() < 1.0 {
            "cubic-bezier(0.34, 1.56, 0.64, 1)"
        } else {
            "cubic-bezier(0.22, 1, 0.36, 1)"
        }
    }

    /// `transition` value animating `property` with this spring.
    pub fn css_transition(&self, property: &str) -> String {
        format!("{} {:.2}s {}", property, self.settle_secs(), self.css_easing())
    }
}

/// Spring for the goose sliding toward the badger.
pub const GOOSE_SPRING: Spring = Spring {
    stiffness: 140.0,
    damping: 14.0,
};

/// Spring for the badger's scale.
pub const BADGER_SPRING: Spring = Spring {
    stiffness: 150.0,
    damping: 12.0,
};

/// Pose of the two characters on the apology step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CharacterPose {
    /// Horizontal shift of the goose, in pixels
    pub goose_shift_x: f64,
    /// Goose rotation, in degrees
    pub goose_rotate: f64,
    pub badger_scale: f64,
}

impl CharacterPose {
    pub fn for_forgiven(forgiven: bool) -> Self {
        if forgiven {
            Self {
                goose_shift_x: 40.0,
                goose_rotate: 0.0,
                badger_scale: 1.05,
            }
        } else {
            Self {
                goose_shift_x: 0.0,
                goose_rotate: -2.0,
                badger_scale: 1.0,
            }
        }
    }

    pub fn goose_transform(&self) -> String {
        format!(
            "translateX({}px) rotate({}deg)",
            self.goose_shift_x, self.goose_rotate
        )
    }

    pub fn badger_transform(&self) -> String {
        format!("scale({})", self.badger_scale)
    }
}

/// Entry animation of a step's view.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StepMotion {
    /// Slide up from below while fading in
    Rise,
    /// Grow from 98% while fading in
    ScaleIn,
}

impl StepMotion {
    pub fn for_step(step: Step) -> Self {
        match step {
            Step::Intro | Step::Voucher => StepMotion::Rise,
            Step::Apology | Step::Reunion => StepMotion::ScaleIn,
        }
    }

    /// CSS class carrying the keyframes.
    pub fn class(&self) -> &'static str {
        match self {
            StepMotion::Rise => "step-rise",
            StepMotion::ScaleIn => "step-scale-in",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evasive_spring_is_underdamped() {
        let spring = crate::evasive::EVASIVE_SPRING;
        assert!(spring.damping_ratio() < 1.0);
        assert_eq!(spring.css_easing(), "cubic-bezier(0.34, 1.56, 0.64, 1)");
    }

    #[test]
    fn heavily_damped_spring_does_not_overshoot() {
        let spring = Spring {
            stiffness: 100.0,
            damping: 40.0,
        };
        assert!(spring.damping_ratio() > 1.0);
        assert_eq!(spring.css_easing(), "cubic-bezier(0.22, 1, 0.36, 1)");
    }

    #[test]
    fn css_transition_uses_settle_time() {
        let spring = Spring {
            stiffness: 100.0,
            damping: 16.0,
        };
        assert_eq!(
            spring.css_transition("transform"),
            "transform 0.50s cubic-bezier(0.34, 1.56, 0.64, 1)"
        );
    }

    #[test]
    fn zero_damping_falls_back() {
        let spring = Spring {
            stiffness: 100.0,
            damping: 0.0,
        };
        assert_eq!(spring.settle_secs(), 1.0);
    }

    #[test]
    fn pose_follows_forgiven() {
        let sad = CharacterPose::for_forgiven(false);
        assert_eq!(sad.goose_transform(), "translateX(0px) rotate(-2deg)");
        assert_eq!(sad.badger_transform(), "scale(1)");

        let happy = CharacterPose::for_forgiven(true);
        assert_eq!(happy.goose_transform(), "translateX(40px) rotate(0deg)");
        assert_eq!(happy.badger_transform(), "scale(1.05)");
    }

    #[test]
    fn step_motion_classes() {
        assert_eq!(StepMotion::for_step(Step::Intro), StepMotion::Rise);
        assert_eq!(StepMotion::for_step(Step::Apology), StepMotion::ScaleIn);
        assert_eq!(StepMotion::for_step(Step::Reunion), StepMotion::ScaleIn);
        assert_eq!(StepMotion::for_step(Step::Voucher), StepMotion::Rise);
        assert_eq!(StepMotion::Rise.class(), "step-rise");
        assert_eq!(StepMotion::ScaleIn.class(), "step-scale-in");
    }
}
