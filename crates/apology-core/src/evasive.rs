//! The evasive "no" button.
//!
//! Every hover or touch-start moves the button to a fresh random offset
//! inside a fixed box. It never advances the flow.

use crate::motion::Spring;
use crate::random::RandomSource;

/// Half-extent of the box the button may jump around in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvasiveRange {
    pub max_x: f64,
    pub max_y: f64,
}

impl EvasiveRange {
    pub const DEFAULT: EvasiveRange = EvasiveRange {
        max_x: 140.0,
        max_y: 90.0,
    };
}

impl Default for EvasiveRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Display offset of the button, in pixels, relative to its resting spot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EvasiveOffset {
    pub x: f64,
    pub y: f64,
}

impl EvasiveOffset {
    pub const ORIGIN: EvasiveOffset = EvasiveOffset { x: 0.0, y: 0.0 };

    /// Draw a new offset: two independent uniform draws over the range.
    ///
    /// Horizontal is drawn first, then vertical.
    pub fn random_within<R: RandomSource + ?Sized>(range: EvasiveRange, random: &mut R) -> Self {
        let x = (random.next_unit() * 2.0 - 1.0) * range.max_x;
        let y = (random.next_unit() * 2.0 - 1.0) * range.max_y;
        Self { x, y }
    }

    /// CSS transform placing the button at this offset.
    pub fn css_transform(&self) -> String {
        format!("translate({:.1}px, {:.1}px)", self.x, self.y)
    }
}

/// Spring used when the button jumps.
pub const EVASIVE_SPRING: Spring = Spring {
    stiffness: 260.0,
    damping: 18.0,
};
