//! Ambient particle field.
//!
//! A fixed set of swans, badgers and hearts drifting down behind the card.
//! Descriptors are drawn once per mount and never change afterwards.

use crate::random::RandomSource;

/// Number of particles in the field.
pub const PARTICLE_COUNT: usize = 14;

pub const MIN_DURATION_SECS: f64 = 12.0;
pub const MAX_DURATION_SECS: f64 = 22.0;
pub const MAX_DELAY_SECS: f64 = 5.0;

/// Start and end of the fall, in pixels relative to `top: -5%`.
pub const FALL_START_PX: f64 = -40.0;
pub const FALL_END_PX: f64 = 1200.0;

/// Opacity keyframes over one loop.
pub const OPACITY_CURVE: [f64; 3] = [0.0, 0.25, 0.0];

/// Glyph a particle shows.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ParticleGlyph {
    Swan,
    Badger,
    Heart,
}

impl ParticleGlyph {
    /// Glyphs cycle swan, badger, heart by particle index.
    pub fn for_index(index: usize) -> Self {
        match index % 3 {
            0 => ParticleGlyph::Swan,
            1 => ParticleGlyph::Badger,
            _ => ParticleGlyph::Heart,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ParticleGlyph::Swan => "🦢",
            ParticleGlyph::Badger => "🦡",
            ParticleGlyph::Heart => "💗",
        }
    }
}

/// One drifting particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleDescriptor {
    pub index: usize,
    /// Horizontal position, percent of the viewport width
    pub left_percent: f64,
    pub duration_secs: f64,
    pub delay_secs: f64,
    pub glyph: ParticleGlyph,
}

impl ParticleDescriptor {
    /// Draw position, duration and delay, in that order.
    pub fn random<R: RandomSource + ?Sized>(index: usize, random: &mut R) -> Self {
        let left_percent = random.next_unit() * 100.0;
        let duration_secs =
            (random.next_unit() * 10.0 + 10.0).clamp(MIN_DURATION_SECS, MAX_DURATION_SECS);
        let delay_secs = random.next_unit() * MAX_DELAY_SECS;
        Self {
            index,
            left_percent,
            duration_secs,
            delay_secs,
            glyph: ParticleGlyph::for_index(index),
        }
    }

    /// Inline style for the particle element.
    pub fn css_style(&self) -> String {
        format!(
            "left: {:.2}%; top: -5%; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.left_percent, self.duration_secs, self.delay_secs
        )
    }
}

/// Keyframes for the fall: top to bottom, fading in then out.
pub fn drift_keyframes() -> String {
    let [start, peak, end] = OPACITY_CURVE;
    format!(
        "@keyframes particle-drift {{ \
         0% {{ transform: translateY({FALL_START_PX}px); opacity: {start}; }} \
         50% {{ opacity: {peak}; }} \
         100% {{ transform: translateY({FALL_END_PX}px); opacity: {end}; }} }}"
    )
}

/// Lazily draw the descriptors of one field.
pub fn descriptors<'a, R: RandomSource + ?Sized>(
    random: &'a mut R,
) -> impl Iterator<Item = ParticleDescriptor> + 'a {
    (0..PARTICLE_COUNT).map(move |index| ParticleDescriptor::random(index, &mut *random))
}

/// The descriptors of one mounted field.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    particles: Vec<ParticleDescriptor>,
}

impl ParticleField {
    pub fn generate<R: RandomSource + ?Sized>(random: &mut R) -> Self {
        let particles: Vec<_> = descriptors(random).collect();
        tracing::debug!(count = particles.len(), "particle field generated");
        Self { particles }
    }

    pub fn particles(&self) -> &[ParticleDescriptor] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    #[test]
    fn glyphs_cycle() {
        assert_eq!(ParticleGlyph::for_index(0), ParticleGlyph::Swan);
        assert_eq!(ParticleGlyph::for_index(1), ParticleGlyph::Badger);
        assert_eq!(ParticleGlyph::for_index(2), ParticleGlyph::Heart);
        assert_eq!(ParticleGlyph::for_index(13), ParticleGlyph::Badger);
    }

    #[test]
    fn low_draw_clamps_duration_up() {
        let mut random = ScriptedRandom::new(vec![0.0]);
        let particle = ParticleDescriptor::random(0, &mut random);
        assert_eq!(particle.left_percent, 0.0);
        assert_eq!(particle.duration_secs, MIN_DURATION_SECS);
        assert_eq!(particle.delay_secs, 0.0);
    }

    #[test]
    fn high_draw_stays_inside_duration_range() {
        let mut random = ScriptedRandom::new(vec![1.0]);
        let particle = ParticleDescriptor::random(5, &mut random);
        assert_eq!(particle.left_percent, 100.0);
        assert_eq!(particle.duration_secs, 20.0);
        assert_eq!(particle.delay_secs, MAX_DELAY_SECS);
        assert_eq!(particle.glyph, ParticleGlyph::Heart);
    }

    #[test]
    fn descriptors_are_lazy() {
        let mut random = ScriptedRandom::new(vec![0.5]);
        let first_two: Vec<_> = descriptors(&mut random).take(2).collect();
        assert_eq!(first_two.len(), 2);
        assert_eq!(random.draws(), 6);
    }

    #[test]
    fn field_has_fixed_count() {
        let mut random = ScriptedRandom::new(vec![0.2, 0.7, 0.4]);
        let field = ParticleField::generate(&mut random);
        assert_eq!(field.len(), PARTICLE_COUNT);
        assert!(!field.is_empty());
        assert_eq!(random.draws(), PARTICLE_COUNT * 3);
    }

    #[test]
    fn keyframes_cover_the_fall() {
        let keyframes = drift_keyframes();
        assert!(keyframes.starts_with("@keyframes particle-drift {"));
        assert!(keyframes.contains("translateY(-40px); opacity: 0;"));
        assert!(keyframes.contains("50% { opacity: 0.25; }"));
        assert!(keyframes.contains("translateY(1200px); opacity: 0;"));
    }

    #[test]
    fn css_style_format() {
        let particle = ParticleDescriptor {
            index: 0,
            left_percent: 12.5,
            duration_secs: 15.0,
            delay_secs: 2.25,
            glyph: ParticleGlyph::Swan,
        };
        assert_eq!(
            particle.css_style(),
            "left: 12.50%; top: -5%; animation-duration: 15.00s; animation-delay: 2.25s;"
        );
    }
}
