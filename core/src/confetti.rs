use alloc::vec::Vec;
use rand::prelude::*;
use rand::rngs::SmallRng;
use serde::Serialize;

pub const CONFETTI_GLYPHS: [&str; 6] = ["✨", "💙", "🎉", "🌟", "💠", "⭐"];

/// Particles per burst.
pub const BURST_SIZE: usize = 50;

/// Extra time a particle stays in the page after its fall finishes.
pub const PARTICLE_LINGER_MS: u32 = 50;

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Particle {
    /// Horizontal start, in percent of the machine width.
    pub left_pct: f32,
    pub font_px: f32,
    pub glyph: &'static str,
    pub rotation_deg: f32,
    pub duration_ms: u32,
}

impl Particle {
    fn random(rng: &mut SmallRng) -> Self {
        Self {
            left_pct: 20.0 + rng.random_range(0.0..80.0),
            font_px: 10.0 + rng.random_range(0.0..16.0),
            glyph: CONFETTI_GLYPHS[rng.random_range(0..CONFETTI_GLYPHS.len())],
            rotation_deg: rng.random_range(0.0..360.0),
            duration_ms: 1100 + rng.random_range(0..900),
        }
    }

    /// How long after spawning the particle should be removed.
    pub const fn lifetime_ms(&self) -> u32 {
        self.duration_ms + PARTICLE_LINGER_MS
    }
}

/// One short-lived confetti burst.
pub fn burst(rng: &mut SmallRng) -> Vec<Particle> {
    (0..BURST_SIZE).map(|_| Particle::random(rng)).collect()
}

/// Time after which every particle of `particles` is gone.
pub fn burst_lifetime_ms(particles: &[Particle]) -> u32 {
    particles.iter().map(Particle::lifetime_ms).max().unwrap_or(0)
}
