//! Particle state and its per-frame evolution rule

use glam::Vec2;

/// A single ember.
///
/// Canvas space has its origin top-left with y pointing down. Time is in
/// milliseconds, so velocity is canvas units per millisecond.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Elapsed age in ms
    pub life: f32,
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Particle {
    /// A newborn particle
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self {
            life: 0.0,
            position,
            velocity,
        }
    }

    /// Advance by `dt` ms with explicit Euler, then damp the velocity.
    #[inline]
    #[must_use]
    pub fn evolve(self, dt: f32, dampening: f32) -> Self {
        Self {
            life: self.life + dt,
            position: self.position + self.velocity * dt,
            velocity: self.velocity * dampening,
        }
    }

    /// Grey level scaled by age: black at birth, white at `max_life`.
    #[inline]
    pub fn color(&self, max_life: f32) -> [f32; 3] {
        let t = self.life / max_life;
        [t, t, t]
    }

    #[inline]
    pub fn is_expired(&self, max_life: f32) -> bool {
        self.life >= max_life
    }
}
