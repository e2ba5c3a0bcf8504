//! Gravity integrator for the falling-tile variant.
//!
//! Each tracked object carries a falling flag and a velocity integrator
//! with constant acceleration and no rest speed. The vertical value is
//! clamped to a floor; reaching the floor clears the flag so the object
//! becomes eligible to fall again on the next spectrum sample.

use crate::params::GravityConfig;

#[derive(Debug, Clone, Copy, Default)]
pub struct GravityState {
    pub falling: bool,
    pub velocity: f32,
    pub y: f32,
}

impl GravityState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fall if not already falling.
    ///
    /// The mapped velocity is negated before use: loud samples push the
    /// object down, quiet ones launch it up from the floor.
    pub fn trigger(&mut self, mapped_velocity: f32) {
        if self.falling {
            return;
        }
        self.velocity = -mapped_velocity;
        self.falling = true;
    }

    /// Advance the integrator by `dt_s`. Clamps to the floor and clears
    /// the falling flag on contact.
    pub fn advance(&mut self, dt_s: f32, config: &GravityConfig) {
        if !self.falling {
            return;
        }
        self.velocity += config.acceleration * dt_s;
        self.y += self.velocity * dt_s;
        if self.y <= config.floor_y {
            self.y = config.floor_y;
            self.velocity = 0.0;
            self.falling = false;
        }
    }
}
