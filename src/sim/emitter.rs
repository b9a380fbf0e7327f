//! Particle emitters

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::particle::Particle;
use super::vector::{Vector, angle, from_angle, magnitude};
use crate::consts::EMITTER_SPREAD;

fn default_spread() -> f64 {
    EMITTER_SPREAD
}

/// A point source spraying particles around a base velocity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emitter {
    pub position: Vector,
    /// Direction and speed of emitted particles
    pub velocity: Vector,
    /// Maximum deviation (radians) either side of the base direction
    #[serde(default = "default_spread")]
    pub spread: f64,
}

impl Emitter {
    pub fn new(position: Vector, velocity: Vector) -> Self {
        Self::with_spread(position, velocity, EMITTER_SPREAD)
    }

    pub fn with_spread(position: Vector, velocity: Vector, spread: f64) -> Self {
        Self {
            position,
            velocity,
            spread,
        }
    }

    /// Spawn one particle, consuming a single uniform draw from `rng`
    ///
    /// The spray angle is uniform in `[base - spread, base + spread]`; speed
    /// always equals the base speed.
    pub fn emit<R: Rng + ?Sized>(&self, rng: &mut R) -> Particle {
        let u: f64 = rng.random();
        let spray = angle(self.velocity) + self.spread - u * self.spread * 2.0;
        let speed = magnitude(self.velocity);

        Particle::new(self.position, from_angle(spray, speed))
    }

    pub fn move_to(&mut self, position: Vector) {
        self.position = position;
    }
}
