//! Particles and per-tick force accumulation

use serde::{Deserialize, Serialize};

use super::field::Field;
use super::vector::{Vector, add};

/// How a particle sitting exactly on a field is handled
///
/// With `Propagate` the force is `mass / 0`, so the particle's acceleration
/// (and from there its position) becomes infinite or NaN. `Soften` floors the
/// squared distance at `epsilon` instead.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum SingularityPolicy {
    #[default]
    Propagate,
    Soften { epsilon: f64 },
}

impl SingularityPolicy {
    #[inline]
    fn apply(&self, r2: f64) -> f64 {
        match *self {
            SingularityPolicy::Propagate => r2,
            SingularityPolicy::Soften { epsilon } => r2.max(epsilon),
        }
    }
}

/// A simulated point mass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vector,
    pub vel: Vector,
    /// Recomputed from the fields every tick, never carried over
    pub acc: Vector,
}

impl Particle {
    pub fn new(pos: Vector, vel: Vector) -> Self {
        Self {
            pos,
            vel,
            acc: Vector::ZERO,
        }
    }

    /// Semi-implicit Euler step at unit timestep
    pub fn integrate(&mut self) {
        self.vel = add(self.vel, self.acc);
        self.pos = add(self.pos, self.vel);
    }

    /// Replace the acceleration with the summed pull of every field
    pub fn accumulate_fields(&mut self, fields: &[Field], policy: SingularityPolicy) {
        let mut total = Vector::ZERO;

        for field in fields {
            let d = field.position - self.pos;
            let r2 = policy.apply(d.x * d.x + d.y * d.y);
            // mass / r^3: inverse square along the unnormalized displacement
            let force = field.mass() / r2.powf(1.5);
            total = add(total, d * force);
        }

        self.acc = total;
    }

    /// Whether the particle lies inside `[0, width] x [0, height]`
    ///
    /// NaN coordinates compare false against both edges and count as inside.
    #[inline]
    pub fn in_bounds(&self, width: f64, height: f64) -> bool {
        !(self.pos.x < 0.0 || self.pos.x > width || self.pos.y < 0.0 || self.pos.y > height)
    }
}
