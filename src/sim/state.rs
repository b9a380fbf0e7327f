//! Simulation state and configuration
//!
//! Everything a tick reads or writes lives on [`Simulation`]; there is no
//! process-wide state.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::emitter::Emitter;
use super::field::Field;
use super::particle::{Particle, SingularityPolicy};
use super::vector::{is_finite, magnitude};
use crate::consts::*;

/// What happens to particles whose position is no longer finite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NonFinitePolicy {
    /// Treat NaN/infinite positions as out of bounds
    #[default]
    Cull,
    /// Keep them; NaN never fails the bounds test so they live forever
    Keep,
}

/// Scalar simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Width of the bounds rectangle anchored at the origin
    pub width: f64,
    /// Height of the bounds rectangle anchored at the origin
    pub height: f64,
    /// Emission runs only while the live count is at most this
    pub max_particles: usize,
    /// Particles per emitter per tick
    pub emission_rate: u32,
    pub singularity: SingularityPolicy,
    pub non_finite: NonFinitePolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: BOUNDS_WIDTH,
            height: BOUNDS_HEIGHT,
            max_particles: MAX_PARTICLES,
            emission_rate: EMISSION_RATE,
            singularity: SingularityPolicy::default(),
            non_finite: NonFinitePolicy::default(),
        }
    }
}

impl SimConfig {
    /// Whether a particle survives the cull step
    #[inline]
    pub fn keeps(&self, particle: &Particle) -> bool {
        if self.non_finite == NonFinitePolicy::Cull && !is_finite(particle.pos) {
            return false;
        }
        particle.in_bounds(self.width, self.height)
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Summary of a simulation at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimStats {
    pub ticks: u64,
    pub particles: usize,
    pub emitters: usize,
    pub fields: usize,
    /// Particles whose position is NaN or infinite
    pub non_finite: usize,
    /// Mean particle speed over finite particles (0 when there are none)
    pub mean_speed: f64,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Seed the RNG was built from, unset when a generator was injected
    pub rng_state: Option<RngState>,
    /// Ticks run so far
    pub time_ticks: u64,
    pub(crate) config: SimConfig,
    /// Live particles, in emission order
    pub(crate) particles: Vec<Particle>,
    pub(crate) emitters: Vec<Emitter>,
    pub(crate) fields: Vec<Field>,
    pub(crate) rng: Pcg32,
}

impl Simulation {
    /// Create an empty simulation seeded with `seed`
    pub fn new(config: SimConfig, seed: u64) -> Self {
        let rng_state = RngState::new(seed);
        let rng = rng_state.to_rng();
        Self::from_parts(config, Some(rng_state), rng)
    }

    /// Create an empty simulation drawing spray angles from `rng`
    pub fn with_rng(config: SimConfig, rng: Pcg32) -> Self {
        Self::from_parts(config, None, rng)
    }

    fn from_parts(config: SimConfig, rng_state: Option<RngState>, rng: Pcg32) -> Self {
        log::info!(
            "Simulation {}x{}, max_particles={}, emission_rate={}",
            config.width,
            config.height,
            config.max_particles,
            config.emission_rate
        );
        Self {
            rng_state,
            time_ticks: 0,
            config,
            particles: Vec::new(),
            emitters: Vec::new(),
            fields: Vec::new(),
            rng,
        }
    }

    pub fn add_emitter(&mut self, emitter: Emitter) {
        self.emitters.push(emitter);
    }

    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Insert a particle directly, bypassing the emitters
    pub fn spawn(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn emitters(&self) -> &[Emitter] {
        &self.emitters
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn emitters_mut(&mut self) -> &mut [Emitter] {
        &mut self.emitters
    }

    pub fn fields_mut(&mut self) -> &mut [Field] {
        &mut self.fields
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SimConfig {
        &mut self.config
    }

    /// Drop every live particle, keeping emitters and fields
    pub fn clear_particles(&mut self) {
        self.particles.clear();
    }

    pub fn stats(&self) -> SimStats {
        let (finite, speed_sum) = self
            .particles
            .iter()
            .filter(|p| is_finite(p.pos) && is_finite(p.vel))
            .fold((0usize, 0.0), |(n, sum), p| (n + 1, sum + magnitude(p.vel)));

        SimStats {
            ticks: self.time_ticks,
            particles: self.particles.len(),
            emitters: self.emitters.len(),
            fields: self.fields.len(),
            non_finite: self
                .particles
                .iter()
                .filter(|p| !is_finite(p.pos))
                .count(),
            mean_speed: if finite == 0 { 0.0 } else { speed_sum / finite as f64 },
        }
    }

    /// Advance by one tick
    pub fn tick(&mut self) -> super::tick::TickReport {
        super::tick::tick(self)
    }
}
