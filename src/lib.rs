//! Particle Fields - emitters, particles and inverse-square force fields in 2D
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vectors, particles, emitters, fields, tick)
//! - `renderer`: Read-only draw list for host renderers
//! - `driver`: Fixed-step frame driver
//! - `settings`: Data-driven configuration and initial scene

pub mod driver;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::FrameDriver;
pub use settings::{Scene, Settings, SettingsError};
pub use sim::{Emitter, Field, Particle, Polarity, SimConfig, Simulation, TickReport, Vector, tick};

/// Simulation configuration constants
pub mod consts {
    /// Display refresh rate assumed by the frame driver (one tick per frame)
    pub const FRAME_DT: f64 = 1.0 / 60.0;
    /// Maximum ticks per driver advance to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest elapsed interval the driver will account for in one advance
    pub const MAX_FRAME_ELAPSED: f64 = 0.1;

    /// Simulated region (width x height)
    pub const BOUNDS_WIDTH: f64 = 800.0;
    pub const BOUNDS_HEIGHT: f64 = 600.0;

    /// Emission is suppressed while more particles than this are alive
    pub const MAX_PARTICLES: usize = 200;
    /// Particles spawned by each emitter per tick
    pub const EMISSION_RATE: u32 = 4;

    /// Default emitter spread (radians either side of the base direction)
    pub const EMITTER_SPREAD: f64 = std::f64::consts::PI / 32.0;

    /// Side length of a rendered particle
    pub const PARTICLE_SIZE: f64 = 1.0;
    /// Side length of field and emitter markers
    pub const OBJECT_SIZE: f64 = 3.0;

    /// Seed used when none is configured
    pub const DEFAULT_SEED: u64 = 0x5eed;
}
