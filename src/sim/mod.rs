//! Deterministic simulation module
//!
//! All particle physics lives here. This module must be pure and deterministic:
//! - Unit timestep per tick
//! - Seeded RNG only
//! - Stable particle order (emission order, culling never reorders)
//! - No rendering or platform dependencies

pub mod emitter;
pub mod field;
pub mod particle;
pub mod state;
pub mod tick;
pub mod vector;

pub use emitter::Emitter;
pub use field::{Field, Polarity};
pub use particle::{Particle, SingularityPolicy};
pub use state::{NonFinitePolicy, RngState, SimConfig, SimStats, Simulation};
pub use tick::{TickReport, tick};
pub use vector::Vector;
