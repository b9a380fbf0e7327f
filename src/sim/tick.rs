//! Per-frame simulation tick
//!
//! One tick is: emit, then for every live particle cull-or-advance.

use super::state::Simulation;

/// What a single tick did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Particles spawned this tick
    pub emitted: usize,
    /// Particles removed for leaving the bounds
    pub culled: usize,
    /// Particles alive after the tick
    pub alive: usize,
}

/// Advance the simulation by one unit timestep
pub fn tick(state: &mut Simulation) -> TickReport {
    let emitted = add_new_particles(state);
    let culled = update_particles(state);
    state.time_ticks += 1;

    let report = TickReport {
        emitted,
        culled,
        alive: state.particles.len(),
    };
    log::trace!(
        "tick {}: +{} -{} = {}",
        state.time_ticks,
        report.emitted,
        report.culled,
        report.alive
    );
    report
}

/// Emit a batch from every emitter unless the cap is already exceeded
///
/// The cap is checked once against the pre-emission count, so a tick can
/// overshoot it by up to `emitters * emission_rate`.
fn add_new_particles(state: &mut Simulation) -> usize {
    let Simulation {
        config,
        particles,
        emitters,
        rng,
        ..
    } = state;

    if particles.len() > config.max_particles {
        return 0;
    }

    let before = particles.len();
    for emitter in emitters.iter() {
        for _ in 0..config.emission_rate {
            particles.push(emitter.emit(rng));
        }
    }

    let emitted = particles.len() - before;
    if emitted > 0 && particles.len() > config.max_particles {
        log::debug!(
            "Particle cap {} reached ({} alive), emission suspended",
            config.max_particles,
            particles.len()
        );
    }
    emitted
}

/// Drop particles outside the bounds, advance the rest; returns the drop count
fn update_particles(state: &mut Simulation) -> usize {
    let Simulation {
        config,
        particles,
        fields,
        ..
    } = state;

    let before = particles.len();
    particles.retain_mut(|particle| {
        if !config.keeps(particle) {
            return false;
        }
        particle.accumulate_fields(fields.as_slice(), config.singularity);
        particle.integrate();
        true
    });
    before - particles.len()
}
