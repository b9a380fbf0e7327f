//! End-to-end runs of the reference scene

use particle_fields::renderer::{self, RenderStyle};
use particle_fields::sim::vector::from_angle;
use particle_fields::{Emitter, Field, Settings, SimConfig, Simulation, Vector, tick};

/// Emitter firing straight at a repelling field, no spray
fn reference_scene() -> Simulation {
    let config = SimConfig {
        width: 800.0,
        height: 600.0,
        max_particles: 200,
        emission_rate: 4,
        ..Default::default()
    };
    let mut sim = Simulation::new(config, 12345);
    sim.add_emitter(Emitter::with_spread(
        Vector::new(100.0, 230.0),
        from_angle(0.0, 2.0),
        0.0,
    ));
    sim.add_field(Field::new(Vector::new(400.0, 230.0), -140.0));
    sim
}

#[test]
fn first_tick_emits_and_perturbs() {
    let mut sim = reference_scene();
    let report = tick(&mut sim);

    assert_eq!(report.emitted, 4);
    assert_eq!(sim.particles().len(), 4);
    for p in sim.particles() {
        // Slowed by the repelling field ahead
        assert!(p.vel.x < 2.0);
        assert!(p.vel.x > 1.99);
        assert_eq!(p.vel.y, 0.0);
        assert!((p.pos.x - 102.0).abs() < 0.01);
        assert_eq!(p.pos.y, 230.0);
        // -140 * 300 / 300^3
        assert!((p.acc.x + 140.0 / 90000.0).abs() < 1e-12);
    }
}

#[test]
fn emission_stops_one_batch_past_the_cap() {
    let mut sim = reference_scene();

    for n in 1..=50 {
        let report = tick(&mut sim);
        assert_eq!(report.culled, 0);
        assert_eq!(sim.particles().len(), 4 * n);
    }
    assert_eq!(sim.particles().len(), 200);

    // 200 is still within the cap, so one more batch goes out
    let report = tick(&mut sim);
    assert_eq!(report.emitted, 4);
    assert_eq!(sim.particles().len(), 204);

    for _ in 0..20 {
        let report = tick(&mut sim);
        assert_eq!(report.emitted, 0);
        assert_eq!(report.culled, 0);
        assert_eq!(sim.particles().len(), 204);
    }
}

#[test]
fn repelled_particles_leave_and_emission_resumes() {
    let mut sim = reference_scene();
    let mut culled = 0;
    let mut emitted_after_cap = 0;

    for t in 1..=1500 {
        let report = tick(&mut sim);
        assert!(sim.particles().len() <= 204);
        if t > 51 {
            culled += report.culled;
            emitted_after_cap += report.emitted;
        }
    }

    assert!(culled > 0, "particles should be pushed back out of bounds");
    assert!(emitted_after_cap > 0, "emission should resume once particles leave");
    // Nothing ever reaches the field at this speed
    assert!(sim.particles().iter().all(|p| p.pos.x < 400.0));
}

#[test]
fn default_settings_run_headless() {
    let settings = Settings::default();
    let mut sim = settings.build();

    for _ in 0..300 {
        tick(&mut sim);
        let config = sim.config();
        assert!(sim.particles().len() <= config.max_particles + config.emission_rate as usize);
    }

    let stats = sim.stats();
    assert_eq!(stats.ticks, 300);
    assert_eq!(stats.non_finite, 0);
    assert!(stats.mean_speed > 0.0);

    let list = renderer::build_frame(&sim, &RenderStyle::default());
    assert_eq!(list.particles.len(), 6 * sim.particles().len());
}

#[test]
fn live_field_repositioning() {
    let mut sim = reference_scene();
    tick(&mut sim);

    // Flip the field to an attractor behind the emitter between ticks
    let field = &mut sim.fields_mut()[0];
    field.move_to(Vector::new(50.0, 230.0));
    field.set_mass(140.0);
    tick(&mut sim);

    for p in sim.particles() {
        assert!(p.acc.x < 0.0);
    }
}
