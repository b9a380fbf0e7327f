//! Fixed-step frame driver
//!
//! Hosts report elapsed wall time; the driver turns it into whole ticks at the
//! configured frame rate. Each tick is one unit timestep regardless of the
//! rate, so changing `frame_dt` changes playback speed, not the physics.

use crate::consts::{FRAME_DT, MAX_FRAME_ELAPSED, MAX_SUBSTEPS};
use crate::sim::{Simulation, TickReport, tick};

#[derive(Debug, Clone)]
pub struct FrameDriver {
    /// Wall time per tick (seconds)
    pub frame_dt: f64,
    /// Upper bound on ticks run by one `advance`
    pub max_substeps: u32,
    accumulator: f64,
    frames: u64,
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new(FRAME_DT)
    }
}

impl FrameDriver {
    pub fn new(frame_dt: f64) -> Self {
        Self {
            frame_dt,
            max_substeps: MAX_SUBSTEPS,
            accumulator: 0.0,
            frames: 0,
        }
    }

    /// Ticks run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Account for `elapsed` seconds and run every tick now due
    ///
    /// Returns the combined report of the ticks that ran.
    pub fn advance(&mut self, sim: &mut Simulation, elapsed: f64) -> TickReport {
        // NaN would poison the accumulator for good
        let elapsed = if elapsed.is_finite() {
            elapsed.clamp(0.0, MAX_FRAME_ELAPSED)
        } else {
            0.0
        };
        self.accumulator += elapsed;

        let mut total = TickReport::default();
        let mut substeps = 0;
        while self.accumulator >= self.frame_dt && substeps < self.max_substeps {
            let report = tick(sim);
            total.emitted += report.emitted;
            total.culled += report.culled;
            total.alive = report.alive;

            self.accumulator -= self.frame_dt;
            self.frames += 1;
            substeps += 1;
        }

        if substeps == self.max_substeps && self.accumulator >= self.frame_dt {
            log::debug!("Frame driver fell behind, dropping {:.3}s", self.accumulator);
            self.accumulator = 0.0;
        }

        if substeps == 0 {
            total.alive = sim.particles().len();
        }
        total
    }

    /// Run exactly `frames` ticks, ignoring wall time
    pub fn run_frames(&mut self, sim: &mut Simulation, frames: u64) -> TickReport {
        let mut total = TickReport::default();
        for _ in 0..frames {
            let report = tick(sim);
            total.emitted += report.emitted;
            total.culled += report.culled;
            self.frames += 1;
        }
        total.alive = sim.particles().len();
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimConfig;

    #[test]
    fn test_accumulates_partial_frames() {
        let mut sim = Simulation::new(SimConfig::default(), 1);
        let mut driver = FrameDriver::new(0.25);

        driver.advance(&mut sim, 0.0625);
        assert_eq!(sim.time_ticks, 0);
        driver.advance(&mut sim, 0.0625);
        driver.advance(&mut sim, 0.0625);
        assert_eq!(sim.time_ticks, 0);
        driver.advance(&mut sim, 0.0625);
        assert_eq!(sim.time_ticks, 1);
        assert_eq!(driver.frames(), 1);
    }

    #[test]
    fn test_substeps_are_capped() {
        let mut sim = Simulation::new(SimConfig::default(), 1);
        let mut driver = FrameDriver::new(0.001);
        driver.advance(&mut sim, 10.0);
        assert_eq!(sim.time_ticks, MAX_SUBSTEPS as u64);

        // Backlog was dropped rather than replayed
        driver.advance(&mut sim, 0.0);
        assert_eq!(sim.time_ticks, MAX_SUBSTEPS as u64);
    }

    #[test]
    fn test_negative_elapsed_is_ignored() {
        let mut sim = Simulation::new(SimConfig::default(), 1);
        let mut driver = FrameDriver::default();
        driver.advance(&mut sim, -1.0);
        assert_eq!(sim.time_ticks, 0);
    }

    #[test]
    fn test_non_finite_elapsed_is_ignored() {
        let mut sim = Simulation::new(SimConfig::default(), 1);
        let mut driver = FrameDriver::new(0.25);

        driver.advance(&mut sim, f64::NAN);
        driver.advance(&mut sim, f64::INFINITY);
        assert_eq!(sim.time_ticks, 0);

        driver.advance(&mut sim, 0.0625);
        driver.advance(&mut sim, 0.0625);
        driver.advance(&mut sim, 0.0625);
        driver.advance(&mut sim, 0.0625);
        assert_eq!(sim.time_ticks, 1);
    }

    #[test]
    fn test_run_frames_sums_reports() {
        let mut sim = crate::settings::Settings::default().build();
        let mut driver = FrameDriver::default();
        let report = driver.run_frames(&mut sim, 3);
        assert_eq!(report.emitted, 12);
        assert_eq!(report.alive, 12);
        assert_eq!(driver.frames(), 3);
    }
}
