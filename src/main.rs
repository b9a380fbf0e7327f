//! Particle Fields entry point
//!
//! Headless runner: builds the configured scene, drives it for a number of
//! frames and prints the final stats as JSON.
//!
//! Usage: `particle-fields [settings.json] [frames]`

#[cfg(not(target_arch = "wasm32"))]
use particle_fields::{FrameDriver, Settings, renderer};

/// Frames run when no count is given (ten seconds at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_FRAMES: u64 = 600;

/// Progress is logged every this many frames
#[cfg(not(target_arch = "wasm32"))]
const LOG_INTERVAL: u64 = 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Particle Fields (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let frames = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::warn!("Invalid frame count ({}), running {}", e, DEFAULT_FRAMES);
            DEFAULT_FRAMES
        }
        None => DEFAULT_FRAMES,
    };

    let mut sim = settings.build();
    let mut driver = FrameDriver::default();

    let mut remaining = frames;
    while remaining > 0 {
        let batch = remaining.min(LOG_INTERVAL);
        let report = driver.run_frames(&mut sim, batch);
        remaining -= batch;

        let list = renderer::build_frame(&sim, &settings.style);
        log::info!(
            "frame {}: {} alive (+{} -{}), {} vertices",
            driver.frames(),
            report.alive,
            report.emitted,
            report.culled,
            list.len()
        );
    }

    match serde_json::to_string_pretty(&sim.stats()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize stats: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Library-only on the web; hosts drive `Simulation` directly
}
