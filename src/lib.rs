pub mod camera;
pub mod config;
pub mod display;
pub mod error;
pub mod globe;
pub mod image;
pub mod input;
pub mod pacing;
pub mod ray;
pub mod renderer;
pub mod screen;
pub mod sphere;
pub mod state;
pub mod texture;
pub mod vec3;

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::{info, warn};

pub use config::GlobeConfig;
pub use error::{GlobeError, GlobeResult};
pub use globe::Globe;
pub use image::{Image, Rgb};
pub use state::{AnimationState, FrameControl};
pub use texture::{TextureMap, TextureSampler};

use display::TerminalDisplay;
use input::InputController;
use pacing::FramePacer;

pub fn run(config: &GlobeConfig, texture: TextureMap, full_color: bool) -> Result<()> {
    let mut state = AnimationState::new(config.frame_rate, config.rotation_rate, config.rotation_rate_max)
        .context("Invalid animation settings")?;
    let mut globe = Globe::new(config, texture).context("Failed to set up the globe")?;
    let mut input = InputController::new();
    let mut pacer = FramePacer::new(config.frame_rate, config.heartbeat_interval_secs);

    let mut display = TerminalDisplay::new(full_color);
    display.enter().context("Failed to prepare the terminal")?;

    let mut frame_count: u64 = 0;

    // Main loop
    loop {
        input.poll(&mut state, Duration::ZERO)?;
        if state.should_terminate() {
            break;
        }

        if pacer.tick() {
            info!("heartbeat of main loop after {:.3}s", pacer.elapsed().as_secs_f64());
        }

        let render_start = Instant::now();
        match globe.draw_next_frame(&state.snapshot()) {
            Ok(_) => frame_count += 1,
            // the previous front frame is shown again
            Err(e) => warn!("frame dropped: {}", e),
        }
        let render_ms = render_start.elapsed().as_secs_f64() * 1000.0;

        let status = format!(
            "Frame: {} | FPS: {:.1} | Render: {:.2}ms | Rate: {:+.1}°/s{}",
            frame_count,
            pacer.fps(),
            render_ms,
            state.rotation_rate(),
            if state.is_paused() { " | paused" } else { "" }
        );
        display.show(globe.front_frame(), &status)?;

        pacer.sleep_rest_of_cycle();
    }

    display.leave()?;
    println!("Exiting.");
    Ok(())
}
