use std::thread;
use std::time::{Duration, Instant};

use tracing::info;

use pi_vector_eyes::input::ExpressionSource;
use pi_vector_eyes::render::Renderer;
use pi_vector_eyes::{FaceConfig, VectorFace};

// Log one headless frame per second at the default rate
#[cfg(not(feature = "matrix"))]
const TRACE_EVERY_FRAMES: u64 = 60;

// ============================================================================
// MAIN ENTRY POINT
// ============================================================================

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = FaceConfig::from_env()?;
    let mut face = VectorFace::from_config(config)?;

    let mut source = open_source();
    let mut renderer = open_renderer()?;
    info!("🚀 Starting animation loop ({} → {})", source.name(), renderer.name());

    let frame_budget = Duration::from_secs_f64(config.frame_secs());
    let mut last = Instant::now();

    // Animation loop (run indefinitely - press Ctrl+C to stop)
    loop {
        let frame_start = Instant::now();
        let dt = frame_start.duration_since(last).as_secs_f64();
        last = frame_start;

        if let Some(expression) = source.poll(dt) {
            face.set_expression(expression);
        }
        face.tick(dt);
        renderer.draw(&face.frame());

        if let Some(rest) = frame_budget.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }
}

#[cfg(feature = "gamepad")]
fn open_source() -> Box<dyn ExpressionSource> {
    use pi_vector_eyes::input::gamepad::{print_control_mapping, GamepadSource};
    use pi_vector_eyes::input::ScriptedSource;

    match GamepadSource::new() {
        Ok(source) => {
            print_control_mapping();
            Box::new(source)
        }
        Err(e) => {
            tracing::warn!("⚠️  Could not initialize gamepad: {}. Playing demo script.", e);
            Box::new(ScriptedSource::demo())
        }
    }
}

#[cfg(not(feature = "gamepad"))]
fn open_source() -> Box<dyn ExpressionSource> {
    Box::new(pi_vector_eyes::input::ScriptedSource::demo())
}

#[cfg(feature = "matrix")]
fn open_renderer() -> Result<Box<dyn Renderer>, Box<dyn std::error::Error>> {
    Ok(Box::new(pi_vector_eyes::render::MatrixRenderer::new(1.0)?))
}

#[cfg(not(feature = "matrix"))]
fn open_renderer() -> Result<Box<dyn Renderer>, Box<dyn std::error::Error>> {
    Ok(Box::new(pi_vector_eyes::render::TraceRenderer::new(TRACE_EVERY_FRAMES)))
}
