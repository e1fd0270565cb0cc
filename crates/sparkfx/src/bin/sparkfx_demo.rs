//! # SparkFX Demo
//!
//! Headless scene runner: triggers a few built-in effects, drives the loop
//! until everything drains (or `--frames` runs out), logs runtime stats and
//! optionally writes the last frame that still had particles as a PNG.
//!
//! ```text
//! sparkfx-demo [--config runtime.toml] [--frames N] [--png out.png]
//! ```
//!
//! Log level follows `RUST_LOG` (default `info`).

use std::process::ExitCode;

use sparkfx::{builtin_runtime, EffectOptions, RecordingSurface, Runtime, RuntimeConfig};
use tracing::{error, info};
use tracing_subscriber::filter::EnvFilter;

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;
const DEFAULT_FRAMES: u32 = 600;

struct Args {
    config: Option<String>,
    frames: u32,
    png: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let value_of = |flag: &str| -> Result<Option<String>, String> {
        match args.iter().position(|a| a == flag) {
            Some(i) => args
                .get(i + 1)
                .cloned()
                .map(Some)
                .ok_or_else(|| format!("{flag} needs a value")),
            None => Ok(None),
        }
    };

    let frames = match value_of("--frames")? {
        Some(raw) => raw
            .parse()
            .map_err(|_| format!("--frames expects a number, got {raw:?}"))?,
        None => DEFAULT_FRAMES,
    };

    Ok(Args {
        config: value_of("--config")?,
        frames,
        png: value_of("--png")?,
    })
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// The scene: one of each built-in, spread over the canvas.
fn stage(runtime: &mut Runtime) -> sparkfx::RuntimeResult<()> {
    let w = WIDTH as f32;
    let h = HEIGHT as f32;
    runtime.trigger_default("ripple", w * 0.5, h * 0.5)?;
    runtime.trigger(
        "confetti",
        w * 0.25,
        h * 0.8,
        EffectOptions::new().with_intensity(1.5),
    )?;
    runtime.trigger_default("hearts", w * 0.75, h * 0.8)?;
    runtime.trigger_default("sparkle", w * 0.2, h * 0.25)?;
    runtime.trigger(
        "burst",
        w * 0.5,
        h * 0.35,
        EffectOptions::new().with_colors(["#4cc9f0", "#f72585"]),
    )?;
    runtime.trigger_default("fireworks", w * 0.75, h * 0.25)?;
    Ok(())
}

/// Runs the loop, handing each frame to `draw`. Returns the frames run.
fn run(runtime: &mut Runtime, frames: u32, mut draw: impl FnMut(&Runtime)) -> u32 {
    let mut frame = 0;
    while frame < frames && !runtime.is_idle() {
        frame += 1;
        let tick = runtime.advance(1.0);
        if tick.instances_drained > 0 {
            info!(
                frame,
                drained = tick.instances_drained,
                live = runtime.live_particles(),
                "Instances finished"
            );
        }
        if !runtime.is_idle() {
            draw(runtime);
        }
    }
    frame
}

#[cfg(feature = "raster")]
fn run_and_draw(runtime: &mut Runtime, args: &Args) -> Result<u32, String> {
    use sparkfx::raster::PixmapSurface;

    let Some(path) = &args.png else {
        return Ok(run_recording(runtime, args.frames));
    };
    let mut surface = PixmapSurface::new(WIDTH, HEIGHT).map_err(|e| e.to_string())?;
    let background = sparkfx::Color::rgb(16, 16, 24);
    let frames = run(runtime, args.frames, |rt| {
        surface.clear(background);
        rt.render(&mut surface);
    });
    surface.save_png(path).map_err(|e| e.to_string())?;
    Ok(frames)
}

#[cfg(not(feature = "raster"))]
fn run_and_draw(runtime: &mut Runtime, args: &Args) -> Result<u32, String> {
    if args.png.is_some() {
        tracing::warn!("--png ignored: built without the `raster` feature");
    }
    Ok(run_recording(runtime, args.frames))
}

fn run_recording(runtime: &mut Runtime, frames: u32) -> u32 {
    let mut surface = RecordingSurface::new();
    let mut paints = 0;
    let frames = run(runtime, frames, |rt| {
        surface.clear();
        rt.render(&mut surface);
        paints += surface.paint_count();
    });
    info!(paints, "Recorded draw calls");
    frames
}

fn main() -> ExitCode {
    init_logging();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: sparkfx-demo [--config runtime.toml] [--frames N] [--png out.png]");
            return ExitCode::FAILURE;
        }
    };

    let config = match &args.config {
        Some(path) => match RuntimeConfig::from_toml_file(path) {
            Ok(config) => config,
            Err(e) => {
                error!("Could not load config: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => RuntimeConfig::default(),
    };

    let mut runtime = match builtin_runtime(config) {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Could not start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = stage(&mut runtime) {
        error!("Could not stage scene: {e}");
        return ExitCode::FAILURE;
    }
    info!(
        instances = runtime.active_instances(),
        particles = runtime.live_particles(),
        "Scene staged"
    );

    let frames = match run_and_draw(&mut runtime, &args) {
        Ok(frames) => frames,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let stats = runtime.stats();
    info!(
        frames,
        triggered = stats.instances_triggered,
        drained = stats.instances_drained,
        spawned = stats.particles_spawned,
        expired = stats.particles_expired,
        idle = runtime.is_idle(),
        "Demo finished"
    );
    ExitCode::SUCCESS
}
