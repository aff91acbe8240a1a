//! Avatar Stage - headless avatar simulation
//!
//! Main entry point for the CLI application.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use avatar_stage::{
    animation::{AnimationState, ManualClock},
    avatar::{generate_random, generate_themed, Avatar, Theme},
    config::Config,
    scene::AvatarViewer,
};

/// Avatar Stage - simulate the animated avatar and dump the final frame
#[derive(Parser, Debug)]
#[command(name = "avatar-stage", version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Avatar record (JSON) to load
    #[arg(short, long, conflicts_with_all = ["random", "theme"])]
    avatar: Option<PathBuf>,

    /// Generate a random avatar
    #[arg(long)]
    random: bool,

    /// Generate a themed avatar (fantasy, modern, futuristic)
    #[arg(long)]
    theme: Option<Theme>,

    /// Seed for avatar generation
    #[arg(long)]
    seed: Option<u64>,

    /// Requested animation state (idle, talking, waving, nodding)
    #[arg(short, long)]
    state: Option<String>,

    /// Hold the talking flag for the whole run
    #[arg(short, long)]
    talking: bool,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 60)]
    frames: u32,

    /// Simulated frame rate
    #[arg(long, default_value_t = 60.0)]
    fps: f32,

    /// Keys held down for every frame, comma separated (e.g. KeyA,ArrowUp)
    #[arg(long, value_delimiter = ',')]
    keys: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    // Logs go to stderr so stdout carries only the frame
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy(),
        )
        .init();

    info!("Starting {} v{}", avatar_stage::NAME, avatar_stage::VERSION);

    // Load configuration
    let config = if let Some(ref path) = args.config {
        Config::from_file(path)?
    } else {
        Config::load()?
    };
    config.validate()?;

    let avatar = load_avatar(&args)?;
    match &avatar {
        Some(avatar) => info!("Avatar: {} ({})", avatar.name, avatar.id),
        None => info!("No avatar, rendering the placeholder"),
    }

    let state = args.state.as_deref().map(AnimationState::from_name);
    if let (Some(name), Some(state)) = (args.state.as_deref(), state) {
        if !name.trim().eq_ignore_ascii_case(state.as_str()) {
            warn!("Unknown animation state '{}', using {}", name, state);
        }
    }

    let step = frame_time(args.fps)?;
    let mut viewer = AvatarViewer::with_clock(&config, ManualClock::new());

    info!(
        "Simulating {} frames at {} fps ({} keys held)",
        args.frames,
        args.fps,
        args.keys.len()
    );

    // Always render at least once so there is a frame to print
    let mut frame = viewer.render(avatar.as_ref(), state, Some(args.talking));
    for _ in 1..args.frames {
        viewer.clock().advance(step);
        viewer.update_camera_from_keys(&args.keys);
        frame = viewer.render(avatar.as_ref(), state, Some(args.talking));
    }

    println!("{}", serde_json::to_string_pretty(&frame)?);

    info!("Done after {:.3}s of simulated time", frame.elapsed);
    Ok(())
}

/// Simulated time between frames
fn frame_time(fps: f32) -> anyhow::Result<Duration> {
    if !(fps.is_finite() && fps > 0.0) {
        anyhow::bail!("--fps must be a positive number, got {}", fps);
    }
    Duration::try_from_secs_f32(1.0 / fps)
        .map_err(|e| anyhow::anyhow!("--fps {} gives no usable frame time: {}", fps, e))
}

fn load_avatar(args: &Args) -> anyhow::Result<Option<Avatar>> {
    if let Some(ref path) = args.avatar {
        info!("Loading avatar from: {}", path.display());
        return Ok(Some(Avatar::from_file(path)?));
    }

    if args.theme.is_none() && !args.random {
        return Ok(None);
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let avatar = match args.theme {
        Some(theme) => generate_themed(theme, &mut rng),
        None => generate_random(&mut rng),
    };
    Ok(Some(avatar))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_time() {
        let step = frame_time(50.0).unwrap();
        assert!((step.as_secs_f64() - 0.02).abs() < 1e-6);
        assert!(frame_time(0.0).is_err());
        assert!(frame_time(-30.0).is_err());
        assert!(frame_time(f32::NAN).is_err());
        assert!(frame_time(f32::INFINITY).is_err());
    }

    #[test]
    fn test_tiny_fps_is_an_error() {
        // 1 / 1e-39 overflows to infinity
        assert!(frame_time(1e-39).is_err());
        assert!(frame_time(f32::MIN_POSITIVE).is_err());
    }
}
