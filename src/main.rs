use anyhow::{Context, Result};
use clap::Parser;
use murmuration_core::{init_logging, AppConfig, BoundaryMode, SqrtMode};
use murmuration_lib::app::{App, Command};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Number of frames to present
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// Override the number of boids
    #[arg(long)]
    agents: Option<usize>,

    /// Override the worker count
    #[arg(long)]
    workers: Option<usize>,

    /// Domain edge behavior
    #[arg(long, value_enum)]
    boundary: Option<Boundary>,

    /// Seed of the initial scatter
    #[arg(long)]
    seed: Option<u64>,

    /// Simulated milliseconds per frame
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Hold the pointer down at X,Y for the whole run
    #[arg(long, value_parser = parse_point)]
    pointer: Option<(i32, i32)>,

    /// Pointer repels instead of attracting
    #[arg(long)]
    repel: bool,

    /// Use the strong pointer force
    #[arg(long)]
    strong: bool,

    /// Use the fast inverse square root approximation
    #[arg(long)]
    fast_sqrt: bool,

    /// Write the last frame as JSON
    #[arg(long)]
    dump: Option<PathBuf>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Boundary {
    Wrap,
    Reflect,
}

impl From<Boundary> for BoundaryMode {
    fn from(boundary: Boundary) -> Self {
        match boundary {
            Boundary::Wrap => BoundaryMode::Wrap,
            Boundary::Reflect => BoundaryMode::Reflect,
        }
    }
}

fn parse_point(s: &str) -> std::result::Result<(i32, i32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{s}'"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x '{x}': {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y '{y}': {e}"))?;
    Ok((x, y))
}

impl Args {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(agents) = self.agents {
            config.flock.agents = agents;
        }
        if let Some(workers) = self.workers {
            config.workers.count = Some(workers);
        }
        if let Some(boundary) = self.boundary {
            config.flock.boundary = boundary.into();
        }
        if let Some(seed) = self.seed {
            config.flock.seed = Some(seed);
        }
        if self.fast_sqrt {
            config.rules.sqrt_mode = SqrtMode::FastApprox;
        }
    }
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config = App::load_config(&args.config)?;
    args.apply(&mut config);
    let fingerprint = config.fingerprint();

    let mut app = App::new(config)?;
    app.handle(Command::Resize {
        width: args.width,
        height: args.height,
    });
    if let Some((x, y)) = args.pointer {
        app.handle(Command::PointerMove { x, y });
        app.handle(Command::PointerDown);
    }
    if args.repel {
        app.handle(Command::TogglePolarity);
    }
    if args.strong {
        app.handle(Command::ToggleBoost);
    }

    let summary = app.run_headless(args.frames, Duration::from_millis(args.frame_ms));
    tracing::info!(
        frames = summary.frames,
        agents = app.flock.boids().len(),
        workers = app.flock.workers(),
        mean_frame_ms = summary.mean_frame_time.as_secs_f64() * 1000.0,
        fingerprint = %fingerprint,
        "Run complete"
    );

    if let Some(path) = &args.dump {
        let json = app.flock.snapshot_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write snapshot to {}", path.display()))?;
        tracing::info!(path = %path.display(), "Snapshot written");
    }

    Ok(())
}
