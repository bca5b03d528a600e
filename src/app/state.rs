use anyhow::{Context, Result};
use murmuration_core::{AppConfig, Flock};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::Path;

use crate::app::fps::FpsCounter;
use crate::app::input::InputState;

pub struct App {
    pub running: bool,
    pub paused: bool,
    pub flock: Flock,
    pub input: InputState,
    pub fps: FpsCounter,
    pub(crate) rng: ChaCha8Rng,
}

impl App {
    /// Reads `path`, or defaults when it does not exist.
    pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
        let path = path.as_ref();
        AppConfig::load_or_default(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))
    }

    pub fn new(config: AppConfig) -> Result<Self> {
        // Respawn seeds follow from the initial seed when one is configured.
        let rng = match config.flock.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(1)),
            None => ChaCha8Rng::from_entropy(),
        };
        let flock = Flock::new(config).context("Failed to build flock")?;
        Ok(Self {
            running: true,
            paused: false,
            flock,
            input: InputState::default(),
            fps: FpsCounter::new(),
            rng,
        })
    }
}
