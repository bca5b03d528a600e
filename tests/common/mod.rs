pub mod macros;

use murmuration_core::{AppConfig, BoundaryMode, Flock, SqrtMode};
use murmuration_data::{Boid, FrameInput, PointerState, Viewport};
use std::time::Duration;

/// Square viewport so pixel and domain axes scale alike.
#[allow(dead_code)]
pub const VIEWPORT: Viewport = Viewport {
    width: 1000,
    height: 1000,
};

#[allow(dead_code)]
pub struct FlockBuilder {
    config: AppConfig,
    boids: Vec<Boid>,
}

#[allow(dead_code)]
impl FlockBuilder {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.flock.seed = Some(42);
        config.workers.count = Some(2);
        Self {
            config,
            boids: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.flock.seed = Some(seed);
        self
    }

    pub fn with_agents(mut self, agents: usize) -> Self {
        self.config.flock.agents = agents;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.config.workers.count = Some(workers);
        self
    }

    pub fn with_boundary(mut self, boundary: BoundaryMode) -> Self {
        self.config.flock.boundary = boundary;
        self
    }

    pub fn with_sqrt(mut self, sqrt: SqrtMode) -> Self {
        self.config.rules.sqrt_mode = sqrt;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    /// Places an explicit boid; once any is placed the random scatter is
    /// skipped.
    pub fn with_boid(mut self, boid: Boid) -> Self {
        self.boids.push(boid);
        self
    }

    pub fn build(self) -> Flock {
        if self.boids.is_empty() {
            Flock::new(self.config).expect("Failed to create flock in test builder")
        } else {
            Flock::with_boids(self.config, self.boids)
                .expect("Failed to create flock in test builder")
        }
    }
}

#[allow(dead_code)]
pub fn frame(ms: u64) -> FrameInput {
    FrameInput::new(Duration::from_millis(ms), VIEWPORT)
}

/// A frame with the pointer held down at pixel `(x, y)`.
#[allow(dead_code)]
pub fn frame_with_pointer(ms: u64, x: i32, y: i32, strong: bool) -> FrameInput {
    frame(ms).with_pointer(PointerState {
        x,
        y,
        buttons_held: 1,
        strong,
        ..Default::default()
    })
}
