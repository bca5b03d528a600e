use crate::boundary::{BoundaryPolicy, Torus, Walls};
use crate::config::{AppConfig, BoundaryMode};
use crate::error::{FlockError, Result};
use crate::metrics::Metrics;
use crate::rules::{derive_outputs, FrameParams, Kernel};
use crate::scheduler::{resolve_worker_count, FrameReport, Scheduler};
use crate::store::AgentStore;
use murmuration_data::{Boid, FrameInput, FrameSnapshot, Viewport};
use std::time::{Duration, Instant};

/// A complete, independent simulation: configuration, both agent buffers and
/// the worker pool that updates them.
///
/// # Example
/// ```
/// use murmuration_core::{AppConfig, Flock};
/// use murmuration_data::{FrameInput, Viewport};
/// use std::time::Duration;
///
/// let mut config = AppConfig::default();
/// config.flock.agents = 200;
/// config.flock.seed = Some(7);
///
/// let mut flock = Flock::new(config).unwrap();
/// flock.update(&FrameInput::new(Duration::from_millis(16), Viewport::default()));
/// assert_eq!(flock.frame(), 1);
/// assert_eq!(flock.boids().len(), 200);
/// ```
#[derive(Debug)]
pub struct Flock {
    config: AppConfig,
    store: AgentStore,
    scheduler: Scheduler,
    metrics: Metrics,
    frame: u64,
    viewport: Viewport,
}

impl Flock {
    /// Builds a flock of `config.flock.agents` boids scattered by `respawn`.
    ///
    /// Without a configured seed a random one is drawn and logged.
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        let seed = config.flock.seed.unwrap_or_else(rand::random);
        let store = AgentStore::new(config.flock.agents, config.flock.domain_size);
        let mut flock = Self::assemble(config, store)?;
        flock.respawn(seed);
        Ok(flock)
    }

    /// Builds a flock from explicit agent states; `config.flock.agents` is
    /// replaced by `boids.len()`.
    pub fn with_boids(mut config: AppConfig, boids: Vec<Boid>) -> Result<Self> {
        if boids.is_empty() {
            return Err(FlockError::invalid_config("Agent count must be positive"));
        }
        config.flock.agents = boids.len();
        config.validate()?;
        let store = AgentStore::from_boids(boids, config.flock.domain_size);
        let mut flock = Self::assemble(config, store)?;
        flock.publish_outputs();
        Ok(flock)
    }

    fn assemble(config: AppConfig, store: AgentStore) -> Result<Self> {
        let workers = resolve_worker_count(config.flock.agents, config.workers.count);
        let scheduler = Scheduler::new(workers)?;
        tracing::info!(
            agents = config.flock.agents,
            workers,
            boundary = ?config.flock.boundary,
            sqrt = ?config.rules.sqrt_mode,
            "Flock ready"
        );
        Ok(Self {
            config,
            store,
            scheduler,
            metrics: Metrics::new(),
            frame: 0,
            viewport: Viewport::default(),
        })
    }

    /// Advances the simulation by one frame.
    ///
    /// Blocks until every agent of the next buffer has been written, then
    /// publishes it by swapping buffers.
    pub fn update(&mut self, input: &FrameInput) -> FrameReport {
        let started = Instant::now();
        let params = FrameParams::new(&self.config, input);
        let size = self.config.flock.domain_size;

        let report = match self.config.flock.boundary {
            BoundaryMode::Wrap => self.run_frame(params, Torus::new(size)),
            BoundaryMode::Reflect => self.run_frame(
                params,
                Walls::new(
                    size,
                    self.config.rules.neighbor_distance,
                    self.config.rules.edge_repulsion_gain,
                ),
            ),
        };

        self.store.swap();
        self.frame += 1;
        self.viewport = input.viewport;
        self.metrics
            .record_frame(started.elapsed(), self.store.len(), report.claims);
        report
    }

    fn run_frame<B: BoundaryPolicy>(&mut self, params: FrameParams, boundary: B) -> FrameReport {
        let (source, target) = self.store.split();
        let kernel = Kernel::new(params, boundary, source);
        self.scheduler.run(target, |i, slot| *slot = kernel.step(i))
    }

    /// Re-scatters every boid uniformly over the domain with zero velocity.
    pub fn respawn(&mut self, seed: u64) {
        self.store.respawn(seed);
        self.publish_outputs();
        self.metrics.log_event("respawn", &format!("seed={seed}"));
    }

    /// Recomputes segments and colors of the published buffer for the last
    /// seen viewport without moving anything.
    fn publish_outputs(&mut self) {
        let input = FrameInput::new(Duration::ZERO, self.viewport);
        let params = FrameParams::new(&self.config, &input);
        for boid in self.store.current_mut() {
            let (segment, color) = derive_outputs(boid.x, boid.y, boid.vx, boid.vy, &params);
            boid.segment = segment;
            boid.color = color;
        }
    }

    /// The published agent states.
    #[must_use]
    pub fn boids(&self) -> &[Boid] {
        self.store.current()
    }

    /// Mutable access to the published states between frames.
    pub fn boids_mut(&mut self) -> &mut [Boid] {
        self.store.current_mut()
    }

    #[must_use]
    pub fn store(&self) -> &AgentStore {
        &self.store
    }

    #[must_use]
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(self.frame, self.viewport, self.store.current())
    }

    /// The published frame as pretty-printed JSON.
    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    /// Number of completed updates.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[must_use]
    pub fn workers(&self) -> usize {
        self.scheduler.workers()
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}
