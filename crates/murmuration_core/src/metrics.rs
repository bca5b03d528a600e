//! Performance metrics collection for the simulation.
//!
//! Provides structured logging and frame timing for monitoring the kernel.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

const LOG_EVERY_FRAMES: u64 = 1000;

/// Frame counters and timings for one flock.
pub struct Metrics {
    frame_count: AtomicU64,
    agent_count: AtomicU64,
    chunk_claims: AtomicU64,
    last_frame_micros: AtomicU64,
    total_frame_micros: AtomicU64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics")
            .field("frames", &self.frame_count())
            .field("agents", &self.agent_count())
            .field("chunk_claims", &self.chunk_claims())
            .finish_non_exhaustive()
    }
}

impl Metrics {
    /// Creates a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frame_count: AtomicU64::new(0),
            agent_count: AtomicU64::new(0),
            chunk_claims: AtomicU64::new(0),
            last_frame_micros: AtomicU64::new(0),
            total_frame_micros: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records a completed frame with its duration.
    pub fn record_frame(&self, duration: Duration, agents: usize, claims: usize) {
        let micros = duration.as_micros() as u64;
        let frame = self.frame_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.agent_count.store(agents as u64, Ordering::Relaxed);
        self.chunk_claims.fetch_add(claims as u64, Ordering::Relaxed);
        self.last_frame_micros.store(micros, Ordering::Relaxed);
        self.total_frame_micros.fetch_add(micros, Ordering::Relaxed);

        tracing::debug!(frame, agents, claims, micros, "Frame complete");
        if frame % LOG_EVERY_FRAMES == 0 {
            tracing::info!(
                frame = frame,
                agents = agents,
                mean_frame_ms = self.mean_frame_time().as_secs_f64() * 1000.0,
                "Simulation frame"
            );
        }
    }

    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn agent_count(&self) -> u64 {
        self.agent_count.load(Ordering::Relaxed)
    }

    /// Total chunks claimed across all frames.
    #[must_use]
    pub fn chunk_claims(&self) -> u64 {
        self.chunk_claims.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn last_frame_time(&self) -> Duration {
        Duration::from_micros(self.last_frame_micros.load(Ordering::Relaxed))
    }

    /// Mean update duration over all recorded frames.
    #[must_use]
    pub fn mean_frame_time(&self) -> Duration {
        let frames = self.frame_count();
        if frames == 0 {
            return Duration::ZERO;
        }
        Duration::from_micros(self.total_frame_micros.load(Ordering::Relaxed) / frames)
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Logs a simulation event.
    pub fn log_event(&self, event_type: &str, details: &str) {
        tracing::info!(
            event_type = event_type,
            details = details,
            "Simulation event"
        );
    }
}

/// Initialize tracing subscriber for logging.
///
/// Honors `RUST_LOG`; defaults to `info`.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}
