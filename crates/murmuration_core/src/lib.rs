//! # Murmuration Core
//!
//! The multithreaded flocking kernel behind Murmuration.
//!
//! This crate contains the per-frame simulation logic:
//! - Double-buffered agent storage with O(1) buffer swaps
//! - Cohesion, separation and alignment rules over a fixed neighbor radius
//! - Pointer attraction/repulsion and a hard speed limit
//! - Toroidal (wrap) and walled (reflect) domains
//! - Load-balanced chunk scheduling over a persistent worker pool
//! - Derived render outputs (screen segments and heading colors)
//! - Metrics collection and structured logging
//!
//! ## Architecture
//!
//! Every update reads only the published buffer and writes only the other
//! one. Workers claim exclusive sub-slices of the write buffer, so the frame
//! needs no per-agent synchronization; the buffers swap once all workers
//! have joined.
//!
//! ## Example
//!
//! ```
//! use murmuration_core::{AppConfig, BoundaryMode, Flock};
//! use murmuration_data::{FrameInput, PointerState, Viewport};
//! use std::time::Duration;
//!
//! let mut config = AppConfig::default();
//! config.flock.agents = 300;
//! config.flock.seed = Some(42);
//! config.flock.boundary = BoundaryMode::Reflect;
//!
//! let mut flock = Flock::new(config).unwrap();
//! let input = FrameInput::new(Duration::from_millis(16), Viewport::default())
//!     .with_pointer(PointerState {
//!         x: 960,
//!         y: 540,
//!         buttons_held: 1,
//!         ..Default::default()
//!     });
//! let report = flock.update(&input);
//! assert!(report.claims >= report.workers);
//! ```

/// Domain edge behavior (torus or walls)
pub mod boundary;
/// Heading-to-color mapping
pub mod color;
/// Configuration management for simulation parameters
pub mod config;
/// Error types
pub mod error;
/// Exact and approximate square roots
pub mod fast_math;
/// The caller-owned simulation context
pub mod flock;
/// Performance metrics collection and logging
pub mod metrics;
/// Per-agent flocking rules
pub mod rules;
/// Dynamic work partitioning over the worker pool
pub mod scheduler;
/// Double-buffered agent state
pub mod store;

pub use boundary::{BoundaryPolicy, Torus, Walls};
pub use config::{AppConfig, BoundaryMode, ColorMode};
pub use error::{FlockError, Result};
pub use fast_math::SqrtMode;
pub use flock::Flock;
pub use metrics::{init_logging, Metrics};
pub use rules::{FrameParams, Kernel};
pub use scheduler::{FrameReport, Scheduler};
pub use store::AgentStore;
