//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! the `config.toml` file. Every tuning constant of the flocking rules can be
//! customized through this configuration system.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` file (overrides defaults, missing keys keep defaults)
//! 3. Command line flags of the driver binary
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [flock]
//! agents = 2000
//! seed = 42
//! boundary = "reflect"
//!
//! [rules]
//! velocity_limit = 250.0
//! sqrt_mode = "fast_approx"
//!
//! [workers]
//! count = 4
//! ```

use crate::error::{FlockError, Result};
use crate::fast_math::SqrtMode;
use serde::{Deserialize, Serialize};
use std::path::Path;

macro_rules! ensure_config {
    ($cond:expr, $msg:expr) => {
        if !$cond {
            return Err(FlockError::invalid_config($msg));
        }
    };
}

/// How agents interact with the edges of the simulation domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryMode {
    /// Toroidal domain: leaving one edge re-enters from the opposite edge.
    #[default]
    Wrap,
    /// Bounded domain: agents are pushed off and bounce back from the edges.
    Reflect,
}

/// Whether each boid gets a color derived from its heading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    #[default]
    Heading,
    Off,
}

/// Population and domain configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FlockConfig {
    pub agents: usize,
    pub seed: Option<u64>,
    /// Side length `D` of the square simulation domain.
    pub domain_size: f32,
    pub boundary: BoundaryMode,
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            agents: 4500,
            seed: None,
            domain_size: 10_000.0,
            boundary: BoundaryMode::Wrap,
        }
    }
}

/// Gains and limits of the neighbor rules.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RulesConfig {
    pub neighbor_distance: f32,
    pub cohesion_gain: f32,
    pub alignment_gain: f32,
    pub repulsion_gain: f32,
    /// Wall push per unit of penetration; only used by [`BoundaryMode::Reflect`].
    pub edge_repulsion_gain: f32,
    pub velocity_limit: f32,
    /// Milliseconds of elapsed time that make up one unit of the time factor.
    pub tick_divisor_ms: f32,
    /// Additive guard against zero distances.
    pub epsilon: f32,
    pub sqrt_mode: SqrtMode,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            neighbor_distance: 833.0,
            cohesion_gain: 1.0 / 9.0,
            alignment_gain: 1.0 / 45.0,
            repulsion_gain: 190.0,
            edge_repulsion_gain: 0.0003,
            velocity_limit: 300.0,
            tick_divisor_ms: 180.0,
            epsilon: 0.0001,
            sqrt_mode: SqrtMode::Exact,
        }
    }
}

/// Pointer attraction/repulsion magnitudes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PointerConfig {
    pub weak_strength: f32,
    pub strong_strength: f32,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            weak_strength: 150.0,
            strong_strength: 9000.0,
        }
    }
}

/// Derived render output settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Half the drawn segment length, in pixels.
    pub line_half_length: f32,
    pub color: ColorMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            line_half_length: 7.0,
            color: ColorMode::Heading,
        }
    }
}

/// Worker pool sizing.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct WorkerConfig {
    /// Explicit worker count; hardware parallelism is used when absent.
    pub count: Option<usize>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub flock: FlockConfig,
    pub rules: RulesConfig,
    pub pointer: PointerConfig,
    pub render: RenderConfig,
    pub workers: WorkerConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> Result<()> {
        ensure_config!(self.flock.agents > 0, "Agent count must be positive");
        ensure_config!(
            self.flock.domain_size.is_finite() && self.flock.domain_size > 0.0,
            "Domain size must be positive"
        );
        if let Some(count) = self.workers.count {
            ensure_config!(count > 0, "Worker count override must be positive");
        }

        let rules = &self.rules;
        ensure_config!(
            rules.neighbor_distance > 0.0,
            "Neighbor distance must be positive"
        );
        ensure_config!(
            rules.neighbor_distance < self.flock.domain_size,
            "Neighbor distance must be smaller than the domain"
        );
        ensure_config!(rules.velocity_limit > 0.0, "Velocity limit must be positive");
        ensure_config!(rules.tick_divisor_ms > 0.0, "Tick divisor must be positive");
        ensure_config!(rules.epsilon > 0.0, "Epsilon must be positive");
        ensure_config!(
            rules.cohesion_gain >= 0.0,
            "Cohesion gain must be non-negative"
        );
        ensure_config!(
            rules.alignment_gain >= 0.0,
            "Alignment gain must be non-negative"
        );
        ensure_config!(
            rules.repulsion_gain >= 0.0,
            "Repulsion gain must be non-negative"
        );
        ensure_config!(
            rules.edge_repulsion_gain >= 0.0,
            "Edge repulsion gain must be non-negative"
        );

        ensure_config!(
            self.pointer.weak_strength >= 0.0 && self.pointer.strong_strength >= 0.0,
            "Pointer strengths must be non-negative"
        );
        ensure_config!(
            self.render.line_half_length >= 0.0,
            "Line half length must be non-negative"
        );

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Hash of every parameter that influences the simulated trajectories.
    ///
    /// Worker count and render settings are excluded: they never change where
    /// the boids go.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.flock).as_bytes());
        hasher.update(format!("{:?}", self.rules).as_bytes());
        hasher.update(format!("{:?}", self.pointer).as_bytes());
        hex::encode(hasher.finalize())
    }
}
