//! Per-agent flocking rules.
//!
//! [`Kernel::step`] computes one agent's next state from the read-only source
//! buffer: pointer force, neighbor scan (cohesion, separation, alignment),
//! edge push, velocity clamp, integration and the derived render outputs.
//! It touches no shared mutable state, so any number of workers can call it
//! concurrently over disjoint index ranges.

use crate::boundary::BoundaryPolicy;
use crate::color;
use crate::config::{AppConfig, ColorMode};
use crate::fast_math::SqrtMode;
use murmuration_data::{Boid, FrameInput, Rgb, Segment};

/// Pointer target in simulation space with its signed strength.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerForce {
    pub x: f32,
    pub y: f32,
    /// Positive attracts, negative repels.
    pub strength: f32,
}

/// Linear map from simulation space to viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMap {
    pub width: f32,
    pub height: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl ScreenMap {
    #[must_use]
    pub fn new(width: u32, height: u32, domain_size: f32) -> Self {
        let width = width.max(1) as f32;
        let height = height.max(1) as f32;
        Self {
            width,
            height,
            scale_x: width / domain_size,
            scale_y: height / domain_size,
        }
    }

    /// Pixel position to simulation space.
    #[must_use]
    pub fn to_domain(&self, px: i32, py: i32) -> (f32, f32) {
        (px as f32 / self.scale_x, py as f32 / self.scale_y)
    }
}

/// Constants shared by every agent update of one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    pub time_factor: f32,
    pub neighbor_distance_sq: f32,
    pub cohesion_gain: f32,
    pub alignment_gain: f32,
    pub repulsion_gain: f32,
    pub velocity_limit: f32,
    pub epsilon: f32,
    pub sqrt: SqrtMode,
    pub pointer: Option<PointerForce>,
    pub screen: ScreenMap,
    pub line_half_length: f32,
    pub color: ColorMode,
}

impl FrameParams {
    #[must_use]
    pub fn new(config: &AppConfig, input: &FrameInput) -> Self {
        let rules = &config.rules;
        let screen = ScreenMap::new(
            input.viewport.width,
            input.viewport.height,
            config.flock.domain_size,
        );
        let pointer = input.pointer.is_engaged().then(|| {
            let (x, y) = screen.to_domain(input.pointer.x, input.pointer.y);
            let magnitude = if input.pointer.strong {
                config.pointer.strong_strength
            } else {
                config.pointer.weak_strength
            };
            PointerForce {
                x,
                y,
                strength: input.pointer.polarity.sign() * magnitude,
            }
        });

        Self {
            time_factor: input.elapsed_ms() / rules.tick_divisor_ms,
            neighbor_distance_sq: rules.neighbor_distance * rules.neighbor_distance,
            cohesion_gain: rules.cohesion_gain,
            alignment_gain: rules.alignment_gain,
            repulsion_gain: rules.repulsion_gain,
            velocity_limit: rules.velocity_limit,
            epsilon: rules.epsilon,
            sqrt: rules.sqrt_mode,
            pointer,
            screen,
            line_half_length: config.render.line_half_length,
            color: config.render.color,
        }
    }
}

/// Running sums of one neighbor scan.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NeighborSums {
    pub cohesion_x: f32,
    pub cohesion_y: f32,
    pub separation_x: f32,
    pub separation_y: f32,
    pub alignment_x: f32,
    pub alignment_y: f32,
    /// Includes the scanning agent itself, so never zero after a scan.
    pub count: u32,
}

/// Rule evaluator over one read-only source buffer.
#[derive(Clone, Copy)]
pub struct Kernel<'a, B: BoundaryPolicy> {
    params: FrameParams,
    boundary: B,
    source: &'a [Boid],
}

impl<'a, B: BoundaryPolicy> Kernel<'a, B> {
    #[must_use]
    pub fn new(params: FrameParams, boundary: B, source: &'a [Boid]) -> Self {
        Self {
            params,
            boundary,
            source,
        }
    }

    #[must_use]
    pub fn params(&self) -> &FrameParams {
        &self.params
    }

    /// Accumulates the rule sums of every agent within the neighbor radius of
    /// `(x, y)`.
    ///
    /// The scan does not skip the agent at `(x, y)`: it always counts itself.
    /// Its zero offset adds nothing to cohesion or separation but its own
    /// velocity lands in the alignment sum, which [`Kernel::step`] removes.
    #[must_use]
    pub fn scan(&self, x: f32, y: f32) -> NeighborSums {
        let p = &self.params;
        let mut sums = NeighborSums::default();
        for other in self.source {
            let Some((dx, dy)) =
                self.boundary
                    .neighbor_offset(x, y, other.x, other.y, p.neighbor_distance_sq)
            else {
                continue;
            };
            sums.cohesion_x += dx;
            sums.cohesion_y += dy;

            let weight = 1.0 / (dx * dx + dy * dy + p.epsilon);
            sums.separation_x -= dx * weight;
            sums.separation_y -= dy * weight;

            sums.alignment_x += other.vx;
            sums.alignment_y += other.vy;

            sums.count += 1;
        }
        sums
    }

    /// Next state of agent `index`.
    #[must_use]
    pub fn step(&self, index: usize) -> Boid {
        let me = self.source[index];
        let p = &self.params;
        let tf = p.time_factor;
        let (mut vx, mut vy) = (me.vx, me.vy);

        if let Some(pointer) = p.pointer {
            let dx = self.boundary.displacement(me.x, pointer.x);
            let dy = self.boundary.displacement(me.y, pointer.y);
            let scale = pointer.strength / (p.sqrt.sqrt(dx * dx + dy * dy) + p.epsilon);
            vx += tf * dx * scale;
            vy += tf * dy * scale;
        }

        let sums = self.scan(me.x, me.y);
        let n = sums.count as f32;
        let edge_x = self.boundary.edge_push(me.x);
        let edge_y = self.boundary.edge_push(me.y);

        vx += tf
            * (sums.cohesion_x / n * p.cohesion_gain
                + p.repulsion_gain * (sums.separation_x + edge_x)
                + (sums.alignment_x - me.vx) / n * p.alignment_gain);
        vy += tf
            * (sums.cohesion_y / n * p.cohesion_gain
                + p.repulsion_gain * (sums.separation_y + edge_y)
                + (sums.alignment_y - me.vy) / n * p.alignment_gain);

        let (vx, vy) = limit_speed(vx, vy, p.velocity_limit, p.sqrt);

        let (x, vx) = self.boundary.advance(me.x, vx, tf);
        let (y, vy) = self.boundary.advance(me.y, vy, tf);

        let (segment, color) = derive_outputs(x, y, vx, vy, p);
        Boid {
            x,
            y,
            vx,
            vy,
            segment,
            color,
        }
    }
}

/// Rescales `(vx, vy)` uniformly so its length does not exceed `limit`.
#[inline]
#[must_use]
pub fn limit_speed(vx: f32, vy: f32, limit: f32, sqrt: SqrtMode) -> (f32, f32) {
    let speed_sq = vx * vx + vy * vy;
    if speed_sq > limit * limit {
        let scale = limit * sqrt.inv_sqrt(speed_sq);
        (vx * scale, vy * scale)
    } else {
        (vx, vy)
    }
}

/// Screen-space segment and optional color for a boid at `(x, y)` moving
/// with `(vx, vy)`.
#[must_use]
pub fn derive_outputs(
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    p: &FrameParams,
) -> (Segment, Option<Rgb>) {
    let sx = x * p.screen.scale_x;
    let sy = y * p.screen.scale_y;

    // Proportional to the screen-space velocity; the missing 1/D factor
    // cancels in the normalization.
    let mvx = vx * p.screen.width;
    let mvy = vy * p.screen.height;
    let inv_len = p.sqrt.inv_sqrt(mvx * mvx + mvy * mvy + p.epsilon);
    let hx = mvx * inv_len;
    let hy = mvy * inv_len;

    let reach = p.line_half_length;
    let segment = Segment {
        x1: to_pixel(sx - reach * hx),
        y1: to_pixel(sy - reach * hy),
        x2: to_pixel(sx + reach * hx),
        y2: to_pixel(sy + reach * hy),
    };
    let color = match p.color {
        ColorMode::Heading => Some(color::heading_vector_to_rgb(hx, hy)),
        ColorMode::Off => None,
    };
    (segment, color)
}

/// Rounds half up for positive values and truncates toward zero below,
/// matching integer casts of `v + 0.5`.
#[inline]
fn to_pixel(v: f32) -> i32 {
    (v + 0.5) as i32
}
