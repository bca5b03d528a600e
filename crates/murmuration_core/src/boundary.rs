//! Edge handling for the square simulation domain `[0, D)²`.
//!
//! Two strategies share the [`BoundaryPolicy`] trait. The kernel is generic
//! over it, so the choice made in configuration is resolved once per frame
//! and the per-pair code is monomorphized:
//!
//! - [`Torus`]: opposite edges are identified; distances take the shorter of
//!   the direct and the wrapped path.
//! - [`Walls`]: plain Euclidean plane with repulsive, reflecting edges.

/// Distance measurement and out-of-range resolution for one domain shape.
pub trait BoundaryPolicy: Copy + Send + Sync {
    /// Signed displacement from `from` to `to` along one axis.
    fn displacement(&self, from: f32, to: f32) -> f32;

    /// Displacement from `(x, y)` to `(ox, oy)` when their squared distance is
    /// strictly below `radius_sq`, `None` otherwise.
    fn neighbor_offset(&self, x: f32, y: f32, ox: f32, oy: f32, radius_sq: f32)
        -> Option<(f32, f32)>;

    /// Inward force on one axis from the edges near coordinate `c`.
    #[inline]
    fn edge_push(&self, _c: f32) -> f32 {
        0.0
    }

    /// Integrates one axis over `time_factor` and brings the result back into
    /// the domain. Returns the new `(position, velocity)`.
    fn advance(&self, position: f32, velocity: f32, time_factor: f32) -> (f32, f32);
}

/// Toroidal domain of side `size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Torus {
    size: f32,
    half: f32,
}

impl Torus {
    #[must_use]
    pub fn new(size: f32) -> Self {
        assert!(size > 0.0, "torus size must be positive");
        Self {
            size,
            half: size * 0.5,
        }
    }

    #[must_use]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Signed component of the shortest path from `c1` to `c2`, in
    /// `(-D/2, D/2]`.
    #[inline]
    #[must_use]
    pub fn signed_shortest(&self, c1: f32, c2: f32) -> f32 {
        let direct = c2 - c1;
        if direct > self.half {
            direct - self.size
        } else if direct <= -self.half {
            direct + self.size
        } else {
            direct
        }
    }

    /// Magnitude of [`Torus::signed_shortest`], without the sign bookkeeping.
    #[inline]
    #[must_use]
    pub fn unsigned_shortest(&self, c1: f32, c2: f32) -> f32 {
        let direct = (c2 - c1).abs();
        if direct <= self.half {
            direct
        } else {
            self.size - direct
        }
    }

    /// Restores the sign of a magnitude produced by
    /// [`Torus::unsigned_shortest`] for the same `c1`, `c2`.
    #[inline]
    #[must_use]
    pub fn reattach_sign(&self, magnitude: f32, c1: f32, c2: f32) -> f32 {
        let direct = c2 - c1;
        // Positive when the short path runs forward: a short forward hop, or a
        // long backward one that wraps around.
        let forward = if direct > 0.0 {
            direct <= self.half
        } else {
            direct <= -self.half
        };
        if forward {
            magnitude
        } else {
            -magnitude
        }
    }

    /// Reduces `c` modulo the domain size into `[0, D)`.
    #[inline]
    #[must_use]
    pub fn wrap(&self, c: f32) -> f32 {
        if (0.0..self.size).contains(&c) {
            return c;
        }
        let wrapped = c.rem_euclid(self.size);
        // rem_euclid can round up to exactly `size` for tiny negative inputs
        if wrapped >= self.size {
            0.0
        } else {
            wrapped
        }
    }
}

impl BoundaryPolicy for Torus {
    #[inline]
    fn displacement(&self, from: f32, to: f32) -> f32 {
        self.signed_shortest(from, to)
    }

    #[inline]
    fn neighbor_offset(
        &self,
        x: f32,
        y: f32,
        ox: f32,
        oy: f32,
        radius_sq: f32,
    ) -> Option<(f32, f32)> {
        let ux = self.unsigned_shortest(x, ox);
        let uy = self.unsigned_shortest(y, oy);
        if ux * ux + uy * uy < radius_sq {
            Some((self.reattach_sign(ux, x, ox), self.reattach_sign(uy, y, oy)))
        } else {
            None
        }
    }

    #[inline]
    fn advance(&self, position: f32, velocity: f32, time_factor: f32) -> (f32, f32) {
        (self.wrap(position + velocity * time_factor), velocity)
    }
}

/// Bounded domain of side `size` with repulsive, reflecting edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Walls {
    size: f32,
    /// Distance from an edge at which the wall starts pushing.
    margin: f32,
    gain: f32,
    last_inside: f32,
}

impl Walls {
    #[must_use]
    pub fn new(size: f32, margin: f32, gain: f32) -> Self {
        assert!(size > 0.0, "wall domain size must be positive");
        Self {
            size,
            margin,
            gain,
            last_inside: size * (1.0 - f32::EPSILON),
        }
    }

    #[must_use]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Mirrors an out-of-range coordinate back across the wall it crossed.
    ///
    /// Mirroring keeps distinct overshoots distinct; only a coordinate that
    /// lands exactly on the far wall, or overshoots by more than a full
    /// domain, is clamped.
    #[inline]
    #[must_use]
    pub fn fold(&self, c: f32) -> f32 {
        let mirrored = if c < 0.0 {
            -c
        } else if c >= self.size {
            2.0 * self.size - c
        } else {
            return c;
        };
        mirrored.clamp(0.0, self.last_inside)
    }
}

impl BoundaryPolicy for Walls {
    #[inline]
    fn displacement(&self, from: f32, to: f32) -> f32 {
        to - from
    }

    #[inline]
    fn neighbor_offset(
        &self,
        x: f32,
        y: f32,
        ox: f32,
        oy: f32,
        radius_sq: f32,
    ) -> Option<(f32, f32)> {
        let dx = ox - x;
        let dy = oy - y;
        if dx * dx + dy * dy < radius_sq {
            Some((dx, dy))
        } else {
            None
        }
    }

    #[inline]
    fn edge_push(&self, c: f32) -> f32 {
        let low = (self.margin - c).max(0.0);
        let high = (c - (self.size - self.margin)).max(0.0);
        self.gain * (low - high)
    }

    fn advance(&self, position: f32, velocity: f32, time_factor: f32) -> (f32, f32) {
        let moved = position + velocity * time_factor;
        let inward = if moved < 0.0 {
            velocity.abs()
        } else if moved >= self.size {
            -velocity.abs()
        } else {
            return (moved, velocity);
        };
        // Turn around first, then take a second step with the corrected
        // velocity so the recoil looks like motion rather than a snap.
        (self.fold(moved + inward * time_factor), inward)
    }
}
