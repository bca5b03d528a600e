//! Square-root strategies for the update kernel.
//!
//! The kernel takes square roots in three places: the pointer distance, the
//! velocity clamp and the heading normalization. [`SqrtMode::FastApprox`]
//! swaps those for a bit-level inverse-square-root estimate refined by one
//! Newton step (relative error below 0.2%). It is only ever used when selected
//! in configuration; no other code path is affected.

use serde::{Deserialize, Serialize};

const INV_SQRT_MAGIC: u32 = 0x5f37_59df;

/// Which square-root implementation the kernel uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SqrtMode {
    /// `f32::sqrt`, correctly rounded.
    #[default]
    Exact,
    /// Bit-trick estimate, roughly 0.2% relative error.
    FastApprox,
}

impl SqrtMode {
    #[inline]
    #[must_use]
    pub fn sqrt(self, x: f32) -> f32 {
        match self {
            SqrtMode::Exact => x.sqrt(),
            SqrtMode::FastApprox => approx_sqrt(x),
        }
    }

    #[inline]
    #[must_use]
    pub fn inv_sqrt(self, x: f32) -> f32 {
        match self {
            SqrtMode::Exact => 1.0 / x.sqrt(),
            SqrtMode::FastApprox => approx_inv_sqrt(x),
        }
    }

    /// Upper bound on the relative error of this mode.
    #[must_use]
    pub fn relative_error(self) -> f32 {
        match self {
            SqrtMode::Exact => f32::EPSILON,
            SqrtMode::FastApprox => 0.002,
        }
    }
}

/// Approximate `1 / sqrt(x)` for positive, finite `x`.
#[inline]
#[must_use]
pub fn approx_inv_sqrt(x: f32) -> f32 {
    let half = 0.5 * x;
    let y = f32::from_bits(INV_SQRT_MAGIC.wrapping_sub(x.to_bits() >> 1));
    y * (1.5 - half * y * y)
}

/// Approximate `sqrt(x)` for non-negative, finite `x`; exactly zero at zero.
#[inline]
#[must_use]
pub fn approx_sqrt(x: f32) -> f32 {
    x * approx_inv_sqrt(x)
}
