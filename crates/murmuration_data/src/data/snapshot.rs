use super::boid::{Boid, Rgb, Segment};
use super::frame::Viewport;
use serde::{Deserialize, Serialize};

/// Render-facing view of one boid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoidView {
    pub segment: Segment,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub color: Option<Rgb>,
}

impl From<&Boid> for BoidView {
    fn from(b: &Boid) -> Self {
        Self {
            segment: b.segment,
            color: b.color,
        }
    }
}

/// Everything a renderer needs to draw one published frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub viewport: Viewport,
    pub boids: Vec<BoidView>,
}

impl FrameSnapshot {
    #[must_use]
    pub fn capture(frame: u64, viewport: Viewport, boids: &[Boid]) -> Self {
        Self {
            frame,
            viewport,
            boids: boids.iter().map(BoidView::from).collect(),
        }
    }
}
