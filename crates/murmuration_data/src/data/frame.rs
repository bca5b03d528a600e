use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Output surface dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

/// Whether a held pointer pulls boids in or pushes them away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    #[default]
    Attract,
    Repel,
}

impl Polarity {
    /// Sign applied to the pointer force.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Polarity::Attract => 1.0,
            Polarity::Repel => -1.0,
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Polarity::Attract => Polarity::Repel,
            Polarity::Repel => Polarity::Attract,
        }
    }
}

/// Pointer device state as seen by the renderer/input collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerState {
    /// Position in viewport pixels.
    pub x: i32,
    pub y: i32,
    /// Signed count of buttons currently held. Press/release events may arrive
    /// unbalanced, so only a positive count counts as engaged.
    pub buttons_held: i32,
    pub polarity: Polarity,
    /// Boosted ("strong") force magnitude.
    pub strong: bool,
}

impl PointerState {
    #[must_use]
    pub fn is_engaged(&self) -> bool {
        self.buttons_held > 0
    }
}

/// Everything the core consumes from the frame driver for one update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    pub elapsed: Duration,
    pub pointer: PointerState,
    pub viewport: Viewport,
}

impl FrameInput {
    #[must_use]
    pub fn new(elapsed: Duration, viewport: Viewport) -> Self {
        Self {
            elapsed,
            pointer: PointerState::default(),
            viewport,
        }
    }

    #[must_use]
    pub fn with_pointer(mut self, pointer: PointerState) -> Self {
        self.pointer = pointer;
        self
    }

    /// Elapsed time in (fractional) milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed.as_secs_f32() * 1000.0
    }
}
