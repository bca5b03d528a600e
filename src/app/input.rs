use crate::app::state::App;
use murmuration_data::{FrameInput, PointerState, Viewport};
use rand::Rng;
use std::time::Duration;

/// User intents the driver understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    TogglePause,
    /// Scatter the flock again with a fresh seed.
    Respawn,
    /// Switch the pointer between attracting and repelling.
    TogglePolarity,
    /// Switch the pointer between weak and strong.
    ToggleBoost,
    PointerDown,
    PointerUp,
    PointerMove { x: i32, y: i32 },
    Resize { width: u32, height: u32 },
}

/// Pointer and window state accumulated from commands.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    pub pointer: PointerState,
    pub viewport: Viewport,
}

impl InputState {
    #[must_use]
    pub fn frame_input(&self, elapsed: Duration) -> FrameInput {
        FrameInput::new(elapsed, self.viewport).with_pointer(self.pointer)
    }
}

impl App {
    pub fn handle(&mut self, command: Command) {
        tracing::debug!(?command, "command");
        match command {
            Command::Quit => self.running = false,
            Command::TogglePause => self.paused = !self.paused,
            Command::Respawn => {
                let seed = self.rng.gen::<u64>();
                self.flock.respawn(seed);
            }
            Command::TogglePolarity => {
                self.input.pointer.polarity = self.input.pointer.polarity.flipped();
            }
            Command::ToggleBoost => self.input.pointer.strong = !self.input.pointer.strong,
            // Down/up pairs are counted, not latched; an unmatched release can
            // drive the count negative, which disengages the pointer.
            Command::PointerDown => self.input.pointer.buttons_held += 1,
            Command::PointerUp => self.input.pointer.buttons_held -= 1,
            Command::PointerMove { x, y } => {
                self.input.pointer.x = x;
                self.input.pointer.y = y;
            }
            Command::Resize { width, height } => {
                self.input.viewport = Viewport { width, height };
            }
        }
    }
}
