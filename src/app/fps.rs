use std::time::Duration;

/// Window over which frames are counted before the rate is recomputed.
pub const FPS_WINDOW: Duration = Duration::from_millis(100);

/// Frames-per-second estimate refreshed once per [`FPS_WINDOW`].
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    frames: u32,
    window: Duration,
    fps: u32,
}

impl FpsCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accounts one presented frame that took `elapsed`.
    ///
    /// The estimate only changes once strictly more than [`FPS_WINDOW`] has
    /// accumulated; returns the new value when it does.
    pub fn tick(&mut self, elapsed: Duration) -> Option<u32> {
        self.window += elapsed;
        let recomputed = if self.window > FPS_WINDOW {
            let millis = self.window.as_millis().max(1);
            self.fps = (1000 * u128::from(self.frames) / millis) as u32;
            self.frames = 0;
            self.window = Duration::ZERO;
            Some(self.fps)
        } else {
            None
        };
        self.frames += 1;
        recomputed
    }

    /// Latest estimate; zero until the first window has closed.
    #[must_use]
    pub fn fps(&self) -> u32 {
        self.fps
    }
}
