pub mod fps;
pub mod input;
pub mod state;

pub use fps::FpsCounter;
pub use input::{Command, InputState};
pub use state::App;

use murmuration_core::FrameReport;
use murmuration_data::FrameSnapshot;
use std::time::Duration;

/// Totals of a headless run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub simulated: u64,
    pub mean_frame_time: Duration,
    pub fps: u32,
}

impl App {
    /// Presents one frame: updates the flock unless paused and feeds the
    /// FPS counter either way.
    pub fn frame(&mut self, elapsed: Duration) -> Option<FrameReport> {
        let report = (!self.paused).then(|| {
            let input = self.input.frame_input(elapsed);
            self.flock.update(&input)
        });
        if let Some(fps) = self.fps.tick(elapsed) {
            tracing::trace!(fps, "fps updated");
        }
        report
    }

    /// Drives `frames` frames of fixed length, stopping early on quit.
    pub fn run_headless(&mut self, frames: u64, frame_time: Duration) -> RunSummary {
        let mut presented = 0;
        let mut simulated = 0;
        while self.running && presented < frames {
            if self.frame(frame_time).is_some() {
                simulated += 1;
            }
            presented += 1;
        }
        tracing::info!(presented, simulated, "Headless run finished");
        RunSummary {
            frames: presented,
            simulated,
            mean_frame_time: self.flock.metrics().mean_frame_time(),
            fps: self.fps.fps(),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> FrameSnapshot {
        self.flock.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use murmuration_core::AppConfig;
    use murmuration_data::Polarity;

    fn app() -> App {
        let mut config = AppConfig::default();
        config.flock.agents = 40;
        config.flock.seed = Some(3);
        config.workers.count = Some(2);
        App::new(config).unwrap()
    }

    #[test]
    fn test_paused_frame_skips_update() {
        let mut app = app();
        app.handle(Command::TogglePause);
        let before = app.flock.boids().to_vec();
        assert!(app.frame(Duration::from_millis(16)).is_none());
        assert_eq!(app.flock.boids(), &before[..]);
        assert_eq!(app.flock.frame(), 0);

        app.handle(Command::TogglePause);
        assert!(app.frame(Duration::from_millis(16)).is_some());
        assert_eq!(app.flock.frame(), 1);
    }

    #[test]
    fn test_pointer_commands() {
        let mut app = app();
        app.handle(Command::PointerMove { x: 10, y: 20 });
        app.handle(Command::PointerDown);
        app.handle(Command::PointerDown);
        app.handle(Command::PointerUp);
        app.handle(Command::TogglePolarity);
        app.handle(Command::ToggleBoost);
        let pointer = app.input.pointer;
        assert_eq!((pointer.x, pointer.y), (10, 20));
        assert_eq!(pointer.buttons_held, 1);
        assert!(pointer.is_engaged());
        assert_eq!(pointer.polarity, Polarity::Repel);
        assert!(pointer.strong);
    }

    #[test]
    fn test_quit_stops_headless_run() {
        let mut app = app();
        app.handle(Command::Quit);
        let summary = app.run_headless(10, Duration::from_millis(16));
        assert_eq!(summary.frames, 0);
    }

    #[test]
    fn test_run_headless_counts_frames() {
        let mut app = app();
        let summary = app.run_headless(12, Duration::from_millis(16));
        assert_eq!(summary.frames, 12);
        assert_eq!(summary.simulated, 12);
        assert!(summary.fps > 0);
    }
}
