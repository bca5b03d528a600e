pub mod app;

pub use app::{App, Command, FpsCounter, InputState, RunSummary};
