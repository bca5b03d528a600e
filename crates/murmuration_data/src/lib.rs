//! Plain data types for the murmuration flocking simulation.

pub mod data;

pub use data::boid::{Boid, Rgb, Segment};
pub use data::frame::{FrameInput, PointerState, Polarity, Viewport};
pub use data::snapshot::{BoidView, FrameSnapshot};
