//! Core data structures shared between the simulation core and its drivers.

pub mod boid;
pub mod frame;
pub mod snapshot;
