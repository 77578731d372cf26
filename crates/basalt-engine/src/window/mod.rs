//! Window + event-loop runtime.
//!
//! Owns the winit event loop and drives the per-frame cycle: tick the
//! clock, run the application, flush the stage, present, wait for the GPU.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
