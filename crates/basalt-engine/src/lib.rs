//! Basalt engine crate.
//!
//! An immediate-mode 3D draw façade on wgpu: callers describe a frame as a
//! sequence of mutations to a "current model" or "current camera", each draw
//! call captures those slots by value, and the accumulated submissions are
//! flushed to the GPU once per frame.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod camera;
pub mod logging;
pub mod math;
pub mod mesh;
pub mod render;
pub mod scene;

pub use glam;
