//! 3D math helpers for the frame flush.
//!
//! Thin layer over `glam`: camera view/projection construction and
//! per-object world-matrix composition. Kept free of GPU types so every
//! matrix rule is unit-testable.

mod projection;
mod transform;

pub use projection::{DepthRange, FOV_Y, Z_FAR, Z_NEAR, look_at, perspective};
pub use transform::{WorldMatrices, world_matrices};
