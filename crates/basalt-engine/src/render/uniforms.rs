use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::math::WorldMatrices;
use crate::scene::Snapshot;

/// Frame-wide camera uniform (bind group 0, binding 0).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct ViewProjectionUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl ViewProjectionUniform {
    pub fn new(view_proj: Mat4) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
        }
    }
}

/// Frame-wide lighting uniform (bind group 0, binding 1).
///
/// One directional light. `direction` points from the light toward the
/// scene; the `w` lanes are padding.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct SceneUniform {
    pub light_direction: [f32; 4],
    pub light_color: [f32; 4],
}

impl Default for SceneUniform {
    fn default() -> Self {
        let dir = Vec3::new(0.2, -0.6, -1.0).normalize();
        Self {
            light_direction: [dir.x, dir.y, dir.z, 0.0],
            light_color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// Per-object transform uniform (bind group 1, dynamic offset).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct WorldUniform {
    pub world: [[f32; 4]; 4],
    pub inverse_transpose: [[f32; 4]; 4],
}

impl From<WorldMatrices> for WorldUniform {
    fn from(m: WorldMatrices) -> Self {
        Self {
            world: m.world.to_cols_array_2d(),
            inverse_transpose: m.inverse_transpose.to_cols_array_2d(),
        }
    }
}

/// Per-object shading parameters (bind group 2, dynamic offset).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct ObjectParamsUniform {
    pub color: [f32; 4],
}

impl From<&Snapshot> for ObjectParamsUniform {
    fn from(snapshot: &Snapshot) -> Self {
        Self {
            color: snapshot.color.to_array(),
        }
    }
}
