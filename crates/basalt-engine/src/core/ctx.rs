use winit::window::Window;

use crate::input::{InputFrame, InputState};
use crate::mesh::{MeshHandle, MeshStore, SubMesh};
use crate::scene::Stage;
use crate::time::FrameTime;

/// Mesh creation surface handed to applications.
pub struct MeshCtx<'a> {
    pub(crate) device: &'a wgpu::Device,
    pub(crate) store: &'a MeshStore,
}

impl<'a> MeshCtx<'a> {
    /// The built-in unit cube.
    pub fn cube(&self) -> MeshHandle {
        self.store.cube()
    }

    /// Uploads custom geometry. Handles are cheap to clone and usable in
    /// any later frame.
    pub fn load(&self, submeshes: &[SubMesh]) -> MeshHandle {
        self.store.load(self.device, submeshes)
    }
}

/// Everything an application touches during one frame.
pub struct FrameCtx<'a> {
    pub window: &'a Window,
    pub stage: &'a mut Stage,
    pub meshes: MeshCtx<'a>,
    pub input: &'a InputState,
    pub input_frame: &'a InputFrame,
    pub time: FrameTime,
}
