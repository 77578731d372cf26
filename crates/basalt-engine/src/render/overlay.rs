use winit::dpi::PhysicalSize;

use crate::input::{InputFrame, InputState};
use crate::time::FrameTime;

/// Hook for drawing on top of the finished scene (debug HUDs, UI layers).
///
/// `draw` runs after the mesh pass, so implementations should load the
/// existing color attachment rather than clear it.
pub trait Overlay {
    fn update(&mut self, _input: &InputState, _frame: &InputFrame, _time: FrameTime) {}

    fn draw(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        surface_format: wgpu::TextureFormat,
        size: PhysicalSize<u32>,
    );
}
