use winit::dpi::PhysicalSize;

/// Depth format used by the mesh pipeline.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Depth attachment matching the surface size.
pub struct DepthTarget {
    view: wgpu::TextureView,
    size: PhysicalSize<u32>,
}

impl DepthTarget {
    pub fn new(device: &wgpu::Device, size: PhysicalSize<u32>) -> Self {
        Self {
            view: create_view(device, size),
            size,
        }
    }

    /// Recreates the texture when the surface size changed.
    pub fn ensure(&mut self, device: &wgpu::Device, size: PhysicalSize<u32>) {
        if size != self.size {
            self.view = create_view(device, size);
            self.size = size;
        }
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }
}

fn create_view(device: &wgpu::Device, size: PhysicalSize<u32>) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("basalt depth target"),
        size: wgpu::Extent3d {
            width: size.width.max(1),
            height: size.height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });

    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
