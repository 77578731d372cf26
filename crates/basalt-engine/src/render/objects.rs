use super::uniforms::{ObjectParamsUniform, WorldUniform};

/// Per-object uniform storage addressed through dynamic offsets.
///
/// Uniforms cannot be rewritten between draws of a single pass, so every
/// object's data is written up front into two growable buffers (world
/// transform, shading params) and each draw selects its slot via a dynamic
/// offset. Slot stride honors the device's uniform offset alignment.
pub struct ObjectUniforms {
    world_layout: wgpu::BindGroupLayout,
    params_layout: wgpu::BindGroupLayout,

    world_stride: u64,
    params_stride: u64,

    world_buffer: wgpu::Buffer,
    params_buffer: wgpu::Buffer,
    world_group: wgpu::BindGroup,
    params_group: wgpu::BindGroup,
    capacity: usize,
}

impl ObjectUniforms {
    pub fn new(
        device: &wgpu::Device,
        world_layout: &wgpu::BindGroupLayout,
        params_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let alignment = device.limits().min_uniform_buffer_offset_alignment as u64;
        let world_stride = align_up(std::mem::size_of::<WorldUniform>() as u64, alignment);
        let params_stride = align_up(std::mem::size_of::<ObjectParamsUniform>() as u64, alignment);

        let capacity = 64;
        let (world_buffer, params_buffer, world_group, params_group) = create_storage(
            device,
            world_layout,
            params_layout,
            world_stride,
            params_stride,
            capacity,
        );

        Self {
            world_layout: world_layout.clone(),
            params_layout: params_layout.clone(),
            world_stride,
            params_stride,
            world_buffer,
            params_buffer,
            world_group,
            params_group,
            capacity,
        }
    }

    /// Writes one frame's object uniforms, growing the buffers if needed.
    ///
    /// Must run before the render pass that consumes them.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        objects: &[(WorldUniform, ObjectParamsUniform)],
    ) {
        self.ensure_capacity(device, objects.len());

        for (i, (world, params)) in objects.iter().enumerate() {
            queue.write_buffer(
                &self.world_buffer,
                i as u64 * self.world_stride,
                bytemuck::bytes_of(world),
            );
            queue.write_buffer(
                &self.params_buffer,
                i as u64 * self.params_stride,
                bytemuck::bytes_of(params),
            );
        }
    }

    /// Dynamic offsets selecting object `index` in both buffers.
    pub fn offsets(&self, index: usize) -> (u32, u32) {
        (
            (index as u64 * self.world_stride) as u32,
            (index as u64 * self.params_stride) as u32,
        )
    }

    pub fn world_group(&self) -> &wgpu::BindGroup {
        &self.world_group
    }

    pub fn params_group(&self) -> &wgpu::BindGroup {
        &self.params_group
    }

    fn ensure_capacity(&mut self, device: &wgpu::Device, required: usize) {
        if required <= self.capacity {
            return;
        }

        let new_cap = required.next_power_of_two().max(64);
        let (world_buffer, params_buffer, world_group, params_group) = create_storage(
            device,
            &self.world_layout,
            &self.params_layout,
            self.world_stride,
            self.params_stride,
            new_cap,
        );

        self.world_buffer = world_buffer;
        self.params_buffer = params_buffer;
        self.world_group = world_group;
        self.params_group = params_group;
        self.capacity = new_cap;
    }
}

fn create_storage(
    device: &wgpu::Device,
    world_layout: &wgpu::BindGroupLayout,
    params_layout: &wgpu::BindGroupLayout,
    world_stride: u64,
    params_stride: u64,
    capacity: usize,
) -> (wgpu::Buffer, wgpu::Buffer, wgpu::BindGroup, wgpu::BindGroup) {
    let world_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("basalt object world ubo"),
        size: world_stride * capacity as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let params_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("basalt object params ubo"),
        size: params_stride * capacity as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    // The binding size is one element; dynamic offsets move the window.
    let world_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("basalt object world bind group"),
        layout: world_layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                buffer: &world_buffer,
                offset: 0,
                size: std::num::NonZeroU64::new(std::mem::size_of::<WorldUniform>() as u64),
            }),
        }],
    });

    let params_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("basalt object params bind group"),
        layout: params_layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                buffer: &params_buffer,
                offset: 0,
                size: std::num::NonZeroU64::new(
                    std::mem::size_of::<ObjectParamsUniform>() as u64
                ),
            }),
        }],
    });

    (world_buffer, params_buffer, world_group, params_group)
}

fn align_up(size: u64, alignment: u64) -> u64 {
    debug_assert!(alignment.is_power_of_two());
    (size + alignment - 1) & !(alignment - 1)
}

#[cfg(test)]
mod tests {
    use super::align_up;

    #[test]
    fn align_up_rounds_to_the_next_boundary() {
        assert_eq!(align_up(0, 256), 0);
        assert_eq!(align_up(1, 256), 256);
        assert_eq!(align_up(16, 256), 256);
        assert_eq!(align_up(256, 256), 256);
        assert_eq!(align_up(257, 256), 512);
    }

    #[test]
    fn uniform_sizes_fit_their_aligned_slots() {
        use super::{ObjectParamsUniform, WorldUniform};
        assert!(std::mem::size_of::<WorldUniform>() as u64 <= align_up(128, 256));
        assert!(std::mem::size_of::<ObjectParamsUniform>() as u64 <= align_up(16, 256));
    }
}
