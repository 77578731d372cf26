use super::depth::DEPTH_FORMAT;
use super::uniforms::{SceneUniform, ViewProjectionUniform};
use crate::mesh::MeshVertex;

/// Forward mesh pipeline and its frame-wide bindings.
///
/// Bind group 0 carries the per-frame camera and lighting uniforms; groups
/// 1 and 2 are the per-object dynamic-offset groups owned by
/// [`ObjectUniforms`](super::ObjectUniforms).
pub struct MeshPipeline {
    pipeline: wgpu::RenderPipeline,

    world_layout: wgpu::BindGroupLayout,
    params_layout: wgpu::BindGroupLayout,

    view_proj_ubo: wgpu::Buffer,
    scene_ubo: wgpu::Buffer,
    frame_group: wgpu::BindGroup,
}

impl MeshPipeline {
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("basalt mesh shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/mesh.wgsl").into()),
        });

        let frame_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("basalt frame bgl"),
            entries: &[
                uniform_entry::<ViewProjectionUniform>(0, wgpu::ShaderStages::VERTEX, false),
                uniform_entry::<SceneUniform>(1, wgpu::ShaderStages::FRAGMENT, false),
            ],
        });

        let world_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("basalt world bgl"),
            entries: &[uniform_entry::<super::WorldUniform>(
                0,
                wgpu::ShaderStages::VERTEX,
                true,
            )],
        });

        let params_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("basalt params bgl"),
            entries: &[uniform_entry::<super::ObjectParamsUniform>(
                0,
                wgpu::ShaderStages::FRAGMENT,
                true,
            )],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("basalt mesh pipeline layout"),
            bind_group_layouts: &[&frame_layout, &world_layout, &params_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("basalt mesh pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[MeshVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),

            multiview_mask: None,
            cache: None,
        });

        let view_proj_ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("basalt view-proj ubo"),
            size: std::mem::size_of::<ViewProjectionUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let scene_ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("basalt scene ubo"),
            size: std::mem::size_of::<SceneUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let frame_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("basalt frame bind group"),
            layout: &frame_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: view_proj_ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: scene_ubo.as_entire_binding(),
                },
            ],
        });

        Self {
            pipeline,
            world_layout,
            params_layout,
            view_proj_ubo,
            scene_ubo,
            frame_group,
        }
    }

    /// Uploads the per-frame camera and lighting uniforms.
    pub fn write_frame_uniforms(
        &self,
        queue: &wgpu::Queue,
        view_proj: ViewProjectionUniform,
        scene: SceneUniform,
    ) {
        queue.write_buffer(&self.view_proj_ubo, 0, bytemuck::bytes_of(&view_proj));
        queue.write_buffer(&self.scene_ubo, 0, bytemuck::bytes_of(&scene));
    }

    pub fn pipeline(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }

    pub fn frame_group(&self) -> &wgpu::BindGroup {
        &self.frame_group
    }

    pub fn world_layout(&self) -> &wgpu::BindGroupLayout {
        &self.world_layout
    }

    pub fn params_layout(&self) -> &wgpu::BindGroupLayout {
        &self.params_layout
    }
}

fn uniform_entry<T>(
    binding: u32,
    visibility: wgpu::ShaderStages,
    has_dynamic_offset: bool,
) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset,
            min_binding_size: std::num::NonZeroU64::new(std::mem::size_of::<T>() as u64),
        },
        count: None,
    }
}
