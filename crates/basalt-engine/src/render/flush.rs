use glam::Vec4;

use super::depth::DepthTarget;
use super::objects::ObjectUniforms;
use super::overlay::Overlay;
use super::pipeline::MeshPipeline;
use super::uniforms::{ObjectParamsUniform, SceneUniform, ViewProjectionUniform, WorldUniform};
use crate::device::{Gpu, GpuFrame};
use crate::input::{InputFrame, InputState};
use crate::math::{self, FOV_Y, Z_FAR, Z_NEAR};
use crate::scene::Stage;
use crate::time::FrameTime;

/// Flushes a recorded stage to the GPU.
///
/// Two phases per frame: first every uniform is written (frame-wide
/// camera/lighting, then one slot per submission), then a single render
/// pass replays the submission list in order. An overlay, if present,
/// draws after the pass on top of the scene.
pub struct MeshRenderer {
    pipeline: MeshPipeline,
    objects: ObjectUniforms,
    depth: DepthTarget,
    scratch: Vec<(WorldUniform, ObjectParamsUniform)>,
}

impl MeshRenderer {
    pub fn new(gpu: &Gpu<'_>) -> Self {
        let device = gpu.device();
        let pipeline = MeshPipeline::new(device, gpu.surface_format());
        let objects =
            ObjectUniforms::new(device, pipeline.world_layout(), pipeline.params_layout());
        let depth = DepthTarget::new(device, gpu.size());

        Self {
            pipeline,
            objects,
            depth,
            scratch: Vec::new(),
        }
    }

    /// Encodes one frame: clears to the stage's clear color, draws every
    /// submission in order, then lets the overlay draw.
    pub fn flush(
        &mut self,
        gpu: &Gpu<'_>,
        frame: &mut GpuFrame,
        stage: &Stage,
        overlay: Option<&mut dyn Overlay>,
        input: &InputState,
        input_frame: &InputFrame,
        time: FrameTime,
    ) {
        let device = gpu.device();
        let queue = gpu.queue();

        self.depth.ensure(device, gpu.size());

        let view = math::look_at(stage.camera_position(), stage.camera_rotation());
        let proj = math::perspective(
            gpu.depth_range(),
            FOV_Y,
            gpu.aspect_ratio(),
            Z_NEAR,
            Z_FAR,
        );
        self.pipeline.write_frame_uniforms(
            queue,
            ViewProjectionUniform::new(proj * view),
            SceneUniform::default(),
        );

        self.scratch.clear();
        for submission in stage.submissions().items() {
            let snap = &submission.snapshot;
            let matrices = math::world_matrices(snap.position, snap.rotation, snap.scale);
            self.scratch
                .push((WorldUniform::from(matrices), ObjectParamsUniform::from(snap)));
        }
        self.objects.prepare(device, queue, &self.scratch);

        {
            let mut rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("basalt mesh pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear_color(stage.clear_color())),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: self.depth.view(),
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            rpass.set_pipeline(self.pipeline.pipeline());
            rpass.set_bind_group(0, self.pipeline.frame_group(), &[]);

            for (i, submission) in stage.submissions().items().iter().enumerate() {
                let mesh = &submission.mesh;
                if mesh.is_empty() {
                    continue;
                }

                let (world_offset, params_offset) = self.objects.offsets(i);
                rpass.set_bind_group(1, self.objects.world_group(), &[world_offset]);
                rpass.set_bind_group(2, self.objects.params_group(), &[params_offset]);

                rpass.set_vertex_buffer(0, mesh.vertex_buffer().slice(..));
                rpass.set_index_buffer(mesh.index_buffer().slice(..), mesh.index_format());

                for region in mesh.regions() {
                    rpass.draw_indexed(
                        region.start_index..region.start_index + region.index_count,
                        region.base_vertex,
                        0..1,
                    );
                }
            }
        }

        if let Some(overlay) = overlay {
            overlay.update(input, input_frame, time);
            overlay.draw(
                device,
                queue,
                &mut frame.encoder,
                &frame.view,
                gpu.surface_format(),
                gpu.size(),
            );
        }
    }
}

fn clear_color(color: Vec4) -> wgpu::Color {
    wgpu::Color {
        r: color.x as f64,
        g: color.y as f64,
        b: color.z as f64,
        a: color.w as f64,
    }
}
