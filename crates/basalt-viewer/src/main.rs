//! Demo scene for the basalt engine: a lit ground slab, a spinning cube
//! ring, and a multi-part pyramid mesh, explored with a fly camera.

use anyhow::Result;

use basalt_engine::camera::FlyCamera;
use basalt_engine::core::{App, AppControl, FrameCtx};
use basalt_engine::device::GpuInit;
use basalt_engine::glam::{Quat, Vec3};
use basalt_engine::input::Key;
use basalt_engine::logging::{LogConfig, init_logging};
use basalt_engine::mesh::{MeshHandle, MeshVertex, SubMesh};
use basalt_engine::window::{Runtime, RuntimeConfig};

struct Viewer {
    camera: FlyCamera,
    cube: Option<MeshHandle>,
    pyramid: Option<MeshHandle>,
    angle: f32,
}

impl Viewer {
    fn new() -> Self {
        Self {
            camera: FlyCamera::new(Vec3::new(0.0, 2.0, 8.0)),
            cube: None,
            pyramid: None,
            angle: 0.0,
        }
    }
}

impl App for Viewer {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        if ctx.input.key_down(Key::Escape) {
            return AppControl::Exit;
        }

        let dt = ctx.time.dt;
        self.angle += 0.8 * dt;
        self.camera.drive(ctx.stage, ctx.input, dt);

        let cube = self.cube.get_or_insert_with(|| ctx.meshes.cube()).clone();
        let pyramid = self
            .pyramid
            .get_or_insert_with(|| ctx.meshes.load(&pyramid_submeshes()))
            .clone();

        // Ground slab.
        ctx.stage
            .model(&cube)
            .position(Vec3::new(0.0, -0.6, 0.0))
            .scale(Vec3::new(14.0, 0.2, 14.0))
            .rgb(Vec3::new(0.35, 0.38, 0.4))
            .draw();

        // Spinning centerpiece.
        ctx.stage
            .model(&cube)
            .position(Vec3::new(0.0, 1.0, 0.0))
            .rotation(Quat::from_rotation_y(self.angle))
            .uniform_scale(1.4)
            .rgb(Vec3::new(0.9, 0.55, 0.2))
            .draw();

        // Ring of small cubes orbiting the centerpiece.
        for i in 0..10 {
            let theta = self.angle * 0.5 + i as f32 * std::f32::consts::TAU / 10.0;
            ctx.stage
                .model(&cube)
                .position(Vec3::new(4.0 * theta.cos(), 0.6, 4.0 * theta.sin()))
                .rotation(Quat::from_rotation_y(-theta))
                .uniform_scale(0.5)
                .rgb(Vec3::new(0.2, 0.45, 0.9))
                .draw();
        }

        // Two-part pyramid to the side.
        ctx.stage
            .model(&pyramid)
            .position(Vec3::new(-5.0, 0.0, -3.0))
            .uniform_scale(2.0)
            .rgb(Vec3::new(0.75, 0.25, 0.3))
            .draw();

        AppControl::Continue
    }
}

/// Square pyramid split into two sub-meshes (base quad + four sides), so
/// the packed mesh exercises multi-region draws.
fn pyramid_submeshes() -> Vec<SubMesh> {
    let apex = [0.0, 1.0, 0.0];
    let c = [
        [-0.5, 0.0, -0.5],
        [0.5, 0.0, -0.5],
        [0.5, 0.0, 0.5],
        [-0.5, 0.0, 0.5],
    ];

    let base = SubMesh {
        vertices: c
            .iter()
            .map(|&position| MeshVertex {
                position,
                normal: [0.0, -1.0, 0.0],
            })
            .collect(),
        indices: vec![0, 2, 1, 0, 3, 2],
    };

    let mut sides = SubMesh::default();
    for i in 0..4 {
        let a = c[i];
        let b = c[(i + 1) % 4];
        let normal = face_normal(a, b, apex);
        let base_idx = sides.vertices.len() as u32;
        for position in [a, b, apex] {
            sides.vertices.push(MeshVertex { position, normal });
        }
        sides
            .indices
            .extend_from_slice(&[base_idx, base_idx + 1, base_idx + 2]);
    }

    vec![base, sides]
}

fn face_normal(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> [f32; 3] {
    let a = Vec3::from(a);
    let n = (Vec3::from(b) - a).cross(Vec3::from(c) - a).normalize();
    n.to_array()
}

fn main() -> Result<()> {
    init_logging(LogConfig::default());
    log::info!("starting basalt viewer (WASDQE + mouse look, Escape quits)");

    Runtime::run(
        RuntimeConfig {
            title: "basalt viewer".to_string(),
            ..Default::default()
        },
        GpuInit::default(),
        Viewer::new(),
    )
}
