use std::sync::Arc;

use wgpu::util::DeviceExt;

use super::{MeshRegion, MeshVertex, PackedGeometry, SubMesh, pack, unit_cube_geometry};

/// GPU-resident mesh: one vertex buffer, one index buffer, and the regions
/// that slice them per sub-mesh.
pub struct Mesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_format: wgpu::IndexFormat,
    regions: Vec<MeshRegion>,
}

/// Shared mesh reference held by submissions. Cloning is cheap; the GPU
/// buffers live as long as any handle does.
pub type MeshHandle = Arc<Mesh>;

impl Mesh {
    pub fn vertex_buffer(&self) -> &wgpu::Buffer {
        &self.vertex_buffer
    }

    pub fn index_buffer(&self) -> &wgpu::Buffer {
        &self.index_buffer
    }

    pub fn index_format(&self) -> wgpu::IndexFormat {
        self.index_format
    }

    pub fn regions(&self) -> &[MeshRegion] {
        &self.regions
    }

    /// A mesh with no regions draws nothing.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Uploads packed geometry and owns the built-in primitives.
pub struct MeshStore {
    cube: MeshHandle,
}

impl MeshStore {
    /// Creates the store and uploads the built-in unit cube.
    pub fn new(device: &wgpu::Device) -> Self {
        let packed = pack(&[unit_cube_geometry()]);

        // The cube fits comfortably in 16-bit indices.
        let indices: Vec<u16> = packed.indices.iter().map(|&i| i as u16).collect();
        let cube = Arc::new(upload(
            device,
            "basalt cube",
            &packed.vertices,
            bytemuck::cast_slice(&indices),
            wgpu::IndexFormat::Uint16,
            packed.regions,
        ));

        Self { cube }
    }

    /// Returns the built-in unit cube.
    pub fn cube(&self) -> MeshHandle {
        Arc::clone(&self.cube)
    }

    /// Packs the sub-meshes and uploads them as one mesh.
    ///
    /// All-empty input still yields a valid (empty) mesh; drawing it is a
    /// no-op.
    pub fn load(&self, device: &wgpu::Device, submeshes: &[SubMesh]) -> MeshHandle {
        let PackedGeometry {
            vertices,
            indices,
            regions,
        } = pack(submeshes);

        Arc::new(upload(
            device,
            "basalt mesh",
            &vertices,
            bytemuck::cast_slice(&indices),
            wgpu::IndexFormat::Uint32,
            regions,
        ))
    }
}

fn upload(
    device: &wgpu::Device,
    label: &str,
    vertices: &[MeshVertex],
    index_bytes: &[u8],
    index_format: wgpu::IndexFormat,
    regions: Vec<MeshRegion>,
) -> Mesh {
    // Zero-sized buffers are rejected by some backends; keep a one-vertex
    // placeholder for empty meshes. Their region list is empty, so it is
    // never read.
    let vertex_bytes: &[u8] = if vertices.is_empty() {
        const PLACEHOLDER: MeshVertex = MeshVertex {
            position: [0.0; 3],
            normal: [0.0, 1.0, 0.0],
        };
        bytemuck::bytes_of(&PLACEHOLDER)
    } else {
        bytemuck::cast_slice(vertices)
    };

    let index_bytes: &[u8] = if index_bytes.is_empty() {
        &[0u8; 4]
    } else {
        index_bytes
    };

    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{label} vertices")),
        contents: vertex_bytes,
        usage: wgpu::BufferUsages::VERTEX,
    });

    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{label} indices")),
        contents: index_bytes,
        usage: wgpu::BufferUsages::INDEX,
    });

    Mesh {
        vertex_buffer,
        index_buffer,
        index_format,
        regions,
    }
}
