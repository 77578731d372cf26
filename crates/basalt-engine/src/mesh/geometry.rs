use super::MeshVertex;

/// One vertex/index stream destined for a shared buffer pair.
#[derive(Debug, Clone, Default)]
pub struct SubMesh {
    pub vertices: Vec<MeshVertex>,
    /// Indices local to this sub-mesh's vertex stream.
    pub indices: Vec<u32>,
}

/// Draw range of one sub-mesh inside the packed buffers.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MeshRegion {
    /// First index within the shared index buffer.
    pub start_index: u32,
    /// Added to each index at draw time, pointing at the sub-mesh's first
    /// vertex in the shared vertex buffer.
    pub base_vertex: i32,
    /// Number of indices to draw.
    pub index_count: u32,
}

/// CPU-side result of packing sub-meshes into contiguous streams.
#[derive(Debug, Clone, Default)]
pub struct PackedGeometry {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
    pub regions: Vec<MeshRegion>,
}

/// Concatenates sub-meshes into one vertex stream and one index stream.
///
/// Indices stay local to their sub-mesh; the draw uses each region's
/// `base_vertex` to relocate them, so no index rewriting happens here.
/// Empty sub-meshes produce no region. An index count that is not a
/// multiple of three is truncated to whole triangles.
pub fn pack(submeshes: &[SubMesh]) -> PackedGeometry {
    let mut packed = PackedGeometry::default();

    for sub in submeshes {
        let index_count = (sub.indices.len() - sub.indices.len() % 3) as u32;
        if sub.vertices.is_empty() || index_count == 0 {
            continue;
        }

        let region = MeshRegion {
            start_index: packed.indices.len() as u32,
            base_vertex: packed.vertices.len() as i32,
            index_count,
        };

        packed.vertices.extend_from_slice(&sub.vertices);
        packed
            .indices
            .extend_from_slice(&sub.indices[..index_count as usize]);
        packed.regions.push(region);
    }

    packed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verts(n: usize) -> Vec<MeshVertex> {
        (0..n)
            .map(|i| MeshVertex {
                position: [i as f32, 0.0, 0.0],
                normal: [0.0, 1.0, 0.0],
            })
            .collect()
    }

    #[test]
    fn regions_follow_buffer_offsets() {
        let a = SubMesh {
            vertices: verts(8),
            indices: (0..12).collect(),
        };
        let b = SubMesh {
            vertices: verts(10),
            indices: (0..18).collect(),
        };

        let packed = pack(&[a, b]);

        assert_eq!(packed.vertices.len(), 18);
        assert_eq!(packed.indices.len(), 30);
        assert_eq!(
            packed.regions,
            vec![
                MeshRegion {
                    start_index: 0,
                    base_vertex: 0,
                    index_count: 12
                },
                MeshRegion {
                    start_index: 12,
                    base_vertex: 8,
                    index_count: 18
                },
            ]
        );
    }

    #[test]
    fn indices_stay_local_to_their_submesh() {
        let a = SubMesh {
            vertices: verts(4),
            indices: vec![0, 1, 2],
        };
        let b = SubMesh {
            vertices: verts(3),
            indices: vec![0, 1, 2],
        };

        let packed = pack(&[a, b]);

        // Second region reuses local indices; relocation is base_vertex's job.
        assert_eq!(&packed.indices[3..6], &[0, 1, 2]);
        assert_eq!(packed.regions[1].base_vertex, 4);
    }

    #[test]
    fn empty_submeshes_are_skipped() {
        let empty = SubMesh::default();
        let real = SubMesh {
            vertices: verts(3),
            indices: vec![0, 1, 2],
        };

        let packed = pack(&[empty.clone(), real, empty]);

        assert_eq!(packed.regions.len(), 1);
        assert_eq!(packed.regions[0].start_index, 0);
        assert_eq!(packed.regions[0].base_vertex, 0);
    }

    #[test]
    fn partial_triangles_are_truncated() {
        let sub = SubMesh {
            vertices: verts(5),
            indices: vec![0, 1, 2, 3, 4],
        };

        let packed = pack(&[sub]);

        assert_eq!(packed.regions[0].index_count, 3);
        assert_eq!(packed.indices.len(), 3);
    }

    #[test]
    fn all_empty_input_packs_to_nothing() {
        let packed = pack(&[SubMesh::default()]);
        assert!(packed.regions.is_empty());
        assert!(packed.vertices.is_empty());
        assert!(packed.indices.is_empty());
    }
}
