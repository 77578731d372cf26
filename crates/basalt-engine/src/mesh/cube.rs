use super::{MeshVertex, SubMesh};

/// Axis-aligned unit cube centered at the origin (extents ±0.5).
///
/// Built with four vertices per face so each face carries a flat normal:
/// 24 vertices, 36 indices.
pub fn unit_cube_geometry() -> SubMesh {
    const H: f32 = 0.5;

    // (normal, four corners in counter-clockwise order seen from outside)
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        // +Z
        (
            [0.0, 0.0, 1.0],
            [[-H, -H, H], [H, -H, H], [H, H, H], [-H, H, H]],
        ),
        // -Z
        (
            [0.0, 0.0, -1.0],
            [[H, -H, -H], [-H, -H, -H], [-H, H, -H], [H, H, -H]],
        ),
        // +X
        (
            [1.0, 0.0, 0.0],
            [[H, -H, H], [H, -H, -H], [H, H, -H], [H, H, H]],
        ),
        // -X
        (
            [-1.0, 0.0, 0.0],
            [[-H, -H, -H], [-H, -H, H], [-H, H, H], [-H, H, -H]],
        ),
        // +Y
        (
            [0.0, 1.0, 0.0],
            [[-H, H, H], [H, H, H], [H, H, -H], [-H, H, -H]],
        ),
        // -Y
        (
            [0.0, -1.0, 0.0],
            [[-H, -H, -H], [H, -H, -H], [H, -H, H], [-H, -H, H]],
        ),
    ];

    let mut sub = SubMesh::default();
    for (normal, corners) in faces {
        let base = sub.vertices.len() as u32;
        for position in corners {
            sub.vertices.push(MeshVertex { position, normal });
        }
        sub.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    sub
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::pack;

    #[test]
    fn cube_has_flat_shaded_face_counts() {
        let cube = unit_cube_geometry();
        assert_eq!(cube.vertices.len(), 24);
        assert_eq!(cube.indices.len(), 36);
    }

    #[test]
    fn cube_positions_sit_on_the_half_unit_shell() {
        let cube = unit_cube_geometry();
        for v in &cube.vertices {
            for c in v.position {
                assert!((c.abs() - 0.5).abs() < 1e-6, "corner {:?}", v.position);
            }
        }
    }

    #[test]
    fn cube_normals_are_unit_axis_aligned() {
        let cube = unit_cube_geometry();
        for v in &cube.vertices {
            let [x, y, z] = v.normal;
            let len = (x * x + y * y + z * z).sqrt();
            assert!((len - 1.0).abs() < 1e-6);
            assert_eq!(
                [x.abs(), y.abs(), z.abs()].iter().filter(|c| **c > 0.5).count(),
                1,
                "normal {:?} is not axis-aligned",
                v.normal
            );
        }
    }

    #[test]
    fn cube_faces_share_one_normal_across_their_quad() {
        let cube = unit_cube_geometry();
        for quad in cube.vertices.chunks(4) {
            assert!(quad.iter().all(|v| v.normal == quad[0].normal));
        }
    }

    #[test]
    fn cube_packs_into_a_single_region() {
        let packed = pack(&[unit_cube_geometry()]);
        assert_eq!(packed.regions.len(), 1);
        assert_eq!(packed.regions[0].index_count, 36);
    }
}
