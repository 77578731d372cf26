use glam::{Mat4, Quat, Vec3};

/// Per-object world matrix plus the matrix used for normal transformation.
#[derive(Debug, Copy, Clone)]
pub struct WorldMatrices {
    pub world: Mat4,
    /// `transpose(inverse(world))` — keeps normals correct under
    /// non-uniform scale.
    pub inverse_transpose: Mat4,
}

/// Composes the world matrix for a submission.
///
/// Order is scale, then rotation, then translation. The order is
/// load-bearing: scale must apply in local space before the rotation, or a
/// non-uniformly scaled object shears when rotated.
///
/// # Panics
///
/// A non-invertible world matrix (e.g. an all-zero scale) is caller misuse;
/// skipping it silently would just produce confusingly missing geometry.
pub fn world_matrices(position: Vec3, rotation: Quat, scale: Vec3) -> WorldMatrices {
    let world = Mat4::from_scale_rotation_translation(scale, rotation, position);
    let det = world.determinant();
    assert!(
        det.abs() > f32::EPSILON,
        "world matrix is not invertible (scale {scale:?})"
    );

    WorldMatrices {
        world,
        inverse_transpose: world.inverse().transpose(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_applies_before_translation() {
        let m = world_matrices(
            Vec3::new(0.0, 0.0, -5.0),
            Quat::IDENTITY,
            Vec3::new(2.0, 1.0, 1.0),
        );
        let p = m.world.transform_point3(Vec3::new(1.0, 0.0, 0.0));
        assert!((p - Vec3::new(2.0, 0.0, -5.0)).length() < 1e-5, "{p:?}");
    }

    #[test]
    fn rotation_applies_after_scale() {
        // Scale x by 2, then rotate 90° around Y: local +X ends up on -Z,
        // stretched to length 2.
        let m = world_matrices(
            Vec3::ZERO,
            Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
            Vec3::new(2.0, 1.0, 1.0),
        );
        let p = m.world.transform_point3(Vec3::new(1.0, 0.0, 0.0));
        assert!((p - Vec3::new(0.0, 0.0, -2.0)).length() < 1e-5, "{p:?}");
    }

    #[test]
    fn inverse_transpose_shrinks_normals_under_stretch() {
        let m = world_matrices(Vec3::ZERO, Quat::IDENTITY, Vec3::new(2.0, 1.0, 1.0));
        let n = m.inverse_transpose.transform_vector3(Vec3::new(1.0, 0.0, 0.0));
        // A surface stretched along X has its X-facing normals compressed.
        assert!((n.x - 0.5).abs() < 1e-5, "{n:?}");
        assert!(n.y.abs() < 1e-5 && n.z.abs() < 1e-5, "{n:?}");
    }

    #[test]
    fn inverse_transpose_matches_rotation_for_rigid_transform() {
        let rot = Quat::from_rotation_y(0.7);
        let m = world_matrices(Vec3::new(1.0, 2.0, 3.0), rot, Vec3::ONE);
        let n = m.inverse_transpose.transform_vector3(Vec3::Z);
        let expected = rot * Vec3::Z;
        assert!((n - expected).length() < 1e-5, "{n:?} vs {expected:?}");
    }

    #[test]
    #[should_panic(expected = "not invertible")]
    fn zero_scale_is_fatal() {
        let _ = world_matrices(Vec3::ZERO, Quat::IDENTITY, Vec3::ZERO);
    }
}
