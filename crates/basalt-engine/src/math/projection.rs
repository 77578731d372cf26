use glam::{Mat4, Quat, Vec3};

/// NDC depth-range convention of the active graphics backend.
///
/// Obtained from the device layer, never assumed: projection construction
/// differs between zero-to-one (D3D/Metal/Vulkan-style) and
/// minus-one-to-one (GL-style) clip spaces.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DepthRange {
    ZeroToOne,
    NegativeOneToOne,
}

/// Vertical field of view of the mesh pipeline, in radians.
pub const FOV_Y: f32 = 1.0;

/// Near plane distance.
pub const Z_NEAR: f32 = 0.5;

/// Far plane distance.
pub const Z_FAR: f32 = 1000.0;

/// Builds a perspective projection honoring the backend depth convention.
pub fn perspective(
    depth_range: DepthRange,
    fov_y: f32,
    aspect: f32,
    z_near: f32,
    z_far: f32,
) -> Mat4 {
    match depth_range {
        DepthRange::ZeroToOne => Mat4::perspective_rh(fov_y, aspect, z_near, z_far),
        DepthRange::NegativeOneToOne => Mat4::perspective_rh_gl(fov_y, aspect, z_near, z_far),
    }
}

/// Builds the camera view matrix from a position and orientation.
///
/// Forward is the rotation applied to -Z; up is world +Y.
pub fn look_at(position: Vec3, rotation: Quat) -> Mat4 {
    let forward = rotation * Vec3::NEG_Z;
    Mat4::look_at_rh(position, position + forward, Vec3::Y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    fn ndc_depth(proj: Mat4, z: f32) -> f32 {
        let clip = proj * Vec4::new(0.0, 0.0, z, 1.0);
        clip.z / clip.w
    }

    #[test]
    fn zero_to_one_maps_near_plane_to_zero() {
        let proj = perspective(DepthRange::ZeroToOne, FOV_Y, 16.0 / 9.0, Z_NEAR, Z_FAR);
        let near = ndc_depth(proj, -Z_NEAR);
        let far = ndc_depth(proj, -Z_FAR);
        assert!(near.abs() < 1e-5, "near plane depth {near}");
        assert!((far - 1.0).abs() < 1e-3, "far plane depth {far}");
    }

    #[test]
    fn negative_one_to_one_maps_near_plane_to_minus_one() {
        let proj = perspective(
            DepthRange::NegativeOneToOne,
            FOV_Y,
            16.0 / 9.0,
            Z_NEAR,
            Z_FAR,
        );
        let near = ndc_depth(proj, -Z_NEAR);
        assert!((near + 1.0).abs() < 1e-5, "near plane depth {near}");
    }

    #[test]
    fn identity_rotation_looks_down_negative_z() {
        let view = look_at(Vec3::ZERO, Quat::IDENTITY);
        // A point straight ahead stays on the view-space -Z axis.
        let p = view.transform_point3(Vec3::new(0.0, 0.0, -5.0));
        assert!((p - Vec3::new(0.0, 0.0, -5.0)).length() < 1e-5, "{p:?}");
    }

    #[test]
    fn view_follows_camera_position() {
        let view = look_at(Vec3::new(0.0, 0.0, 3.0), Quat::IDENTITY);
        let p = view.transform_point3(Vec3::ZERO);
        assert!((p - Vec3::new(0.0, 0.0, -3.0)).length() < 1e-5, "{p:?}");
    }
}
