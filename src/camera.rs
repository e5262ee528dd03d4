use crate::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR};
use crate::core::navigator::CameraPose;
use glam::{Mat4, Vec3};

/// World-to-view transform for a camera at `(0, 0, pose.depth)` rotated
/// about X then Y.
#[inline]
pub fn view_matrix(pose: &CameraPose) -> Mat4 {
    let world = Mat4::from_translation(Vec3::new(0.0, 0.0, pose.depth))
        * Mat4::from_rotation_x(pose.rotation_x)
        * Mat4::from_rotation_y(pose.rotation_y);
    world.inverse()
}

/// Perspective projection with a [0, 1] depth range (WebGPU clip space).
#[inline]
pub fn projection_matrix(aspect: f32) -> Mat4 {
    Mat4::perspective_rh(
        CAMERA_FOV_DEG.to_radians(),
        aspect.max(1e-3),
        CAMERA_NEAR,
        CAMERA_FAR,
    )
}

#[inline]
pub fn view_proj(pose: &CameraPose, aspect: f32) -> Mat4 {
    projection_matrix(aspect) * view_matrix(pose)
}
