// Host-side tests for camera matrices.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod navigator {
        include!("../src/core/navigator.rs");
    }
    pub mod tween {
        include!("../src/core/tween.rs");
    }
}
mod camera {
    include!("../src/camera.rs");
}

use crate::core::navigator::CameraPose;
use glam::{Vec3, Vec4};

#[test]
fn view_places_home_shapes_in_front_of_camera() {
    let view = camera::view_matrix(&CameraPose::for_section(0));
    let p = view.transform_point3(Vec3::new(0.0, 0.0, 15.0));
    assert!((p.z + 15.0).abs() < 1e-4);
    assert!(p.x.abs() < 1e-5 && p.y.abs() < 1e-5);
}

#[test]
fn camera_position_maps_to_view_origin() {
    for i in 0..4 {
        let pose = CameraPose::for_section(i);
        let view = camera::view_matrix(&pose);
        let eye = view.transform_point3(Vec3::new(0.0, 0.0, pose.depth));
        assert!(eye.length() < 1e-4, "section {i}: {eye:?}");
    }
}

#[test]
fn projection_centers_forward_points() {
    let vp = camera::view_proj(&CameraPose::default(), 16.0 / 9.0);
    let clip = vp * Vec4::new(0.0, 0.0, 15.0, 1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn points_behind_camera_have_negative_w() {
    // far shapes sit behind the camera and must not be drawn
    let vp = camera::view_proj(&CameraPose::default(), 1.0);
    let clip = vp * Vec4::new(0.0, 0.0, 50.0, 1.0);
    assert!(clip.w < 0.0);
}

#[test]
fn degenerate_aspect_does_not_produce_nan() {
    let m = camera::projection_matrix(0.0);
    assert!(m.to_cols_array().iter().all(|v| v.is_finite()));
}
