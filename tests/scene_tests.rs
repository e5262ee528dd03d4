// Host-side tests for the per-frame scene update and mesh building.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod mesh {
        include!("../src/core/mesh.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}

use crate::core::geometry::ShapeKind;
use crate::constants::{FILL_OPACITY, GLOW_OPACITY};
use crate::core::mesh::{ColorVertex, FrameVertices, SceneMesh};
use crate::core::scene::*;
use glam::{Vec2, Vec3};

fn scene() -> Scene {
    Scene::new(Layout::Wide, 7)
}

#[test]
fn shapes_follow_section_order() {
    let s = scene();
    let kinds: Vec<ShapeKind> = s.shapes.iter().map(|sh| sh.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ShapeKind::Dodecahedron,
            ShapeKind::Octahedron,
            ShapeKind::Torus,
            ShapeKind::Icosahedron
        ]
    );
    for (i, sh) in s.shapes.iter().enumerate() {
        assert_eq!(sh.section, i);
        assert_eq!(sh.position, sh.home);
        assert_eq!(sh.home.z, 15.0);
        assert_eq!(sh.far.z, 50.0);
    }
    assert_eq!(s.shapes[0].home.x, -5.0);
    assert_eq!(s.shapes[1].home.x, 5.0);
}

#[test]
fn tick_rotations_never_decrease() {
    let mut s = scene();
    let mut prev: Vec<Vec2> = s.shapes.iter().map(|sh| sh.rotation).collect();
    let mut prev_star = s.starfield.stars()[0].rotation;
    for frame in 0..500 {
        s.tick(frame as f32 / 60.0, frame % 4);
        for (sh, p) in s.shapes.iter().zip(&prev) {
            assert!(sh.rotation.x > p.x && sh.rotation.y > p.y);
        }
        prev = s.shapes.iter().map(|sh| sh.rotation).collect();
        let r = s.starfield.stars()[0].rotation;
        assert!(r.x > prev_star.x && r.y > prev_star.y);
        prev_star = r;
    }
}

#[test]
fn inactive_shape_converges_geometrically_to_far_depth() {
    let mut s = scene();
    let target = s.shapes[1].far.z;
    let mut dist = (target - s.shapes[1].position.z).abs();
    assert_eq!(dist, 35.0);

    s.tick(0.0, 0);
    let next = (target - s.shapes[1].position.z).abs();
    assert!((next - dist * 0.9).abs() < 1e-4);
    dist = next;

    let mut frames = 0;
    while dist > 1e-3 {
        s.tick(0.0, 0);
        let next = (target - s.shapes[1].position.z).abs();
        assert!(next < dist, "distance grew from {dist} to {next}");
        dist = next;
        frames += 1;
        assert!(frames < 1000);
    }
}

#[test]
fn active_shape_returns_home() {
    let mut s = scene();
    for _ in 0..200 {
        s.tick(0.0, 0);
    }
    assert!((s.shapes[2].position.z - 50.0).abs() < 1e-3);
    for _ in 0..200 {
        s.tick(0.0, 2);
    }
    assert!((s.shapes[2].position.z - 15.0).abs() < 1e-3);
    assert!((s.shapes[2].scale - 1.0).abs() < 1e-4);
    // the shape that was active is now far away
    assert!((s.shapes[0].position.z - 50.0).abs() < 1e-3);
}

#[test]
fn active_shape_at_home_stays_put() {
    let mut s = scene();
    s.tick(0.0, 0);
    assert_eq!(s.shapes[0].position.z, 15.0);
    assert_eq!(s.shapes[0].scale, 1.0);
    assert_eq!(s.shapes[0].opacity, 1.0);
}

#[test]
fn scale_and_opacity_track_depth() {
    let mut s = scene();
    for _ in 0..300 {
        s.tick(0.0, 0);
    }
    let sh = &s.shapes[3];
    let expected = 1.0 - (sh.position.z - sh.home.z) / 50.0;
    assert!((sh.scale - expected).abs() < 1e-5);
    assert!((sh.scale - 0.3).abs() < 1e-3);
    assert_eq!(sh.scale, sh.opacity);
}

#[test]
fn depth_scale_is_clamped() {
    assert_eq!(depth_scale(15.0, 15.0), 1.0);
    assert!((depth_scale(40.0, 15.0) - 0.5).abs() < 1e-6);
    assert_eq!(depth_scale(200.0, 15.0), 0.0);
    assert_eq!(depth_scale(-100.0, 15.0), 1.0);
}

#[test]
fn shapes_float_with_time() {
    let mut s = scene();
    s.tick(std::f32::consts::FRAC_PI_2, 0);
    for sh in &s.shapes {
        assert!((sh.position.y - 0.5).abs() < 1e-5);
    }
    s.tick(0.0, 0);
    for sh in &s.shapes {
        assert!(sh.position.y.abs() < 1e-6);
    }
}

#[test]
fn star_wraps_exactly_once() {
    let depths: Vec<f32> = std::iter::successors(Some(49.99_f32), |z| Some(next_star_depth(*z)))
        .take(10)
        .collect();
    let wraps: Vec<usize> = depths
        .windows(2)
        .enumerate()
        .filter(|(_, w)| w[1] < w[0])
        .map(|(i, _)| i + 1)
        .collect();
    assert_eq!(wraps.len(), 1, "depths: {depths:?}");
    assert_eq!(depths[wraps[0]], -50.0);
    assert!(depths[wraps[0] - 1] <= 50.0);
}

#[test]
fn starfield_tick_advances_and_wraps() {
    let mut field = Starfield::from_stars(vec![
        Star {
            position: Vec3::new(1.0, 2.0, 0.0),
            rotation: Vec2::ZERO,
        },
        Star {
            position: Vec3::new(0.0, 0.0, 50.0),
            rotation: Vec2::ZERO,
        },
    ]);
    field.tick();
    let stars = field.stars();
    assert!((stars[0].position.z - 0.01).abs() < 1e-6);
    assert_eq!(stars[0].position.x, 1.0);
    assert_eq!(stars[1].position.z, -50.0);
    assert!((stars[0].rotation.x - 0.001).abs() < 1e-7);
}

#[test]
fn starfield_is_seeded_and_bounded() {
    let a = Starfield::new(200, 42);
    let b = Starfield::new(200, 42);
    assert_eq!(a.stars().len(), 200);
    assert_eq!(a.stars(), b.stars());
    for star in a.stars() {
        for c in star.position.to_array() {
            assert!((-50.0..50.0).contains(&c));
        }
    }
}

#[test]
fn layout_follows_viewport_width() {
    assert_eq!(Layout::for_viewport_width(375.0), Layout::Narrow);
    assert_eq!(Layout::for_viewport_width(767.9), Layout::Narrow);
    assert_eq!(Layout::for_viewport_width(768.0), Layout::Wide);
    assert_eq!(Layout::for_viewport_width(1920.0), Layout::Wide);
}

#[test]
fn narrow_layout_pulls_shapes_closer() {
    let mut s = scene();
    assert!(!s.set_layout(Layout::Wide));
    assert!(s.set_layout(Layout::Narrow));
    assert_eq!(s.layout(), Layout::Narrow);
    assert_eq!(s.shapes[0].home, Vec3::new(-2.5, 0.0, 8.0));
    assert_eq!(s.shapes[0].far.z, 45.0);
    // depth eases toward the new home rather than jumping
    assert_eq!(s.shapes[0].position.z, 15.0);
    for _ in 0..200 {
        s.tick(0.0, 0);
    }
    assert!((s.shapes[0].position.z - 8.0).abs() < 1e-3);
    assert!((s.shapes[1].position.z - 45.0).abs() < 1e-3);
}

#[test]
fn mesh_covers_stars_and_visible_shapes() {
    let mut s = scene();
    let mesh = SceneMesh::new(&s);
    let capacity = mesh.capacity(&s);
    let mut out = FrameVertices::default();
    mesh.build(&s, &mut out);
    assert_eq!(out.lines.len(), capacity.lines);
    assert_eq!(out.glow.len() + out.fill.len(), capacity.surfaces);
    assert_eq!(out.lines.len() % 2, 0);
    // octahedron stars: 12 edges each
    assert!(out.lines.len() > 200 * 24);

    s.shapes[2].opacity = 0.0;
    mesh.build(&s, &mut out);
    assert!(out.lines.len() < capacity.lines);
    assert!(out.glow.len() + out.fill.len() < capacity.surfaces);

    let shown = &s.shapes[3];
    assert!(out
        .lines
        .iter()
        .any(|v| v.color == [shown.color[0], shown.color[1], shown.color[2], shown.opacity]));
}

#[test]
fn shells_wrap_each_shape_with_fixed_opacity() {
    let s = scene();
    let mesh = SceneMesh::new(&s);
    let mut out = FrameVertices::default();
    mesh.build(&s, &mut out);

    assert_eq!(out.glow.len(), out.fill.len());
    assert_eq!(out.glow.len() % 3, 0);
    assert!(out.glow.iter().all(|v| v.color[3] == GLOW_OPACITY));
    assert!(out.fill.iter().all(|v| v.color[3] == FILL_OPACITY));

    // the octahedron sits alone at its home position; its glow lies outside
    // the wireframe radius and its fill inside
    let octa = &s.shapes[1];
    let [r, g, b] = octa.color;
    let radius = |v: &ColorVertex| (Vec3::from_array(v.position) - octa.position).length();
    let glow: Vec<f32> = out
        .glow
        .iter()
        .filter(|v| v.color[..3] == [r, g, b])
        .map(radius)
        .collect();
    let fill: Vec<f32> = out
        .fill
        .iter()
        .filter(|v| v.color[..3] == [r, g, b])
        .map(radius)
        .collect();
    assert_eq!(glow.len(), 8 * 3);
    let max_fill = fill.iter().copied().fold(0.0, f32::max);
    let max_glow = glow.iter().copied().fold(0.0, f32::max);
    assert!((max_glow - octa.size * 1.05).abs() < 1e-3, "{max_glow}");
    assert!((max_fill - octa.size * 0.975).abs() < 1e-3, "{max_fill}");
}

#[test]
fn shells_shrink_with_the_shape() {
    let mut s = scene();
    let mesh = SceneMesh::new(&s);
    let mut near = FrameVertices::default();
    mesh.build(&s, &mut near);

    s.shapes[1].scale = 0.5;
    s.shapes[1].opacity = 0.5;
    let mut far = FrameVertices::default();
    mesh.build(&s, &mut far);

    let extent = |out: &FrameVertices, shape: &DecorativeShape| {
        out.glow
            .iter()
            .filter(|v| v.color[..3] == shape.color)
            .map(|v| (Vec3::from_array(v.position) - shape.position).length())
            .fold(0.0, f32::max)
    };
    let full = extent(&near, &s.shapes[1]);
    let half = extent(&far, &s.shapes[1]);
    assert!((half - full * 0.5).abs() < 1e-3);
}
