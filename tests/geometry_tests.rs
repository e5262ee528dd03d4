// Host-side tests for wireframe geometry.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod geometry {
    include!("../src/core/geometry.rs");
}

use geometry::*;

#[test]
fn polyhedra_have_expected_edge_counts() {
    assert_eq!(ShapeKind::Octahedron.wireframe(4.0).len(), 12);
    assert_eq!(ShapeKind::Icosahedron.wireframe(3.0).len(), 30);
    assert_eq!(ShapeKind::Dodecahedron.wireframe(3.0).len(), 30);
    assert_eq!(star_wireframe(0.25).len(), 12);
}

#[test]
fn polyhedra_vertices_sit_on_circumsphere() {
    for (kind, size) in [
        (ShapeKind::Dodecahedron, 3.0),
        (ShapeKind::Octahedron, 4.0),
        (ShapeKind::Icosahedron, 3.0),
    ] {
        for [a, b] in kind.wireframe(size) {
            assert!((a.length() - size).abs() < 1e-4, "{kind:?}");
            assert!((b.length() - size).abs() < 1e-4, "{kind:?}");
        }
    }
}

#[test]
fn polyhedron_edges_share_one_length() {
    for kind in [ShapeKind::Dodecahedron, ShapeKind::Icosahedron] {
        let edges = kind.wireframe(3.0);
        let first = edges[0][0].distance(edges[0][1]);
        for [a, b] in &edges {
            assert!((a.distance(*b) - first).abs() < 1e-3);
        }
    }
}

#[test]
fn torus_lattice_size_and_extent() {
    let segs = ShapeKind::Torus.wireframe(3.0);
    assert_eq!(segs.len(), 2 * TORUS_RADIAL_SEGMENTS * TORUS_TUBULAR_SEGMENTS);
    for [a, _] in &segs {
        let ring = (a.x * a.x + a.y * a.y).sqrt();
        assert!(ring >= 2.0 - 1e-4 && ring <= 4.0 + 1e-4);
        assert!(a.z.abs() <= 1.0 + 1e-4);
    }
}

#[test]
fn canonical_vertex_counts() {
    assert_eq!(dodecahedron_vertices().len(), 20);
    assert_eq!(icosahedron_vertices().len(), 12);
    assert_eq!(octahedron_vertices(1.0).len(), 6);
}

#[test]
fn polyhedron_surfaces_cover_every_face() {
    assert_eq!(ShapeKind::Octahedron.surface(4.0).len(), 8);
    assert_eq!(ShapeKind::Icosahedron.surface(3.0).len(), 20);
    // twelve pentagons, each fanned into five triangles
    assert_eq!(ShapeKind::Dodecahedron.surface(3.0).len(), 60);
}

#[test]
fn polyhedron_surfaces_face_outward() {
    for kind in [
        ShapeKind::Dodecahedron,
        ShapeKind::Octahedron,
        ShapeKind::Icosahedron,
    ] {
        for [a, b, c] in kind.surface(3.0) {
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(normal.dot(centroid) > 0.0, "{kind:?}");
        }
    }
}

#[test]
fn torus_surface_faces_away_from_its_core() {
    let tris = ShapeKind::Torus.surface(3.0);
    assert_eq!(tris.len(), 2 * TORUS_RADIAL_SEGMENTS * TORUS_TUBULAR_SEGMENTS);
    for [a, b, c] in tris {
        let centroid = (a + b + c) / 3.0;
        let ring = glam::Vec3::new(centroid.x, centroid.y, 0.0).normalize() * 3.0;
        assert!((b - a).cross(c - a).dot(centroid - ring) > 0.0);
    }
}

#[test]
fn shells_straddle_the_wireframe() {
    for kind in [
        ShapeKind::Dodecahedron,
        ShapeKind::Octahedron,
        ShapeKind::Torus,
        ShapeKind::Icosahedron,
    ] {
        let f = kind.shell_factors();
        assert!(f.glow > 1.0 && f.glow < 1.1, "{kind:?}");
        assert!(f.fill < 1.0 && f.fill > 0.95, "{kind:?}");
    }
    assert_eq!(ShapeKind::Octahedron.shell_factors().glow, 1.05);
}
