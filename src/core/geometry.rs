// Wireframe geometry for the decorative shapes and stars.
//
// Polyhedra are built from their canonical vertex sets and the edges are
// recovered as every vertex pair at the minimum pairwise distance, which for
// the regular solids is exactly the edge set. Faces for the translucent
// shells are recovered the same way, as the supporting planes of the vertex
// set.

use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

/// Golden ratio.
const PHI: f32 = 1.618_034;

pub const TORUS_RADIAL_SEGMENTS: usize = 8;
pub const TORUS_TUBULAR_SEGMENTS: usize = 32;

/// Line segments in model space.
pub type Segments = Vec<[Vec3; 2]>;

/// Triangles in model space, counter-clockwise when seen from outside.
pub type Triangles = Vec<[Vec3; 3]>;

/// Uniform scales of the glow shell and inner fill relative to the wireframe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShellFactors {
    pub glow: f32,
    pub fill: f32,
}

/// Closed set of decorative shape kinds, one per page section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Dodecahedron,
    Octahedron,
    Torus,
    Icosahedron,
}

impl ShapeKind {
    /// Wireframe for this kind with circumradius (or ring radius for the torus) `size`.
    pub fn wireframe(self, size: f32) -> Segments {
        match self {
            ShapeKind::Torus => torus_segments(
                size,
                size / 3.0,
                TORUS_RADIAL_SEGMENTS,
                TORUS_TUBULAR_SEGMENTS,
            ),
            _ => polyhedron_edges(&self.vertices(size)),
        }
    }

    /// Closed surface matching [`ShapeKind::wireframe`], for the glow and fill shells.
    pub fn surface(self, size: f32) -> Triangles {
        match self {
            ShapeKind::Torus => torus_triangles(
                size,
                size / 3.0,
                TORUS_RADIAL_SEGMENTS,
                TORUS_TUBULAR_SEGMENTS,
            ),
            _ => polyhedron_faces(&self.vertices(size)),
        }
    }

    pub fn shell_factors(self) -> ShellFactors {
        match self {
            ShapeKind::Octahedron => ShellFactors {
                glow: 1.05,
                fill: 0.975,
            },
            _ => ShellFactors {
                glow: 3.2 / 3.0,
                fill: 2.9 / 3.0,
            },
        }
    }

    fn vertices(self, size: f32) -> Vec<Vec3> {
        match self {
            ShapeKind::Dodecahedron => scale_to_radius(dodecahedron_vertices(), size),
            ShapeKind::Octahedron => octahedron_vertices(size),
            ShapeKind::Icosahedron => scale_to_radius(icosahedron_vertices(), size),
            ShapeKind::Torus => Vec::new(),
        }
    }
}

/// Small octahedron used to draw each star.
pub fn star_wireframe(size: f32) -> Segments {
    polyhedron_edges(&octahedron_vertices(size))
}

pub fn octahedron_vertices(radius: f32) -> Vec<Vec3> {
    vec![
        Vec3::X * radius,
        -Vec3::X * radius,
        Vec3::Y * radius,
        -Vec3::Y * radius,
        Vec3::Z * radius,
        -Vec3::Z * radius,
    ]
}

pub fn icosahedron_vertices() -> Vec<Vec3> {
    let mut v = Vec::with_capacity(12);
    for a in [-1.0, 1.0] {
        for b in [-PHI, PHI] {
            v.push(Vec3::new(0.0, a, b));
            v.push(Vec3::new(a, b, 0.0));
            v.push(Vec3::new(b, 0.0, a));
        }
    }
    v
}

pub fn dodecahedron_vertices() -> Vec<Vec3> {
    let inv = 1.0 / PHI;
    let mut v = Vec::with_capacity(20);
    for x in [-1.0, 1.0] {
        for y in [-1.0, 1.0] {
            for z in [-1.0, 1.0] {
                v.push(Vec3::new(x, y, z));
            }
        }
    }
    for a in [-inv, inv] {
        for b in [-PHI, PHI] {
            v.push(Vec3::new(0.0, a, b));
            v.push(Vec3::new(a, b, 0.0));
            v.push(Vec3::new(b, 0.0, a));
        }
    }
    v
}

fn scale_to_radius(vertices: Vec<Vec3>, radius: f32) -> Vec<Vec3> {
    vertices
        .into_iter()
        .map(|p| p.normalize_or_zero() * radius)
        .collect()
}

/// Every vertex pair separated by the minimum pairwise distance.
pub fn polyhedron_edges(vertices: &[Vec3]) -> Segments {
    let mut min_d = f32::MAX;
    for (i, a) in vertices.iter().enumerate() {
        for b in &vertices[i + 1..] {
            let d = a.distance(*b);
            if d > 1e-6 && d < min_d {
                min_d = d;
            }
        }
    }
    let tol = min_d * 1e-3;
    let mut out = Vec::new();
    for (i, a) in vertices.iter().enumerate() {
        for b in &vertices[i + 1..] {
            if (a.distance(*b) - min_d).abs() <= tol {
                out.push([*a, *b]);
            }
        }
    }
    out
}

fn torus_point(radius: f32, tube: f32, radial: usize, tubular: usize, i: usize, j: usize) -> Vec3 {
    let u = (i % tubular) as f32 / tubular as f32 * TAU;
    let v = (j % radial) as f32 / radial as f32 * TAU;
    let r = radius + tube * v.cos();
    Vec3::new(r * u.cos(), r * u.sin(), tube * v.sin())
}

/// Torus lattice in the XY plane: rings around the tube plus rings along it.
pub fn torus_segments(radius: f32, tube: f32, radial: usize, tubular: usize) -> Segments {
    let point = |i, j| torus_point(radius, tube, radial, tubular, i, j);
    let mut out = Vec::with_capacity(2 * radial * tubular);
    for i in 0..tubular {
        for j in 0..radial {
            let p = point(i, j);
            out.push([p, point(i + 1, j)]);
            out.push([p, point(i, j + 1)]);
        }
    }
    out
}

/// Two triangles per lattice cell, wound to face away from the tube's core.
pub fn torus_triangles(radius: f32, tube: f32, radial: usize, tubular: usize) -> Triangles {
    let point = |i, j| torus_point(radius, tube, radial, tubular, i, j);
    let mut out = Vec::with_capacity(2 * radial * tubular);
    for i in 0..tubular {
        for j in 0..radial {
            let (a, b) = (point(i, j), point(i + 1, j));
            let (c, d) = (point(i + 1, j + 1), point(i, j + 1));
            for tri in [[a, b, c], [a, c, d]] {
                let centroid = (tri[0] + tri[1] + tri[2]) / 3.0;
                let axis = Vec2::new(centroid.x, centroid.y).normalize_or_zero() * radius;
                out.push(wind_outward(tri, centroid - axis.extend(0.0)));
            }
        }
    }
    out
}

/// Faces of a convex, origin-centred vertex set, fanned into triangles.
///
/// Each face is a supporting plane through at least three vertices with every
/// other vertex behind it. Triangular faces are emitted as-is; larger faces are
/// fanned from their centroid.
pub fn polyhedron_faces(vertices: &[Vec3]) -> Triangles {
    let n = vertices.len();
    let mut normals: Vec<Vec3> = Vec::new();
    let mut out = Vec::new();
    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                let a = vertices[i];
                let normal = (vertices[j] - a).cross(vertices[k] - a).normalize_or_zero();
                if normal == Vec3::ZERO {
                    continue;
                }
                let (normal, dist) = match normal.dot(a) {
                    d if d < 0.0 => (-normal, -d),
                    d => (normal, d),
                };
                let tol = 1e-3 * dist.max(1e-3);
                if dist <= 1e-4 || vertices.iter().any(|v| normal.dot(*v) > dist + tol) {
                    continue;
                }
                if normals.iter().any(|m| m.dot(normal) > 1.0 - 1e-4) {
                    continue;
                }
                normals.push(normal);
                let face: Vec<Vec3> = vertices
                    .iter()
                    .copied()
                    .filter(|v| (normal.dot(*v) - dist).abs() <= tol)
                    .collect();
                fan_face(&face, normal, &mut out);
            }
        }
    }
    out
}

fn fan_face(face: &[Vec3], normal: Vec3, out: &mut Triangles) {
    let centroid = face.iter().copied().sum::<Vec3>() / face.len() as f32;
    let u = (face[0] - centroid).normalize_or_zero();
    let w = normal.cross(u);
    let mut ring = face.to_vec();
    ring.sort_by(|p, q| {
        let angle = |v: &Vec3| (*v - centroid).dot(w).atan2((*v - centroid).dot(u));
        angle(p).total_cmp(&angle(q))
    });
    if ring.len() == 3 {
        out.push(wind_outward([ring[0], ring[1], ring[2]], normal));
        return;
    }
    for (idx, p) in ring.iter().enumerate() {
        let q = ring[(idx + 1) % ring.len()];
        out.push(wind_outward([centroid, *p, q], normal));
    }
}

#[inline]
fn wind_outward(tri: [Vec3; 3], outward: Vec3) -> [Vec3; 3] {
    let [a, b, c] = tri;
    if (b - a).cross(c - a).dot(outward) < 0.0 {
        [a, c, b]
    } else {
        tri
    }
}
