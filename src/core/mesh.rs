use crate::constants::{FILL_OPACITY, GLOW_OPACITY, STAR_COLOR, STAR_SIZE};
use crate::core::geometry::{star_wireframe, Segments, ShellFactors, Triangles};
use crate::core::scene::Scene;
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Vertex layout shared by the line and shell pipelines.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// World-space vertices for one frame, one list per draw.
#[derive(Debug, Default)]
pub struct FrameVertices {
    /// Line list: stars and shape wireframes.
    pub lines: Vec<ColorVertex>,
    /// Triangle list drawn back faces only, slightly larger than each shape.
    pub glow: Vec<ColorVertex>,
    /// Triangle list drawn front faces only, slightly smaller than each shape.
    pub fill: Vec<ColorVertex>,
}

impl FrameVertices {
    pub fn clear(&mut self) {
        self.lines.clear();
        self.glow.clear();
        self.fill.clear();
    }
}

/// Upper bounds on vertices emitted per frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeshCapacity {
    pub lines: usize,
    /// Glow and fill together; they share one buffer.
    pub surfaces: usize,
}

struct ShapeMesh {
    edges: Segments,
    surface: Triangles,
    shells: ShellFactors,
}

/// Model-space geometry for everything the scene draws, built once.
pub struct SceneMesh {
    star: Segments,
    shapes: Vec<ShapeMesh>,
}

impl SceneMesh {
    pub fn new(scene: &Scene) -> Self {
        Self {
            star: star_wireframe(STAR_SIZE),
            shapes: scene
                .shapes
                .iter()
                .map(|s| ShapeMesh {
                    edges: s.kind.wireframe(s.size),
                    surface: s.kind.surface(s.size),
                    shells: s.kind.shell_factors(),
                })
                .collect(),
        }
    }

    pub fn capacity(&self, scene: &Scene) -> MeshCapacity {
        let stars = self.star.len() * scene.starfield.stars().len();
        let edges: usize = self.shapes.iter().map(|s| s.edges.len()).sum();
        let triangles: usize = self.shapes.iter().map(|s| s.surface.len()).sum();
        MeshCapacity {
            lines: (stars + edges) * 2,
            surfaces: triangles * 3 * 2,
        }
    }

    /// Transform every wireframe and shell into world space, replacing the
    /// contents of `out`. Fully transparent shapes are skipped.
    pub fn build(&self, scene: &Scene, out: &mut FrameVertices) {
        out.clear();
        let star_rgba = [STAR_COLOR[0], STAR_COLOR[1], STAR_COLOR[2], 1.0];
        for star in scene.starfield.stars() {
            let m = Mat4::from_rotation_translation(
                Quat::from_euler(EulerRot::XYZ, star.rotation.x, star.rotation.y, 0.0),
                star.position,
            );
            push_segments(&mut out.lines, &self.star, &m, star_rgba);
        }
        for (shape, mesh) in scene.shapes.iter().zip(&self.shapes) {
            if shape.opacity <= 0.0 {
                continue;
            }
            let [r, g, b] = shape.color;
            let m = shape.model_matrix();
            push_segments(&mut out.lines, &mesh.edges, &m, [r, g, b, shape.opacity]);

            let glow = m * Mat4::from_scale(Vec3::splat(mesh.shells.glow));
            push_triangles(&mut out.glow, &mesh.surface, &glow, [r, g, b, GLOW_OPACITY]);
            let fill = m * Mat4::from_scale(Vec3::splat(mesh.shells.fill));
            push_triangles(&mut out.fill, &mesh.surface, &fill, [r, g, b, FILL_OPACITY]);
        }
    }
}

fn push_segments(out: &mut Vec<ColorVertex>, segments: &Segments, m: &Mat4, color: [f32; 4]) {
    for [a, b] in segments {
        out.push(vertex(m.transform_point3(*a), color));
        out.push(vertex(m.transform_point3(*b), color));
    }
}

fn push_triangles(out: &mut Vec<ColorVertex>, triangles: &Triangles, m: &Mat4, color: [f32; 4]) {
    for tri in triangles {
        out.extend(tri.iter().map(|p| vertex(m.transform_point3(*p), color)));
    }
}

#[inline]
fn vertex(p: Vec3, color: [f32; 4]) -> ColorVertex {
    ColorVertex {
        position: p.to_array(),
        color,
    }
}
