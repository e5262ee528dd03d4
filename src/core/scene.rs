// Per-frame update of the decorative background.
//
// The scene holds a starfield and one wireframe shape per page section. It
// knows nothing about rendering or the DOM: `tick` only advances transforms
// given the wall-clock time and the navigator's current section index.

use crate::constants::*;
use crate::core::geometry::ShapeKind;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};
use rand::prelude::*;

/// Shape placement preset chosen from the viewport width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    #[default]
    Wide,
    Narrow,
}

impl Layout {
    pub fn for_viewport_width(width_px: f64) -> Self {
        if width_px < NARROW_VIEWPORT_MAX_PX {
            Layout::Narrow
        } else {
            Layout::Wide
        }
    }

    fn home_z(self) -> f32 {
        match self {
            Layout::Wide => WIDE_HOME_Z,
            Layout::Narrow => NARROW_HOME_Z,
        }
    }

    fn far_z(self) -> f32 {
        match self {
            Layout::Wide => WIDE_FAR_Z,
            Layout::Narrow => NARROW_FAR_Z,
        }
    }

    fn x_factor(self) -> f32 {
        match self {
            Layout::Wide => 1.0,
            Layout::Narrow => NARROW_X_FACTOR,
        }
    }
}

/// Static description of one section's shape.
#[derive(Clone, Copy, Debug)]
pub struct ShapeSpec {
    pub kind: ShapeKind,
    pub size: f32,
    pub color: [f32; 3],
    pub base_x: f32,
}

/// Shapes in section order.
pub const SHAPE_SPECS: [ShapeSpec; 4] = [
    ShapeSpec {
        kind: ShapeKind::Dodecahedron,
        size: 3.0,
        color: GREEN,
        base_x: -5.0,
    },
    ShapeSpec {
        kind: ShapeKind::Octahedron,
        size: 4.0,
        color: PINK,
        base_x: 5.0,
    },
    ShapeSpec {
        kind: ShapeKind::Torus,
        size: 3.0,
        color: BLUE,
        base_x: 0.0,
    },
    ShapeSpec {
        kind: ShapeKind::Icosahedron,
        size: 3.0,
        color: ORANGE,
        base_x: 0.0,
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub position: Vec3,
    pub rotation: Vec2,
}

/// Next depth of a star after one frame, wrapping past the far bound.
#[inline]
pub fn next_star_depth(z: f32) -> f32 {
    let z = z + STAR_DEPTH_STEP;
    if z > STAR_FAR_Z {
        STAR_NEAR_Z
    } else {
        z
    }
}

pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    /// Scatter `count` stars uniformly in a cube of side `STAR_SPREAD`.
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let half = STAR_SPREAD / 2.0;
        let stars = (0..count)
            .map(|_| Star {
                position: Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                ),
                rotation: Vec2::ZERO,
            })
            .collect();
        Self::from_stars(stars)
    }

    pub fn from_stars(stars: Vec<Star>) -> Self {
        Self { stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn tick(&mut self) {
        for star in &mut self.stars {
            star.rotation += Vec2::splat(STAR_ROTATION_STEP);
            star.position.z = next_star_depth(star.position.z);
        }
    }
}

/// One wireframe shape bound to a section index.
#[derive(Clone, Debug)]
pub struct DecorativeShape {
    pub kind: ShapeKind,
    pub section: usize,
    pub size: f32,
    pub color: [f32; 3],
    pub home: Vec3,
    pub far: Vec3,
    pub position: Vec3,
    pub rotation: Vec2,
    pub scale: f32,
    pub opacity: f32,
    base_x: f32,
}

impl DecorativeShape {
    pub fn new(spec: ShapeSpec, section: usize, layout: Layout) -> Self {
        let mut shape = Self {
            kind: spec.kind,
            section,
            size: spec.size,
            color: spec.color,
            home: Vec3::ZERO,
            far: Vec3::ZERO,
            position: Vec3::ZERO,
            rotation: Vec2::ZERO,
            scale: 1.0,
            opacity: 1.0,
            base_x: spec.base_x,
        };
        shape.set_layout(layout);
        shape.position = shape.home;
        shape
    }

    /// Re-target home/far positions. Current depth keeps easing from where it is.
    pub fn set_layout(&mut self, layout: Layout) {
        let x = self.base_x * layout.x_factor();
        self.home = Vec3::new(x, 0.0, layout.home_z());
        self.far = Vec3::new(x, 0.0, layout.far_z());
        self.position.x = x;
    }

    pub fn target_depth(&self, active_index: usize) -> f32 {
        if self.section == active_index {
            self.home.z
        } else {
            self.far.z
        }
    }

    pub fn tick(&mut self, time_sec: f32, active_index: usize) {
        self.rotation.x += SHAPE_ROTATION_STEP_X;
        self.rotation.y += SHAPE_ROTATION_STEP_Y;

        self.position.y = self.home.y + time_sec.sin() * SHAPE_FLOAT_AMPLITUDE;

        let target = self.target_depth(active_index);
        self.position.z += (target - self.position.z) * SHAPE_DEPTH_APPROACH;

        let s = depth_scale(self.position.z, self.home.z);
        self.scale = s;
        self.opacity = s;
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0),
            self.position,
        )
    }
}

/// Uniform scale/opacity for a shape at depth `z`, clamped to \[0, 1\].
#[inline]
pub fn depth_scale(z: f32, home_z: f32) -> f32 {
    (1.0 - (z - home_z) / SHAPE_SCALE_NORMALIZATION).clamp(0.0, 1.0)
}

pub struct Scene {
    pub starfield: Starfield,
    pub shapes: Vec<DecorativeShape>,
    layout: Layout,
}

impl Scene {
    pub fn new(layout: Layout, seed: u64) -> Self {
        let shapes = SHAPE_SPECS
            .iter()
            .enumerate()
            .map(|(i, spec)| DecorativeShape::new(*spec, i, layout))
            .collect();
        Self {
            starfield: Starfield::new(STAR_COUNT, seed),
            shapes,
            layout,
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Returns whether the layout actually changed.
    pub fn set_layout(&mut self, layout: Layout) -> bool {
        if layout == self.layout {
            return false;
        }
        self.layout = layout;
        for shape in &mut self.shapes {
            shape.set_layout(layout);
        }
        log::info!("[scene] layout {:?}", layout);
        true
    }

    pub fn tick(&mut self, time_sec: f32, active_index: usize) {
        self.starfield.tick();
        for shape in &mut self.shapes {
            shape.tick(time_sec, active_index);
        }
    }
}
