pub mod driver;
pub mod geometry;
pub mod gesture;
pub mod language;
pub mod mesh;
pub mod navigator;
pub mod pacing;
pub mod scene;
pub mod tween;

pub use driver::PageDriver;
pub use gesture::{key_intent, wheel_intent, SwipeTracker};
pub use language::{Language, LanguageSwitcher, TextSlot, TextSurface};
pub use mesh::{ColorVertex, FrameVertices, MeshCapacity, SceneMesh};
pub use navigator::{CameraPose, NavIntent, SectionNavigator, TransitionStyle};
pub use scene::{Layout, Scene};

// Shaders bundled as string constants
pub static COLOR_WGSL: &str = include_str!("../../shaders/color.wgsl");
