// Per-frame stepping of everything that does not need a GPU.
//
// Navigation state and the scene advance here whether or not a renderer
// exists, so a missing canvas or a slow adapter request only affects drawing.

use crate::core::navigator::{CameraPose, SectionNavigator};
use crate::core::pacing::FrameClock;
use crate::core::scene::Scene;
use std::cell::RefCell;
use std::rc::Rc;

/// What a rendered frame produced for the DOM and the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameUpdate {
    pub sections_changed: bool,
    pub camera: CameraPose,
}

pub struct PageDriver {
    navigator: Rc<RefCell<SectionNavigator>>,
    scene: Rc<RefCell<Scene>>,
    clock: FrameClock,
}

impl PageDriver {
    pub fn new(navigator: Rc<RefCell<SectionNavigator>>, scene: Rc<RefCell<Scene>>) -> Self {
        Self {
            navigator,
            scene,
            clock: FrameClock::default(),
        }
    }

    pub fn navigator(&self) -> &Rc<RefCell<SectionNavigator>> {
        &self.navigator
    }

    pub fn scene(&self) -> &Rc<RefCell<Scene>> {
        &self.scene
    }

    /// Advance navigation tweens and the scene for the frame at `now_ms`.
    /// Returns `None` when the frame is skipped by pacing.
    pub fn step(&mut self, now_ms: f64, time_sec: f32) -> Option<FrameUpdate> {
        let dt_sec = self.clock.should_render(now_ms)?;
        let (sections_changed, camera, active_index) = {
            let mut nav = self.navigator.borrow_mut();
            let changed = nav.advance(dt_sec);
            (changed, nav.camera(), nav.current_index())
        };
        self.scene.borrow_mut().tick(time_sec, active_index);
        Some(FrameUpdate {
            sections_changed,
            camera,
        })
    }
}
