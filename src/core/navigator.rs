use crate::constants::{
    CAMERA_BASE_Z, CAMERA_STEP_ANGLE, CAMERA_STEP_Z, SLIDE_OFFSET_PCT, TRANSITION_DURATION_SEC,
};
use crate::core::tween::{Ease, TweenEngine};

/// How sections visually hand over to each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransitionStyle {
    /// Outgoing section fades to hidden, incoming fades to visible.
    #[default]
    Fade,
    /// Sections slide vertically by one extent depending on relative order.
    Slide,
}

impl TransitionStyle {
    /// Parse the `data-transition` attribute value; anything unknown is `Fade`.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("slide") => TransitionStyle::Slide,
            _ => TransitionStyle::Fade,
        }
    }
}

/// Virtual camera pose driven by section navigation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub depth: f32,
    pub rotation_x: f32,
    pub rotation_y: f32,
}

impl CameraPose {
    /// Resting pose for a section index.
    pub fn for_section(index: usize) -> Self {
        let i = index as f32;
        Self {
            depth: i * CAMERA_STEP_Z + CAMERA_BASE_Z,
            rotation_x: i * CAMERA_STEP_ANGLE,
            rotation_y: i * CAMERA_STEP_ANGLE,
        }
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::for_section(0)
    }
}

/// Visual state of one section's DOM region.
///
/// - `opacity` in \[0, 1\]
/// - `visible` maps to CSS `visibility`
/// - `offset_pct` is the vertical translation in percent of the section height
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionVisual {
    pub opacity: f32,
    pub visible: bool,
    pub offset_pct: f32,
}

impl SectionVisual {
    const SHOWN: Self = Self {
        opacity: 1.0,
        visible: true,
        offset_pct: 0.0,
    };
    const HIDDEN: Self = Self {
        opacity: 0.0,
        visible: false,
        offset_pct: 0.0,
    };
}

/// A page section: whether it (and its nav dot) is active, plus its visuals.
#[derive(Clone, Debug)]
pub struct Section {
    pub active: bool,
    pub visual: SectionVisual,
}

/// A discrete navigation request produced by an input adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIntent {
    Next,
    Previous,
    Goto(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TweenKey {
    Opacity(usize),
    Offset(usize),
    CameraDepth,
    CameraRotX,
    CameraRotY,
}

/// Owns the current section index, the in-flight transition and the camera pose.
///
/// Only one transition runs at a time: `request_navigate` ignores requests
/// while a transition is in flight and the flag clears once the camera tween
/// completes inside `advance`. Nothing is queued.
pub struct SectionNavigator {
    sections: Vec<Section>,
    current_index: usize,
    transitioning: bool,
    style: TransitionStyle,
    camera: CameraPose,
    tweens: TweenEngine<TweenKey>,
}

impl SectionNavigator {
    pub fn new(section_count: usize, style: TransitionStyle) -> Self {
        let sections = (0..section_count)
            .map(|i| Section {
                active: i == 0,
                visual: initial_visual(style, i),
            })
            .collect();
        Self {
            sections,
            current_index: 0,
            transitioning: false,
            style,
            camera: CameraPose::default(),
            tweens: TweenEngine::new(),
        }
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn style(&self) -> TransitionStyle {
        self.style
    }

    pub fn camera(&self) -> CameraPose {
        self.camera
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Whether section `index` (and therefore its nav dot) is marked active.
    pub fn is_active(&self, index: usize) -> bool {
        self.sections.get(index).map(|s| s.active).unwrap_or(false)
    }

    /// Turn an intent into a concrete target index, if one exists.
    pub fn resolve(&self, intent: NavIntent) -> Option<usize> {
        match intent {
            NavIntent::Next => self
                .current_index
                .checked_add(1)
                .filter(|i| *i < self.sections.len()),
            NavIntent::Previous => self.current_index.checked_sub(1),
            NavIntent::Goto(i) => (i < self.sections.len()).then_some(i),
        }
    }

    /// Resolve and request an intent. Returns whether a transition started.
    pub fn handle(&mut self, intent: NavIntent) -> bool {
        if self.transitioning {
            log::debug!("[nav] {:?} dropped: transition in flight", intent);
            return false;
        }
        match self.resolve(intent) {
            Some(target) => self.request_navigate(target),
            None => false,
        }
    }

    /// Start a transition to `target`. No-op (returns false) when `target` is
    /// out of range or a transition is already running.
    pub fn request_navigate(&mut self, target: usize) -> bool {
        if target >= self.sections.len() || self.transitioning {
            return false;
        }
        self.transitioning = true;
        self.current_index = target;
        let d = TRANSITION_DURATION_SEC;
        let ease = Ease::Power2InOut;

        for (i, section) in self.sections.iter_mut().enumerate() {
            section.active = i == target;
            match self.style {
                TransitionStyle::Fade => {
                    let to = if i == target { 1.0 } else { 0.0 };
                    if i == target {
                        section.visual.visible = true;
                    }
                    self.tweens
                        .animate_to(TweenKey::Opacity(i), section.visual.opacity, to, d, ease);
                }
                TransitionStyle::Slide => {
                    let to = slide_offset(i, target);
                    self.tweens
                        .animate_to(TweenKey::Offset(i), section.visual.offset_pct, to, d, ease);
                }
            }
        }

        let pose = CameraPose::for_section(target);
        let cam = self.camera;
        self.tweens
            .animate_to(TweenKey::CameraDepth, cam.depth, pose.depth, d, ease);
        self.tweens
            .animate_to(TweenKey::CameraRotX, cam.rotation_x, pose.rotation_x, d, ease);
        self.tweens
            .animate_to(TweenKey::CameraRotY, cam.rotation_y, pose.rotation_y, d, ease);

        log::info!("[nav] -> section {}", target);
        true
    }

    /// Advance in-flight tweens by `dt` seconds. Returns whether any section
    /// visual changed, so the caller knows to sync the DOM.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.tweens.is_idle() {
            return false;
        }
        let sections = &mut self.sections;
        let camera = &mut self.camera;
        let mut sections_changed = false;
        let finished = self.tweens.advance(dt, |key, value| match key {
            TweenKey::Opacity(i) => {
                if let Some(s) = sections.get_mut(i) {
                    s.visual.opacity = value;
                    sections_changed = true;
                }
            }
            TweenKey::Offset(i) => {
                if let Some(s) = sections.get_mut(i) {
                    s.visual.offset_pct = value;
                    sections_changed = true;
                }
            }
            TweenKey::CameraDepth => camera.depth = value,
            TweenKey::CameraRotX => camera.rotation_x = value,
            TweenKey::CameraRotY => camera.rotation_y = value,
        });

        for key in finished {
            if let TweenKey::Opacity(i) = key {
                if let Some(s) = self.sections.get_mut(i) {
                    if s.visual.opacity <= 0.0 {
                        s.visual.visible = false;
                    }
                }
            }
        }
        // the camera tween sets the length of a transition
        if self.transitioning && !self.tweens.is_animating(TweenKey::CameraDepth) {
            self.transitioning = false;
            log::debug!("[nav] transition to {} complete", self.current_index);
        }
        sections_changed
    }
}

fn initial_visual(style: TransitionStyle, index: usize) -> SectionVisual {
    match (style, index) {
        (TransitionStyle::Fade, 0) => SectionVisual::SHOWN,
        (TransitionStyle::Fade, _) => SectionVisual::HIDDEN,
        (TransitionStyle::Slide, i) => SectionVisual {
            offset_pct: slide_offset(i, 0),
            ..SectionVisual::SHOWN
        },
    }
}

#[inline]
fn slide_offset(index: usize, target: usize) -> f32 {
    use std::cmp::Ordering;
    match index.cmp(&target) {
        Ordering::Less => -SLIDE_OFFSET_PCT,
        Ordering::Equal => 0.0,
        Ordering::Greater => SLIDE_OFFSET_PCT,
    }
}
