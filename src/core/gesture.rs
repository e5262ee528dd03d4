use crate::constants::TOUCH_SWIPE_THRESHOLD_PX;
use crate::core::navigator::NavIntent;

/// Wheel delta sign to intent: scrolling down moves to the next section.
#[inline]
pub fn wheel_intent(delta_y: f64) -> Option<NavIntent> {
    if delta_y > 0.0 {
        Some(NavIntent::Next)
    } else if delta_y < 0.0 {
        Some(NavIntent::Previous)
    } else {
        None
    }
}

/// Keyboard `key` values that navigate between sections.
#[inline]
pub fn key_intent(key: &str) -> Option<NavIntent> {
    match key {
        "ArrowDown" | "PageDown" => Some(NavIntent::Next),
        "ArrowUp" | "PageUp" => Some(NavIntent::Previous),
        _ => None,
    }
}

/// Tracks a vertical touch swipe from its start point.
///
/// A swipe fires once the finger has travelled more than the threshold; the
/// start point then moves to the current finger position so a long drag can
/// fire again.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeTracker {
    start_y: f32,
}

impl SwipeTracker {
    pub fn begin(&mut self, y: f32) {
        self.start_y = y;
    }

    pub fn moved(&mut self, y: f32) -> Option<NavIntent> {
        let delta = self.start_y - y;
        if delta.abs() <= TOUCH_SWIPE_THRESHOLD_PX {
            return None;
        }
        self.start_y = y;
        // finger moving up (positive delta) reveals the next section
        if delta > 0.0 {
            Some(NavIntent::Next)
        } else {
            Some(NavIntent::Previous)
        }
    }
}
