// Host-side tests for input gesture reduction.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod gesture {
        include!("../src/core/gesture.rs");
    }
    pub mod navigator {
        include!("../src/core/navigator.rs");
    }
    pub mod tween {
        include!("../src/core/tween.rs");
    }
}

use crate::core::gesture::*;
use crate::core::navigator::NavIntent;

#[test]
fn wheel_sign_maps_to_direction() {
    assert_eq!(wheel_intent(100.0), Some(NavIntent::Next));
    assert_eq!(wheel_intent(0.5), Some(NavIntent::Next));
    assert_eq!(wheel_intent(-3.0), Some(NavIntent::Previous));
    assert_eq!(wheel_intent(0.0), None);
}

#[test]
fn navigation_keys() {
    assert_eq!(key_intent("ArrowDown"), Some(NavIntent::Next));
    assert_eq!(key_intent("PageDown"), Some(NavIntent::Next));
    assert_eq!(key_intent("ArrowUp"), Some(NavIntent::Previous));
    assert_eq!(key_intent("PageUp"), Some(NavIntent::Previous));
    for other in ["ArrowLeft", "ArrowRight", " ", "Enter", "j", "Home"] {
        assert_eq!(key_intent(other), None, "{other:?} should not navigate");
    }
}

#[test]
fn swipe_needs_to_pass_threshold() {
    let mut t = SwipeTracker::default();
    t.begin(400.0);
    assert_eq!(t.moved(360.0), None);
    assert_eq!(t.moved(350.0), None); // exactly 50 px is not enough
    assert_eq!(t.moved(349.0), Some(NavIntent::Next));
}

#[test]
fn swipe_down_goes_back() {
    let mut t = SwipeTracker::default();
    t.begin(100.0);
    assert_eq!(t.moved(180.0), Some(NavIntent::Previous));
}

#[test]
fn swipe_start_resets_after_firing() {
    let mut t = SwipeTracker::default();
    t.begin(500.0);
    assert_eq!(t.moved(440.0), Some(NavIntent::Next));
    // measured from 440 now
    assert_eq!(t.moved(400.0), None);
    assert_eq!(t.moved(380.0), Some(NavIntent::Next));
}

#[test]
fn new_touch_restarts_tracking() {
    let mut t = SwipeTracker::default();
    t.begin(500.0);
    assert_eq!(t.moved(470.0), None);
    t.begin(100.0);
    assert_eq!(t.moved(470.0), Some(NavIntent::Previous));
}
