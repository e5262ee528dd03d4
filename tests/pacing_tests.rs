// Host-side tests for frame pacing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod pacing {
        include!("../src/core/pacing.rs");
    }
}

use crate::core::pacing::FrameClock;

#[test]
fn frame_clock_renders_first_frame() {
    let mut clock = FrameClock::default();
    assert_eq!(clock.should_render(1000.0), Some(0.0));
}

#[test]
fn frame_clock_skips_early_frames() {
    let mut clock = FrameClock::default();
    clock.should_render(0.0);
    assert_eq!(clock.should_render(8.0), None);
    assert_eq!(clock.should_render(16.0), None);
    // skipped frames do not move the reference point
    let dt = clock.should_render(16.7).expect("frame due");
    assert!((dt - 0.0167).abs() < 1e-4);
    assert_eq!(clock.should_render(20.0), None);
}

#[test]
fn frame_clock_reports_long_gaps() {
    let mut clock = FrameClock::default();
    clock.should_render(0.0);
    let dt = clock.should_render(500.0).unwrap();
    assert!((dt - 0.5).abs() < 1e-6);
}
