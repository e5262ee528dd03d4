use crate::constants::FRAME_INTERVAL_MS;

/// Throttles the display callback to the target frame rate.
///
/// Timestamps are the millisecond values the frame callback receives. A frame
/// is rendered only when at least `FRAME_INTERVAL_MS` passed since the last
/// rendered one; skipped frames do not move the reference point.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    /// Returns the seconds since the previous rendered frame, or `None` to skip.
    pub fn should_render(&mut self, now_ms: f64) -> Option<f32> {
        match self.last_ms {
            Some(last) if now_ms - last < FRAME_INTERVAL_MS => None,
            Some(last) => {
                self.last_ms = Some(now_ms);
                Some(((now_ms - last) / 1000.0) as f32)
            }
            None => {
                self.last_ms = Some(now_ms);
                Some(0.0)
            }
        }
    }
}
