//! Auto-rotation clock.
//!
//! The clock is driven by the host's frame callback and owned by the
//! viewer state, so tearing the view down drops it and no recurring
//! callback outlives the view. Stopping it is a flag flip; ticks while
//! stopped are no-ops.

use serde::{Deserialize, Serialize};

use crate::core::CameraState;

/// Per-millisecond rotation rates at speed 1.
const RATE_X: f32 = 0.001;
const RATE_Y: f32 = 0.0005;

/// Upper bound on the dt applied per tick, in milliseconds. Bounds the
/// rotation jump after a slow frame or a background tab.
const MAX_TICK_MS: f32 = 32.0;

/// Continuous auto-rotation, compatible with concurrent manual drag:
/// both mutate the same camera on the single UI thread, last writer
/// per tick wins.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationClock {
    /// Whether ticks currently advance the rotation
    pub animating: bool,

    /// User-facing speed multiplier
    pub speed: f32,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self {
            animating: false,
            speed: 1.0,
        }
    }
}

impl AnimationClock {
    pub fn new(speed: f32) -> Self {
        Self {
            animating: false,
            speed,
        }
    }

    pub fn start(&mut self) {
        self.animating = true;
    }

    /// Cancel further rotation. Idempotent.
    pub fn stop(&mut self) {
        self.animating = false;
    }

    /// Advance one frame. `dt_ms` is the elapsed time since the last
    /// tick, capped at 32 ms before use.
    pub fn tick(&self, dt_ms: f32, camera: &mut CameraState) {
        if !self.animating {
            return;
        }
        let dt = dt_ms.min(MAX_TICK_MS);
        camera.rotation_x += RATE_X * self.speed * dt;
        camera.rotation_y += RATE_Y * self.speed * dt;
    }
}
