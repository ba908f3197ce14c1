//! Frame clock shared by the update pass.

use bevy_ecs::prelude::Resource;

/// Scaled simulation time. `delta` is what sprites see in their update.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    /// Multiplier on the raw frame delta; 0 pauses the clock.
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Advance by one frame of `raw_dt` unscaled seconds.
    ///
    /// Negative or non-finite deltas count the frame but do not move time.
    pub fn advance(&mut self, raw_dt: f32) {
        let dt = if raw_dt.is_finite() && raw_dt > 0.0 {
            raw_dt * self.time_scale
        } else {
            0.0
        };
        self.delta = dt;
        self.elapsed += dt;
        self.frame_count += 1;
    }
}
