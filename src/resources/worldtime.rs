//! Frame clock.
//!
//! `elapsed` and `delta` follow the game's time scale; `realtime` is the
//! unscaled wall-clock time since start-up. Gesture timing reads `realtime` so
//! slow motion or pause never stretches a long press.
use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    /// Unscaled seconds since start-up.
    pub realtime: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            realtime: 0.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
