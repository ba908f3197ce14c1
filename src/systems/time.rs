//! Frame clock update.
//!
//! Runs once per frame, before the update schedule, with raylib's raw frame
//! time. Sprites read the scaled result from [`WorldTime`].

use bevy_ecs::prelude::*;
use log::trace;

use crate::resources::worldtime::WorldTime;

pub fn update_world_time(world: &mut World, dt: f32) {
    let mut time = world.resource_mut::<WorldTime>();
    time.advance(dt);
    trace!("frame {} dt={:.4}", time.frame_count, time.delta);
}
