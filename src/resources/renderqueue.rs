//! Render queue resource.
//!
//! Filled once per frame by
//! [`collect_render_queue`](crate::systems::render::collect_render_queue) and
//! drained by the raylib render pass. Entries are already sorted by draw order.

use bevy_ecs::prelude::{Entity, Resource};

use crate::components::renderparams::RenderParameters;

#[derive(Resource, Default)]
pub struct RenderQueue {
    pub entries: Vec<(Entity, RenderParameters)>,
}

impl RenderQueue {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
