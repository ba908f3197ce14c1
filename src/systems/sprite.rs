//! Sprite update systems.
//!
//! - [`load_pending_textures`] binds sprites that were created with only a
//!   texture name, once that texture shows up in the [`TextureStore`].
//! - [`sprite_update_system`] runs the per-frame update of every enabled sprite.

use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::sprite::{SpriteDrawable, SpriteTransform};
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;

/// Resolve lazily named textures.
///
/// Sprites whose texture is not in the store yet stay unbound and are tried
/// again next frame.
pub fn load_pending_textures(
    textures: Res<TextureStore>,
    mut query: Query<(Entity, &mut SpriteTransform)>,
) {
    for (entity, mut sprite) in query.iter_mut() {
        let Some(key) = sprite.pending_texture().map(str::to_owned) else {
            continue;
        };
        let Some(texture) = textures.get(&key) else {
            debug!("sprite '{}' waiting for texture '{}'", sprite.name(), key);
            continue;
        };
        if let Err(e) = sprite.set_texture(key.as_str(), texture) {
            warn!(
                "failed to bind texture '{}' to sprite '{}' ({:?}): {}",
                key,
                sprite.name(),
                entity,
                e
            );
        }
    }
}

/// Call [`SpriteDrawable::update`] on every enabled sprite.
pub fn sprite_update_system(time: Res<WorldTime>, mut query: Query<&mut SpriteTransform>) {
    for mut sprite in query.iter_mut() {
        if sprite.enabled() {
            sprite.update(&time);
        }
    }
}
