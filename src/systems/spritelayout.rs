//! Sprite layout spawning system.
//!
//! The [`spritelayout_spawn_system`] processes newly added [`SpriteLayout`]
//! components, loads their JSON data, and spawns a [`SpriteTransform`]
//! entity per sprite entry.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "textures": { "ship": "assets/textures/ship.png" },
//!   "shaders": { "glow": "assets/shaders/glow.fs" },
//!   "sprites": [
//!     { "name": "player", "texture": "ship", "position": [100.0, 200.0],
//!       "scale": [2.0, 2.0], "rotation": 45.0, "center": true }
//!   ]
//! }
//! ```
//!
//! # Related
//!
//! - [`crate::components::spritelayout::SpriteLayout`] – the trigger component
//! - [`crate::components::spritelayout::SpriteLayoutData`] – the parsed JSON structure

use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::spritelayout::{SpriteLayout, SpriteLayoutData};
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;

/// System that processes SpriteLayout components and spawns their sprites.
pub fn spritelayout_spawn_system(
    mut commands: Commands,
    textures: Res<TextureStore>,
    screen: Option<Res<ScreenSize>>,
    mut query: Query<&mut SpriteLayout, Added<SpriteLayout>>,
) {
    for mut layout in query.iter_mut() {
        if layout.spawned {
            continue;
        }

        let data = match SpriteLayoutData::load_from_file(&layout.path) {
            Ok(data) => data,
            Err(err) => {
                warn!("Failed to load sprite layout from {}: {}", layout.path, err);
                layout.spawned = true; // Prevent retrying
                continue;
            }
        };

        let mut spawned = 0;
        for desc in &data.sprites {
            match desc.build(&textures, screen.as_deref()) {
                Ok(mut sprite) => {
                    if desc.follow_camera {
                        sprite.set_camera(layout.camera);
                    }
                    debug!("Spawning sprite '{}'", desc.name);
                    commands.spawn(sprite);
                    spawned += 1;
                }
                Err(err) => warn!("Skipping sprite '{}' in {}: {}", desc.name, layout.path, err),
            }
        }
        layout.spawned = true;

        info!("Spawned {} sprites from {}", spawned, layout.path);
    }
}
