//! Sprite rendering.
//!
//! Rendering is split in two so the sprite logic stays testable without a
//! window:
//!
//! - [`collect_render_queue`] is an ordinary ECS system. It resolves each
//!   sprite's camera for this frame, asks the sprite for its render
//!   parameters and stores them, sorted by draw order, in the [`RenderQueue`].
//! - [`render_pass`] runs inside raylib's drawing scope and turns the queue
//!   into `draw_texture_pro` calls.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::renderparams::RenderParameters;
use crate::components::sprite::{SpriteDrawable, SpriteTransform};
use crate::components::spritecamera::SpriteCamera;
use crate::resources::debugmode::DebugMode;
use crate::resources::renderqueue::RenderQueue;
use crate::resources::shaderstore::ShaderStore;
use crate::resources::texturestore::TextureStore;

/// Collect this frame's draw parameters.
///
/// A camera entity that no longer exists (or lost its [`SpriteCamera`]) is
/// treated as absent and the sprite's manual view is used.
pub fn collect_render_queue(
    sprites: Query<(Entity, &SpriteTransform)>,
    cameras: Query<&SpriteCamera>,
    mut queue: ResMut<RenderQueue>,
) {
    queue.clear();
    for (entity, sprite) in sprites.iter() {
        let camera_view = sprite
            .camera()
            .and_then(|camera| cameras.get(camera).ok())
            .map(SpriteCamera::view);
        if let Some(params) = sprite.export_render_parameters(camera_view) {
            queue.entries.push((entity, params));
        }
    }
    queue.entries.sort_by_key(|(_, params)| params.draw_order);
}

/// Draw the queued sprites.
///
/// Each sprite is drawn under its own view, blend mode and optional shader.
/// Entries whose texture only exists as a headless size record are skipped.
pub fn render_pass(world: &mut World, d: &mut RaylibDrawHandle) {
    let entries = std::mem::take(&mut world.resource_mut::<RenderQueue>().entries);
    let debug = world.contains_resource::<DebugMode>();
    let mut shaders = world.remove_non_send_resource::<ShaderStore>();

    {
        let textures = world.resource::<TextureStore>();
        for (entity, params) in &entries {
            let Some(texture) = textures.texture(&params.texture_key) else {
                continue;
            };

            let mut d2 = d.begin_mode2D(params.view);
            let shader = match (params.shader.as_deref(), shaders.as_mut()) {
                (Some(key), Some(store)) => store.get_mut(key),
                _ => None,
            };
            match shader {
                Some(shader) => {
                    let mut shaded = d2.begin_shader_mode(shader);
                    draw_blended(&mut shaded, texture, params);
                }
                None => draw_blended(&mut d2, texture, params),
            }

            if debug {
                if let Some(bounds) = world
                    .get::<SpriteTransform>(*entity)
                    .and_then(|sprite| sprite.bounds().ok())
                {
                    d2.draw_rectangle_lines(
                        bounds.x,
                        bounds.y,
                        bounds.width,
                        bounds.height,
                        Color::RED,
                    );
                }
            }
        }
    }

    if let Some(shaders) = shaders {
        world.insert_non_send_resource(shaders);
    }
    world.resource_mut::<RenderQueue>().entries = entries;
}

fn draw_blended<D: RaylibBlendModeExt>(d: &mut D, texture: &Texture2D, params: &RenderParameters) {
    let mut blended = d.begin_blend_mode(params.blend_mode);
    blended.draw_texture_pro(
        texture,
        params.source_rectangle(),
        params.destination_rectangle(),
        params.origin(),
        params.rotation_degrees(),
        params.tint,
    );
}
