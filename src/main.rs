//! Sprite demo entry point.
//!
//! Opens a raylib window, loads the textures and shaders named by a JSON
//! sprite layout, spawns the sprites and runs the frame loop:
//!
//! 1. Advance [`WorldTime`] with the frame delta
//! 2. Update schedule: spawn layouts, bind pending textures, update sprites,
//!    turn the hero, collect render parameters
//! 3. Draw the render queue
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --layout assets/layout.json --debug
//! ```

use basicsprite::components::sprite::SpriteTransform;
use basicsprite::components::spritecamera::SpriteCamera;
use basicsprite::components::spritelayout::{SpriteLayout, SpriteLayoutData};
use basicsprite::resources::debugmode::DebugMode;
use basicsprite::resources::gameconfig::GameConfig;
use basicsprite::resources::renderqueue::RenderQueue;
use basicsprite::resources::screensize::ScreenSize;
use basicsprite::resources::shaderstore::ShaderStore;
use basicsprite::resources::texturestore::TextureStore;
use basicsprite::resources::worldtime::WorldTime;
use basicsprite::systems::render::{collect_render_queue, render_pass};
use basicsprite::systems::sprite::{load_pending_textures, sprite_update_system};
use basicsprite::systems::spritelayout::spritelayout_spawn_system;
use basicsprite::systems::time::update_world_time;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{info, warn};
use raylib::prelude::*;
use std::path::PathBuf;

/// Sprite transform demo
#[derive(Parser)]
#[command(version, about = "Draws the sprites of a JSON layout with raylib.")]
struct Cli {
    /// INI file with window and debug settings.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// JSON sprite layout to load.
    #[arg(long, value_name = "PATH", default_value = "./assets/layout.json")]
    layout: String,

    /// Outline sprite bounds.
    #[arg(long)]
    debug: bool,
}

/// Degrees per second for sprites tagged `hero`.
const HERO_SPIN: f32 = 45.0;

/// Demo behavior: turn the hero and keep the camera on it.
fn spin_hero(
    time: Res<WorldTime>,
    mut sprites: Query<&mut SpriteTransform>,
    mut cameras: Query<&mut SpriteCamera>,
) {
    for mut sprite in sprites.iter_mut() {
        if sprite.tag() != Some("hero") || !sprite.is_bound() {
            continue;
        }
        let degrees = sprite.rotation_degrees() + HERO_SPIN * time.delta;
        sprite.set_rotation_degrees(degrees);
        if let Ok(center) = sprite.center_position() {
            for mut camera in cameras.iter_mut() {
                camera.set_position(center);
            }
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using default settings", e);
    }

    // --------------- Raylib window ---------------
    let (mut rl, thread) = {
        let mut builder = raylib::init();
        builder
            .size(config.window.width as i32, config.window.height as i32)
            .resizable()
            .title(&config.window.title);
        if config.window.vsync {
            builder.vsync();
        }
        builder.build()
    };
    rl.set_target_fps(config.window.target_fps);

    // --------------- Assets named by the layout ---------------
    let mut textures = TextureStore::new();
    let mut shaders = ShaderStore::new();
    match SpriteLayoutData::load_from_file(&cli.layout) {
        Ok(data) => {
            for (key, path) in &data.textures {
                match rl.load_texture(&thread, path) {
                    Ok(texture) => textures.insert(key.as_str(), texture),
                    Err(e) => warn!("Failed to load texture '{}' from {}: {}", key, path, e),
                }
            }
            for (key, path) in &data.shaders {
                let shader = rl.load_shader(&thread, None, Some(path));
                shaders.add(key.as_str(), shader);
            }
            info!(
                "Loaded {} textures and {} shaders for {}",
                textures.len(),
                data.shaders.len(),
                cli.layout
            );
        }
        Err(e) => warn!("Failed to read layout {}: {}", cli.layout, e),
    }

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(ScreenSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(textures);
    world.insert_resource(RenderQueue::default());
    world.insert_non_send_resource(shaders);
    if cli.debug || config.debug.show_bounds {
        world.insert_resource(DebugMode {});
    }
    world.insert_resource(config);

    let half = Vector2::new(
        rl.get_screen_width() as f32 * 0.5,
        rl.get_screen_height() as f32 * 0.5,
    );
    let camera = world.spawn(SpriteCamera::new(half, half)).id();
    world.spawn(SpriteLayout::new(cli.layout.as_str()).with_camera(camera));

    let mut update = Schedule::default();
    update.add_systems(
        (
            spritelayout_spawn_system,
            load_pending_textures,
            sprite_update_system,
            spin_hero,
            collect_render_queue,
        )
            .chain(),
    );

    // --------------- Main loop ---------------
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        update_world_time(&mut world, dt);
        {
            let mut screen = world.resource_mut::<ScreenSize>();
            screen.w = rl.get_screen_width();
            screen.h = rl.get_screen_height();
        }

        update.run(&mut world);
        world.clear_trackers();

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::new(100, 149, 237, 255));
        render_pass(&mut world, &mut d);
    }
}
