//! Sprite layout component for data-driven sprite spawning.
//!
//! The [`SpriteLayout`] component references a JSON file listing textures,
//! shaders and sprites. When the component is added, the
//! [`spritelayout_spawn_system`](crate::systems::spritelayout::spritelayout_spawn_system)
//! reads the file and spawns one [`SpriteTransform`] per sprite entry.
//!
//! The `textures` and `shaders` maps (key to file path) are read by the host
//! at startup so the stores are filled before the sprites spawn.

use bevy_ecs::prelude::*;
use raylib::prelude::{Color, Vector2};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::components::pixelrect::PixelRect;
use crate::components::sprite::SpriteTransform;
use crate::components::spriteflip::SpriteFlip;
use crate::error::{Result, SpriteError};
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;

/// A layout component that spawns sprites when added.
#[derive(Component, Debug, Clone)]
pub struct SpriteLayout {
    /// Path to the JSON file defining the layout.
    pub path: String,
    /// Camera handed to entries with `follow_camera` set.
    pub camera: Option<Entity>,
    /// whether this layout has been processed
    pub spawned: bool,
}

impl SpriteLayout {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            camera: None,
            spawned: false,
        }
    }

    pub fn with_camera(mut self, camera: Entity) -> Self {
        self.camera = Some(camera);
        self
    }
}

/// Structure representing the layout data loaded from JSON.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SpriteLayoutData {
    #[serde(default)]
    pub textures: FxHashMap<String, String>,
    #[serde(default)]
    pub shaders: FxHashMap<String, String>,
    #[serde(default)]
    pub sprites: Vec<SpriteDesc>,
}

/// One sprite entry of a layout.
///
/// `clip`, `scale` and `center` need the texture to be in the store when the
/// sprite spawns; the other fields also apply to sprites that bind later.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SpriteDesc {
    pub name: String,
    #[serde(default)]
    pub tag: Option<String>,
    pub texture: String,
    #[serde(default)]
    pub position: [f32; 2],
    #[serde(default)]
    pub clip: Option<PixelRect>,
    #[serde(default)]
    pub scale: Option<[f32; 2]>,
    /// Degrees.
    #[serde(default)]
    pub rotation: f32,
    /// RGBA.
    #[serde(default)]
    pub tint: Option<[u8; 4]>,
    #[serde(default)]
    pub flip: SpriteFlip,
    #[serde(default)]
    pub draw_order: i32,
    #[serde(default)]
    pub shader: Option<String>,
    #[serde(default)]
    pub center: bool,
    /// Draw under the layout's camera instead of the identity view.
    #[serde(default)]
    pub follow_camera: bool,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl SpriteLayoutData {
    /// Loads layout data from a JSON file at the specified path.
    pub fn load_from_file(path: &str) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let file_content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&file_content)?)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl SpriteDesc {
    /// Build the sprite, binding it right away when its texture is in `store`.
    pub fn build(&self, store: &TextureStore, screen: Option<&ScreenSize>) -> Result<SpriteTransform> {
        let mut sprite = if store.contains(&self.texture) {
            SpriteTransform::load(self.name.as_str(), self.texture.as_str(), store)?
        } else {
            SpriteTransform::named(self.name.as_str(), self.texture.as_str())?
        };

        if let Some(tag) = &self.tag {
            sprite.set_tag(tag.as_str())?;
        }
        sprite.set_position(Vector2::new(self.position[0], self.position[1]));
        if let Some(clip) = self.clip {
            sprite.set_clipping(clip)?;
        }
        if let Some([sx, sy]) = self.scale {
            sprite.set_scale(Vector2::new(sx, sy))?;
        }
        if self.center {
            let screen = screen.ok_or_else(|| {
                SpriteError::InvalidState("no viewport size to center against".to_string())
            })?;
            sprite.center_image(screen)?;
        }

        sprite.set_rotation_degrees(self.rotation);
        if let Some([r, g, b, a]) = self.tint {
            sprite.set_tint(Color::new(r, g, b, a));
        }
        sprite.set_flip(self.flip);
        sprite.set_draw_order(self.draw_order);
        sprite.set_shader(self.shader.as_deref());
        sprite.set_visible(self.visible);
        Ok(sprite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::texturestore::TextureInfo;

    const LAYOUT: &str = r#"{
        "textures": { "ship": "assets/textures/ship.png" },
        "sprites": [
            {
                "name": "player",
                "tag": "hero",
                "texture": "ship",
                "position": [10.0, 20.0],
                "clip": { "x": 0, "y": 0, "width": 50, "height": 40 },
                "scale": [2.0, 2.0],
                "rotation": -90.0,
                "tint": [255, 0, 0, 255],
                "flip": { "horizontal": true },
                "draw_order": 3
            },
            { "name": "later", "texture": "not_loaded", "visible": false }
        ]
    }"#;

    fn store() -> TextureStore {
        let mut store = TextureStore::new();
        store.insert_headless("ship", TextureInfo::new(100, 80));
        store
    }

    #[test]
    fn test_parse_layout() {
        let data = SpriteLayoutData::from_json(LAYOUT).unwrap();
        assert_eq!(data.textures.len(), 1);
        assert!(data.shaders.is_empty());
        assert_eq!(data.sprites.len(), 2);
        assert!(data.sprites[0].visible);
        assert!(!data.sprites[1].visible);
        assert_eq!(data.sprites[1].position, [0.0, 0.0]);
    }

    #[test]
    fn test_build_bound_sprite() {
        let data = SpriteLayoutData::from_json(LAYOUT).unwrap();
        let sprite = data.sprites[0].build(&store(), None).unwrap();
        assert!(sprite.is_bound());
        assert_eq!(sprite.tag(), Some("hero"));
        assert_eq!(sprite.clipping(), PixelRect::new(0, 0, 50, 40));
        assert_eq!(sprite.destination(), PixelRect::new(10, 20, 100, 80));
        assert!((sprite.rotation_degrees() - 270.0).abs() < 1e-3);
        assert_eq!(sprite.tint().g, 0);
        assert!(sprite.flip().horizontal);
        assert_eq!(sprite.draw_order(), 3);
    }

    #[test]
    fn test_build_lazy_sprite() {
        let data = SpriteLayoutData::from_json(LAYOUT).unwrap();
        let sprite = data.sprites[1].build(&store(), None).unwrap();
        assert!(!sprite.is_bound());
        assert_eq!(sprite.pending_texture(), Some("not_loaded"));
        assert!(!sprite.visible());
    }

    #[test]
    fn test_center_without_screen_fails() {
        let mut desc = SpriteLayoutData::from_json(LAYOUT).unwrap().sprites[0].clone();
        desc.center = true;
        assert!(desc.build(&store(), None).is_err());
        let sprite = desc
            .build(&store(), Some(&ScreenSize { w: 300, h: 200 }))
            .unwrap();
        assert_eq!(sprite.position().x, 100.0);
        assert_eq!(sprite.position().y, 60.0);
    }
}
