//! Texture store resource.
//!
//! Holds every texture a sprite can bind, keyed by name. Entries are either
//! GPU textures loaded through raylib or headless size records; sprites only
//! ever read a texture's dimensions, so headless entries are enough for
//! layout work and tests that run without a window.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

/// Anything with pixel dimensions a sprite can be bound to.
pub trait TextureSource {
    /// `(width, height)` in pixels.
    fn texture_size(&self) -> (i32, i32);
}

impl TextureSource for Texture2D {
    fn texture_size(&self) -> (i32, i32) {
        (self.width, self.height)
    }
}

/// Dimensions of a texture without pixel data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextureInfo {
    pub width: i32,
    pub height: i32,
}

impl TextureInfo {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl TextureSource for TextureInfo {
    fn texture_size(&self) -> (i32, i32) {
        (self.width, self.height)
    }
}

pub enum StoredTexture {
    Loaded(Texture2D),
    Headless(TextureInfo),
}

impl TextureSource for StoredTexture {
    fn texture_size(&self) -> (i32, i32) {
        match self {
            StoredTexture::Loaded(tex) => tex.texture_size(),
            StoredTexture::Headless(info) => info.texture_size(),
        }
    }
}

#[derive(Resource, Default)]
pub struct TextureStore {
    map: FxHashMap<String, StoredTexture>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), StoredTexture::Loaded(texture));
    }

    pub fn insert_headless(&mut self, key: impl Into<String>, info: TextureInfo) {
        self.map.insert(key.into(), StoredTexture::Headless(info));
    }

    pub fn get(&self, key: &str) -> Option<&StoredTexture> {
        self.map.get(key)
    }

    /// The GPU texture for `key`, if one was loaded.
    pub fn texture(&self, key: &str) -> Option<&Texture2D> {
        match self.map.get(key) {
            Some(StoredTexture::Loaded(tex)) => Some(tex),
            _ => None,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
