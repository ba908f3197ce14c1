//! Shader storage resource.
//!
//! Stores loaded shaders keyed by string IDs. Sprites name a shader through
//! their shader override and the render pass looks it up here.

use raylib::prelude::Shader;
use rustc_hash::FxHashMap;

/// Non-Send resource storing loaded shaders.
///
/// This is a `NonSend` resource because shaders are tied to the OpenGL context;
/// insert with `insert_non_send_resource`.
pub struct ShaderStore {
    shaders: FxHashMap<String, Shader>,
}

impl ShaderStore {
    pub fn new() -> Self {
        Self {
            shaders: FxHashMap::default(),
        }
    }

    /// Adds a shader, replacing any previous one with the same ID.
    pub fn add(&mut self, id: impl Into<String>, shader: Shader) {
        self.shaders.insert(id.into(), shader);
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Shader> {
        self.shaders.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.shaders.contains_key(id)
    }
}

impl Default for ShaderStore {
    fn default() -> Self {
        Self::new()
    }
}
