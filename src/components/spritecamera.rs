//! Camera entities that supply the view transform for sprites.
//!
//! A sprite references a camera by [`Entity`](bevy_ecs::entity::Entity). The
//! reference is weak: the camera can be despawned at any time, and the
//! render collection pass re-resolves it every frame, falling back to the
//! sprite's manual view when it is gone.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Camera2D, Vector2};

/// 2D camera component wrapping raylib's [`Camera2D`].
#[derive(Component, Clone, Copy, Debug)]
pub struct SpriteCamera {
    pub camera: Camera2D,
}

impl SpriteCamera {
    /// Camera looking at `target`, with the target drawn at `offset` on screen.
    pub fn new(target: Vector2, offset: Vector2) -> Self {
        Self {
            camera: Camera2D {
                offset,
                target,
                rotation: 0.0,
                zoom: 1.0,
            },
        }
    }

    pub fn position(&self) -> Vector2 {
        self.camera.target
    }

    pub fn set_position(&mut self, position: Vector2) {
        self.camera.target = position;
    }

    /// View transform polled by sprites each frame.
    pub fn view(&self) -> Camera2D {
        self.camera
    }
}

/// The identity view: world space equals screen space.
pub fn identity_view() -> Camera2D {
    Camera2D {
        offset: Vector2::zero(),
        target: Vector2::zero(),
        rotation: 0.0,
        zoom: 1.0,
    }
}
