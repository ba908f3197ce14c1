//! Error types for sprite operations.
//!
//! Every fallible [`SpriteTransform`](crate::components::sprite::SpriteTransform)
//! operation validates its input before touching any field, so an `Err` always
//! leaves the sprite exactly as it was.

use thiserror::Error;

/// Contract violations reported by sprite operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpriteError {
    /// A value broke a stated precondition (non-positive scale, empty name, clip out of bounds).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation needs a bound texture.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A zero-length vector was given where a direction is required.
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),
}

/// Result type for sprite operations
pub type Result<T> = std::result::Result<T, SpriteError>;
