//! Components and value types for sprites.
//!
//! Submodules overview:
//! - [`direction`] – sprite-relative directions and the angle solver behind them
//! - [`pixelrect`] – integer rectangles for clipping and destination
//! - [`renderparams`] – per-frame draw parameters exported by sprites
//! - [`rotation`] – normalized rotation angle
//! - [`sprite`] – the sprite transform component and the drawable trait
//! - [`spritecamera`] – camera entities supplying the view transform
//! - [`spriteflip`] – horizontal/vertical mirroring
//! - [`spritelayout`] – JSON-driven sprite spawning

pub mod direction;
pub mod pixelrect;
pub mod renderparams;
pub mod rotation;
pub mod sprite;
pub mod spritecamera;
pub mod spriteflip;
pub mod spritelayout;
