//! Platform abstraction layer
//!
//! Seams between the simulation and whatever hosts it:
//! - Input events arriving from a host callback, possibly on another thread
//! - Sprite loading, where any slot may fail and degrade to "absent"

pub mod assets;
pub mod input;

pub use assets::{AssetError, AssetLoader, Assets, SpriteHandle, SpriteKind};
pub use input::InputLatch;
