//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform code:
//! - Fixed pixel steps per tick, no wall-clock time
//! - Seeded RNG only, one generator per pillar stream
//! - Stable iteration order (pillars ordered by x)

pub mod collision;
pub mod geometry;
pub mod obstacles;
pub mod physics;
pub mod state;
pub mod tick;

pub use collision::{CollisionKind, check_collision, score_passed};
pub use geometry::Rect;
pub use obstacles::ObstacleStream;
pub use physics::{apply_gravity, apply_input};
pub use state::{Bird, BirdSlot, GameEvent, GamePhase, GameState, Pillar};
pub use tick::{InputEvent, TickInput, tick};
