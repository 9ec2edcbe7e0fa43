//! Flappy Pillars - A side-scrolling bird-and-pillars arcade game
//!
//! Core modules:
//! - `sim`: Simulation (physics, obstacle stream, collisions, scoring, game state)
//! - `renderer`: Draw-list snapshots handed to an external renderer
//! - `platform`: Host seams for input delivery and sprite loading
//! - `game`: Fixed-rate driver tying the simulation to a host loop
//! - `tuning`: Data-driven game constants

pub mod game;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use highscores::HighScore;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Simulation tick rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const TICK_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum ticks per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default board dimensions
    pub const BOARD_WIDTH: i32 = 960;
    pub const BOARD_HEIGHT: i32 = 540;

    /// Bird sprite size
    pub const BIRD_WIDTH: i32 = 40;
    pub const BIRD_HEIGHT: i32 = 28;

    /// Downward pixels added per tick while airborne (not a velocity)
    pub const GRAVITY: i32 = 2;
    /// Pixels the bird is lifted by a jump
    pub const JUMP_DELTA: i32 = 30;
    /// Pixels moved by a directional input
    pub const MOVE_DELTA: i32 = 30;

    /// Pillar scroll speed (pixels per tick)
    pub const PILLAR_SPEED: i32 = 2;
    /// Vertical opening between upper and lower pillar
    pub const PILLAR_GAP: i32 = 100;
    pub const PILLAR_WIDTH: i32 = 60;
    /// Length of each pillar segment
    pub const PILLAR_LENGTH: i32 = 500;
    /// Horizontal distance between consecutive pillars
    pub const PILLAR_SPACING: i32 = 400;
    /// Pillars alive in steady state
    pub const PILLAR_COUNT: usize = 3;
    /// Minimum distance between the opening and the board edges
    pub const GAP_MARGIN: i32 = 50;
}
