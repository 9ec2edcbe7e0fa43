//! Data-driven game constants
//!
//! Defaults mirror [`crate::consts`]. A host may override any subset from a
//! JSON file; missing fields keep their default value.

use std::ops::RangeInclusive;
use std::path::Path;

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// Every knob of the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub board_width: i32,
    pub board_height: i32,

    pub bird_width: i32,
    pub bird_height: i32,

    /// Pixels added to bird y each tick while above the floor
    pub gravity: i32,
    /// Pixels subtracted from bird y on a jump
    pub jump_delta: i32,
    /// Pixels moved by a directional input
    pub move_delta: i32,

    pub pillar_speed: i32,
    pub pillar_gap: i32,
    pub pillar_width: i32,
    pub pillar_length: i32,
    pub pillar_spacing: i32,
    pub pillar_count: usize,
    pub gap_margin: i32,

    /// Simulation ticks per second
    pub tick_rate: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,

            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,

            gravity: GRAVITY,
            jump_delta: JUMP_DELTA,
            move_delta: MOVE_DELTA,

            pillar_speed: PILLAR_SPEED,
            pillar_gap: PILLAR_GAP,
            pillar_width: PILLAR_WIDTH,
            pillar_length: PILLAR_LENGTH,
            pillar_spacing: PILLAR_SPACING,
            pillar_count: PILLAR_COUNT,
            gap_margin: GAP_MARGIN,

            tick_rate: TICK_RATE,
        }
    }
}

impl Tuning {
    /// Default tuning on a caller-supplied board
    pub fn with_board(width: i32, height: i32) -> Self {
        Self {
            board_width: width,
            board_height: height,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a JSON file
    pub fn load_from_path(path: &Path) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from `path` if given, falling back to defaults on any failure
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default tuning");
            return Self::default();
        };

        match Self::load_from_path(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("{} ({}), using default tuning", e, path.display());
                Self::default()
            }
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.board_width <= 0 || self.board_height <= 0 {
            return Err(TuningError::Invalid(format!(
                "board must be positive, got {}x{}",
                self.board_width, self.board_height
            )));
        }
        if self.bird_width <= 0 || self.bird_height <= 0 {
            return Err(TuningError::Invalid("bird size must be positive".into()));
        }
        if self.pillar_width <= 0 || self.pillar_length <= 0 || self.pillar_gap <= 0 {
            return Err(TuningError::Invalid("pillar dimensions must be positive".into()));
        }
        if self.pillar_spacing <= 0 {
            return Err(TuningError::Invalid("pillar spacing must be positive".into()));
        }
        if self.pillar_count == 0 {
            return Err(TuningError::Invalid("pillar count must be at least 1".into()));
        }
        if self.tick_rate == 0 {
            return Err(TuningError::Invalid("tick rate must be positive".into()));
        }
        if self.gap_margin < 0 || self.gap_max() < self.gap_margin {
            return Err(TuningError::Invalid(format!(
                "no room for a {}px gap with {}px margins on a {}px board",
                self.pillar_gap, self.gap_margin, self.board_height
            )));
        }
        Ok(())
    }

    /// Largest valid y for the top of a pillar opening
    #[inline]
    fn gap_max(&self) -> i32 {
        self.board_height - self.pillar_gap - self.gap_margin
    }

    /// Inclusive range the top of each pillar opening is drawn from
    pub fn gap_range(&self) -> RangeInclusive<i32> {
        self.gap_margin..=self.gap_max()
    }

    /// Where the bird appears at session start and on restart
    pub fn bird_spawn(&self) -> IVec2 {
        IVec2::new(self.board_width / 8, self.board_height / 2 - 20)
    }

    /// Seconds per simulation tick
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }
}
