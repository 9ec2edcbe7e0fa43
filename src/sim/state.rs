//! Game state and core simulation types
//!
//! Everything a session needs to advance lives in [`GameState`]. There are no
//! process-wide statics: two sessions in one process are fully independent.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::CollisionKind;
use super::geometry::Rect;
use super::obstacles::ObstacleStream;
use crate::highscores::HighScore;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticking at the fixed cadence
    Running,
    /// Frozen after a collision; only a restart is honoured
    GameOver,
}

/// Whether the session has a controllable bird.
///
/// Decided once, from asset availability, and kept across restarts so that a
/// restart never conjures a bird the host cannot draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BirdSlot {
    Present,
    /// The bird sprite failed to load; physics, collision and scoring are skipped
    Absent,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// One or more pillars were passed; carries the new total
    Scored { score: u32 },
    /// The bird hit something and the session is over
    Collided(CollisionKind),
    /// The best score of this process went up
    NewHighScore { score: u32 },
    /// The oldest pillar was replaced by a fresh one
    PillarRecycled,
    /// The session was reset to its initial layout
    Restarted,
}

/// The player-controlled bird
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bird {
    /// Top-left corner in board pixels
    pub pos: IVec2,
    /// Fixed for the whole session
    pub size: IVec2,
}

impl Bird {
    /// A bird at the tuning's spawn point
    pub fn spawn(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.bird_spawn(),
            size: IVec2::new(tuning.bird_width, tuning.bird_height),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// y of the bird's bottom edge
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }
}

/// A pillar pair: one segment above the opening, one below
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pillar {
    /// Left edge; decreases every tick
    pub x: i32,
    /// y of the top of the opening; fixed at creation
    pub gap_y: i32,
    /// Set once the bird has flown past, so a pillar scores at most once
    pub passed: bool,
}

impl Pillar {
    pub fn new(x: i32, gap_y: i32) -> Self {
        Self {
            x,
            gap_y,
            passed: false,
        }
    }

    /// Segment hanging down from above, ending at the top of the opening
    pub fn upper_bounds(&self, tuning: &Tuning) -> Rect {
        Rect::new(
            self.x,
            self.gap_y - tuning.pillar_length,
            tuning.pillar_width,
            tuning.pillar_length,
        )
    }

    /// Segment rising from below, starting at the bottom of the opening
    pub fn lower_bounds(&self, tuning: &Tuning) -> Rect {
        Rect::new(
            self.x,
            self.gap_y + tuning.pillar_gap,
            tuning.pillar_width,
            tuning.pillar_length,
        )
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed of the pillar generator, for reproducing a run
    pub seed: u64,
    pub tuning: Tuning,
    pub bird_slot: BirdSlot,
    /// `None` when `bird_slot` is `Absent`
    pub bird: Option<Bird>,
    pub pillars: ObstacleStream,
    /// Pillars passed this session
    pub score: u32,
    /// Best score of this process; survives restarts
    pub high_score: HighScore,
    pub phase: GamePhase,
    /// Simulation ticks since the last reset
    pub time_ticks: u64,
}

impl GameState {
    /// Create a running session with the initial pillar batch.
    ///
    /// A tuning the simulation cannot run with is replaced by the defaults.
    pub fn new(tuning: Tuning, bird_slot: BirdSlot, seed: u64) -> Self {
        let tuning = match tuning.validate() {
            Ok(()) => tuning,
            Err(e) => {
                log::warn!("{}, using default tuning", e);
                Tuning::default()
            }
        };
        if bird_slot == BirdSlot::Absent {
            log::error!("No bird sprite available; session will run without a bird");
        }

        let mut state = Self {
            seed,
            pillars: ObstacleStream::new(seed),
            tuning,
            bird_slot,
            bird: None,
            score: 0,
            high_score: HighScore::default(),
            phase: GamePhase::Running,
            time_ticks: 0,
        };
        state.reset();
        state
    }

    /// Put the session back into its starting layout.
    ///
    /// Shared by construction and restart. The high score and the pillar
    /// generator carry over.
    pub fn reset(&mut self) {
        self.score = 0;
        self.time_ticks = 0;
        self.bird = match self.bird_slot {
            BirdSlot::Present => Some(Bird::spawn(&self.tuning)),
            BirdSlot::Absent => None,
        };
        self.pillars.reset(&self.tuning);
        self.phase = GamePhase::Running;
    }

    /// Reset after a game over (or mid-run) and resume ticking
    pub fn restart(&mut self) {
        log::info!(
            "Restarting (seed {}, last score {}, best {})",
            self.seed,
            self.score,
            self.high_score.best()
        );
        self.reset();
    }

    /// Freeze the session after a collision
    pub fn game_over(&mut self, cause: CollisionKind) {
        log::info!("Game Over ({:?}), score {}", cause, self.score);
        self.phase = GamePhase::GameOver;
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
