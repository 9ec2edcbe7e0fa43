//! Draw-list snapshots of the game state

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::platform::{Assets, SpriteHandle, SpriteKind};
use crate::sim::{GamePhase, GameState, Rect};

/// One positioned image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    /// `None` if the host failed to load this image; the renderer may skip it
    pub handle: Option<SpriteHandle>,
    pub rect: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HudColor {
    White,
    Red,
}

/// A line of HUD text, anchored at its baseline start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudText {
    pub text: String,
    pub pos: IVec2,
    pub color: HudColor,
}

/// Everything the renderer needs for one frame, back to front
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawList {
    pub board: IVec2,
    pub background: Sprite,
    /// Absent when the session has no bird
    pub bird: Option<Sprite>,
    /// Upper then lower segment for each pillar, oldest pillar first
    pub pillars: Vec<Sprite>,
    pub score: u32,
    pub high_score: u32,
    pub hud: Vec<HudText>,
    pub phase: GamePhase,
}

impl DrawList {
    pub fn build(state: &GameState, assets: &Assets) -> Self {
        let tuning = &state.tuning;
        let board = IVec2::new(tuning.board_width, tuning.board_height);

        let background = Sprite {
            kind: SpriteKind::Background,
            handle: assets.background,
            rect: Rect {
                pos: IVec2::ZERO,
                size: board,
            },
        };

        let bird = state.bird.map(|bird| Sprite {
            kind: SpriteKind::Bird,
            handle: assets.bird,
            rect: bird.bounds(),
        });

        let mut pillars = Vec::with_capacity(state.pillars.len() * 2);
        for pillar in state.pillars.pillars() {
            pillars.push(Sprite {
                kind: SpriteKind::PillarUpper,
                handle: assets.pillar_upper,
                rect: pillar.upper_bounds(tuning),
            });
            pillars.push(Sprite {
                kind: SpriteKind::PillarLower,
                handle: assets.pillar_lower,
                rect: pillar.lower_bounds(tuning),
            });
        }

        let score = state.score;
        let high_score = state.high_score.best();
        let hud = vec![
            HudText {
                text: format!("Score: {}", score),
                pos: IVec2::new(10, 25),
                color: HudColor::White,
            },
            HudText {
                text: format!("Highest Score: {}", high_score),
                pos: IVec2::new(tuning.board_width - 200, 25),
                color: HudColor::Red,
            },
        ];

        Self {
            board,
            background,
            bird,
            pillars,
            score,
            high_score,
            hud,
            phase: state.phase,
        }
    }
}
