//! Collision detection and pass-through scoring
//!
//! Pillar overlap uses [`Rect::intersects`], which is exclusive: touching a
//! pillar edge is safe. The board edges are inclusive: a bird whose top is at
//! y = 0, or whose bottom reaches the board height, has crashed.

use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::state::{Bird, Pillar};
use crate::tuning::Tuning;

/// What the bird ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionKind {
    Ceiling,
    Floor,
    /// Index into the pillar window at the time of the hit
    UpperPillar { index: usize },
    LowerPillar { index: usize },
}

/// First thing the bird is colliding with, if any
pub fn check_collision(bird: &Bird, pillars: &[Pillar], tuning: &Tuning) -> Option<CollisionKind> {
    if bird.pos.y <= 0 {
        return Some(CollisionKind::Ceiling);
    }
    if bird.bottom() >= tuning.board_height {
        return Some(CollisionKind::Floor);
    }

    let bounds: Rect = bird.bounds();
    for (index, pillar) in pillars.iter().enumerate() {
        if bounds.intersects(&pillar.upper_bounds(tuning)) {
            return Some(CollisionKind::UpperPillar { index });
        }
        if bounds.intersects(&pillar.lower_bounds(tuning)) {
            return Some(CollisionKind::LowerPillar { index });
        }
    }
    None
}

/// Mark every pillar whose midline is now behind the bird.
///
/// Returns how many pillars were newly passed. A pillar is only ever counted
/// once thanks to its `passed` flag.
pub fn score_passed(bird: &Bird, pillars: &mut [Pillar], tuning: &Tuning) -> u32 {
    let mut scored = 0;
    for pillar in pillars.iter_mut() {
        if !pillar.passed && pillar.x + tuning.pillar_width / 2 < bird.pos.x {
            pillar.passed = true;
            scored += 1;
        }
    }
    scored
}
