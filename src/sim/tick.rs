//! Fixed timestep simulation tick
//!
//! One tick runs, in order: input, gravity, pillar scroll, collision,
//! scoring, high score. A tick in `GameOver` does nothing unless it carries
//! a restart.

use serde::{Deserialize, Serialize};

use super::collision::{check_collision, score_passed};
use super::physics::{apply_gravity, apply_input};
use super::state::{GameEvent, GamePhase, GameState};

/// A discrete key action delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    Jump,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Restart,
}

impl InputEvent {
    pub const ALL: [InputEvent; 6] = [
        InputEvent::Jump,
        InputEvent::MoveUp,
        InputEvent::MoveDown,
        InputEvent::MoveLeft,
        InputEvent::MoveRight,
        InputEvent::Restart,
    ];
}

/// Input commands for a single tick.
///
/// Each kind of event is either present or not; repeated presses within one
/// tick collapse into one. `TickInput::default()` is "no input".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub jump: bool,
    pub move_up: bool,
    pub move_down: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub restart: bool,
}

impl TickInput {
    /// Input carrying a single event
    pub fn from_event(event: InputEvent) -> Self {
        let mut input = Self::default();
        input.press(event);
        input
    }

    /// Record an event for this tick
    pub fn press(&mut self, event: InputEvent) {
        match event {
            InputEvent::Jump => self.jump = true,
            InputEvent::MoveUp => self.move_up = true,
            InputEvent::MoveDown => self.move_down = true,
            InputEvent::MoveLeft => self.move_left = true,
            InputEvent::MoveRight => self.move_right = true,
            InputEvent::Restart => self.restart = true,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.restart {
        state.restart();
        events.push(GameEvent::Restarted);
        return events;
    }

    // Frozen until restart
    if state.phase == GamePhase::GameOver {
        return events;
    }

    state.time_ticks += 1;

    if let Some(bird) = state.bird.as_mut() {
        apply_input(bird, input, &state.tuning);
        apply_gravity(bird, &state.tuning);
    }

    if state.pillars.advance(&state.tuning) {
        events.push(GameEvent::PillarRecycled);
    }

    // Without a bird there is nothing to collide or score
    if let Some(bird) = state.bird {
        if let Some(cause) = check_collision(&bird, state.pillars.pillars(), &state.tuning) {
            state.game_over(cause);
            events.push(GameEvent::Collided(cause));
        } else {
            let passed = score_passed(&bird, state.pillars.pillars_mut(), &state.tuning);
            if passed > 0 {
                state.score += passed;
                events.push(GameEvent::Scored { score: state.score });
            }
        }
    }

    if state.high_score.record(state.score) {
        log::info!("New high score: {}", state.score);
        events.push(GameEvent::NewHighScore { score: state.score });
    }

    events
}
