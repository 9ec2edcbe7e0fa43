//! Fixed-rate driver
//!
//! Hosts call [`Game::frame`] from whatever loop they have, with the wall
//! time since the previous call. Time is banked and spent in whole ticks of
//! `1 / tick_rate` seconds. Every tick drains the input latch, advances the
//! simulation and presents a fresh draw list.
//!
//! While the session is over no time is banked and no ticks run. Each frame
//! only looks for a restart; any other input is discarded.

use crate::consts::MAX_SUBSTEPS;
use crate::platform::{Assets, InputLatch};
use crate::renderer::{DrawList, Renderer};
use crate::sim::{GameEvent, GamePhase, GameState, tick};
use crate::tuning::Tuning;

/// Longest frame delta honoured; anything beyond is dropped
const MAX_FRAME_DT: f32 = 0.1;

/// A session plus the clock that drives it
pub struct Game {
    state: GameState,
    assets: Assets,
    accumulator: f32,
}

impl Game {
    pub fn new(tuning: Tuning, assets: Assets, seed: u64) -> Self {
        let state = GameState::new(tuning, assets.bird_slot(), seed);
        Self {
            state,
            assets,
            accumulator: 0.0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.state.tuning
    }

    pub fn draw_list(&self) -> DrawList {
        DrawList::build(&self.state, &self.assets)
    }

    /// Spend `dt` seconds of wall time. Returns the number of ticks simulated.
    ///
    /// A non-finite `dt` counts as no time at all.
    pub fn frame<R: Renderer + ?Sized>(&mut self, dt: f32, latch: &InputLatch, renderer: &mut R) -> u32 {
        if self.state.phase == GamePhase::GameOver {
            self.accumulator = 0.0;
            if latch.is_pending() && latch.take().restart {
                self.state.restart();
                renderer.present(&self.draw_list());
            }
            return 0;
        }

        if !dt.is_finite() {
            log::warn!("Ignoring non-finite frame delta {}", dt);
            return 0;
        }
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);
        let step = self.state.tuning.tick_dt();

        let mut ticks = 0;
        while self.accumulator >= step && ticks < MAX_SUBSTEPS {
            let input = latch.take();
            let events = tick(&mut self.state, &input);
            self.accumulator -= step;
            ticks += 1;

            for event in &events {
                match event {
                    GameEvent::Scored { score } => log::debug!("Score: {}", score),
                    GameEvent::Collided(cause) => log::debug!("Collision: {:?}", cause),
                    _ => {}
                }
            }

            let frame = self.draw_list();
            if log::log_enabled!(log::Level::Trace) {
                if let Ok(json) = serde_json::to_string(&frame) {
                    log::trace!("{}", json);
                }
            }
            renderer.present(&frame);

            if self.state.phase == GamePhase::GameOver {
                self.accumulator = 0.0;
                break;
            }
        }

        ticks
    }
}
