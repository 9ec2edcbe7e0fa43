//! Input handoff from the host to the tick loop
//!
//! Host callbacks may run on a different thread than the tick loop. They only
//! ever set bits in an atomic mask; the loop swaps the mask out once per tick.
//! Several presses of the same key between two ticks collapse into one.

use std::sync::atomic::{AtomicU8, Ordering};

use crate::sim::{InputEvent, TickInput};

fn bit(event: InputEvent) -> u8 {
    match event {
        InputEvent::Jump => 1 << 0,
        InputEvent::MoveUp => 1 << 1,
        InputEvent::MoveDown => 1 << 2,
        InputEvent::MoveLeft => 1 << 3,
        InputEvent::MoveRight => 1 << 4,
        InputEvent::Restart => 1 << 5,
    }
}

/// Thread-safe latch of pending input events
#[derive(Debug, Default)]
pub struct InputLatch {
    pending: AtomicU8,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event for the next tick (callable from any thread)
    pub fn press(&self, event: InputEvent) {
        self.pending.fetch_or(bit(event), Ordering::AcqRel);
    }

    /// Drain everything pressed since the previous call
    pub fn take(&self) -> TickInput {
        let mask = self.pending.swap(0, Ordering::AcqRel);
        let mut input = TickInput::default();
        for event in InputEvent::ALL {
            if mask & bit(event) != 0 {
                input.press(event);
            }
        }
        input
    }

    /// True if something is waiting to be taken
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire) != 0
    }
}
