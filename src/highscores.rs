//! Best score of the running process
//!
//! Lives only as long as the process. Restarts never lower it and nothing
//! writes it to disk.

/// Monotonic best-score tracker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScore {
    best: u32,
}

impl HighScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a score; returns true if it beat the previous best
    pub fn record(&mut self, score: u32) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }

    pub fn best(&self) -> u32 {
        self.best
    }
}
