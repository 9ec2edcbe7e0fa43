//! Pillar stream: spawning, scrolling and recycling
//!
//! The stream is a short rolling window ordered by x. Each tick every pillar
//! scrolls left; once the newest pillar has travelled one spacing in from the
//! right edge a fresh one is appended behind it and the oldest is dropped.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::Pillar;
use crate::tuning::Tuning;

/// Rolling window of pillars with its own gap generator
#[derive(Debug, Clone)]
pub struct ObstacleStream {
    pillars: Vec<Pillar>,
    /// One generator for the lifetime of the stream, never reseeded
    rng: Pcg32,
}

impl ObstacleStream {
    /// Empty stream; call [`ObstacleStream::reset`] to lay out the first batch
    pub fn new(seed: u64) -> Self {
        Self {
            pillars: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Clear and lay out the initial batch, first pillar on the right edge
    pub fn reset(&mut self, tuning: &Tuning) {
        self.pillars.clear();
        for i in 0..tuning.pillar_count {
            let x = tuning.board_width + i as i32 * tuning.pillar_spacing;
            self.spawn(x, tuning);
        }
    }

    /// Append a pillar at `x` with a fresh random opening
    pub fn spawn(&mut self, x: i32, tuning: &Tuning) {
        let gap_y = self.rng.random_range(tuning.gap_range());
        self.pillars.push(Pillar::new(x, gap_y));
    }

    /// Scroll every pillar and recycle the oldest when due.
    ///
    /// Returns true if a pillar was recycled this tick.
    pub fn advance(&mut self, tuning: &Tuning) -> bool {
        for pillar in &mut self.pillars {
            pillar.x -= tuning.pillar_speed;
        }

        let Some(tail_x) = self.pillars.last().map(|p| p.x) else {
            return false;
        };
        if tail_x >= tuning.board_width - tuning.pillar_spacing {
            return false;
        }

        self.spawn(tail_x + tuning.pillar_spacing, tuning);
        if self.pillars.len() > tuning.pillar_count {
            self.pillars.remove(0);
        }
        log::debug!("Recycled pillar, newest at x={}", tail_x + tuning.pillar_spacing);
        true
    }

    /// Pillars ordered oldest (leftmost) first
    pub fn pillars(&self) -> &[Pillar] {
        &self.pillars
    }

    pub fn pillars_mut(&mut self) -> &mut [Pillar] {
        &mut self.pillars
    }

    pub fn len(&self) -> usize {
        self.pillars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pillars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn seeded(seed: u64) -> (ObstacleStream, Tuning) {
        let tuning = Tuning::default();
        let mut stream = ObstacleStream::new(seed);
        stream.reset(&tuning);
        (stream, tuning)
    }

    #[test]
    fn test_initial_batch_positions() {
        let (stream, _) = seeded(1);
        let xs: Vec<i32> = stream.pillars().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![960, 1360, 1760]);
        assert!(stream.pillars().iter().all(|p| !p.passed));
    }

    #[test]
    fn test_advance_scrolls_left() {
        let (mut stream, tuning) = seeded(1);
        assert!(!stream.advance(&tuning));
        let xs: Vec<i32> = stream.pillars().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![958, 1358, 1758]);
    }

    #[test]
    fn test_recycle_happens_when_tail_crosses_threshold() {
        let (mut stream, tuning) = seeded(1);
        let initial_gaps: Vec<i32> = stream.pillars().iter().map(|p| p.gap_y).collect();

        // Tail starts at 1760 and must drop below 560: 601 ticks at 2 px/tick
        for _ in 0..600 {
            assert!(!stream.advance(&tuning));
        }
        assert_eq!(stream.pillars()[2].x, 560);

        assert!(stream.advance(&tuning));
        let xs: Vec<i32> = stream.pillars().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![158, 558, 958]);
        // The first pillar is gone, the other two kept their openings
        let gaps: Vec<i32> = stream.pillars().iter().map(|p| p.gap_y).collect();
        assert_eq!(&gaps[..2], &initial_gaps[1..]);
    }

    #[test]
    fn test_window_stays_at_steady_count() {
        let (mut stream, tuning) = seeded(9);
        for _ in 0..5_000 {
            stream.advance(&tuning);
            assert_eq!(stream.len(), tuning.pillar_count);
        }
    }

    #[test]
    fn test_spacing_preserved_after_recycles() {
        let (mut stream, tuning) = seeded(3);
        for _ in 0..3_000 {
            stream.advance(&tuning);
        }
        for pair in stream.pillars().windows(2) {
            assert_eq!(pair[1].x - pair[0].x, tuning.pillar_spacing);
        }
    }

    #[test]
    fn test_reset_restores_initial_positions() {
        let (mut stream, tuning) = seeded(42);
        for _ in 0..700 {
            stream.advance(&tuning);
        }
        stream.reset(&tuning);
        let xs: Vec<i32> = stream.pillars().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![960, 1360, 1760]);
    }

    #[test]
    fn test_same_seed_same_stream() {
        let (a, _) = seeded(1234);
        let (b, _) = seeded(1234);
        assert_eq!(a.pillars(), b.pillars());
    }

    proptest! {
        #[test]
        fn prop_gap_always_within_margins(seed in any::<u64>(), ticks in 0usize..2_000) {
            let (mut stream, tuning) = seeded(seed);
            for _ in 0..ticks {
                stream.advance(&tuning);
            }
            for pillar in stream.pillars() {
                prop_assert!(pillar.gap_y >= 50);
                prop_assert!(pillar.gap_y <= 390);
            }
        }

        #[test]
        fn prop_gap_respects_custom_board(seed in any::<u64>(), height in 200..1200i32) {
            let tuning = Tuning::with_board(960, height);
            let mut stream = ObstacleStream::new(seed);
            stream.reset(&tuning);
            for _ in 0..800 {
                stream.advance(&tuning);
            }
            for pillar in stream.pillars() {
                prop_assert!(tuning.gap_range().contains(&pillar.gap_y));
            }
        }
    }
}
