//! Axis-aligned rectangles in board pixel space
//!
//! Origin is the top-left corner of the board, y grows downward.
//!
//! Overlap is exclusive: rectangles that only share an edge or a corner do
//! not intersect. A bird resting flush against a pillar is still alive.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An integer axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: IVec2,
    /// Width and height
    pub size: IVec2,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    /// True if the rectangle covers no area
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0 || self.size.y <= 0
    }

    /// Strict overlap test (shared edges do not count)
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_rects_intersect() {
        let a = Rect::new(0, 0, 40, 28);
        let b = Rect::new(30, 20, 60, 500);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_edge_touch_is_not_intersection() {
        let a = Rect::new(0, 0, 40, 28);
        // Shares the vertical edge x = 40
        assert!(!a.intersects(&Rect::new(40, 0, 60, 28)));
        // Shares the horizontal edge y = 28
        assert!(!a.intersects(&Rect::new(0, 28, 40, 10)));
        // Shares only the corner (40, 28)
        assert!(!a.intersects(&Rect::new(40, 28, 10, 10)));
    }

    #[test]
    fn test_one_pixel_overlap_intersects() {
        let a = Rect::new(0, 0, 40, 28);
        assert!(a.intersects(&Rect::new(39, 27, 10, 10)));
    }

    #[test]
    fn test_contained_rect_intersects() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(10, 10, 5, 5);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_empty_rect_never_intersects() {
        let a = Rect::new(0, 0, 100, 100);
        assert!(!a.intersects(&Rect::new(10, 10, 0, 5)));
    }

    fn arb_rect() -> impl Strategy<Value = Rect> {
        (-200..200i32, -200..200i32, 0..120i32, 0..120i32)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_intersection_is_symmetric(a in arb_rect(), b in arb_rect()) {
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn prop_adjacent_rects_never_intersect(a in arb_rect(), h in 1..120i32) {
            let right_neighbour = Rect::new(a.right(), a.top(), 10, h);
            let below_neighbour = Rect::new(a.left(), a.bottom(), 10, h);
            prop_assert!(!a.intersects(&right_neighbour));
            prop_assert!(!a.intersects(&below_neighbour));
        }
    }
}
