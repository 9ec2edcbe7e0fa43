//! Bird motion
//!
//! Motion is a fixed pixel step per tick, not an integrated velocity: gravity
//! adds a constant each tick and a jump is an instant reposition. Nothing here
//! clamps the bird to the board; leaving it is a collision, detected later.

use super::state::Bird;
use super::tick::TickInput;
use crate::tuning::Tuning;

/// Pull the bird down one gravity step while its bottom edge is above the floor
pub fn apply_gravity(bird: &mut Bird, tuning: &Tuning) {
    if bird.bottom() < tuning.board_height {
        bird.pos.y += tuning.gravity;
    }
}

/// Apply this tick's discrete inputs, each at most once
pub fn apply_input(bird: &mut Bird, input: &TickInput, tuning: &Tuning) {
    if input.jump {
        bird.pos.y -= tuning.jump_delta;
    }
    if input.move_up {
        bird.pos.y -= tuning.move_delta;
    }
    if input.move_down {
        bird.pos.y += tuning.move_delta;
    }
    if input.move_left {
        bird.pos.x -= tuning.move_delta;
    }
    if input.move_right {
        bird.pos.x += tuning.move_delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    fn bird() -> (Bird, Tuning) {
        let tuning = Tuning::default();
        (Bird::spawn(&tuning), tuning)
    }

    #[test]
    fn test_gravity_is_fixed_step() {
        let (mut b, tuning) = bird();
        apply_gravity(&mut b, &tuning);
        assert_eq!(b.pos.y, 252);
        apply_gravity(&mut b, &tuning);
        // No acceleration: still 2 px per tick
        assert_eq!(b.pos.y, 254);
    }

    #[test]
    fn test_gravity_stops_at_floor() {
        let (mut b, tuning) = bird();
        b.pos.y = tuning.board_height - b.size.y;
        apply_gravity(&mut b, &tuning);
        assert_eq!(b.pos.y, tuning.board_height - b.size.y);

        // One pixel above the floor still falls, and may overshoot it
        b.pos.y -= 1;
        apply_gravity(&mut b, &tuning);
        assert_eq!(b.bottom(), tuning.board_height + 1);
    }

    #[test]
    fn test_jump_repositions_immediately() {
        let (mut b, tuning) = bird();
        let input = TickInput {
            jump: true,
            ..Default::default()
        };
        apply_input(&mut b, &input, &tuning);
        assert_eq!(b.pos, IVec2::new(120, 220));
    }

    #[test]
    fn test_jump_is_not_clamped_at_ceiling() {
        let (mut b, tuning) = bird();
        b.pos.y = 10;
        let input = TickInput {
            jump: true,
            ..Default::default()
        };
        apply_input(&mut b, &input, &tuning);
        assert_eq!(b.pos.y, -20);
    }

    #[test]
    fn test_directional_moves() {
        let (mut b, tuning) = bird();
        let right = TickInput {
            move_right: true,
            ..Default::default()
        };
        apply_input(&mut b, &right, &tuning);
        assert_eq!(b.pos, IVec2::new(150, 250));

        let left_down = TickInput {
            move_left: true,
            move_down: true,
            ..Default::default()
        };
        apply_input(&mut b, &left_down, &tuning);
        assert_eq!(b.pos, IVec2::new(120, 280));

        let up = TickInput {
            move_up: true,
            ..Default::default()
        };
        apply_input(&mut b, &up, &tuning);
        assert_eq!(b.pos, IVec2::new(120, 250));
    }

    #[test]
    fn test_no_input_is_noop() {
        let (mut b, tuning) = bird();
        apply_input(&mut b, &TickInput::default(), &tuning);
        assert_eq!(b.pos, IVec2::new(120, 250));
    }
}
