//! Rendering handoff
//!
//! The core never draws. Each tick it builds a [`DrawList`] and passes it to a
//! host-side [`Renderer`].

pub mod draw_list;

pub use draw_list::{DrawList, HudColor, HudText, Sprite};

/// Host-side consumer of draw lists
pub trait Renderer {
    /// Show a frame. Called once per simulated tick and once after a restart.
    fn present(&mut self, frame: &DrawList);
}

/// Renderer that keeps every frame, for tests and replays
#[derive(Debug, Default)]
pub struct FrameRecorder {
    pub frames: Vec<DrawList>,
}

impl Renderer for FrameRecorder {
    fn present(&mut self, frame: &DrawList) {
        self.frames.push(frame.clone());
    }
}
