//! Flappy Pillars entry point
//!
//! Headless native host: no window, input comes from stdin one line per key
//! and frames are reported through the logger.
//!
//! ```text
//! flappy-pillars [tuning.json]
//! RUST_LOG=info      score and phase changes
//! RUST_LOG=trace     every draw list as JSON
//! ```

use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use flappy_pillars::Game;
use flappy_pillars::platform::{AssetError, AssetLoader, Assets, InputLatch, SpriteHandle, SpriteKind};
use flappy_pillars::renderer::{DrawList, Renderer};
use flappy_pillars::sim::{GamePhase, InputEvent};
use flappy_pillars::tuning::Tuning;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Loads sprites from a directory, checking only that each file is a PNG
struct DirLoader {
    root: PathBuf,
    next_handle: u32,
}

impl DirLoader {
    fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            next_handle: 0,
        }
    }
}

impl AssetLoader for DirLoader {
    fn load(&mut self, kind: SpriteKind) -> Result<SpriteHandle, AssetError> {
        let path = self.root.join(kind.file_name());
        if !path.exists() {
            return Err(AssetError::NotFound {
                kind,
                path: path.display().to_string(),
            });
        }
        let bytes = std::fs::read(&path).map_err(|source| AssetError::Io { kind, source })?;
        if !bytes.starts_with(&PNG_SIGNATURE) {
            return Err(AssetError::Decode {
                kind,
                reason: format!("{} is not a PNG file", path.display()),
            });
        }

        let handle = SpriteHandle(self.next_handle);
        self.next_handle += 1;
        Ok(handle)
    }
}

/// Logs score and phase changes instead of drawing
#[derive(Default)]
struct LogRenderer {
    last_score: Option<u32>,
    last_phase: Option<GamePhase>,
}

impl Renderer for LogRenderer {
    fn present(&mut self, frame: &DrawList) {
        if self.last_score != Some(frame.score) {
            let hud: Vec<&str> = frame.hud.iter().map(|h| h.text.as_str()).collect();
            log::info!("{}", hud.join(" | "));
            self.last_score = Some(frame.score);
        }
        if self.last_phase != Some(frame.phase) {
            match frame.phase {
                GamePhase::Running => log::info!("Running (Space+Enter to jump, q to restart, x to quit)"),
                GamePhase::GameOver => log::info!("Game over - press q then Enter to restart"),
            }
            self.last_phase = Some(frame.phase);
        }
    }
}

/// Map one line of stdin to an action
fn parse_command(line: &str) -> Option<InputEvent> {
    match line.trim().to_lowercase().as_str() {
        "" | "space" | "j" => Some(InputEvent::Jump),
        "q" | "r" | "restart" => Some(InputEvent::Restart),
        "w" | "up" => Some(InputEvent::MoveUp),
        "s" | "down" => Some(InputEvent::MoveDown),
        "a" | "left" => Some(InputEvent::MoveLeft),
        "d" | "right" => Some(InputEvent::MoveRight),
        _ => None,
    }
}

fn is_quit(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "x" | "quit" | "exit")
}

/// Feed stdin lines into the latch until EOF or a quit command
fn spawn_input_thread(latch: Arc<InputLatch>, quit: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if is_quit(&line) {
                break;
            }
            match parse_command(&line) {
                Some(event) => latch.press(event),
                None => log::warn!("Unknown command: {:?}", line.trim()),
            }
        }
        quit.store(true, Ordering::Release);
    });
}

fn main() {
    env_logger::init();
    log::info!("Flappy Pillars (headless) starting...");

    let tuning_path = std::env::args().nth(1).map(PathBuf::from);
    let tuning = Tuning::load_or_default(tuning_path.as_deref());

    let mut loader = DirLoader::new(Path::new("assets"));
    let assets = Assets::load(&mut loader);

    let seed: u64 = rand::random();
    log::info!("Seed: {}", seed);
    let mut game = Game::new(tuning, assets, seed);

    let latch = Arc::new(InputLatch::new());
    let quit = Arc::new(AtomicBool::new(false));
    spawn_input_thread(Arc::clone(&latch), Arc::clone(&quit));

    let mut renderer = LogRenderer::default();
    renderer.present(&game.draw_list());

    let frame_time = Duration::from_secs_f32(game.tuning().tick_dt());
    let mut last = Instant::now();
    while !quit.load(Ordering::Acquire) {
        let now = Instant::now();
        game.frame((now - last).as_secs_f32(), &latch, &mut renderer);
        last = now;
        std::thread::sleep(frame_time);
    }

    log::info!("Exiting, highest score {}", game.state().high_score.best());
}
