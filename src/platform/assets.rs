//! Sprite handles supplied by the host
//!
//! Decoding images is the host's business. The core only needs to know which
//! sprites exist so it can hand their handles back in the draw list. A sprite
//! that fails to load leaves its slot empty; nothing here aborts a session.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::BirdSlot;

/// The four images the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteKind {
    Background,
    Bird,
    /// Segment above the opening, hanging from the top of the board
    PillarUpper,
    /// Segment below the opening, rising from the bottom of the board
    PillarLower,
}

impl SpriteKind {
    pub const ALL: [SpriteKind; 4] = [
        SpriteKind::Background,
        SpriteKind::Bird,
        SpriteKind::PillarUpper,
        SpriteKind::PillarLower,
    ];

    /// Conventional file name for file-backed loaders
    pub fn file_name(&self) -> &'static str {
        match self {
            SpriteKind::Background => "background.png",
            SpriteKind::Bird => "bird.png",
            SpriteKind::PillarUpper => "pillar-upper.png",
            SpriteKind::PillarLower => "pillar-lower.png",
        }
    }
}

/// Opaque host-side identifier of a decoded sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteHandle(pub u32);

/// Why a sprite could not be provided
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("{kind:?} sprite not found at {path}")]
    NotFound { kind: SpriteKind, path: String },
    #[error("failed to read {kind:?} sprite: {source}")]
    Io {
        kind: SpriteKind,
        #[source]
        source: std::io::Error,
    },
    #[error("{kind:?} sprite could not be decoded: {reason}")]
    Decode { kind: SpriteKind, reason: String },
}

/// Host-provided sprite source
pub trait AssetLoader {
    fn load(&mut self, kind: SpriteKind) -> Result<SpriteHandle, AssetError>;
}

/// Whatever sprites the host managed to load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assets {
    pub background: Option<SpriteHandle>,
    pub bird: Option<SpriteHandle>,
    pub pillar_upper: Option<SpriteHandle>,
    pub pillar_lower: Option<SpriteHandle>,
}

impl Assets {
    /// Ask the loader for every sprite, logging and skipping failures
    pub fn load<L: AssetLoader + ?Sized>(loader: &mut L) -> Self {
        let mut assets = Self::default();
        for kind in SpriteKind::ALL {
            match loader.load(kind) {
                Ok(handle) => assets.set(kind, Some(handle)),
                Err(e) => log::warn!("{}", e),
            }
        }

        let missing = assets.missing();
        if missing.is_empty() {
            log::info!("All sprites loaded");
        } else {
            log::warn!("Missing sprites: {:?}", missing);
        }
        assets
    }

    /// Every slot filled with a distinct handle
    pub fn placeholder() -> Self {
        Self {
            background: Some(SpriteHandle(0)),
            bird: Some(SpriteHandle(1)),
            pillar_upper: Some(SpriteHandle(2)),
            pillar_lower: Some(SpriteHandle(3)),
        }
    }

    pub fn get(&self, kind: SpriteKind) -> Option<SpriteHandle> {
        match kind {
            SpriteKind::Background => self.background,
            SpriteKind::Bird => self.bird,
            SpriteKind::PillarUpper => self.pillar_upper,
            SpriteKind::PillarLower => self.pillar_lower,
        }
    }

    fn set(&mut self, kind: SpriteKind, handle: Option<SpriteHandle>) {
        match kind {
            SpriteKind::Background => self.background = handle,
            SpriteKind::Bird => self.bird = handle,
            SpriteKind::PillarUpper => self.pillar_upper = handle,
            SpriteKind::PillarLower => self.pillar_lower = handle,
        }
    }

    pub fn missing(&self) -> Vec<SpriteKind> {
        SpriteKind::ALL
            .into_iter()
            .filter(|&kind| self.get(kind).is_none())
            .collect()
    }

    /// A session only gets a bird if there is something to draw it with
    pub fn bird_slot(&self) -> BirdSlot {
        if self.bird.is_some() {
            BirdSlot::Present
        } else {
            BirdSlot::Absent
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Loader that fails for a fixed set of sprites
    struct FlakyLoader {
        failing: Vec<SpriteKind>,
        next: u32,
    }

    impl AssetLoader for FlakyLoader {
        fn load(&mut self, kind: SpriteKind) -> Result<SpriteHandle, AssetError> {
            if self.failing.contains(&kind) {
                return Err(AssetError::NotFound {
                    kind,
                    path: kind.file_name().to_string(),
                });
            }
            self.next += 1;
            Ok(SpriteHandle(self.next))
        }
    }

    #[test]
    fn test_all_sprites_loaded() {
        let mut loader = FlakyLoader {
            failing: vec![],
            next: 0,
        };
        let assets = Assets::load(&mut loader);
        assert!(assets.missing().is_empty());
        assert_eq!(assets.bird_slot(), BirdSlot::Present);
        assert_eq!(assets.get(SpriteKind::Background), Some(SpriteHandle(1)));
    }

    #[test]
    fn test_failed_sprite_degrades_to_absent() {
        let mut loader = FlakyLoader {
            failing: vec![SpriteKind::Bird, SpriteKind::PillarLower],
            next: 0,
        };
        let assets = Assets::load(&mut loader);
        assert_eq!(assets.missing(), vec![SpriteKind::Bird, SpriteKind::PillarLower]);
        assert_eq!(assets.bird_slot(), BirdSlot::Absent);
        assert!(assets.pillar_upper.is_some());
    }

    #[test]
    fn test_placeholder_handles_are_distinct() {
        let assets = Assets::placeholder();
        let handles: Vec<_> = SpriteKind::ALL.iter().filter_map(|&k| assets.get(k)).collect();
        assert_eq!(handles.len(), 4);
        for (i, a) in handles.iter().enumerate() {
            assert!(!handles[i + 1..].contains(a));
        }
    }
}
