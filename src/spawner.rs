//! Random piece and color selection
//!
//! Every spawn draws a kind and a color independently and uniformly; there
//! is no bag or history, so droughts and repeats are possible by design.

use crate::tetromino::{BlockColor, PieceKind};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of random kinds and colors for spawned pieces
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: ChaCha8Rng,
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spawner {
    /// Create a spawner seeded from entropy
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Create a spawner with a fixed seed, for deterministic sequences
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw a uniformly random piece kind
    pub fn next_kind(&mut self) -> PieceKind {
        let kinds = PieceKind::all();
        kinds[self.rng.gen_range(0..kinds.len())]
    }

    /// Draw a uniformly random block color, independent of the kind
    pub fn next_color(&mut self) -> BlockColor {
        let colors = BlockColor::all();
        colors[self.rng.gen_range(0..colors.len())]
    }
}
