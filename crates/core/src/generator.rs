//! Piece generator - uniform random tetromino selection
//!
//! Generation is a pure function of the random source handed in. The engine owns a
//! [`ChaCha8Rng`] so a seed fully determines the sequence of pieces and spawn columns.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::pieces::Piece;
use crate::types::PieceKind;

/// Random source used by the rule engine
pub type EngineRng = ChaCha8Rng;

/// Pick one of the seven kinds uniformly and return it at anchor (0, 0).
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Piece {
    let kind = PieceKind::ALL[rng.random_range(0..PieceKind::ALL.len())];
    Piece::new(kind)
}

/// Deterministic engine RNG
pub fn seeded_rng(seed: u64) -> EngineRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Engine RNG seeded from the thread-local generator
pub fn entropy_rng() -> EngineRng {
    let mut thread = rand::rng();
    ChaCha8Rng::from_rng(&mut thread)
}
