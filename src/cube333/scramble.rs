//! Random move sequences for mixing up a cube.

use super::{Htm, Move333, MoveGenerator};
use crate::moves::MoveSequence;

use rand::seq::SliceRandom;
use rand::Rng;

/// How long scrambles are. Both bounds are inclusive.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScrambleConfig {
    /// Fewest moves in a scramble
    pub min_len: usize,
    /// Most moves in a scramble
    pub max_len: usize,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        ScrambleConfig {
            min_len: 20,
            max_len: 29,
        }
    }
}

impl ScrambleConfig {
    /// Set the shortest scramble length.
    pub fn min_len(mut self, len: usize) -> Self {
        self.min_len = len;
        self
    }

    /// Set the longest scramble length.
    pub fn max_len(mut self, len: usize) -> Self {
        self.max_len = len;
        self
    }
}

/// `count` moves picked uniformly from all 18 face turns.
pub fn scramble<R: Rng + ?Sized>(count: usize, rng: &mut R) -> MoveSequence<Move333> {
    (0..count)
        .filter_map(|_| Htm::MOVE_LIST.choose(rng).copied())
        .collect()
}

/// Produces scrambles with a random length.
#[derive(Debug, Clone, Default)]
pub struct Scrambler {
    config: ScrambleConfig,
}

impl Scrambler {
    /// Create a scrambler with the given lengths. If `max_len` is below `min_len`, every
    /// scramble is `min_len` moves long.
    pub fn new(config: ScrambleConfig) -> Self {
        Self { config }
    }

    /// A scramble with a length drawn uniformly from the configured range.
    pub fn scramble<R: Rng + ?Sized>(&self, rng: &mut R) -> MoveSequence<Move333> {
        let ScrambleConfig { min_len, max_len } = self.config;
        let len = rng.gen_range(min_len..=max_len.max(min_len));
        scramble(len, rng)
    }

    /// A scramble using the thread local generator.
    pub fn scramble_thread_rng(&self) -> MoveSequence<Move333> {
        self.scramble(&mut rand::thread_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube333::FaceletCube;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn exact_count() {
        let mut rng = StdRng::seed_from_u64(7);
        for count in [0, 1, 25] {
            assert_eq!(scramble(count, &mut rng).len(), count);
        }
    }

    #[test]
    fn lengths_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let scrambler = Scrambler::default();
        for _ in 0..200 {
            let len = scrambler.scramble(&mut rng).len();
            assert!((20..=29).contains(&len));
        }

        let fixed = Scrambler::new(ScrambleConfig::default().min_len(5).max_len(3));
        assert_eq!(fixed.scramble(&mut rng).len(), 5);
    }

    #[test]
    fn seeded_scrambles_repeat() {
        let a = scramble(30, &mut StdRng::seed_from_u64(1));
        let b = scramble(30, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn every_move_shows_up() {
        let mvs = scramble(2000, &mut StdRng::seed_from_u64(3));
        for m in Htm::MOVE_LIST {
            assert!(mvs.0.contains(m), "{m}");
        }
    }

    #[test]
    fn thread_rng_scramble_mixes() {
        let mvs = Scrambler::default().scramble_thread_rng();
        let mut cube = FaceletCube::SOLVED;
        cube.make_moves(&mvs);
        assert!(cube.validate().is_ok());
    }
}
