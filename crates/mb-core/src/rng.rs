//! Random choice source for the birth menus
//!
//! Uses a seeded ChaCha RNG so scripted runs are reproducible.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform index source used by the random-pick menu key.
pub trait ChoiceRng {
    /// Returns an index in `0..n`. Returns 0 if n is 0.
    fn pick(&mut self, n: usize) -> usize;
}

/// Birth random number generator
#[derive(Debug, Clone)]
pub struct BirthRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl BirthRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl ChoiceRng for BirthRng {
    fn pick(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }
}

impl Default for BirthRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_bounds() {
        let mut rng = BirthRng::new(42);
        for _ in 0..1000 {
            assert!(rng.pick(7) < 7);
        }
    }

    #[test]
    fn test_pick_zero() {
        let mut rng = BirthRng::new(42);
        assert_eq!(rng.pick(0), 0);
    }

    #[test]
    fn test_same_seed_same_picks() {
        let mut a = BirthRng::new(9);
        let mut b = BirthRng::new(9);
        let xs: Vec<usize> = (0..20).map(|_| a.pick(11)).collect();
        let ys: Vec<usize> = (0..20).map(|_| b.pick(11)).collect();
        assert_eq!(xs, ys);
        assert_eq!(a.seed(), 9);
    }

    #[test]
    fn test_pick_covers_range() {
        let mut rng = BirthRng::new(1);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[rng.pick(4)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
