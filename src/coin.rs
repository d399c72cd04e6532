//! The coin that decides who opens each game.

use fastrand::Rng;

use crate::player::CoinSide;

/// A fair coin backed by its own generator, so that a seed makes a whole match reproducible.
#[derive(Debug, Clone)]
pub struct Coin {
    /// The generator every flip draws from.
    rng: Rng,
}

impl Coin {
    /// A coin seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self { rng: Rng::new() }
    }

    /// A coin that always produces the same sequence of flips for the same seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Rng::with_seed(seed),
        }
    }

    /// Flips the coin. Both sides are equally likely.
    pub fn flip(&mut self) -> CoinSide {
        if self.rng.bool() {
            CoinSide::Heads
        } else {
            CoinSide::Tails
        }
    }
}

impl Default for Coin {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Seat;

    #[test]
    fn test_flip_is_fair() {
        const TRIALS: u32 = 10_000;
        let mut coin = Coin::with_seed(0x5eed);

        let firsts_for_one = (0..TRIALS)
            .filter(|_| Seat::called_by(coin.flip()) == Seat::One)
            .count();
        let ratio = f64::from(u32::try_from(firsts_for_one).unwrap()) / f64::from(TRIALS);

        assert!(
            (0.47..=0.53).contains(&ratio),
            "player one went first {ratio:.3} of the time"
        );
    }

    #[test]
    fn test_same_seed_same_flips() {
        let mut left = Coin::with_seed(42);
        let mut right = Coin::with_seed(42);
        for _ in 0..32 {
            assert_eq!(left.flip(), right.flip());
        }
    }
}
