//! Order-time discount draw
//!
//! Each placed order flips a fair coin: heads grants [`BONUS_DISCOUNT`],
//! tails grants nothing. The coin is injected so runs can be reproduced.

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::pricing::BONUS_DISCOUNT;

/// Source of fair coin flips
pub trait CoinFlip {
    /// `true` for heads
    fn flip(&mut self) -> bool;
}

/// Coin backed by the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadCoin;

impl CoinFlip for ThreadCoin {
    fn flip(&mut self) -> bool {
        rand::rng().random_bool(0.5)
    }
}

/// Coin backed by a seeded RNG for reproducible sessions
#[derive(Debug, Clone)]
pub struct SeededCoin {
    rng: StdRng,
}

impl SeededCoin {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl CoinFlip for SeededCoin {
    fn flip(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}

/// Coin that always lands the same way
#[derive(Debug, Clone, Copy)]
pub struct FixedCoin(pub bool);

impl CoinFlip for FixedCoin {
    fn flip(&mut self) -> bool {
        self.0
    }
}

/// Draw the discount for a new order
pub fn draw_discount(coin: &mut dyn CoinFlip) -> f64 {
    if coin.flip() {
        BONUS_DISCOUNT
    } else {
        0.0
    }
}
