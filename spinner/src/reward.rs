use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Serialize, Deserialize};
use strum::{EnumIter, IntoEnumIterator};

/// Reward categories a slot can display. Closed set: three coin tiers and
/// three item tiers. The pool encodes draw probabilities by how many copies
/// of each variant it holds.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum RewardType {
    Coins100,
    Coins200,
    Coins500,
    Item01,
    Item02,
    Item03,
}

impl RewardType {
    /// Stable human-readable label, for logs and presentation adapters.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Coins100 => "100 coins",
            Self::Coins200 => "200 coins",
            Self::Coins500 => "500 coins",
            Self::Item01 => "common item",
            Self::Item02 => "rare item",
            Self::Item03 => "epic item",
        }
    }
}

/// Builds the reward pool: for each type in variant order, floor(pool_size
/// × weight) copies, appended unshuffled. Weights that don't divide evenly
/// leave the pool slightly short of `pool_size`; the shortfall is accepted
/// rather than padded. Weights summing past 1 are not rejected either; the
/// resulting distribution simply skews.
pub fn build_reward_pool(
    pool_size: usize,
    weights: &HashMap<RewardType, f64>,
) -> Vec<RewardType> {
    let mut pool = Vec::with_capacity(pool_size);
    for reward in RewardType::iter() {
        let weight = weights.get(&reward).copied().unwrap_or(0.0);
        // Multiply in floats, then truncate. The product can land a hair
        // under the exact value (100 * 0.58), so nudge before flooring.
        let count = (pool_size as f64 * weight + 1e-9) as usize;
        for _ in 0..count {
            pool.push(reward);
        }
    }
    pool
}

/// How the drawer picks the next token from the pool.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawStrategy {
    /// Reshuffle the whole pool before every draw and take the first
    /// element. Draws are independent; cost is O(pool size) per call,
    /// which stays cheap because pools are capped small.
    #[default]
    ShuffleEachDraw,
    /// Shuffle once, serve sequentially, reshuffle on wraparound. O(1)
    /// amortized, but draws within one pass sample without replacement
    /// and are correlated.
    SequentialPass,
}

/// Draws reward tokens from the weighted pool, indefinitely. The pool is
/// only ever reordered in place, never resized.
#[derive(Debug, Clone)]
pub struct RewardDrawer {
    pool: Vec<RewardType>,
    strategy: DrawStrategy,
    cursor: usize,
    rng: StdRng,
}

impl RewardDrawer {
    pub fn new(pool: Vec<RewardType>, strategy: DrawStrategy) -> Self {
        Self::with_rng(pool, strategy, StdRng::from_entropy())
    }

    /// Seeded variant for reproducible runs.
    pub fn with_seed(pool: Vec<RewardType>, strategy: DrawStrategy, seed: u64) -> Self {
        Self::with_rng(pool, strategy, StdRng::seed_from_u64(seed))
    }

    fn with_rng(pool: Vec<RewardType>, strategy: DrawStrategy, rng: StdRng) -> Self {
        debug_assert!(!pool.is_empty(), "drawer needs a non-empty pool");
        let mut drawer = Self { pool, strategy, cursor: 0, rng };
        if drawer.strategy == DrawStrategy::SequentialPass {
            drawer.pool.shuffle(&mut drawer.rng);
        }
        drawer
    }

    pub fn next_reward(&mut self) -> RewardType {
        match self.strategy {
            DrawStrategy::ShuffleEachDraw => {
                self.pool.shuffle(&mut self.rng);
                self.pool[0]
            }
            DrawStrategy::SequentialPass => {
                let reward = self.pool[self.cursor];
                self.cursor += 1;
                if self.cursor == self.pool.len() {
                    self.cursor = 0;
                    self.pool.shuffle(&mut self.rng);
                }
                reward
            }
        }
    }

    pub fn pool(&self) -> &[RewardType] {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_WEIGHTS;

    #[test]
    fn test_pool_counts_match_weights() {
        let pool = build_reward_pool(100, &DEFAULT_WEIGHTS);
        assert_eq!(pool.len(), 100);
        let count = |reward| pool.iter().filter(|&&t| t == reward).count();
        assert_eq!(count(RewardType::Coins100), 58);
        assert_eq!(count(RewardType::Coins200), 22);
        assert_eq!(count(RewardType::Coins500), 10);
        assert_eq!(count(RewardType::Item01), 5);
        assert_eq!(count(RewardType::Item02), 4);
        assert_eq!(count(RewardType::Item03), 1);
    }

    #[test]
    fn test_pool_is_type_grouped() {
        let pool = build_reward_pool(100, &DEFAULT_WEIGHTS);
        assert!(pool[..58].iter().all(|&r| r == RewardType::Coins100));
        assert!(pool[58..80].iter().all(|&r| r == RewardType::Coins200));
        assert_eq!(pool[99], RewardType::Item03);
    }

    #[test]
    fn test_pool_accepts_flooring_shortfall() {
        let weights = HashMap::from([
            (RewardType::Coins100, 0.55),
            (RewardType::Item01, 0.33),
        ]);
        let pool = build_reward_pool(10, &weights);
        // 5.5 floors to 5, 3.3 floors to 3; the pool is simply shorter.
        assert_eq!(pool.len(), 8);
    }

    #[test]
    fn test_draw_frequencies_converge() {
        for strategy in [DrawStrategy::ShuffleEachDraw, DrawStrategy::SequentialPass] {
            let pool = build_reward_pool(100, &DEFAULT_WEIGHTS);
            let mut drawer = RewardDrawer::with_seed(pool.clone(), strategy, 42);
            let draws = 100_000;
            let mut counts: HashMap<RewardType, usize> = HashMap::new();
            for _ in 0..draws {
                *counts.entry(drawer.next_reward()).or_insert(0) += 1;
            }
            for reward in RewardType::iter() {
                let expected =
                    pool.iter().filter(|&&t| t == reward).count() as f64 / pool.len() as f64;
                let observed =
                    counts.get(&reward).copied().unwrap_or(0) as f64 / draws as f64;
                assert!(
                    (observed - expected).abs() < 0.01,
                    "{:?} drifted for {:?}: observed {} expected {}",
                    strategy,
                    reward,
                    observed,
                    expected
                );
            }
        }
    }

    #[test]
    fn test_sequential_pass_consumes_whole_pool_per_cycle() {
        let pool = build_reward_pool(100, &DEFAULT_WEIGHTS);
        let mut drawer = RewardDrawer::with_seed(pool.clone(), DrawStrategy::SequentialPass, 7);
        let mut counts: HashMap<RewardType, usize> = HashMap::new();
        for _ in 0..pool.len() {
            *counts.entry(drawer.next_reward()).or_insert(0) += 1;
        }
        // One full pass is exactly the pool composition.
        for reward in RewardType::iter() {
            let expected = pool.iter().filter(|&&t| t == reward).count();
            assert_eq!(counts.get(&reward).copied().unwrap_or(0), expected);
        }
    }
}
