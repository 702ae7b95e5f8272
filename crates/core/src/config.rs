//! Game configuration.

use crate::types::{GRID_SIZE, MAX_PAIRS, N_PAIRS, RESOLVE_DELAY_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Distinct values in the deck; the board holds twice as many cards.
    pub n_pairs: u8,
    /// Cards per grid row.
    pub columns: u8,
    /// Delay between the second flip of a turn and its resolution.
    pub resolve_delay_ms: u64,
    /// Fixed shuffle seed; `None` deals from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            n_pairs: N_PAIRS,
            columns: GRID_SIZE,
            resolve_delay_ms: RESOLVE_DELAY_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_pairs(mut self, n_pairs: u8) -> Self {
        self.n_pairs = n_pairs;
        self
    }

    pub fn with_resolve_delay_ms(mut self, delay_ms: u64) -> Self {
        self.resolve_delay_ms = delay_ms;
        self
    }

    /// Clamp values into the ranges the board supports.
    pub fn normalized(mut self) -> Self {
        self.n_pairs = self.n_pairs.clamp(1, MAX_PAIRS);
        self.columns = self.columns.max(1);
        self
    }

    pub fn card_count(&self) -> usize {
        (self.n_pairs as usize) * 2
    }

    /// Rows needed to lay out every card.
    pub fn rows(&self) -> u8 {
        let cols = self.columns.max(1) as usize;
        self.card_count().div_ceil(cols) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_four_by_four() {
        let config = GameConfig::default();
        assert_eq!(config.card_count(), 16);
        assert_eq!(config.rows(), 4);
        assert_eq!(config.resolve_delay_ms, 800);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_normalized_clamps() {
        let config = GameConfig::default().with_pairs(0).normalized();
        assert_eq!(config.n_pairs, 1);

        let config = GameConfig::default().with_pairs(40).normalized();
        assert_eq!(config.n_pairs, MAX_PAIRS);
    }

    #[test]
    fn test_rows_round_up() {
        let config = GameConfig::default().with_pairs(3);
        assert_eq!(config.rows(), 2);
    }
}
