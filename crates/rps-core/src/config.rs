//! Configuration for a game session.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::player::computer::COMPUTER_NAME;

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Points needed to win when the human does not pick a number.
    pub winning_score: u32,
    /// RNG seed for reproducible computer play; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Name shown for the computer participant.
    pub computer_name: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            winning_score: 3,
            seed: None,
            computer_name: COMPUTER_NAME.to_string(),
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the default winning score (at least 1).
    pub fn with_winning_score(mut self, score: u32) -> Self {
        self.winning_score = score.max(1);
        self
    }

    /// Set the computer's name.
    pub fn with_computer_name(mut self, name: impl Into<String>) -> Self {
        self.computer_name = name.into();
        self
    }

    /// Build the computer's random source.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Randomizer;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.winning_score, 3);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.computer_name, "ROBOT");
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default()
            .with_seed(7)
            .with_winning_score(5)
            .with_computer_name("HAL");
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.winning_score, 5);
        assert_eq!(cfg.computer_name, "HAL");
    }

    #[test]
    fn winning_score_floor() {
        assert_eq!(GameConfig::default().with_winning_score(0).winning_score, 1);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let cfg = GameConfig::default().with_seed(42);
        let mut a = cfg.rng();
        let mut b = cfg.rng();
        let xs: Vec<usize> = (0..20).map(|_| a.next_index(3)).collect();
        let ys: Vec<usize> = (0..20).map(|_| b.next_index(3)).collect();
        assert_eq!(xs, ys);
        assert!(xs.iter().all(|&x| x < 3));
    }
}
