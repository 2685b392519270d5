use serde::{Deserialize, Serialize};

/// Tunable rules of a run. Every field has a default so a partial
/// `config.json` is enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub starting_chips: i64,
    pub hand_size: usize,
    pub max_selection: usize,
    pub max_discards: u32,
    /// Hands allowed per stage before the run is exhausted. `None` means
    /// unlimited.
    pub max_hands: Option<u32>,
    /// Level reward is `bite * level_reward_factor`.
    pub level_reward_factor: i64,
    /// Joker cost multiplier growth per completed level.
    pub cost_growth: i64,
    pub stakes: Vec<i64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_chips: 100,
            hand_size: 8,
            max_selection: 5,
            max_discards: 4,
            max_hands: None,
            level_reward_factor: 10,
            cost_growth: 2,
            stakes: vec![10, 50, 100],
        }
    }
}

impl GameConfig {
    pub fn allows_stake(&self, amount: i64) -> bool {
        amount > 0 && amount <= self.starting_chips && self.stakes.contains(&amount)
    }
}
