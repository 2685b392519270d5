use serde::{Deserialize, Serialize};

pub use jokerline_core::{
    ActivationType, GameConfig, JokerDef, JokerRarity, ScoredCondition, Stage, TransitionRule,
    TransitionRules,
};

pub const CONFIG_FILE: &str = "config.json";
pub const STAGES_FILE: &str = "stages.json";
pub const TRANSITIONS_FILE: &str = "transitions.json";
pub const JOKERS_FILE: &str = "jokers.json";

pub const HIGH_SCORE_SCHEMA_VERSION: u32 = 1;

/// On-disk form of the recorded peak chip balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub version: u32,
    #[serde(rename = "highestChips")]
    pub highest_chips: i64,
}
