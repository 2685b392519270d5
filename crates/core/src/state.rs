use crate::Stage;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a stake before the first stage.
    StakeSelection,
    Playing,
    /// Every stage in the catalog has been cleared.
    Complete,
    /// Out of cards or hands before reaching the target.
    Exhausted,
}

/// Counters and balances of a run. Cards live on `Run`, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub phase: Phase,
    /// Score toward the current stage's target.
    pub score: i64,
    /// Score across stages, reset according to the transition rules.
    pub run_score: i64,
    pub round: u32,
    pub level: u32,
    pub stage_id: String,
    pub target: i64,
    pub ante: i64,
    pub chips: i64,
    pub bite: i64,
    pub hands_played: u32,
    pub discards_used: u32,
    pub cost_multiplier: i64,
    pub purchased_this_stage: bool,
}

impl RoundState {
    pub fn new(starting_chips: i64) -> Self {
        Self {
            phase: Phase::StakeSelection,
            score: 0,
            run_score: 0,
            round: 0,
            level: 0,
            stage_id: String::new(),
            target: 0,
            ante: 0,
            chips: starting_chips,
            bite: 0,
            hands_played: 0,
            discards_used: 0,
            cost_multiplier: 1,
            purchased_this_stage: false,
        }
    }

    pub fn enter_stage(&mut self, stage: &Stage) {
        self.stage_id = stage.id.clone();
        self.target = stage.target_score;
        self.level = stage.level;
        self.ante = stage.ante;
        self.score = 0;
        self.hands_played = 0;
        self.discards_used = 0;
        self.purchased_this_stage = false;
    }

    pub fn target_reached(&self) -> bool {
        self.target > 0 && self.score >= self.target
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Complete | Phase::Exhausted)
    }
}
