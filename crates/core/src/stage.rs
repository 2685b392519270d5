use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One scoring threshold. Stages are played strictly in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    pub id: String,
    pub target_score: i64,
    pub display_name: String,
    pub level: u32,
    pub ante: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionRule {
    pub from_stage: String,
    pub to_stage: String,
    pub reset_score: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionRules {
    #[serde(default = "default_reset_on_level")]
    pub reset_score_on_level_advance: bool,
    #[serde(default)]
    pub transitions: Vec<TransitionRule>,
}

fn default_reset_on_level() -> bool {
    true
}

impl TransitionRules {
    pub fn builtin() -> Self {
        let rule = |from: &str, to: &str, reset_score| TransitionRule {
            from_stage: from.to_string(),
            to_stage: to.to_string(),
            reset_score,
        };
        Self {
            reset_score_on_level_advance: true,
            transitions: vec![
                rule("THE_HOOK", "SMALL_BLIND_L2", true),
                rule("THE_HOOK_L2", "SMALL_BLIND_L3", true),
                rule("SMALL_BLIND", "BIG_BLIND", false),
                rule("BIG_BLIND", "THE_HOOK", false),
            ],
        }
    }

    pub fn rule_for(&self, from: &str, to: &str) -> Option<&TransitionRule> {
        self.transitions
            .iter()
            .find(|rule| rule.from_stage == from && rule.to_stage == to)
    }

    /// Whether the run-wide score resets when moving `from` -> `to`. Without
    /// an explicit rule it resets exactly when the level increases.
    pub fn resets_score(&self, from: &Stage, to: &Stage) -> bool {
        match self.rule_for(&from.id, &to.id) {
            Some(rule) => rule.reset_score,
            None => self.reset_score_on_level_advance && to.level > from.level,
        }
    }
}

impl Default for TransitionRules {
    fn default() -> Self {
        Self::builtin()
    }
}

#[derive(Debug, Error)]
pub enum StageSourceError {
    #[error("stage data unavailable: {0}")]
    Unavailable(String),
    #[error("invalid stage data: {0}")]
    Invalid(String),
}

/// External provider of the stage catalog and transition rules.
pub trait StageSource {
    fn stage_catalog(&self) -> Result<Vec<Stage>, StageSourceError>;
    fn transition_rules(&self) -> Result<TransitionRules, StageSourceError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageData {
    pub stages: Vec<Stage>,
    pub rules: TransitionRules,
}

impl StageData {
    pub fn new(stages: Vec<Stage>, rules: TransitionRules) -> Result<Self, StageSourceError> {
        validate_catalog(&stages)?;
        Ok(Self { stages, rules })
    }

    /// Nine stages over three levels, targets 300..4000.
    pub fn builtin() -> Self {
        let stage = |id: &str, target_score, display_name: &str, level, ante| Stage {
            id: id.to_string(),
            target_score,
            display_name: display_name.to_string(),
            level,
            ante,
        };
        Self {
            stages: vec![
                stage("SMALL_BLIND", 300, "Small Blind", 1, 5),
                stage("BIG_BLIND", 450, "Big Blind", 1, 10),
                stage("THE_HOOK", 600, "The Hook", 1, 15),
                stage("SMALL_BLIND_L2", 800, "Small Blind L2", 2, 20),
                stage("BIG_BLIND_L2", 1200, "Big Blind L2", 2, 25),
                stage("THE_HOOK_L2", 1600, "The Hook L2", 2, 30),
                stage("SMALL_BLIND_L3", 2000, "Small Blind L3", 3, 40),
                stage("BIG_BLIND_L3", 3000, "Big Blind L3", 3, 50),
                stage("THE_HOOK_L3", 4000, "The Hook L3", 3, 60),
            ],
            rules: TransitionRules::builtin(),
        }
    }

    /// Fetches both data sets from `source`. Any failure falls back to the
    /// builtin catalog and rules as a pair.
    pub fn load_or_default(source: &dyn StageSource) -> Self {
        let loaded = source
            .stage_catalog()
            .and_then(|stages| Ok((stages, source.transition_rules()?)))
            .and_then(|(stages, rules)| Self::new(stages, rules));
        match loaded {
            Ok(data) => {
                log::info!("loaded {} stages from stage source", data.stages.len());
                data
            }
            Err(err) => {
                log::warn!("{err}; using builtin stages");
                Self::builtin()
            }
        }
    }

    pub fn first(&self) -> Option<&Stage> {
        self.stages.first()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.stages.iter().position(|stage| stage.id == id)
    }

    pub fn stage(&self, id: &str) -> Option<&Stage> {
        self.stages.iter().find(|stage| stage.id == id)
    }

    pub fn next_after(&self, id: &str) -> Option<&Stage> {
        let idx = self.position(id)?;
        self.stages.get(idx + 1)
    }

    pub fn first_of_level(&self, level: u32) -> Option<&Stage> {
        self.stages.iter().find(|stage| stage.level == level)
    }

    pub fn max_level(&self) -> u32 {
        self.stages.iter().map(|stage| stage.level).max().unwrap_or(0)
    }
}

impl Default for StageData {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_catalog(stages: &[Stage]) -> Result<(), StageSourceError> {
    if stages.is_empty() {
        return Err(StageSourceError::Invalid("empty stage catalog".to_string()));
    }
    for (idx, stage) in stages.iter().enumerate() {
        if stage.target_score <= 0 {
            return Err(StageSourceError::Invalid(format!(
                "stage {} has non-positive target {}",
                stage.id, stage.target_score
            )));
        }
        if stages[..idx].iter().any(|prev| prev.id == stage.id) {
            return Err(StageSourceError::Invalid(format!(
                "duplicate stage id {}",
                stage.id
            )));
        }
        if let Some(prev) = idx.checked_sub(1).map(|p| &stages[p]) {
            if stage.level < prev.level || stage.level > prev.level + 1 {
                return Err(StageSourceError::Invalid(format!(
                    "stage {} jumps from level {} to {}",
                    stage.id, prev.level, stage.level
                )));
            }
        }
    }
    Ok(())
}
