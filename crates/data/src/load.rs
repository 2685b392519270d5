use crate::schema::{CONFIG_FILE, JOKERS_FILE, STAGES_FILE, TRANSITIONS_FILE};
use anyhow::{bail, Context};
use jokerline_core::{
    ActivationType, GameConfig, JokerCatalog, JokerDef, Stage, StageData, StageSource, StageSourceError,
    TransitionRules,
};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads `config.json` from `dir`. A missing file means the defaults.
pub fn load_game_config(dir: &Path) -> anyhow::Result<GameConfig> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        log::debug!("{} not found, using default config", path.display());
        return Ok(GameConfig::default());
    }
    let config: GameConfig = load_json(&path)?;
    if config.hand_size == 0 || config.max_selection == 0 {
        bail!("{}: hand_size and max_selection must be positive", path.display());
    }
    if config.stakes.is_empty() {
        bail!("{}: at least one stake is required", path.display());
    }
    Ok(config)
}

pub fn load_stage_catalog(dir: &Path) -> anyhow::Result<Vec<Stage>> {
    load_json(dir.join(STAGES_FILE))
}

pub fn load_transition_rules(dir: &Path) -> anyhow::Result<TransitionRules> {
    load_json(dir.join(TRANSITIONS_FILE))
}

/// Reads `jokers.json` from `dir`, or the builtin catalog when it is absent.
pub fn load_joker_catalog(dir: &Path) -> anyhow::Result<JokerCatalog> {
    let path = dir.join(JOKERS_FILE);
    if !path.exists() {
        log::debug!("{} not found, using builtin jokers", path.display());
        return Ok(JokerCatalog::builtin());
    }
    let jokers: Vec<JokerDef> = load_json(&path)?;
    let mut seen = HashSet::new();
    for joker in &jokers {
        if !seen.insert(joker.id.as_str()) {
            bail!("{}: duplicate joker id {}", path.display(), joker.id);
        }
        if joker.base_cost < 0 {
            bail!("{}: joker {} has a negative cost", path.display(), joker.id);
        }
        if joker.activation == ActivationType::OnScored && joker.scored_condition().is_none() {
            log::warn!(
                "{}: joker {} scores on a condition but names none, it will never fire",
                path.display(),
                joker.id
            );
        }
    }
    Ok(JokerCatalog::new(jokers))
}

/// Stage catalog and transition rules read from a directory of JSON files.
#[derive(Debug, Clone)]
pub struct JsonStageSource {
    dir: PathBuf,
}

impl JsonStageSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn load(&self) -> StageData {
        StageData::load_or_default(self)
    }
}

impl StageSource for JsonStageSource {
    fn stage_catalog(&self) -> Result<Vec<Stage>, StageSourceError> {
        load_stage_catalog(&self.dir).map_err(source_error)
    }

    fn transition_rules(&self) -> Result<TransitionRules, StageSourceError> {
        load_transition_rules(&self.dir).map_err(source_error)
    }
}

fn source_error(err: anyhow::Error) -> StageSourceError {
    if err.downcast_ref::<serde_json::Error>().is_some() {
        StageSourceError::Invalid(format!("{err:#}"))
    } else {
        StageSourceError::Unavailable(format!("{err:#}"))
    }
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
