use crate::schema::{HighScoreRecord, HIGH_SCORE_SCHEMA_VERSION};
use jokerline_core::{HighScoreStore, StoreError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// `$JOKERLINE_SAVE`, else `~/.jokerline_high.json`.
pub fn default_high_score_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("JOKERLINE_SAVE") {
        return Some(PathBuf::from(path));
    }
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".jokerline_high.json"))
}

/// High score kept in a small versioned JSON file.
#[derive(Debug, Clone)]
pub struct JsonHighScoreFile {
    path: PathBuf,
}

impl JsonHighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for JsonHighScoreFile {
    fn load(&mut self) -> Result<Option<i64>, StoreError> {
        let body = match fs::read_to_string(&self.path) {
            Ok(body) => body,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StoreError::Io(err.to_string())),
        };
        let record: HighScoreRecord =
            serde_json::from_str(&body).map_err(|err| StoreError::Format(err.to_string()))?;
        if record.version != HIGH_SCORE_SCHEMA_VERSION {
            return Err(StoreError::Format(format!(
                "unsupported high score version {} (expected {})",
                record.version, HIGH_SCORE_SCHEMA_VERSION
            )));
        }
        Ok(Some(record.highest_chips))
    }

    fn save(&mut self, peak: i64) -> Result<(), StoreError> {
        let record = HighScoreRecord {
            version: HIGH_SCORE_SCHEMA_VERSION,
            highest_chips: peak,
        };
        let body =
            serde_json::to_string_pretty(&record).map_err(|err| StoreError::Format(err.to_string()))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| StoreError::Io(err.to_string()))?;
        }
        fs::write(&self.path, body).map_err(|err| StoreError::Io(err.to_string()))?;
        log::debug!("high score {} written to {}", peak, self.path.display());
        Ok(())
    }
}
