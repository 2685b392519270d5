use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("high score io: {0}")]
    Io(String),
    #[error("high score format: {0}")]
    Format(String),
}

/// Where the peak chip balance lives between sessions.
pub trait HighScoreStore {
    fn load(&mut self) -> Result<Option<i64>, StoreError>;
    fn save(&mut self, peak: i64) -> Result<(), StoreError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryHighScore {
    pub peak: Option<i64>,
    pub saves: usize,
}

impl HighScoreStore for MemoryHighScore {
    fn load(&mut self) -> Result<Option<i64>, StoreError> {
        Ok(self.peak)
    }

    fn save(&mut self, peak: i64) -> Result<(), StoreError> {
        self.peak = Some(peak);
        self.saves += 1;
        Ok(())
    }
}

/// Peak chip balance seen so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScore {
    peak: i64,
}

impl HighScore {
    pub fn new(peak: i64) -> Self {
        Self { peak }
    }

    /// Reads the recorded peak. A failing store counts as no record.
    pub fn load(store: &mut dyn HighScoreStore) -> Self {
        match store.load() {
            Ok(peak) => Self::new(peak.unwrap_or(0)),
            Err(err) => {
                log::warn!("{err}; starting without a recorded high score");
                Self::default()
            }
        }
    }

    pub fn peak(&self) -> i64 {
        self.peak
    }

    /// Records `chips` if it beats the peak and returns the new peak.
    pub fn observe(&mut self, chips: i64) -> Option<i64> {
        if chips > self.peak {
            self.peak = chips;
            Some(chips)
        } else {
            None
        }
    }

    /// Writes the peak, logging instead of failing.
    pub fn persist(&self, store: &mut dyn HighScoreStore) {
        if let Err(err) = store.save(self.peak) {
            log::warn!("{err}; high score {} not saved", self.peak);
        }
    }
}
