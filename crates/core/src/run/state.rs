use super::*;
use crate::*;

impl Run {
    pub fn new(config: GameConfig, stages: StageData, catalog: JokerCatalog, seed: u64) -> Self {
        Self::with_rng(config, stages, catalog, RngState::from_seed(seed))
    }

    pub fn with_rng(
        config: GameConfig,
        stages: StageData,
        catalog: JokerCatalog,
        rng: RngState,
    ) -> Self {
        let state = RoundState::new(config.starting_chips);
        Self {
            config,
            stages,
            catalog,
            rng,
            deck: Deck::default(),
            hand: Vec::new(),
            selection: Vec::new(),
            jokers: Vec::new(),
            state,
            high_score: HighScore::default(),
        }
    }

    pub fn with_high_score(mut self, high_score: HighScore) -> Self {
        self.high_score = high_score;
        self
    }

    /// Pays the stake out of a fresh starting balance and deals the first
    /// stage. Also used to restart after the run is over.
    pub fn deal_new_game(
        &mut self,
        stake: i64,
        events: &mut EventBus,
    ) -> Result<&RoundState, RunError> {
        if !self.config.allows_stake(stake) {
            return Err(RunError::InvalidStake(stake));
        }
        let first = self.stages.first().cloned().ok_or(RunError::EmptyCatalog)?;

        let mut state = RoundState::new(self.config.starting_chips);
        state.chips -= stake;
        state.bite = stake;
        state.enter_stage(&first);
        state.ante = stake;
        state.round = 1;
        state.phase = Phase::Playing;
        self.state = state;

        self.jokers.clear();
        self.deal_fresh_stage();
        log::info!(
            "new game: bite {}, {} chips left, stage {}",
            stake,
            self.state.chips,
            first.display_name
        );
        events.push(Event::GameStarted {
            bite: stake,
            chips: self.state.chips,
            stage: first.id,
        });
        self.observe_chips(events);
        Ok(&self.state)
    }

    pub fn current_stage(&self) -> Option<&Stage> {
        self.stages.stage(&self.state.stage_id)
    }

    pub fn discards_left(&self) -> u32 {
        self.config
            .max_discards
            .saturating_sub(self.state.discards_used)
    }

    pub fn hands_left(&self) -> Option<u32> {
        self.config
            .max_hands
            .map(|max| max.saturating_sub(self.state.hands_played))
    }

    pub fn joker_price(&self, id: &str) -> Option<i64> {
        self.catalog.price(id, self.state.cost_multiplier)
    }

    pub(super) fn ensure_playing(&self) -> Result<(), RunError> {
        if self.state.phase != Phase::Playing {
            return Err(RunError::InvalidPhase(self.state.phase));
        }
        Ok(())
    }

    /// New shuffled 52-card deck, a full hand, empty discard pile.
    pub(super) fn deal_fresh_stage(&mut self) {
        self.deck = Deck::shuffled(&mut self.rng);
        self.hand.clear();
        self.selection.clear();
        fill_hand(&mut self.hand, &mut self.deck, self.config.hand_size);
    }

    pub(super) fn observe_chips(&mut self, events: &mut EventBus) {
        if let Some(peak) = self.high_score.observe(self.state.chips) {
            events.push(Event::HighScoreRaised { peak });
        }
    }
}
