use crate::{
    Card, Deck, GameConfig, HandEvaluation, HighScore, JokerCatalog, JokerDef, Phase, RngState,
    RoundState, StageData,
};
use thiserror::Error;

mod hand;
mod shop;
mod stage;
mod state;

/// Actions the player may retry after fixing the input. None of them change
/// the run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RunError {
    #[error("invalid phase: {0:?}")]
    InvalidPhase(Phase),
    #[error("stake {0} is not allowed")]
    InvalidStake(i64),
    #[error("stage catalog is empty")]
    EmptyCatalog,
    #[error("card {0} is not in hand")]
    UnknownCard(u32),
    #[error("you can only select up to {0} cards at a time")]
    SelectionFull(usize),
    #[error("no cards selected")]
    EmptySelection,
    #[error("cannot use {selected} cards at once (max {max})")]
    TooManyCards { selected: usize, max: usize },
    #[error("no discards left this stage")]
    NoDiscardsLeft,
    #[error("no hands left this stage")]
    NoHandsLeft,
    #[error("not enough chips: need {cost}, have {chips}")]
    NotEnoughChips { cost: i64, chips: i64 },
    #[error("a joker was already bought this stage")]
    AlreadyPurchased,
    #[error("unknown joker {0}")]
    UnknownJoker(String),
}

/// Stage boundary crossed by a play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advance {
    pub from: String,
    pub to: String,
    pub leveled_up: bool,
    pub reward: i64,
    pub run_score_reset: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub evaluation: HandEvaluation,
    pub score_delta: i64,
    pub advance: Option<Advance>,
    /// Cards the deck could not supply when refilling the hand.
    pub shortfall: usize,
    pub completed: bool,
    pub exhausted: bool,
}

impl PlayOutcome {
    pub fn new_stage(&self) -> Option<&str> {
        self.advance.as_ref().map(|advance| advance.to.as_str())
    }

    pub fn leveled_up(&self) -> bool {
        self.advance.as_ref().is_some_and(|advance| advance.leveled_up)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscardOutcome {
    pub discarded: usize,
    pub discards_left: u32,
    pub shortfall: usize,
    pub exhausted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purchase {
    pub id: String,
    pub cost: i64,
    pub chips: i64,
}

/// A single player's run: cards, active jokers and round counters. Every
/// action runs to completion before the next one is accepted.
#[derive(Debug)]
pub struct Run {
    pub config: GameConfig,
    pub stages: StageData,
    pub catalog: JokerCatalog,
    pub rng: RngState,
    pub deck: Deck,
    pub hand: Vec<Card>,
    /// Ids of selected hand cards, in selection order.
    pub selection: Vec<u32>,
    pub jokers: Vec<JokerDef>,
    pub state: RoundState,
    pub high_score: HighScore,
}
