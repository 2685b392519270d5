use crate::HandKind;
use serde::{Deserialize, Serialize};

/// Why a run stopped short of the current target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExhaustCause {
    OutOfCards,
    OutOfHands,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    GameStarted {
        bite: i64,
        chips: i64,
        stage: String,
    },
    HandScored {
        hand: HandKind,
        total: i64,
        score: i64,
        target: i64,
    },
    CardsDiscarded {
        count: usize,
        discards_left: u32,
    },
    DeckDepleted {
        missing: usize,
    },
    StageAdvanced {
        from: String,
        to: String,
        round: u32,
    },
    LevelAdvanced {
        level: u32,
        reward: i64,
        cost_multiplier: i64,
    },
    JokerBought {
        id: String,
        cost: i64,
        chips: i64,
    },
    JokerRemoved {
        id: String,
        count: usize,
    },
    GameCompleted {
        chips: i64,
    },
    Exhausted {
        stage: String,
        score: i64,
        target: i64,
        cause: ExhaustCause,
    },
    HighScoreRaised {
        peak: i64,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
