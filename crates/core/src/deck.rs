use crate::{Card, Rank, RngState, Suit};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DECK_SIZE: usize = 52;

/// Builds the 52 rank x suit combinations in a fixed order with ids 1..=52.
pub fn build_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    let mut id = 1u32;
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(id, suit, rank));
            id += 1;
        }
    }
    cards
}

/// Result of a deal. `shortfall` counts the cards that were requested but
/// not available.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draw {
    pub cards: Vec<Card>,
    pub shortfall: usize,
}

impl Draw {
    pub fn is_short(&self) -> bool {
        self.shortfall > 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckComposition {
    pub remaining: usize,
    pub by_suit: BTreeMap<Suit, usize>,
    pub by_rank: BTreeMap<Rank, usize>,
}

/// The draw pile and discard pile of the current stage. Cards are dealt from
/// the front and the draw pile is never reshuffled mid-stage.
#[derive(Debug, Default, Clone)]
pub struct Deck {
    pub draw: Vec<Card>,
    pub discard: Vec<Card>,
}

impl Deck {
    pub fn standard52() -> Self {
        Self {
            draw: build_deck(),
            discard: Vec::new(),
        }
    }

    pub fn shuffled(rng: &mut RngState) -> Self {
        let mut deck = Self::standard52();
        deck.shuffle(rng);
        deck
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.draw);
    }

    pub fn len(&self) -> usize {
        self.draw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw.is_empty()
    }

    pub fn deal(&mut self, count: usize) -> Draw {
        let take = count.min(self.draw.len());
        let cards: Vec<Card> = self.draw.drain(..take).collect();
        Draw {
            shortfall: count - cards.len(),
            cards,
        }
    }

    pub fn discard(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.discard.extend(cards);
    }

    pub fn composition(&self) -> DeckComposition {
        let mut composition = DeckComposition {
            remaining: self.draw.len(),
            ..DeckComposition::default()
        };
        for card in &self.draw {
            *composition.by_suit.entry(card.suit).or_insert(0) += 1;
            *composition.by_rank.entry(card.rank).or_insert(0) += 1;
        }
        composition
    }
}

/// Forces `hand` to exactly `size` cards: tops it up from the deck when short
/// and trims the tail when over. Returns the number of cards still missing.
pub fn fill_hand(hand: &mut Vec<Card>, deck: &mut Deck, size: usize) -> usize {
    if hand.len() > size {
        log::warn!("hand holds {} cards, trimming to {}", hand.len(), size);
        let extra = hand.split_off(size);
        deck.discard(extra);
        return 0;
    }
    let needed = size - hand.len();
    if needed == 0 {
        return 0;
    }
    let draw = deck.deal(needed);
    hand.extend(draw.cards);
    if draw.shortfall > 0 {
        log::warn!(
            "deck depleted: hand short by {} card(s), {} left in deck",
            draw.shortfall,
            deck.len()
        );
    }
    draw.shortfall
}
