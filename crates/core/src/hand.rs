use crate::{Card, Rank};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Cards needed before flush and straight checks apply.
pub const MIN_PATTERN_CARDS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HandKind {
    HighCard,
    Pair,
    TwoPair,
    Trips,
    Straight,
    Flush,
    FullHouse,
    Quads,
    StraightFlush,
}

impl HandKind {
    pub const ALL: [HandKind; 9] = [
        HandKind::HighCard,
        HandKind::Pair,
        HandKind::TwoPair,
        HandKind::Trips,
        HandKind::Straight,
        HandKind::Flush,
        HandKind::FullHouse,
        HandKind::Quads,
        HandKind::StraightFlush,
    ];

    pub fn id(self) -> &'static str {
        match self {
            HandKind::HighCard => "high_card",
            HandKind::Pair => "pair",
            HandKind::TwoPair => "two_pair",
            HandKind::Trips => "trips",
            HandKind::Straight => "straight",
            HandKind::Flush => "flush",
            HandKind::FullHouse => "full_house",
            HandKind::Quads => "quads",
            HandKind::StraightFlush => "straight_flush",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            HandKind::HighCard => "High Card",
            HandKind::Pair => "Pair",
            HandKind::TwoPair => "Two Pair",
            HandKind::Trips => "Three of a Kind",
            HandKind::Straight => "Straight",
            HandKind::Flush => "Flush",
            HandKind::FullHouse => "Full House",
            HandKind::Quads => "Four of a Kind",
            HandKind::StraightFlush => "Straight Flush",
        }
    }

    /// Fixed `(base score, multiplier)` for the category.
    pub fn base(self) -> (i64, i64) {
        match self {
            HandKind::HighCard => (5, 1),
            HandKind::Pair => (10, 2),
            HandKind::TwoPair => (20, 2),
            HandKind::Trips => (30, 3),
            HandKind::Straight => (30, 4),
            HandKind::Flush => (35, 4),
            HandKind::FullHouse => (40, 4),
            HandKind::Quads => (60, 7),
            HandKind::StraightFlush => (100, 8),
        }
    }
}

impl fmt::Display for HandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Classifies a selection. Returns `None` for an empty selection.
pub fn evaluate_hand(cards: &[Card]) -> Option<HandKind> {
    if cards.is_empty() {
        return None;
    }

    let mut rank_counts: HashMap<Rank, usize> = HashMap::new();
    for card in cards {
        *rank_counts.entry(card.rank).or_insert(0) += 1;
    }
    let groups_of = |size: usize| rank_counts.values().filter(|&&c| c == size).count();
    let pairs = groups_of(2);
    let trips = groups_of(3);
    let quads = groups_of(4);

    let flush = is_flush(cards);
    let straight = is_straight(cards);

    let kind = if flush && straight {
        HandKind::StraightFlush
    } else if quads > 0 {
        HandKind::Quads
    } else if trips > 0 && pairs > 0 {
        HandKind::FullHouse
    } else if flush {
        HandKind::Flush
    } else if straight {
        HandKind::Straight
    } else if trips > 0 {
        HandKind::Trips
    } else if pairs >= 2 {
        HandKind::TwoPair
    } else if pairs == 1 {
        HandKind::Pair
    } else {
        HandKind::HighCard
    };
    Some(kind)
}

/// True when at least five cards share a suit.
fn is_flush(cards: &[Card]) -> bool {
    if cards.len() < MIN_PATTERN_CARDS {
        return false;
    }
    let mut suit_counts = HashMap::new();
    for card in cards {
        *suit_counts.entry(card.suit).or_insert(0usize) += 1;
    }
    suit_counts.values().any(|&count| count >= MIN_PATTERN_CARDS)
}

/// Only the five lowest distinct ranks are tested; a run sitting above them
/// is not found.
fn is_straight(cards: &[Card]) -> bool {
    if cards.len() < MIN_PATTERN_CARDS {
        return false;
    }
    let mut values: Vec<u8> = cards.iter().map(|card| card.rank.order()).collect();
    values.sort_unstable();
    values.dedup();
    if values.len() < MIN_PATTERN_CARDS {
        return false;
    }
    values[..MIN_PATTERN_CARDS]
        .windows(2)
        .all(|w| w[1] == w[0] + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Suit;

    fn card(id: u32, suit: Suit, rank: Rank) -> Card {
        Card::new(id, suit, rank)
    }

    #[test]
    fn wheel_is_not_a_straight() {
        let cards = [
            card(1, Suit::Hearts, Rank::Ace),
            card(2, Suit::Clubs, Rank::Two),
            card(3, Suit::Spades, Rank::Three),
            card(4, Suit::Hearts, Rank::Four),
            card(5, Suit::Diamonds, Rank::Five),
        ];
        assert_eq!(evaluate_hand(&cards), Some(HandKind::HighCard));
    }

    #[test]
    fn straight_above_lowest_five_is_missed() {
        let cards = [
            card(1, Suit::Hearts, Rank::Two),
            card(2, Suit::Clubs, Rank::Six),
            card(3, Suit::Spades, Rank::Seven),
            card(4, Suit::Hearts, Rank::Eight),
            card(5, Suit::Diamonds, Rank::Nine),
            card(6, Suit::Diamonds, Rank::Ten),
        ];
        assert_eq!(evaluate_hand(&cards), Some(HandKind::HighCard));
    }
}
