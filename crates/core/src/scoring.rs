use crate::{evaluate_hand, Card, HandKind, JokerBonus, JokerDef};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBonus {
    pub source: String,
    pub bonus: JokerBonus,
}

/// Full breakdown of a scored selection. Every figure that goes into
/// `total_score` is kept so a presentation layer can explain it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandEvaluation {
    pub hand: HandKind,
    pub base_score: i64,
    pub multiplier: i64,
    pub cards_value: i64,
    pub total_score: i64,
    #[serde(default)]
    pub bonuses: Vec<ScoreBonus>,
}

impl HandEvaluation {
    pub fn hand_name(&self) -> &'static str {
        self.hand.display_name()
    }
}

/// Classifies `selection` and scores it against the active jokers.
/// Pure: the same inputs always give the same evaluation.
pub fn score_hand(selection: &[Card], jokers: &[JokerDef]) -> Option<HandEvaluation> {
    let hand = evaluate_hand(selection)?;
    let (base_score, base_mult) = hand.base();
    let mut multiplier = base_mult;
    let mut cards_value = 0i64;
    let mut bonuses = Vec::new();

    for joker in jokers {
        let Some(bonus) = joker.bonus_for(selection) else {
            continue;
        };
        match bonus {
            JokerBonus::Mult(value) => multiplier += value,
            JokerBonus::Chips(value) => cards_value += value,
        }
        bonuses.push(ScoreBonus {
            source: joker.id.clone(),
            bonus,
        });
    }

    cards_value += selection.iter().map(Card::value).sum::<i64>();
    let total_score = (base_score + cards_value) * multiplier;

    Some(HandEvaluation {
        hand,
        base_score,
        multiplier,
        cards_value,
        total_score,
        bonuses,
    })
}
