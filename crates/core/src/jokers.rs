use crate::{Card, Rank, Suit, MIN_PATTERN_CARDS};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum JokerRarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

/// When a joker's bonus is considered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActivationType {
    /// Always adds its flat bonus to the multiplier.
    Independent,
    /// Applies only while scoring, when its condition holds.
    OnScored,
}

/// What an `OnScored` joker checks for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoredCondition {
    /// At least `count` selected cards of the joker's suit add its mult.
    SuitCount { count: usize },
    /// Every face card in the selection adds `chips` to the card value.
    FaceChips { chips: i64 },
    /// At least `count` selected cards of `rank` add its mult.
    RankCount { rank: Rank, count: usize },
    /// A run of `count` Fibonacci card values in the sorted selection adds
    /// its mult.
    Fibonacci { count: usize },
}

/// Card values that count toward a Fibonacci run.
const FIBONACCI_VALUES: [i64; 7] = [1, 2, 3, 5, 8, 13, 21];

fn fibonacci_run(selection: &[Card]) -> usize {
    let mut values: Vec<i64> = selection.iter().map(Card::value).collect();
    values.sort_unstable();
    let mut best = 0;
    let mut current = 0;
    for value in values {
        if FIBONACCI_VALUES.contains(&value) {
            current += 1;
            best = best.max(current);
        } else {
            current = 0;
        }
    }
    best
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JokerDef {
    pub id: String,
    pub name: String,
    pub effect: String,
    pub mult: i64,
    pub base_cost: i64,
    #[serde(default)]
    pub suit: Option<Suit>,
    pub rarity: JokerRarity,
    pub activation: ActivationType,
    #[serde(default)]
    pub condition: Option<ScoredCondition>,
}

/// Contribution of a single joker to one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JokerBonus {
    Mult(i64),
    Chips(i64),
}

impl JokerDef {
    /// Condition checked while scoring. A suit joker without an explicit
    /// condition needs five cards of its suit.
    pub fn scored_condition(&self) -> Option<ScoredCondition> {
        self.condition.or_else(|| {
            self.suit.map(|_| ScoredCondition::SuitCount {
                count: MIN_PATTERN_CARDS,
            })
        })
    }

    /// Bonus this joker grants for `selection`, or `None` when it stays idle.
    pub fn bonus_for(&self, selection: &[Card]) -> Option<JokerBonus> {
        match self.activation {
            ActivationType::Independent => Some(JokerBonus::Mult(self.mult)),
            ActivationType::OnScored => match self.scored_condition()? {
                ScoredCondition::SuitCount { count } => {
                    let suit = self.suit?;
                    let matching = selection.iter().filter(|card| card.suit == suit).count();
                    (matching >= count).then_some(JokerBonus::Mult(self.mult))
                }
                ScoredCondition::FaceChips { chips } => {
                    let faces = selection.iter().filter(|card| card.is_face()).count() as i64;
                    (faces > 0).then_some(JokerBonus::Chips(faces * chips))
                }
                ScoredCondition::RankCount { rank, count } => {
                    let matching = selection.iter().filter(|card| card.rank == rank).count();
                    (matching >= count).then_some(JokerBonus::Mult(self.mult))
                }
                ScoredCondition::Fibonacci { count } => {
                    (fibonacci_run(selection) >= count).then_some(JokerBonus::Mult(self.mult))
                }
            },
        }
    }
}

/// Every joker the shop can sell.
#[derive(Debug, Clone, PartialEq)]
pub struct JokerCatalog {
    pub jokers: Vec<JokerDef>,
}

impl JokerCatalog {
    pub fn new(jokers: Vec<JokerDef>) -> Self {
        Self { jokers }
    }

    pub fn builtin() -> Self {
        Self::new(vec![
            JokerDef {
                id: "standard_joker".to_string(),
                name: "Standard Joker".to_string(),
                effect: "Basic joker that adds +1 multiplier".to_string(),
                mult: 1,
                base_cost: 25,
                suit: None,
                rarity: JokerRarity::Common,
                activation: ActivationType::Independent,
                condition: None,
            },
            JokerDef {
                id: "scary_face".to_string(),
                name: "Scary Face".to_string(),
                effect: "Played face cards (J, Q, K) give +30 Chips when scored".to_string(),
                mult: 0,
                base_cost: 35,
                suit: None,
                rarity: JokerRarity::Common,
                activation: ActivationType::OnScored,
                condition: Some(ScoredCondition::FaceChips { chips: 30 }),
            },
            suit_joker("greedy_joker", "Greedy Joker", Suit::Diamonds),
            suit_joker("lusty_joker", "Lusty Joker", Suit::Hearts),
            suit_joker("wrathful_joker", "Wrathful Joker", Suit::Spades),
            suit_joker("gluttonous_joker", "Gluttonous Joker", Suit::Clubs),
            JokerDef {
                id: "lucky_joker".to_string(),
                name: "Lucky Joker".to_string(),
                effect: "Gives +4 Mult if the hand contains at least two 7s".to_string(),
                mult: 4,
                base_cost: 45,
                suit: None,
                rarity: JokerRarity::Uncommon,
                activation: ActivationType::OnScored,
                condition: Some(ScoredCondition::RankCount {
                    rank: Rank::Seven,
                    count: 2,
                }),
            },
            JokerDef {
                id: "fibonacci".to_string(),
                name: "Fibonacci".to_string(),
                effect: "Gives +8 Mult when the sorted card values hold 5 Fibonacci numbers in a row"
                    .to_string(),
                mult: 8,
                base_cost: 50,
                suit: None,
                rarity: JokerRarity::Rare,
                activation: ActivationType::OnScored,
                condition: Some(ScoredCondition::Fibonacci { count: 5 }),
            },
        ])
    }

    pub fn get(&self, id: &str) -> Option<&JokerDef> {
        self.jokers.iter().find(|joker| joker.id == id)
    }

    /// Current shop price of `id` under the run's cost multiplier.
    pub fn price(&self, id: &str, cost_multiplier: i64) -> Option<i64> {
        self.get(id)
            .map(|joker| joker.base_cost.saturating_mul(cost_multiplier))
    }
}

impl Default for JokerCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn suit_joker(id: &str, name: &str, suit: Suit) -> JokerDef {
    let singular = suit.name().trim_end_matches('s');
    JokerDef {
        id: id.to_string(),
        name: name.to_string(),
        effect: format!("When scoring a hand with 5 {singular} cards, gives +3 Mult"),
        mult: 3,
        base_cost: 40,
        suit: Some(suit),
        rarity: JokerRarity::Common,
        activation: ActivationType::OnScored,
        condition: Some(ScoredCondition::SuitCount { count: 5 }),
    }
}
