use jokerline_core::{
    score_hand, ActivationType, Card, HandKind, JokerBonus, JokerCatalog, JokerDef, JokerRarity,
    Rank, Suit,
};

fn make_cards(specs: &[(Suit, Rank)]) -> Vec<Card> {
    specs
        .iter()
        .enumerate()
        .map(|(idx, (suit, rank))| Card::new(idx as u32 + 1, *suit, *rank))
        .collect()
}

fn joker(id: &str) -> JokerDef {
    JokerCatalog::builtin()
        .get(id)
        .cloned()
        .expect("builtin joker")
}

fn diamonds(count: usize) -> Vec<Card> {
    let ranks = [Rank::Two, Rank::Four, Rank::Six, Rank::Eight, Rank::Ten];
    let mut specs: Vec<(Suit, Rank)> = ranks[..count]
        .iter()
        .map(|rank| (Suit::Diamonds, *rank))
        .collect();
    if count < 5 {
        specs.push((Suit::Clubs, Rank::King));
    }
    make_cards(&specs)
}

#[test]
fn two_pair_scores_seventy_eight() {
    let cards = make_cards(&[
        (Suit::Hearts, Rank::Two),
        (Suit::Spades, Rank::Two),
        (Suit::Diamonds, Rank::Three),
        (Suit::Clubs, Rank::Three),
        (Suit::Hearts, Rank::Nine),
    ]);
    let eval = score_hand(&cards, &[]).expect("evaluation");
    assert_eq!(eval.hand, HandKind::TwoPair);
    assert_eq!(eval.base_score, 20);
    assert_eq!(eval.multiplier, 2);
    assert_eq!(eval.cards_value, 19);
    assert_eq!(eval.total_score, 78);
    assert!(eval.bonuses.is_empty());
}

#[test]
fn straight_flush_scores_base_plus_cards_times_eight() {
    let cards = make_cards(&[
        (Suit::Spades, Rank::Nine),
        (Suit::Spades, Rank::Ten),
        (Suit::Spades, Rank::Jack),
        (Suit::Spades, Rank::Queen),
        (Suit::Spades, Rank::King),
    ]);
    let eval = score_hand(&cards, &[]).expect("evaluation");
    assert_eq!(eval.hand, HandKind::StraightFlush);
    assert_eq!(eval.cards_value, 9 + 10 + 10 + 10 + 10);
    assert_eq!(eval.total_score, (100 + eval.cards_value) * 8);
}

#[test]
fn aces_count_eleven() {
    let cards = make_cards(&[(Suit::Hearts, Rank::Ace), (Suit::Clubs, Rank::Ace)]);
    let eval = score_hand(&cards, &[]).expect("evaluation");
    assert_eq!(eval.hand, HandKind::Pair);
    assert_eq!(eval.total_score, (10 + 22) * 2);
}

#[test]
fn empty_selection_is_not_scored() {
    assert_eq!(score_hand(&[], &[joker("standard_joker")]), None);
}

#[test]
fn independent_joker_always_adds_mult() {
    let cards = make_cards(&[(Suit::Hearts, Rank::Five)]);
    let eval = score_hand(&cards, &[joker("standard_joker")]).expect("evaluation");
    assert_eq!(eval.multiplier, 2);
    assert_eq!(eval.total_score, (5 + 5) * 2);
    assert_eq!(eval.bonuses.len(), 1);
    assert_eq!(eval.bonuses[0].source, "standard_joker");
    assert_eq!(eval.bonuses[0].bonus, JokerBonus::Mult(1));
}

#[test]
fn suit_joker_needs_five_matching_cards() {
    let greedy = [joker("greedy_joker")];
    let five = score_hand(&diamonds(5), &greedy).expect("evaluation");
    assert_eq!(five.hand, HandKind::Flush);
    assert_eq!(five.multiplier, 4 + 3);

    let four = score_hand(&diamonds(4), &greedy).expect("evaluation");
    assert_eq!(four.multiplier, four.hand.base().1);
    assert!(four.bonuses.is_empty());
}

#[test]
fn suit_joker_ignores_other_suits() {
    let eval = score_hand(&diamonds(5), &[joker("lusty_joker")]).expect("evaluation");
    assert_eq!(eval.multiplier, 4);
}

#[test]
fn scary_face_adds_thirty_chips_per_face_card() {
    let cards = make_cards(&[
        (Suit::Hearts, Rank::Jack),
        (Suit::Spades, Rank::Queen),
        (Suit::Clubs, Rank::Two),
    ]);
    let eval = score_hand(&cards, &[joker("scary_face")]).expect("evaluation");
    assert_eq!(eval.hand, HandKind::HighCard);
    assert_eq!(eval.cards_value, 60 + 10 + 10 + 2);
    assert_eq!(eval.multiplier, 1);
    assert_eq!(eval.total_score, 5 + 82);
    assert_eq!(eval.bonuses[0].bonus, JokerBonus::Chips(60));
}

#[test]
fn scary_face_idle_without_faces() {
    let cards = make_cards(&[(Suit::Hearts, Rank::Two)]);
    let eval = score_hand(&cards, &[joker("scary_face")]).expect("evaluation");
    assert_eq!(eval.cards_value, 2);
    assert!(eval.bonuses.is_empty());
}

#[test]
fn lucky_joker_needs_two_sevens() {
    let lucky = [joker("lucky_joker")];
    let pair = make_cards(&[(Suit::Hearts, Rank::Seven), (Suit::Clubs, Rank::Seven)]);
    assert_eq!(score_hand(&pair, &lucky).expect("evaluation").multiplier, 2 + 4);

    let single = make_cards(&[(Suit::Hearts, Rank::Seven), (Suit::Clubs, Rank::Eight)]);
    assert_eq!(score_hand(&single, &lucky).expect("evaluation").multiplier, 1);
}

#[test]
fn jokers_stack() {
    let jokers = [
        joker("standard_joker"),
        joker("standard_joker"),
        joker("greedy_joker"),
        joker("scary_face"),
    ];
    let eval = score_hand(&diamonds(5), &jokers).expect("evaluation");
    assert_eq!(eval.multiplier, 4 + 1 + 1 + 3);
    // 2 + 4 + 6 + 8 + 10, no faces
    assert_eq!(eval.cards_value, 30);
    assert_eq!(eval.total_score, (35 + 30) * 9);
}

#[test]
fn on_scored_joker_without_condition_is_idle() {
    let custom = JokerDef {
        id: "blank".to_string(),
        name: "Blank".to_string(),
        effect: String::new(),
        mult: 5,
        base_cost: 1,
        suit: None,
        rarity: JokerRarity::Common,
        activation: ActivationType::OnScored,
        condition: None,
    };
    let cards = make_cards(&[(Suit::Hearts, Rank::Two)]);
    assert_eq!(score_hand(&cards, &[custom]).expect("evaluation").multiplier, 1);
}

#[test]
fn suit_joker_without_condition_needs_five_of_its_suit() {
    let custom = JokerDef {
        id: "diamond_only".to_string(),
        name: "Diamond Only".to_string(),
        effect: String::new(),
        mult: 3,
        base_cost: 1,
        suit: Some(Suit::Diamonds),
        rarity: JokerRarity::Common,
        activation: ActivationType::OnScored,
        condition: None,
    };
    let eval = score_hand(&diamonds(5), &[custom.clone()]).expect("evaluation");
    assert_eq!(eval.multiplier, 4 + 3);
    assert_eq!(eval.bonuses[0].bonus, JokerBonus::Mult(3));

    let eval = score_hand(&diamonds(4), &[custom]).expect("evaluation");
    assert_eq!(eval.multiplier, 1);
    assert!(eval.bonuses.is_empty());
}

#[test]
fn fibonacci_fires_on_five_fibonacci_values() {
    let cards = make_cards(&[
        (Suit::Hearts, Rank::Eight),
        (Suit::Spades, Rank::Two),
        (Suit::Clubs, Rank::Five),
        (Suit::Hearts, Rank::Two),
        (Suit::Diamonds, Rank::Three),
    ]);
    let eval = score_hand(&cards, &[joker("fibonacci")]).expect("evaluation");
    assert_eq!(eval.hand, HandKind::Pair);
    assert_eq!(eval.multiplier, 2 + 8);
    assert_eq!(eval.bonuses[0].bonus, JokerBonus::Mult(8));
}

#[test]
fn fibonacci_run_is_broken_by_other_values() {
    let cards = make_cards(&[
        (Suit::Hearts, Rank::Two),
        (Suit::Spades, Rank::Three),
        (Suit::Clubs, Rank::Four),
        (Suit::Hearts, Rank::Five),
        (Suit::Diamonds, Rank::Eight),
    ]);
    let eval = score_hand(&cards, &[joker("fibonacci")]).expect("evaluation");
    assert_eq!(eval.hand, HandKind::HighCard);
    assert_eq!(eval.multiplier, 1);
    assert!(eval.bonuses.is_empty());
}

#[test]
fn joker_prices_scale_with_cost_multiplier() {
    let catalog = JokerCatalog::builtin();
    assert_eq!(catalog.price("greedy_joker", 1), Some(40));
    assert_eq!(catalog.price("greedy_joker", 4), Some(160));
    assert_eq!(catalog.price("missing", 1), None);
}
