use anyhow::Context;
use jokerline_core::{
    Card, Event, EventBus, ExhaustCause, HandEvaluation, HighScore, HighScoreStore, JokerBonus,
    MemoryHighScore, Phase, RngState, Run, RunError,
};
use jokerline_data::{
    default_high_score_path, load_game_config, load_joker_catalog, JsonHighScoreFile,
    JsonStageSource,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, Clone)]
struct CliOptions {
    assets: PathBuf,
    seed: Option<u64>,
    save: Option<PathBuf>,
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut assets = PathBuf::from("assets");
    let mut seed = None;
    let mut save = None;
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--assets" | "-a" => {
                if let Some(value) = args.get(idx + 1) {
                    assets = PathBuf::from(value);
                    idx += 1;
                }
            }
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    seed = value.parse::<u64>().ok();
                    idx += 1;
                }
            }
            "--save" => {
                if let Some(value) = args.get(idx + 1) {
                    save = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            other => eprintln!("ignoring unknown argument {other}"),
        }
        idx += 1;
    }
    CliOptions {
        assets,
        seed,
        save: save.or_else(default_high_score_path),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);

    let mut store: Box<dyn HighScoreStore> = match &options.save {
        Some(path) => Box::new(JsonHighScoreFile::new(path)),
        None => Box::new(MemoryHighScore::default()),
    };
    let mut run = build_run(&options, store.as_mut())?;
    println!("high score: {}", run.high_score.peak());
    print_help();
    repl(&mut run, store.as_mut())
}

fn build_run(options: &CliOptions, store: &mut dyn HighScoreStore) -> anyhow::Result<Run> {
    let config = load_game_config(&options.assets)
        .with_context(|| format!("load config from {}", options.assets.display()))?;
    let catalog = load_joker_catalog(&options.assets)
        .with_context(|| format!("load jokers from {}", options.assets.display()))?;
    let stages = JsonStageSource::new(&options.assets).load();
    let rng = match options.seed {
        Some(seed) => RngState::from_seed(seed),
        None => RngState::from_entropy(),
    };
    log::info!("seed {}", rng.seed());
    Ok(Run::with_rng(config, stages, catalog, rng).with_high_score(HighScore::load(store)))
}

fn repl(run: &mut Run, store: &mut dyn HighScoreStore) -> anyhow::Result<()> {
    let mut events = EventBus::default();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}> ", prompt_text(run));
        io::stdout().flush().context("flush stdout")?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("read stdin")?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");
        let args: Vec<&str> = parts.collect();
        let result = match cmd {
            "help" | "h" | "?" => {
                print_help();
                Ok(())
            }
            "quit" | "exit" | "q" => break,
            "new" | "deal" => new_game(run, &args, &mut events),
            "state" | "s" => {
                print_state(run);
                Ok(())
            }
            "dump" => {
                let body = serde_json::to_string_pretty(&run.state).context("encode state")?;
                println!("{body}");
                Ok(())
            }
            "hand" => {
                print_hand(run);
                Ok(())
            }
            "select" | "sel" => select(run, &args),
            "clear" => {
                run.clear_selection();
                Ok(())
            }
            "play" | "p" => run.play_selection(&mut events).map(|outcome| {
                print_evaluation(&outcome.evaluation);
                if outcome.shortfall > 0 {
                    println!("deck ran short by {} cards", outcome.shortfall);
                }
            }),
            "discard" | "d" => run.discard_selection(&mut events).map(|outcome| {
                println!(
                    "discarded {}, {} discards left",
                    outcome.discarded, outcome.discards_left
                );
            }),
            "shop" => {
                print_shop(run);
                Ok(())
            }
            "buy" => match args.first() {
                Some(id) => run.purchase_joker(id, &mut events).map(|_| ()),
                None => {
                    println!("usage: buy <joker id>");
                    Ok(())
                }
            },
            "remove" | "sell" => {
                match args.first() {
                    Some(id) => {
                        if run.remove_joker(id, &mut events) == 0 {
                            println!("no active joker {id}");
                        }
                    }
                    None => println!("usage: remove <joker id>"),
                }
                Ok(())
            }
            "jokers" | "inv" => {
                print_jokers(run);
                Ok(())
            }
            "deck" => {
                print_deck(run);
                Ok(())
            }
            "stages" | "levels" => {
                print_stages(run);
                Ok(())
            }
            _ => {
                println!("unknown command {cmd}, try help");
                Ok(())
            }
        };
        if let Err(err) = result {
            println!("error: {err}");
            if let Some(hint) = run_error_hint(run, &err) {
                println!("hint: {hint}");
            }
        }
        flush_events(run, &mut events, store);
    }
    Ok(())
}

fn new_game(run: &mut Run, args: &[&str], events: &mut EventBus) -> Result<(), RunError> {
    let Some(stake) = args.first().and_then(|value| value.parse::<i64>().ok()) else {
        println!("usage: new <stake>, stakes: {:?}", run.config.stakes);
        return Ok(());
    };
    run.deal_new_game(stake, events)?;
    print_hand(run);
    Ok(())
}

fn select(run: &mut Run, args: &[&str]) -> Result<(), RunError> {
    if args.is_empty() {
        println!("usage: select <idx> [idx...]");
        return Ok(());
    }
    let mut preview = None;
    for arg in args {
        let Ok(idx) = arg.parse::<usize>() else {
            println!("not an index: {arg}");
            continue;
        };
        let Some(card_id) = run.hand.get(idx).map(|card| card.id) else {
            println!("no card at index {idx}");
            continue;
        };
        preview = run.select_card(card_id)?;
    }
    match preview {
        Some(eval) => print_evaluation(&eval),
        None => println!("selection empty"),
    }
    Ok(())
}

fn flush_events(run: &Run, events: &mut EventBus, store: &mut dyn HighScoreStore) {
    let mut raised = false;
    for event in events.drain() {
        if matches!(event, Event::HighScoreRaised { .. }) {
            raised = true;
        }
        println!("* {}", format_event(&event));
    }
    if raised {
        run.high_score.persist(store);
    }
}

fn prompt_text(run: &Run) -> String {
    match run.state.phase {
        Phase::StakeSelection => "stake".to_string(),
        Phase::Playing => format!(
            "{} {}/{}",
            run.state.stage_id, run.state.score, run.state.target
        ),
        Phase::Complete => "complete".to_string(),
        Phase::Exhausted => "exhausted".to_string(),
    }
}

fn run_error_hint(run: &Run, err: &RunError) -> Option<String> {
    match err {
        RunError::InvalidPhase(Phase::StakeSelection) => {
            Some(format!("start with: new <stake>, stakes {:?}", run.config.stakes))
        }
        RunError::InvalidPhase(_) => Some("the run is over, deal again with: new <stake>".to_string()),
        RunError::InvalidStake(_) => Some(format!("stakes: {:?}", run.config.stakes)),
        RunError::EmptySelection => Some("select cards first: select <idx>".to_string()),
        RunError::NoDiscardsLeft => Some("play a hand instead".to_string()),
        RunError::UnknownJoker(_) => Some("see the list with: shop".to_string()),
        _ => None,
    }
}

fn print_help() {
    println!("commands:");
    println!("  new <stake>          pay a stake and deal the first stage");
    println!("  hand                 show hand with indices");
    println!("  select <idx...>      toggle cards in the selection");
    println!("  clear                clear the selection");
    println!("  play | discard       play or discard the selection");
    println!("  shop | buy <id>      list jokers, buy one (one per stage)");
    println!("  jokers | remove <id> active jokers, drop one");
    println!("  state | dump         round counters, or the same as json");
    println!("  deck | stages        remaining cards, stage catalog");
    println!("  quit");
}

fn print_state(run: &Run) {
    let state = &run.state;
    let stage_name = run
        .current_stage()
        .map(|stage| stage.display_name.as_str())
        .unwrap_or("-");
    println!("phase: {:?}", state.phase);
    println!(
        "stage: {} (level {}, round {})",
        stage_name, state.level, state.round
    );
    println!("score: {}/{}  run score: {}", state.score, state.target, state.run_score);
    println!(
        "chips: {}  bite: {}  ante: {}",
        state.chips, state.bite, state.ante
    );
    let hands = match run.hands_left() {
        Some(left) => left.to_string(),
        None => "unlimited".to_string(),
    };
    println!(
        "hands left: {}  discards left: {}  joker cost x{}",
        hands,
        run.discards_left(),
        state.cost_multiplier
    );
    println!("high score: {}", run.high_score.peak());
}

fn print_hand(run: &Run) {
    println!("== Hand == ({} cards)", run.hand.len());
    println!("{:>4}  {:<6} {:>6}", "idx", "card", "value");
    for (idx, card) in run.hand.iter().enumerate() {
        let marker = if run.selection.contains(&card.id) {
            "*"
        } else {
            " "
        };
        println!(
            "{:>4}{} {:<6} {:>6}",
            idx,
            marker,
            format_card(card),
            card.value()
        );
    }
}

fn print_evaluation(eval: &HandEvaluation) {
    println!(
        "{}: ({} + {}) x {} = {}",
        eval.hand_name(),
        eval.base_score,
        eval.cards_value,
        eval.multiplier,
        eval.total_score
    );
    for bonus in &eval.bonuses {
        match bonus.bonus {
            JokerBonus::Mult(value) => println!("  {} +{} mult", bonus.source, value),
            JokerBonus::Chips(value) => println!("  {} +{} chips", bonus.source, value),
        }
    }
}

fn print_shop(run: &Run) {
    let status = if run.state.purchased_this_stage {
        "already bought this stage"
    } else {
        "one purchase per stage"
    };
    println!("== Shop == ({status}, {} chips)", run.state.chips);
    for line in shop_lines(run) {
        println!("{line}");
    }
}

fn shop_lines(run: &Run) -> Vec<String> {
    run.catalog
        .jokers
        .iter()
        .filter_map(|joker| {
            let price = run.joker_price(&joker.id)?;
            Some(format!("  {:<18} {:>5}  {}", joker.id, price, joker.effect))
        })
        .collect()
}

fn print_jokers(run: &Run) {
    if run.jokers.is_empty() {
        println!("no active jokers");
        return;
    }
    for joker in &run.jokers {
        println!("  {:<18} {}", joker.id, joker.effect);
    }
}

fn print_deck(run: &Run) {
    let composition = run.deck.composition();
    println!("draw pile: {}", composition.remaining);
    println!("discard pile: {}", run.deck.discard.len());
    let suits: Vec<String> = composition
        .by_suit
        .iter()
        .map(|(suit, count)| format!("{}{}", suit.symbol(), count))
        .collect();
    println!("by suit: {}", suits.join(" "));
    let ranks: Vec<String> = composition
        .by_rank
        .iter()
        .map(|(rank, count)| format!("{}:{}", rank.label(), count))
        .collect();
    println!("by rank: {}", ranks.join(" "));
}

fn print_stages(run: &Run) {
    for stage in &run.stages.stages {
        let marker = if stage.id == run.state.stage_id {
            ">"
        } else {
            " "
        };
        println!(
            "{} L{} {:<16} target {:>5}  ante {}",
            marker, stage.level, stage.display_name, stage.target_score, stage.ante
        );
    }
}

fn format_card(card: &Card) -> String {
    card.to_string()
}

fn format_event(event: &Event) -> String {
    match event {
        Event::GameStarted { bite, chips, stage } => {
            format!("game started: bite {bite}, {chips} chips left, stage {stage}")
        }
        Event::HandScored {
            hand,
            total,
            score,
            target,
        } => format!("{hand} scored {total} ({score}/{target})"),
        Event::CardsDiscarded {
            count,
            discards_left,
        } => format!("discarded {count} cards, {discards_left} discards left"),
        Event::DeckDepleted { missing } => format!("deck depleted, {missing} cards short"),
        Event::StageAdvanced { from, to, round } => {
            format!("stage cleared: {from} -> {to} (round {round})")
        }
        Event::LevelAdvanced {
            level,
            reward,
            cost_multiplier,
        } => format!(
            "level {level} reached: +{reward} chips, joker prices x{cost_multiplier}, jokers cleared"
        ),
        Event::JokerBought { id, cost, chips } => {
            format!("bought {id} for {cost}, {chips} chips left")
        }
        Event::JokerRemoved { id, count } => format!("removed {count} x {id}"),
        Event::GameCompleted { chips } => format!("all stages cleared with {chips} chips"),
        Event::Exhausted {
            stage,
            score,
            target,
            cause,
        } => {
            let reason = match cause {
                ExhaustCause::OutOfCards => "out of cards",
                ExhaustCause::OutOfHands => "out of hands",
            };
            format!("{reason} at {stage} with {score}/{target}")
        }
        Event::HighScoreRaised { peak } => format!("new high score: {peak}"),
    }
}
