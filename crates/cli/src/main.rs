use anyhow::Context;
use log::LevelFilter;
use piccolo_core::{
    CardAction, CardPool, CardView, Event, EventBus, GameType, Phase, RngState, Session,
    SessionError, Standing, Swipe, TargetPayload,
};
use piccolo_data::{
    load_card_pool_report, load_game_config, summarize_pool, CARDS_FILE, CONFIG_FILE,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Debug, Clone)]
struct CliOptions {
    cards: PathBuf,
    config: PathBuf,
    seed: Option<u64>,
    json: bool,
    verbose: bool,
}

/// Wall clock behind the countdown of the card on screen.
#[derive(Debug, Clone, Copy)]
struct TimerClock {
    started: Instant,
    applied: u64,
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);
    init_logging(options.verbose);

    let config = load_game_config(&options.config)
        .with_context(|| format!("load settings from {}", options.config.display()))?;
    let mut session = match options.seed {
        Some(seed) => Session::with_seed(config, seed),
        None => Session::new(config, RngState::from_entropy()),
    };
    log::debug!("session seed {}", session.rng.seed());
    let mut pool = load_pool(&options.cards);
    run_repl(&options, &mut session, &mut pool)
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let assets = Path::new("assets");
    let mut cards = std::env::var_os("PICCOLO_CARDS")
        .map(PathBuf::from)
        .unwrap_or_else(|| assets.join(CARDS_FILE));
    let mut config = assets.join(CONFIG_FILE);
    let mut seed = None;
    let mut json = false;
    let mut verbose = false;
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--json" => json = true,
            "--verbose" | "-v" => verbose = true,
            "--cards" => {
                if let Some(value) = args.get(idx + 1) {
                    cards = PathBuf::from(value);
                    idx += 1;
                }
            }
            "--config" => {
                if let Some(value) = args.get(idx + 1) {
                    config = PathBuf::from(value);
                    idx += 1;
                }
            }
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    seed = value.parse::<u64>().ok();
                    idx += 1;
                }
            }
            _ => {}
        }
        idx += 1;
    }
    CliOptions {
        cards,
        config,
        seed,
        json,
        verbose,
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    if let Err(err) = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("logger init failed: {err}");
    }
}

/// A failed load leaves the game without data; `start` then refuses to run.
fn load_pool(path: &Path) -> Option<CardPool> {
    match load_card_pool_report(path) {
        Ok(report) => {
            for warning in &report.warnings {
                eprintln!("data warning: {warning}");
            }
            Some(report.pool)
        }
        Err(err) => {
            log::error!("card data unavailable: {err:#}");
            eprintln!("could not load cards: {err:#}");
            eprintln!("fix the file and type `reload`");
            None
        }
    }
}

fn run_repl(
    options: &CliOptions,
    session: &mut Session,
    pool: &mut Option<CardPool>,
) -> anyhow::Result<()> {
    let mut events = EventBus::default();
    let mut clock: Option<TimerClock> = None;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    print_help();
    loop {
        print!("{}", prompt_text(session));
        io::stdout().flush().context("flush stdout")?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("read command")?;
        sync_countdown(session, &mut clock, &mut events);
        drain_events(&mut events, &mut clock);

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let before = session.phase();
        let (cmd, rest) = match input.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (input, ""),
        };
        let result = match cmd {
            "help" | "h" | "?" => {
                print_help();
                Ok(())
            }
            "quit" | "exit" | "q" => break,
            "add" | "a" => session.add_player(rest, &mut events).map(|added| {
                if !added {
                    println!("name is empty or already taken");
                }
            }),
            "remove" | "rm" => session.remove_player(rest, &mut events).map(|removed| {
                if !removed {
                    println!("no player named {rest}");
                }
            }),
            "players" | "ls" => {
                print_players(session);
                Ok(())
            }
            "type" => match GameType::from_name(rest) {
                Some(game_type) => session.set_game_type(game_type),
                None => {
                    println!("unknown game type '{rest}' (casual, caliente)");
                    Ok(())
                }
            },
            "level" => match rest.parse::<u8>() {
                Ok(level) => session.set_difficulty(level),
                Err(_) => {
                    println!("level must be 1, 2 or 3");
                    Ok(())
                }
            },
            "cards" => match rest.parse::<usize>() {
                Ok(count) => session.set_card_count(count),
                Err(_) => {
                    println!("card count must be a positive number");
                    Ok(())
                }
            },
            "data" => {
                print_pool_summary(pool.as_ref());
                Ok(())
            }
            "reload" => {
                *pool = load_pool(&options.cards);
                Ok(())
            }
            "start" | "s" => {
                let requested = session.card_count();
                session.start(pool.as_ref(), requested, &mut events)
            }
            "accept" | "y" | "right" => session.swipe(Swipe::Accept, &mut events).map(|_| ()),
            "refuse" | "n" | "left" => session.swipe(Swipe::Refuse, &mut events).map(|_| ()),
            "card" | "c" => {
                print_current(options, session);
                Ok(())
            }
            "tick" => {
                let count = rest.parse::<u32>().unwrap_or(1);
                tick_manually(session, &mut clock, &mut events, count);
                Ok(())
            }
            "scores" => {
                print_standings("== Scores ==", &session.standings(), false);
                Ok(())
            }
            "end" => {
                print_standings("== Final Scores ==", &session.standings(), true);
                Ok(())
            }
            "new" | "reset" => {
                session.reset(&mut events);
                Ok(())
            }
            other => {
                println!("unknown command '{other}', type help");
                Ok(())
            }
        };
        if let Err(err) = result {
            print_session_error(&err);
        }
        let shown = drain_events(&mut events, &mut clock);
        if shown {
            print_current(options, session);
        }
        if before != Phase::Finished && session.phase() == Phase::Finished {
            print_standings("== Final Scores ==", &session.standings(), true);
            println!("type `new` for a new game");
        }
    }
    Ok(())
}

fn prompt_text(session: &Session) -> String {
    match (session.phase(), session.current_view()) {
        (Phase::Playing, Some(view)) => format!("[{}] > ", view.counter_text()),
        (Phase::Finished, _) => "[done] > ".to_string(),
        _ => format!("[setup {} players] > ", session.players().len()),
    }
}

/// Feeds whole elapsed seconds to the session countdown.
fn sync_countdown(session: &mut Session, clock: &mut Option<TimerClock>, events: &mut EventBus) {
    let Some(state) = clock.as_mut() else {
        return;
    };
    let elapsed = state.started.elapsed().as_secs();
    let mut expired = false;
    while state.applied < elapsed {
        state.applied += 1;
        if session.tick(events).is_none() {
            expired = true;
            break;
        }
    }
    if expired {
        *clock = None;
    }
}

/// Manual ticks take over the countdown from the wall clock.
fn tick_manually(
    session: &mut Session,
    clock: &mut Option<TimerClock>,
    events: &mut EventBus,
    count: u32,
) {
    *clock = None;
    for _ in 0..count {
        if session.tick(events).is_none() {
            break;
        }
    }
}

/// Prints notable events. Returns true when a new card went on screen.
fn drain_events(events: &mut EventBus, clock: &mut Option<TimerClock>) -> bool {
    let mut shown = false;
    for event in events.drain() {
        match event {
            Event::PlayerAdded { name } => println!("+ {name}"),
            Event::PlayerRemoved { name } => println!("- {name}"),
            Event::SessionStarted {
                key,
                requested,
                cards,
            } => println!("game on: {cards} cards from {key} (asked for {requested})"),
            Event::CardShown { .. } => {
                *clock = None;
                shown = true;
            }
            Event::TimerStarted { .. } => {
                *clock = Some(TimerClock {
                    started: Instant::now(),
                    applied: 0,
                });
            }
            Event::TimerTicked { .. } => {}
            Event::TimerExpired => {
                *clock = None;
                println!("time is up!");
            }
            Event::PenaltyApplied {
                player,
                sips,
                total,
            } => println!("{player} drinks {sips} (total {total})"),
            Event::SessionFinished => {
                *clock = None;
            }
            Event::SessionReset => {
                *clock = None;
                println!("new game, add players to begin");
            }
        }
    }
    shown
}

fn print_help() {
    println!("== Commands ==");
    println!("add <name>        seat a player");
    println!("remove <name>     remove a player");
    println!("players           list players");
    println!("type <casual|caliente>, level <1-3>, cards <n>");
    println!("data              card counts per difficulty");
    println!("reload            retry loading the card file");
    println!("start             draw a deck and show the first card");
    println!("accept | refuse   resolve the card on screen (y / n)");
    println!("card              show the current card again");
    println!("tick [n]          advance the countdown by n seconds");
    println!("scores | end      standings | final standings");
    println!("new               clear everything and start over");
    println!("quit");
}

fn print_players(session: &Session) {
    println!(
        "== Players ({:?}, level {}, {} cards) ==",
        session.game_type(),
        session.difficulty(),
        session.card_count()
    );
    if session.players().is_empty() {
        println!("(none)");
    }
    for player in session.players() {
        println!("{player}");
    }
}

fn print_pool_summary(pool: Option<&CardPool>) {
    let Some(pool) = pool else {
        println!("no card data loaded");
        return;
    };
    println!("== Card Data ==");
    for entry in summarize_pool(pool) {
        println!(
            "{:<12} {:>3} cards | single {} | timed {} | duel {} | group {}",
            entry.key,
            entry.total(),
            entry.single,
            entry.time_based,
            entry.duel,
            entry.group
        );
    }
}

fn print_current(options: &CliOptions, session: &Session) {
    let Some(view) = session.current_view() else {
        println!("no card on screen");
        return;
    };
    if options.json {
        match serde_json::to_string(view) {
            Ok(line) => println!("{line}"),
            Err(err) => eprintln!("json error: {err}"),
        }
        return;
    }
    print_card(view, session.countdown().map(|countdown| countdown.remaining()));
}

fn print_card(view: &CardView, remaining: Option<u32>) {
    println!("---- {} ({}) ----", view.counter_text(), view.category);
    match &view.action {
        CardAction::Timer { secs } => {
            println!("timer: {}s", remaining.unwrap_or(*secs));
        }
        CardAction::Target(target) => print_target(target),
    }
    println!("{}", view.text);
    println!("{} sips if refused", view.penalty_sips);
}

fn print_target(target: &TargetPayload) {
    match target {
        TargetPayload::None => {}
        TargetPayload::Player(name) => println!("for: {name}"),
        TargetPayload::Duel { first, second } => match second {
            Some(second) => println!("duel: {first} vs {second}"),
            None => println!("duel: {first} vs ?"),
        },
        TargetPayload::Teams { team1, team2 } => {
            println!("red:  {}", team1.join(", "));
            println!("vs");
            println!("blue: {}", team2.join(", "));
        }
    }
}

fn print_standings(title: &str, standings: &[Standing], mark_leader: bool) {
    println!("{title}");
    for (idx, entry) in standings.iter().enumerate() {
        let badge = if mark_leader && idx == 0 { "* " } else { "" };
        println!("{badge}{:<16} {:>4} sips", entry.player, entry.sips);
    }
}

fn print_session_error(err: &SessionError) {
    if err.is_validation() {
        println!("cannot do that: {err}");
    } else {
        println!("error: {err}");
    }
}
