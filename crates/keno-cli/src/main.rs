//! Keno terminal player
//!
//! Usage:
//!   keno paytable [--spots N]              - Show prize tiers and odds
//!   keno play --spots N --drawings D ...   - Play one or more games

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use keno_core::{
    GameDrawings, GameMode, KenoConfig, KenoEngine, PrizeTable, RoundOutcome, RoundStage,
    StageEvent, TimingProfile,
};

#[derive(Parser)]
#[command(name = "keno", about = "Play Keno in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show prize tiers and odds
    Paytable {
        /// Only this spot count (1, 4, 8 or 10)
        #[arg(short, long)]
        spots: Option<u8>,
    },
    /// Play games
    Play {
        /// Spot count (1, 4, 8 or 10)
        #[arg(short, long)]
        spots: u8,

        /// Rounds per game (1-4)
        #[arg(short, long, default_value_t = 1)]
        drawings: u8,

        /// Picks, comma separated
        #[arg(short, long, value_delimiter = ',', conflicts_with = "quick_pick")]
        numbers: Vec<u32>,

        /// Let the engine pick
        #[arg(short, long)]
        quick_pick: bool,

        /// Seed every draw with the picks
        #[arg(long)]
        cheat: bool,

        /// RNG seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,

        /// Number of games to play
        #[arg(short, long, default_value_t = 1)]
        games: u32,

        /// JSON or YAML engine config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print every revealed number
        #[arg(short, long)]
        reveal: bool,

        /// Pace reveals in real time (implies --reveal)
        #[arg(long)]
        live: bool,

        /// Use turbo timing
        #[arg(long)]
        turbo: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Paytable { spots } => show_paytable(spots),
        Commands::Play {
            spots,
            drawings,
            numbers,
            quick_pick,
            cheat,
            seed,
            games,
            config,
            reveal,
            live,
            turbo,
        } => {
            let mut engine = build_engine(config, seed)?;
            if turbo {
                engine.set_timing(TimingProfile::Turbo);
            }
            let options = PlayOptions {
                numbers,
                quick_pick,
                cheat,
                games,
                reveal: reveal || live,
                live,
            };
            play(&mut engine, spots, drawings, &options)
        }
    }
}

struct PlayOptions {
    numbers: Vec<u32>,
    quick_pick: bool,
    cheat: bool,
    games: u32,
    reveal: bool,
    live: bool,
}

fn build_engine(config: Option<PathBuf>, seed: Option<u64>) -> Result<KenoEngine> {
    let mut config = match config {
        Some(path) => KenoConfig::from_path(&path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => KenoConfig::default(),
    };
    if seed.is_some() {
        config.seed = seed;
    }
    log::debug!("Using config '{}'", config.name);
    Ok(KenoEngine::with_config(config))
}

fn show_paytable(spots: Option<u8>) -> Result<()> {
    let table = PrizeTable::standard();
    let modes: Vec<GameMode> = match spots {
        Some(s) => vec![parse_mode(s)?],
        None => GameMode::ALL.to_vec(),
    };

    for mode in modes {
        print_tiers(&table, mode);
        println!();
    }
    Ok(())
}

fn print_tiers(table: &PrizeTable, mode: GameMode) {
    let spots = mode.max_spots();
    println!("{} (odds 1 in {:.2})", mode, table.odds_for(spots));
    for tier in table.tiers(spots).iter().rev() {
        println!("  {:>2} hits  ${}", tier.hits, tier.prize);
    }
}

fn parse_mode(spots: u8) -> Result<GameMode> {
    GameMode::from_spots(spots)
        .with_context(|| format!("Unsupported spot count {} (use 1, 4, 8 or 10)", spots))
}

fn play(engine: &mut KenoEngine, spots: u8, drawings: u8, options: &PlayOptions) -> Result<()> {
    let mode = parse_mode(spots)?;
    let drawings = GameDrawings::from_count(drawings)
        .with_context(|| format!("Unsupported drawings {} (use 1-4)", drawings))?;

    engine.set_mode(mode);
    engine.set_drawings(drawings);

    if options.quick_pick || options.numbers.is_empty() {
        engine.random_select_for_user();
    } else {
        for &n in &options.numbers {
            if !engine.select_number(n) {
                bail!("Cannot pick {} (off the board, repeated, or more than {} picks)", n, spots);
            }
        }
    }

    println!(
        "{} / {}  picks: {:?}",
        mode,
        drawings,
        engine.selection().to_vec()
    );
    print_tiers(engine.prize_table(), mode);
    println!();

    for game in 1..=options.games {
        if options.cheat {
            engine.set_cheat_mode(true);
        }
        if options.games > 1 {
            println!("── Game {} ──", game);
        }

        loop {
            let (outcome, stages) = match engine.start_round_with_stages() {
                Ok(result) => result,
                Err(rejection) => bail!("{}", rejection),
            };
            if options.reveal {
                print_reveals(&stages, options.live);
            }
            print_outcome(&outcome);
            if outcome.is_game_complete() {
                break;
            }
        }
        println!();
    }

    println!("{}", engine.format_history());
    let stats = engine.stats();
    println!(
        "Rounds: {}  Prize-table hits: {} ({:.1}%)  Best round: ${}",
        stats.rounds_played,
        stats.jackpot_rounds,
        stats.hit_rate(),
        stats.best_round_prize
    );
    Ok(())
}

fn print_reveals(stages: &[StageEvent], live: bool) {
    let mut last_ms = 0.0;
    for event in stages {
        if live && event.timestamp_ms > last_ms {
            thread::sleep(Duration::from_secs_f64((event.timestamp_ms - last_ms) / 1000.0));
            last_ms = event.timestamp_ms;
        }
        match &event.stage {
            RoundStage::RoundStart { cheat_mode: true, .. } => {
                println!("  Cheat mode active! Jackpot incoming...");
            }
            RoundStage::NumberRevealed {
                number,
                hit,
                matches,
            } => {
                let mark = if *hit { "*" } else { " " };
                println!(
                    "  [{:>6.0} ms] {:>2}{}  ({} hit)",
                    event.timestamp_ms, number, mark, matches
                );
            }
            RoundStage::TierReached { hits, prize } => {
                println!("             tier {} hits → ${}", hits, prize);
            }
            _ => {}
        }
    }
}

fn print_outcome(outcome: &RoundOutcome) {
    let headline = if outcome.is_jackpot { "Jackpot!" } else { "Round over." };
    println!(
        "Round {}/{}: {} Matched {} number(s) {:?}, prize ${}",
        outcome.round,
        outcome.total_rounds,
        headline,
        outcome.match_count,
        outcome.matched_numbers,
        outcome.prize
    );
    if let Some(record) = outcome.game_record {
        println!(
            "All rounds complete! Total matches: {}, total prize: ${}",
            record.total_matches, record.total_prize
        );
    }
}
