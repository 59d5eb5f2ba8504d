use anyhow::Result;
use clap::{Parser, ValueEnum};
use isosearch::game::{play_game_with, Outcome};
use isosearch::{Agent, IsolationBoard, RandomAgent, SearchAgent, SearchConfig};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Kind {
    Search,
    Random,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Play one game of Isolation between two agents", long_about = None)]
struct Args {
    /// Agent for player 1
    #[arg(long, value_enum, default_value_t = Kind::Search)]
    p1: Kind,

    /// Agent for player 2
    #[arg(long, value_enum, default_value_t = Kind::Random)]
    p2: Kind,

    /// JSON search config for player 1 (defaults when omitted)
    #[arg(long)]
    config1: Option<PathBuf>,

    /// JSON search config for player 2 (defaults when omitted)
    #[arg(long)]
    config2: Option<PathBuf>,

    /// Board width
    #[arg(long, default_value_t = 7)]
    width: i32,

    /// Board height
    #[arg(long, default_value_t = 7)]
    height: i32,

    /// Time per move in milliseconds
    #[arg(long, default_value_t = 150)]
    time_limit_ms: u64,

    /// Seed for random agents and provisional moves
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Print the board after every move
    #[arg(long)]
    verbose: bool,
}

fn build_agent(kind: Kind, name: &str, config: Option<&PathBuf>, seed: u64) -> Result<Box<dyn Agent<IsolationBoard>>> {
    Ok(match kind {
        Kind::Random => Box::new(RandomAgent::new(name, seed)),
        Kind::Search => {
            let cfg = match config {
                Some(path) => SearchConfig::load(path)?,
                None => SearchConfig { seed, ..SearchConfig::default() },
            };
            Box::new(SearchAgent::from_config(name, cfg))
        }
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    if args.width <= 0 || args.height <= 0 {
        anyhow::bail!("board dimensions must be positive, got {}x{}", args.width, args.height);
    }

    let mut one = build_agent(args.p1, "player1", args.config1.as_ref(), args.seed)?;
    let mut two = build_agent(args.p2, "player2", args.config2.as_ref(), args.seed.wrapping_add(1))?;
    let board = IsolationBoard::new(args.width, args.height);

    let start = Instant::now();
    let verbose = args.verbose;
    let record = play_game_with(
        board,
        one.as_mut(),
        two.as_mut(),
        Duration::from_millis(args.time_limit_ms),
        |b, player, mv| {
            if verbose {
                println!("\nPlayer {} plays {}", player, mv);
                println!("{}", b);
            }
        },
    );

    let how = match record.outcome {
        Outcome::NoMoves => "opponent has no moves",
        Outcome::Timeout => "opponent ran out of time",
        Outcome::IllegalMove => "opponent played an illegal move",
    };
    println!("Player {} wins ({}) after {} plies in {:.2}s", record.winner, how, record.moves.len(), start.elapsed().as_secs_f32());
    let history: Vec<String> = record.moves.iter().map(|m| m.to_string()).collect();
    println!("Moves: {}", history.join(" "));
    Ok(())
}
