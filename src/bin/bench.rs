use clap::Parser;
use isosearch::search::deadline::{Deadline, Timer, Unlimited};
use isosearch::search::eval::Heuristic;
use isosearch::{Board, IsolationBoard, Method, Move, Searcher};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "isosearch-bench", version, about = "Benchmark a single root search on an Isolation position")]
struct Args {
    /// Opening moves as "r,c" separated by spaces, e.g. "3,3 2,4"
    #[arg(long, default_value = "3,3 2,4")]
    moves: String,

    #[arg(long, default_value_t = 7)]
    width: i32,

    #[arg(long, default_value_t = 7)]
    height: i32,

    /// Depth limit in plies
    #[arg(long, default_value_t = 5)]
    depth: u32,

    #[arg(long, value_enum, default_value_t = Method::AlphaBeta)]
    method: Method,

    #[arg(long, value_enum, default_value_t = Heuristic::Custom)]
    heuristic: Heuristic,

    /// Time budget in milliseconds (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    movetime: u64,

    /// Abort threshold in milliseconds
    #[arg(long, default_value_t = 10.0)]
    threshold: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let moves = args
        .moves
        .split_whitespace()
        .map(|s| s.parse::<Move>().map_err(anyhow::Error::msg))
        .collect::<anyhow::Result<Vec<Move>>>()?;
    let board = IsolationBoard::from_moves(args.width, args.height, &moves)?;

    let deadline: Box<dyn Deadline> = if args.movetime > 0 { Box::new(Timer::from_millis(args.movetime)) } else { Box::new(Unlimited) };
    let mut s = Searcher::new(&args.heuristic, deadline.as_ref(), args.threshold, board.to_move()).with_depth_limit(args.depth);

    let t0 = Instant::now();
    let res = s.search_root(&board, args.method);
    let dt = t0.elapsed();
    let nps = if dt.as_secs_f64() > 0.0 { s.nodes() as f64 / dt.as_secs_f64() } else { 0.0 };
    match res {
        Ok(r) => println!("bestmove={} score={} nodes={} elapsed={:.3}s nps={:.1}", r.mv, r.score, s.nodes(), dt.as_secs_f64(), nps),
        Err(e) => println!("{} after nodes={} elapsed={:.3}s nps={:.1}", e, s.nodes(), dt.as_secs_f64(), nps),
    }
    Ok(())
}
