use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use isosearch::tournament::{default_opponents, default_test_agents, run, total_games, TournamentParams};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "isosearch-tournament", about = "Play the test agents against the reference opponents")]
struct Args {
    /// Rounds per pairing; every round is two games, one per starting side
    #[arg(long, default_value_t = 5)]
    rounds: usize,
    /// Time per move in milliseconds
    #[arg(long, default_value_t = 150)]
    time_limit_ms: u64,
    #[arg(long, default_value_t = 7)]
    width: i32,
    #[arg(long, default_value_t = 7)]
    height: i32,
    /// Random plies played before the agents take over
    #[arg(long, default_value_t = 2)]
    opening_moves: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Worker threads (0 = rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,
    /// Optional: write the report as JSON to this path
    #[arg(long)]
    json_out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = TournamentParams {
        rounds: a.rounds,
        time_limit: Duration::from_millis(a.time_limit_ms),
        width: a.width,
        height: a.height,
        opening_moves: a.opening_moves,
        seed: a.seed,
    };
    let agents = default_test_agents();
    let opponents = default_opponents();

    let pb = ProgressBar::new(total_games(&agents, &opponents, &params));
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games [{elapsed_precise}]")?);
    let report = if a.threads > 0 {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(a.threads).build()?;
        pool.install(|| run(&agents, &opponents, &params, Some(&pb)))
    } else {
        run(&agents, &opponents, &params, Some(&pb))
    };
    pb.finish_and_clear();

    println!("{:<14}{}", "Opponent", agents.iter().map(|t| format!("{:>16}", t.name)).collect::<String>());
    for (oi, opp) in opponents.iter().enumerate() {
        let mut row = format!("{:<14}", opp.name);
        for ti in 0..agents.len() {
            let m = &report.matchups[ti * opponents.len() + oi];
            row.push_str(&format!("{:>16}", format!("{} - {}", m.wins, m.losses)));
        }
        println!("{}", row);
    }
    for s in &report.summary {
        println!("{}: {:.2}% win rate over {} games", s.agent, s.win_rate * 100.0, s.games);
    }

    if let Some(path) = a.json_out {
        let text = serde_json::to_string_pretty(&report)?;
        std::fs::write(&path, text).with_context(|| format!("write report: {}", path.display()))?;
        eprintln!("Wrote report to {}", path.display());
    }
    Ok(())
}
