use crate::agent::{Agent, RandomAgent, SearchAgent};
use crate::board::{Board, IsolationBoard, Player};
use crate::config::{Method, SearchConfig};
use crate::game::{play_game, Outcome};
use crate::search::eval::Heuristic;
use indicatif::ProgressBar;
use log::info;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum AgentSpec {
    Random,
    Search(SearchConfig),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Contestant {
    pub name: String,
    pub spec: AgentSpec,
}

impl Contestant {
    pub fn new(name: impl Into<String>, spec: AgentSpec) -> Self {
        Self { name: name.into(), spec }
    }

    fn search(name: &str, method: Method, heuristic: Heuristic, depth: u32, iterative: bool) -> Self {
        let config = SearchConfig { search_depth: depth, method, iterative, heuristic, ..SearchConfig::default() };
        Self::new(name, AgentSpec::Search(config))
    }

    pub fn build(&self, seed: u64) -> Box<dyn Agent<IsolationBoard> + Send> {
        match self.spec {
            AgentSpec::Random => Box::new(RandomAgent::new(self.name.clone(), seed)),
            AgentSpec::Search(config) => {
                Box::new(SearchAgent::from_config(self.name.clone(), SearchConfig { seed, ..config }))
            }
        }
    }
}

/// Fixed-depth reference opponents of increasing strength.
pub fn default_opponents() -> Vec<Contestant> {
    vec![
        Contestant::new("Random", AgentSpec::Random),
        Contestant::search("MM_Null", Method::Minimax, Heuristic::Null, 3, false),
        Contestant::search("MM_Open", Method::Minimax, Heuristic::Open, 3, false),
        Contestant::search("MM_Improved", Method::Minimax, Heuristic::Improved, 3, false),
        Contestant::search("AB_Null", Method::AlphaBeta, Heuristic::Null, 5, false),
        Contestant::search("AB_Open", Method::AlphaBeta, Heuristic::Open, 5, false),
        Contestant::search("AB_Improved", Method::AlphaBeta, Heuristic::Improved, 5, false),
    ]
}

/// Iterative-deepening agents under test: the improved-score baseline and the
/// custom heuristic.
pub fn default_test_agents() -> Vec<Contestant> {
    vec![
        Contestant::search("ID_Improved", Method::AlphaBeta, Heuristic::Improved, 20, true),
        Contestant::search("Student", Method::AlphaBeta, Heuristic::Custom, 20, true),
    ]
}

#[derive(Clone, Debug)]
pub struct TournamentParams {
    /// Each round plays two games per pairing, one with each side moving first.
    pub rounds: usize,
    pub time_limit: Duration,
    pub width: i32,
    pub height: i32,
    /// Random placements applied before the agents take over.
    pub opening_moves: usize,
    pub seed: u64,
}

impl Default for TournamentParams {
    fn default() -> Self {
        Self {
            rounds: 5,
            time_limit: Duration::from_millis(150),
            width: 7,
            height: 7,
            opening_moves: 2,
            seed: 42,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MatchupResult {
    pub agent: String,
    pub opponent: String,
    pub wins: u32,
    pub losses: u32,
    /// Losses by time forfeit.
    pub timeouts: u32,
    /// Losses by illegal move.
    pub illegal: u32,
}

impl MatchupResult {
    pub fn games(&self) -> u32 { self.wins + self.losses }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AgentSummary {
    pub agent: String,
    pub wins: u32,
    pub games: u32,
    pub win_rate: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TournamentReport {
    pub matchups: Vec<MatchupResult>,
    pub summary: Vec<AgentSummary>,
}

#[derive(Clone, Copy, Debug)]
struct Job {
    agent: usize,
    opponent: usize,
    round: usize,
    agent_first: bool,
}

/// Random opening shared by both games of a round.
pub fn random_opening(width: i32, height: i32, plies: usize, seed: u64) -> IsolationBoard {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = IsolationBoard::new(width, height);
    for _ in 0..plies {
        let legal = board.legal_moves(board.to_move());
        match legal.choose(&mut rng) {
            Some(&mv) => board = board.forecast(mv),
            None => break,
        }
    }
    board
}

pub fn total_games(agents: &[Contestant], opponents: &[Contestant], params: &TournamentParams) -> u64 {
    (agents.len() * opponents.len() * params.rounds * 2) as u64
}

/// Plays every agent against every opponent. Games run in parallel; each
/// game is single threaded.
pub fn run(
    agents: &[Contestant],
    opponents: &[Contestant],
    params: &TournamentParams,
    progress: Option<&ProgressBar>,
) -> TournamentReport {
    let mut jobs = Vec::new();
    for agent in 0..agents.len() {
        for opponent in 0..opponents.len() {
            for round in 0..params.rounds {
                for agent_first in [true, false] {
                    jobs.push(Job { agent, opponent, round, agent_first });
                }
            }
        }
    }

    let outcomes: Vec<(Job, bool, Outcome)> = jobs
        .par_iter()
        .map(|&job| {
            let round_seed = params.seed.wrapping_add(job.round as u64);
            let board = random_opening(params.width, params.height, params.opening_moves, round_seed);
            let pairing = ((job.agent as u64) << 32) | job.opponent as u64;
            let mut game_rng = SmallRng::seed_from_u64(round_seed ^ pairing);
            let mut ours = agents[job.agent].build(game_rng.gen());
            let mut theirs = opponents[job.opponent].build(game_rng.gen());
            let first = board.to_move();
            let ours_as = if job.agent_first { first } else { first.opponent() };
            let record = if ours_as == Player::One {
                play_game::<IsolationBoard>(board, ours.as_mut(), theirs.as_mut(), params.time_limit)
            } else {
                play_game::<IsolationBoard>(board, theirs.as_mut(), ours.as_mut(), params.time_limit)
            };
            if let Some(pb) = progress { pb.inc(1); }
            (job, record.winner == ours_as, record.outcome)
        })
        .collect();

    let mut matchups: Vec<MatchupResult> = Vec::with_capacity(agents.len() * opponents.len());
    for a in agents {
        for o in opponents {
            matchups.push(MatchupResult { agent: a.name.clone(), opponent: o.name.clone(), ..Default::default() });
        }
    }
    for (job, won, outcome) in outcomes {
        let m = &mut matchups[job.agent * opponents.len() + job.opponent];
        if won {
            m.wins += 1;
        } else {
            m.losses += 1;
            match outcome {
                Outcome::Timeout => m.timeouts += 1,
                Outcome::IllegalMove => m.illegal += 1,
                Outcome::NoMoves => {}
            }
        }
    }

    let summary = agents
        .iter()
        .enumerate()
        .map(|(i, a)| {
            let rows = &matchups[i * opponents.len()..(i + 1) * opponents.len()];
            let wins: u32 = rows.iter().map(|m| m.wins).sum();
            let games: u32 = rows.iter().map(|m| m.games()).sum();
            let win_rate = if games > 0 { wins as f64 / games as f64 } else { 0.0 };
            info!("{}: {}/{} games won ({:.1}%)", a.name, wins, games, win_rate * 100.0);
            AgentSummary { agent: a.name.clone(), wins, games, win_rate }
        })
        .collect();

    TournamentReport { matchups, summary }
}
