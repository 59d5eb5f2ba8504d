use isosearch::game::{play_game, Outcome};
use isosearch::search::deadline::Deadline;
use isosearch::tournament::{run, Contestant, AgentSpec, TournamentParams};
use isosearch::{Agent, Board, IsolationBoard, Method, Move, Player, RandomAgent, SearchAgent, SearchConfig};
use std::time::Duration;

struct Stubborn;

impl Agent<IsolationBoard> for Stubborn {
    fn name(&self) -> &str { "stubborn" }
    fn get_move(&mut self, _b: &IsolationBoard, _legal: &[Move], _d: &dyn Deadline) -> Move { Move::new(-5, -5) }
}

struct Sleepy;

impl Agent<IsolationBoard> for Sleepy {
    fn name(&self) -> &str { "sleepy" }
    fn get_move(&mut self, _b: &IsolationBoard, legal: &[Move], _d: &dyn Deadline) -> Move {
        std::thread::sleep(Duration::from_millis(30));
        legal[0]
    }
}

#[test]
fn search_agent_beats_or_finishes_against_random() {
    let cfg = SearchConfig { method: Method::AlphaBeta, search_depth: 10, ..SearchConfig::default() };
    let mut one = SearchAgent::from_config("ab", cfg);
    let mut two = RandomAgent::new("random", 9);
    let record = play_game(IsolationBoard::new(5, 5), &mut one, &mut two, Duration::from_millis(100));
    assert_eq!(record.outcome, Outcome::NoMoves);
    assert!(record.moves.len() >= 2);

    // Replaying the history reaches a position where the loser is stuck.
    let end = IsolationBoard::from_moves(5, 5, &record.moves).unwrap();
    assert!(end.is_loser(record.loser()));
    assert!(one.last_decision().is_some());
}

#[test]
fn illegal_move_forfeits() {
    let mut one = Stubborn;
    let mut two = RandomAgent::new("random", 1);
    let record = play_game(IsolationBoard::default(), &mut one, &mut two, Duration::from_millis(50));
    assert_eq!(record.outcome, Outcome::IllegalMove);
    assert_eq!(record.winner, Player::Two);
    assert!(record.moves.is_empty());
}

#[test]
fn answering_late_forfeits() {
    let mut one = RandomAgent::new("random", 1);
    let mut two = Sleepy;
    let record = play_game(IsolationBoard::default(), &mut one, &mut two, Duration::from_millis(5));
    assert_eq!(record.outcome, Outcome::Timeout);
    assert_eq!(record.winner, Player::One);
    assert_eq!(record.moves.len(), 1);
}

#[test]
fn tournament_counts_every_game() {
    let agents = vec![Contestant::new("ab", AgentSpec::Search(SearchConfig {
        method: Method::AlphaBeta,
        search_depth: 3,
        iterative: false,
        ..SearchConfig::default()
    }))];
    let opponents = vec![Contestant::new("random", AgentSpec::Random)];
    let params = TournamentParams { rounds: 2, width: 5, height: 5, time_limit: Duration::from_millis(200), ..TournamentParams::default() };
    let report = run(&agents, &opponents, &params, None);
    assert_eq!(report.matchups.len(), 1);
    assert_eq!(report.matchups[0].games(), 4);
    assert_eq!(report.summary[0].games, 4);
    assert!(report.summary[0].win_rate >= 0.0 && report.summary[0].win_rate <= 1.0);
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"opponent\":\"random\""));
}
