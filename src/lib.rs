// Time-bounded minimax / alpha-beta search over pluggable boards
pub mod agent;
pub mod board;
pub mod config;
pub mod game;
pub mod search;
pub mod tournament;

pub use agent::{Agent, RandomAgent, SearchAgent};
pub use board::{Board, IsolationBoard, Move, Player};
pub use config::{Method, SearchConfig};
pub use search::{decide, Decision, SearchResult, Searcher, Timeout};
