#![allow(dead_code)]

use isosearch::search::deadline::Deadline;
use isosearch::search::eval::Evaluator;
use isosearch::{Board, Move, Player};
use rand::rngs::SmallRng;
use rand::Rng;
use std::cell::Cell;
use std::rc::Rc;

/// Tree shape used to build a `TreeBoard`. Every node carries the score the
/// evaluator reports if the search stops there, from Player::One's view.
pub enum Tree {
    Leaf(f64),
    Node(f64, Vec<Tree>),
}

pub fn leaf(score: f64) -> Tree { Tree::Leaf(score) }
pub fn node(score: f64, children: Vec<Tree>) -> Tree { Tree::Node(score, children) }

#[derive(Debug)]
struct Slot {
    score: f64,
    children: Vec<usize>,
}

/// Explicit game tree. Player::One moves at even depths. The move to child
/// `i` of a node at depth `d` is `Move::new(d, i)`.
#[derive(Clone, Debug)]
pub struct TreeBoard {
    nodes: Rc<Vec<Slot>>,
    at: usize,
    depth: u32,
}

impl TreeBoard {
    pub fn new(tree: Tree) -> Self {
        let mut nodes = Vec::new();
        flatten(tree, &mut nodes);
        Self { nodes: Rc::new(nodes), at: 0, depth: 0 }
    }

    pub fn score(&self) -> f64 { self.nodes[self.at].score }
    pub fn depth(&self) -> u32 { self.depth }
}

fn flatten(tree: Tree, nodes: &mut Vec<Slot>) -> usize {
    let idx = nodes.len();
    match tree {
        Tree::Leaf(score) => nodes.push(Slot { score, children: Vec::new() }),
        Tree::Node(score, kids) => {
            nodes.push(Slot { score, children: Vec::new() });
            let children: Vec<usize> = kids.into_iter().map(|k| flatten(k, nodes)).collect();
            nodes[idx].children = children;
        }
    }
    idx
}

impl Board for TreeBoard {
    fn to_move(&self) -> Player {
        if self.depth % 2 == 0 { Player::One } else { Player::Two }
    }

    fn legal_moves(&self, _player: Player) -> Vec<Move> {
        (0..self.nodes[self.at].children.len())
            .map(|i| Move::new(self.depth as i32, i as i32))
            .collect()
    }

    fn forecast(&self, mv: Move) -> Self {
        let at = self.nodes[self.at].children[mv.col as usize];
        Self { nodes: self.nodes.clone(), at, depth: self.depth + 1 }
    }

    fn is_winner(&self, _player: Player) -> bool { false }
    fn is_loser(&self, _player: Player) -> bool { false }
}

/// Reads the node score and counts calls.
#[derive(Default)]
pub struct TreeEval {
    pub calls: Cell<u64>,
}

impl Evaluator<TreeBoard> for TreeEval {
    fn evaluate(&self, board: &TreeBoard, player: Player) -> f64 {
        self.calls.set(self.calls.get() + 1);
        match player {
            Player::One => board.score(),
            Player::Two => -board.score(),
        }
    }
}

/// Plenty of time for the first `allowed` queries, expired afterwards.
pub struct ExpiresAfter {
    allowed: u64,
    queries: Cell<u64>,
}

impl ExpiresAfter {
    pub fn new(allowed: u64) -> Self { Self { allowed, queries: Cell::new(0) } }
    pub fn queries(&self) -> u64 { self.queries.get() }
}

impl Deadline for ExpiresAfter {
    fn remaining(&self) -> f64 {
        let q = self.queries.get();
        self.queries.set(q + 1);
        if q < self.allowed { 1_000.0 } else { 0.0 }
    }
}

/// Uniform random tree with small integer scores, so ties are common.
pub fn random_tree(rng: &mut SmallRng, depth: u32, max_branching: usize) -> Tree {
    let score = random_score(rng);
    if depth == 0 {
        return leaf(score);
    }
    let n = rng.gen_range(0..=max_branching);
    if n == 0 {
        return leaf(score);
    }
    node(score, (0..n).map(|_| random_tree(rng, depth - 1, max_branching)).collect())
}

fn random_score(rng: &mut SmallRng) -> f64 {
    match rng.gen_range(0..20) {
        0 => f64::INFINITY,
        1 => f64::NEG_INFINITY,
        _ => rng.gen_range(-4..=4) as f64,
    }
}
