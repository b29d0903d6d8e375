//! Hand-built game trees for exercising the search without chess rules.

use chess_core::{Color, PieceKind};

use crate::rules::{Material, Rules};
use crate::search::{Perspective, Score};

/// A node's static score, and its children (none for a terminal node).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub score: Score,
    pub children: Vec<Node>,
}

pub fn leaf(score: Score) -> Node {
    Node {
        score,
        children: Vec::new(),
    }
}

/// Inner node whose own static score is 0.
pub fn inner(children: Vec<Node>) -> Node {
    Node {
        score: 0,
        children,
    }
}

/// A walk through a [`Node`] tree. Moves are child indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeGame {
    root: Node,
    path: Vec<usize>,
    to_move: Perspective,
}

impl TreeGame {
    pub fn new(root: Node, to_move: Perspective) -> Self {
        Self {
            root,
            path: Vec::new(),
            to_move,
        }
    }

    fn current(&self) -> &Node {
        self.path
            .iter()
            .fold(&self.root, |node, &i| &node.children[i])
    }
}

impl Rules for TreeGame {
    type Move = usize;

    fn legal_moves(&mut self) -> Vec<usize> {
        (0..self.current().children.len()).collect()
    }

    fn apply(&mut self, mv: usize) {
        self.path.push(mv);
        self.to_move = self.to_move.opponent();
    }

    fn undo(&mut self) {
        self.path.pop();
        self.to_move = self.to_move.opponent();
    }

    fn is_game_over(&mut self) -> bool {
        self.current().children.is_empty()
    }

    fn perspective(&self) -> Perspective {
        self.to_move
    }
}

// The node score is spread over white and black pawns so the material
// evaluator reads it back unchanged.
impl Material for TreeGame {
    fn count(&self, color: Color, kind: PieceKind) -> u32 {
        let score = self.current().score;
        match (color, kind) {
            (Color::White, PieceKind::Pawn) => score.max(0) as u32,
            (Color::Black, PieceKind::Pawn) => (-score).max(0) as u32,
            _ => 0,
        }
    }
}

/// Plain minimax without pruning, as the reference result.
pub fn minimax<G: Rules + Material>(game: &mut G, depth: u8, perspective: Perspective) -> Score {
    if depth == 0 || game.is_game_over() {
        return crate::eval::evaluate(game);
    }
    let mut best = perspective.worst();
    for mv in game.legal_moves() {
        let mut child = game.play(mv);
        let score = minimax(&mut *child, depth - 1, perspective.opponent());
        best = perspective.better(best, score);
    }
    best
}

/// Root max, two min children, each with two max children over two leaves.
///
/// Minimax value 5. Searched in order, alpha-beta cuts once under the
/// first min child and once in the second.
pub fn textbook_tree() -> Node {
    inner(vec![
        inner(vec![
            inner(vec![leaf(3), leaf(5)]),
            inner(vec![leaf(6), leaf(9)]),
        ]),
        inner(vec![
            inner(vec![leaf(1), leaf(2)]),
            inner(vec![leaf(0), leaf(-1)]),
        ]),
    ])
}
