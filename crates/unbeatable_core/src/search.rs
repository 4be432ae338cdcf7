//! Perfect-play move selection: minimax with alpha-beta pruning.
//!
//! The tree is searched to the end of the game, so scores are exact:
//! a win found `d` plies below a root candidate is worth `10 - d` to the
//! computer, a loss `d - 10`, a draw `0`. Shallower wins and deeper losses
//! are therefore preferred.

use super::{Board, Cell, Outcome, Position, Side, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Score of a win found at depth 0.
pub const WIN_SCORE: i32 = 10;

/// Outcome of one search call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Chosen move.
    pub position: Position,
    /// Exact minimax value of the chosen move, from the computer's view.
    pub score: i32,
    /// Nodes visited below the root.
    pub nodes: u64,
    /// Every root candidate with its score, in row-major order.
    pub candidates: Vec<(Position, i32)>,
}

impl SearchResult {
    /// Score of a given root candidate, if it was legal.
    pub fn score_of(&self, position: Position) -> Option<i32> {
        self.candidates
            .iter()
            .find(|(pos, _)| *pos == position)
            .map(|(_, score)| *score)
    }
}

/// Returns the optimal move for `side`, or `None` if the board is full.
///
/// Ties go to the earliest cell in row-major order.
pub fn best_move(board: &Board, side: Side) -> Option<Position> {
    search(board, side).map(|result| result.position)
}

/// Scores every legal move for `side` and returns the best one.
///
/// The computer maximizes and the player minimizes the score. Each root
/// candidate gets its own full-width window, and only a strictly better
/// score replaces the current choice. `board` is never modified.
#[instrument(skip(board), fields(board = %board))]
pub fn search(board: &Board, side: Side) -> Option<SearchResult> {
    let mut searcher = Searcher::new(*board);
    let mut best: Option<(Position, i32)> = None;
    let mut candidates = Vec::with_capacity(board.empty_count());

    for pos in Position::ALL {
        if !searcher.board.is_empty(pos) {
            continue;
        }

        searcher.board.set(pos, Cell::Marked(side));
        let score = searcher.minimax(0, side.opponent(), i32::MIN, i32::MAX);
        searcher.board.clear(pos);

        trace!(position = ?pos, score, "Root candidate scored");
        candidates.push((pos, score));

        let improves = match best {
            None => true,
            Some((_, best_score)) => match side {
                Side::Ai => score > best_score,
                Side::Player => score < best_score,
            },
        };
        if improves {
            best = Some((pos, score));
        }
    }

    let (position, score) = best?;
    debug!(position = ?position, score, nodes = searcher.nodes, "Search complete");

    Some(SearchResult {
        position,
        score,
        nodes: searcher.nodes,
        candidates,
    })
}

/// Working copy of the board, mutated with place/undo during the search.
struct Searcher {
    board: Board,
    nodes: u64,
}

impl Searcher {
    fn new(board: Board) -> Self {
        Self { board, nodes: 0 }
    }

    fn minimax(&mut self, depth: i32, to_move: Side, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;

        match rules::evaluate(&self.board) {
            Outcome::AiWin => return WIN_SCORE - depth,
            Outcome::PlayerWin => return depth - WIN_SCORE,
            Outcome::Draw => return 0,
            Outcome::InProgress => {}
        }

        let maximizing = to_move == Side::Ai;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in Position::ALL {
            if !self.board.is_empty(pos) {
                continue;
            }

            self.board.set(pos, Cell::Marked(to_move));
            let value = self.minimax(depth + 1, to_move.opponent(), alpha, beta);
            self.board.clear(pos);

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }

            if beta <= alpha {
                break;
            }
        }

        best
    }
}
