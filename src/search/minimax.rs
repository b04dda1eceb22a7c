//! Depth-bounded minimax with alpha-beta pruning
//!
//! The searcher owns a copy of the caller's board and walks the tree with
//! make/unmake. Scores are always expressed from the root side's point of
//! view: maximizing nodes are the root side to move, minimizing nodes the
//! opponent.

use log::trace;

use super::params::SearchParams;
use super::stats::SearchStats;
use crate::board::{Board, Move, PieceKind};
use crate::eval::{evaluate, EvalWeights};

pub const INFINITE: i32 = 1_000_000;
pub const MATE: i32 = 100_000;
/// Scores beyond this magnitude are forced mates
pub const MATE_THRESHOLD: i32 = MATE - 1_000;

/// Best root move and its score for the root side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    pub score: i32,
}

impl SearchResult {
    pub fn is_mate(&self) -> bool {
        self.score.abs() >= MATE_THRESHOLD
    }
}

/// Minimax search engine
pub struct Search {
    /// Working copy of the position (mutated during search, restored on return)
    board: Board,

    params: SearchParams,

    weights: EvalWeights,

    stats: SearchStats,
}

impl Search {
    pub fn new(board: &Board, params: SearchParams) -> Self {
        let weights = EvalWeights::for_tier(params.eval_tier);
        Self {
            board: *board,
            params,
            weights,
            stats: SearchStats::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Runs the search to `max_depth`.
    ///
    /// Returns `None` when the side to move has no legal move or the game is over.
    /// Among equally scored root moves the first in search order wins.
    pub fn search(&mut self) -> Option<SearchResult> {
        let depth = self.params.max_depth.max(1);

        self.stats.reset();
        self.stats.start_timing();

        let mut root_moves = self.board.all_legal_moves();
        if root_moves.is_empty() {
            return None;
        }
        self.order_moves(&mut root_moves);

        let mut alpha = -INFINITE;
        let beta = INFINITE;
        let mut best: Option<SearchResult> = None;

        for mv in root_moves {
            self.stats.inc_node();
            self.stats.inc_root_node();

            let undo = self.board.make_move(mv.from, mv.to);
            let score = self.minimax(depth - 1, 1, alpha, beta, false);
            self.board.unmake_move(undo);

            trace!("root {} -> {}", mv, score);

            if best.map_or(true, |b| score > b.score) {
                best = Some(SearchResult {
                    best_move: mv,
                    score,
                });
            }
            if self.params.alpha_beta {
                alpha = alpha.max(score);
            }
        }

        self.stats.update_timing();
        if let Some(result) = best {
            trace!(
                "depth {} best {} score {} ({})",
                depth,
                result.best_move,
                result.score,
                self.stats
            );
        }
        best
    }

    fn minimax(&mut self, depth: u8, ply: u8, mut alpha: i32, mut beta: i32, maximizing: bool) -> i32 {
        self.stats.inc_node();

        let side = self.board.turn();

        // Re catturato: sconfitta immediata per chi doveva muovere
        if self.board.find_king(side).is_none() {
            self.stats.inc_terminal_node();
            let mate = MATE - ply as i32;
            return if maximizing { -mate } else { mate };
        }

        if depth == 0 {
            self.stats.inc_leaf_node();
            let score = evaluate(&self.board, self.board.turn(), &self.weights);
            return if maximizing { score } else { -score };
        }

        let mut moves = Vec::with_capacity(64);
        self.board.generate_moves(side, &mut moves);

        if moves.is_empty() {
            self.stats.inc_terminal_node();
            if self.board.in_check(side) {
                // Mate closer to the root scores higher for the winner
                let mate = MATE - ply as i32;
                return if maximizing { -mate } else { mate };
            }
            return 0;
        }

        self.order_moves(&mut moves);

        if maximizing {
            let mut best = -INFINITE;
            for mv in moves {
                let undo = self.board.make_move(mv.from, mv.to);
                let score = self.minimax(depth - 1, ply + 1, alpha, beta, false);
                self.board.unmake_move(undo);

                best = best.max(score);
                alpha = alpha.max(best);
                if self.params.alpha_beta && beta <= alpha {
                    self.stats.inc_cutoff();
                    break;
                }
            }
            best
        } else {
            let mut best = INFINITE;
            for mv in moves {
                let undo = self.board.make_move(mv.from, mv.to);
                let score = self.minimax(depth - 1, ply + 1, alpha, beta, true);
                self.board.unmake_move(undo);

                best = best.min(score);
                beta = beta.min(best);
                if self.params.alpha_beta && beta <= alpha {
                    self.stats.inc_cutoff();
                    break;
                }
            }
            best
        }
    }

    // Catture prima (MVV), poi le mosse tranquille nell'ordine di generazione.
    // Ordinamento stabile: a parità resta l'ordine di enumerazione.
    fn order_moves(&self, moves: &mut [Move]) {
        if !self.params.order_captures {
            return;
        }
        moves.sort_by_key(|m| std::cmp::Reverse(m.captured.map_or(0, |c| victim_value(c.kind))));
    }
}

fn victim_value(kind: PieceKind) -> u16 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 100,
    }
}

/// Convenience wrapper: search `board` with `params`
pub fn best_move(board: &Board, params: SearchParams) -> Option<SearchResult> {
    Search::new(board, params).search()
}

// ============================================================================
// TESTS
// ============================================================================
