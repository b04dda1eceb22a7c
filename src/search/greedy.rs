//! One-ply heuristic selector
//!
//! Every legal move gets a score from a handful of fixed heuristics plus a
//! small random jitter; the highest score wins.

use log::trace;
use rand::Rng;

use crate::board::{Board, Color, Move, PieceKind};
use crate::eval::EvalWeights;
use crate::rules::is_square_attacked;

/// Multiplier applied to the captured piece's value
pub const CAPTURE_WEIGHT: i32 = 10;
/// Extra reward for capturing a piece worth more than the capturer
pub const TRADE_UP_BONUS: i32 = 50;
pub const CENTER_BONUS: i32 = 15;
/// Per row of pawn progress toward promotion
pub const PAWN_ADVANCE_WEIGHT: i32 = 5;
/// Multiplier applied to the mover's value when it lands on an attacked square
pub const HANGING_PENALTY_WEIGHT: i32 = 5;
/// Jitter is drawn uniformly from `0..JITTER_RANGE`
pub const JITTER_RANGE: i32 = 10;

/// Deterministic part of the greedy score of `mv` on `board`, on the centipawn scale
pub fn score_move(board: &Board, mv: &Move) -> i32 {
    let values = EvalWeights::full();
    let mover_value = values.material_value(mv.piece.kind);
    let mut score = 0;

    if let Some(victim) = mv.captured {
        let victim_value = values.material_value(victim.kind);
        score += victim_value * CAPTURE_WEIGHT;
        if victim_value > mover_value {
            score += TRADE_UP_BONUS;
        }
    }

    if mv.to.is_center() {
        score += CENTER_BONUS;
    }

    if mv.piece.kind == PieceKind::Pawn {
        let progress = match mv.piece.color {
            Color::White => 7 - mv.to.row() as i32,
            Color::Black => mv.to.row() as i32,
        };
        score += progress * PAWN_ADVANCE_WEIGHT;
    }

    // Simula la mossa e controlla se il pezzo resta in presa
    let mut after = *board;
    after.make_move(mv.from, mv.to);
    if is_square_attacked(&after, mv.to, mv.piece.color.opponent()) {
        score -= mover_value * HANGING_PENALTY_WEIGHT;
    }

    score
}

/// Picks the legal move with the highest jittered score.
/// Ties keep the first move in enumeration order.
pub fn greedy_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Move> {
    let mut best: Option<(Move, i32)> = None;
    for mv in board.all_legal_moves() {
        let score = score_move(board, &mv) + rng.random_range(0..JITTER_RANGE);
        trace!("greedy {} -> {}", mv, score);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((mv, score));
        }
    }
    best.map(|(mv, _)| mv)
}
