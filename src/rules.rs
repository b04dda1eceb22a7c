//! Piece movement rules
//!
//! One generator per piece kind, dispatched from a single `match` on
//! [`PieceKind`]. Generation runs in two modes:
//!
//! - [`GenMode::Raw`]: every square the piece moves to or captures on,
//!   ignoring the safety of its own king. Attack queries use this mode so they
//!   never recurse into the king-safety filter.
//! - [`GenMode::Filtered`]: `Raw` minus the destinations that leave the
//!   mover's king attacked once played on a scratch copy of the board.

use crate::board::{Board, Color, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenMode {
    Raw,
    Filtered,
}

// Direction deltas (row, col)
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Destinations of the piece on `from`; empty if the square is empty
pub fn pseudo_legal_moves(board: &Board, from: Square, mode: GenMode) -> Vec<Square> {
    let mut out = Vec::with_capacity(32);
    generate(board, from, mode, &mut out);
    out
}

/// Appends the destinations of the piece on `from` to `out`
pub fn generate(board: &Board, from: Square, mode: GenMode, out: &mut Vec<Square>) {
    let Some(piece) = board.piece_at(from) else {
        return;
    };
    let start = out.len();
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece.color, out),
        PieceKind::Knight => step_moves(board, from, piece.color, &KNIGHT_OFFSETS, out),
        PieceKind::Bishop => sliding_moves(board, from, piece.color, &BISHOP_DIRECTIONS, out),
        PieceKind::Rook => sliding_moves(board, from, piece.color, &ROOK_DIRECTIONS, out),
        PieceKind::Queen => {
            sliding_moves(board, from, piece.color, &ROOK_DIRECTIONS, out);
            sliding_moves(board, from, piece.color, &BISHOP_DIRECTIONS, out);
        }
        PieceKind::King => step_moves(board, from, piece.color, &KING_OFFSETS, out),
    }

    if mode == GenMode::Filtered {
        let tail = out.split_off(start);
        out.extend(tail.into_iter().filter(|&to| !leaves_king_attacked(board, from, to)));
    }
}

/// True if some piece of color `by` has `target` among its `Raw` destinations
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    let mut dest = Vec::with_capacity(32);
    for (from, _) in board.pieces(by) {
        dest.clear();
        generate(board, from, GenMode::Raw, &mut dest);
        if dest.contains(&target) {
            return true;
        }
    }
    false
}

/// Plays `from -> to` on a scratch copy and tests the mover's king.
/// A side without a king cannot be left in check.
pub fn leaves_king_attacked(board: &Board, from: Square, to: Square) -> bool {
    let Some(mover) = board.piece_at(from) else {
        return false;
    };
    let mut scratch = *board;
    scratch.set_piece(to, Some(mover));
    scratch.set_piece(from, None);
    match scratch.find_king(mover.color) {
        Some(king) => is_square_attacked(&scratch, king, mover.color.opponent()),
        None => false,
    }
}

fn is_enemy(board: &Board, sq: Square, color: Color) -> bool {
    matches!(board.piece_at(sq), Some(p) if p.color != color)
}

// Pedone: spinta singola, doppia dalla traversa iniziale, cattura diagonale. Niente en-passant.
fn pawn_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    let dir = color.forward();
    if let Some(one) = from.offset(dir, 0) {
        if board.piece_at(one).is_none() {
            out.push(one);
            if from.row() == color.pawn_start_row() {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if board.piece_at(two).is_none() {
                        out.push(two);
                    }
                }
            }
        }
    }
    for dc in [-1, 1] {
        if let Some(diag) = from.offset(dir, dc) {
            if is_enemy(board, diag, color) {
                out.push(diag);
            }
        }
    }
}

// Cavallo e Re: salti fissi, vietata solo la casa occupata da un pezzo amico
fn step_moves(board: &Board, from: Square, color: Color, offsets: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in offsets {
        if let Some(to) = from.offset(dr, dc) {
            match board.piece_at(to) {
                Some(p) if p.color == color => {}
                _ => out.push(to),
            }
        }
    }
}

fn sliding_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(dr, dc) in directions {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, dc) {
            match board.piece_at(to) {
                None => out.push(to),
                Some(p) => {
                    if p.color != color {
                        out.push(to);
                    }
                    break;
                }
            }
            cur = to;
        }
    }
}
