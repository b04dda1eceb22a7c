//! Modulo di valutazione
//!
//! Score of a position from one side's point of view: material, piece-square
//! bonuses for pawns and knights, and occupation of the four center squares.
//! Two presets share the same code path:
//!
//! - [`EvalWeights::light`]: plain material counts (pawn = 1 ... queen = 9), nothing else
//! - [`EvalWeights::full`]: centipawn weights (pawn = 100 ... king = 20000), PSQT and center bonus

use std::str::FromStr;

use crate::board::{Board, Color, PieceKind, Square, CENTER_SQUARES};
use crate::error::ParseEvalTierError;

// ============================================================================
// PIECE-SQUARE TABLES (dal punto di vista del BIANCO)
// ============================================================================
// Indice = row * 8 + col, row 0 = ottava traversa. Per il Nero si specchia
// verticalmente: (7 - row) * 8 + col.

/// Pawns: reward central advance, strongly reward the seventh rank
pub const PAWN_PSQT: [i32; 64] = [
    0, 0, 0, 0, 0, 0, 0, 0, //
    50, 50, 50, 50, 50, 50, 50, 50, //
    10, 10, 20, 30, 30, 20, 10, 10, //
    5, 5, 10, 25, 25, 10, 5, 5, //
    0, 0, 0, 20, 20, 0, 0, 0, //
    5, -5, -10, 0, 0, -10, -5, 5, //
    5, 10, 10, -20, -20, 10, 10, 5, //
    0, 0, 0, 0, 0, 0, 0, 0,
];

/// Knights: centralise, avoid the rim
pub const KNIGHT_PSQT: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50, //
    -40, -20, 0, 0, 0, 0, -20, -40, //
    -30, 0, 10, 15, 15, 10, 0, -30, //
    -30, 5, 15, 20, 20, 15, 5, -30, //
    -30, 0, 15, 20, 20, 15, 0, -30, //
    -30, 5, 10, 15, 15, 10, 5, -30, //
    -40, -20, 0, 5, 5, 0, -20, -40, //
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvalTier {
    Light,
    Full,
}

impl FromStr for EvalTier {
    type Err = ParseEvalTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(EvalTier::Light),
            "full" => Ok(EvalTier::Full),
            _ => Err(ParseEvalTierError(s.to_string())),
        }
    }
}

/// Evaluator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalWeights {
    /// Material value indexed by `PieceKind as usize`
    pub material: [i32; 6],
    pub pawn_psqt: Option<[i32; 64]>,
    pub knight_psqt: Option<[i32; 64]>,
    /// Per center square: added when held by the perspective side, subtracted otherwise
    pub center_bonus: i32,
}

impl EvalWeights {
    pub fn light() -> Self {
        Self {
            material: [1, 3, 3, 5, 9, 0],
            pawn_psqt: None,
            knight_psqt: None,
            center_bonus: 0,
        }
    }

    pub fn full() -> Self {
        Self {
            material: [100, 320, 330, 500, 900, 20000],
            pawn_psqt: Some(PAWN_PSQT),
            knight_psqt: Some(KNIGHT_PSQT),
            center_bonus: 20,
        }
    }

    pub fn for_tier(tier: EvalTier) -> Self {
        match tier {
            EvalTier::Light => Self::light(),
            EvalTier::Full => Self::full(),
        }
    }

    pub fn material_value(&self, kind: PieceKind) -> i32 {
        self.material[kind as usize]
    }

    /// Piece-square bonus, mirrored for Black; zero for kinds without a table
    pub fn positional_bonus(&self, kind: PieceKind, sq: Square, color: Color) -> i32 {
        let table = match kind {
            PieceKind::Pawn => self.pawn_psqt.as_ref(),
            PieceKind::Knight => self.knight_psqt.as_ref(),
            _ => None,
        };
        let Some(table) = table else {
            return 0;
        };
        let row = match color {
            Color::White => sq.row() as usize,
            Color::Black => 7 - sq.row() as usize,
        };
        table[row * 8 + sq.col() as usize]
    }
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self::full()
    }
}

/// Signed score of `board` for `perspective`: positive means `perspective` is better
pub fn evaluate(board: &Board, perspective: Color, weights: &EvalWeights) -> i32 {
    let mut score = 0;
    for sq in Square::all() {
        let Some(piece) = board.piece_at(sq) else {
            continue;
        };
        let value =
            weights.material_value(piece.kind) + weights.positional_bonus(piece.kind, sq, piece.color);
        if piece.color == perspective {
            score += value;
        } else {
            score -= value;
        }
    }

    // Controllo del centro
    for sq in CENTER_SQUARES {
        match board.piece_at(sq) {
            Some(p) if p.color == perspective => score += weights.center_bonus,
            Some(_) => score -= weights.center_bonus,
            None => {}
        }
    }
    score
}

// ============================================================================
// TESTS
// ============================================================================
