//! Error types for scacchiera
//!
//! Game flow (apply, select) never fails: illegal requests are no-ops.
//! Only text parsing at the edges of the API produces errors.

use thiserror::Error;

/// Errors produced while reading a FEN string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("missing {0} field")]
    MissingField(&'static str),

    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),

    #[error("rank {rank} describes {files} files")]
    RankWidth { rank: usize, files: usize },

    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),

    #[error("invalid side to move '{0}'")]
    InvalidSide(String),
}

/// Square text that is not in `a1`..`h8`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid square notation '{0}'")]
pub struct ParseSquareError(pub String);

/// Errors produced while matching move text against the legal moves
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("move text '{0}' is too short")]
    TooShort(String),

    #[error(transparent)]
    Square(#[from] ParseSquareError),

    #[error("move {0} is not legal in this position")]
    Illegal(String),
}

/// Unknown difficulty name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown difficulty '{0}' (expected easy, medium, hard or expert)")]
pub struct ParseDifficultyError(pub String);

/// Unknown evaluator tier name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown eval tier '{0}' (expected light or full)")]
pub struct ParseEvalTierError(pub String);
