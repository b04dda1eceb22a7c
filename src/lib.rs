pub mod board;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

pub use board::{Board, Color, GameState, Move, Outcome, Piece, PieceKind, Square};
pub use game::{Game, GameMode};
pub use search::{select_move, Difficulty, Strategy};
