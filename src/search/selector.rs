//! Move selection entry point
//!
//! A [`Difficulty`] names a preset [`Strategy`]; hosts that want finer control
//! build a `Strategy` directly.

use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;

use super::greedy::greedy_move;
use super::minimax::Search;
use super::params::SearchParams;
use crate::board::{Board, Move};
use crate::error::ParseDifficultyError;
use crate::eval::EvalTier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Uniformly random legal move
    Easy,
    /// One-ply greedy heuristics
    #[default]
    Medium,
    /// Minimax, depth 2, material-only evaluation
    Hard,
    /// Minimax, depth 3, full evaluation
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    pub fn strategy(self) -> Strategy {
        match self {
            Difficulty::Easy => Strategy::Random,
            Difficulty::Medium => Strategy::Greedy,
            Difficulty::Hard => Strategy::Minimax(
                SearchParams::new().max_depth(2).eval_tier(EvalTier::Light),
            ),
            Difficulty::Expert => Strategy::Minimax(
                SearchParams::new().max_depth(3).eval_tier(EvalTier::Full),
            ),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "expert" => Ok(Difficulty::Expert),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    Random,
    Greedy,
    Minimax(SearchParams),
}

/// Picks a move for the side to move; `None` when the game is over or no move exists
pub fn select_move<R: Rng + ?Sized>(board: &Board, difficulty: Difficulty, rng: &mut R) -> Option<Move> {
    select_with_strategy(board, &difficulty.strategy(), rng)
}

pub fn select_with_strategy<R: Rng + ?Sized>(
    board: &Board,
    strategy: &Strategy,
    rng: &mut R,
) -> Option<Move> {
    if board.is_game_over() {
        debug!("select_move: game over, no move");
        return None;
    }
    let chosen = match strategy {
        Strategy::Random => random_move(board, rng),
        Strategy::Greedy => greedy_move(board, rng),
        Strategy::Minimax(params) => {
            let mut search = Search::new(board, params.clone());
            let result = search.search();
            if let Some(r) = result {
                debug!(
                    "minimax depth {} picked {} (score {}, {} nodes)",
                    params.max_depth,
                    r.best_move,
                    r.score,
                    search.stats().nodes
                );
            }
            result.map(|r| r.best_move)
        }
    };
    match chosen {
        Some(mv) => debug!("{} plays {} ({:?})", board.turn(), mv, strategy),
        None => debug!("{} has no legal move", board.turn()),
    }
    chosen
}

/// Uniformly random legal move
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Move> {
    board.all_legal_moves().choose(rng).copied()
}
