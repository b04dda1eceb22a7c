//! Game session
//!
//! Owns the board, the game mode and the list of moves played. Hosts create
//! one `Game` per match; there is no global instance.

use log::debug;
use rand::Rng;

use crate::board::{Board, Color, GameState, Move, Piece, Square};
use crate::search::{select_move, Difficulty};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    #[default]
    HumanVsHuman,
    VsComputer {
        computer: Color,
        difficulty: Difficulty,
    },
}

impl GameMode {
    /// Computer plays Black, as in the classic human-first setup
    pub fn vs_computer(difficulty: Difficulty) -> Self {
        GameMode::VsComputer {
            computer: Color::Black,
            difficulty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    mode: GameMode,
    history: Vec<Move>,
}

impl Game {
    /// New game from the standard start position, White to move
    pub fn new(mode: GameMode) -> Self {
        Self::from_board(Board::new_game(), mode)
    }

    /// Game continuing from an arbitrary position
    pub fn from_board(board: Board, mode: GameMode) -> Self {
        Self {
            board,
            mode,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Moves played so far, oldest first
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn game_state(&self) -> GameState {
        self.board.game_state()
    }

    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        self.board.legal_moves(from)
    }

    /// Plays `from -> to` if legal and records it; otherwise a no-op returning `None`
    pub fn apply_move(&mut self, from: Square, to: Square) -> Option<Move> {
        let mv = self.board.apply_move(from, to)?;
        self.history.push(mv);
        Some(mv)
    }

    /// True when the computer is due to move
    pub fn is_computer_turn(&self) -> bool {
        match self.mode {
            GameMode::VsComputer { computer, .. } => {
                !self.board.is_game_over() && self.board.turn() == computer
            }
            GameMode::HumanVsHuman => false,
        }
    }

    /// Lets the computer play its move. No-op unless [`Game::is_computer_turn`].
    pub fn play_computer_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Move> {
        let GameMode::VsComputer { difficulty, .. } = self.mode else {
            debug!("play_computer_move ignored: no computer in this game");
            return None;
        };
        if !self.is_computer_turn() {
            debug!("play_computer_move ignored: not the computer's turn");
            return None;
        }
        let mv = select_move(&self.board, difficulty, rng)?;
        self.apply_move(mv.from, mv.to)
    }

    /// Suggests a move for the side to move without playing it
    pub fn suggest_move<R: Rng + ?Sized>(&self, difficulty: Difficulty, rng: &mut R) -> Option<Move> {
        select_move(&self.board, difficulty, rng)
    }

    /// Pieces of `color` captured so far, in capture order
    pub fn captured(&self, color: Color) -> Vec<Piece> {
        self.history
            .iter()
            .filter_map(|m| m.captured)
            .filter(|p| p.color == color)
            .collect()
    }

    /// Restarts from the standard position keeping the same mode
    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
