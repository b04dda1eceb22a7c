// Coordinate (row, col): row 0 = ottava traversa (a8..h8), row 7 = prima traversa (a1..h1).
// Il Bianco avanza verso row 0, il Nero verso row 7. Index piatto = row * 8 + col.

use std::fmt;
use std::str::FromStr;

use log::{debug, info};

use crate::error::{FenError, MoveParseError, ParseSquareError};
use crate::rules::{self, GenMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row a pawn of this color starts on
    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row on which a pawn of this color promotes
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Row delta of a forward pawn step
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self {
            color,
            kind,
            has_moved: false,
        }
    }

    /// Unicode glyph used by board front-ends
    pub fn symbol(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Pawn) => '♟',
        }
    }

    /// FEN letter: uppercase for White, lowercase for Black
    pub fn fen_char(&self) -> char {
        let ch = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::White => ch.to_ascii_uppercase(),
            Color::Black => ch,
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Piece> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Piece::new(color, kind))
    }
}

/// A board coordinate; always in bounds by construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Returns `None` for coordinates outside `[0, 8)`
    pub fn new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    pub(crate) const fn at(row: u8, col: u8) -> Square {
        Square { row, col }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    pub fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// Square displaced by (dr, dc), or `None` when it falls off the board
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::at(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn is_center(self) -> bool {
        CENTER_SQUARES.contains(&self)
    }

    /// All 64 squares in row-major order (a8, b8, ..., h1)
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(|i| Square::at(i / 8, i % 8))
    }
}

/// d5, e5, d4, e4
pub const CENTER_SQUARES: [Square; 4] = [
    Square::at(3, 3),
    Square::at(3, 4),
    Square::at(4, 3),
    Square::at(4, 4),
];

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = (b'8' - self.row) as char;
        write!(f, "{}{}", file, rank)
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ParseSquareError(s.to_string()));
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(ParseSquareError(s.to_string()));
        }
        Ok(Square::at(b'8' - rank, file - b'a'))
    }
}

/// A move record: origin, destination and snapshots of the pieces involved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Mover as it stood on `from`, before the move
    pub piece: Piece,
    pub captured: Option<Piece>,
}

impl Move {
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    pub fn is_promotion(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && self.to.row() == self.piece.color.promotion_row()
    }

    /// Move in UCI notation (e.g. "e2e4", "a7a8q")
    pub fn to_uci(&self) -> String {
        let mut uci = format!("{}{}", self.from, self.to);
        if self.is_promotion() {
            uci.push('q');
        }
        uci
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

// Undo entry per rollback
#[derive(Debug, Clone, Copy)]
pub struct Undo {
    pub from: Square,
    pub to: Square,
    pub prev_from: Option<Piece>,
    pub prev_to: Option<Piece>,
    pub prev_turn: Color,
    pub prev_check: CheckStatus,
}

impl Undo {
    /// The move this entry rolls back, `None` if the origin was empty
    pub fn mv(&self) -> Option<Move> {
        self.prev_from.map(|piece| Move {
            from: self.from,
            to: self.to,
            piece,
            captured: self.prev_to,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CheckStatus {
    pub white: bool,
    pub black: bool,
}

impl CheckStatus {
    pub fn get(&self, color: Color) -> bool {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    fn set(&mut self, color: Color, value: bool) {
        match color {
            Color::White => self.white = value,
            Color::Black => self.black = value,
        }
    }
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Checkmate { winner: Color },
    /// Side to move has no legal move and is not in check: a draw
    Stalemate,
    /// A king is missing from the board
    KingCaptured { winner: Color },
}

impl Outcome {
    pub fn winner(&self) -> Option<Color> {
        match *self {
            Outcome::Checkmate { winner } | Outcome::KingCaptured { winner } => Some(winner),
            Outcome::Stalemate => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checkmate { winner } => write!(f, "checkmate, {} wins", winner),
            Outcome::Stalemate => f.write_str("stalemate, draw"),
            Outcome::KingCaptured { winner } => write!(f, "king captured, {} wins", winner),
        }
    }
}

/// Snapshot consumed by front-ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub game_over: bool,
    pub winner: Option<Color>,
    pub turn: Color,
    pub check: CheckStatus,
    pub outcome: Option<Outcome>,
}

/// Griglia 8x8 piatta: copiare una Board costa una memcpy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
    turn: Color,
    check: CheckStatus,
    outcome: Option<Outcome>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Board {
    // Board vuota, Bianco al tratto; da popolare con set_piece
    pub fn empty() -> Self {
        Self {
            squares: [None; 64],
            turn: Color::White,
            check: CheckStatus::default(),
            outcome: None,
        }
    }

    /// Standard starting position, White to move
    pub fn new_game() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        let mut board = Self::empty();
        for col in 0..8u8 {
            let kind = BACK_RANK[col as usize];
            board.set_piece(Square::at(0, col), Some(Piece::new(Color::Black, kind)));
            board.set_piece(Square::at(1, col), Some(Piece::new(Color::Black, PieceKind::Pawn)));
            board.set_piece(Square::at(6, col), Some(Piece::new(Color::White, PieceKind::Pawn)));
            board.set_piece(Square::at(7, col), Some(Piece::new(Color::White, kind)));
        }
        board
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Raw placement for position setup; call `refresh_status` once done
    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    pub fn set_turn(&mut self, color: Color) {
        self.turn = color;
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Cached check flag, refreshed after every move
    pub fn in_check(&self, color: Color) -> bool {
        self.check.get(color)
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn winner(&self) -> Option<Color> {
        self.outcome.and_then(|o| o.winner())
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn game_state(&self) -> GameState {
        GameState {
            game_over: self.is_game_over(),
            winner: self.winner(),
            turn: self.turn,
            check: self.check,
            outcome: self.outcome,
        }
    }

    /// Occupied squares of one color, row-major
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(p) if p.color == color => Some((sq, p)),
            _ => None,
        })
    }

    /// Square of the king of `color`, `None` if it has been captured
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Legal destinations for the piece on `from`.
    /// Empty if the square is empty, holds a piece of the side not to move, or the game is over.
    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        if self.is_game_over() {
            return Vec::new();
        }
        match self.piece_at(from) {
            Some(p) if p.color == self.turn => rules::pseudo_legal_moves(self, from, GenMode::Filtered),
            _ => Vec::new(),
        }
    }

    /// Every legal move of the side to move, in enumeration order
    pub fn all_legal_moves(&self) -> Vec<Move> {
        if self.is_game_over() {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(64);
        self.generate_moves(self.turn, &mut out);
        out
    }

    // Genera le mosse legali di `side` ignorando lo stato di fine partita
    pub(crate) fn generate_moves(&self, side: Color, out: &mut Vec<Move>) {
        let mut dest = Vec::with_capacity(32);
        for (from, piece) in self.pieces(side) {
            dest.clear();
            rules::generate(self, from, GenMode::Filtered, &mut dest);
            for &to in &dest {
                out.push(Move {
                    from,
                    to,
                    piece,
                    captured: self.piece_at(to),
                });
            }
        }
    }

    fn has_legal_move(&self, side: Color) -> bool {
        let mut dest = Vec::with_capacity(32);
        for (from, _) in self.pieces(side) {
            dest.clear();
            rules::generate(self, from, GenMode::Filtered, &mut dest);
            if !dest.is_empty() {
                return true;
            }
        }
        false
    }

    /// Unchecked move application used by search and simulation.
    ///
    /// Relocates the piece, marks it moved, auto-promotes pawns to a Queen,
    /// flips the turn and refreshes both check flags. Termination is not evaluated.
    pub fn make_move(&mut self, from: Square, to: Square) -> Undo {
        let undo = Undo {
            from,
            to,
            prev_from: self.piece_at(from),
            prev_to: self.piece_at(to),
            prev_turn: self.turn,
            prev_check: self.check,
        };
        let Some(mv) = undo.mv() else {
            return undo;
        };

        let mut moved = mv.piece;
        moved.has_moved = true;
        if mv.is_promotion() {
            moved.kind = PieceKind::Queen;
        }
        self.squares[from.index()] = None;
        self.squares[to.index()] = Some(moved);

        self.turn = self.turn.opponent();
        self.update_check_status();
        undo
    }

    pub fn unmake_move(&mut self, undo: Undo) {
        self.squares[undo.from.index()] = undo.prev_from;
        self.squares[undo.to.index()] = undo.prev_to;
        self.turn = undo.prev_turn;
        self.check = undo.prev_check;
    }

    /// Applies a move requested by a player.
    ///
    /// Silent no-op returning `None` when the game is over or `to` is not among
    /// `legal_moves(from)`.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Option<Move> {
        if self.is_game_over() {
            debug!("apply_move {}{} ignored: game over", from, to);
            return None;
        }
        if !self.legal_moves(from).contains(&to) {
            debug!("apply_move {}{} ignored: not legal", from, to);
            return None;
        }
        let undo = self.make_move(from, to);
        self.evaluate_termination();
        undo.mv()
    }

    /// Recomputes check flags and game termination for the side to move.
    /// Needed after building a position by hand.
    pub fn refresh_status(&mut self) {
        self.update_check_status();
        self.outcome = None;
        self.evaluate_termination();
    }

    fn update_check_status(&mut self) {
        for color in [Color::White, Color::Black] {
            let attacked = match self.find_king(color) {
                Some(king) => rules::is_square_attacked(self, king, color.opponent()),
                None => false,
            };
            self.check.set(color, attacked);
        }
    }

    // Valutata per il lato al tratto (quello che deve rispondere alla mossa appena giocata)
    fn evaluate_termination(&mut self) {
        let side = self.turn;
        let outcome = if self.find_king(side).is_none() {
            Some(Outcome::KingCaptured {
                winner: side.opponent(),
            })
        } else if self.find_king(side.opponent()).is_none() {
            Some(Outcome::KingCaptured { winner: side })
        } else if !self.has_legal_move(side) {
            if self.in_check(side) {
                Some(Outcome::Checkmate {
                    winner: side.opponent(),
                })
            } else {
                Some(Outcome::Stalemate)
            }
        } else {
            None
        };
        if let Some(o) = outcome {
            info!("game over: {:?}", o);
        }
        self.outcome = outcome;
    }

    /// Finds the legal move matching UCI text such as "e2e4" or "e7e8q"
    pub fn find_move(&self, uci: &str) -> Result<Move, MoveParseError> {
        if uci.len() < 4 || !uci.is_char_boundary(2) || !uci.is_char_boundary(4) {
            return Err(MoveParseError::TooShort(uci.to_string()));
        }
        let from: Square = uci[0..2].parse()?;
        let to: Square = uci[2..4].parse()?;
        self.all_legal_moves()
            .into_iter()
            .find(|m| m.from == from && m.to == to)
            .ok_or_else(|| MoveParseError::Illegal(uci.to_string()))
    }

    /// Leaf node count of the legal move tree
    pub fn perft(&self, depth: u8) -> u64 {
        let mut board = *self;
        perft_inner(&mut board, depth)
    }
}

fn perft_inner(board: &mut Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut moves = Vec::with_capacity(64);
    board.generate_moves(board.turn, &mut moves);
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0;
    for mv in moves {
        let undo = board.make_move(mv.from, mv.to);
        nodes += perft_inner(board, depth - 1);
        board.unmake_move(undo);
    }
    nodes
}

// Helper conversioni FEN
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

impl Board {
    /// Reads piece placement and side to move.
    ///
    /// Castling, en-passant and clock fields are optional and ignored. Pawns off
    /// their starting row are marked as moved. Status is recomputed.
    pub fn from_fen(fen: &str) -> Result<Board, FenError> {
        let mut parts = fen.split_whitespace();
        let placement = parts.next().ok_or(FenError::MissingField("placement"))?;
        let side = parts.next().ok_or(FenError::MissingField("side to move"))?;

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }

        let mut board = Board::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for ch in rank.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    // Solo 1..=8: "0" o "9" non sono corse di case vuote valide
                    if !(1..=8).contains(&skip) {
                        return Err(FenError::InvalidPiece(ch));
                    }
                    col += skip as usize;
                    continue;
                }
                let mut piece = Piece::from_fen_char(ch).ok_or(FenError::InvalidPiece(ch))?;
                if col >= 8 {
                    return Err(FenError::RankWidth {
                        rank: 8 - row,
                        files: col + 1,
                    });
                }
                let sq = Square::at(row as u8, col as u8);
                if piece.kind == PieceKind::Pawn && sq.row() != piece.color.pawn_start_row() {
                    piece.has_moved = true;
                }
                board.set_piece(sq, Some(piece));
                col += 1;
            }
            if col != 8 {
                return Err(FenError::RankWidth {
                    rank: 8 - row,
                    files: col,
                });
            }
        }

        board.turn = match side {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidSide(other.to_string())),
        };
        board.refresh_status();
        Ok(board)
    }

    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(80);
        for row in 0..8u8 {
            let mut empty = 0;
            for col in 0..8u8 {
                match self.piece_at(Square::at(row, col)) {
                    Some(p) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(p.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if row < 7 {
                fen.push('/');
            }
        }
        let side = match self.turn {
            Color::White => 'w',
            Color::Black => 'b',
        };
        fen.push(' ');
        fen.push(side);
        fen.push_str(" - - 0 1");
        fen
    }
}

// Simple display
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                match self.piece_at(Square::at(row, col)) {
                    Some(p) => write!(f, "{} ", p.fen_char())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn square_notation_matches_rows() {
        assert_eq!(sq("a8"), Square::new(0, 0).unwrap());
        assert_eq!(sq("h1"), Square::new(7, 7).unwrap());
        assert_eq!(sq("e2").to_string(), "e2");
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
        assert!("i9".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
    }

    #[test]
    fn start_position_layout() {
        let board = Board::new_game();
        assert_eq!(board.turn(), Color::White);
        assert_eq!(board.find_king(Color::White), Some(sq("e1")));
        assert_eq!(board.find_king(Color::Black), Some(sq("e8")));
        assert_eq!(
            board.piece_at(sq("d1")),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
        assert_eq!(board.pieces(Color::Black).count(), 16);
        assert!(!board.is_game_over());
        assert_eq!(board.to_fen(), START_FEN);
    }

    #[test]
    fn fen_round_trip_keeps_placement() {
        let fen = "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w - - 0 1";
        let board = Board::from_fen(fen).unwrap();
        assert_eq!(board.to_fen(), fen);
        assert_eq!(Board::from_fen(START_FEN).unwrap(), Board::new_game());
    }

    #[test]
    fn fen_errors_are_reported() {
        assert_eq!(Board::from_fen(""), Err(FenError::MissingField("placement")));
        assert!(matches!(
            Board::from_fen("8/8/8 w"),
            Err(FenError::RankCount(3))
        ));
        assert!(matches!(
            Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w"),
            Err(FenError::InvalidPiece('X'))
        ));
        assert!(matches!(
            Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x"),
            Err(FenError::InvalidSide(_))
        ));
    }

    #[test]
    fn fen_rejects_zero_and_oversized_runs() {
        assert_eq!(
            Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN0R w"),
            Err(FenError::InvalidPiece('0'))
        );
        assert_eq!(
            Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/9 w"),
            Err(FenError::InvalidPiece('9'))
        );
        assert_eq!(
            Board::from_fen("4k3/8/8/8/8/8/8/44K w"),
            Err(FenError::RankWidth { rank: 1, files: 9 })
        );
        assert_eq!(
            Board::from_fen("4k3/8/8/8/8/8/8/4K2 w"),
            Err(FenError::RankWidth { rank: 1, files: 7 })
        );
    }

    #[test]
    fn piece_symbols_and_fen_letters() {
        let white_king = Piece::new(Color::White, PieceKind::King);
        let black_pawn = Piece::new(Color::Black, PieceKind::Pawn);
        assert_eq!(white_king.symbol(), '♔');
        assert_eq!(black_pawn.symbol(), '♟');
        assert_eq!(Piece::new(Color::Black, PieceKind::Queen).symbol(), '♛');
        assert_eq!(white_king.fen_char(), 'K');
        assert_eq!(black_pawn.fen_char(), 'p');
        for ch in "PNBRQKpnbrqk".chars() {
            assert_eq!(Piece::from_fen_char(ch).unwrap().fen_char(), ch);
        }
        assert!(Piece::from_fen_char('x').is_none());
    }

    #[test]
    fn make_unmake_restores_board() {
        let mut board = Board::new_game();
        let original = board;
        for mv in original.all_legal_moves() {
            let undo = board.make_move(mv.from, mv.to);
            assert_ne!(board, original);
            board.unmake_move(undo);
            assert_eq!(board, original, "make/unmake mismatch for {}", mv);
        }
    }

    #[test]
    fn apply_move_flips_turn_and_marks_moved() {
        let mut board = Board::new_game();
        let mv = board.apply_move(sq("e2"), sq("e4")).unwrap();
        assert_eq!(mv.piece.kind, PieceKind::Pawn);
        assert!(!mv.piece.has_moved);
        assert_eq!(board.turn(), Color::Black);
        assert!(board.piece_at(sq("e4")).unwrap().has_moved);
        assert!(board.piece_at(sq("e2")).is_none());
    }

    #[test]
    fn illegal_apply_is_a_no_op() {
        let mut board = Board::new_game();
        let before = board;
        assert!(board.apply_move(sq("e2"), sq("e5")).is_none());
        assert!(board.apply_move(sq("e7"), sq("e5")).is_none());
        assert!(board.apply_move(sq("e4"), sq("e5")).is_none());
        assert_eq!(board, before);
    }

    #[test]
    fn legal_moves_empty_for_wrong_side_or_empty_square() {
        let board = Board::new_game();
        assert!(board.legal_moves(sq("e7")).is_empty());
        assert!(board.legal_moves(sq("e4")).is_empty());
        assert_eq!(board.legal_moves(sq("g1")).len(), 2);
    }

    #[test]
    fn promotion_is_always_a_queen() {
        let mut board = Board::from_fen("7k/P7/8/8/8/8/8/K7 w").unwrap();
        let mv = board.apply_move(sq("a7"), sq("a8")).unwrap();
        assert!(mv.is_promotion());
        assert_eq!(mv.to_uci(), "a7a8q");
        let queen = board.piece_at(sq("a8")).unwrap();
        assert_eq!(queen.kind, PieceKind::Queen);
        assert_eq!(queen.color, Color::White);
        // The new queen checks along the eighth rank
        assert!(board.in_check(Color::Black));
    }

    #[test]
    fn check_flags_follow_the_position() {
        let mut board = Board::new_game();
        for uci in ["e2e4", "f7f6", "d1h5"] {
            let mv = board.find_move(uci).unwrap();
            board.apply_move(mv.from, mv.to).unwrap();
        }
        assert!(board.in_check(Color::Black));
        assert!(!board.in_check(Color::White));
        assert!(!board.is_game_over());
    }

    #[test]
    fn find_move_rejects_bad_text() {
        let board = Board::new_game();
        assert!(matches!(board.find_move("e2"), Err(MoveParseError::TooShort(_))));
        assert!(matches!(board.find_move("z2e4"), Err(MoveParseError::Square(_))));
        assert!(matches!(board.find_move("e2e5"), Err(MoveParseError::Illegal(_))));
        assert_eq!(board.find_move("g1f3").unwrap().to, sq("f3"));
    }

    #[test]
    fn missing_king_ends_the_game() {
        let mut board = Board::empty();
        board.set_piece(sq("e1"), Some(Piece::new(Color::White, PieceKind::King)));
        board.set_piece(sq("a2"), Some(Piece::new(Color::White, PieceKind::Pawn)));
        board.set_turn(Color::Black);
        board.refresh_status();
        assert_eq!(board.outcome(), Some(Outcome::KingCaptured { winner: Color::White }));
        assert!(board.all_legal_moves().is_empty());
    }
}
