use rand::rngs::StdRng;
use rand::SeedableRng;
use scacchiera::board::{Board, Color, Outcome, Square};
use scacchiera::game::{Game, GameMode};
use scacchiera::search::{select_move, Difficulty};

fn play(game: &mut Game, line: &[&str]) {
    for uci in line {
        let mv = game.board().find_move(uci).unwrap_or_else(|e| panic!("{}: {}", uci, e));
        assert!(game.apply_move(mv.from, mv.to).is_some(), "{} rejected", uci);
    }
}

#[test]
fn fools_mate_ends_the_game() {
    let mut game = Game::new(GameMode::HumanVsHuman);
    play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);

    let state = game.game_state();
    assert!(state.game_over);
    assert_eq!(state.winner, Some(Color::Black));
    assert_eq!(state.outcome, Some(Outcome::Checkmate { winner: Color::Black }));
    assert!(state.check.white);
    assert!(!state.check.black);
    assert_eq!(state.turn, Color::White);
}

#[test]
fn scholars_mate_ends_the_game() {
    let mut game = Game::default();
    play(&mut game, &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"]);
    assert_eq!(game.game_state().winner, Some(Color::White));
    assert_eq!(game.history().len(), 7);
}

#[test]
fn finished_game_rejects_everything() {
    let mut game = Game::default();
    play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    let frozen = *game.board();

    let sq = |s: &str| -> Square { s.parse().unwrap() };
    assert!(game.legal_moves(sq("e1")).is_empty());
    assert!(game.board().all_legal_moves().is_empty());
    assert!(game.apply_move(sq("e1"), sq("f2")).is_none());
    assert!(game.apply_move(sq("a2"), sq("a3")).is_none());

    let mut rng = StdRng::seed_from_u64(5);
    for d in Difficulty::ALL {
        assert!(select_move(game.board(), d, &mut rng).is_none());
    }
    assert_eq!(game.board(), &frozen);
    assert_eq!(game.history().len(), 4);
}

#[test]
fn stalemate_is_a_draw_every_time() {
    // Qf1-f7 leaves the black king on h8 without moves and not in check
    for _ in 0..5 {
        let mut board = Board::from_fen("7k/8/6K1/8/8/8/8/5Q2 w").unwrap();
        assert!(!board.is_game_over());
        let f1 = "f1".parse().unwrap();
        let f7 = "f7".parse().unwrap();
        assert!(board.apply_move(f1, f7).is_some());

        let state = board.game_state();
        assert!(state.game_over);
        assert_eq!(state.winner, None);
        assert_eq!(state.outcome, Some(Outcome::Stalemate));
        assert!(!state.check.black);
        assert!(board.all_legal_moves().is_empty());
    }
}

#[test]
fn loaded_mate_and_stalemate_are_detected() {
    let mated = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b").unwrap();
    assert_eq!(mated.outcome(), Some(Outcome::Checkmate { winner: Color::White }));

    let stalemated = Board::from_fen("k7/2Q5/1K6/8/8/8/8/8 b").unwrap();
    assert_eq!(stalemated.outcome(), Some(Outcome::Stalemate));
    assert_eq!(stalemated.winner(), None);
}

#[test]
fn missing_king_loses() {
    let board = Board::from_fen("8/8/8/8/8/8/8/4K3 b").unwrap();
    assert!(board.is_game_over());
    assert_eq!(board.winner(), Some(Color::White));
    assert_eq!(board.outcome(), Some(Outcome::KingCaptured { winner: Color::White }));
}

#[test]
fn check_is_not_game_over() {
    let mut game = Game::default();
    play(&mut game, &["e2e4", "f7f6", "d1h5"]);
    let state = game.game_state();
    assert!(state.check.black);
    assert!(!state.game_over);
    assert_eq!(state.winner, None);
}

#[test]
fn computer_finishes_a_game_against_itself() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut board = Board::new_game();
    let mut plies = 0;
    while !board.is_game_over() && plies < 300 {
        let d = match board.turn() {
            Color::White => Difficulty::Medium,
            Color::Black => Difficulty::Easy,
        };
        let mv = select_move(&board, d, &mut rng).unwrap();
        assert!(board.apply_move(mv.from, mv.to).is_some());
        plies += 1;
    }
    if let Some(outcome) = board.outcome() {
        assert_eq!(outcome.winner(), board.winner());
        assert!(board.all_legal_moves().is_empty());
    }
}
