use rand::rngs::StdRng;
use rand::SeedableRng;
use scacchiera::board::{Board, Color};
use scacchiera::rules::is_square_attacked;
use scacchiera::search::random_move;
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Position, Role};

fn our_moves(board: &Board) -> Vec<String> {
    let mut v: Vec<String> = board.all_legal_moves().iter().map(|m| m.to_uci()).collect();
    v.sort();
    v
}

/// shakmaty's legal moves without under-promotions; `None` if shakmaty rejects the position
fn oracle_moves(board: &Board) -> Option<Vec<String>> {
    let fen: Fen = board.to_fen().parse().ok()?;
    let pos: Chess = fen.into_position(CastlingMode::Standard).ok()?;
    let mut v: Vec<String> = pos
        .legal_moves()
        .iter()
        .filter(|m| matches!(m.promotion(), None | Some(Role::Queen)))
        .map(|m| m.to_uci(CastlingMode::Standard).to_string())
        .collect();
    v.sort();
    Some(v)
}

#[test]
fn legal_sets_match_oracle() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1",
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w - - 0 1",
        "4k3/8/8/8/1b6/8/3P4/4K3 w - - 0 1",
        "4k3/1P6/8/8/8/8/6p1/4K3 b - - 0 1",
        "4k3/8/8/8/8/8/8/4RK2 b - - 0 1",
        "r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1",
        "3qk3/8/8/1B6/8/8/8/4K3 b - - 0 1",
    ];
    for fen in fens {
        let board = Board::from_fen(fen).unwrap();
        let expected = oracle_moves(&board).unwrap();
        assert_eq!(our_moves(&board), expected, "{}", fen);
    }
}

#[test]
fn random_games_stay_in_sync_with_oracle() {
    for seed in 0..4u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new_game();
        for _ in 0..80 {
            if board.is_game_over() {
                break;
            }
            if let Some(expected) = oracle_moves(&board) {
                assert_eq!(our_moves(&board), expected, "seed {} fen {}", seed, board.to_fen());
            }
            let mv = random_move(&board, &mut rng).unwrap();
            assert!(board.apply_move(mv.from, mv.to).is_some());
        }
    }
}

#[test]
fn no_move_leaves_own_king_attacked() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut board = Board::new_game();
    for _ in 0..120 {
        if board.is_game_over() {
            break;
        }
        let mover = board.turn();
        for mv in board.all_legal_moves() {
            let mut after = board;
            after.make_move(mv.from, mv.to);
            let king = after.find_king(mover).unwrap();
            assert!(
                !is_square_attacked(&after, king, mover.opponent()),
                "{} leaves the {} king attacked in {}",
                mv,
                mover,
                board.to_fen()
            );
        }
        let mv = random_move(&board, &mut rng).unwrap();
        board.apply_move(mv.from, mv.to);
        assert!(!board.in_check(mover));
    }
}

#[test]
fn check_flags_follow_king_attacks() {
    let mut board = Board::new_game();
    for uci in ["e2e4", "f7f6", "d1h5"] {
        let mv = board.find_move(uci).unwrap();
        board.apply_move(mv.from, mv.to);
    }
    assert!(board.in_check(Color::Black));
    assert!(!board.in_check(Color::White));
    assert!(!board.is_game_over());
    // only g7-g6 blocks; the king cannot move to f7 (attacked by the queen)
    assert_eq!(our_moves(&board), vec!["g7g6".to_string()]);
}
