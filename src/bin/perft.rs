use clap::Parser;
use scacchiera::board::{Board, START_FEN};
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Position, Role};

#[derive(Parser, Debug)]
#[command(author, version, about = "Move generator node counts", long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = String::from(START_FEN))]
    fen: String,

    #[arg(short, long, default_value_t = 3)]
    depth: u8,

    /// Print the node count below each root move
    #[arg(long)]
    divide: bool,

    /// Cross-check against shakmaty (no castling, no en passant, queen promotions only)
    #[arg(long)]
    verify: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let board = Board::from_fen(&args.fen)?;
    println!("Running perft on FEN: '{}' at depth {}", board.to_fen(), args.depth);

    if args.divide && args.depth > 0 {
        for mv in board.all_legal_moves() {
            let mut child = board;
            child.make_move(mv.from, mv.to);
            println!("{}: {}", mv.to_uci(), child.perft(args.depth - 1));
        }
    }

    let start = std::time::Instant::now();
    let nodes = board.perft(args.depth);
    let duration = start.elapsed();
    println!(
        "perft({}) = {} nodes ({} ms)",
        args.depth,
        nodes,
        duration.as_millis()
    );

    if args.verify {
        // La FEN riesportata non ha diritti di arrocco né casa en-passant
        let fen: Fen = board.to_fen().parse()?;
        let pos: Chess = fen
            .into_position(CastlingMode::Standard)
            .map_err(|e| e.to_string())?;
        let expected = perft_shakmaty(&pos, args.depth);
        if expected == nodes {
            println!("shakmaty agrees: {} nodes", expected);
        } else {
            println!("MISMATCH: shakmaty counts {} nodes, we count {}", expected, nodes);
            std::process::exit(1);
        }
    }
    Ok(())
}

fn perft_shakmaty(pos: &Chess, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0;
    let moves = pos.legal_moves();
    for m in moves.iter().filter(|m| matches!(m.promotion(), None | Some(Role::Queen))) {
        let mut new_pos = pos.clone();
        new_pos.play_unchecked(m);
        nodes += perft_shakmaty(&new_pos, depth - 1);
    }
    nodes
}
