//! scacchiera command line: self-play, move suggestion and static evaluation.

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use scacchiera::board::{Board, Color, START_FEN};
use scacchiera::eval::{evaluate, EvalTier, EvalWeights};
use scacchiera::search::{select_move, Difficulty, Search, Strategy};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Let two selectors play each other from the start position
    Selfplay {
        #[arg(short, long, default_value_t = Difficulty::Medium)]
        white: Difficulty,

        #[arg(short, long, default_value_t = Difficulty::Hard)]
        black: Difficulty,

        /// Stop after this many plies if the game is still running
        #[arg(short, long, default_value_t = 200)]
        max_plies: u32,

        /// RNG seed for reproducible games
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Print the move a selector picks in a position
    Bestmove {
        #[arg(short, long, default_value_t = String::from(START_FEN))]
        fen: String,

        #[arg(short, long, default_value_t = Difficulty::Expert)]
        difficulty: Difficulty,

        #[arg(short, long)]
        seed: Option<u64>,

        /// Print search statistics (minimax difficulties only)
        #[arg(long)]
        stats: bool,
    },

    /// Static evaluation for the side to move
    Eval {
        #[arg(short, long, default_value_t = String::from(START_FEN))]
        fen: String,

        #[arg(short, long, default_value = "full")]
        tier: EvalTier,
    },
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Selfplay {
            white,
            black,
            max_plies,
            seed,
        } => {
            let mut rng = make_rng(seed);
            let mut board = Board::new_game();
            let mut moves = Vec::new();
            for _ in 0..max_plies {
                let difficulty = match board.turn() {
                    Color::White => white,
                    Color::Black => black,
                };
                let Some(mv) = select_move(&board, difficulty, &mut rng) else {
                    break;
                };
                if board.apply_move(mv.from, mv.to).is_none() {
                    break;
                }
                moves.push(mv.to_uci());
            }
            println!("{}", moves.join(" "));
            println!("{}", board);
            match board.outcome() {
                Some(outcome) => println!("Result: {}", outcome),
                None => println!("Result: unfinished after {} plies", moves.len()),
            }
        }

        Command::Bestmove {
            fen,
            difficulty,
            seed,
            stats,
        } => {
            let board = Board::from_fen(&fen)?;
            let mut rng = make_rng(seed);
            match difficulty.strategy() {
                Strategy::Minimax(params) => {
                    let mut search = Search::new(&board, params);
                    match search.search() {
                        Some(result) => println!("bestmove {} score {}", result.best_move.to_uci(), result.score),
                        None => println!("bestmove (none)"),
                    }
                    if stats {
                        search.stats().print_summary();
                    }
                }
                _ => match select_move(&board, difficulty, &mut rng) {
                    Some(mv) => println!("bestmove {}", mv.to_uci()),
                    None => println!("bestmove (none)"),
                },
            }
        }

        Command::Eval { fen, tier } => {
            let board = Board::from_fen(&fen)?;
            let weights = EvalWeights::for_tier(tier);
            println!("{}", board);
            println!("Eval ({:?}, {} to move): {}", tier, board.turn(), evaluate(&board, board.turn(), &weights));
        }
    }
    Ok(())
}
