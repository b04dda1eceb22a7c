//! Move selectors for scacchiera
//!
//! Random, greedy one-ply and minimax with alpha-beta, dispatched by
//! [`select_move`].

pub mod greedy;
pub mod minimax;
pub mod params;
pub mod selector;
pub mod stats;

pub use self::greedy::{greedy_move, score_move};
pub use self::minimax::{best_move, Search, SearchResult, INFINITE, MATE};
pub use self::params::SearchParams;
pub use self::selector::{random_move, select_move, select_with_strategy, Difficulty, Strategy};
pub use self::stats::SearchStats;
