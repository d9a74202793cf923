//! A computer player for the token-removal game 'Don't Take The Last Token'
//!
//! Tokens sit in a fixed number of bins. A move removes one or more tokens
//! from a single bin, and whoever empties the last bin loses. This agent
//! builds a depth-limited game tree from a position, scores it with minimax
//! and picks the best immediate move.
//!
//! # Basic Usage
//!
//! ```
//! use last_token_ai::{board::BoardState, solver::Solver};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board: BoardState = "1 2".parse()?;
//! let mut solver = Solver::new(board, 4)?;
//! let best_move = solver.solve()?;
//!
//! // leave a single token for the opponent
//! assert_eq!(best_move.bins(), &[1, 0]);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod board;

pub mod tree;

pub mod minimax;

pub mod solver;


pub use board::BoardState;
pub use error::EngineError;
pub use solver::Solver;

/// The bin contents of a freshly set up game
pub const DEFAULT_BINS: [u32; 3] = [3, 4, 5];

/// Search depth used by an easy computer player
pub const EASY_DEPTH: i32 = 1;
/// Search depth used by a medium computer player
pub const MEDIUM_DEPTH: i32 = 2;
/// Search depth used by a hard computer player
pub const HARD_DEPTH: i32 = 4;

/// Sum of `bins`, usable in constant expressions
pub const fn count_tokens(bins: &[u32]) -> u64 {
    let mut total = 0;
    let mut i = 0;
    while i < bins.len() {
        total += bins[i] as u64;
        i += 1;
    }
    total
}

// a new game must have something to take
const_assert!(DEFAULT_BINS.len() > 0);
const_assert!(count_tokens(&DEFAULT_BINS) > 0);

// harder players always look further ahead
const_assert!(EASY_DEPTH >= 1);
const_assert!(EASY_DEPTH < MEDIUM_DEPTH && MEDIUM_DEPTH < HARD_DEPTH);
