//! An agent to pick moves in 'Don't Take The Last Token'

use crate::{board::*, error::EngineError, minimax::*, tree::*};

/// Returns the board left by the best scored move from the root of `tree`
///
/// Children are scanned left to right and the first one holding the highest
/// score wins, so ties always resolve the same way. Children that have not
/// been scored rank below every scored child.
pub fn select_best_move(tree: &SearchTree) -> Result<BoardState, EngineError> {
    let mut best: Option<(Score, NodeId)> = None;
    for &child in tree.root().children() {
        let score = tree.node(child).score().unwrap_or(Score::NEG_INFINITY);
        match best {
            Some((best_score, _)) if score <= best_score => {}
            _ => best = Some((score, child)),
        }
    }

    match best {
        Some((_, child)) => Ok(tree.node(child).state().clone()),
        None => Err(EngineError::NoLegalMove {
            board: tree.root().state().to_string(),
        }),
    }
}

/// Chooses the next board for the player about to move from `board`,
/// searching `depth_limit` moves ahead
pub fn choose_move(board: BoardState, depth_limit: i32) -> Result<BoardState, EngineError> {
    Solver::new(board, depth_limit)?.solve()
}

/// An agent to choose moves with a depth-limited minimax search
///
/// # Notes
/// Every call builds a fresh tree from the current board, expands it fully to
/// the depth limit (no pruning, no caching between calls), scores it with
/// minimax and keeps the best child of the root. Empty boards found before the
/// depth limit are scored exactly, anything cut off by the limit is scored
/// with a small endgame table (see [`crate::minimax`]).
#[derive(Clone, Debug)]
pub struct Solver {
    board: BoardState,
    depth_limit: i32,

    /// The number of nodes built by this `Solver` so far (for diagnostics only)
    pub node_count: usize,
    /// The score of the root after the last search
    pub score: Option<Score>,
}

impl Solver {
    /// Creates a new `Solver` for `board`, looking `depth_limit` moves ahead
    pub fn new(board: BoardState, depth_limit: i32) -> Result<Self, EngineError> {
        if depth_limit < 0 {
            return Err(EngineError::InvalidParameter { depth: depth_limit });
        }
        Ok(Self {
            board,
            depth_limit,
            node_count: 0,
            score: None,
        })
    }

    pub fn depth_limit(&self) -> i32 {
        self.depth_limit
    }

    /// Builds and scores the search tree for the current board
    pub fn search(&mut self) -> Result<SearchTree, EngineError> {
        if self.board.is_empty() {
            return Err(EngineError::NoLegalMove {
                board: self.board.to_string(),
            });
        }
        let mut tree = SearchTree::build(self.board.clone(), self.depth_limit)?;
        self.node_count += tree.len();

        // the root belongs to the player about to move
        self.score = Some(evaluate(&mut tree, SearchTree::ROOT, true));
        Ok(tree)
    }

    /// Calculates the best next board
    pub fn solve(&mut self) -> Result<BoardState, EngineError> {
        self._solve(true)
    }

    /// Calculates the best next board, logging progress to stdout
    pub fn solve_verbose(&mut self) -> Result<BoardState, EngineError> {
        self._solve(false)
    }

    fn _solve(&mut self, silent: bool) -> Result<BoardState, EngineError> {
        let tree = self.search()?;

        if !silent {
            println!(
                "Search depth: {}, nodes: {}, root moves: {}",
                tree.depth_limit(),
                tree.len(),
                tree.root().children().len()
            );
        }

        let best_move = select_best_move(&tree)?;

        if !silent {
            println!(
                "Root score: {:.1}, best move: {} -> {}",
                self.score.unwrap_or(UNKNOWN),
                self.board,
                best_move
            );
        }
        Ok(best_move)
    }
}

impl std::ops::Deref for Solver {
    type Target = BoardState;

    fn deref(&self) -> &Self::Target {
        &self.board
    }
}
