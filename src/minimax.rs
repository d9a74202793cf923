//! Minimax scoring of a [`SearchTree`]
//!
//! # Scores
//! Scores are given from the point of view of the player moving at the root.
//! `1.0` is a win and `0.0` a loss. Positions that the endgame table does not
//! cover score [`UNKNOWN`], so a proven win is preferred to an unknown
//! position and an unknown position to a proven loss.

use crate::{board::BoardState, tree::*};

pub type Score = f32;

pub const WIN: Score = 1.0;
pub const LOSS: Score = 0.0;
/// Score of a depth-bound position outside the endgame table
pub const UNKNOWN: Score = 0.5;

/// Scores `id` and every node below it
///
/// Each level down flips `maximizing`. Inner nodes take the maximum of their
/// children's scores when maximizing and the minimum otherwise; leaves are
/// scored by [`leaf_score`].
pub fn evaluate(tree: &mut SearchTree, id: NodeId, maximizing: bool) -> Score {
    let num_children = tree.node(id).children().len();

    let score = if num_children == 0 {
        leaf_score(tree.node(id).state(), maximizing)
    } else {
        let mut best = if maximizing {
            Score::NEG_INFINITY
        } else {
            Score::INFINITY
        };
        for i in 0..num_children {
            let child = tree.node(id).children()[i];
            let child_score = evaluate(tree, child, !maximizing);
            best = if maximizing {
                best.max(child_score)
            } else {
                best.min(child_score)
            };
        }
        best
    };

    tree.node_mut(id).score = Some(score);
    score
}

/// Scores a node with no children, either an empty board or a depth-bound position
pub fn leaf_score(state: &BoardState, maximizing: bool) -> Score {
    if state.is_empty() {
        terminal_score(maximizing)
    } else {
        heuristic_score(state, maximizing)
    }
}

/// Scores an empty board
///
/// The previous player took the last token, so the side about to move has won.
pub fn terminal_score(maximizing: bool) -> Score {
    if maximizing {
        WIN
    } else {
        LOSS
    }
}

/// Whether the player about to move in `state` wins, if the position is small
/// enough to be covered by the endgame table
pub fn endgame_table(state: &BoardState) -> Option<bool> {
    let total = state.total_tokens();
    match state.non_empty_count() {
        // take all but one token
        1 => Some(total != 1),
        // leave a single token in one of the bins
        2 if total == 2 || total == 3 => Some(true),
        // two and two loses, three and one wins
        2 if total == 4 => Some(state.bins().first() != Some(&2)),
        3 => match total {
            3 => Some(false),
            4 | 5 => Some(true),
            _ => None,
        },
        _ => None,
    }
}

/// Scores a depth-bound, non-empty position with the endgame table
pub fn heuristic_score(state: &BoardState, maximizing: bool) -> Score {
    match endgame_table(state) {
        Some(mover_wins) => {
            if mover_wins == maximizing {
                WIN
            } else {
                LOSS
            }
        }
        None => UNKNOWN,
    }
}
