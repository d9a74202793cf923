use thiserror::Error;

/// Errors reported by the decision engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid board: bin {index} holds {value} tokens, counts must not be negative")]
    InvalidState { index: usize, value: i64 },

    #[error("invalid search depth {depth}, depth must not be negative")]
    InvalidParameter { depth: i32 },

    #[error("no legal move available from {board}")]
    NoLegalMove { board: String },

    #[error("could not parse '{token}' as a bin count")]
    Parse { token: String },
}
