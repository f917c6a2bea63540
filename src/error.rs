//! Error types for the search engine and the game flow around it.

use thiserror::Error;

/// A failure while evaluating a position.
///
/// Strategies never let this escape their public `evaluate*` methods: it is
/// logged and reported as a neutral score instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SearchError {
    #[error("malformed position: {reason}")]
    MalformedPosition { reason: String },

    #[error("game adapter failed during {operation}: {message}")]
    Adapter {
        operation: &'static str,
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

/// A rejected action in an interactive game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("cell {cell} is out of range (expected 0..9)")]
    OutOfRange { cell: usize },

    #[error("cell {cell} is already occupied")]
    Occupied { cell: usize },

    #[error("game already over")]
    GameOver,

    #[error(transparent)]
    Search(#[from] SearchError),
}
