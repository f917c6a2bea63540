//! Contains implementations of the `Game` trait for concrete games.

/// The game of Tic-Tac-Toe: the board itself and the adapter the strategies search with.
pub mod tic_tac_toe;
