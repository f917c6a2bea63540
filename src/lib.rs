//! Adversarial game-tree search for tic-tac-toe.
//!
//! This library provides two interchangeable search strategies for a two-player, zero-sum,
//! perfect-information game: plain minimax and minimax with alpha-beta pruning. Both run
//! against a small game-state adapter ([`game::Game`]) and agree on every value; alpha-beta
//! only visits fewer positions. A move selector and a game session turn the search into an
//! automated opponent.
//!
//! # Example
//!
//! ```rust
//! use ttt_search::boards::tic_tac_toe::{TicTacToe, TicTacToeBoard};
//! use ttt_search::selector::MoveSelector;
//! use ttt_search::strategy::{Strategy, StrategyKind};
//!
//! // The player plays X, the bot plays O
//! let game = TicTacToe::default();
//!
//! // Choose a strategy and a depth using the builder
//! let selector = MoveSelector::builder(game)
//!     .with_strategy(StrategyKind::AlphaBeta)
//!     .with_depth(8)
//!     .build();
//!
//! // The bot completes its own line
//! let board: TicTacToeBoard = "OO.XX.X..".parse().unwrap();
//! let choice = selector.choose_move(&board).unwrap();
//! assert_eq!(choice.cell, 2);
//!
//! // Or evaluate a position directly, with the bot to move
//! assert_eq!(selector.strategy().evaluate(&board, 1, true), 1);
//! ```

/// Minimax with alpha-beta pruning.
pub mod alpha_beta;
/// Contains pre-made implementations of the `Game` trait.
pub mod boards;
/// Error types.
pub mod error;
/// Contains the `Game` trait the strategies search with, and the score scale.
pub mod game;
/// Full-width minimax.
pub mod minimax;
/// Random opponents.
pub mod random;
/// Picks the bot's move with a strategy.
pub mod selector;
/// A game between a player and the bot.
pub mod session;
/// The `Strategy` trait and strategy selection.
pub mod strategy;

pub use error::{GameError, SearchError};
pub use game::{Game, Score, Side};
pub use strategy::{AnyStrategy, Strategy, StrategyKind};
