#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use ttt_search::SearchError;
use ttt_search::boards::tic_tac_toe::{Mark, TicTacToe, TicTacToeBoard};
use ttt_search::game::{Game, Score, Side};

pub fn board(s: &str) -> TicTacToeBoard {
    s.parse().unwrap()
}

/// Plays `picks` from the empty board, X first, each pick indexing the empty cells.
pub fn play(picks: &[usize]) -> TicTacToeBoard {
    let mut b = TicTacToeBoard::default();
    let mut mark = Mark::X;
    for &pick in picks {
        let empty: Vec<usize> = b.empty_cells().collect();
        if empty.is_empty() {
            break;
        }
        b.place(empty[pick % empty.len()], mark).unwrap();
        mark = mark.other();
    }
    b
}

/// Counts how often the search calls into the adapter.
#[derive(Debug, Default)]
pub struct CountingGame {
    pub inner: TicTacToe,
    pub game_over_calls: Cell<u64>,
    pub evaluations: Cell<u64>,
    pub children_calls: Cell<u64>,
}

impl CountingGame {
    pub fn new(inner: TicTacToe) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }
}

impl Game for CountingGame {
    type Position = TicTacToeBoard;

    fn is_game_over(&self, position: &TicTacToeBoard) -> Result<bool, SearchError> {
        self.game_over_calls.set(self.game_over_calls.get() + 1);
        self.inner.is_game_over(position)
    }

    fn evaluate_position(&self, position: &TicTacToeBoard) -> Result<Score, SearchError> {
        self.evaluations.set(self.evaluations.get() + 1);
        self.inner.evaluate_position(position)
    }

    fn get_children(
        &self,
        position: &TicTacToeBoard,
        side: Side,
    ) -> Result<Vec<TicTacToeBoard>, SearchError> {
        self.children_calls.set(self.children_calls.get() + 1);
        self.inner.get_children(position, side)
    }
}

/// Fails to evaluate any position where the bot has marked `poisoned_cell`.
#[derive(Debug, Clone, Copy)]
pub struct FaultyGame {
    pub inner: TicTacToe,
    pub poisoned_cell: usize,
}

impl Game for FaultyGame {
    type Position = TicTacToeBoard;

    fn is_game_over(&self, position: &TicTacToeBoard) -> Result<bool, SearchError> {
        self.inner.is_game_over(position)
    }

    fn evaluate_position(&self, position: &TicTacToeBoard) -> Result<Score, SearchError> {
        if position.get(self.poisoned_cell) == Some(self.inner.mark_of(Side::Bot)) {
            return Err(SearchError::Adapter {
                operation: "evaluate_position",
                message: format!("cell {} is poisoned", self.poisoned_cell),
            });
        }
        self.inner.evaluate_position(position)
    }

    fn get_children(
        &self,
        position: &TicTacToeBoard,
        side: Side,
    ) -> Result<Vec<TicTacToeBoard>, SearchError> {
        self.inner.get_children(position, side)
    }
}

/// Picks the mark for children by comparing the position with a live board, ignoring the side
/// it is told: the bot's mark if they are equal, the player's otherwise.
#[derive(Debug, Default)]
pub struct TurnInferringGame {
    pub inner: TicTacToe,
    pub live: RefCell<TicTacToeBoard>,
}

impl Game for TurnInferringGame {
    type Position = TicTacToeBoard;

    fn is_game_over(&self, position: &TicTacToeBoard) -> Result<bool, SearchError> {
        self.inner.is_game_over(position)
    }

    fn evaluate_position(&self, position: &TicTacToeBoard) -> Result<Score, SearchError> {
        self.inner.evaluate_position(position)
    }

    fn get_children(
        &self,
        position: &TicTacToeBoard,
        _side: Side,
    ) -> Result<Vec<TicTacToeBoard>, SearchError> {
        let inferred = if *position == *self.live.borrow() {
            Side::Bot
        } else {
            Side::Player
        };
        self.inner.get_children(position, inferred)
    }
}
