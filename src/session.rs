use crate::boards::tic_tac_toe::{TicTacToe, TicTacToeBoard};
use crate::error::GameError;
use crate::game::Side;
use crate::selector::{Choice, MoveSelector};
use crate::strategy::{AnyStrategy, Strategy};
use log::info;

/// Where a game stands.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Status {
    InProgress,
    Won(Side),
    Draw,
}

/// A game between a player and the bot.
///
/// The session owns the live board. The search only ever sees copies of it.
#[derive(Debug, Clone)]
pub struct Session<S: Strategy<G = TicTacToe> = AnyStrategy<TicTacToe>> {
    board: TicTacToeBoard,
    selector: MoveSelector<S>,
    status: Status,
}

impl<S: Strategy<G = TicTacToe>> Session<S> {
    pub fn new(selector: MoveSelector<S>) -> Self {
        Self {
            board: TicTacToeBoard::default(),
            selector,
            status: Status::InProgress,
        }
    }

    /// Continues a game from `board`.
    pub fn from_board(selector: MoveSelector<S>, board: TicTacToeBoard) -> Self {
        let mut session = Self::new(selector);
        session.board = board;
        session.refresh_status();
        session
    }

    /// Continues a game from a board written out as text, e.g. `"X...O...."`.
    pub fn from_position(selector: MoveSelector<S>, position: &str) -> Result<Self, GameError> {
        let board: TicTacToeBoard = position.parse()?;
        Ok(Self::from_board(selector, board))
    }

    pub fn board(&self) -> &TicTacToeBoard {
        &self.board
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn selector(&self) -> &MoveSelector<S> {
        &self.selector
    }

    /// Marks `cell` for the player, then lets the bot answer unless the game just ended.
    ///
    /// Returns the bot's reply, if it made one.
    pub fn player_move(&mut self, cell: usize) -> Result<Option<Choice>, GameError> {
        self.ensure_in_progress()?;
        let mark = self.selector.game().mark_of(Side::Player);
        self.board.place(cell, mark)?;
        if self.refresh_status() != Status::InProgress {
            return Ok(None);
        }
        self.bot_move()
    }

    /// Same as [`Session::player_move`], addressing the cell by grid coordinates.
    pub fn player_move_at(&mut self, row: usize, col: usize) -> Result<Option<Choice>, GameError> {
        let Some(cell) = TicTacToeBoard::index_of(row, col) else {
            let cell = row.saturating_mul(3).saturating_add(col);
            return Err(GameError::OutOfRange { cell });
        };
        self.player_move(cell)
    }

    /// Lets the bot make a move, e.g. to open the game.
    pub fn bot_move(&mut self) -> Result<Option<Choice>, GameError> {
        self.ensure_in_progress()?;
        let Some(choice) = self.selector.choose_move(&self.board) else {
            return Ok(None);
        };
        let mark = self.selector.game().mark_of(Side::Bot);
        self.board.place(choice.cell, mark)?;
        self.refresh_status();
        Ok(Some(choice))
    }

    /// Clears the board for a new game.
    pub fn reset(&mut self) {
        self.board = TicTacToeBoard::default();
        self.status = Status::InProgress;
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        match self.status {
            Status::InProgress => Ok(()),
            _ => Err(GameError::GameOver),
        }
    }

    fn refresh_status(&mut self) -> Status {
        self.status = match self.selector.game().winner(&self.board) {
            Some(side) => Status::Won(side),
            None if self.board.is_full() => Status::Draw,
            None => Status::InProgress,
        };
        if self.status != Status::InProgress {
            info!("game over: {:?}", self.status);
        }
        self.status
    }
}
