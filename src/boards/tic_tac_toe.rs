use crate::error::{GameError, SearchError};
use crate::game::{BOT_WIN, DRAW, Game, PLAYER_WIN, Score, Side};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Number of cells on the board.
pub const CELLS: usize = 9;

const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A mark a side puts on the board.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl Display for Mark {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A tic-tac-toe position.
///
/// The board is represented by a 9-element array, where each element corresponds to a cell.
/// Cells are indexed row by row from 0 (top left) to 8 (bottom right).
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, Hash)]
pub struct TicTacToeBoard {
    field: [Option<Mark>; CELLS],
}

impl TicTacToeBoard {
    /// Converts grid coordinates to a cell index.
    pub fn index_of(row: usize, col: usize) -> Option<usize> {
        (row < 3 && col < 3).then_some(row * 3 + col)
    }

    /// Converts a cell index to `(row, col)` grid coordinates.
    pub fn coordinates_of(cell: usize) -> Option<(usize, usize)> {
        (cell < CELLS).then_some((cell / 3, cell % 3))
    }

    /// Returns the mark in `cell`, or `None` if the cell is empty or out of range.
    pub fn get(&self, cell: usize) -> Option<Mark> {
        self.field.get(cell).copied().flatten()
    }

    pub fn is_space_free(&self, cell: usize) -> bool {
        matches!(self.field.get(cell), Some(None))
    }

    /// Puts `mark` into an empty cell.
    pub fn place(&mut self, cell: usize, mark: Mark) -> Result<(), GameError> {
        match self.field.get_mut(cell) {
            None => Err(GameError::OutOfRange { cell }),
            Some(Some(_)) => Err(GameError::Occupied { cell }),
            Some(slot) => {
                *slot = Some(mark);
                Ok(())
            }
        }
    }

    /// Empties `cell`. Out-of-range cells are ignored.
    pub fn clear(&mut self, cell: usize) {
        if let Some(slot) = self.field.get_mut(cell) {
            *slot = None;
        }
    }

    /// Returns a copy of the board with `mark` placed into `cell`, leaving `self` untouched.
    ///
    /// Fails like [`TicTacToeBoard::place`] on an occupied or out-of-range cell.
    pub fn with_mark(&self, cell: usize, mark: Mark) -> Result<Self, GameError> {
        let mut copy = *self;
        copy.place(cell, mark)?;
        Ok(copy)
    }

    /// Indices of the empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.field
            .iter()
            .enumerate()
            .filter(|(_, x)| x.is_none())
            .map(|(i, _)| i)
    }

    pub fn is_full(&self) -> bool {
        self.field.iter().all(|x| x.is_some())
    }

    /// Returns `true` if no cell holds a mark.
    pub fn is_empty(&self) -> bool {
        self.field.iter().all(|x| x.is_none())
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.field.iter().filter(|&&x| x == Some(mark)).count()
    }

    /// Returns `true` if `mark` fills at least one row, column or diagonal.
    pub fn has_won(&self, mark: Mark) -> bool {
        WIN_LINES
            .iter()
            .any(|line| line.iter().all(|&cell| self.field[cell] == Some(mark)))
    }

    /// Returns the mark holding a winning line. `X` is reported if both do.
    pub fn winner(&self) -> Option<Mark> {
        [Mark::X, Mark::O]
            .into_iter()
            .find(|&mark| self.has_won(mark))
    }
}

impl Display for TicTacToeBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.field.chunks(3) {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| cell.map_or_else(|| ".".to_string(), |mark| mark.to_string()))
                .collect();
            writeln!(f, "{}", cells.join(" | "))?;
        }
        Ok(())
    }
}

/// Parses nine cells from `X`, `O` and `.`, `-` or a space for an empty cell.
///
/// Line breaks are ignored. Rows split by `|`, as printed by `Display`, are read cell by
/// cell with the padding around each cell trimmed, so the `Display` output parses back.
impl FromStr for TicTacToeBoard {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: String| SearchError::MalformedPosition { reason };
        let symbols: Vec<char> = if s.contains('|') {
            s.lines()
                .filter(|line| !line.trim().is_empty())
                .flat_map(|line| line.split('|'))
                .map(|cell| {
                    let cell = cell.trim();
                    let mut chars = cell.chars();
                    match (chars.next(), chars.next()) {
                        (None, _) => Ok(' '),
                        (Some(c), None) => Ok(c),
                        _ => Err(malformed(format!("cell '{cell}' is too wide in '{s}'"))),
                    }
                })
                .collect::<Result<_, _>>()?
        } else {
            s.chars().filter(|c| !matches!(c, '\n' | '\r')).collect()
        };

        let len = symbols.len();
        if len != CELLS {
            return Err(malformed(format!("expected {CELLS} cells, got {len} in '{s}'")));
        }
        let mut field = [None; CELLS];
        for (slot, symbol) in field.iter_mut().zip(symbols) {
            *slot = match symbol {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '-' | ' ' => None,
                other => {
                    return Err(malformed(format!("unexpected character '{other}' in '{s}'")));
                }
            };
        }
        Ok(Self { field })
    }
}

/// When [`TicTacToe`] treats a position as terminal.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub enum TerminalRule {
    /// Only a full board ends the search. A won board keeps being searched; its score stays
    /// correct because `evaluate_position` detects wins on its own.
    #[default]
    BoardFull,
    /// A board that is full or already has a winning line ends the search.
    DecidedOrFull,
}

/// The tic-tac-toe game adapter.
///
/// Holds which mark belongs to which side and the terminal rule. It holds no board: every
/// query is answered from the position passed in.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct TicTacToe {
    bot: Mark,
    player: Mark,
    terminal_rule: TerminalRule,
}

impl Default for TicTacToe {
    /// The player plays `X`, the bot plays `O`, only a full board is terminal.
    fn default() -> Self {
        Self::with_bot(Mark::O)
    }
}

impl TicTacToe {
    pub fn new(bot: Mark, player: Mark) -> Result<Self, SearchError> {
        if bot == player {
            return Err(SearchError::InvalidConfiguration {
                message: format!("bot and player cannot both play {bot}"),
            });
        }
        Ok(Self::with_bot(bot))
    }

    /// An adapter where the bot plays `bot` and the player the other mark.
    pub fn with_bot(bot: Mark) -> Self {
        Self {
            bot,
            player: bot.other(),
            terminal_rule: TerminalRule::default(),
        }
    }

    pub fn with_terminal_rule(mut self, terminal_rule: TerminalRule) -> Self {
        self.terminal_rule = terminal_rule;
        self
    }

    pub fn terminal_rule(&self) -> TerminalRule {
        self.terminal_rule
    }

    pub fn mark_of(&self, side: Side) -> Mark {
        match side {
            Side::Bot => self.bot,
            Side::Player => self.player,
        }
    }

    /// The side playing `mark`.
    pub fn side_of(&self, mark: Mark) -> Side {
        if mark == self.bot {
            Side::Bot
        } else {
            Side::Player
        }
    }

    /// The side holding a winning line, the bot first if both do.
    pub fn winner(&self, board: &TicTacToeBoard) -> Option<Side> {
        if board.has_won(self.bot) {
            Some(Side::Bot)
        } else if board.has_won(self.player) {
            Some(Side::Player)
        } else {
            None
        }
    }
}

impl Game for TicTacToe {
    type Position = TicTacToeBoard;

    fn is_game_over(&self, board: &TicTacToeBoard) -> Result<bool, SearchError> {
        Ok(match self.terminal_rule {
            TerminalRule::BoardFull => board.is_full(),
            TerminalRule::DecidedOrFull => board.is_full() || self.winner(board).is_some(),
        })
    }

    fn evaluate_position(&self, board: &TicTacToeBoard) -> Result<Score, SearchError> {
        Ok(match self.winner(board) {
            Some(Side::Bot) => BOT_WIN,
            Some(Side::Player) => PLAYER_WIN,
            None => DRAW,
        })
    }

    fn get_children(
        &self,
        board: &TicTacToeBoard,
        side: Side,
    ) -> Result<Vec<TicTacToeBoard>, SearchError> {
        let mark = self.mark_of(side);
        let mut children = Vec::new();
        for cell in board.empty_cells() {
            let child = board
                .with_mark(cell, mark)
                .map_err(|err| SearchError::Adapter {
                    operation: "get_children",
                    message: err.to_string(),
                })?;
            children.push(child);
        }
        Ok(children)
    }
}
