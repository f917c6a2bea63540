use crate::error::SearchError;

/// A position's value from the bot's point of view. Higher is better for the maximizing side.
pub type Score = i32;

/// The bot has a winning line.
pub const BOT_WIN: Score = 1;
/// Neither side has a winning line.
pub const DRAW: Score = 0;
/// The player has a winning line.
pub const PLAYER_WIN: Score = -1;

/// Stands in for negative infinity as the initial alpha.
pub const SCORE_MIN: Score = Score::MIN;
/// Stands in for positive infinity as the initial beta.
pub const SCORE_MAX: Score = Score::MAX;

/// One of the two sides of the game.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Side {
    /// The automated opponent. Always the maximizing side.
    Bot,
    /// The human (or any other) opponent of the bot. Always the minimizing side.
    Player,
}

impl Side {
    /// Returns the side that moves when the search is at a maximizing (`true`) or minimizing level.
    pub fn from_maximizing(maximizing_player: bool) -> Self {
        if maximizing_player {
            Side::Bot
        } else {
            Side::Player
        }
    }

    /// The side moving after `self`.
    pub fn opponent(self) -> Self {
        match self {
            Side::Bot => Side::Player,
            Side::Player => Side::Bot,
        }
    }

    pub fn is_maximizing(self) -> bool {
        self == Side::Bot
    }
}

/// The central trait of the library: the game-state adapter the search strategies run against.
///
/// Every operation is read-only with respect to both the adapter and the position it is given,
/// and the position passed in is always authoritative. In particular, `get_children` is told
/// explicitly which side is to move and must never infer it from state held by the adapter.
pub trait Game {
    /// A complete snapshot of the game state.
    type Position: Clone;

    /// Returns `true` if the search must not recurse below `position`.
    fn is_game_over(&self, position: &Self::Position) -> Result<bool, SearchError>;

    /// Scores `position` for the bot: [`BOT_WIN`], [`PLAYER_WIN`] or [`DRAW`].
    ///
    /// Must be callable on any position, terminal or not.
    fn evaluate_position(&self, position: &Self::Position) -> Result<Score, SearchError>;

    /// Returns one new, independent position per legal move of `side`.
    ///
    /// The sequence must be finite and stable between calls: its order decides which of
    /// several equally scored moves a caller picks first.
    fn get_children(
        &self,
        position: &Self::Position,
        side: Side,
    ) -> Result<Vec<Self::Position>, SearchError>;
}
