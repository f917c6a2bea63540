use crate::boards::tic_tac_toe::{TicTacToe, TicTacToeBoard};
use crate::game::{Score, Side};
use crate::strategy::{AnyStrategy, FailurePolicy, SearchStats, Strategy, StrategyKind};
use log::debug;

/// Plies searched below each candidate move unless configured otherwise.
///
/// Eight plies below the bot's first move reach the end of any tic-tac-toe game.
pub const DEFAULT_SEARCH_DEPTH: u32 = 8;

/// The move a [`MoveSelector`] settled on.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Choice {
    /// The cell the bot should mark.
    pub cell: usize,
    /// The search value of the board after the move.
    pub score: Score,
    /// Counters summed over the searches of every candidate.
    pub stats: SearchStats,
}

/// Picks the bot's move by searching below every empty cell with a strategy.
#[derive(Debug, Clone)]
pub struct MoveSelector<S: Strategy<G = TicTacToe>> {
    strategy: S,
    depth: u32,
    policy: FailurePolicy,
}

/// A builder for creating a [`MoveSelector`] over one of the built-in strategies.
#[derive(Debug, Clone)]
pub struct MoveSelectorBuilder {
    game: TicTacToe,
    kind: StrategyKind,
    depth: u32,
    policy: FailurePolicy,
}

impl MoveSelectorBuilder {
    /// Creates a new builder searching with alpha-beta to [`DEFAULT_SEARCH_DEPTH`].
    pub fn new(game: TicTacToe) -> Self {
        Self {
            game,
            kind: StrategyKind::default(),
            depth: DEFAULT_SEARCH_DEPTH,
            policy: FailurePolicy::default(),
        }
    }

    pub fn with_strategy(mut self, kind: StrategyKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets how many plies are searched below each candidate move.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn build(self) -> MoveSelector<AnyStrategy<TicTacToe>> {
        MoveSelector::new(
            AnyStrategy::new(self.kind, self.game),
            self.depth,
            self.policy,
        )
    }
}

impl MoveSelector<AnyStrategy<TicTacToe>> {
    /// Returns a new builder for `MoveSelector`.
    pub fn builder(game: TicTacToe) -> MoveSelectorBuilder {
        MoveSelectorBuilder::new(game)
    }
}

impl<S: Strategy<G = TicTacToe>> MoveSelector<S> {
    pub fn new(strategy: S, depth: u32, policy: FailurePolicy) -> Self {
        Self {
            strategy,
            depth,
            policy,
        }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn game(&self) -> &TicTacToe {
        self.strategy.game()
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Chooses the bot's move on `board`, or `None` if no cell is free.
    ///
    /// Each candidate is placed on a copy of `board` and searched with the player to move.
    /// The highest score wins; among equal scores the lowest cell wins.
    pub fn choose_move(&self, board: &TicTacToeBoard) -> Option<Choice> {
        let bot = self.game().mark_of(Side::Bot);
        let mut total = SearchStats::default();
        let mut best: Option<(usize, Score)> = None;

        for cell in board.empty_cells() {
            let Ok(candidate) = board.with_mark(cell, bot) else {
                continue;
            };
            let (score, stats) = self
                .strategy
                .evaluate_with_stats(&candidate, self.depth, false, self.policy);
            total.nodes += stats.nodes;
            total.leaves += stats.leaves;
            total.cutoffs += stats.cutoffs;
            let name = self.strategy.name();
            debug!("{name} candidate {cell}: score {score}");
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((cell, score));
            }
        }

        let (cell, score) = best?;
        let (name, nodes) = (self.strategy.name(), total.nodes);
        debug!("{name} chose cell {cell} with score {score} after {nodes} nodes");
        Some(Choice {
            cell,
            score,
            stats: total,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::boards::tic_tac_toe::{Mark, TerminalRule, TicTacToe, TicTacToeBoard};
    use crate::selector::{DEFAULT_SEARCH_DEPTH, MoveSelector};
    use crate::strategy::{Strategy, StrategyKind};

    fn board(s: &str) -> TicTacToeBoard {
        s.parse().unwrap()
    }

    #[test]
    fn builder_defaults() {
        let selector = MoveSelector::builder(TicTacToe::default()).build();
        assert_eq!(selector.depth(), DEFAULT_SEARCH_DEPTH);
        assert_eq!(selector.strategy().kind(), StrategyKind::AlphaBeta);
        assert_eq!(selector.game().mark_of(crate::game::Side::Bot), Mark::O);
    }

    #[test]
    fn completes_its_own_line() {
        for kind in StrategyKind::ALL {
            // arrange
            let selector = MoveSelector::builder(TicTacToe::default())
                .with_strategy(kind)
                .build();

            // act
            let choice = selector.choose_move(&board("OO.XX.X..")).unwrap();

            // assert
            assert_eq!(choice.cell, 2, "{kind}");
            assert_eq!(choice.score, 1, "{kind}");
        }
    }

    #[test]
    fn blocks_the_players_line() {
        let game = TicTacToe::default().with_terminal_rule(TerminalRule::DecidedOrFull);
        for kind in StrategyKind::ALL {
            let selector = MoveSelector::builder(game).with_strategy(kind).build();
            let choice = selector.choose_move(&board("..X.OX...")).unwrap();
            assert_eq!(choice.cell, 8, "{kind}");
            assert_eq!(choice.score, 0, "{kind}");
        }
    }

    #[test]
    fn ties_go_to_the_first_cell() {
        // arrange
        let selector = MoveSelector::builder(TicTacToe::default())
            .with_depth(0)
            .build();

        // act
        let choice = selector.choose_move(&TicTacToeBoard::default()).unwrap();

        // assert
        assert_eq!(choice.cell, 0);
        assert_eq!(choice.score, 0);
        assert_eq!(choice.stats.nodes, 9);
    }

    #[test]
    fn no_move_on_a_full_board() {
        let selector = MoveSelector::builder(TicTacToe::default()).build();
        assert_eq!(selector.choose_move(&board("XOXXOOOXX")), None);
    }

    #[test]
    fn pruning_searches_fewer_nodes_for_the_same_move() {
        // arrange
        let b = board("X........");
        let minimax = MoveSelector::builder(TicTacToe::default())
            .with_strategy(StrategyKind::Minimax)
            .build();
        let alpha_beta = MoveSelector::builder(TicTacToe::default()).build();

        // act
        let mm = minimax.choose_move(&b).unwrap();
        let ab = alpha_beta.choose_move(&b).unwrap();

        // assert
        assert_eq!(mm.cell, ab.cell);
        assert_eq!(mm.score, ab.score);
        assert!(ab.stats.nodes < mm.stats.nodes);
    }

    #[test]
    fn leaves_the_board_untouched() {
        let selector = MoveSelector::builder(TicTacToe::default()).build();
        let b = board("X...O...X");
        let before = b;
        selector.choose_move(&b);
        assert_eq!(b, before);
        // and the strategy is reusable afterwards
        assert_eq!(selector.strategy().evaluate(&b, 0, true), 0);
    }
}
