use crate::error::SearchError;
use crate::game::{Game, SCORE_MAX, SCORE_MIN, Score, Side};
use crate::strategy::{Bounds, FailurePolicy, SearchStats, Strategy, guard_frame};
use std::cmp::{max, min};

/// Full-width minimax search.
///
/// Visits every position of the depth-bounded game tree. For a fixed position, depth and side
/// to move, and a deterministic adapter, the result is always the same.
#[derive(Debug, Clone)]
pub struct Minimax<G: Game> {
    game: G,
}

impl<G: Game> Minimax<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    fn minimax(
        &self,
        position: &G::Position,
        depth: u32,
        maximizing_player: bool,
        policy: FailurePolicy,
        stats: &mut SearchStats,
    ) -> Result<Score, SearchError> {
        stats.nodes += 1;
        if depth == 0 || self.game.is_game_over(position)? {
            stats.leaves += 1;
            return self.game.evaluate_position(position);
        }

        let children = self
            .game
            .get_children(position, Side::from_maximizing(maximizing_player))?;
        // A side without a move is scored where it stands.
        if children.is_empty() {
            stats.leaves += 1;
            return self.game.evaluate_position(position);
        }

        let mut best = if maximizing_player {
            SCORE_MIN
        } else {
            SCORE_MAX
        };
        for child in &children {
            let value = self.search(
                child,
                depth - 1,
                !maximizing_player,
                Bounds::FULL,
                policy,
                stats,
            )?;
            best = if maximizing_player {
                max(best, value)
            } else {
                min(best, value)
            };
        }
        Ok(best)
    }
}

impl<G: Game> Strategy for Minimax<G> {
    type G = G;

    fn game(&self) -> &G {
        &self.game
    }

    fn name(&self) -> &'static str {
        "minimax"
    }

    fn search(
        &self,
        position: &G::Position,
        depth: u32,
        maximizing_player: bool,
        _bounds: Bounds,
        policy: FailurePolicy,
        stats: &mut SearchStats,
    ) -> Result<Score, SearchError> {
        let result = self.minimax(position, depth, maximizing_player, policy, stats);
        guard_frame(self.name(), policy, result)
    }
}
