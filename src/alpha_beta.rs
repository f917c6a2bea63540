use crate::error::SearchError;
use crate::game::{Game, SCORE_MAX, SCORE_MIN, Score, Side};
use crate::strategy::{Bounds, FailurePolicy, SearchStats, Strategy, guard_frame};
use log::trace;
use std::cmp::{max, min};

/// Minimax search with alpha-beta pruning.
///
/// Returns exactly the value [`Minimax`](crate::minimax::Minimax) returns for the same inputs
/// when started from [`Bounds::FULL`], while visiting a subset of its nodes. The search is
/// fail-soft: on a cutoff the best score found so far is returned.
#[derive(Debug, Clone)]
pub struct AlphaBeta<G: Game> {
    game: G,
}

impl<G: Game> AlphaBeta<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    fn alpha_beta(
        &self,
        position: &G::Position,
        depth: u32,
        maximizing_player: bool,
        bounds: Bounds,
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
        if children.is_empty() {
            stats.leaves += 1;
            return self.game.evaluate_position(position);
        }

        let Bounds {
            mut alpha,
            mut beta,
        } = bounds;

        if maximizing_player {
            let mut max_eval = SCORE_MIN;
            for (i, child) in children.iter().enumerate() {
                let eval = self.search(
                    child,
                    depth - 1,
                    false,
                    Bounds::new(alpha, beta),
                    policy,
                    stats,
                )?;
                max_eval = max(max_eval, eval);
                alpha = max(alpha, eval);
                if beta <= alpha {
                    record_cutoff(stats, depth, children.len() - i - 1);
                    break;
                }
            }
            Ok(max_eval)
        } else {
            let mut min_eval = SCORE_MAX;
            for (i, child) in children.iter().enumerate() {
                let eval = self.search(
                    child,
                    depth - 1,
                    true,
                    Bounds::new(alpha, beta),
                    policy,
                    stats,
                )?;
                min_eval = min(min_eval, eval);
                beta = min(beta, eval);
                if beta <= alpha {
                    record_cutoff(stats, depth, children.len() - i - 1);
                    break;
                }
            }
            Ok(min_eval)
        }
    }
}

fn record_cutoff(stats: &mut SearchStats, depth: u32, skipped: usize) {
    if skipped > 0 {
        stats.cutoffs += 1;
        trace!("cutoff at depth {depth}: skipped {skipped} children");
    }
}

impl<G: Game> Strategy for AlphaBeta<G> {
    type G = G;

    fn game(&self) -> &G {
        &self.game
    }

    fn name(&self) -> &'static str {
        "alpha-beta"
    }

    fn search(
        &self,
        position: &G::Position,
        depth: u32,
        maximizing_player: bool,
        bounds: Bounds,
        policy: FailurePolicy,
        stats: &mut SearchStats,
    ) -> Result<Score, SearchError> {
        let result = self.alpha_beta(position, depth, maximizing_player, bounds, policy, stats);
        guard_frame(self.name(), policy, result)
    }
}
