use crate::alpha_beta::AlphaBeta;
use crate::error::SearchError;
use crate::game::{DRAW, Game, SCORE_MAX, SCORE_MIN, Score};
use crate::minimax::Minimax;
use log::{debug, error, warn};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// The search window of an alpha-beta search.
///
/// `alpha` is the best score the maximizer can already guarantee, `beta` the best the
/// minimizer can. Strategies that do not prune ignore it.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Bounds {
    pub alpha: Score,
    pub beta: Score,
}

impl Bounds {
    /// The window of a fresh search: (-infinity, +infinity).
    pub const FULL: Bounds = Bounds {
        alpha: SCORE_MIN,
        beta: SCORE_MAX,
    };

    pub const fn new(alpha: Score, beta: Score) -> Self {
        Self { alpha, beta }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::FULL
    }
}

/// Counters of a single search call tree.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub struct SearchStats {
    /// Positions entered, the root included.
    pub nodes: u64,
    /// Positions scored with the adapter's evaluation.
    pub leaves: u64,
    /// Times the remaining children of a position were skipped.
    pub cutoffs: u64,
}

/// What a strategy does with a failure inside its call tree.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub enum FailurePolicy {
    /// The failure aborts the whole search and the public boundary reports a draw.
    #[default]
    Abort,
    /// The failing position scores as a draw and its siblings are still explored.
    Neutralize,
}

/// A game-tree search over a [`Game`] adapter.
///
/// `search` is the fallible recursion. The provided `evaluate*` methods are the public
/// boundary: they always produce a score, logging a failure and reporting [`DRAW`] instead.
pub trait Strategy {
    /// The adapter the strategy searches with.
    type G: Game;

    fn game(&self) -> &Self::G;

    /// A short human-readable name, used in diagnostics.
    fn name(&self) -> &'static str;

    /// Returns the value of `position` for the maximizing side, assuming best play by both
    /// sides for `depth` plies.
    ///
    /// Neither `position` nor the adapter is mutated.
    fn search(
        &self,
        position: &<Self::G as Game>::Position,
        depth: u32,
        maximizing_player: bool,
        bounds: Bounds,
        policy: FailurePolicy,
        stats: &mut SearchStats,
    ) -> Result<Score, SearchError>;

    fn evaluate(
        &self,
        position: &<Self::G as Game>::Position,
        depth: u32,
        maximizing_player: bool,
    ) -> Score {
        self.evaluate_with_stats(position, depth, maximizing_player, FailurePolicy::default())
            .0
    }

    /// Like [`Strategy::evaluate`], starting from the given window instead of the full one.
    fn evaluate_within(
        &self,
        position: &<Self::G as Game>::Position,
        depth: u32,
        maximizing_player: bool,
        alpha: Score,
        beta: Score,
    ) -> Score {
        let mut stats = SearchStats::default();
        let result = self.search(
            position,
            depth,
            maximizing_player,
            Bounds::new(alpha, beta),
            FailurePolicy::default(),
            &mut stats,
        );
        report(self.name(), depth, result, &stats)
    }

    fn evaluate_with_stats(
        &self,
        position: &<Self::G as Game>::Position,
        depth: u32,
        maximizing_player: bool,
        policy: FailurePolicy,
    ) -> (Score, SearchStats) {
        let mut stats = SearchStats::default();
        let result = self.search(
            position,
            depth,
            maximizing_player,
            Bounds::FULL,
            policy,
            &mut stats,
        );
        (report(self.name(), depth, result, &stats), stats)
    }
}

fn report(
    name: &str,
    depth: u32,
    result: Result<Score, SearchError>,
    stats: &SearchStats,
) -> Score {
    match result {
        Ok(score) => {
            let (nodes, leaves, cutoffs) = (stats.nodes, stats.leaves, stats.cutoffs);
            debug!("{name}({depth}) = {score} ({nodes} nodes, {leaves} leaves, {cutoffs} cuts)");
            score
        }
        Err(err) => {
            error!("error in {name} evaluation: {err}");
            DRAW
        }
    }
}

/// Applies `policy` to the outcome of one search frame.
pub(crate) fn guard_frame(
    name: &str,
    policy: FailurePolicy,
    result: Result<Score, SearchError>,
) -> Result<Score, SearchError> {
    match result {
        Err(err) if policy == FailurePolicy::Neutralize => {
            warn!("{name} frame failed, scoring it as a draw: {err}");
            Ok(DRAW)
        }
        other => other,
    }
}

/// Selects a search algorithm by configuration.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, Hash)]
pub enum StrategyKind {
    /// Full-width minimax without pruning.
    Minimax,
    /// Minimax with alpha-beta pruning.
    #[default]
    AlphaBeta,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 2] = [StrategyKind::Minimax, StrategyKind::AlphaBeta];
}

impl Display for StrategyKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Minimax => write!(f, "minimax"),
            StrategyKind::AlphaBeta => write!(f, "alpha-beta"),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" | "min-max" | "1" => Ok(StrategyKind::Minimax),
            "alpha-beta" | "alphabeta" | "alpha_beta" | "2" => Ok(StrategyKind::AlphaBeta),
            other => Err(SearchError::InvalidConfiguration {
                message: format!("unknown strategy '{other}', expected minimax or alpha-beta"),
            }),
        }
    }
}

/// One of the two strategies, chosen by a [`StrategyKind`].
#[derive(Debug, Clone)]
pub enum AnyStrategy<G: Game> {
    Minimax(Minimax<G>),
    AlphaBeta(AlphaBeta<G>),
}

impl<G: Game> AnyStrategy<G> {
    pub fn new(kind: StrategyKind, game: G) -> Self {
        match kind {
            StrategyKind::Minimax => AnyStrategy::Minimax(Minimax::new(game)),
            StrategyKind::AlphaBeta => AnyStrategy::AlphaBeta(AlphaBeta::new(game)),
        }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            AnyStrategy::Minimax(_) => StrategyKind::Minimax,
            AnyStrategy::AlphaBeta(_) => StrategyKind::AlphaBeta,
        }
    }
}

impl<G: Game> Strategy for AnyStrategy<G> {
    type G = G;

    fn game(&self) -> &G {
        match self {
            AnyStrategy::Minimax(s) => s.game(),
            AnyStrategy::AlphaBeta(s) => s.game(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            AnyStrategy::Minimax(s) => s.name(),
            AnyStrategy::AlphaBeta(s) => s.name(),
        }
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
        match self {
            AnyStrategy::Minimax(s) => {
                s.search(position, depth, maximizing_player, bounds, policy, stats)
            }
            AnyStrategy::AlphaBeta(s) => {
                s.search(position, depth, maximizing_player, bounds, policy, stats)
            }
        }
    }
}
