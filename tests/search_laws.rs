// Minimax and alpha-beta are the same algorithm; pruning only changes how many positions are
// visited. These laws are checked over random reachable positions.

mod common;

use common::{CountingGame, play};
use proptest::prelude::*;
use ttt_search::alpha_beta::AlphaBeta;
use ttt_search::boards::tic_tac_toe::{TerminalRule, TicTacToe};
use ttt_search::game::Game;
use ttt_search::minimax::Minimax;
use ttt_search::strategy::{FailurePolicy, Strategy as SearchStrategy};

fn terminal_rule() -> impl proptest::strategy::Strategy<Value = TerminalRule> {
    prop_oneof![
        Just(TerminalRule::BoardFull),
        Just(TerminalRule::DecidedOrFull),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn alpha_beta_agrees_with_minimax(
        picks in prop::collection::vec(0usize..9, 2..9),
        depth in 0u32..=6,
        maximizing in any::<bool>(),
        rule in terminal_rule(),
    ) {
        let game = TicTacToe::default().with_terminal_rule(rule);
        let position = play(&picks);

        let policy = FailurePolicy::Abort;
        let (mm_score, mm_stats) =
            Minimax::new(game).evaluate_with_stats(&position, depth, maximizing, policy);
        let (ab_score, ab_stats) =
            AlphaBeta::new(game).evaluate_with_stats(&position, depth, maximizing, policy);

        prop_assert_eq!(ab_score, mm_score);
        prop_assert!(ab_stats.nodes <= mm_stats.nodes);
        prop_assert_eq!(mm_stats.cutoffs, 0);
        if ab_stats.cutoffs > 0 {
            prop_assert!(ab_stats.nodes < mm_stats.nodes);
        }
    }

    #[test]
    fn depth_zero_is_the_static_score(
        picks in prop::collection::vec(0usize..9, 0..9),
        maximizing in any::<bool>(),
    ) {
        let game = TicTacToe::default();
        let position = play(&picks);
        let expected = game.evaluate_position(&position).unwrap();

        prop_assert_eq!(Minimax::new(game).evaluate(&position, 0, maximizing), expected);
        prop_assert_eq!(AlphaBeta::new(game).evaluate(&position, 0, maximizing), expected);
    }

    #[test]
    fn terminal_positions_are_not_searched(
        picks in prop::collection::vec(0usize..9, 9..=9),
        depth in 0u32..=9,
        maximizing in any::<bool>(),
    ) {
        let position = play(&picks);
        prop_assert!(position.is_full());

        let minimax = Minimax::new(CountingGame::new(TicTacToe::default()));
        let alpha_beta = AlphaBeta::new(CountingGame::new(TicTacToe::default()));
        let expected = TicTacToe::default().evaluate_position(&position).unwrap();

        prop_assert_eq!(minimax.evaluate(&position, depth, maximizing), expected);
        prop_assert_eq!(alpha_beta.evaluate(&position, depth, maximizing), expected);
        prop_assert_eq!(minimax.game().children_calls.get(), 0);
        prop_assert_eq!(alpha_beta.game().children_calls.get(), 0);
    }

    #[test]
    fn decided_positions_are_terminal_under_the_strict_rule(
        picks in prop::collection::vec(0usize..9, 5..9),
        depth in 1u32..=4,
        maximizing in any::<bool>(),
    ) {
        let game = TicTacToe::default().with_terminal_rule(TerminalRule::DecidedOrFull);
        let position = play(&picks);
        prop_assume!(game.winner(&position).is_some());

        let expected = game.evaluate_position(&position).unwrap();
        prop_assert_eq!(Minimax::new(game).evaluate(&position, depth, maximizing), expected);
        prop_assert_eq!(AlphaBeta::new(game).evaluate(&position, depth, maximizing), expected);
    }

    #[test]
    fn repeated_searches_agree(
        picks in prop::collection::vec(0usize..9, 3..9),
        depth in 0u32..=5,
        maximizing in any::<bool>(),
    ) {
        let alpha_beta = AlphaBeta::new(TicTacToe::default());
        let position = play(&picks);
        let before = position;

        let policy = FailurePolicy::Abort;
        let first = alpha_beta.evaluate_with_stats(&position, depth, maximizing, policy);
        let second = alpha_beta.evaluate_with_stats(&position, depth, maximizing, policy);

        prop_assert_eq!(first, second);
        prop_assert_eq!(position, before);
    }
}
