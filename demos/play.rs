//! Play tic-tac-toe against the bot in the terminal.
//!
//! ```text
//! cargo run --example play -- --strategy minimax --depth 8
//! RUST_LOG=debug cargo run --example play -- --opponent random --seed 7
//! ```

use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};
use ttt_search::boards::tic_tac_toe::{Mark, TerminalRule, TicTacToe, TicTacToeBoard};
use ttt_search::game::Side;
use ttt_search::random::{CustomNumberGenerator, RandomPlayer};
use ttt_search::selector::{Choice, DEFAULT_SEARCH_DEPTH, MoveSelector};
use ttt_search::session::{Session, Status};
use ttt_search::strategy::StrategyKind;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Opponent {
    /// Moves are read from standard input.
    Human,
    /// Random moves from a seeded generator.
    Random,
}

#[derive(Debug, Parser)]
#[command(about = "Play tic-tac-toe against a minimax or alpha-beta bot")]
struct Args {
    /// Search strategy: minimax or alpha-beta.
    #[arg(long, default_value_t = StrategyKind::AlphaBeta)]
    strategy: StrategyKind,

    /// Plies searched below each candidate move.
    #[arg(long, default_value_t = DEFAULT_SEARCH_DEPTH)]
    depth: u32,

    /// Let the bot make the first move.
    #[arg(long)]
    bot_first: bool,

    /// Keep searching past a won board until it is full.
    #[arg(long)]
    full_board_only: bool,

    #[arg(long, value_enum, default_value_t = Opponent::Human)]
    opponent: Opponent,

    /// Seed of the random opponent.
    #[arg(long, default_value_t = 3819201)]
    seed: u64,

    /// Start from this position instead of an empty board, e.g. "X...O....".
    #[arg(long)]
    board: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let rule = if args.full_board_only {
        TerminalRule::BoardFull
    } else {
        TerminalRule::DecidedOrFull
    };
    let game = TicTacToe::new(Mark::O, Mark::X)?.with_terminal_rule(rule);
    let selector = MoveSelector::builder(game)
        .with_strategy(args.strategy)
        .with_depth(args.depth)
        .build();
    let mut session = match &args.board {
        Some(position) => Session::from_position(selector, position)?,
        None => Session::new(selector),
    };
    let mut random = RandomPlayer::new(CustomNumberGenerator::new(args.seed));
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let game = session.selector().game();
    let (you, bot) = (game.mark_of(Side::Player), game.mark_of(Side::Bot));
    println!("You are {you}, the bot ({}) is {bot}.", args.strategy);
    if args.bot_first && session.status() == Status::InProgress {
        if let Some(choice) = session.bot_move()? {
            report(&choice);
        }
    }

    while session.status() == Status::InProgress {
        print_board(session.board());
        let cell = match args.opponent {
            Opponent::Random => match random.choose_cell(session.board()) {
                Some(cell) => cell,
                None => break,
            },
            Opponent::Human => {
                print!("Your move (1-9, or row col): ");
                io::stdout().flush()?;
                let Some(line) = lines.next() else {
                    return Ok(());
                };
                match parse_cell(&line?) {
                    Some(cell) => cell,
                    None => {
                        println!("Enter a number from 1 to 9, or a row and column from 1 to 3.");
                        continue;
                    }
                }
            }
        };

        match session.player_move(cell) {
            Ok(Some(choice)) => report(&choice),
            Ok(None) => {}
            Err(err) => println!("{err}"),
        }
    }

    print_board(session.board());
    match session.status() {
        Status::Won(Side::Player) => println!("You win!"),
        Status::Won(Side::Bot) => println!("Bot wins!"),
        Status::Draw => println!("Draw."),
        Status::InProgress => {}
    }
    Ok(())
}

fn parse_cell(line: &str) -> Option<usize> {
    let numbers: Vec<usize> = line
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;
    match numbers.as_slice() {
        [n] if (1..=9).contains(n) => Some(n - 1),
        [row, col] if *row >= 1 && *col >= 1 => TicTacToeBoard::index_of(row - 1, col - 1),
        _ => None,
    }
}

fn report(choice: &Choice) {
    let cell = choice.cell + 1;
    let (nodes, cutoffs) = (choice.stats.nodes, choice.stats.cutoffs);
    println!("Bot plays {cell} ({nodes} positions searched, {cutoffs} cutoffs)");
}

fn print_board(board: &TicTacToeBoard) {
    println!();
    print!("{board}");
    println!();
}
