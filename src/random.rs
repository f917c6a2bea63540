use crate::boards::tic_tac_toe::TicTacToeBoard;
use rand::Rng;

const MULTIPLIER_A: u64 = 1103515245;
const INCREMENT_C: u64 = 12345;
const MODULUS: u64 = i32::MAX as u64;
const DEFAULT_SEED: u64 = 3819201;

/// A source of random numbers for opponents that do not search.
pub trait RandomGenerator: Default {
    fn next(&mut self) -> u32;

    /// Returns a number in `from..to`. `to` must be greater than `from`.
    fn next_range(&mut self, from: usize, to: usize) -> usize;

    fn choose<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_range(0, items.len()))
    }
}

/// Thread-local randomness from `rand`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next(&mut self) -> u32 {
        rand::random()
    }

    fn next_range(&mut self, from: usize, to: usize) -> usize {
        rand::rng().random_range(from..to)
    }
}

/// A seeded linear congruential generator, reproducible across runs and platforms.
#[derive(Debug, Clone, Copy)]
pub struct CustomNumberGenerator {
    seed: u64,
}

impl Default for CustomNumberGenerator {
    fn default() -> Self {
        CustomNumberGenerator::new(DEFAULT_SEED)
    }
}

impl CustomNumberGenerator {
    pub const fn new(seed: u64) -> Self {
        Self {
            seed: seed % MODULUS,
        }
    }
}

impl RandomGenerator for CustomNumberGenerator {
    fn next(&mut self) -> u32 {
        self.seed = (self.seed * MULTIPLIER_A + INCREMENT_C) % MODULUS;
        self.seed as u32
    }

    fn next_range(&mut self, from: usize, to: usize) -> usize {
        from + self.next() as usize % (to - from)
    }
}

/// An opponent that plays a uniformly random empty cell.
#[derive(Debug, Default, Clone)]
pub struct RandomPlayer<K: RandomGenerator> {
    random: K,
}

impl<K: RandomGenerator> RandomPlayer<K> {
    pub fn new(random: K) -> Self {
        Self { random }
    }

    /// Picks an empty cell, or `None` on a full board.
    pub fn choose_cell(&mut self, board: &TicTacToeBoard) -> Option<usize> {
        let cells: Vec<usize> = board.empty_cells().collect();
        self.random.choose(&cells).copied()
    }
}
