use rand::Rng;
use std::fmt;

use super::Game;

/// Number of tiles spawned onto a fresh board.
const INITIAL_TILES: usize = 2;

/// Default grid width and height.
pub const DEFAULT_SIZE: usize = 4;

/// A single cell: a fixed grid position, an exponent value, and the
/// transient flag move resolution uses to stop double merges.
///
/// `value` stores the exponent of the tile: 0 is empty, and a nonzero `v`
/// stands for the game number `2^v`.
#[derive(Debug, Clone, Copy)]
pub struct Tile {
    row: usize,
    col: usize,
    value: u8,
    merged_this_move: bool,
}

impl Tile {
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    #[inline]
    pub fn column(&self) -> usize {
        self.col
    }

    /// Exponent value; 0 means empty.
    #[inline]
    pub fn value(&self) -> u8 {
        self.value
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value == 0
    }

    /// True if this tile was the destination of a merge in the most
    /// recently resolved move. Flags are only cleared when the next move
    /// starts resolving.
    #[inline]
    pub fn merged_this_move(&self) -> bool {
        self.merged_this_move
    }
}

/// An N x N grid of tiles stored row-major.
///
/// The grid shape is fixed at construction and every tile keeps its
/// `(row, column)` for its whole life; moves rewrite values, never
/// positions. `Clone` is a full structural copy, so a cloned board can be
/// mutated freely without touching the original.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    tiles: Vec<Tile>,
}

impl Board {
    /// An empty `size` x `size` board.
    pub fn empty(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        let mut tiles = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                tiles.push(Tile { row, col, value: 0, merged_this_move: false });
            }
        }
        Board { size, tiles }
    }

    /// A fresh board with the starting tiles spawned.
    pub fn new<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let mut board = Board::empty(size);
        for _ in 0..INITIAL_TILES {
            board.spawn_random_tile(rng);
        }
        board
    }

    /// Build a board from a flat row-major slice of exponent values.
    ///
    /// Panics unless `values.len() == size * size`. Debug builds also
    /// reject exponents past [`Game::WIN_EXPONENT`], which no playable
    /// position can hold. Intended for tests and fixture setup.
    pub fn from_exponents(size: usize, values: &[u8]) -> Self {
        assert_eq!(values.len(), size * size, "expected {} values", size * size);
        debug_assert!(
            values.iter().all(|&v| v <= Game::WIN_EXPONENT),
            "exponent past the winning tile"
        );
        let mut board = Board::empty(size);
        for (tile, &value) in board.tiles.iter_mut().zip(values) {
            tile.value = value;
        }
        board
    }

    /// Flat row-major exponent values, the inverse of [`Board::from_exponents`].
    pub fn to_exponents(&self) -> Vec<u8> {
        self.tiles.iter().map(|t| t.value).collect()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    #[inline]
    pub fn tile(&self, row: usize, col: usize) -> &Tile {
        &self.tiles[self.index(row, col)]
    }

    /// Exponent value at `(row, col)`; 0 means empty.
    #[inline]
    pub fn value(&self, row: usize, col: usize) -> u8 {
        self.tiles[self.index(row, col)].value
    }

    /// Overwrite the exponent value at `(row, col)`. The merge flag is left
    /// untouched; flags are only cleared at the start of move resolution.
    #[inline]
    pub fn set_value(&mut self, row: usize, col: usize, value: u8) {
        let idx = self.index(row, col);
        self.tiles[idx].value = value;
    }

    #[inline]
    pub(crate) fn mark_merged(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        self.tiles[idx].merged_this_move = true;
    }

    pub(crate) fn clear_merge_flags(&mut self) {
        for tile in &mut self.tiles {
            tile.merged_this_move = false;
        }
    }

    /// True when the (possibly negative) coordinates name a cell on the grid.
    #[inline]
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    /// Row-major iteration over every tile.
    #[inline]
    pub fn tiles(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// Count the number of empty cells on the board.
    #[inline]
    pub fn empty_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_empty()).count()
    }

    /// The highest exponent present; 0 on an empty board.
    #[inline]
    pub fn max_exponent(&self) -> u8 {
        self.tiles.iter().map(|t| t.value).max().unwrap_or(0)
    }

    /// Set a random empty cell to exponent 1 or 2 (50/50), using the
    /// provided RNG.
    ///
    /// Random `(row, column)` pairs are drawn and rejected until one lands
    /// on an empty cell, so at least one cell must be empty or this never
    /// returns.
    pub fn spawn_random_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        debug_assert!(self.empty_count() > 0, "spawn_random_tile on a full board");
        loop {
            let row = rng.gen_range(0..self.size);
            let col = rng.gen_range(0..self.size);
            if self.value(row, col) == 0 {
                let value = if rng.gen::<bool>() { 1 } else { 2 };
                self.set_value(row, col, value);
                return;
            }
        }
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(self.size * 6 - 1);
        writeln!(f)?;
        for row in 0..self.size {
            if row > 0 {
                writeln!(f, "{}", rule)?;
            }
            let cells: Vec<String> = (0..self.size)
                .map(|col| format_val(self.value(row, col)))
                .collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

fn format_val(value: u8) -> String {
    match value {
        0 => String::from("     "),
        v => format!("{:^5}", v),
    }
}
