//! Board scoring functions for the greedy and look-ahead strategies.
//!
//! Scores are plain `i64`s; bigger is better. All of them build on the
//! raw exponent sum, then reward open space, a dominant top tile, or
//! penalize stranded low tiles.

use crate::engine::{Board, Direction};

/// Score function shared by every search strategy.
pub type Heuristic = fn(&Board) -> i64;

/// Bonus per empty cell.
pub const OPEN_CELL_WEIGHT: i64 = 15;

/// Penalty per orphaned tile.
pub const ORPHAN_WEIGHT: i64 = 20;

/// Sum of tile exponents. Note that merging a pair of exponent `v`
/// tiles changes this by `1 - v`, so past the 2-tiles a merge costs
/// score; on its own this mostly rewards keeping tiles around.
pub fn tile_sum(board: &Board) -> i64 {
    board.tiles().map(|t| t.value() as i64).sum()
}

/// Exponent sum plus a bonus for every empty cell, which turns each
/// merge into a net gain again.
pub fn open_space(board: &Board) -> i64 {
    tile_sum(board) + OPEN_CELL_WEIGHT * board.empty_count() as i64
}

/// [`open_space`] plus the squared top exponent.
pub fn peak_squared(board: &Board) -> i64 {
    let peak = board.max_exponent() as i64;
    open_space(board) + peak * peak
}

/// [`open_space`] plus the top exponent raised to the fourth power.
///
/// The steeper peak term makes anything that grows the top tile
/// dominate, which suits the optimistic two-ply search.
pub fn peak_quartic(board: &Board) -> i64 {
    let peak = board.max_exponent() as i64;
    open_space(board) + peak * peak * peak * peak
}

/// [`open_space`] minus a penalty for every orphaned cell.
pub fn orphan_penalty(board: &Board) -> i64 {
    open_space(board) - ORPHAN_WEIGHT * orphan_count(board) as i64
}

/// Cells whose in-bounds neighbors are all strictly larger.
///
/// Such a cell cannot merge until the board reshuffles around it, so it
/// is dead weight. Empty cells boxed in by tiles count too.
pub fn orphan_count(board: &Board) -> usize {
    board.tiles().filter(|t| is_orphan(board, t.row(), t.column())).count()
}

fn is_orphan(board: &Board, row: usize, col: usize) -> bool {
    let value = board.value(row, col);
    Direction::ALL.iter().all(|dir| {
        let (dr, dc) = dir.delta();
        let (nr, nc) = (row as isize + dr, col as isize + dc);
        if !board.in_bounds(nr, nc) {
            return true;
        }
        board.value(nr as usize, nc as usize) > value
    })
}
