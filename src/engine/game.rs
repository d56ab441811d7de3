use rand::Rng;

use super::{Board, Direction, DEFAULT_SIZE};

/// A live game: one board plus the rules that act on it.
///
/// `Clone` yields a fully independent deep copy (grid, values, merge
/// flags), which is what the look-ahead strategies rely on to probe
/// candidate moves without disturbing the real game.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
}

impl Game {
    /// Exponent that ends the game as a win (`2^11` = 2048).
    pub const WIN_EXPONENT: u8 = 11;

    /// Start a default 4x4 game with two spawned tiles.
    ///
    /// ```
    /// use lookahead_2048::engine::Game;
    /// use rand::{rngs::StdRng, SeedableRng};
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let game = Game::new(&mut rng);
    /// assert_eq!(game.board().empty_count(), 14);
    /// ```
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_size(DEFAULT_SIZE, rng)
    }

    /// Start a game on a `size` x `size` board.
    pub fn with_size<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        Game { board: Board::new(size, rng) }
    }

    /// Wrap an existing board.
    pub fn from_board(board: Board) -> Self {
        Game { board }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Slide and merge tiles in `dir` without spawning; this is the step
    /// look-ahead probes use. Returns whether the board changed; resolving
    /// an illegal direction is a no-op, never an error.
    pub fn simulate_move(&mut self, dir: Direction) -> bool {
        self.resolve(dir)
    }

    /// Resolve `dir`, then spawn one random tile if the board changed.
    ///
    /// A changed board always has at least one empty cell (the move freed
    /// the source of a slide or merge), so the spawn precondition holds.
    pub fn play_move<R: Rng + ?Sized>(&mut self, dir: Direction, rng: &mut R) -> bool {
        let changed = self.resolve(dir);
        if changed {
            self.board.spawn_random_tile(rng);
        }
        changed
    }

    /// Move resolution: clear every merge flag, then walk tiles in
    /// traversal order (edge-most first). Each tile steps toward the edge
    /// while the next cell accepts it, then either merges into an equal
    /// tile (value + 1, flag set) or settles on the empty cell it reached.
    fn resolve(&mut self, dir: Direction) -> bool {
        self.board.clear_merge_flags();
        let (dr, dc) = dir.delta();
        let mut changed = false;
        for (row, col) in dir.traversal(self.board.size()) {
            let value = self.board.value(row, col);
            if value == 0 {
                continue;
            }
            let (mut dest_row, mut dest_col) = (row, col);
            loop {
                let next_row = dest_row as isize + dr;
                let next_col = dest_col as isize + dc;
                if !self.can_move_into(value, next_row, next_col) {
                    break;
                }
                dest_row = next_row as usize;
                dest_col = next_col as usize;
            }
            if (dest_row, dest_col) == (row, col) {
                continue;
            }
            if self.board.value(dest_row, dest_col) == value {
                self.board.set_value(dest_row, dest_col, value + 1);
                self.board.mark_merged(dest_row, dest_col);
            } else {
                self.board.set_value(dest_row, dest_col, value);
            }
            self.board.set_value(row, col, 0);
            changed = true;
        }
        changed
    }

    /// One-step entry check: `(row, col)` is on the grid and is either
    /// empty or holds `value` with its merge flag clear.
    fn can_move_into(&self, value: u8, row: isize, col: isize) -> bool {
        if !self.board.in_bounds(row, col) {
            return false;
        }
        let next = self.board.tile(row as usize, col as usize);
        next.is_empty() || (next.value() == value && !next.merged_this_move())
    }

    /// True when some cell could take one step in `dir`.
    ///
    /// This is a one-step adjacency check, not a full resolution: every
    /// cell participates (empty cells included), and the merge half of the
    /// test reads whatever flags the most recent resolution left behind. A
    /// direction can therefore be reported legal even though resolving it
    /// would leave the board unchanged.
    pub fn is_legal(&self, dir: Direction) -> bool {
        let (dr, dc) = dir.delta();
        self.board.tiles().any(|tile| {
            self.can_move_into(tile.value(), tile.row() as isize + dr, tile.column() as isize + dc)
        })
    }

    /// Legal directions in the fixed `{up, down, left, right}` order.
    pub fn possible_commands(&self) -> Vec<Direction> {
        Direction::ALL.iter().copied().filter(|&dir| self.is_legal(dir)).collect()
    }

    /// True once any tile has reached the winning exponent.
    #[inline]
    pub fn is_won(&self) -> bool {
        self.board.tiles().any(|t| t.value() == Self::WIN_EXPONENT)
    }

    /// True when no direction is legal; merge opportunities count.
    #[inline]
    pub fn is_lost(&self) -> bool {
        Direction::ALL.iter().all(|&dir| !self.is_legal(dir))
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }
}
