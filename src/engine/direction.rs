use std::fmt;

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the fixed order used for legality scans and
    /// candidate enumeration.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit `(row, column)` step for this direction.
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Coordinates in the order move resolution must visit them.
    ///
    /// Tiles nearest the destination edge come first, so every tile has
    /// settled before the tiles behind it are walked:
    /// - left: each row top to bottom, columns ascending
    /// - right: each row, columns descending
    /// - up: each column left to right, rows ascending
    /// - down: each column, rows descending
    pub fn traversal(self, size: usize) -> Vec<(usize, usize)> {
        let mut order = Vec::with_capacity(size * size);
        match self {
            Direction::Left => {
                for row in 0..size {
                    for col in 0..size {
                        order.push((row, col));
                    }
                }
            }
            Direction::Right => {
                for row in 0..size {
                    for col in (0..size).rev() {
                        order.push((row, col));
                    }
                }
            }
            Direction::Up => {
                for col in 0..size {
                    for row in 0..size {
                        order.push((row, col));
                    }
                }
            }
            Direction::Down => {
                for col in 0..size {
                    for row in (0..size).rev() {
                        order.push((row, col));
                    }
                }
            }
        }
        order
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_are_unit_steps() {
        assert_eq!(Direction::Up.delta(), (-1, 0));
        assert_eq!(Direction::Down.delta(), (1, 0));
        assert_eq!(Direction::Left.delta(), (0, -1));
        assert_eq!(Direction::Right.delta(), (0, 1));
    }

    #[test]
    fn traversal_left_scans_rows_columns_ascending() {
        let order = Direction::Left.traversal(2);
        assert_eq!(order, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn traversal_right_scans_columns_descending() {
        let order = Direction::Right.traversal(2);
        assert_eq!(order, vec![(0, 1), (0, 0), (1, 1), (1, 0)]);
    }

    #[test]
    fn traversal_up_walks_each_column_top_down() {
        let order = Direction::Up.traversal(2);
        assert_eq!(order, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn traversal_down_starts_at_the_bottom_row() {
        let order = Direction::Down.traversal(2);
        assert_eq!(order, vec![(1, 0), (0, 0), (1, 1), (0, 1)]);
    }

    #[test]
    fn traversal_covers_each_cell_exactly_once() {
        for dir in Direction::ALL {
            let mut order = dir.traversal(4);
            assert_eq!(order.len(), 16);
            order.sort_unstable();
            order.dedup();
            assert_eq!(order.len(), 16);
        }
    }

    #[test]
    fn display_names_are_lowercase() {
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Right.to_string(), "right");
    }
}
