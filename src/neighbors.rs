//! The 8-directional movement on the Grid.

use crate::Point;

/// The kind of step between two adjacent cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// A step along a row or a column
    Orthogonal,
    /// A step to one of the four corners
    Diagonal,
}

// (Δrow, Δcolumn, kind), in the order neighbors are visited
const OFFSETS: [(isize, isize, Move); 8] = [
    (-1, 0, Move::Orthogonal),
    (-1, -1, Move::Diagonal),
    (-1, 1, Move::Diagonal),
    (0, -1, Move::Orthogonal),
    (0, 1, Move::Orthogonal),
    (1, 0, Move::Orthogonal),
    (1, -1, Move::Diagonal),
    (1, 1, Move::Diagonal),
];

/// A Neighborhood for Agents moving along all 8 directions.
///
/// Neighbors are always produced in the same order: up, up-left, up-right, left, right,
/// down, down-left, down-right. Together with the FIFO order of the open list this decides
/// which of several equally cheap Paths is returned.
///
/// Diagonal moves are allowed even when both adjacent orthogonal cells are blocked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MooreNeighborhood {
    num_rows: usize,
    num_columns: usize,
}

impl MooreNeighborhood {
    /// Creates a new MooreNeighborhood for a Grid of `num_rows × num_columns`.
    pub fn new(num_rows: usize, num_columns: usize) -> MooreNeighborhood {
        MooreNeighborhood {
            num_rows,
            num_columns,
        }
    }

    /// Appends every in-bounds neighbor of `point` to `target`.
    ///
    /// Neighbors outside the Grid are skipped, so Points on an edge or corner get fewer than 8.
    pub fn get_all_neighbors(&self, point: Point, target: &mut Vec<(Point, Move)>) {
        let (row, column) = point;
        for &(d_row, d_column, step) in OFFSETS.iter() {
            let next_row = match row.checked_add_signed(d_row) {
                Some(r) if r < self.num_rows => r,
                _ => continue,
            };
            let next_column = match column.checked_add_signed(d_column) {
                Some(c) if c < self.num_columns => c,
                _ => continue,
            };
            target.push(((next_row, next_column), step));
        }
    }
}
