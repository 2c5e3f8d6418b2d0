mod astar;
pub use astar::{find_path, Pathfinder, Search};

mod cell;
pub use cell::{Cell, CellState};

mod cell_list;
pub(crate) use cell_list::CellList;

mod open_list;
pub(crate) use open_list::OpenList;

use crate::{error::Role, Point, SearchError};

/// A fixed-size rectangle of open and blocked cells, indexed by `(row, column)`.
///
/// The Grid never changes after creation. Searches only borrow it, so one Grid can serve
/// any number of (concurrent) searches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    num_rows: usize,
    num_columns: usize,
    blocked: Vec<bool>,
    blocked_count: usize,
}

impl Grid {
    /// Creates a Grid of `num_rows × num_columns` cells where every Point in `blocked` is
    /// impassable. Listing a Point more than once is allowed.
    ///
    /// ## Errors
    /// - [`SearchError::EmptyGrid`] if either dimension is zero
    /// - [`SearchError::GridTooLarge`] if the cells cannot be allocated
    /// - [`SearchError::OutOfBounds`] if a blocked Point lies outside the Grid
    ///
    /// ## Examples
    /// ```
    /// use grid_astar::Grid;
    ///
    /// let grid = Grid::new(5, 5, [(0, 4), (2, 2), (3, 1), (3, 3)]).unwrap();
    ///
    /// assert!(grid.is_blocked((2, 2)));
    /// assert!(grid.is_open((0, 0)));
    /// assert!(Grid::new(5, 5, [(5, 0)]).is_err());
    /// ```
    pub fn new(
        num_rows: usize,
        num_columns: usize,
        blocked: impl IntoIterator<Item = Point>,
    ) -> Result<Grid, SearchError> {
        if num_rows == 0 || num_columns == 0 {
            return Err(SearchError::EmptyGrid {
                num_rows,
                num_columns,
            });
        }
        let too_large = SearchError::GridTooLarge {
            num_rows,
            num_columns,
        };
        let len = num_rows.checked_mul(num_columns).ok_or(too_large.clone())?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large)?;
        cells.resize(len, false);

        let mut grid = Grid {
            num_rows,
            num_columns,
            blocked: cells,
            blocked_count: 0,
        };

        for pos in blocked {
            let index = grid.checked_index(pos, Role::Blocked)?;
            if !grid.blocked[index] {
                grid.blocked[index] = true;
                grid.blocked_count += 1;
            }
        }

        Ok(grid)
    }

    /// The number of rows.
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// The number of columns.
    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    /// The total number of cells, open or blocked.
    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    /// Always `false`: a Grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }

    /// The number of distinct blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.blocked_count
    }

    /// Whether `pos` lies inside the Grid.
    pub fn contains(&self, (row, column): Point) -> bool {
        row < self.num_rows && column < self.num_columns
    }

    /// Whether `pos` is impassable. Points outside the Grid count as blocked.
    pub fn is_blocked(&self, pos: Point) -> bool {
        self.index_of(pos).map_or(true, |index| self.blocked[index])
    }

    /// Whether `pos` lies inside the Grid and can be walked on.
    pub fn is_open(&self, pos: Point) -> bool {
        !self.is_blocked(pos)
    }

    /// The row-major index of `pos`, or `None` if it lies outside the Grid.
    pub fn index_of(&self, pos: Point) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.0 * self.num_columns + pos.1)
        } else {
            None
        }
    }

    /// The Point at row-major `index`. Inverse of [`index_of`](Grid::index_of).
    pub(crate) fn point_at(&self, index: usize) -> Point {
        (index / self.num_columns, index % self.num_columns)
    }

    /// Iterates over all Points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.len()).map(move |index| self.point_at(index))
    }

    pub(crate) fn checked_index(&self, pos: Point, role: Role) -> Result<usize, SearchError> {
        self.index_of(pos).ok_or(SearchError::OutOfBounds {
            role,
            pos,
            num_rows: self.num_rows,
            num_columns: self.num_columns,
        })
    }
}
