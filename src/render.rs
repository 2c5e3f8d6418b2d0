//! Text views of Grids and search results.
//!
//! Nothing here is used by the search itself; these are `Display` adapters over the values a
//! search returns. Every cell is printed 4 characters wide, one Grid row per line.
//!
//! ```
//! use grid_astar::{render::GridView, Grid};
//!
//! let grid = Grid::new(2, 3, [(1, 1)]).unwrap();
//! let view = GridView::new(&grid, (0, 0), (1, 2));
//!
//! assert_eq!(view.to_string(), "SO  0   0   \n0   BL  DE  \n");
//! ```

use std::fmt;

use crate::{Grid, Path, PathResult, Point, PointSet, Search};

/// Shows a Grid with its start (`SO`), goal (`DE`) and blocked cells (`BL`).
///
/// Open cells are shown as `0`, or as `*` if they lie on the attached Path.
#[derive(Clone, Debug)]
pub struct GridView<'a> {
    grid: &'a Grid,
    start: Point,
    goal: Point,
    path: PointSet,
}

impl<'a> GridView<'a> {
    /// Creates a view of `grid` with the given endpoints.
    pub fn new(grid: &'a Grid, start: Point, goal: Point) -> GridView<'a> {
        GridView {
            grid,
            start,
            goal,
            path: PointSet::default(),
        }
    }

    /// Marks every Point of `path` in the view.
    pub fn with_path(mut self, path: &Path) -> GridView<'a> {
        self.path = path.iter().collect();
        self
    }
}

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.grid.num_rows() {
            for column in 0..self.grid.num_columns() {
                let pos = (row, column);
                if pos == self.start {
                    f.write_str("SO  ")?;
                } else if pos == self.goal {
                    f.write_str("DE  ")?;
                } else if self.grid.is_blocked(pos) {
                    f.write_str("BL  ")?;
                } else if self.path.contains(&pos) {
                    f.write_str("*   ")?;
                } else {
                    write!(f, "{:<3} ", 0)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Shows the `final_cost` of every cell after a search.
///
/// Blocked cells are shown as `BL`, cells the search never reached as `-`.
#[derive(Clone, Copy, Debug)]
pub struct ScoreView<'a>(pub &'a Search);

impl fmt::Display for ScoreView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let search = self.0;
        for row in 0..search.num_rows() {
            for column in 0..search.num_columns() {
                match search.cell((row, column)) {
                    None => f.write_str("BL  ")?,
                    Some(cell) if cell.is_reached() => write!(f, "{:<3} ", cell.final_cost)?,
                    Some(_) => f.write_str("-   ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Shows a Path as `[row, column] -> [row, column] -> ...`, from start to goal.
#[derive(Clone, Copy, Debug)]
pub struct PathTrace<'a>(pub &'a Path);

impl fmt::Display for PathTrace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (row, column)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "[{}, {}]", row, column)?;
        }
        Ok(())
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathResult::Found(path) => write!(f, "{} (cost {})", PathTrace(path), path.cost()),
            PathResult::NotFound => f.write_str("No possible path"),
        }
    }
}
