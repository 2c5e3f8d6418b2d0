use crate::{Grid, Heuristic, PathResult, Pathfinder, Point, SearchError};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "parallel")]
impl<H: Heuristic + Sync> Pathfinder<H> {
    /// Runs one independent search per `(start, goal)` query on the same Grid.
    ///
    /// The results are in the same order as `queries`. With the `parallel` feature the searches
    /// run on the rayon thread pool; each of them owns its own state, so the results are the
    /// same as calling [`find_path`](Pathfinder::find_path) once per query.
    ///
    /// ## Examples
    /// ```
    /// use grid_astar::{Grid, Pathfinder};
    ///
    /// let grid = Grid::new(5, 5, [(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)]).unwrap();
    /// let pathfinder = Pathfinder::default();
    ///
    /// let results = pathfinder.find_paths(&grid, &[((0, 0), (1, 4)), ((0, 0), (4, 4))]);
    ///
    /// assert!(results[0].as_ref().unwrap().is_found());
    /// assert!(!results[1].as_ref().unwrap().is_found());
    /// ```
    pub fn find_paths(
        &self,
        grid: &Grid,
        queries: &[(Point, Point)],
    ) -> Vec<Result<PathResult, SearchError>> {
        queries
            .par_iter()
            .map(|&(start, goal)| self.find_path(grid, start, goal))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
impl<H: Heuristic> Pathfinder<H> {
    /// Runs one independent search per `(start, goal)` query on the same Grid.
    ///
    /// The results are in the same order as `queries`.
    pub fn find_paths(
        &self,
        grid: &Grid,
        queries: &[(Point, Point)],
    ) -> Vec<Result<PathResult, SearchError>> {
        queries
            .iter()
            .map(|&(start, goal)| self.find_path(grid, start, goal))
            .collect()
    }
}
