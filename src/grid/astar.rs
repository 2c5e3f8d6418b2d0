use super::{CellList, CellState, Grid, OpenList};
use crate::{
    error::Role, grid::open_list::Element, neighbors::MooreNeighborhood, Cell, Cost, Heuristic,
    Manhattan, Path, PathResult, Point, SearchConfig, SearchError,
};

/// Finds a cheapest Path between two Points of an 8-connected Grid with A*.
///
/// A Pathfinder holds only its configuration and Heuristic. Every call builds its own cell
/// records and open list, so a single Pathfinder can be shared freely between threads.
///
/// ## Tie-breaking
/// When several Paths share the minimal cost, the returned one is decided by
/// 1. the open list handing out equal `final_cost`s in the order they were queued, and
/// 2. neighbors being queued in [`MooreNeighborhood`] order.
///
/// The same input therefore always yields the same Path.
#[derive(Clone, Debug)]
pub struct Pathfinder<H = Manhattan> {
    config: SearchConfig,
    heuristic: H,
}

impl Pathfinder<Manhattan> {
    /// Creates a Pathfinder using the [`Manhattan`] Heuristic.
    pub fn new(config: SearchConfig) -> Pathfinder<Manhattan> {
        Pathfinder {
            config,
            heuristic: Manhattan,
        }
    }
}

impl Default for Pathfinder<Manhattan> {
    fn default() -> Pathfinder<Manhattan> {
        Pathfinder::new(SearchConfig::DEFAULT)
    }
}

impl<H> Pathfinder<H> {
    /// Replaces the Heuristic.
    ///
    /// The returned Paths stay optimal as long as `heuristic` never overestimates the
    /// remaining cost under the configured move costs.
    pub fn with_heuristic<H2: Heuristic>(self, heuristic: H2) -> Pathfinder<H2> {
        Pathfinder {
            config: self.config,
            heuristic,
        }
    }

    /// The configuration of this Pathfinder.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The Heuristic of this Pathfinder.
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }
}

impl<H: Heuristic> Pathfinder<H> {
    /// Searches for a cheapest Path from `start` to `goal`.
    ///
    /// Returns [`PathResult::NotFound`] if `goal` is unreachable, including when `start` or
    /// `goal` is blocked. Walking from a Point to itself is a Path of length 1 and cost 0.
    ///
    /// ## Errors
    /// - [`SearchError::OutOfBounds`] if `start` or `goal` lies outside the Grid
    /// - [`SearchError::InvalidMoveCost`] if a move cost is zero, or the Heuristic rejects the
    ///   move costs (see [`Heuristic::check_costs`])
    /// - [`SearchError::BudgetExhausted`] if `max_expansions` is set and was exceeded
    ///
    /// ## Examples
    /// ```
    /// use grid_astar::{Grid, Pathfinder, PathResult, SearchConfig};
    ///
    /// let grid = Grid::new(3, 3, [(1, 1)]).unwrap();
    /// let pathfinder = Pathfinder::new(SearchConfig::DEFAULT);
    ///
    /// let result = pathfinder.find_path(&grid, (0, 0), (2, 2)).unwrap();
    /// assert_eq!(result.total_cost(), Some(34));
    ///
    /// let result = pathfinder.find_path(&grid, (0, 0), (1, 1)).unwrap();
    /// assert_eq!(result, PathResult::NotFound);
    /// ```
    pub fn find_path(
        &self,
        grid: &Grid,
        start: Point,
        goal: Point,
    ) -> Result<PathResult, SearchError> {
        self.search(grid, start, goal).map(Search::into_result)
    }

    /// Like [`find_path`](Pathfinder::find_path), but keeps every cell record of the search
    /// for inspection.
    pub fn search(&self, grid: &Grid, start: Point, goal: Point) -> Result<Search, SearchError> {
        #[cfg(feature = "log")]
        let (outer_timer, timer) = (std::time::Instant::now(), std::time::Instant::now());

        self.config.validate()?;
        self.heuristic.check_costs(&self.config)?;
        grid.checked_index(start, Role::Start)?;
        grid.checked_index(goal, Role::Goal)?;

        let mut search = Search {
            start,
            goal,
            num_rows: grid.num_rows(),
            num_columns: grid.num_columns(),
            cells: CellList::new(grid, &self.heuristic, goal),
            expanded: 0,
            result: PathResult::NotFound,
        };

        re_trace!("astar setup", timer);

        if grid.is_blocked(start) || grid.is_blocked(goal) {
            #[cfg(feature = "log")]
            log::debug!(
                "no path from {:?} to {:?}: endpoint is blocked",
                start,
                goal
            );
            return Ok(search);
        }

        let neighborhood = MooreNeighborhood::new(grid.num_rows(), grid.num_columns());
        let mut open = OpenList::with_capacity(grid.len() / 2);
        let mut all_neighbors = Vec::with_capacity(8);

        let start_cell = &mut search.cells[start];
        start_cell.relax(0, None);
        open.push(start, start_cell.final_cost);

        while let Some(Element {
            pos: current_id,
            final_cost,
            ..
        }) = open.pop_min()
        {
            let current = &mut search.cells[current_id];
            if current.state != CellState::Open || current.final_cost != final_cost {
                // superseded by a cheaper entry, or already expanded
                continue;
            }

            if let Some(max_expansions) = self.config.max_expansions {
                if search.expanded >= max_expansions {
                    #[cfg(feature = "log")]
                    log::debug!(
                        "search from {:?} to {:?} exceeded {} expansions",
                        start,
                        goal,
                        max_expansions
                    );
                    return Err(SearchError::BudgetExhausted {
                        expanded: search.expanded,
                    });
                }
            }

            current.state = CellState::Closed;
            search.expanded += 1;

            if current_id == goal {
                let cost = current.path_cost;
                search.result = PathResult::Found(reconstruct(&search.cells, goal, cost));
                break;
            }

            let current_cost = current.path_cost;

            all_neighbors.clear();
            neighborhood.get_all_neighbors(current_id, &mut all_neighbors);

            for &(other_id, step) in all_neighbors.iter() {
                let other = match search.cells.get_mut(other_id) {
                    Some(other) => other,
                    // blocked
                    None => continue,
                };
                if other.state == CellState::Closed {
                    continue;
                }
                let candidate = current_cost.saturating_add(self.config.move_cost(step));
                if other.state == CellState::Unvisited || candidate < other.path_cost {
                    other.relax(candidate, Some(current_id));
                    open.push(other_id, other.final_cost);
                }
            }
        }

        re_trace!("astar loop", timer);
        re_trace!("astar total", outer_timer);

        #[cfg(feature = "log")]
        match search.result.total_cost() {
            Some(cost) => log::debug!(
                "found path from {:?} to {:?} with cost {} after {} expansions",
                start,
                goal,
                cost,
                search.expanded
            ),
            None => log::debug!(
                "no path from {:?} to {:?} after {} expansions",
                start,
                goal,
                search.expanded
            ),
        }

        Ok(search)
    }
}

fn reconstruct(cells: &CellList, goal: Point, cost: Cost) -> Path {
    let mut steps = vec![goal];
    let mut current = goal;
    while let Some(prev) = cells.get(current).and_then(|cell| cell.parent) {
        steps.push(prev);
        current = prev;
    }
    steps.reverse();
    Path::new(steps, cost)
}

/// The complete state of a finished search: its result and the record of every open cell.
#[derive(Clone, Debug)]
pub struct Search {
    start: Point,
    goal: Point,
    num_rows: usize,
    num_columns: usize,
    cells: CellList,
    expanded: usize,
    result: PathResult,
}

impl Search {
    /// The result of the search.
    pub fn result(&self) -> &PathResult {
        &self.result
    }

    /// Consumes the search and returns its result.
    pub fn into_result(self) -> PathResult {
        self.result
    }

    /// Whether a Path was found.
    pub fn is_found(&self) -> bool {
        self.result.is_found()
    }

    /// The record of the cell at `pos`, or `None` if it is blocked or outside the Grid.
    pub fn cell(&self, pos: Point) -> Option<&Cell> {
        self.cells.get(pos)
    }

    /// Iterates over the records of all open cells, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.values()
    }

    /// The number of cells that were expanded (moved to the closed set).
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// The start of the search.
    pub fn start(&self) -> Point {
        self.start
    }

    /// The goal of the search.
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// The number of rows of the searched Grid.
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// The number of columns of the searched Grid.
    pub fn num_columns(&self) -> usize {
        self.num_columns
    }
}

/// Finds a cheapest Path on a `num_rows × num_columns` Grid with the default
/// [`SearchConfig`] and the [`Manhattan`] Heuristic.
///
/// ## Errors
/// - [`SearchError::EmptyGrid`] if either dimension is zero
/// - [`SearchError::OutOfBounds`] if `start`, `goal` or a blocked Point lies outside the Grid
///
/// ## Examples
/// ```
/// use grid_astar::find_path;
///
/// let result = find_path(5, 5, (0, 0), (2, 3), &[(0, 4), (2, 2), (3, 1), (3, 3)]).unwrap();
/// let path = result.path().unwrap();
///
/// assert_eq!(path.start(), Some((0, 0)));
/// assert_eq!(path.goal(), Some((2, 3)));
/// assert_eq!(path.cost(), 38);
/// ```
pub fn find_path(
    num_rows: usize,
    num_columns: usize,
    start: Point,
    goal: Point,
    blocked_positions: &[Point],
) -> Result<PathResult, SearchError> {
    let grid = Grid::new(num_rows, num_columns, blocked_positions.iter().copied())?;
    Pathfinder::default().find_path(&grid, start, goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighbors::Move;

    use nanorand::{Rng, WyRand};

    const SCENARIO_BLOCKED: [Point; 4] = [(0, 4), (2, 2), (3, 1), (3, 3)];

    fn step_cost(config: &SearchConfig, a: Point, b: Point) -> Option<Cost> {
        match (a.0.abs_diff(b.0), a.1.abs_diff(b.1)) {
            (0, 1) | (1, 0) => Some(config.move_cost(Move::Orthogonal)),
            (1, 1) => Some(config.move_cost(Move::Diagonal)),
            _ => None,
        }
    }

    /// Checks that `path` walks from `start` to `goal` over open, adjacent cells and costs
    /// what it claims.
    fn assert_valid(grid: &Grid, config: &SearchConfig, path: &Path, start: Point, goal: Point) {
        assert_eq!(path.start(), Some(start));
        assert_eq!(path.goal(), Some(goal));
        assert!(path.iter().all(|p| grid.is_open(p)), "{:?}", path);

        let mut cost = 0;
        for pair in path.steps().windows(2) {
            cost += step_cost(config, pair[0], pair[1])
                .unwrap_or_else(|| panic!("{:?} -> {:?} is not a move", pair[0], pair[1]));
        }
        assert_eq!(cost, path.cost());
    }

    /// Cheapest cost from `start` to every cell, by relaxing all moves until nothing changes.
    fn brute_force(grid: &Grid, config: &SearchConfig, start: Point) -> Vec<Option<Cost>> {
        let mut dist = vec![None; grid.len()];
        if grid.is_blocked(start) {
            return dist;
        }
        dist[grid.index_of(start).unwrap()] = Some(0);

        let neighborhood = MooreNeighborhood::new(grid.num_rows(), grid.num_columns());
        let mut neighbors = vec![];
        let mut changed = true;
        while changed {
            changed = false;
            for pos in grid.points() {
                let Some(cost) = dist[grid.index_of(pos).unwrap()] else {
                    continue;
                };
                neighbors.clear();
                neighborhood.get_all_neighbors(pos, &mut neighbors);
                for &(other, step) in neighbors.iter() {
                    if grid.is_blocked(other) {
                        continue;
                    }
                    let index = grid.index_of(other).unwrap();
                    let candidate = cost + config.move_cost(step);
                    if dist[index].map_or(true, |known| candidate < known) {
                        dist[index] = Some(candidate);
                        changed = true;
                    }
                }
            }
        }
        dist
    }

    #[test]
    fn scenario() {
        let grid = Grid::new(5, 5, SCENARIO_BLOCKED).unwrap();
        let pathfinder = Pathfinder::default();

        let result = pathfinder.find_path(&grid, (0, 0), (2, 3)).unwrap();
        let path = result.path().unwrap();

        assert_valid(&grid, pathfinder.config(), path, (0, 0), (2, 3));
        assert_eq!(path.cost(), 38);
        assert_eq!(path.len(), 4);
        assert_eq!(path.steps(), &[(0, 0), (0, 1), (1, 2), (2, 3)]);

        let reference = brute_force(&grid, pathfinder.config(), (0, 0));
        assert_eq!(reference[grid.index_of((2, 3)).unwrap()], Some(38));
    }

    #[test]
    fn one_call() {
        let result = find_path(5, 5, (0, 0), (2, 3), &SCENARIO_BLOCKED).unwrap();
        assert_eq!(result.total_cost(), Some(38));

        assert_eq!(
            find_path(0, 5, (0, 0), (0, 0), &[]),
            Err(SearchError::EmptyGrid {
                num_rows: 0,
                num_columns: 5
            })
        );
        assert!(find_path(5, 5, (0, 0), (2, 3), &[(7, 7)]).is_err());
    }

    #[test]
    fn start_is_goal() {
        let grid = Grid::new(3, 3, []).unwrap();
        let search = Pathfinder::default().search(&grid, (1, 2), (1, 2)).unwrap();

        assert_eq!(
            search.result(),
            &PathResult::Found(Path::new(vec![(1, 2)], 0))
        );
        assert_eq!(search.expanded(), 1);
    }

    #[test]
    fn single_cell_grid() {
        let result = find_path(1, 1, (0, 0), (0, 0), &[]).unwrap();
        assert_eq!(result.total_cost(), Some(0));
    }

    #[test]
    fn wall() {
        // column 2 is solid
        let blocked: Vec<Point> = (0..5).map(|row| (row, 2)).collect();
        let grid = Grid::new(5, 5, blocked).unwrap();

        let search = Pathfinder::default().search(&grid, (0, 0), (4, 4)).unwrap();
        assert_eq!(search.result(), &PathResult::NotFound);
        // everything left of the wall was explored
        assert_eq!(search.expanded(), 10);
        assert!(search
            .cells()
            .filter(|cell| cell.pos.1 > 2)
            .all(|cell| cell.state == CellState::Unvisited));
    }

    #[test]
    fn diagonal_gap() {
        // diagonal moves may pass between two blocked cells
        let grid = Grid::new(2, 2, [(0, 1), (1, 0)]).unwrap();
        let result = Pathfinder::default().find_path(&grid, (0, 0), (1, 1)).unwrap();
        assert_eq!(result.path().map(Path::steps), Some(&[(0, 0), (1, 1)][..]));
        assert_eq!(result.total_cost(), Some(14));
    }

    #[test]
    fn blocked_endpoints() {
        let grid = Grid::new(4, 4, [(0, 0), (3, 3)]).unwrap();
        let pathfinder = Pathfinder::default();

        assert_eq!(
            pathfinder.find_path(&grid, (0, 0), (2, 2)).unwrap(),
            PathResult::NotFound
        );
        assert_eq!(
            pathfinder.find_path(&grid, (2, 2), (3, 3)).unwrap(),
            PathResult::NotFound
        );
        assert_eq!(
            pathfinder.find_path(&grid, (0, 0), (0, 0)).unwrap(),
            PathResult::NotFound
        );

        let search = pathfinder.search(&grid, (0, 0), (2, 2)).unwrap();
        assert_eq!(search.expanded(), 0);
    }

    #[test]
    fn out_of_bounds() {
        let grid = Grid::new(4, 6, []).unwrap();
        let pathfinder = Pathfinder::default();

        assert_eq!(
            pathfinder.find_path(&grid, (4, 0), (0, 0)),
            Err(SearchError::OutOfBounds {
                role: Role::Start,
                pos: (4, 0),
                num_rows: 4,
                num_columns: 6
            })
        );
        assert_eq!(
            pathfinder.find_path(&grid, (0, 0), (0, 6)),
            Err(SearchError::OutOfBounds {
                role: Role::Goal,
                pos: (0, 6),
                num_rows: 4,
                num_columns: 6
            })
        );
    }

    #[test]
    fn invalid_config() {
        let grid = Grid::new(2, 2, []).unwrap();
        let pathfinder = Pathfinder::new(SearchConfig::DEFAULT.with_move_costs(10, 0));
        let err = pathfinder.find_path(&grid, (0, 0), (1, 1)).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn corners_and_edges() {
        let grid = Grid::new(6, 9, []).unwrap();
        let pathfinder = Pathfinder::default();
        let corners = [(0, 0), (0, 8), (5, 0), (5, 8), (0, 4), (3, 8)];

        for &start in corners.iter() {
            for &goal in corners.iter() {
                let result = pathfinder.find_path(&grid, start, goal).unwrap();
                let path = result.path().unwrap();
                assert_valid(&grid, pathfinder.config(), path, start, goal);
            }
        }
    }

    #[test]
    fn open_grid_is_octile() {
        let grid = Grid::new(6, 7, []).unwrap();
        let pathfinder = Pathfinder::default();
        let start: Point = (2, 3);

        for goal in grid.points() {
            let d_row = start.0.abs_diff(goal.0);
            let d_column = start.1.abs_diff(goal.1);
            let diagonal = d_row.min(d_column);
            let straight = d_row.max(d_column) - diagonal;

            let result = pathfinder.find_path(&grid, start, goal).unwrap();
            let path = result.path().unwrap();
            assert_eq!(path.cost(), diagonal * 14 + straight * 10);
            assert_eq!(path.len(), d_row.max(d_column) + 1);
        }
    }

    /// Compares `pathfinder` against [`brute_force`] on `rounds` random grids.
    fn check_against_brute_force<H: Heuristic>(
        pathfinder: &Pathfinder<H>,
        seed: u64,
        rounds: usize,
    ) {
        let mut rng = WyRand::new_seed(seed);
        let config = pathfinder.config();

        for _ in 0..rounds {
            let num_rows = rng.generate_range(1..9usize);
            let num_columns = rng.generate_range(1..9usize);
            let blocked: Vec<Point> = (0..num_rows)
                .flat_map(|row| (0..num_columns).map(move |column| (row, column)))
                .filter(|_| rng.generate_range(0..10u32) < 3)
                .collect();
            let grid = Grid::new(num_rows, num_columns, blocked).unwrap();

            let start = (
                rng.generate_range(0..num_rows),
                rng.generate_range(0..num_columns),
            );
            let goal = (
                rng.generate_range(0..num_rows),
                rng.generate_range(0..num_columns),
            );

            let reference = brute_force(&grid, config, start);
            let expected = if grid.is_blocked(goal) {
                None
            } else {
                reference[grid.index_of(goal).unwrap()]
            };

            let result = pathfinder.find_path(&grid, start, goal).unwrap();
            assert_eq!(
                result.total_cost(),
                expected,
                "{:?} {:?} {:?} {:?}",
                config,
                grid,
                start,
                goal
            );
            if let Some(path) = result.path() {
                assert_valid(&grid, config, path, start, goal);
            }
        }
    }

    #[test]
    fn matches_brute_force() {
        check_against_brute_force(&Pathfinder::default(), 0x5eed, 200);
    }

    #[test]
    fn matches_brute_force_with_move_costs() {
        let costs = [(1, 2), (2, 3), (3, 2), (1, 5), (7, 30), (5, 5), (1, 100)];
        for (i, &(orthogonal, diagonal)) in costs.iter().enumerate() {
            let config = SearchConfig::DEFAULT.with_move_costs(orthogonal, diagonal);
            check_against_brute_force(&Pathfinder::new(config), i as u64, 150);
        }
    }

    #[test]
    fn cheap_diagonals() {
        let grid = Grid::new(7, 8, [(4, 5), (4, 6), (3, 6)]).unwrap();

        for &(orthogonal, diagonal) in [(10, 1), (2, 1), (1, 1)].iter() {
            let config = SearchConfig::DEFAULT.with_move_costs(orthogonal, diagonal);

            // Manhattan would overestimate, so the costs are refused
            assert_eq!(
                Pathfinder::new(config).find_path(&grid, (5, 7), (3, 4)),
                Err(SearchError::InvalidMoveCost {
                    orthogonal,
                    diagonal
                })
            );

            // an admissible Heuristic still finds the cheapest Paths
            let dijkstra = Pathfinder::new(config).with_heuristic(|_: Point, _: Point| 0usize);
            let seed = (orthogonal * 31 + diagonal) as u64;
            check_against_brute_force(&dijkstra, seed, 150);
        }
    }

    #[test]
    fn zero_heuristic_agrees() {
        let mut rng = WyRand::new_seed(7);
        let manhattan = Pathfinder::default();
        let dijkstra = Pathfinder::default().with_heuristic(|_: Point, _: Point| 0usize);

        for _ in 0..50 {
            let blocked: Vec<Point> = (0..10)
                .map(|_| (rng.generate_range(0..6usize), rng.generate_range(0..6usize)))
                .filter(|&p| p != (0, 0) && p != (5, 5))
                .collect();
            let grid = Grid::new(6, 6, blocked).unwrap();

            let a = manhattan.search(&grid, (0, 0), (5, 5)).unwrap();
            let b = dijkstra.search(&grid, (0, 0), (5, 5)).unwrap();
            assert_eq!(a.result().total_cost(), b.result().total_cost());
            assert!(a.expanded() <= b.expanded());
        }
    }

    #[test]
    fn custom_move_costs() {
        let grid = Grid::new(3, 5, []).unwrap();
        // diagonals are more expensive than two straight moves
        let pathfinder = Pathfinder::new(SearchConfig::DEFAULT.with_move_costs(1, 3));

        let result = pathfinder.find_path(&grid, (0, 0), (2, 2)).unwrap();
        let path = result.path().unwrap();
        assert_eq!(path.cost(), 4);
        assert_eq!(path.len(), 5);
        assert_valid(&grid, pathfinder.config(), path, (0, 0), (2, 2));
    }

    #[test]
    fn deterministic() {
        let grid = Grid::new(12, 12, [(4, 4), (4, 5), (4, 6), (5, 4), (6, 4)]).unwrap();
        let pathfinder = Pathfinder::default();

        let first = pathfinder.find_path(&grid, (0, 0), (11, 11)).unwrap();
        for _ in 0..10 {
            assert_eq!(pathfinder.find_path(&grid, (0, 0), (11, 11)).unwrap(), first);
        }
    }

    #[test]
    fn cell_records() {
        let grid = Grid::new(5, 5, SCENARIO_BLOCKED).unwrap();
        let pathfinder = Pathfinder::default();
        let search = pathfinder.search(&grid, (0, 0), (2, 3)).unwrap();

        assert!(search.cell((2, 2)).is_none());
        assert_eq!(search.cells().count(), 21);
        assert_eq!(search.start(), (0, 0));
        assert_eq!(search.goal(), (2, 3));
        assert_eq!((search.num_rows(), search.num_columns()), (5, 5));

        let start = search.cell((0, 0)).unwrap();
        assert_eq!(start.path_cost, 0);
        assert_eq!(start.parent, None);
        assert_eq!(start.state, CellState::Closed);

        for cell in search.cells() {
            assert_eq!(cell.heuristic_cost, Manhattan.estimate(cell.pos, (2, 3)));
            if !cell.is_reached() {
                continue;
            }
            assert_eq!(cell.final_cost, cell.path_cost + cell.heuristic_cost);
            // every reached cell is exactly one move away from its parent's cost
            if let Some(parent) = cell.parent {
                let parent = search.cell(parent).unwrap();
                assert_eq!(parent.state, CellState::Closed);
                let step = step_cost(pathfinder.config(), parent.pos, cell.pos).unwrap();
                assert_eq!(cell.path_cost, parent.path_cost + step);
            }
        }

        // closed cells carry their optimal cost
        let reference = brute_force(&grid, pathfinder.config(), (0, 0));
        for cell in search.cells().filter(|c| c.state == CellState::Closed) {
            assert_eq!(
                Some(cell.path_cost),
                reference[grid.index_of(cell.pos).unwrap()]
            );
        }
    }

    #[test]
    fn budget() {
        let grid = Grid::new(10, 10, []).unwrap();

        let limited = Pathfinder::new(SearchConfig::DEFAULT.with_max_expansions(1));
        assert_eq!(
            limited.find_path(&grid, (0, 0), (9, 9)),
            Err(SearchError::BudgetExhausted { expanded: 1 })
        );
        assert!(limited.find_path(&grid, (4, 4), (4, 4)).unwrap().is_found());

        let unlimited = Pathfinder::default().search(&grid, (0, 0), (9, 9)).unwrap();
        let exact = Pathfinder::new(SearchConfig::DEFAULT.with_max_expansions(unlimited.expanded()));
        assert_eq!(
            exact.find_path(&grid, (0, 0), (9, 9)).unwrap(),
            unlimited.into_result()
        );
    }
}
