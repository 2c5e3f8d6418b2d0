use crate::{Cost, Point};

/// Where a cell stands in a running search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Not reached yet
    Unvisited,
    /// Reached, waiting in the open list
    Open,
    /// Expanded; its `path_cost` is final
    Closed,
}

/// The search record of a single open Grid cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// The position of this cell
    pub pos: Point,
    /// The Heuristic's estimate from here to the goal
    pub heuristic_cost: Cost,
    /// The cheapest known cost from the start to here
    pub path_cost: Cost,
    /// `path_cost + heuristic_cost`
    pub final_cost: Cost,
    /// The predecessor on the cheapest known Path, `None` for the start and unvisited cells
    pub parent: Option<Point>,
    /// Where this cell stands in the search
    pub state: CellState,
}

impl Cell {
    pub(crate) fn new(pos: Point, heuristic_cost: Cost) -> Cell {
        Cell {
            pos,
            heuristic_cost,
            path_cost: 0,
            final_cost: heuristic_cost,
            parent: None,
            state: CellState::Unvisited,
        }
    }

    /// Records a cheaper way to reach this cell and (re)opens it.
    pub(crate) fn relax(&mut self, path_cost: Cost, parent: Option<Point>) {
        debug_assert_ne!(self.state, CellState::Closed);
        self.path_cost = path_cost;
        self.final_cost = path_cost.saturating_add(self.heuristic_cost);
        self.parent = parent;
        self.state = CellState::Open;
    }

    /// Whether the search has reached this cell.
    pub fn is_reached(&self) -> bool {
        self.state != CellState::Unvisited
    }
}
