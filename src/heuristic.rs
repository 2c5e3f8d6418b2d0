//! Estimates of the remaining cost to the Goal.
//!
//! A [`Pathfinder`](crate::Pathfinder) only ever asks its Heuristic for `estimate(pos, goal)`,
//! once per open cell and search. Any admissible estimate (one that never exceeds the true
//! remaining cost) keeps the returned Paths optimal.

use crate::{Cost, Point, SearchConfig, SearchError};

/// A lower bound for the cost of walking from one Point to another.
pub trait Heuristic {
    /// Estimates the cost of the cheapest Path from `pos` to `goal`.
    fn estimate(&self, pos: Point, goal: Point) -> Cost;

    /// Rejects move costs under which this Heuristic would overestimate.
    ///
    /// The default accepts every configuration; the caller vouches for admissibility.
    fn check_costs(&self, config: &SearchConfig) -> Result<(), SearchError> {
        let _ = config;
        Ok(())
    }
}

/// The Manhattan distance `|Δrow| + |Δcolumn|`, unscaled by move costs.
///
/// An orthogonal step lowers this estimate by at most 1 and a diagonal step by at most 2, so it
/// is admissible and consistent only while `orthogonal_cost >= 1` and `diagonal_cost >= 2`.
/// Cheaper diagonals are rejected with [`SearchError::InvalidMoveCost`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    fn estimate(&self, (row, column): Point, (goal_row, goal_column): Point) -> Cost {
        row.abs_diff(goal_row) + column.abs_diff(goal_column)
    }

    fn check_costs(&self, config: &SearchConfig) -> Result<(), SearchError> {
        if config.orthogonal_cost < 1 || config.diagonal_cost < 2 {
            return Err(SearchError::InvalidMoveCost {
                orthogonal: config.orthogonal_cost,
                diagonal: config.diagonal_cost,
            });
        }
        Ok(())
    }
}

impl<F> Heuristic for F
where
    F: Fn(Point, Point) -> Cost,
{
    fn estimate(&self, pos: Point, goal: Point) -> Cost {
        self(pos, goal)
    }
}
