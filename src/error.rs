//! Errors reported for malformed search input.
//!
//! An unreachable Goal is not an Error; it is reported as [`PathResult::NotFound`](crate::PathResult::NotFound).

use std::fmt;

use thiserror::Error;

use crate::{Cost, Point};

/// Which input a coordinate belonged to when it was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The start of the search
    Start,
    /// The goal of the search
    Goal,
    /// One of the blocked coordinates of the Grid
    Blocked,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Start => f.write_str("start"),
            Role::Goal => f.write_str("goal"),
            Role::Blocked => f.write_str("blocked"),
        }
    }
}

/// Errors that stop a search before it produces a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The Grid has no rows or no columns.
    #[error("Grid dimensions must be positive, got {num_rows}x{num_columns}")]
    EmptyGrid {
        /// The requested number of rows
        num_rows: usize,
        /// The requested number of columns
        num_columns: usize,
    },

    /// `num_rows * num_columns` does not fit in memory addressing.
    #[error("Grid of {num_rows}x{num_columns} cells is too large")]
    GridTooLarge {
        /// The requested number of rows
        num_rows: usize,
        /// The requested number of columns
        num_columns: usize,
    },

    /// A coordinate lies outside `[0, num_rows) × [0, num_columns)`.
    #[error("{role} position {pos:?} is outside the {num_rows}x{num_columns} grid")]
    OutOfBounds {
        /// Which input the coordinate belonged to
        role: Role,
        /// The rejected coordinate
        pos: Point,
        /// The number of rows of the Grid
        num_rows: usize,
        /// The number of columns of the Grid
        num_columns: usize,
    },

    /// A move cost is zero, or too low for the Heuristic to stay admissible.
    #[error("Unsupported move costs orthogonal={orthogonal} diagonal={diagonal}")]
    InvalidMoveCost {
        /// The configured orthogonal move cost
        orthogonal: Cost,
        /// The configured diagonal move cost
        diagonal: Cost,
    },

    /// The configured expansion budget ran out before the search finished.
    #[error("Search gave up after expanding {expanded} cells")]
    BudgetExhausted {
        /// The number of cells expanded before giving up
        expanded: usize,
    },
}

impl SearchError {
    /// Whether this Error was caused by the caller's input, as opposed to the search budget.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, SearchError::BudgetExhausted { .. })
    }
}
