#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find optimal Paths on a fixed-size Grid with A*.
//!
//! ## Introduction
//! The Grid is a rectangle of `num_rows × num_columns` Tiles, each of which is either open or
//! blocked. Movement is 8-directional: orthogonal steps cost `10` and diagonal steps cost `14`
//! by default (an integer-scaled `10·√2`). The search uses an admissible Heuristic, so the
//! returned Path is always one of the cheapest Paths between the two Points.
//!
//! Every search owns its own cell records and open list. Nothing is shared between calls,
//! so independent searches can run concurrently over the same [`Grid`].
//!
//! ## Examples
//! The one-call form:
//! ```
//! use grid_astar::{find_path, PathResult};
//!
//! let result = find_path(5, 5, (0, 0), (2, 3), &[(0, 4), (2, 2), (3, 1), (3, 3)]).unwrap();
//!
//! assert!(result.is_found());
//! assert_eq!(result.total_cost(), Some(38));
//! ```
//!
//! An unreachable Goal is not an Error:
//! ```
//! use grid_astar::find_path;
//!
//! // a solid wall in column 1
//! let wall = [(0, 1), (1, 1), (2, 1)];
//! let result = find_path(3, 3, (0, 0), (2, 2), &wall).unwrap();
//!
//! assert!(!result.is_found());
//! ```
//!
//! ### Reusing a Grid
//! A [`Grid`] is immutable and can be searched any number of times by a [`Pathfinder`]:
//! ```
//! use grid_astar::{Grid, Pathfinder, SearchConfig};
//!
//! let grid = Grid::new(8, 8, [(3, 3), (3, 4), (4, 3)]).unwrap();
//! let pathfinder = Pathfinder::new(SearchConfig::DEFAULT);
//!
//! let a = pathfinder.find_path(&grid, (0, 0), (7, 7)).unwrap();
//! let b = pathfinder.find_path(&grid, (7, 0), (0, 7)).unwrap();
//!
//! assert!(a.is_found() && b.is_found());
//! ```
//!
//! ### Configuration
//! Move costs and an optional expansion budget are set through [`SearchConfig`]; the
//! Heuristic can be swapped for any `Fn(Point, Point) -> Cost`:
//! ```
//! use grid_astar::{Grid, Pathfinder, Point, SearchConfig};
//!
//! let grid = Grid::new(4, 4, []).unwrap();
//! let dijkstra = Pathfinder::new(SearchConfig::DEFAULT.with_move_costs(2, 3))
//!     .with_heuristic(|_: Point, _: Point| 0usize);
//!
//! let result = dijkstra.find_path(&grid, (0, 0), (3, 3)).unwrap();
//! assert_eq!(result.total_cost(), Some(9));
//! ```
//!
//! ## Features
//! - `parallel` (default): [`Pathfinder::find_paths`] runs its queries on the rayon thread pool.
//! - `log`: logs internal timings and search outcomes through the `log` crate.
//! - `serde`: derives `Serialize`/`Deserialize` for the configuration and result types.

/// A shorthand for Points on the grid, as `(row, column)`
pub type Point = (usize, usize);

/// The Type used for all Path costs
pub type Cost = usize;

type PointSet = hashbrown::HashSet<Point>;

// a Macro to log::trace the time since $timer, and restart $timer
#[cfg(feature = "log")]
macro_rules! re_trace {
    ($msg: literal, $timer: ident) => {
        let now = std::time::Instant::now();
        log::trace!(concat!("time to ", $msg, ": {:?}"), now - $timer);
        #[allow(unused)]
        let $timer = now;
    };
}
#[cfg(not(feature = "log"))]
macro_rules! re_trace {
    // does nothing without log feature
    ($msg: literal, $timer: ident) => {};
}

mod batch;

mod config;
pub use self::config::SearchConfig;

mod error;
pub use self::error::{Role, SearchError};

mod grid;
pub use self::grid::{find_path, Cell, CellState, Grid, Pathfinder, Search};

pub mod heuristic;
pub use self::heuristic::{Heuristic, Manhattan};

pub mod neighbors;

mod path;
pub use self::path::{Path, PathResult};

pub mod render;


