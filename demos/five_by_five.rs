//! Finds a Path on a small Grid and prints the Grid, the scores of every cell and the Path.
//!
//! Run with `RUST_LOG=debug cargo run --example five_by_five --features log` to see the
//! search being logged.

use grid_astar::render::{GridView, ScoreView};
use grid_astar::{Grid, Pathfinder, SearchConfig, SearchError};

fn main() -> Result<(), SearchError> {
    env_logger::init();

    let start = (0, 0);
    let goal = (2, 3);
    let grid = Grid::new(5, 5, [(0, 4), (2, 2), (3, 1), (3, 3)])?;

    println!("Grid: ");
    println!("{}", GridView::new(&grid, start, goal));

    let search = Pathfinder::new(SearchConfig::DEFAULT).search(&grid, start, goal)?;
    log::info!("expanded {} cells", search.expanded());

    println!("Scores for cells: ");
    println!("{}", ScoreView(&search));

    match search.result().path() {
        Some(path) => {
            println!("Path: ");
            println!("{}", search.result());
            println!();
            println!("{}", GridView::new(&grid, start, goal).with_path(path));
        }
        None => println!("{}", search.result()),
    }

    Ok(())
}
