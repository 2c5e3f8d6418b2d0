use super::{Cell, Grid};
use crate::{Heuristic, Point};

/// One [`Cell`] per Grid position, stored row-major. Blocked positions have no record.
#[derive(Clone, Debug)]
pub struct CellList {
    num_columns: usize,
    cells: Vec<Option<Cell>>,
}

impl CellList {
    /// Creates fresh records for every open cell of `grid`, estimating each against `goal`.
    pub fn new<H: Heuristic + ?Sized>(grid: &Grid, heuristic: &H, goal: Point) -> Self {
        let cells = grid
            .points()
            .map(|pos| {
                if grid.is_open(pos) {
                    Some(Cell::new(pos, heuristic.estimate(pos, goal)))
                } else {
                    None
                }
            })
            .collect();
        Self {
            num_columns: grid.num_columns(),
            cells,
        }
    }

    fn slot(&self, (row, column): Point) -> Option<usize> {
        if column >= self.num_columns {
            return None;
        }
        row.checked_mul(self.num_columns)?
            .checked_add(column)
            .filter(|&index| index < self.cells.len())
    }

    /// The record at `pos`, or `None` if `pos` is blocked or outside the Grid.
    pub fn get(&self, pos: Point) -> Option<&Cell> {
        self.slot(pos).and_then(|index| self.cells[index].as_ref())
    }

    pub fn get_mut(&mut self, pos: Point) -> Option<&mut Cell> {
        let index = self.slot(pos)?;
        self.cells[index].as_mut()
    }

    pub fn values(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter().flatten()
    }
}

use std::ops::{Index, IndexMut};
impl Index<Point> for CellList {
    type Output = Cell;
    #[track_caller]
    fn index(&self, pos: Point) -> &Cell {
        match self.get(pos) {
            Some(cell) => cell,
            None => panic!("no open cell at {:?}", pos),
        }
    }
}
impl IndexMut<Point> for CellList {
    #[track_caller]
    fn index_mut(&mut self, pos: Point) -> &mut Cell {
        match self.get_mut(pos) {
            Some(cell) => cell,
            None => panic!("no open cell at {:?}", pos),
        }
    }
}
