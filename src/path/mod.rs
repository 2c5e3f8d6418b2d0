mod result;
pub use result::PathResult;

use crate::{Cost, Point};

/// A Path on the Grid, from start to goal inclusive, together with its total cost.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    steps: Vec<Point>,
    cost: Cost,
}

impl Path {
    /// Creates a Path from its steps and total cost.
    pub fn new(steps: Vec<Point>, cost: Cost) -> Path {
        Path { steps, cost }
    }

    /// The sum of all move costs along the Path.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The number of Points on the Path, counting both ends.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the Path has no Points at all.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The first Point of the Path.
    pub fn start(&self) -> Option<Point> {
        self.steps.first().copied()
    }

    /// The last Point of the Path.
    pub fn goal(&self) -> Option<Point> {
        self.steps.last().copied()
    }

    /// The Points of the Path, in walking order.
    pub fn steps(&self) -> &[Point] {
        &self.steps
    }

    /// Iterates over the Points of the Path, in walking order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.steps.iter().copied()
    }

    /// Consumes the Path and returns its Points.
    pub fn into_steps(self) -> Vec<Point> {
        self.steps
    }
}

use std::ops::Index;
impl Index<usize> for Path {
    type Output = Point;
    #[track_caller]
    fn index(&self, index: usize) -> &Point {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
