use crate::{Cost, Point};

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// An entry of the open list: a Point, the `final_cost` it was pushed with and its push order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Element {
    pub pos: Point,
    pub final_cost: Cost,
    seq: u64,
}

impl Ord for Element {
    fn cmp(&self, other: &Element) -> Ordering {
        // BinaryHeap is a max-heap: the cheapest, then oldest, entry must compare greatest
        other
            .final_cost
            .cmp(&self.final_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Element) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The frontier of a search, ordered by ascending `final_cost`.
///
/// Equal costs leave in the order they were pushed (FIFO). Pushing a Point that is already
/// queued does not remove the older entry; callers discard stale entries when they pop them.
#[derive(Clone, Debug, Default)]
pub struct OpenList {
    heap: BinaryHeap<Element>,
    next_seq: u64,
}

impl OpenList {
    pub fn with_capacity(capacity: usize) -> Self {
        OpenList {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, pos: Point, final_cost: Cost) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Element {
            pos,
            final_cost,
            seq,
        });
    }

    pub fn pop_min(&mut self) -> Option<Element> {
        self.heap.pop()
    }
}
