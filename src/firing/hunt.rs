//! Fired-shot bookkeeping and the hunt queue shared by the targeting
//! strategies.

use std::collections::VecDeque;

use crate::bitboard::Cells;
use crate::config::{BOARD_EXHAUSTED_SHOT, BOARD_SIZE};
use crate::coord::{Coordinate, ORTHOGONAL};

/// Order in which the neighbours of a fresh hit are queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighborOrder {
    /// Up, down, left, right.
    Fixed,
    /// Along the border first when the hit lies on one: left/right on the
    /// top and bottom rows, up/down on the outer columns.
    EdgeAware,
}

const ALONG_ROW_FIRST: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl NeighborOrder {
    fn directions(self, at: Coordinate) -> [(i8, i8); 4] {
        let last = BOARD_SIZE - 1;
        match self {
            NeighborOrder::EdgeAware if at.y == 0 || at.y == last => ALONG_ROW_FIRST,
            NeighborOrder::EdgeAware | NeighborOrder::Fixed => ORTHOGONAL,
        }
    }
}

/// Every coordinate this game has fired at or been told about, the hits
/// among them, and the queue of cells to probe next.
#[derive(Debug, Clone)]
pub struct HuntState {
    fired: Cells,
    hits: Cells,
    targets: VecDeque<Coordinate>,
    order: NeighborOrder,
}

impl HuntState {
    pub fn new(order: NeighborOrder) -> Self {
        Self {
            fired: Cells::new(),
            hits: Cells::new(),
            targets: VecDeque::new(),
            order,
        }
    }

    pub fn fired(&self) -> Cells {
        self.fired
    }

    pub fn hits(&self) -> Cells {
        self.hits
    }

    /// Fired cells that were not hits.
    pub fn misses(&self) -> Cells {
        self.fired & !self.hits
    }

    pub fn is_hunting(&self) -> bool {
        !self.targets.is_empty()
    }

    pub fn queued(&self) -> impl Iterator<Item = &Coordinate> {
        self.targets.iter()
    }

    /// Record a hit. The first report of a cell queues its unfired
    /// neighbours; repeats change nothing. Returns `true` for a new hit.
    pub fn record_hit(&mut self, at: Coordinate) -> bool {
        if !at.is_on_board() {
            return false;
        }
        self.fired.insert(at);
        if !self.hits.insert(at) {
            return false;
        }
        for (dx, dy) in self.order.directions(at) {
            if let Some(next) = at.offset(dx, dy) {
                if !self.fired.contains(next) && !self.targets.contains(&next) {
                    self.targets.push_back(next);
                }
            }
        }
        true
    }

    pub fn record_miss(&mut self, at: Coordinate) {
        self.fired.insert(at);
    }

    /// Leave hunt mode.
    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    /// Next queued cell not yet fired upon, marked as fired.
    pub fn next_target(&mut self) -> Option<Coordinate> {
        while let Some(at) = self.targets.pop_front() {
            if self.fired.insert(at) {
                return Some(at);
            }
        }
        None
    }

    /// Mark `at` as fired; `false` if it already was.
    pub fn take(&mut self, at: Coordinate) -> bool {
        self.fired.insert(at)
    }

    /// First unfired cell in row-major order, marked as fired. Once the
    /// whole board is spent this is the fixed exhausted-board shot.
    pub fn take_first_unfired(&mut self) -> Coordinate {
        match Coordinate::all().find(|&c| !self.fired.contains(c)) {
            Some(at) => {
                self.fired.insert(at);
                at
            }
            None => BOARD_EXHAUSTED_SHOT,
        }
    }

    pub fn reset(&mut self) {
        self.fired.clear();
        self.hits.clear();
        self.targets.clear();
    }
}
