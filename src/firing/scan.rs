use log::debug;

use super::hunt::{HuntState, NeighborOrder};
use super::FiringStrategy;
use crate::coord::Coordinate;

/// Hunt-and-scan targeting over a fixed visiting order.
///
/// Queued neighbours of fresh hits are drained first. Otherwise the cursor
/// walks `order`, skipping cells already fired upon.
#[derive(Debug, Clone)]
pub struct ScanStrategy {
    name: &'static str,
    order: Vec<Coordinate>,
    cursor: usize,
    hunt: HuntState,
}

impl ScanStrategy {
    /// `order` should list every board cell once; anything it misses is
    /// reached through the row-major fallback.
    pub fn new(name: &'static str, order: Vec<Coordinate>, neighbors: NeighborOrder) -> Self {
        Self {
            name,
            order,
            cursor: 0,
            hunt: HuntState::new(neighbors),
        }
    }

    pub fn order(&self) -> &[Coordinate] {
        &self.order
    }

    pub fn hunt(&self) -> &HuntState {
        &self.hunt
    }

    fn next_in_order(&mut self) -> Option<Coordinate> {
        while let Some(&at) = self.order.get(self.cursor) {
            self.cursor += 1;
            if self.hunt.take(at) {
                return Some(at);
            }
        }
        None
    }
}

impl FiringStrategy for ScanStrategy {
    fn next_shot(&mut self) -> Coordinate {
        if let Some(at) = self.hunt.next_target() {
            debug!("{}: hunting at {}", self.name, at);
            return at;
        }
        match self.next_in_order() {
            Some(at) => at,
            None => self.hunt.take_first_unfired(),
        }
    }

    fn record_hit(&mut self, at: Coordinate) {
        if self.hunt.record_hit(at) {
            debug!("{}: hit at {}, {} targets queued", self.name, at, self.hunt.queued().count());
        }
    }

    fn record_miss(&mut self, at: Coordinate) {
        self.hunt.record_miss(at);
    }

    fn record_sunk(&mut self) {
        self.hunt.clear_targets();
    }

    fn reset(&mut self) {
        self.cursor = 0;
        self.hunt.reset();
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
