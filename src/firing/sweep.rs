use super::FiringStrategy;
use crate::config::BOARD_SIZE;
use crate::coord::Coordinate;

/// Baseline bot: row-major from the top-left corner, wrapping back to the
/// start after the last cell. Hit and miss feedback is ignored.
#[derive(Debug, Clone, Default)]
pub struct SweepStrategy {
    next: usize,
}

impl SweepStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FiringStrategy for SweepStrategy {
    fn next_shot(&mut self) -> Coordinate {
        let size = usize::from(BOARD_SIZE);
        let index = self.next % (size * size);
        self.next = index + 1;
        // Both components are below BOARD_SIZE.
        Coordinate::new((index % size) as u8, (index / size) as u8)
    }

    fn record_hit(&mut self, _at: Coordinate) {}

    fn record_miss(&mut self, _at: Coordinate) {}

    fn record_sunk(&mut self) {}

    fn reset(&mut self) {
        self.next = 0;
    }

    fn name(&self) -> &'static str {
        "sweep"
    }
}
