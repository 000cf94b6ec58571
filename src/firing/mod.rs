//! Shot selection strategies.
//!
//! A strategy instance belongs to exactly one game. It never returns the
//! same coordinate twice, always answers with an on-board cell and, once
//! every cell has been used, falls back to
//! [`BOARD_EXHAUSTED_SHOT`](crate::config::BOARD_EXHAUSTED_SHOT).
//! Feedback calls are idempotent and feedback for off-board cells is
//! ignored.

use crate::coord::Coordinate;

pub mod adaptive;
pub mod checkerboard;
pub mod diagonal;
pub mod heatmap;
pub mod hunt;
pub mod perimeter;
pub mod scan;
pub mod sweep;

pub use adaptive::AdaptiveStrategy;
pub use heatmap::{HeatMap, HeatMapStrategy, TieBreak};
pub use hunt::{HuntState, NeighborOrder};
pub use scan::ScanStrategy;
pub use sweep::SweepStrategy;

/// Interface implemented by every targeting algorithm.
pub trait FiringStrategy: Send {
    /// Pick the next cell to fire at.
    fn next_shot(&mut self) -> Coordinate;

    fn record_hit(&mut self, at: Coordinate);

    fn record_miss(&mut self, at: Coordinate);

    /// A ship has just gone down; leave hunt mode.
    fn record_sunk(&mut self);

    /// A ship has gone down and the referee named it.
    fn record_sunk_ship(&mut self, name: &str) {
        let _ = name;
        self.record_sunk();
    }

    /// Return to the freshly constructed state.
    fn reset(&mut self);

    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;
}
