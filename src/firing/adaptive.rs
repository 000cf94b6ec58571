use log::debug;

use super::checkerboard::checkerboard_order;
use super::hunt::{HuntState, NeighborOrder};
use super::FiringStrategy;
use crate::config::BOARD_SIZE;
use crate::coord::Coordinate;
use crate::detector::{OpponentStrategy, SharedDetector};

/// Spiral centre on both axes.
const SPIRAL_CENTER: u8 = 4;

/// Chooses its search pattern from the opponent classification. Against
/// checkerboard shooters (who tend to place on odd lines) it spirals out
/// from the centre favouring even lines; otherwise it runs the
/// bottom-right checkerboard.
pub struct AdaptiveStrategy {
    detector: SharedDetector,
    hunt: HuntState,
    checkerboard: Vec<Coordinate>,
}

impl AdaptiveStrategy {
    pub fn new(detector: SharedDetector) -> Self {
        Self {
            detector,
            hunt: HuntState::new(NeighborOrder::Fixed),
            checkerboard: checkerboard_order(),
        }
    }

    /// First unfired cell on the smallest square ring around the centre,
    /// preferring cells with an even column or an even row.
    fn spiral_shot(&self) -> Option<Coordinate> {
        let fired = self.hunt.fired();
        let last = BOARD_SIZE - 1;
        for radius in 0..BOARD_SIZE {
            let lo = SPIRAL_CENTER.saturating_sub(radius);
            let hi = (SPIRAL_CENTER + radius).min(last);
            let ring: Vec<Coordinate> = (lo..=hi)
                .flat_map(|x| (lo..=hi).map(move |y| Coordinate::new(x, y)))
                .filter(|c| {
                    c.x.abs_diff(SPIRAL_CENTER) == radius || c.y.abs_diff(SPIRAL_CENTER) == radius
                })
                .filter(|c| !fired.contains(*c))
                .collect();
            let preferred = ring.iter().find(|c| c.x % 2 == 0 || c.y % 2 == 0);
            if let Some(&at) = preferred.or(ring.first()) {
                return Some(at);
            }
        }
        None
    }

    fn checkerboard_shot(&self) -> Option<Coordinate> {
        let fired = self.hunt.fired();
        self.checkerboard
            .iter()
            .copied()
            .find(|c| !fired.contains(*c))
    }
}

impl FiringStrategy for AdaptiveStrategy {
    fn next_shot(&mut self) -> Coordinate {
        if let Some(at) = self.hunt.next_target() {
            debug!("adaptive: hunting at {}", at);
            return at;
        }
        let pick = match self.detector.detected() {
            OpponentStrategy::CornerCheckerboard => self.spiral_shot(),
            OpponentStrategy::CenterFirst
            | OpponentStrategy::Unknown
            | OpponentStrategy::Other => self.checkerboard_shot(),
        };
        match pick {
            Some(at) => {
                self.hunt.take(at);
                at
            }
            None => self.hunt.take_first_unfired(),
        }
    }

    fn record_hit(&mut self, at: Coordinate) {
        self.hunt.record_hit(at);
    }

    fn record_miss(&mut self, at: Coordinate) {
        self.hunt.record_miss(at);
    }

    fn record_sunk(&mut self) {
        self.hunt.clear_targets();
    }

    /// The detector is shared across games and is not touched here.
    fn reset(&mut self) {
        self.hunt.reset();
    }

    fn name(&self) -> &'static str {
        "adaptive"
    }
}
