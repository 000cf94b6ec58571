use log::debug;
use rand::rngs::SmallRng;

use super::{edge, odd_column, random, seeded_rng, ShipPlacer};
use crate::common::BoardError;
use crate::detector::{OpponentStrategy, SharedDetector};
use crate::ship::Ship;

/// Picks a counter-placement from the opponent classification: border lines
/// against centre-first shooters, odd columns against checkerboard sweeps,
/// plain random otherwise.
pub struct AdaptivePlacer {
    detector: SharedDetector,
    rng: SmallRng,
}

impl AdaptivePlacer {
    pub fn new(detector: SharedDetector) -> Self {
        Self::from_rng(detector, seeded_rng(None))
    }

    pub fn with_seed(detector: SharedDetector, seed: u64) -> Self {
        Self::from_rng(detector, seeded_rng(Some(seed)))
    }

    pub fn from_rng(detector: SharedDetector, rng: SmallRng) -> Self {
        Self { detector, rng }
    }
}

impl ShipPlacer for AdaptivePlacer {
    fn place_ships(&mut self) -> Result<Vec<Ship>, BoardError> {
        let opponent = self.detector.detected();
        debug!("adaptive placement against {:?}", opponent);
        match opponent {
            OpponentStrategy::CenterFirst => edge::place_fleet(&mut self.rng),
            OpponentStrategy::CornerCheckerboard => odd_column::place_fleet(&mut self.rng),
            OpponentStrategy::Unknown | OpponentStrategy::Other => {
                random::place_fleet(&mut self.rng)
            }
        }
    }

    fn name(&self) -> &'static str {
        "adaptive"
    }
}
