use rand::rngs::SmallRng;
use rand::Rng;

use super::{seeded_rng, ShipPlacer};
use crate::board::Layout;
use crate::common::BoardError;
use crate::config::{FLEET, RANDOM_PLACEMENT_ATTEMPTS};
use crate::ship::Ship;

/// Unconstrained random placement, the baseline every biased placer falls
/// back to.
pub struct RandomPlacer {
    rng: SmallRng,
}

impl RandomPlacer {
    pub fn new() -> Self {
        Self::from_rng(seeded_rng(None))
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(seeded_rng(Some(seed)))
    }

    pub fn from_rng(rng: SmallRng) -> Self {
        Self { rng }
    }
}

impl Default for RandomPlacer {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample each ship's orientation and in-bounds start until it fits.
pub(crate) fn place_fleet<R: Rng>(rng: &mut R) -> Result<Vec<Ship>, BoardError> {
    let mut layout = Layout::new();
    for def in FLEET {
        layout.place_random(rng, def, RANDOM_PLACEMENT_ATTEMPTS)?;
    }
    Ok(layout.into_ships())
}

impl ShipPlacer for RandomPlacer {
    fn place_ships(&mut self) -> Result<Vec<Ship>, BoardError> {
        place_fleet(&mut self.rng)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
