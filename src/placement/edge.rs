use rand::rngs::SmallRng;
use rand::Rng;

use super::{seeded_rng, ShipPlacer};
use crate::board::Layout;
use crate::common::BoardError;
use crate::config::{BIASED_PLACEMENT_ATTEMPTS, BOARD_SIZE, FLEET, RANDOM_PLACEMENT_ATTEMPTS};
use crate::coord::Coordinate;
use crate::ship::{Orientation, Ship, ShipDef};

/// Keeps ships on the four border lines, away from opponents that open in
/// the centre.
pub struct EdgePlacer {
    rng: SmallRng,
}

impl EdgePlacer {
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

impl Default for EdgePlacer {
    fn default() -> Self {
        Self::new()
    }
}

/// Random start on one of the four border lines, lying along that line.
fn edge_candidate<R: Rng>(rng: &mut R, def: ShipDef) -> (Coordinate, Orientation) {
    let last = BOARD_SIZE - 1;
    let along = rng.random_range(0..=BOARD_SIZE - def.length());
    match rng.random_range(0..4u8) {
        0 => (Coordinate::new(along, 0), Orientation::Horizontal),
        1 => (Coordinate::new(along, last), Orientation::Horizontal),
        2 => (Coordinate::new(0, along), Orientation::Vertical),
        _ => (Coordinate::new(last, along), Orientation::Vertical),
    }
}

pub(crate) fn place_fleet<R: Rng>(rng: &mut R) -> Result<Vec<Ship>, BoardError> {
    let mut layout = Layout::new();
    for def in FLEET {
        let placed = (0..BIASED_PLACEMENT_ATTEMPTS).find_map(|_| {
            let (start, orientation) = edge_candidate(rng, def);
            layout.try_place(def, start, orientation)
        });
        if placed.is_none() {
            log::debug!("{} found no free edge, placing at random", def.name());
            layout.place_random(rng, def, RANDOM_PLACEMENT_ATTEMPTS)?;
        }
    }
    Ok(layout.into_ships())
}

impl ShipPlacer for EdgePlacer {
    fn place_ships(&mut self) -> Result<Vec<Ship>, BoardError> {
        place_fleet(&mut self.rng)
    }

    fn name(&self) -> &'static str {
        "edge"
    }
}
