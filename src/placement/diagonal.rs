use rand::rngs::SmallRng;
use rand::Rng;

use super::{pick_weighted, place_or_fallback, seeded_rng, ShipPlacer};
use crate::board::Layout;
use crate::common::BoardError;
use crate::config::FLEET;
use crate::coord::Coordinate;
use crate::ship::{Orientation, Ship, ShipDef};

/// Start cells with `x + y` in this range count as on the diagonal band.
const BAND_MIN: u8 = 3;
const BAND_MAX: u8 = 15;

/// Doubles the odds of any start cell on the broad anti-diagonal band,
/// which row and column sweeps reach late.
pub struct DiagonalPlacer {
    rng: SmallRng,
}

impl DiagonalPlacer {
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

impl Default for DiagonalPlacer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn on_diagonal_band(start: Coordinate) -> bool {
    (BAND_MIN..=BAND_MAX).contains(&(start.x + start.y))
}

fn candidates(layout: &Layout, def: ShipDef) -> Vec<(Coordinate, Orientation, u32)> {
    layout
        .legal_placements(def)
        .into_iter()
        .map(|(start, orientation)| {
            let weight = if on_diagonal_band(start) { 2 } else { 1 };
            (start, orientation, weight)
        })
        .collect()
}

pub(crate) fn place_fleet<R: Rng>(rng: &mut R) -> Result<Vec<Ship>, BoardError> {
    let mut layout = Layout::new();
    for def in FLEET {
        let choice = pick_weighted(rng, &candidates(&layout, def));
        place_or_fallback(&mut layout, rng, def, choice)?;
    }
    Ok(layout.into_ships())
}

impl ShipPlacer for DiagonalPlacer {
    fn place_ships(&mut self) -> Result<Vec<Ship>, BoardError> {
        place_fleet(&mut self.rng)
    }

    fn name(&self) -> &'static str {
        "diagonal"
    }
}
