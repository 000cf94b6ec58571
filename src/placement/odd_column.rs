use rand::rngs::SmallRng;
use rand::Rng;

use super::{seeded_rng, ShipPlacer};
use crate::board::Layout;
use crate::common::BoardError;
use crate::config::{
    BIASED_PLACEMENT_ATTEMPTS, BOARD_SIZE, FLEET, ODD_COLUMN_VERTICAL_PHASE,
    RANDOM_PLACEMENT_ATTEMPTS,
};
use crate::coord::Coordinate;
use crate::ship::{Orientation, Ship, ShipDef};

const ODD_LINES: [u8; 5] = [1, 3, 5, 7, 9];

/// Stands ships upright on odd columns, falling back to odd rows, to slip
/// through the gaps of a corner-started checkerboard sweep.
pub struct OddColumnPlacer {
    rng: SmallRng,
}

impl OddColumnPlacer {
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

impl Default for OddColumnPlacer {
    fn default() -> Self {
        Self::new()
    }
}

fn odd_line_candidate<R: Rng>(rng: &mut R, def: ShipDef, attempt: usize) -> (Coordinate, Orientation) {
    let line = ODD_LINES[rng.random_range(0..ODD_LINES.len())];
    let along = rng.random_range(0..=BOARD_SIZE - def.length());
    if attempt < ODD_COLUMN_VERTICAL_PHASE {
        (Coordinate::new(line, along), Orientation::Vertical)
    } else {
        (Coordinate::new(along, line), Orientation::Horizontal)
    }
}

pub(crate) fn place_fleet<R: Rng>(rng: &mut R) -> Result<Vec<Ship>, BoardError> {
    let mut layout = Layout::new();
    for def in FLEET {
        let placed = (0..BIASED_PLACEMENT_ATTEMPTS).find_map(|attempt| {
            let (start, orientation) = odd_line_candidate(rng, def, attempt);
            layout.try_place(def, start, orientation)
        });
        if placed.is_none() {
            log::debug!("{} found no odd line, placing at random", def.name());
            layout.place_random(rng, def, RANDOM_PLACEMENT_ATTEMPTS)?;
        }
    }
    Ok(layout.into_ships())
}

impl ShipPlacer for OddColumnPlacer {
    fn place_ships(&mut self) -> Result<Vec<Ship>, BoardError> {
        place_fleet(&mut self.rng)
    }

    fn name(&self) -> &'static str {
        "odd-column"
    }
}
