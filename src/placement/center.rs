use rand::rngs::SmallRng;
use rand::Rng;

use super::{pick_weighted, place_or_fallback, seeded_rng, ShipPlacer};
use crate::board::Layout;
use crate::common::BoardError;
use crate::config::FLEET;
use crate::coord::Coordinate;
use crate::ship::{cells_of, Orientation, Ship, ShipDef};

/// Inclusive bounds of the centre region on both axes.
const CENTER_MIN: u8 = 2;
const CENTER_MAX: u8 = 7;

const FULLY_INSIDE_WEIGHT: u32 = 4;
const PARTLY_INSIDE_WEIGHT: u32 = 2;

/// Clusters ships around the middle of the board, against opponents that
/// work the edges first.
pub struct CenterClusterPlacer {
    rng: SmallRng,
}

impl CenterClusterPlacer {
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

impl Default for CenterClusterPlacer {
    fn default() -> Self {
        Self::new()
    }
}

fn in_center(at: Coordinate) -> bool {
    (CENTER_MIN..=CENTER_MAX).contains(&at.x) && (CENTER_MIN..=CENTER_MAX).contains(&at.y)
}

/// Weight 4 when every cell is in the centre, 2 when some are, 0 otherwise.
pub fn center_weight(start: Coordinate, length: u8, orientation: Orientation) -> u32 {
    let inside = cells_of(start, length, orientation)
        .filter(|&c| in_center(c))
        .count();
    if inside == usize::from(length) {
        FULLY_INSIDE_WEIGHT
    } else if inside > 0 {
        PARTLY_INSIDE_WEIGHT
    } else {
        0
    }
}

/// Weighted legal placements for `def`. Placements with no centre cell are
/// dropped unless nothing touches the centre, in which case every legal
/// placement comes back with weight 1.
pub fn candidates(layout: &Layout, def: ShipDef) -> Vec<(Coordinate, Orientation, u32)> {
    let legal = layout.legal_placements(def);
    let weighted: Vec<_> = legal
        .iter()
        .map(|&(start, orientation)| (start, orientation, center_weight(start, def.length(), orientation)))
        .filter(|&(_, _, w)| w > 0)
        .collect();
    if !weighted.is_empty() {
        return weighted;
    }
    legal.into_iter().map(|(s, o)| (s, o, 1)).collect()
}

pub(crate) fn place_fleet<R: Rng>(rng: &mut R) -> Result<Vec<Ship>, BoardError> {
    let mut layout = Layout::new();
    for def in FLEET {
        let choice = pick_weighted(rng, &candidates(&layout, def));
        place_or_fallback(&mut layout, rng, def, choice)?;
    }
    Ok(layout.into_ships())
}

impl ShipPlacer for CenterClusterPlacer {
    fn place_ships(&mut self) -> Result<Vec<Ship>, BoardError> {
        place_fleet(&mut self.rng)
    }

    fn name(&self) -> &'static str {
        "center"
    }
}
