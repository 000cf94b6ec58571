use rand::rngs::SmallRng;
use rand::Rng;

use super::{place_or_fallback, seeded_rng, ShipPlacer};
use crate::board::Layout;
use crate::common::BoardError;
use crate::config::FLEET;
use crate::coord::Coordinate;
use crate::ship::{cells_of, Orientation, Ship, ShipDef};

/// Scores within this distance of the best count as ties.
const SCORE_BAND: f64 = 0.5;
const BOARD_CENTER: f64 = 4.5;
const ASYMMETRY_FACTOR: f64 = 0.3;

/// Spreads ships as far apart as possible while staying off the two board
/// diagonals, so no mirrored or clustered layout gives the fleet away.
pub struct DispersedPlacer {
    rng: SmallRng,
}

impl DispersedPlacer {
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

impl Default for DispersedPlacer {
    fn default() -> Self {
        Self::new()
    }
}

/// Midpoint used for scoring: the start cell shifted half a length along
/// the ship's axis.
fn midpoint(start: Coordinate, length: u8, orientation: Orientation) -> (f64, f64) {
    let half = f64::from(length) / 2.0;
    let (x, y) = (f64::from(start.x), f64::from(start.y));
    match orientation {
        Orientation::Horizontal => (x + half, y),
        Orientation::Vertical => (x, y + half),
    }
}

/// Score for the first ship: a flat 5 when its midpoint sits in the ring
/// between 3 and 5 cells from the centre, half the distance otherwise.
fn opening_score(start: Coordinate, length: u8, orientation: Orientation) -> f64 {
    let (cx, cy) = midpoint(start, length, orientation);
    let dist = ((cx - BOARD_CENTER).powi(2) + (cy - BOARD_CENTER).powi(2)).sqrt();
    if dist > 3.0 && dist < 5.0 {
        5.0
    } else {
        dist * 0.5
    }
}

/// Smallest Manhattan distance between the candidate and any placed cell.
fn spacing(start: Coordinate, length: u8, orientation: Orientation, placed: &[Ship]) -> f64 {
    let mut nearest: Option<u32> = None;
    for cell in cells_of(start, length, orientation) {
        for ship in placed {
            for taken in ship.cells() {
                let d = cell.manhattan(taken);
                nearest = Some(nearest.map_or(d, |n| n.min(d)));
            }
        }
    }
    nearest.map_or(0.0, f64::from)
}

/// Rewards distance from both the main diagonal and the anti-diagonal.
pub fn asymmetry_bonus(start: Coordinate, length: u8, orientation: Orientation) -> f64 {
    let (cx, cy) = midpoint(start, length, orientation);
    let diagonal = (cx - cy).abs();
    let anti_diagonal = (cx + cy - 9.0).abs();
    diagonal * ASYMMETRY_FACTOR + anti_diagonal * ASYMMETRY_FACTOR
}

/// Opening ring score for the first ship, spacing from the placed ships
/// afterwards, plus [`asymmetry_bonus`].
pub fn score(layout: &Layout, start: Coordinate, def: ShipDef, orientation: Orientation) -> f64 {
    let len = def.length();
    let base = if layout.ships().is_empty() {
        opening_score(start, len, orientation)
    } else {
        spacing(start, len, orientation, layout.ships())
    };
    base + asymmetry_bonus(start, len, orientation)
}

/// Legal placements whose score stays within the band of the best seen so
/// far. A clearly better score restarts the set.
pub fn best_candidates(layout: &Layout, def: ShipDef) -> Vec<(Coordinate, Orientation)> {
    let mut best = 0.0f64;
    let mut out = Vec::new();
    for (start, orientation) in layout.legal_placements(def) {
        let s = score(layout, start, def, orientation);
        if s > best + SCORE_BAND {
            best = s;
            out.clear();
            out.push((start, orientation));
        } else if (s - best).abs() < SCORE_BAND {
            out.push((start, orientation));
        }
    }
    out
}

pub(crate) fn place_fleet<R: Rng>(rng: &mut R) -> Result<Vec<Ship>, BoardError> {
    let mut layout = Layout::new();
    for def in FLEET {
        let candidates = best_candidates(&layout, def);
        let choice = if candidates.is_empty() {
            None
        } else {
            Some(candidates[rng.random_range(0..candidates.len())])
        };
        place_or_fallback(&mut layout, rng, def, choice)?;
    }
    Ok(layout.into_ships())
}

impl ShipPlacer for DispersedPlacer {
    fn place_ships(&mut self) -> Result<Vec<Ship>, BoardError> {
        place_fleet(&mut self.rng)
    }

    fn name(&self) -> &'static str {
        "dispersed"
    }
}
