//! Layout under construction: the bounds and collision gate every placement
//! algorithm goes through.

use log::debug;
use rand::Rng;

use crate::bitboard::Cells;
use crate::common::BoardError;
use crate::config::BOARD_SIZE;
use crate::coord::Coordinate;
use crate::ship::{cells_of, Orientation, Ship, ShipDef};

/// Ships placed so far and the cells they occupy.
#[derive(Clone, Debug, Default)]
pub struct Layout {
    ships: Vec<Ship>,
    occupied: Cells,
}

impl Layout {
    /// Create an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Occupancy mask of all placed ships.
    pub fn occupied(&self) -> Cells {
        self.occupied
    }

    /// `true` when every cell is on the board and none is occupied.
    pub fn fits(&self, start: Coordinate, length: u8, orientation: Orientation) -> bool {
        cells_of(start, length, orientation).all(|c| c.is_on_board() && !self.occupied.contains(c))
    }

    /// Place `def` at `start`, rejecting out-of-bounds or overlapping positions.
    pub fn place(
        &mut self,
        def: ShipDef,
        start: Coordinate,
        orientation: Orientation,
    ) -> Result<Ship, BoardError> {
        let ship = Ship::new(def, start, orientation)?;
        let mask = ship.footprint();
        if !self.occupied.is_disjoint(&mask) {
            return Err(BoardError::Overlaps { ship: def.name() });
        }
        self.occupied |= mask;
        self.ships.push(ship);
        Ok(ship)
    }

    /// Every legal `(start, orientation)` for `def`, scanning rows top to
    /// bottom, columns left to right, horizontal before vertical.
    pub fn legal_placements(&self, def: ShipDef) -> Vec<(Coordinate, Orientation)> {
        let mut out = Vec::new();
        for start in Coordinate::all() {
            for orientation in Orientation::ALL {
                if self.fits(start, def.length(), orientation) {
                    out.push((start, orientation));
                }
            }
        }
        out
    }

    /// Returns a random non-overlapping `(start, orientation)` for `def`,
    /// giving up after `attempts` samples.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        def: ShipDef,
        attempts: usize,
    ) -> Result<(Coordinate, Orientation), BoardError> {
        let len = def.length();
        for _ in 0..attempts {
            let orientation = Orientation::random(rng);
            let max_x = match orientation {
                Orientation::Horizontal => BOARD_SIZE - len,
                Orientation::Vertical => BOARD_SIZE - 1,
            };
            let max_y = match orientation {
                Orientation::Horizontal => BOARD_SIZE - 1,
                Orientation::Vertical => BOARD_SIZE - len,
            };
            let start = Coordinate::new(rng.random_range(0..=max_x), rng.random_range(0..=max_y));
            if self.fits(start, len, orientation) {
                return Ok((start, orientation));
            }
        }
        Err(BoardError::PlacementExhausted {
            ship: def.name(),
            attempts,
        })
    }

    /// Place `def` at a random legal position, see [`Layout::random_placement`].
    pub fn place_random<R: Rng>(
        &mut self,
        rng: &mut R,
        def: ShipDef,
        attempts: usize,
    ) -> Result<Ship, BoardError> {
        let (start, orientation) = self.random_placement(rng, def, attempts)?;
        debug!("random placement of {} at {} {:?}", def.name(), start, orientation);
        self.place(def, start, orientation)
    }

    /// Place `def` at `start` if it fits; `None` leaves the layout untouched.
    pub fn try_place(
        &mut self,
        def: ShipDef,
        start: Coordinate,
        orientation: Orientation,
    ) -> Option<Ship> {
        if self.fits(start, def.length(), orientation) {
            self.place(def, start, orientation).ok()
        } else {
            None
        }
    }

    pub fn into_ships(self) -> Vec<Ship> {
        self.ships
    }
}
