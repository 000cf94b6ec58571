//! Ship definitions and placed ships.

use core::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::bitboard::Cells;
use crate::common::BoardError;
use crate::coord::Coordinate;

/// Orientation of a ship on the board. Serialized as `"H"` / `"V"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "H")]
    Horizontal,
    #[serde(rename = "V")]
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    /// Unit step along the ship: horizontal increases x, vertical increases y.
    pub fn step(self) -> (u8, u8) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }

    /// Fair coin flip between the two orientations.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShipDef {
    name: &'static str,
    length: u8,
}

impl ShipDef {
    pub const fn new(name: &'static str, length: u8) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> u8 {
        self.length
    }
}

/// The `length` contiguous cells starting at `start`. Cells may fall off the
/// board; callers check bounds separately.
pub fn cells_of(
    start: Coordinate,
    length: u8,
    orientation: Orientation,
) -> impl Iterator<Item = Coordinate> {
    let (dx, dy) = orientation.step();
    (0..length).map(move |i| {
        Coordinate::new(start.x.saturating_add(dx * i), start.y.saturating_add(dy * i))
    })
}

/// A ship placed on the board. Immutable once constructed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ship {
    def: ShipDef,
    start: Coordinate,
    orientation: Orientation,
}

impl Ship {
    /// Place `def` at `start`. Fails if any cell would leave the board.
    pub fn new(def: ShipDef, start: Coordinate, orientation: Orientation) -> Result<Self, BoardError> {
        if !cells_of(start, def.length(), orientation).all(Coordinate::is_on_board) {
            return Err(BoardError::OutOfBounds {
                ship: def.name(),
                start,
                orientation,
            });
        }
        Ok(Ship {
            def,
            start,
            orientation,
        })
    }

    pub fn def(&self) -> ShipDef {
        self.def
    }

    pub fn name(&self) -> &'static str {
        self.def.name()
    }

    pub fn length(&self) -> u8 {
        self.def.length()
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupied cells, from the start cell outwards.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        cells_of(self.start, self.length(), self.orientation)
    }

    /// Occupied cells as a set.
    pub fn footprint(&self) -> Cells {
        self.cells().collect()
    }

    pub fn contains(&self, at: Coordinate) -> bool {
        self.cells().any(|c| c == at)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", start: {}, orientation: {:?} }}",
            self.name(),
            self.start,
            self.orientation,
        )
    }
}
