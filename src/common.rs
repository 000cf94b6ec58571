//! Common types: board errors and shot outcomes.

use core::fmt;

use crate::coord::Coordinate;
use crate::ship::Orientation;

/// Result of a shot scored by the referee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot hit a ship segment that was not yet hit.
    Hit,
    /// Shot missed all ships.
    Miss,
    /// Shot sank a ship, carrying its name.
    Sunk(&'static str),
}

/// Errors returned by placement and referee operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A ship would extend past the board edge.
    OutOfBounds {
        ship: &'static str,
        start: Coordinate,
        orientation: Orientation,
    },
    /// A ship would share a cell with an already placed ship.
    Overlaps { ship: &'static str },
    /// A placement algorithm ran out of attempts for this ship.
    PlacementExhausted { ship: &'static str, attempts: usize },
    /// A shot was already taken at this cell.
    AlreadyFired(Coordinate),
    /// A shot or placement referenced a cell off the board.
    OffBoard(Coordinate),
    /// Ship name or wire type id does not match the fleet.
    UnknownShip(String),
    /// A layout does not contain exactly the standard fleet.
    InvalidFleet,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds {
                ship,
                start,
                orientation,
            } => write!(
                f,
                "{} at {} ({:?}) is out of bounds",
                ship, start, orientation
            ),
            BoardError::Overlaps { ship } => {
                write!(f, "{} overlaps with another ship", ship)
            }
            BoardError::PlacementExhausted { ship, attempts } => {
                write!(f, "failed to place {} after {} attempts", ship, attempts)
            }
            BoardError::AlreadyFired(at) => write!(f, "already fired at {}", at),
            BoardError::OffBoard(at) => write!(f, "{} is off the board", at),
            BoardError::UnknownShip(name) => write!(f, "unknown ship {:?}", name),
            BoardError::InvalidFleet => write!(f, "layout does not match the standard fleet"),
        }
    }
}

impl std::error::Error for BoardError {}
