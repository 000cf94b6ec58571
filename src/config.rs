use crate::coord::Coordinate;
use crate::ship::ShipDef;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipDef; NUM_SHIPS] = [
    ShipDef::new("Carrier", 5),
    ShipDef::new("Battleship", 4),
    ShipDef::new("Cruiser", 3),
    ShipDef::new("Submarine", 3),
    ShipDef::new("Destroyer", 2),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Attempts per ship for unconstrained random placement.
pub const RANDOM_PLACEMENT_ATTEMPTS: usize = 100;
/// Attempts per ship for edge-biased and odd-column-biased placement.
pub const BIASED_PLACEMENT_ATTEMPTS: usize = 200;
/// Odd-column placement tries vertical odd columns before this attempt index.
pub const ODD_COLUMN_VERTICAL_PHASE: usize = 100;
/// Attempts for the last-resort placement used by the enumerating placers.
pub const FALLBACK_PLACEMENT_ATTEMPTS: usize = 1000;

/// Returned by firing strategies once every cell has been fired upon.
pub const BOARD_EXHAUSTED_SHOT: Coordinate = Coordinate::new(0, 0);

/// Cells whose heat differs by less than this are treated as ties.
pub const HEAT_TIE_TOLERANCE: f64 = 0.001;

/// Look up a fleet entry by name, ignoring ASCII case. Wire type ids are
/// upper-cased ship names.
pub fn ship_def(name: &str) -> Option<ShipDef> {
    FLEET
        .iter()
        .copied()
        .find(|def| def.name().eq_ignore_ascii_case(name))
}

/// Lengths of the full fleet, in fleet order.
pub fn fleet_lengths() -> Vec<u8> {
    FLEET.iter().map(|def| def.length()).collect()
}
