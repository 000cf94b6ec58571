use super::hunt::NeighborOrder;
use super::scan::ScanStrategy;
use crate::config::BOARD_SIZE;
use crate::coord::Coordinate;

/// Even-parity cells from the bottom-right corner, right to left and
/// bottom to top, followed by the odd cells in row-major order.
pub fn checkerboard_order() -> Vec<Coordinate> {
    let mut order: Vec<Coordinate> = (0..BOARD_SIZE)
        .rev()
        .flat_map(|y| (0..BOARD_SIZE).rev().map(move |x| Coordinate::new(x, y)))
        .filter(|c| c.is_even_parity())
        .collect();
    order.extend(Coordinate::all().filter(|c| !c.is_even_parity()));
    order
}

impl ScanStrategy {
    pub fn checkerboard() -> Self {
        ScanStrategy::new("checkerboard", checkerboard_order(), NeighborOrder::Fixed)
    }
}
