use super::hunt::NeighborOrder;
use super::scan::ScanStrategy;
use crate::config::BOARD_SIZE;
use crate::coord::Coordinate;

/// Cells of ring `r` clockwise from its top-left corner.
fn ring(r: u8) -> Vec<Coordinate> {
    let (min, max) = (r, BOARD_SIZE - 1 - r);
    let mut cells = Vec::new();
    for x in min..=max {
        cells.push(Coordinate::new(x, min));
    }
    for y in min + 1..max {
        cells.push(Coordinate::new(max, y));
    }
    if min != max {
        for x in (min..=max).rev() {
            cells.push(Coordinate::new(x, max));
        }
    }
    for y in (min + 1..max).rev() {
        cells.push(Coordinate::new(min, y));
    }
    cells
}

/// Concentric rings from the border inwards. Within a ring, cells whose
/// parity matches the ring index come first.
pub fn perimeter_order() -> Vec<Coordinate> {
    let mut order = Vec::with_capacity(usize::from(BOARD_SIZE) * usize::from(BOARD_SIZE));
    for r in 0..BOARD_SIZE / 2 {
        let cells = ring(r);
        let matches = |c: &Coordinate| (c.x + c.y) % 2 == r % 2;
        order.extend(cells.iter().copied().filter(|c| matches(c)));
        order.extend(cells.iter().copied().filter(|c| !matches(c)));
    }
    order
}

impl ScanStrategy {
    pub fn perimeter() -> Self {
        ScanStrategy::new("perimeter", perimeter_order(), NeighborOrder::EdgeAware)
    }
}
