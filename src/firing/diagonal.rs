use super::hunt::NeighborOrder;
use super::scan::ScanStrategy;
use crate::config::BOARD_SIZE;
use crate::coord::Coordinate;

/// Diagonals (constant `x + y`) in visiting order: the even sums from the
/// middle outwards, then the odd ones the same way.
const SUM_ORDER: [u8; 19] = [8, 6, 4, 2, 0, 10, 12, 14, 16, 18, 9, 7, 5, 3, 1, 11, 13, 15, 17];

/// Every cell, diagonal by diagonal, each diagonal by increasing column.
pub fn diagonal_order() -> Vec<Coordinate> {
    let last = BOARD_SIZE - 1;
    SUM_ORDER
        .iter()
        .flat_map(|&sum| {
            let lo = sum.saturating_sub(last);
            let hi = sum.min(last);
            (lo..=hi).map(move |x| Coordinate::new(x, sum - x))
        })
        .collect()
}

impl ScanStrategy {
    pub fn diagonal() -> Self {
        ScanStrategy::new("diagonal", diagonal_order(), NeighborOrder::Fixed)
    }
}
