//! Board coordinates. `x` is the column, `y` the row, both in `[0, BOARD_SIZE)`
//! for on-board cells.

use core::fmt;

use crate::config::BOARD_SIZE;

/// Orthogonal probe directions in the order hunt mode enqueues them:
/// up, down, left, right.
pub const ORTHOGONAL: [(i8, i8); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: u8,
    pub y: u8,
}

impl Coordinate {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Build a coordinate from signed wire values, rejecting anything off the board.
    pub fn from_signed(x: i64, y: i64) -> Option<Self> {
        let size = i64::from(BOARD_SIZE);
        if (0..size).contains(&x) && (0..size).contains(&y) {
            Some(Self::new(x as u8, y as u8))
        } else {
            None
        }
    }

    pub fn is_on_board(self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    /// Shift by `(dx, dy)`; `None` when the result leaves the board.
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        Self::from_signed(i64::from(self.x) + i64::from(dx), i64::from(self.y) + i64::from(dy))
    }

    /// On-board orthogonal neighbours in [`ORTHOGONAL`] order.
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        ORTHOGONAL
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// `true` when `x + y` is even. Every ship of length two or more covers
    /// at least one such cell.
    pub fn is_even_parity(self) -> bool {
        (self.x + self.y) % 2 == 0
    }

    pub fn manhattan(self, other: Coordinate) -> u32 {
        u32::from(self.x.abs_diff(other.x)) + u32::from(self.y.abs_diff(other.y))
    }

    /// Every board cell, row by row (y outer, x inner).
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Coordinate::new(x, y)))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
