//! A fixed-size cell set using const generics.
//!
//! Boards are represented as an `N×N` grid packed into an unsigned integer
//! `T`, indexed by [`Coordinate`]. Strategies use it for fired shots, hits
//! and ship occupancy; membership tests and inserts are a shift and a mask.

use core::ops::{BitAnd, BitOr, BitOrAssign, Not};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::config::BOARD_SIZE;
use crate::coord::Coordinate;

/// The standard 10×10 board packed into a `u128`.
pub type Cells = BitBoard<u128, { BOARD_SIZE as usize }>;

/// A fixed-size N×N set of cells stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of usable bits in the board (`N * N`).
    const BOARD_BITS: usize = N * N;

    /// Fails to compile when `N * N` does not fit in `T`.
    const FITS: () = assert!(N * N <= mem::size_of::<T>() * 8, "board does not fit in T");

    #[inline]
    fn mask() -> T {
        if Self::BOARD_BITS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    /// Create an empty board.
    #[inline]
    pub fn new() -> Self {
        let () = Self::FITS;
        BitBoard { bits: T::zero() }
    }

    #[inline]
    fn index(at: Coordinate) -> Option<usize> {
        let (x, y) = (at.x as usize, at.y as usize);
        (x < N && y < N).then_some(y * N + x)
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Membership test. Off-board coordinates are never members.
    pub fn contains(&self, at: Coordinate) -> bool {
        match Self::index(at) {
            Some(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            None => false,
        }
    }

    /// Add `at`, returning `true` only if it was newly added. Off-board
    /// coordinates are ignored.
    pub fn insert(&mut self, at: Coordinate) -> bool {
        match Self::index(at) {
            Some(idx) if !self.contains(at) => {
                self.bits = self.bits | (T::one() << idx);
                true
            }
            _ => false,
        }
    }

    /// Remove `at`, returning `true` if it was present.
    pub fn remove(&mut self, at: Coordinate) -> bool {
        match Self::index(at) {
            Some(idx) if self.contains(at) => {
                self.bits = self.bits & !(T::one() << idx);
                true
            }
            _ => false,
        }
    }

    /// Clears all cells.
    #[inline]
    pub fn clear(&mut self) {
        self.bits = T::zero();
    }

    /// `true` when no cell is in both sets.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        (self.bits & other.bits).is_zero()
    }

    /// Iterator over the members in row-major order.
    pub fn iter(&self) -> Iter<T, N> {
        Iter {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> FromIterator<Coordinate> for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        let mut board = Self::new();
        for at in iter {
            board.insert(at);
        }
        board
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>:", N)?;
        for y in 0..N {
            for x in 0..N {
                let idx = y * N + x;
                let bit = if ((self.bits >> idx) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the members of a bitboard.
#[derive(Clone, Copy)]
pub struct Iter<T, const N: usize> {
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for Iter<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coordinate;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.bits >> idx) & T::one()) != T::zero() {
                return Some(Coordinate::new((idx % N) as u8, (idx / N) as u8));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOrAssign for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}

/// Complement within the board bounds.
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        BitBoard {
            bits: !self.bits & Self::mask(),
        }
    }
}
