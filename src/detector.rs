//! Classifies the opponent's shot-selection algorithm from its first shots.
//!
//! The detector outlives single games: the classification learnt while the
//! opponent fires at us in one game drives our placement and firing in the
//! next. It is fed by one writer (the session handling opponent shots) and
//! read by the adaptive placer and the adaptive firing strategies through a
//! [`SharedDetector`] handle.

use std::sync::{Arc, PoisonError, RwLock};

use log::info;

use crate::coord::Coordinate;

/// Shots needed before detection runs at all.
const MIN_SHOTS: usize = 3;
/// Shots after which detection always settles.
const SETTLE_SHOTS: usize = 5;

/// Inferred opponent shot-selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OpponentStrategy {
    #[default]
    Unknown,
    /// Opens in the central 3×3 block.
    CenterFirst,
    /// Opens near a corner and sweeps a checkerboard.
    CornerCheckerboard,
    Other,
}

/// Ordered record of opponent shots plus the latched classification.
#[derive(Debug, Clone, Default)]
pub struct OpponentDetector {
    shots: Vec<Coordinate>,
    detected: OpponentStrategy,
    finalized: bool,
}

impl OpponentDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an opponent shot and re-run detection until it latches.
    pub fn record_shot(&mut self, at: Coordinate) {
        self.shots.push(at);
        if !self.finalized && self.shots.len() >= MIN_SHOTS {
            self.detect();
        }
    }

    pub fn detected(&self) -> OpponentStrategy {
        self.detected
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn shots(&self) -> &[Coordinate] {
        &self.shots
    }

    /// Forget everything, including a latched classification.
    pub fn reset(&mut self) {
        self.shots.clear();
        self.detected = OpponentStrategy::Unknown;
        self.finalized = false;
    }

    fn detect(&mut self) {
        let first = self.shots[0];

        if is_center(first) {
            self.latch(OpponentStrategy::CenterFirst);
            return;
        }

        if is_corner(first)
            && self.shots.len() >= SETTLE_SHOTS
            && is_checkerboard(&self.shots[..SETTLE_SHOTS])
        {
            self.latch(OpponentStrategy::CornerCheckerboard);
            return;
        }

        if self.shots.len() >= SETTLE_SHOTS {
            self.latch(OpponentStrategy::Other);
        }
    }

    fn latch(&mut self, strategy: OpponentStrategy) {
        info!(
            "opponent classified as {:?} after {} shots",
            strategy,
            self.shots.len()
        );
        self.detected = strategy;
        self.finalized = true;
    }
}

fn is_center(at: Coordinate) -> bool {
    (3..=5).contains(&at.x) && (3..=5).contains(&at.y)
}

fn is_corner(at: Coordinate) -> bool {
    (at.x <= 1 || at.x >= 8) && (at.y <= 1 || at.y >= 8)
}

/// At least two transitions that either skip one column along a row, or
/// step to an adjacent row while flipping column parity.
fn is_checkerboard(shots: &[Coordinate]) -> bool {
    let matches = shots
        .windows(2)
        .map(|pair| {
            let (prev, curr) = (pair[0], pair[1]);
            let skip = prev.y == curr.y && prev.x.abs_diff(curr.x) == 2;
            let flip = prev.y.abs_diff(curr.y) == 1 && prev.x % 2 != curr.x % 2;
            usize::from(skip) + usize::from(flip)
        })
        .sum::<usize>();
    matches >= 2
}

/// Cloneable handle to one detector shared by a bot's strategies.
#[derive(Debug, Clone, Default)]
pub struct SharedDetector {
    inner: Arc<RwLock<OpponentDetector>>,
}

impl SharedDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_shot(&self, at: Coordinate) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .record_shot(at);
    }

    pub fn detected(&self) -> OpponentStrategy {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .detected()
    }

    /// Reset before facing a new opponent.
    pub fn reset(&self) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .reset();
    }

    /// Copy of the current detector state.
    pub fn snapshot(&self) -> OpponentDetector {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
