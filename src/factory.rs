//! Builds a fresh firing strategy per game.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::detector::SharedDetector;
use crate::firing::{
    AdaptiveStrategy, FiringStrategy, HeatMapStrategy, ScanStrategy, SweepStrategy, TieBreak,
};
use crate::placement::seeded_rng;

/// Selectable firing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum FiringKind {
    Sweep,
    Checkerboard,
    Diagonal,
    Perimeter,
    HeatMap,
    Density,
    Adaptive,
}

impl FiringKind {
    pub const ALL: [FiringKind; 7] = [
        FiringKind::Sweep,
        FiringKind::Checkerboard,
        FiringKind::Diagonal,
        FiringKind::Perimeter,
        FiringKind::HeatMap,
        FiringKind::Density,
        FiringKind::Adaptive,
    ];
}

/// Hands out independent strategy instances so concurrent games never
/// share targeting state. Only the opponent detector is shared.
pub struct StrategyFactory {
    kind: FiringKind,
    detector: SharedDetector,
    rng: SmallRng,
}

impl StrategyFactory {
    /// `seed` makes the sequence of created strategies reproducible.
    pub fn new(kind: FiringKind, detector: SharedDetector, seed: Option<u64>) -> Self {
        Self {
            kind,
            detector,
            rng: seeded_rng(seed),
        }
    }

    pub fn kind(&self) -> FiringKind {
        self.kind
    }

    pub fn detector(&self) -> &SharedDetector {
        &self.detector
    }

    pub fn create(&mut self) -> Box<dyn FiringStrategy> {
        match self.kind {
            FiringKind::Sweep => Box::new(SweepStrategy::new()),
            FiringKind::Checkerboard => Box::new(ScanStrategy::checkerboard()),
            FiringKind::Diagonal => Box::new(ScanStrategy::diagonal()),
            FiringKind::Perimeter => Box::new(ScanStrategy::perimeter()),
            FiringKind::HeatMap => Box::new(HeatMapStrategy::with_seed(
                TieBreak::Random,
                self.rng.random(),
            )),
            FiringKind::Density => Box::new(HeatMapStrategy::with_seed(
                TieBreak::NearestCenter,
                self.rng.random(),
            )),
            FiringKind::Adaptive => Box::new(AdaptiveStrategy::new(self.detector.clone())),
        }
    }
}
