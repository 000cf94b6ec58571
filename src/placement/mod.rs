//! Ship placement strategies.
//!
//! Every placer returns the full standard fleet in fleet order, pairwise
//! non-overlapping and on the board, or [`BoardError::PlacementExhausted`]
//! when its attempt budget runs out. Placers own their RNG so repeated
//! calls produce different layouts.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::Layout;
use crate::common::BoardError;
use crate::config::FALLBACK_PLACEMENT_ATTEMPTS;
use crate::coord::Coordinate;
use crate::detector::SharedDetector;
use crate::ship::{Orientation, Ship, ShipDef};

pub mod adaptive;
pub mod center;
pub mod diagonal;
pub mod dispersed;
pub mod edge;
pub mod odd_column;
pub mod random;

pub use adaptive::AdaptivePlacer;
pub use center::CenterClusterPlacer;
pub use diagonal::DiagonalPlacer;
pub use dispersed::DispersedPlacer;
pub use edge::EdgePlacer;
pub use odd_column::OddColumnPlacer;
pub use random::RandomPlacer;

/// Interface implemented by every placement algorithm.
pub trait ShipPlacer: Send {
    /// Produce a fresh layout of the standard fleet.
    fn place_ships(&mut self) -> Result<Vec<Ship>, BoardError>;

    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;
}

/// Selectable placement algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum PlacerKind {
    Random,
    Edge,
    OddColumn,
    Center,
    Diagonal,
    Dispersed,
    Adaptive,
}

impl PlacerKind {
    pub const ALL: [PlacerKind; 7] = [
        PlacerKind::Random,
        PlacerKind::Edge,
        PlacerKind::OddColumn,
        PlacerKind::Center,
        PlacerKind::Diagonal,
        PlacerKind::Dispersed,
        PlacerKind::Adaptive,
    ];

    /// Build a placer. `seed` fixes its RNG; `detector` is only read by
    /// [`PlacerKind::Adaptive`].
    pub fn build(self, seed: Option<u64>, detector: &SharedDetector) -> Box<dyn ShipPlacer> {
        let rng = seeded_rng(seed);
        match self {
            PlacerKind::Random => Box::new(RandomPlacer::from_rng(rng)),
            PlacerKind::Edge => Box::new(EdgePlacer::from_rng(rng)),
            PlacerKind::OddColumn => Box::new(OddColumnPlacer::from_rng(rng)),
            PlacerKind::Center => Box::new(CenterClusterPlacer::from_rng(rng)),
            PlacerKind::Diagonal => Box::new(DiagonalPlacer::from_rng(rng)),
            PlacerKind::Dispersed => Box::new(DispersedPlacer::from_rng(rng)),
            PlacerKind::Adaptive => Box::new(AdaptivePlacer::from_rng(detector.clone(), rng)),
        }
    }
}

/// `SmallRng` from a fixed seed, or seeded from the thread RNG.
pub(crate) fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

/// Pick one candidate with probability proportional to its weight.
/// Zero-weight candidates are never chosen; `None` if all weights are zero.
pub(crate) fn pick_weighted<R: Rng>(
    rng: &mut R,
    candidates: &[(Coordinate, Orientation, u32)],
) -> Option<(Coordinate, Orientation)> {
    let total: u32 = candidates.iter().map(|&(_, _, w)| w).sum();
    if total == 0 {
        return None;
    }
    let mut threshold = rng.random_range(0..total);
    for &(start, orientation, weight) in candidates {
        if threshold < weight {
            return Some((start, orientation));
        }
        threshold -= weight;
    }
    None
}

/// Place `def` at the chosen candidate, or fall back to bounded random
/// placement when there is none.
pub(crate) fn place_or_fallback<R: Rng>(
    layout: &mut Layout,
    rng: &mut R,
    def: ShipDef,
    choice: Option<(Coordinate, Orientation)>,
) -> Result<Ship, BoardError> {
    match choice {
        Some((start, orientation)) => layout.place(def, start, orientation),
        None => {
            log::debug!("no biased candidate for {}, falling back to random", def.name());
            layout.place_random(rng, def, FALLBACK_PLACEMENT_ATTEMPTS)
        }
    }
}
