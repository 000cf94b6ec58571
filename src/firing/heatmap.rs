//! Placement-counting targeting.
//!
//! For every ship length still afloat, every horizontal and vertical
//! placement that avoids known misses adds weight to the cells it covers.
//! Placements through unresolved hits weigh `5^hits`, even-parity cells get
//! a 1.2 bonus and neighbours of unresolved hits a 3x boost per hit. The
//! hottest unfired cell wins.

use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::hunt::{HuntState, NeighborOrder};
use super::FiringStrategy;
use crate::bitboard::Cells;
use crate::config::{fleet_lengths, ship_def, BOARD_SIZE, HEAT_TIE_TOLERANCE};
use crate::coord::Coordinate;
use crate::ship::{cells_of, Orientation};

const SIZE: usize = BOARD_SIZE as usize;

const HIT_PLACEMENT_BASE: f64 = 5.0;
const PARITY_BONUS: f64 = 1.2;
const ADJACENT_HIT_BOOST: f64 = 3.0;
const BOARD_CENTER: f64 = 4.5;

/// Per-cell weights, indexed `[y][x]`.
pub type HeatMap = [[f64; SIZE]; SIZE];

/// How equally hot cells are separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Uniformly at random.
    Random,
    /// Smallest Manhattan distance to the board centre, first in row-major
    /// order among equals.
    NearestCenter,
}

pub struct HeatMapStrategy {
    name: &'static str,
    hunt: HuntState,
    /// Hits seen before the latest sunk report. They stay legal cells for
    /// placements but earn no hit weight.
    resolved: Cells,
    remaining: Vec<u8>,
    tie_break: TieBreak,
    /// Reset replays the same tie breaks from here.
    seed: u64,
    rng: SmallRng,
}

impl HeatMapStrategy {
    pub fn new(tie_break: TieBreak) -> Self {
        Self::with_seed(tie_break, rand::rng().random())
    }

    pub fn with_seed(tie_break: TieBreak, seed: u64) -> Self {
        let name = match tie_break {
            TieBreak::Random => "heat-map",
            TieBreak::NearestCenter => "density",
        };
        Self {
            name,
            hunt: HuntState::new(NeighborOrder::Fixed),
            resolved: Cells::new(),
            remaining: fleet_lengths(),
            tie_break,
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Heat-map targeting with random tie breaks.
    pub fn heat_map() -> Self {
        Self::new(TieBreak::Random)
    }

    /// Probability-density targeting: same weights, centre-most tie break.
    pub fn density() -> Self {
        Self::new(TieBreak::NearestCenter)
    }

    /// Ship lengths still believed afloat.
    pub fn remaining(&self) -> &[u8] {
        &self.remaining
    }

    fn unresolved_hits(&self) -> Cells {
        self.hunt.hits() & !self.resolved
    }

    /// Current weights. Fired cells are always zero.
    pub fn compute_heat(&self) -> HeatMap {
        let mut heat = [[0.0; SIZE]; SIZE];
        let fired = self.hunt.fired();
        let misses = self.hunt.misses();
        let open_hits = self.unresolved_hits();

        for &length in &self.remaining {
            for start in Coordinate::all() {
                for orientation in Orientation::ALL {
                    let cells: Vec<Coordinate> = cells_of(start, length, orientation).collect();
                    if cells.iter().any(|c| !c.is_on_board() || misses.contains(*c)) {
                        continue;
                    }
                    let covered = cells.iter().filter(|c| open_hits.contains(**c)).count();
                    let weight = HIT_PLACEMENT_BASE.powi(covered as i32);
                    for c in cells {
                        heat[usize::from(c.y)][usize::from(c.x)] += weight;
                    }
                }
            }
        }

        for at in Coordinate::all() {
            let cell = &mut heat[usize::from(at.y)][usize::from(at.x)];
            if at.is_even_parity() && *cell > 0.0 {
                *cell *= PARITY_BONUS;
            }
        }

        for hit in open_hits.iter() {
            for n in hit.neighbors().filter(|n| !fired.contains(*n)) {
                heat[usize::from(n.y)][usize::from(n.x)] *= ADJACENT_HIT_BOOST;
            }
        }

        for at in fired.iter() {
            heat[usize::from(at.y)][usize::from(at.x)] = 0.0;
        }
        heat
    }

    /// Hottest unfired cell, ties broken per [`TieBreak`]. `None` once the
    /// board is spent.
    fn hottest(&mut self) -> Option<Coordinate> {
        let heat = self.compute_heat();
        let fired = self.hunt.fired();
        let value = |c: Coordinate| heat[usize::from(c.y)][usize::from(c.x)];

        let max = Coordinate::all()
            .filter(|c| !fired.contains(*c))
            .map(value)
            .fold(None, |best: Option<f64>, h| Some(best.map_or(h, |b| b.max(h))))?;
        let ties: Vec<Coordinate> = Coordinate::all()
            .filter(|c| !fired.contains(*c) && (value(*c) - max).abs() < HEAT_TIE_TOLERANCE)
            .collect();

        match self.tie_break {
            TieBreak::Random if !ties.is_empty() => {
                Some(ties[self.rng.random_range(0..ties.len())])
            }
            TieBreak::Random => None,
            TieBreak::NearestCenter => {
                let mut best: Option<(f64, Coordinate)> = None;
                for c in ties {
                    let d = (f64::from(c.x) - BOARD_CENTER).abs()
                        + (f64::from(c.y) - BOARD_CENTER).abs();
                    if best.map_or(true, |(bd, _)| d < bd) {
                        best = Some((d, c));
                    }
                }
                best.map(|(_, c)| c)
            }
        }
    }

    fn resolve_hits(&mut self) {
        self.hunt.clear_targets();
        self.resolved |= self.hunt.hits();
    }

    fn drop_smallest(&mut self) {
        let smallest = self
            .remaining
            .iter()
            .enumerate()
            .min_by_key(|&(_, &len)| len)
            .map(|(i, _)| i);
        if let Some(i) = smallest {
            self.remaining.remove(i);
        }
    }
}

impl FiringStrategy for HeatMapStrategy {
    fn next_shot(&mut self) -> Coordinate {
        if let Some(at) = self.hunt.next_target() {
            debug!("{}: hunting at {}", self.name, at);
            return at;
        }
        match self.hottest() {
            Some(at) => {
                self.hunt.take(at);
                at
            }
            None => self.hunt.take_first_unfired(),
        }
    }

    fn record_hit(&mut self, at: Coordinate) {
        self.hunt.record_hit(at);
    }

    fn record_miss(&mut self, at: Coordinate) {
        self.hunt.record_miss(at);
    }

    /// The referee did not say which ship sank, so the smallest remaining
    /// length is dropped. This underestimates what is left afloat.
    fn record_sunk(&mut self) {
        self.resolve_hits();
        self.drop_smallest();
        debug!("{}: ship sunk, remaining {:?}", self.name, self.remaining);
    }

    fn record_sunk_ship(&mut self, name: &str) {
        let exact = ship_def(name)
            .and_then(|def| self.remaining.iter().position(|&len| len == def.length()));
        match exact {
            Some(i) => {
                self.resolve_hits();
                self.remaining.remove(i);
                debug!("{}: {} sunk, remaining {:?}", self.name, name, self.remaining);
            }
            None => self.record_sunk(),
        }
    }

    fn reset(&mut self) {
        self.hunt.reset();
        self.resolved.clear();
        self.remaining = fleet_lengths();
        self.rng = SmallRng::seed_from_u64(self.seed);
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
