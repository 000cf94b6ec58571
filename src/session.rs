//! Per-game bookkeeping for one bot serving a tournament.
//!
//! Every game id gets its own firing strategy, created on the first fire
//! request and dropped when a winner is announced. Placement and the
//! opponent detector are shared by all of the bot's games.

use std::collections::HashMap;

use log::{debug, info, warn};

use crate::common::BoardError;
use crate::coord::Coordinate;
use crate::detector::{OpponentStrategy, SharedDetector};
use crate::factory::{FiringKind, StrategyFactory};
use crate::firing::FiringStrategy;
use crate::placement::{PlacerKind, ShipPlacer};
use crate::wire::{
    FireRequestPayload, FireResponseData, FireResponsePayload, GameUpdatePayload,
    PlaceShipsRequestPayload, PlaceShipsResponseData, PlaceShipsResponsePayload, ShipPlacement,
    RESULT_HIT, RESULT_MISS,
};

/// Mixed into a seed so placement and firing draw from different streams.
const FIRING_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

pub struct GameSessions {
    player_id: String,
    detector: SharedDetector,
    placer: Box<dyn ShipPlacer>,
    factory: StrategyFactory,
    games: HashMap<String, Box<dyn FiringStrategy>>,
}

impl GameSessions {
    pub fn new(
        player_id: impl Into<String>,
        placement: PlacerKind,
        firing: FiringKind,
        seed: Option<u64>,
    ) -> Self {
        let detector = SharedDetector::new();
        let placer = placement.build(seed, &detector);
        let factory = StrategyFactory::new(
            firing,
            detector.clone(),
            seed.map(|s| s ^ FIRING_SEED_SALT),
        );
        Self {
            player_id: player_id.into(),
            detector,
            placer,
            factory,
            games: HashMap::new(),
        }
    }

    pub fn player_id(&self) -> &str {
        &self.player_id
    }

    pub fn detector(&self) -> &SharedDetector {
        &self.detector
    }

    pub fn placer_name(&self) -> &'static str {
        self.placer.name()
    }

    pub fn firing_kind(&self) -> FiringKind {
        self.factory.kind()
    }

    pub fn active_games(&self) -> usize {
        self.games.len()
    }

    pub fn place_ships(
        &mut self,
        request: &PlaceShipsRequestPayload,
    ) -> Result<PlaceShipsResponsePayload, BoardError> {
        let game_id = &request.request.game_id;
        let ships = self.placer.place_ships()?;
        info!(
            "{}: placed {} ships for game {} using {}",
            self.player_id,
            ships.len(),
            game_id,
            self.placer.name()
        );
        Ok(PlaceShipsResponsePayload {
            game_id: game_id.clone(),
            response: PlaceShipsResponseData {
                placements: ships.iter().map(ShipPlacement::from).collect(),
            },
        })
    }

    /// Bring the game's strategy up to date with the request and pick the
    /// next target.
    pub fn fire(&mut self, request: &FireRequestPayload) -> FireResponsePayload {
        let request = &request.request;
        let factory = &mut self.factory;
        let strategy = self
            .games
            .entry(request.game_id.clone())
            .or_insert_with(|| factory.create());

        if let Some(view) = &request.opponent_view {
            for shot in &view.shots {
                let Some(at) = shot.position().to_coordinate() else {
                    warn!("ignoring off-board shot ({}, {})", shot.col, shot.row);
                    continue;
                };
                if shot.result.eq_ignore_ascii_case(RESULT_HIT) {
                    strategy.record_hit(at);
                } else if shot.result.eq_ignore_ascii_case(RESULT_MISS) {
                    strategy.record_miss(at);
                } else {
                    warn!("ignoring shot at {} with result {:?}", at, shot.result);
                }
            }
        }

        if let Some(sunk) = request
            .last_shot
            .as_ref()
            .and_then(|last| last.sunk_ship_type_id.as_deref())
        {
            info!("{}: sank {} in game {}", self.player_id, sunk, request.game_id);
            strategy.record_sunk_ship(sunk);
        }

        let target = strategy.next_shot();
        debug!(
            "{}: {} fires at {} in game {}",
            self.player_id,
            strategy.name(),
            target,
            request.game_id
        );
        FireResponsePayload {
            game_id: request.game_id.clone(),
            response: FireResponseData {
                target: target.into(),
            },
        }
    }

    /// Returns `true` when the update finished a game we were tracking.
    pub fn game_update(&mut self, update: &GameUpdatePayload) -> bool {
        let Some(winner) = update.winner.as_deref().filter(|w| !w.is_empty()) else {
            return false;
        };
        info!("game {} finished, winner {}", update.game_id, winner);
        self.games.remove(&update.game_id).is_some()
    }

    /// Feed one of the opponent's shots at our board to the detector.
    pub fn observe_opponent_shot(&self, at: Coordinate) -> OpponentStrategy {
        self.detector.record_shot(at);
        self.detector.detected()
    }

    /// Forget the current opponent's classification and all open games.
    pub fn new_opponent(&mut self) {
        self.detector.reset();
        self.games.clear();
    }
}
