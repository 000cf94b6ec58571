//! In-process referee.
//!
//! [`FleetBoard`] scores shots against one player's layout. [`play_game`]
//! and [`play_series`] drive two [`GameSessions`] through the same wire
//! payloads a tournament server would send, and [`shots_to_sink`] runs a
//! bare firing strategy against a fixed layout.

use std::collections::BTreeMap;

use anyhow::{anyhow, bail, Context};
use log::{debug, info, warn};
use serde::Serialize;

use crate::bitboard::Cells;
use crate::board::Layout;
use crate::common::{BoardError, ShotOutcome};
use crate::config::{ship_def, BOARD_SIZE, FLEET, NUM_SHIPS};
use crate::coord::Coordinate;
use crate::firing::FiringStrategy;
use crate::session::GameSessions;
use crate::ship::Ship;
use crate::wire::{
    FireRequest, FireRequestPayload, GameUpdatePayload, LastShot, OpponentView,
    PlaceShipsRequest, PlaceShipsRequestPayload, ShipPlacement, ShotRecord,
};

/// Shots a single player may take before a game is abandoned.
pub const SHOT_LIMIT: usize = 2 * (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// One player's ships and the shots taken at them.
#[derive(Debug, Clone)]
pub struct FleetBoard {
    ships: Vec<Ship>,
    hits: Cells,
    shots: Cells,
}

impl FleetBoard {
    /// Accepts exactly the standard fleet, in any order, on the board and
    /// without overlaps.
    pub fn new(ships: Vec<Ship>) -> Result<Self, BoardError> {
        if ships.len() != NUM_SHIPS {
            return Err(BoardError::InvalidFleet);
        }
        for def in FLEET {
            if ships.iter().filter(|s| s.def() == def).count() != 1 {
                return Err(BoardError::InvalidFleet);
            }
        }
        let mut layout = Layout::new();
        for ship in &ships {
            layout.place(ship.def(), ship.start(), ship.orientation())?;
        }
        Ok(Self {
            ships,
            hits: Cells::new(),
            shots: Cells::new(),
        })
    }

    /// Build from wire placements, resolving type ids against the fleet.
    pub fn from_placements(placements: &[ShipPlacement]) -> Result<Self, BoardError> {
        let ships = placements
            .iter()
            .map(|p| {
                let def = ship_def(&p.type_id)
                    .ok_or_else(|| BoardError::UnknownShip(p.type_id.clone()))?;
                let start = p.start.to_coordinate().ok_or(BoardError::InvalidFleet)?;
                Ship::new(def, start, p.orientation)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(ships)
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn shots_taken(&self) -> usize {
        self.shots.len()
    }

    /// Score a shot. Repeats and off-board cells are rejected.
    pub fn fire(&mut self, at: Coordinate) -> Result<ShotOutcome, BoardError> {
        if !at.is_on_board() {
            return Err(BoardError::OffBoard(at));
        }
        if !self.shots.insert(at) {
            return Err(BoardError::AlreadyFired(at));
        }
        let Some(ship) = self.ships.iter().find(|s| s.contains(at)) else {
            return Ok(ShotOutcome::Miss);
        };
        self.hits.insert(at);
        if ship.cells().all(|c| self.hits.contains(c)) {
            Ok(ShotOutcome::Sunk(ship.name()))
        } else {
            Ok(ShotOutcome::Hit)
        }
    }

    pub fn all_sunk(&self) -> bool {
        self.ships
            .iter()
            .all(|s| s.cells().all(|c| self.hits.contains(c)))
    }
}

/// Feed a strategy its own results until the board's fleet is gone.
/// Returns the number of shots it needed.
pub fn shots_to_sink(
    strategy: &mut dyn FiringStrategy,
    board: &mut FleetBoard,
) -> anyhow::Result<usize> {
    for shot in 1..=SHOT_LIMIT {
        let at = strategy.next_shot();
        match board.fire(at) {
            Ok(ShotOutcome::Miss) => strategy.record_miss(at),
            Ok(ShotOutcome::Hit) => strategy.record_hit(at),
            Ok(ShotOutcome::Sunk(name)) => {
                strategy.record_hit(at);
                strategy.record_sunk_ship(name);
            }
            Err(err) => debug!("{} wasted a shot: {}", strategy.name(), err),
        }
        if board.all_sunk() {
            return Ok(shot);
        }
    }
    bail!("{} did not sink the fleet in {} shots", strategy.name(), SHOT_LIMIT)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    pub player_id: String,
    pub placement: &'static str,
    pub shots_fired: usize,
    pub hits: usize,
    pub ships_sunk: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameReport {
    pub game_id: String,
    pub winner: Option<String>,
    pub players: [PlayerSummary; 2],
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SeriesReport {
    pub games: Vec<GameReport>,
    pub wins: BTreeMap<String, usize>,
    pub unfinished: usize,
}

/// A player in a running game: its bot, its own fleet, and its view of the
/// opponent's board.
struct Seat<'a> {
    bot: &'a mut GameSessions,
    fleet: FleetBoard,
    view: Vec<ShotRecord>,
    last_shot: Option<LastShot>,
    hits: usize,
    ships_sunk: usize,
}

impl<'a> Seat<'a> {
    fn join(bot: &'a mut GameSessions, game_id: &str) -> anyhow::Result<Self> {
        let request = PlaceShipsRequestPayload {
            request: PlaceShipsRequest {
                game_id: game_id.to_string(),
            },
        };
        let response = bot
            .place_ships(&request)
            .with_context(|| format!("{} could not place ships", bot.player_id()))?;
        let fleet = FleetBoard::from_placements(&response.response.placements)
            .with_context(|| format!("{} sent an invalid layout", bot.player_id()))?;
        Ok(Self {
            bot,
            fleet,
            view: Vec::new(),
            last_shot: None,
            hits: 0,
            ships_sunk: 0,
        })
    }

    fn summary(&self) -> PlayerSummary {
        PlayerSummary {
            player_id: self.bot.player_id().to_string(),
            placement: self.bot.placer_name(),
            shots_fired: self.view.len(),
            hits: self.hits,
            ships_sunk: self.ships_sunk,
        }
    }
}

/// One shot by `shooter` at `defender`'s fleet. Returns `true` once the
/// defender has nothing left afloat.
fn take_turn(game_id: &str, shooter: &mut Seat<'_>, defender: &mut Seat<'_>) -> bool {
    let request = FireRequestPayload {
        request: FireRequest {
            game_id: game_id.to_string(),
            opponent_view: Some(OpponentView {
                width: u32::from(BOARD_SIZE),
                height: u32::from(BOARD_SIZE),
                shots: shooter.view.clone(),
            }),
            last_shot: shooter.last_shot.take(),
        },
    };
    let target = shooter.bot.fire(&request).response.target;
    let Some(at) = target.to_coordinate() else {
        warn!("{} fired off the board at {:?}", shooter.bot.player_id(), target);
        return false;
    };
    defender.bot.observe_opponent_shot(at);

    let outcome = match defender.fleet.fire(at) {
        Ok(outcome) => outcome,
        Err(err) => {
            warn!("{}: {}", shooter.bot.player_id(), err);
            return false;
        }
    };
    let sunk = match outcome {
        ShotOutcome::Sunk(name) => {
            shooter.ships_sunk += 1;
            Some(name.to_uppercase())
        }
        ShotOutcome::Hit | ShotOutcome::Miss => None,
    };
    if outcome != ShotOutcome::Miss {
        shooter.hits += 1;
    }
    let record = ShotRecord::new(at, outcome);
    shooter.last_shot = Some(LastShot {
        shooter_player_id: Some(shooter.bot.player_id().to_string()),
        target: Some(at.into()),
        result: Some(record.result.clone()),
        sunk_ship_type_id: sunk,
    });
    shooter.view.push(record);
    defender.fleet.all_sunk()
}

/// Play one game. `a` shoots first.
pub fn play_game(
    a: &mut GameSessions,
    b: &mut GameSessions,
    game_id: &str,
) -> anyhow::Result<GameReport> {
    if a.player_id() == b.player_id() {
        return Err(anyhow!("both players are named {}", a.player_id()));
    }
    let mut first = Seat::join(a, game_id)?;
    let mut second = Seat::join(b, game_id)?;

    let mut winner = None;
    for _ in 0..SHOT_LIMIT {
        if take_turn(game_id, &mut first, &mut second) {
            winner = Some(first.bot.player_id().to_string());
            break;
        }
        if take_turn(game_id, &mut second, &mut first) {
            winner = Some(second.bot.player_id().to_string());
            break;
        }
    }

    match &winner {
        Some(id) => info!(
            "game {} won by {} after {} shots",
            game_id,
            id,
            first.view.len() + second.view.len()
        ),
        None => warn!("game {} abandoned after {} shots each", game_id, SHOT_LIMIT),
    }
    let update = GameUpdatePayload {
        game_id: game_id.to_string(),
        status: Some("Finished".to_string()),
        message: None,
        winner: winner.clone(),
    };
    first.bot.game_update(&update);
    second.bot.game_update(&update);

    Ok(GameReport {
        game_id: game_id.to_string(),
        winner,
        players: [first.summary(), second.summary()],
    })
}

/// Play `games` games between the same two bots, alternating who shoots
/// first. Detectors carry over between games.
pub fn play_series(
    a: &mut GameSessions,
    b: &mut GameSessions,
    games: usize,
) -> anyhow::Result<SeriesReport> {
    let mut report = SeriesReport::default();
    for round in 0..games {
        let game_id = format!("{}-vs-{}-{}", a.player_id(), b.player_id(), round + 1);
        let game = if round % 2 == 0 {
            play_game(a, b, &game_id)?
        } else {
            play_game(b, a, &game_id)?
        };
        match &game.winner {
            Some(id) => *report.wins.entry(id.clone()).or_default() += 1,
            None => report.unfinished += 1,
        }
        report.games.push(game);
    }
    Ok(report)
}
