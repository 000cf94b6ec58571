//! JSON payloads exchanged with a tournament server.
//!
//! Only the shapes are defined here; sockets and message framing live
//! outside this crate. Requests arrive wrapped in a `request` object and
//! responses carry their body under `response`.

use serde::{Deserialize, Serialize};

use crate::common::ShotOutcome;
use crate::coord::Coordinate;
use crate::ship::{Orientation, Ship};

/// Result string for a shot that struck a ship, sinking shots included.
pub const RESULT_HIT: &str = "Hit";
pub const RESULT_MISS: &str = "Miss";

/// A board cell as `col` (x) and `row` (y). Signed so malformed input can
/// be detected instead of failing to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub col: i64,
    pub row: i64,
}

impl Position {
    pub fn to_coordinate(self) -> Option<Coordinate> {
        Coordinate::from_signed(self.col, self.row)
    }
}

impl From<Coordinate> for Position {
    fn from(at: Coordinate) -> Self {
        Position {
            col: i64::from(at.x),
            row: i64::from(at.y),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotRecord {
    pub row: i64,
    pub col: i64,
    pub result: String,
}

impl ShotRecord {
    pub fn new(at: Coordinate, outcome: ShotOutcome) -> Self {
        let result = match outcome {
            ShotOutcome::Miss => RESULT_MISS,
            ShotOutcome::Hit | ShotOutcome::Sunk(_) => RESULT_HIT,
        };
        ShotRecord {
            row: i64::from(at.y),
            col: i64::from(at.x),
            result: result.to_string(),
        }
    }

    pub fn position(&self) -> Position {
        Position {
            col: self.col,
            row: self.row,
        }
    }
}

/// What the requesting bot knows of the opponent's board: its own shots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentView {
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub shots: Vec<ShotRecord>,
}

/// The requesting bot's previous shot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastShot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shooter_player_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    /// Upper-cased ship name when the shot sank a ship.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunk_ship_type_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FireRequest {
    pub game_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opponent_view: Option<OpponentView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_shot: Option<LastShot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireRequestPayload {
    pub request: FireRequest,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireResponseData {
    pub target: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FireResponsePayload {
    pub game_id: String,
    pub response: FireResponseData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceShipsRequest {
    pub game_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceShipsRequestPayload {
    pub request: PlaceShipsRequest,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipPlacement {
    pub type_id: String,
    pub start: Position,
    pub orientation: Orientation,
}

impl From<&Ship> for ShipPlacement {
    fn from(ship: &Ship) -> Self {
        ShipPlacement {
            type_id: ship.name().to_uppercase(),
            start: ship.start().into(),
            orientation: ship.orientation(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceShipsResponseData {
    pub placements: Vec<ShipPlacement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceShipsResponsePayload {
    pub game_id: String,
    pub response: PlaceShipsResponseData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameUpdatePayload {
    pub game_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
}
