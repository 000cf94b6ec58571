pub mod arena;
mod bitboard;
mod board;
mod common;
mod config;
mod coord;
pub mod detector;
pub mod factory;
pub mod firing;
mod logging;
pub mod placement;
pub mod session;
mod ship;
pub mod wire;

pub use arena::{play_game, play_series, shots_to_sink, FleetBoard, GameReport, SeriesReport};
pub use bitboard::{BitBoard, Cells};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use detector::{OpponentDetector, OpponentStrategy, SharedDetector};
pub use factory::{FiringKind, StrategyFactory};
pub use firing::FiringStrategy;
pub use logging::init_logging;
pub use placement::{PlacerKind, ShipPlacer};
pub use session::GameSessions;
pub use ship::*;
