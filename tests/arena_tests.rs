use battleship_bots::placement::{RandomPlacer, ShipPlacer};
use battleship_bots::wire::{Position, ShipPlacement};
use battleship_bots::{
    play_game, play_series, shots_to_sink, BoardError, Coordinate, FiringKind, FleetBoard,
    GameSessions, OpponentStrategy, Orientation, PlacerKind, SharedDetector, Ship, ShotOutcome,
    StrategyFactory, FLEET, TOTAL_SHIP_CELLS,
};

/// Every ship on its own row, starting at the left edge.
fn stacked_fleet() -> Vec<Ship> {
    FLEET
        .iter()
        .enumerate()
        .map(|(row, &def)| {
            Ship::new(def, Coordinate::new(0, row as u8 * 2), Orientation::Horizontal)
        })
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

#[test]
fn test_fleet_board_validates_layout() {
    let mut ships = stacked_fleet();
    assert!(FleetBoard::new(ships.clone()).is_ok());

    ships.pop();
    assert_eq!(FleetBoard::new(ships.clone()).unwrap_err(), BoardError::InvalidFleet);

    ships.push(ships[0]);
    assert_eq!(FleetBoard::new(ships).unwrap_err(), BoardError::InvalidFleet);

    let mut overlapping = stacked_fleet();
    overlapping[4] = Ship::new(FLEET[4], Coordinate::new(3, 0), Orientation::Vertical).unwrap();
    assert_eq!(
        FleetBoard::new(overlapping).unwrap_err(),
        BoardError::Overlaps { ship: "Destroyer" }
    );
}

#[test]
fn test_fleet_board_from_placements() {
    let mut placements: Vec<ShipPlacement> = stacked_fleet().iter().map(ShipPlacement::from).collect();
    assert!(FleetBoard::from_placements(&placements).is_ok());

    placements[0].type_id = "KRAKEN".to_string();
    assert_eq!(
        FleetBoard::from_placements(&placements).unwrap_err(),
        BoardError::UnknownShip("KRAKEN".to_string())
    );

    let mut placements: Vec<ShipPlacement> = stacked_fleet().iter().map(ShipPlacement::from).collect();
    placements[1].start = Position { col: -2, row: 0 };
    assert!(FleetBoard::from_placements(&placements).is_err());
}

#[test]
fn test_fleet_board_scores_shots() -> Result<(), BoardError> {
    let mut board = FleetBoard::new(stacked_fleet())?;
    // Destroyer occupies (0, 8) and (1, 8).
    assert_eq!(board.fire(Coordinate::new(9, 9))?, ShotOutcome::Miss);
    assert_eq!(board.fire(Coordinate::new(0, 8))?, ShotOutcome::Hit);
    assert_eq!(board.fire(Coordinate::new(1, 8))?, ShotOutcome::Sunk("Destroyer"));
    assert_eq!(
        board.fire(Coordinate::new(1, 8)).unwrap_err(),
        BoardError::AlreadyFired(Coordinate::new(1, 8))
    );
    assert_eq!(
        board.fire(Coordinate::new(10, 0)).unwrap_err(),
        BoardError::OffBoard(Coordinate::new(10, 0))
    );
    assert_eq!(board.shots_taken(), 3);
    assert!(!board.all_sunk());
    Ok(())
}

#[test]
fn test_every_strategy_sinks_a_fleet_within_the_board() {
    let mut placer = RandomPlacer::with_seed(17);
    for kind in FiringKind::ALL {
        let mut factory = StrategyFactory::new(kind, SharedDetector::new(), Some(17));
        for _ in 0..5 {
            let mut board = FleetBoard::new(placer.place_ships().unwrap()).unwrap();
            let mut strategy = factory.create();
            let shots = shots_to_sink(strategy.as_mut(), &mut board).unwrap();
            assert!(
                (TOTAL_SHIP_CELLS..=100).contains(&shots),
                "{:?} took {} shots",
                kind,
                shots
            );
            assert!(board.all_sunk());
        }
    }
}

#[test]
fn test_play_game_produces_a_winner() {
    let mut a = GameSessions::new("alpha", PlacerKind::Dispersed, FiringKind::HeatMap, Some(3));
    let mut b = GameSessions::new("beta", PlacerKind::Edge, FiringKind::Perimeter, Some(4));
    let report = play_game(&mut a, &mut b, "duel-1").unwrap();

    let winner = report.winner.clone().unwrap();
    let summary = report
        .players
        .iter()
        .find(|p| p.player_id == winner)
        .unwrap();
    assert_eq!(summary.hits, TOTAL_SHIP_CELLS);
    assert_eq!(summary.ships_sunk, 5);
    assert!(summary.shots_fired <= 100);
    assert_eq!(a.active_games(), 0);
    assert_eq!(b.active_games(), 0);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["gameId"], "duel-1");
    assert_eq!(json["players"][0]["playerId"], "alpha");
}

#[test]
fn test_play_game_rejects_same_names() {
    let mut a = GameSessions::new("same", PlacerKind::Random, FiringKind::Sweep, Some(1));
    let mut b = GameSessions::new("same", PlacerKind::Random, FiringKind::Sweep, Some(2));
    assert!(play_game(&mut a, &mut b, "g").is_err());
}

#[test]
fn test_series_counts_every_game_and_teaches_the_detectors() {
    let mut a = GameSessions::new("adaptive", PlacerKind::Adaptive, FiringKind::Adaptive, Some(5));
    let mut b = GameSessions::new("density", PlacerKind::Center, FiringKind::Density, Some(6));
    let report = play_series(&mut a, &mut b, 4).unwrap();

    assert_eq!(report.games.len(), 4);
    assert_eq!(report.unfinished, 0);
    assert_eq!(report.wins.values().sum::<usize>(), 4);
    assert_eq!(report.games[0].players[0].player_id, "adaptive");
    assert_eq!(report.games[1].players[0].player_id, "density");

    // The density bot opens in the middle of the board.
    assert_eq!(a.detector().detected(), OpponentStrategy::CenterFirst);
    assert_ne!(b.detector().detected(), OpponentStrategy::Unknown);
}
