use std::collections::HashSet;

use battleship_bots::placement::{
    center, center::center_weight, diagonal::on_diagonal_band, dispersed,
    dispersed::asymmetry_bonus, AdaptivePlacer, DiagonalPlacer, DispersedPlacer, EdgePlacer,
    OddColumnPlacer, PlacerKind, RandomPlacer, ShipPlacer,
};
use battleship_bots::{
    Coordinate, Layout, Orientation, SharedDetector, Ship, BOARD_SIZE, FLEET, TOTAL_SHIP_CELLS,
};
use proptest::prelude::*;

fn assert_valid_fleet(ships: &[Ship]) {
    let names: Vec<_> = ships.iter().map(|s| s.name()).collect();
    let lengths: Vec<_> = ships.iter().map(|s| s.length()).collect();
    assert_eq!(names, ["Carrier", "Battleship", "Cruiser", "Submarine", "Destroyer"]);
    assert_eq!(lengths, [5, 4, 3, 3, 2]);

    let cells: HashSet<Coordinate> = ships.iter().flat_map(|s| s.cells()).collect();
    assert_eq!(cells.len(), TOTAL_SHIP_CELLS);
    assert!(cells.iter().all(|c| c.x < BOARD_SIZE && c.y < BOARD_SIZE));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn every_placer_returns_a_valid_fleet(seed in any::<u64>()) {
        let detector = SharedDetector::new();
        for kind in PlacerKind::ALL {
            let mut placer = kind.build(Some(seed), &detector);
            let ships = placer.place_ships().unwrap();
            assert_valid_fleet(&ships);
        }
    }

    #[test]
    fn center_weight_matches_region(x in 0u8..10, y in 0u8..10) {
        let start = Coordinate::new(x, y);
        let w = center_weight(start, 2, Orientation::Horizontal);
        let inside = |c: u8| (2..=7).contains(&c);
        let expected = match (inside(x) && inside(y), inside(x + 1) && inside(y)) {
            (true, true) => 4,
            (false, false) => 0,
            _ => 2,
        };
        prop_assert_eq!(w, expected);
    }
}

#[test]
fn test_placers_vary_between_calls() {
    let detector = SharedDetector::new();
    for kind in PlacerKind::ALL {
        let mut placer = kind.build(None, &detector);
        let layouts: Vec<Vec<Ship>> = (0..5).map(|_| placer.place_ships().unwrap()).collect();
        assert!(
            layouts.windows(2).any(|w| w[0] != w[1]),
            "{} placed the same layout five times",
            placer.name()
        );
    }
}

#[test]
fn test_adaptive_placer_counters_detected_opponent() {
    let seed = 1234;

    let detector = SharedDetector::new();
    let mut adaptive = AdaptivePlacer::with_seed(detector.clone(), seed);
    assert_eq!(
        adaptive.place_ships().unwrap(),
        RandomPlacer::with_seed(seed).place_ships().unwrap()
    );

    for at in [(4, 4), (0, 0), (9, 9)] {
        detector.record_shot(Coordinate::new(at.0, at.1));
    }
    let mut adaptive = AdaptivePlacer::with_seed(detector.clone(), seed);
    assert_eq!(
        adaptive.place_ships().unwrap(),
        EdgePlacer::with_seed(seed).place_ships().unwrap()
    );

    detector.reset();
    for x in [0, 2, 4, 6, 8] {
        detector.record_shot(Coordinate::new(x, 0));
    }
    let mut adaptive = AdaptivePlacer::with_seed(detector, seed);
    assert_eq!(
        adaptive.place_ships().unwrap(),
        OddColumnPlacer::with_seed(seed).place_ships().unwrap()
    );
}

#[test]
fn test_edge_placer_mostly_hugs_the_border() {
    let mut placer = EdgePlacer::with_seed(99);
    let mut on_border = 0;
    let mut total = 0;
    for _ in 0..20 {
        for ship in placer.place_ships().unwrap() {
            total += 1;
            let s = ship.start();
            let border = match ship.orientation() {
                Orientation::Horizontal => s.y == 0 || s.y == BOARD_SIZE - 1,
                Orientation::Vertical => s.x == 0 || s.x == BOARD_SIZE - 1,
            };
            on_border += usize::from(border);
        }
    }
    assert!(on_border * 10 >= total * 9, "{} of {} ships on the border", on_border, total);
}

#[test]
fn test_odd_column_placer_prefers_odd_lines() {
    let mut placer = OddColumnPlacer::with_seed(5);
    for _ in 0..10 {
        for ship in placer.place_ships().unwrap() {
            let s = ship.start();
            let odd_line = match ship.orientation() {
                Orientation::Vertical => s.x % 2 == 1,
                Orientation::Horizontal => s.y % 2 == 1,
            };
            assert!(odd_line, "{:?} is not on an odd line", ship);
        }
    }
}

#[test]
fn test_bias_helpers() {
    assert!(on_diagonal_band(Coordinate::new(2, 1)));
    assert!(on_diagonal_band(Coordinate::new(9, 6)));
    assert!(!on_diagonal_band(Coordinate::new(1, 1)));
    assert!(!on_diagonal_band(Coordinate::new(9, 7)));

    // Midpoint (5.5, 2): |5.5 - 2| * 0.3 + |7.5 - 9| * 0.3.
    let bonus = asymmetry_bonus(Coordinate::new(3, 2), 5, Orientation::Horizontal);
    assert!((bonus - 1.5).abs() < 1e-9);
    assert!(asymmetry_bonus(Coordinate::new(4, 4), 2, Orientation::Horizontal) > 0.0);
    assert_eq!(center_weight(Coordinate::new(0, 3), 5, Orientation::Horizontal), 2);
    assert_eq!(center_weight(Coordinate::new(3, 2), 5, Orientation::Vertical), 4);
    assert_eq!(center_weight(Coordinate::new(0, 0), 5, Orientation::Vertical), 0);
}

#[test]
fn test_center_candidates_skip_the_rim() {
    let layout = Layout::new();
    let destroyer = FLEET[4];
    let candidates = center::candidates(&layout, destroyer);
    assert!(candidates.iter().all(|&(_, _, w)| w > 0));
    assert!(candidates.iter().any(|&(_, _, w)| w == 4));
    assert!(candidates.len() < layout.legal_placements(destroyer).len());
    assert!(!candidates
        .iter()
        .any(|&(s, o, _)| (s, o) == (Coordinate::new(0, 0), Orientation::Horizontal)));
}

#[test]
fn test_center_candidates_fall_back_when_centre_is_full() {
    // Rows 2..=7 filled from column 2 to 8 cover the whole centre block.
    let mut layout = Layout::new();
    for y in 2..=7 {
        layout.place(FLEET[0], Coordinate::new(2, y), Orientation::Horizontal).unwrap();
        layout.place(FLEET[4], Coordinate::new(7, y), Orientation::Horizontal).unwrap();
    }

    let destroyer = FLEET[4];
    let legal = layout.legal_placements(destroyer);
    let candidates = center::candidates(&layout, destroyer);
    assert!(!legal.is_empty());
    assert_eq!(candidates.len(), legal.len());
    for (&(s, o, w), &spot) in candidates.iter().zip(&legal) {
        assert_eq!((s, o), spot);
        assert_eq!(w, 1);
    }
}

fn midpoint_distance(ship: &Ship) -> f64 {
    let half = f64::from(ship.length()) / 2.0;
    let (x, y) = (f64::from(ship.start().x), f64::from(ship.start().y));
    let (cx, cy) = match ship.orientation() {
        Orientation::Horizontal => (x + half, y),
        Orientation::Vertical => (x, y + half),
    };
    ((cx - 4.5).powi(2) + (cy - 4.5).powi(2)).sqrt()
}

#[test]
fn test_dispersed_picks_from_the_best_band() {
    for seed in 0..20 {
        let ships = DispersedPlacer::with_seed(seed).place_ships().unwrap();

        let first = midpoint_distance(&ships[0]);
        assert!(first > 3.0 && first < 5.0, "seed {}: carrier midpoint at {}", seed, first);

        let mut layout = Layout::new();
        for (&def, ship) in FLEET.iter().zip(&ships) {
            let chosen = (ship.start(), ship.orientation());
            assert!(dispersed::best_candidates(&layout, def).contains(&chosen));

            let top = layout
                .legal_placements(def)
                .into_iter()
                .map(|(s, o)| dispersed::score(&layout, s, def, o))
                .fold(f64::MIN, f64::max);
            let picked = dispersed::score(&layout, chosen.0, def, chosen.1);
            assert!(picked > top - 1.0, "seed {}: {} scored {} of {}", seed, def.name(), picked, top);

            layout.place(def, chosen.0, chosen.1).unwrap();
        }
    }
}

#[test]
fn test_diagonal_placer_favours_the_band() {
    // 108 of the 120 carrier placements start on the band; double weight
    // leaves 12 / 228 of the picks off it, against 12 / 120 for uniform.
    let runs = 2000;
    let off_band = (0..runs)
        .map(|seed| DiagonalPlacer::with_seed(seed).place_ships().unwrap()[0].start())
        .filter(|&start| !on_diagonal_band(start))
        .count();
    assert!(off_band > 40, "{} of {} carriers off the band", off_band, runs);
    assert!(off_band < 160, "{} of {} carriers off the band", off_band, runs);
}
