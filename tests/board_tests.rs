use battleship_bots::{
    BitBoard, BoardError, Cells, Coordinate, Layout, Orientation, Ship, ShipDef, BOARD_SIZE, FLEET,
};
use rand::{rngs::SmallRng, SeedableRng};

#[test]
fn test_coordinate_bounds_and_offsets() {
    assert_eq!(Coordinate::from_signed(3, 9), Some(Coordinate::new(3, 9)));
    assert_eq!(Coordinate::from_signed(-1, 0), None);
    assert_eq!(Coordinate::from_signed(0, 10), None);

    let corner = Coordinate::new(0, 0);
    assert_eq!(corner.offset(-1, 0), None);
    assert_eq!(corner.offset(1, 0), Some(Coordinate::new(1, 0)));

    let neighbors: Vec<_> = Coordinate::new(5, 5).neighbors().collect();
    assert_eq!(
        neighbors,
        vec![
            Coordinate::new(5, 4),
            Coordinate::new(5, 6),
            Coordinate::new(4, 5),
            Coordinate::new(6, 5),
        ]
    );
    assert_eq!(corner.neighbors().count(), 2);
}

#[test]
fn test_coordinate_all_is_row_major() {
    let all: Vec<_> = Coordinate::all().collect();
    assert_eq!(all.len(), 100);
    assert_eq!(all[0], Coordinate::new(0, 0));
    assert_eq!(all[1], Coordinate::new(1, 0));
    assert_eq!(all[10], Coordinate::new(0, 1));
    assert_eq!(all[99], Coordinate::new(9, 9));
    assert_eq!(Coordinate::new(2, 7).manhattan(Coordinate::new(5, 5)), 5);
}

#[test]
fn test_cells_insert_remove() {
    let mut cells = Cells::new();
    assert!(cells.is_empty());

    assert!(cells.insert(Coordinate::new(1, 1)));
    assert!(!cells.insert(Coordinate::new(1, 1)));
    assert!(cells.contains(Coordinate::new(1, 1)));
    assert!(!cells.insert(Coordinate::new(10, 0)));
    assert_eq!(cells.len(), 1);

    assert!(cells.remove(Coordinate::new(1, 1)));
    assert!(!cells.remove(Coordinate::new(1, 1)));
    assert!(cells.is_empty());
}

#[test]
fn test_cells_set_ops_stay_on_board() {
    let a: Cells = [Coordinate::new(0, 1), Coordinate::new(3, 3)].into_iter().collect();
    let b: Cells = [Coordinate::new(3, 3)].into_iter().collect();

    assert_eq!((a & b).iter().collect::<Vec<_>>(), vec![Coordinate::new(3, 3)]);
    assert_eq!((a | b).len(), 2);
    assert_eq!((!a).len(), 98);
    assert!(!a.is_disjoint(&b));

    let small = BitBoard::<u16, 4>::new();
    assert_eq!((!small).len(), 16);
}

#[test]
fn test_ship_rejects_out_of_bounds() {
    let carrier = FLEET[0];
    let err = Ship::new(carrier, Coordinate::new(6, 0), Orientation::Horizontal).unwrap_err();
    assert!(matches!(err, BoardError::OutOfBounds { ship: "Carrier", .. }));

    let ship = Ship::new(carrier, Coordinate::new(5, 0), Orientation::Horizontal).unwrap();
    assert_eq!(ship.cells().last(), Some(Coordinate::new(9, 0)));
    assert!(ship.contains(Coordinate::new(7, 0)));
    assert!(!ship.contains(Coordinate::new(7, 1)));
}

#[test]
fn test_layout_rejects_overlap() -> Result<(), BoardError> {
    let mut layout = Layout::new();
    layout.place(FLEET[0], Coordinate::new(0, 0), Orientation::Horizontal)?;
    let err = layout
        .place(FLEET[1], Coordinate::new(2, 0), Orientation::Vertical)
        .unwrap_err();
    assert_eq!(err, BoardError::Overlaps { ship: "Battleship" });
    assert_eq!(layout.ships().len(), 1);
    assert!(layout.try_place(FLEET[1], Coordinate::new(2, 0), Orientation::Vertical).is_none());
    assert!(layout.try_place(FLEET[1], Coordinate::new(2, 1), Orientation::Vertical).is_some());
    assert_eq!(layout.occupied().len(), 9);
    Ok(())
}

#[test]
fn test_legal_placements_count_on_empty_board() {
    let layout = Layout::new();
    let destroyer = ShipDef::new("Destroyer", 2);
    // 9 starts per line, 10 lines, both orientations.
    assert_eq!(layout.legal_placements(destroyer).len(), 2 * 9 * usize::from(BOARD_SIZE));
}

#[test]
fn test_random_placement_exhausts_on_full_board() -> Result<(), BoardError> {
    let mut layout = Layout::new();
    let filler = ShipDef::new("Filler", 10);
    for y in 0..BOARD_SIZE {
        layout.place(filler, Coordinate::new(0, y), Orientation::Horizontal)?;
    }
    let mut rng = SmallRng::seed_from_u64(7);
    let err = layout.random_placement(&mut rng, FLEET[4], 25).unwrap_err();
    assert_eq!(
        err,
        BoardError::PlacementExhausted {
            ship: "Destroyer",
            attempts: 25
        }
    );
    Ok(())
}
