use battleship_bots::{Coordinate, OpponentDetector, OpponentStrategy, SharedDetector};

fn feed(detector: &mut OpponentDetector, shots: &[(u8, u8)]) {
    for &(x, y) in shots {
        detector.record_shot(Coordinate::new(x, y));
    }
}

#[test]
fn test_unknown_below_three_shots() {
    let mut detector = OpponentDetector::new();
    feed(&mut detector, &[(4, 4), (5, 5)]);
    assert_eq!(detector.detected(), OpponentStrategy::Unknown);
    assert!(!detector.is_finalized());

    feed(&mut detector, &[(0, 0)]);
    assert_eq!(detector.detected(), OpponentStrategy::CenterFirst);
    assert!(detector.is_finalized());
}

#[test]
fn test_center_first_covers_the_middle_block() {
    for x in 3..=5 {
        for y in 3..=5 {
            let mut detector = OpponentDetector::new();
            feed(&mut detector, &[(x, y), (0, 9), (9, 0)]);
            assert_eq!(detector.detected(), OpponentStrategy::CenterFirst);
        }
    }
}

#[test]
fn test_corner_column_skip_is_never_center_first() {
    let mut detector = OpponentDetector::new();
    feed(&mut detector, &[(9, 9), (9, 7), (9, 5)]);
    assert_eq!(detector.detected(), OpponentStrategy::Unknown);
    feed(&mut detector, &[(9, 3), (9, 1)]);
    assert!(matches!(
        detector.detected(),
        OpponentStrategy::CornerCheckerboard | OpponentStrategy::Other
    ));
}

#[test]
fn test_corner_checkerboard_along_a_row() {
    let mut detector = OpponentDetector::new();
    feed(&mut detector, &[(9, 9), (7, 9), (5, 9), (3, 9)]);
    assert_eq!(detector.detected(), OpponentStrategy::Unknown);
    feed(&mut detector, &[(1, 9)]);
    assert_eq!(detector.detected(), OpponentStrategy::CornerCheckerboard);
}

#[test]
fn test_corner_checkerboard_across_rows() {
    let mut detector = OpponentDetector::new();
    feed(&mut detector, &[(0, 0), (1, 1), (0, 2), (1, 3), (0, 4)]);
    assert_eq!(detector.detected(), OpponentStrategy::CornerCheckerboard);
}

#[test]
fn test_other_after_five_unremarkable_shots() {
    let mut detector = OpponentDetector::new();
    feed(&mut detector, &[(2, 7), (6, 1), (0, 5), (8, 3), (1, 1)]);
    assert_eq!(detector.detected(), OpponentStrategy::Other);
}

#[test]
fn test_classification_latches() {
    let mut detector = OpponentDetector::new();
    feed(&mut detector, &[(2, 7), (6, 1), (0, 5), (8, 3), (1, 1)]);
    feed(&mut detector, &[(4, 4), (4, 5), (4, 6)]);
    assert_eq!(detector.detected(), OpponentStrategy::Other);
    assert_eq!(detector.shots().len(), 8);

    detector.reset();
    assert_eq!(detector.detected(), OpponentStrategy::Unknown);
    assert!(detector.shots().is_empty());
}

#[test]
fn test_shared_detector_is_seen_by_every_clone() {
    let detector = SharedDetector::new();
    let reader = detector.clone();
    for (x, y) in [(4, 4), (0, 0), (9, 9)] {
        detector.record_shot(Coordinate::new(x, y));
    }
    assert_eq!(reader.detected(), OpponentStrategy::CenterFirst);
    assert_eq!(reader.snapshot().shots().len(), 3);

    reader.reset();
    assert_eq!(detector.detected(), OpponentStrategy::Unknown);
}
