use battleship_server::{Orientation, Position, Ship, ShipError};

fn pos(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

#[test]
fn test_footprint_required() {
    assert_eq!(Ship::from_footprint(None).unwrap_err(), ShipError::MissingFootprint);
    assert_eq!(Ship::new(vec![]).unwrap_err(), ShipError::EmptyFootprint);
    assert_eq!(
        Ship::from_footprint(Some(vec![])).unwrap_err(),
        ShipError::EmptyFootprint
    );
}

#[test]
fn test_duplicate_position_rejected() {
    let err = Ship::new(vec![pos(1, 1), pos(1, 2), pos(1, 1)]).unwrap_err();
    assert_eq!(err, ShipError::DuplicatePosition(pos(1, 1)));
}

#[test]
fn test_register_hit_and_sunk() -> Result<(), ShipError> {
    let mut ship = Ship::new(vec![pos(0, 0), pos(0, 1)])?;
    assert!(!ship.is_sunk());
    // miss leaves state untouched
    assert!(!ship.register_hit(pos(5, 5)));
    assert_eq!(ship.hit_count(), 0);

    assert!(ship.register_hit(pos(0, 1)));
    assert!(!ship.is_sunk());
    // hits are a set, not a counter
    assert!(ship.register_hit(pos(0, 1)));
    assert_eq!(ship.hit_count(), 1);
    assert!(!ship.is_sunk());

    assert!(ship.register_hit(pos(0, 0)));
    assert!(ship.is_sunk());
    Ok(())
}

#[test]
fn test_line_constructor() -> Result<(), ShipError> {
    let horizontal = Ship::line(pos(2, 3), 3, Orientation::Horizontal)?;
    assert_eq!(horizontal.footprint(), &[pos(2, 3), pos(3, 3), pos(4, 3)]);

    let vertical = Ship::line(pos(1, 1), 2, Orientation::Vertical)?;
    assert_eq!(vertical.footprint(), &[pos(1, 1), pos(1, 2)]);
    assert_eq!(vertical.len(), 2);

    assert_eq!(
        Ship::line(pos(0, 0), 0, Orientation::Vertical).unwrap_err(),
        ShipError::EmptyFootprint
    );
    Ok(())
}

#[test]
fn test_line_rejects_coordinate_overflow() {
    let origin = pos(i32::MAX, 0);
    assert_eq!(
        Ship::line(origin, 2, Orientation::Horizontal).unwrap_err(),
        ShipError::CoordinateOverflow { origin, length: 2 }
    );
    // a single cell at the edge still fits
    assert_eq!(
        Ship::line(origin, 1, Orientation::Horizontal).map(|s| s.len()),
        Ok(1)
    );
    assert!(Ship::line(pos(0, i32::MAX - 1), 3, Orientation::Vertical).is_err());

    // lengths beyond i32 are rejected rather than truncated
    for length in [i32::MAX as usize + 1, usize::MAX] {
        assert_eq!(
            Ship::line(pos(0, 0), length, Orientation::Vertical).unwrap_err(),
            ShipError::CoordinateOverflow {
                origin: pos(0, 0),
                length
            }
        );
    }
}

#[test]
fn test_snapshot_restores_hits() -> Result<(), ShipError> {
    let mut ship = Ship::line(pos(4, 4), 3, Orientation::Vertical)?;
    ship.register_hit(pos(4, 6));
    ship.register_hit(pos(4, 4));

    let snapshot = ship.snapshot();
    assert_eq!(snapshot.hits, vec![pos(4, 4), pos(4, 6)]);
    assert!(!snapshot.sunk);

    let restored = Ship::from_snapshot(&snapshot)?;
    assert_eq!(restored, ship);

    let mut bad = snapshot.clone();
    bad.hits.push(pos(9, 9));
    assert_eq!(
        Ship::from_snapshot(&bad).unwrap_err(),
        ShipError::HitOutsideFootprint(pos(9, 9))
    );
    Ok(())
}

#[test]
fn test_position_value_semantics() {
    use std::collections::HashSet;

    let a = Position::new(3, 7);
    let b = Position::from((3, 7));
    assert_eq!(a, b);
    assert_eq!(a.to_string(), "(3,7)");

    let set: HashSet<Position> = [a, b, pos(7, 3)].into_iter().collect();
    assert_eq!(set.len(), 2);

    let json = serde_json::to_string(&a).unwrap();
    assert_eq!(json, r#"{"x":3,"y":7}"#);
}
