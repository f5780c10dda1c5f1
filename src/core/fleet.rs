//! Random placement of straight ships.

use std::fmt;
use std::collections::HashSet;

use rand::Rng;

use crate::core::config::PLACEMENT_ATTEMPTS;
use crate::core::position::Position;
use crate::core::ship::{Orientation, Ship};

/// Failure to lay out a fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FleetError {
    /// No free straight run of `length` cells was found.
    UnableToPlace { length: usize },
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::UnableToPlace { length } => {
                write!(f, "unable to place ship of length {}", length)
            }
        }
    }
}

impl std::error::Error for FleetError {}

/// Lay out non-overlapping straight ships of the given `lengths` on a
/// `board_size`×`board_size` grid.
pub fn random_fleet<R: Rng>(
    rng: &mut R,
    board_size: i32,
    lengths: &[usize],
) -> Result<Vec<Ship>, FleetError> {
    let mut occupied = HashSet::new();
    let mut fleet = Vec::with_capacity(lengths.len());
    for &length in lengths {
        let ship = random_ship(rng, board_size, length, &occupied)?;
        occupied.extend(ship.footprint().iter().copied());
        fleet.push(ship);
    }
    Ok(fleet)
}

fn random_ship<R: Rng>(
    rng: &mut R,
    board_size: i32,
    length: usize,
    occupied: &HashSet<Position>,
) -> Result<Ship, FleetError> {
    let span = match i32::try_from(length) {
        Ok(span) if span > 0 && span <= board_size => span,
        _ => return Err(FleetError::UnableToPlace { length }),
    };
    for _ in 0..PLACEMENT_ATTEMPTS {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let (max_x, max_y) = match orientation {
            Orientation::Horizontal => (board_size - span, board_size - 1),
            Orientation::Vertical => (board_size - 1, board_size - span),
        };
        let origin = Position::new(rng.random_range(0..=max_x), rng.random_range(0..=max_y));
        let ship = Ship::line(origin, length, orientation)
            .map_err(|_| FleetError::UnableToPlace { length })?;
        if ship.footprint().iter().all(|p| !occupied.contains(p)) {
            return Ok(ship);
        }
    }
    Err(FleetError::UnableToPlace { length })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{STANDARD_FLEET, STANDARD_FLEET_CELLS};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn standard_fleet_fits_without_overlap() {
        let mut rng = SmallRng::seed_from_u64(42);
        let fleet = random_fleet(&mut rng, 10, &STANDARD_FLEET).unwrap();
        let cells: HashSet<Position> = fleet
            .iter()
            .flat_map(|s| s.footprint().iter().copied())
            .collect();
        assert_eq!(fleet.len(), STANDARD_FLEET.len());
        assert_eq!(cells.len(), STANDARD_FLEET_CELLS);
        assert!(cells
            .iter()
            .all(|p| (0..10).contains(&p.x()) && (0..10).contains(&p.y())));
    }

    #[test]
    fn ship_longer_than_board_fails() {
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(
            random_fleet(&mut rng, 3, &[4]).unwrap_err(),
            FleetError::UnableToPlace { length: 4 }
        );
        assert_eq!(
            random_fleet(&mut rng, 10, &[usize::MAX]).unwrap_err(),
            FleetError::UnableToPlace { length: usize::MAX }
        );
    }
}
