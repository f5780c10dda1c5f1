//! Ships: a fixed footprint of positions with hit tracking.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::common::ShipError;
use crate::core::position::Position;

/// Direction a straight ship extends from its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Along increasing `x`.
    Horizontal,
    /// Along increasing `y`.
    Vertical,
}

/// A ship occupying a fixed set of positions.
///
/// The footprint never changes after construction; the hit set only grows
/// and is always a subset of the footprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    footprint: Vec<Position>,
    hits: HashSet<Position>,
}

/// Serializable view of a ship and its damage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipSnapshot {
    pub positions: Vec<Position>,
    /// Hit positions, sorted.
    pub hits: Vec<Position>,
    pub sunk: bool,
}

impl Ship {
    /// Build a ship from its footprint, in the order given.
    pub fn new(footprint: Vec<Position>) -> Result<Self, ShipError> {
        if footprint.is_empty() {
            return Err(ShipError::EmptyFootprint);
        }
        let mut seen = HashSet::with_capacity(footprint.len());
        for &pos in &footprint {
            if !seen.insert(pos) {
                return Err(ShipError::DuplicatePosition(pos));
            }
        }
        Ok(Ship {
            footprint,
            hits: HashSet::new(),
        })
    }

    /// Build a ship from a footprint that may be absent, e.g. a request
    /// that omitted it.
    pub fn from_footprint(footprint: Option<Vec<Position>>) -> Result<Self, ShipError> {
        match footprint {
            Some(positions) => Self::new(positions),
            None => Err(ShipError::MissingFootprint),
        }
    }

    /// A straight ship of `length` cells starting at `origin`.
    ///
    /// Fails with `CoordinateOverflow` if any cell would fall outside the
    /// `i32` range.
    pub fn line(origin: Position, length: usize, orientation: Orientation) -> Result<Self, ShipError> {
        let overflow = || ShipError::CoordinateOverflow { origin, length };
        let cells = i32::try_from(length).map_err(|_| overflow())?;
        let footprint = (0..cells)
            .map(|i| match orientation {
                Orientation::Horizontal => origin.checked_offset(i, 0),
                Orientation::Vertical => origin.checked_offset(0, i),
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(overflow)?;
        Self::new(footprint)
    }

    /// Restore a ship together with its recorded hits.
    pub fn from_snapshot(snapshot: &ShipSnapshot) -> Result<Self, ShipError> {
        let mut ship = Self::new(snapshot.positions.clone())?;
        for &hit in &snapshot.hits {
            if !ship.register_hit(hit) {
                return Err(ShipError::HitOutsideFootprint(hit));
            }
        }
        Ok(ship)
    }

    /// Record a hit at `pos`. Returns `true` if `pos` is part of the ship.
    pub fn register_hit(&mut self, pos: Position) -> bool {
        if self.occupies(pos) {
            self.hits.insert(pos);
            true
        } else {
            false
        }
    }

    /// Every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        // footprint positions are unique and hits are a subset of them
        self.hits.len() == self.footprint.len()
    }

    pub fn is_hit(&self, pos: Position) -> bool {
        self.hits.contains(&pos)
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.footprint.contains(&pos)
    }

    pub fn footprint(&self) -> &[Position] {
        &self.footprint
    }

    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }

    pub fn len(&self) -> usize {
        self.footprint.len()
    }

    /// Always `false`; a ship has at least one position.
    pub fn is_empty(&self) -> bool {
        self.footprint.is_empty()
    }

    pub fn snapshot(&self) -> ShipSnapshot {
        let mut hits: Vec<Position> = self.hits.iter().copied().collect();
        hits.sort();
        ShipSnapshot {
            positions: self.footprint.clone(),
            hits,
            sunk: self.is_sunk(),
        }
    }
}
