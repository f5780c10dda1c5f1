//! Board state: accepted ships and the attack history of one game.

use std::fmt;
use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::common::{AttackOutcome, BoardError, PlacementError};
use crate::core::position::{join_positions, Position};
use crate::core::ship::{Ship, ShipSnapshot};
use crate::events::Events;

const COMPONENT: &str = "battleship::board";

/// Opaque, globally unique board identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoardId(Uuid);

impl BoardId {
    /// A fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for BoardId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BoardId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Serializable board state for inspecting or restoring a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub id: BoardId,
    pub size: i32,
    pub ships: Vec<ShipSnapshot>,
    /// Attacked positions, sorted.
    pub attacks: Vec<Position>,
}

/// A `size`×`size` grid with its ships and attacked positions.
///
/// Ships never overlap and lie entirely inside the grid; each position is
/// attacked at most once. Both collections only grow.
pub struct Board {
    id: BoardId,
    size: i32,
    ships: Vec<Ship>,
    occupied: HashSet<Position>,
    attacks: HashSet<Position>,
    events: Events,
}

impl Board {
    /// Create an empty board with a fresh identifier.
    pub fn new(size: i32, events: Events) -> Result<Self, BoardError> {
        Self::with_id(BoardId::new(), size, events)
    }

    /// Create an empty board with a caller-chosen identifier.
    pub fn with_id(id: BoardId, size: i32, events: Events) -> Result<Self, BoardError> {
        if size <= 0 {
            return Err(BoardError::InvalidSize(size));
        }
        events.info(
            COMPONENT,
            &format!("Board created with ID {} and size {}", id, size),
        );
        Ok(Board {
            id,
            size,
            ships: Vec::new(),
            occupied: HashSet::new(),
            attacks: HashSet::new(),
            events,
        })
    }

    pub fn id(&self) -> BoardId {
        self.id
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Ships in the order they were accepted.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn attacks(&self) -> &HashSet<Position> {
        &self.attacks
    }

    pub fn is_attacked(&self, pos: Position) -> bool {
        self.attacks.contains(&pos)
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        (0..self.size).contains(&pos.x()) && (0..self.size).contains(&pos.y())
    }

    /// Returns `true` when at least one ship is placed and all are sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::is_sunk)
    }

    pub fn ships_remaining(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Accept `ship` if it fits inside the grid and touches no other ship.
    ///
    /// Bounds are checked before overlap; on rejection the board is
    /// unchanged.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), PlacementError> {
        let out_of_bounds: Vec<Position> = ship
            .footprint()
            .iter()
            .copied()
            .filter(|&p| !self.in_bounds(p))
            .collect();
        if !out_of_bounds.is_empty() {
            self.events.warn(
                COMPONENT,
                &format!(
                    "AddShip failed: Ship positions out of board bounds on board {}. Invalid positions: {}",
                    self.id,
                    join_positions(&out_of_bounds)
                ),
            );
            return Err(PlacementError::OutOfBounds(out_of_bounds));
        }

        let overlap: Vec<Position> = ship
            .footprint()
            .iter()
            .copied()
            .filter(|p| self.occupied.contains(p))
            .collect();
        if !overlap.is_empty() {
            self.events.warn(
                COMPONENT,
                &format!(
                    "AddShip failed: Ship overlaps with existing ship on board {}. Overlapping positions: {}",
                    self.id,
                    join_positions(&overlap)
                ),
            );
            return Err(PlacementError::Overlap(overlap));
        }

        let placed = join_positions(ship.footprint());
        self.occupied.extend(ship.footprint().iter().copied());
        self.ships.push(ship);
        self.events.info(
            COMPONENT,
            &format!("Ship added to board {} at positions {}", self.id, placed),
        );
        Ok(())
    }

    /// Attack `pos`, recording it permanently.
    ///
    /// A repeat attack changes nothing and reports `AlreadyAttacked`, so a
    /// position can never score twice.
    pub fn apply_attack(&mut self, pos: Position) -> AttackOutcome {
        if !self.attacks.insert(pos) {
            self.events.info(
                COMPONENT,
                &format!("Position {} already attacked on board {}", pos, self.id),
            );
            return AttackOutcome::REPEAT;
        }

        // footprints are disjoint, so the first claimant is the only one
        for ship in self.ships.iter_mut() {
            if ship.register_hit(pos) {
                let sunk = ship.is_sunk();
                self.events.info(
                    COMPONENT,
                    &format!(
                        "Attack at {} hit a ship on board {}. Ship sunk: {}",
                        pos, self.id, sunk
                    ),
                );
                return AttackOutcome::hit(sunk);
            }
        }

        self.events.info(
            COMPONENT,
            &format!("Attack at {} missed on board {}", pos, self.id),
        );
        AttackOutcome::MISS
    }

    /// Immutable copy of the current state.
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut attacks: Vec<Position> = self.attacks.iter().copied().collect();
        attacks.sort();
        BoardSnapshot {
            id: self.id,
            size: self.size,
            ships: self.ships.iter().map(Ship::snapshot).collect(),
            attacks,
        }
    }

    /// Rebuild a board from a snapshot, re-checking every invariant.
    pub fn restore(snapshot: &BoardSnapshot, events: Events) -> Result<Self, BoardError> {
        let mut board = Board::with_id(snapshot.id, snapshot.size, events)?;
        let attacks: HashSet<Position> = snapshot.attacks.iter().copied().collect();

        for (i, state) in snapshot.ships.iter().enumerate() {
            let ship = Ship::from_snapshot(state)
                .map_err(|e| BoardError::CorruptSnapshot(format!("ship {}: {}", i, e)))?;
            if let Some(hit) = state.hits.iter().find(|&&h| !attacks.contains(&h)) {
                return Err(BoardError::CorruptSnapshot(format!(
                    "ship {}: hit at {} was never attacked",
                    i, hit
                )));
            }
            board
                .place_ship(ship)
                .map_err(|e| BoardError::CorruptSnapshot(format!("ship {}: {}", i, e)))?;
        }

        // an attack on an occupied cell must have registered as a hit
        for ship in &board.ships {
            if let Some(missed) = ship
                .footprint()
                .iter()
                .find(|&&p| attacks.contains(&p) && !ship.is_hit(p))
            {
                return Err(BoardError::CorruptSnapshot(format!(
                    "attack at {} on a ship was not recorded as a hit",
                    missed
                )));
            }
        }

        board.attacks = attacks;
        Ok(board)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("id", &self.id)
            .field("size", &self.size)
            .field("ships", &self.ships)
            .field("attacks", &self.attacks)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{MemorySink, NullSink};
    use log::Level;

    fn pos(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn rejects_non_positive_size() {
        assert_eq!(
            Board::new(0, NullSink::shared()).unwrap_err(),
            BoardError::InvalidSize(0)
        );
        assert_eq!(
            Board::new(-3, NullSink::shared()).unwrap_err(),
            BoardError::InvalidSize(-3)
        );
    }

    #[test]
    fn with_id_keeps_identifier() {
        let id = BoardId::new();
        let board = Board::with_id(id, 5, NullSink::shared()).unwrap();
        assert_eq!(board.id(), id);
        assert_eq!(board.size(), 5);
    }

    #[test]
    fn bounds_checked_before_overlap() {
        let mut board = Board::new(5, NullSink::shared()).unwrap();
        board
            .place_ship(Ship::new(vec![pos(0, 0), pos(1, 0)]).unwrap())
            .unwrap();
        // overlaps at (0,0) and leaves the grid at (-1,0)
        let err = board
            .place_ship(Ship::new(vec![pos(-1, 0), pos(0, 0)]).unwrap())
            .unwrap_err();
        assert_eq!(err, PlacementError::OutOfBounds(vec![pos(-1, 0)]));
        assert_eq!(board.ships().len(), 1);
    }

    #[test]
    fn rejection_emits_warning() {
        let sink = MemorySink::new();
        let mut board = Board::new(3, sink.clone()).unwrap();
        let _ = board.place_ship(Ship::new(vec![pos(3, 0)]).unwrap());
        assert_eq!(sink.count(Level::Warn, "out of board bounds"), 1);
        assert_eq!(sink.count(Level::Warn, "(3,0)"), 1);
    }

    #[test]
    fn restore_rejects_unattacked_hit() {
        let board = Board::new(4, NullSink::shared()).unwrap();
        let mut snapshot = board.snapshot();
        snapshot.ships.push(ShipSnapshot {
            positions: vec![pos(0, 0), pos(0, 1)],
            hits: vec![pos(0, 0)],
            sunk: false,
        });
        assert!(matches!(
            Board::restore(&snapshot, NullSink::shared()),
            Err(BoardError::CorruptSnapshot(_))
        ));
    }
}
