//! Common types for the board engine: errors and attack outcomes.

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::core::position::{join_positions, Position};

/// What an attack did, with the text reported to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AttackStatus {
    #[default]
    Miss,
    Hit,
    Sunk,
    /// The position had been attacked before; nothing changed.
    AlreadyAttacked,
}

impl AttackStatus {
    pub const fn message(&self) -> &'static str {
        match self {
            AttackStatus::Miss => "Miss!",
            AttackStatus::Hit => "Hit!",
            AttackStatus::Sunk => "Ship sunk!",
            AttackStatus::AlreadyAttacked => "Position already attacked.",
        }
    }
}

impl fmt::Display for AttackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of a single attack on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttackOutcome {
    /// The attack landed on a ship segment not attacked before.
    pub hit: bool,
    /// The hit completed the ship's footprint.
    pub sunk: bool,
    pub status: AttackStatus,
}

impl AttackOutcome {
    pub const MISS: AttackOutcome = AttackOutcome {
        hit: false,
        sunk: false,
        status: AttackStatus::Miss,
    };

    /// Neither a hit nor a miss: the position was already attacked.
    pub const REPEAT: AttackOutcome = AttackOutcome {
        hit: false,
        sunk: false,
        status: AttackStatus::AlreadyAttacked,
    };

    pub const fn hit(sunk: bool) -> Self {
        let status = if sunk {
            AttackStatus::Sunk
        } else {
            AttackStatus::Hit
        };
        Self {
            hit: true,
            sunk,
            status,
        }
    }

    pub const fn is_repeat(&self) -> bool {
        matches!(self.status, AttackStatus::AlreadyAttacked)
    }

    /// Client-facing text: `"Hit!"`, `"Ship sunk!"`, `"Miss!"` or
    /// `"Position already attacked."`.
    pub const fn message(&self) -> &'static str {
        self.status.message()
    }
}

/// Errors raised while constructing a ship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShipError {
    /// No footprint was supplied at all.
    MissingFootprint,
    /// The footprint has no positions.
    EmptyFootprint,
    /// The footprint lists the same position twice.
    DuplicatePosition(Position),
    /// A restored hit is not part of the footprint.
    HitOutsideFootprint(Position),
    /// A generated footprint would leave the `i32` coordinate range.
    CoordinateOverflow { origin: Position, length: usize },
}

impl fmt::Display for ShipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipError::MissingFootprint => write!(f, "ship positions are required"),
            ShipError::EmptyFootprint => write!(f, "a ship must occupy at least one position"),
            ShipError::DuplicatePosition(p) => write!(f, "position {} is listed more than once", p),
            ShipError::HitOutsideFootprint(p) => {
                write!(f, "hit at {} is outside the ship's positions", p)
            }
            ShipError::CoordinateOverflow { origin, length } => write!(
                f,
                "a ship of length {} from {} does not fit in coordinate range",
                length, origin
            ),
        }
    }
}

impl std::error::Error for ShipError {}

/// Errors raised while constructing or restoring a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board size must be strictly positive.
    InvalidSize(i32),
    /// A snapshot violates a board invariant.
    CorruptSnapshot(String),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidSize(size) => {
                write!(f, "board size must be greater than zero (got {})", size)
            }
            BoardError::CorruptSnapshot(reason) => write!(f, "corrupt board snapshot: {}", reason),
        }
    }
}

impl std::error::Error for BoardError {}

/// Why a board refused a ship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// These positions fall outside the grid.
    OutOfBounds(Vec<Position>),
    /// These positions are already occupied by another ship.
    Overlap(Vec<Position>),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds(positions) => {
                write!(f, "positions out of board bounds: {}", join_positions(positions))
            }
            PlacementError::Overlap(positions) => {
                write!(f, "overlaps existing ship at: {}", join_positions(positions))
            }
        }
    }
}

impl std::error::Error for PlacementError {}
