//! Core board engine: positions, ships and boards.
//!
//! Pure, synchronous game state with no I/O. Boards report through the
//! [`EventSink`](crate::events::EventSink) they were built with.

pub mod board;
pub mod common;
pub mod config;
pub mod fleet;
pub mod position;
pub mod ship;

// Re-export commonly used types
pub use board::{Board, BoardId, BoardSnapshot};
pub use common::{AttackOutcome, AttackStatus, BoardError, PlacementError, ShipError};
pub use config::*;
pub use fleet::{random_fleet, FleetError};
pub use position::Position;
pub use ship::{Orientation, Ship, ShipSnapshot};
