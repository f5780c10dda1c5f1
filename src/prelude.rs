//! Commonly used types and utilities for ease of import.

pub use crate::{
    AttackOutcome, AttackStatus, Board, BoardId, GameService, GameStateStore, LogSink, Position,
    Ship, DEFAULT_BOARD_SIZE,
};

#[cfg(feature = "net")]
pub use crate::transport::{in_memory::InMemoryTransport, tcp::TcpTransport, Transport};
#[cfg(feature = "net")]
pub use crate::{GameApi, Skeleton, Stub};
