#![cfg(feature = "net")]

use serde::{Deserialize, Serialize};

use crate::core::{AttackOutcome, BoardId, BoardSnapshot, Position};
use crate::domain::{BoardCreation, PlacementOutcome};

pub use crate::config::PROTOCOL_VERSION;

/// Messages exchanged between a client and the game server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    /// Open a session at the given protocol version.
    Handshake { version: u8 },
    /// Accept a session.
    HandshakeAck { version: u8 },
    /// Create a board; `None` selects the default size.
    CreateBoard { size: Option<i32> },
    BoardCreated(BoardCreation),
    /// Place a ship; a missing footprint is rejected by the server.
    AddShip {
        board_id: BoardId,
        ship: Option<Vec<Position>>,
    },
    ShipPlaced(PlacementOutcome),
    Attack { board_id: BoardId, position: Position },
    /// `None` when the board does not exist.
    AttackResult(Option<AttackOutcome>),
    BoardStatusReq { board_id: BoardId },
    BoardStatusResp(Option<BoardSnapshot>),
    /// The request could not be handled.
    Error { message: String },
}

/// Operations exposed to remote and local callers.
#[async_trait::async_trait]
pub trait GameApi: Send + Sync {
    async fn create_board(&self, size: Option<i32>) -> anyhow::Result<BoardCreation>;
    async fn add_ship(
        &self,
        board_id: BoardId,
        ship: Option<Vec<Position>>,
    ) -> anyhow::Result<PlacementOutcome>;
    async fn attack(
        &self,
        board_id: BoardId,
        position: Position,
    ) -> anyhow::Result<Option<AttackOutcome>>;
    async fn board_status(&self, board_id: BoardId) -> anyhow::Result<Option<BoardSnapshot>>;
}
