#![cfg(feature = "net")]

use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::anyhow;
use tokio::sync::Mutex;

use crate::core::{AttackOutcome, BoardId, BoardSnapshot, Position};
use crate::domain::{BoardCreation, PlacementOutcome};
use crate::protocol::{GameApi, Message, PROTOCOL_VERSION};
use crate::transport::Transport;

/// Client side of a [`Skeleton`](crate::Skeleton) session.
pub struct Stub<T: Transport> {
    transport: Mutex<T>,
    handshaken: AtomicBool,
}

impl<T: Transport> Stub<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport: Mutex::new(transport),
            handshaken: AtomicBool::new(false),
        }
    }

    /// Send `msg` and wait for its reply, opening the session first if
    /// needed. Server-side errors become `Err`.
    async fn request(&self, msg: Message) -> anyhow::Result<Message> {
        let mut transport = self.transport.lock().await;
        if !self.handshaken.load(Ordering::SeqCst) {
            transport
                .send(Message::Handshake {
                    version: PROTOCOL_VERSION,
                })
                .await?;
            match transport.recv().await? {
                Message::HandshakeAck { version } if version == PROTOCOL_VERSION => {
                    self.handshaken.store(true, Ordering::SeqCst);
                }
                Message::HandshakeAck { version } => {
                    return Err(anyhow!(
                        "Protocol version mismatch in HandshakeAck: expected {}, got {}",
                        PROTOCOL_VERSION,
                        version
                    ));
                }
                Message::Error { message } => {
                    return Err(anyhow!("Handshake rejected: {}", message));
                }
                other => return Err(anyhow!("Expected HandshakeAck, got {:?}", other)),
            }
        }
        transport.send(msg).await?;
        match transport.recv().await? {
            Message::Error { message } => Err(anyhow!("Server error: {}", message)),
            reply => Ok(reply),
        }
    }
}

#[async_trait::async_trait]
impl<T: Transport> GameApi for Stub<T> {
    async fn create_board(&self, size: Option<i32>) -> anyhow::Result<BoardCreation> {
        match self.request(Message::CreateBoard { size }).await? {
            Message::BoardCreated(res) => Ok(res),
            other => Err(anyhow!("Unexpected message: {:?}", other)),
        }
    }

    async fn add_ship(
        &self,
        board_id: BoardId,
        ship: Option<Vec<Position>>,
    ) -> anyhow::Result<PlacementOutcome> {
        match self.request(Message::AddShip { board_id, ship }).await? {
            Message::ShipPlaced(res) => Ok(res),
            other => Err(anyhow!("Unexpected message: {:?}", other)),
        }
    }

    async fn attack(
        &self,
        board_id: BoardId,
        position: Position,
    ) -> anyhow::Result<Option<AttackOutcome>> {
        match self.request(Message::Attack { board_id, position }).await? {
            Message::AttackResult(res) => Ok(res),
            other => Err(anyhow!("Unexpected message: {:?}", other)),
        }
    }

    async fn board_status(&self, board_id: BoardId) -> anyhow::Result<Option<BoardSnapshot>> {
        match self.request(Message::BoardStatusReq { board_id }).await? {
            Message::BoardStatusResp(res) => Ok(res),
            other => Err(anyhow!("Unexpected message: {:?}", other)),
        }
    }
}
