#![cfg(feature = "net")]

use std::sync::Arc;

use anyhow::anyhow;

use crate::protocol::{GameApi, Message, PROTOCOL_VERSION};
use crate::transport::{is_disconnect, Transport};

/// Serves a [`GameApi`] to one connected client.
pub struct Skeleton<E: GameApi, T: Transport> {
    engine: Arc<E>,
    transport: T,
}

impl<E: GameApi, T: Transport> Skeleton<E, T> {
    pub fn new(engine: Arc<E>, transport: T) -> Self {
        Self { engine, transport }
    }

    /// Handshake, then answer requests until the peer goes away.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        match self.transport.recv().await? {
            Message::Handshake { version } if version == PROTOCOL_VERSION => {
                self.transport
                    .send(Message::HandshakeAck {
                        version: PROTOCOL_VERSION,
                    })
                    .await?;
            }
            Message::Handshake { version } => {
                let message = format!(
                    "Protocol version mismatch: expected {}, got {}",
                    PROTOCOL_VERSION, version
                );
                self.transport
                    .send(Message::Error {
                        message: message.clone(),
                    })
                    .await?;
                return Err(anyhow!(message));
            }
            other => {
                log::warn!("Expected handshake, got {:?}", other);
                self.transport
                    .send(Message::Error {
                        message: "Expected handshake".to_string(),
                    })
                    .await?;
                return Err(anyhow!("Expected handshake"));
            }
        }

        loop {
            let msg = match self.transport.recv().await {
                Ok(msg) => msg,
                Err(e) if is_disconnect(&e) => return Ok(()),
                Err(e) => {
                    log::warn!("Session ended on receive error: {}", e);
                    return Err(e);
                }
            };
            let reply = self.dispatch(msg).await;
            self.transport.send(reply).await?;
        }
    }

    async fn dispatch(&self, msg: Message) -> Message {
        let reply = match msg {
            Message::CreateBoard { size } => self
                .engine
                .create_board(size)
                .await
                .map(Message::BoardCreated),
            Message::AddShip { board_id, ship } => self
                .engine
                .add_ship(board_id, ship)
                .await
                .map(Message::ShipPlaced),
            Message::Attack { board_id, position } => self
                .engine
                .attack(board_id, position)
                .await
                .map(Message::AttackResult),
            Message::BoardStatusReq { board_id } => self
                .engine
                .board_status(board_id)
                .await
                .map(Message::BoardStatusResp),
            other => {
                log::warn!("Unexpected request: {:?}", other);
                Err(anyhow!("Unexpected request"))
            }
        };
        reply.unwrap_or_else(|e| Message::Error {
            message: e.to_string(),
        })
    }
}
