use std::fmt;

use crate::protocol::Message;

/// The peer closed the connection. Every other transport error means the
/// session broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disconnected(pub &'static str);

impl fmt::Display for Disconnected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for Disconnected {}

pub fn is_disconnect(e: &anyhow::Error) -> bool {
    e.downcast_ref::<Disconnected>().is_some()
}

/// Bidirectional message channel between a client and the server.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()>;
    async fn recv(&mut self) -> anyhow::Result<Message>;
}

pub mod in_memory;
pub mod tcp;
