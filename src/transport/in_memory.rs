use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::protocol::Message;
use crate::transport::{Disconnected, Transport};

/// One end of an in-process message pipe.
pub struct InMemoryTransport {
    tx: UnboundedSender<Message>,
    rx: UnboundedReceiver<Message>,
}

impl InMemoryTransport {
    /// Two connected ends; what one sends the other receives.
    pub fn pair() -> (Self, Self) {
        let (tx_a, rx_b) = unbounded_channel();
        let (tx_b, rx_a) = unbounded_channel();
        (Self { tx: tx_a, rx: rx_a }, Self { tx: tx_b, rx: rx_b })
    }
}

#[async_trait::async_trait]
impl Transport for InMemoryTransport {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        self.tx
            .send(msg)
            .map_err(|_| Disconnected("Channel closed").into())
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        self.rx
            .recv()
            .await
            .ok_or_else(|| Disconnected("Channel closed").into())
    }
}
