use std::io::ErrorKind;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, ToSocketAddrs};
use tokio::time::{timeout, Duration};

use crate::config::{DEFAULT_TIMEOUT, MAX_MESSAGE_SIZE};
use crate::protocol::Message;
use crate::transport::{Disconnected, Transport};

/// Length-prefixed bincode frames over a TCP stream.
///
/// Each frame is a 4-byte big-endian length followed by the encoded
/// [`Message`]. Empty and oversized frames are rejected.
pub struct TcpTransport {
    stream: TcpStream,
    timeout_duration: Duration,
    max_message_size: u32,
}

impl TcpTransport {
    pub fn new(stream: TcpStream) -> Self {
        Self::with_config(stream, DEFAULT_TIMEOUT, MAX_MESSAGE_SIZE)
    }

    pub fn with_timeout(stream: TcpStream, timeout_duration: Duration) -> Self {
        Self::with_config(stream, timeout_duration, MAX_MESSAGE_SIZE)
    }

    pub fn with_config(stream: TcpStream, timeout_duration: Duration, max_message_size: u32) -> Self {
        Self {
            stream,
            timeout_duration,
            max_message_size,
        }
    }

    pub async fn connect<A: ToSocketAddrs>(addr: A) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        Ok(Self::new(stream))
    }

    fn check_len(&self, len: u32) -> anyhow::Result<()> {
        if len == 0 {
            return Err(anyhow::anyhow!("Invalid message length: 0"));
        }
        if len > self.max_message_size {
            return Err(anyhow::anyhow!(
                "Message too large: {} bytes (max: {})",
                len,
                self.max_message_size
            ));
        }
        Ok(())
    }
}

fn write_error(e: std::io::Error) -> anyhow::Error {
    match e.kind() {
        ErrorKind::BrokenPipe | ErrorKind::ConnectionReset => {
            Disconnected("Connection closed by peer").into()
        }
        _ => anyhow::anyhow!("Write error: {}", e),
    }
}

fn read_error(e: std::io::Error) -> anyhow::Error {
    match e.kind() {
        ErrorKind::UnexpectedEof => Disconnected("Connection closed by peer").into(),
        ErrorKind::ConnectionReset => Disconnected("Connection reset by peer").into(),
        _ => anyhow::anyhow!("Read error: {}", e),
    }
}

#[async_trait::async_trait]
impl Transport for TcpTransport {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        let data = bincode::serialize(&msg)
            .map_err(|e| anyhow::anyhow!("Serialization error: {}", e))?;
        let len = u32::try_from(data.len())
            .map_err(|_| anyhow::anyhow!("Message too large: {} bytes", data.len()))?;
        self.check_len(len)?;

        let timeout_duration = self.timeout_duration;
        let send_op = async {
            self.stream
                .write_all(&len.to_be_bytes())
                .await
                .map_err(write_error)?;
            self.stream.write_all(&data).await.map_err(write_error)?;
            anyhow::Ok(())
        };

        timeout(timeout_duration, send_op)
            .await
            .map_err(|_| anyhow::anyhow!("Send timeout after {:?}", timeout_duration))?
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        let timeout_duration = self.timeout_duration;
        let recv_op = async {
            let mut len_buf = [0u8; 4];
            self.stream
                .read_exact(&mut len_buf)
                .await
                .map_err(read_error)?;
            let len = u32::from_be_bytes(len_buf);
            self.check_len(len)?;

            let mut buf = vec![0u8; len as usize];
            self.stream.read_exact(&mut buf).await.map_err(read_error)?;
            let msg = bincode::deserialize(&buf)
                .map_err(|e| anyhow::anyhow!("Deserialization error: {}", e))?;
            anyhow::Ok(msg)
        };

        timeout(timeout_duration, recv_op)
            .await
            .map_err(|_| anyhow::anyhow!("Receive timeout after {:?}", timeout_duration))?
    }
}
