use std::sync::Arc;

use battleship_server::transport::{is_disconnect, Transport};
use battleship_server::{
    AttackOutcome, GameApi, GameService, GameStateStore, Message, NullSink, Position, Skeleton,
    Stub, TcpTransport, PROTOCOL_VERSION,
};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tokio::time::Duration;

#[tokio::test(flavor = "multi_thread")]
async fn test_stub_skeleton_tcp() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        let service = Arc::new(GameService::new(
            Arc::new(GameStateStore::new()),
            NullSink::shared(),
        ));
        let mut skeleton = Skeleton::new(service, TcpTransport::new(socket));
        skeleton.run().await.unwrap();
    });

    let stub = Stub::new(TcpTransport::connect(addr).await?);
    let id = stub.create_board(Some(10)).await?.board_id.unwrap();
    let ship = vec![Position::new(5, 5), Position::new(6, 5), Position::new(7, 5)];
    assert!(stub.add_ship(id, Some(ship)).await?.success);

    assert_eq!(
        stub.attack(id, Position::new(9, 9)).await?,
        Some(AttackOutcome::MISS)
    );
    for x in 5..7 {
        assert_eq!(
            stub.attack(id, Position::new(x, 5)).await?,
            Some(AttackOutcome::hit(false))
        );
    }
    assert_eq!(
        stub.attack(id, Position::new(7, 5)).await?,
        Some(AttackOutcome::hit(true))
    );

    drop(stub);
    server.await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_oversized_length_prefix() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server_task = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        socket.write_all(&[0xFF, 0xFF, 0xFF, 0xFF]).await.unwrap();
        socket.flush().await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
    });

    let mut transport = TcpTransport::connect(addr).await?;
    let err = transport.recv().await.unwrap_err().to_string();
    assert!(err.contains("too large"));

    server_task.await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_zero_length_frame() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server_task = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        socket.write_all(&[0, 0, 0, 0]).await.unwrap();
        socket.flush().await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
    });

    let mut transport = TcpTransport::connect(addr).await?;
    let err = transport.recv().await.unwrap_err().to_string();
    assert!(err.contains("Invalid message length"));

    server_task.await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_receive_timeout() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server_task = tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_millis(300)).await;
    });

    let stream = tokio::net::TcpStream::connect(addr).await?;
    let mut transport = TcpTransport::with_timeout(stream, Duration::from_millis(50));
    let err = transport.recv().await.unwrap_err().to_string();
    assert!(err.contains("timeout"));

    server_task.await?;
    Ok(())
}

fn service() -> Arc<GameService> {
    Arc::new(GameService::new(
        Arc::new(GameStateStore::new()),
        NullSink::shared(),
    ))
}

async fn handshake(transport: &mut TcpTransport) -> anyhow::Result<()> {
    transport
        .send(Message::Handshake {
            version: PROTOCOL_VERSION,
        })
        .await?;
    assert_eq!(
        transport.recv().await?,
        Message::HandshakeAck {
            version: PROTOCOL_VERSION
        }
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_idle_session_times_out_with_error() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        let transport = TcpTransport::with_timeout(socket, Duration::from_millis(100));
        let mut skeleton = Skeleton::new(service(), transport);
        skeleton.run().await
    });

    let mut client = TcpTransport::connect(addr).await?;
    handshake(&mut client).await?;

    let err = server.await?.unwrap_err();
    assert!(err.to_string().contains("Receive timeout"));
    assert!(!is_disconnect(&err));
    drop(client);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_client_close_ends_session_cleanly() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        let mut skeleton = Skeleton::new(service(), TcpTransport::new(socket));
        skeleton.run().await
    });

    let mut client = TcpTransport::connect(addr).await?;
    handshake(&mut client).await?;
    drop(client);

    assert!(server.await?.is_ok());
    Ok(())
}
