use std::sync::Arc;

use battleship_server::config::{DEFAULT_BIND, DEFAULT_CONNECT};
use battleship_server::play::play_game;
use battleship_server::{
    init_logging, GameService, GameStateStore, LogSink, Skeleton, Stub, TcpTransport,
    DEFAULT_BOARD_SIZE, STANDARD_FLEET,
};
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the game over TCP; every connection shares one board store.
    Serve {
        #[arg(long, default_value = DEFAULT_BIND)]
        bind: String,
    },
    /// Connect to a server and play a scripted game against it.
    Play {
        #[arg(long, default_value = DEFAULT_CONNECT)]
        connect: String,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: i32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind } => {
            let service = Arc::new(GameService::new(
                Arc::new(GameStateStore::new()),
                LogSink::shared(),
            ));
            let listener = TcpListener::bind(&bind).await?;
            log::info!("Listening on {}", listener.local_addr()?);

            loop {
                let (stream, addr) = listener.accept().await?;
                log::info!("Client connected from {}", addr);
                let service = Arc::clone(&service);
                tokio::spawn(async move {
                    let mut skeleton = Skeleton::new(service, TcpTransport::new(stream));
                    match skeleton.run().await {
                        Ok(()) => log::info!("Client {} disconnected", addr),
                        Err(e) => log::warn!("Session with {} ended with an error: {}", addr, e),
                    }
                });
            }
        }
        Commands::Play {
            connect,
            seed,
            size,
        } => {
            let mut rng = match seed {
                Some(s) => SmallRng::seed_from_u64(s),
                None => {
                    let mut seed_rng = rand::rng();
                    SmallRng::from_rng(&mut seed_rng)
                }
            };
            let stub = Stub::new(TcpTransport::connect(&connect).await?);
            let summary = play_game(&stub, &mut rng, size, &STANDARD_FLEET).await?;
            println!(
                "Board {}: sank {}/{} ships with {} shots ({} hits)",
                summary.board_id, summary.sunk, summary.ships, summary.shots, summary.hits
            );
        }
    }
    Ok(())
}
