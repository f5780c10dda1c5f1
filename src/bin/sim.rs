use std::sync::Arc;

use battleship_server::play::play_game;
use battleship_server::{GameService, GameStateStore, NullSink, STANDARD_FLEET};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [size]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let size: i32 = match args.get(2) {
        Some(s) => s.parse()?,
        None => battleship_server::DEFAULT_BOARD_SIZE,
    };

    let service = GameService::new(Arc::new(GameStateStore::new()), NullSink::shared());
    let mut rng = SmallRng::seed_from_u64(seed);
    let summary = play_game(&service, &mut rng, size, &STANDARD_FLEET).await?;

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
