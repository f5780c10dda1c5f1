#![cfg(feature = "net")]

//! Scripted game against any [`GameApi`]: create a board, lay out a
//! random fleet, then fire at every cell until the fleet is gone.

use anyhow::anyhow;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::core::{random_fleet, BoardId, Position};
use crate::protocol::GameApi;

/// What happened during a scripted game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub board_id: BoardId,
    pub size: i32,
    pub ships: usize,
    pub shots: usize,
    pub hits: usize,
    pub sunk: usize,
}

pub async fn play_game<A, R>(api: &A, rng: &mut R, size: i32, fleet: &[usize]) -> anyhow::Result<GameSummary>
where
    A: GameApi + ?Sized,
    R: Rng,
{
    let created = api.create_board(Some(size)).await?;
    let board_id = match (created.success, created.board_id) {
        (true, Some(id)) => id,
        _ => return Err(anyhow!("Board creation failed: {}", created.message)),
    };

    let ships = random_fleet(rng, size, fleet).map_err(|e| anyhow!(e))?;
    for ship in &ships {
        let placed = api.add_ship(board_id, Some(ship.footprint().to_vec())).await?;
        if !placed.success {
            return Err(anyhow!("Ship placement failed: {}", placed.message));
        }
    }

    let mut targets: Vec<Position> = (0..size)
        .flat_map(|x| (0..size).map(move |y| Position::new(x, y)))
        .collect();
    targets.shuffle(rng);

    let mut summary = GameSummary {
        board_id,
        size,
        ships: ships.len(),
        shots: 0,
        hits: 0,
        sunk: 0,
    };
    for target in targets {
        if summary.sunk == summary.ships {
            break;
        }
        let outcome = api
            .attack(board_id, target)
            .await?
            .ok_or_else(|| anyhow!("Board {} disappeared", board_id))?;
        summary.shots += 1;
        if outcome.hit {
            summary.hits += 1;
        }
        if outcome.sunk {
            summary.sunk += 1;
        }
    }
    Ok(summary)
}
