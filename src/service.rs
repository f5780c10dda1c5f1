//! Entry point for callers: board lifecycle, placement and attacks.

use std::sync::Arc;

use crate::core::{AttackOutcome, Board, BoardId, BoardSnapshot, Position, Ship, DEFAULT_BOARD_SIZE};
use crate::domain::{BoardCreation, PlacementOutcome};
use crate::events::Events;
use crate::store::GameStateStore;

const COMPONENT: &str = "battleship::service";

/// Orchestrates the store and the boards in it.
///
/// Every operation reports through an outcome value; unknown boards and
/// rule violations never surface as errors.
pub struct GameService {
    store: Arc<GameStateStore>,
    events: Events,
}

impl GameService {
    pub fn new(store: Arc<GameStateStore>, events: Events) -> Self {
        Self { store, events }
    }

    pub fn store(&self) -> &Arc<GameStateStore> {
        &self.store
    }

    /// Create a board of `size`×`size` and register it.
    pub fn create_board(&self, size: i32) -> BoardCreation {
        let board = match Board::new(size, Arc::clone(&self.events)) {
            Ok(board) => board,
            Err(e) => {
                self.events
                    .warn(COMPONENT, &format!("CreateBoard failed: {}", e));
                return BoardCreation::invalid_size();
            }
        };
        let id = board.id();
        self.store.insert(board);
        self.events.info(
            COMPONENT,
            &format!("Created new board with ID {} and size {}", id, size),
        );
        BoardCreation::created(id, size)
    }

    pub fn create_default_board(&self) -> BoardCreation {
        self.create_board(DEFAULT_BOARD_SIZE)
    }

    /// Place `ship` on board `board_id`.
    pub fn add_ship(&self, board_id: BoardId, ship: Ship) -> PlacementOutcome {
        match self.store.with_board(board_id, |board| board.place_ship(ship)) {
            None => self.board_not_found(board_id),
            Some(result) => {
                self.events.info(
                    COMPONENT,
                    &format!(
                        "AddShip on board {} was {}",
                        board_id,
                        if result.is_ok() { "successful" } else { "unsuccessful" }
                    ),
                );
                match result {
                    Ok(()) => PlacementOutcome::added(),
                    Err(_) => PlacementOutcome::rejected(),
                }
            }
        }
    }

    /// Attack `position` on board `board_id`; `None` if the board is unknown.
    pub fn attack(&self, board_id: BoardId, position: Position) -> Option<AttackOutcome> {
        let outcome = self
            .store
            .with_board(board_id, |board| board.apply_attack(position));
        match outcome {
            None => self.events.warn(
                COMPONENT,
                &format!("Attack failed: Board with ID {} not found", board_id),
            ),
            Some(result) => self.events.info(
                COMPONENT,
                &format!(
                    "Attack on board {} at position {} resulted in Hit={}, Sunk={}",
                    board_id, position, result.hit, result.sunk
                ),
            ),
        }
        outcome
    }

    pub fn board_snapshot(&self, board_id: BoardId) -> Option<BoardSnapshot> {
        self.store.with_board(board_id, |board| board.snapshot())
    }

    fn board_not_found(&self, board_id: BoardId) -> PlacementOutcome {
        let outcome = PlacementOutcome::board_not_found(board_id);
        self.events.warn(COMPONENT, &outcome.message);
        outcome
    }

    /// Drop board `board_id`. Returns `false` if it did not exist.
    pub fn remove_board(&self, board_id: BoardId) -> bool {
        let removed = self.store.remove(board_id).is_some();
        if removed {
            self.events
                .info(COMPONENT, &format!("Removed board with ID {}", board_id));
        } else {
            self.events.warn(
                COMPONENT,
                &format!("RemoveBoard failed: Board with ID {} not found", board_id),
            );
        }
        removed
    }
}

#[cfg(feature = "net")]
#[async_trait::async_trait]
impl crate::protocol::GameApi for GameService {
    async fn create_board(&self, size: Option<i32>) -> anyhow::Result<BoardCreation> {
        Ok(GameService::create_board(self, size.unwrap_or(DEFAULT_BOARD_SIZE)))
    }

    async fn add_ship(
        &self,
        board_id: BoardId,
        ship: Option<Vec<Position>>,
    ) -> anyhow::Result<PlacementOutcome> {
        // an unknown board wins over a malformed ship
        if !self.store.contains(board_id) {
            return Ok(self.board_not_found(board_id));
        }
        match Ship::from_footprint(ship) {
            Ok(ship) => Ok(GameService::add_ship(self, board_id, ship)),
            Err(e) => {
                self.events.warn(
                    COMPONENT,
                    &format!("AddShip failed on board {}: invalid ship: {}", board_id, e),
                );
                Ok(PlacementOutcome::failed(format!("Invalid ship: {}", e)))
            }
        }
    }

    async fn attack(
        &self,
        board_id: BoardId,
        position: Position,
    ) -> anyhow::Result<Option<AttackOutcome>> {
        Ok(GameService::attack(self, board_id, position))
    }

    async fn board_status(&self, board_id: BoardId) -> anyhow::Result<Option<BoardSnapshot>> {
        Ok(self.board_snapshot(board_id))
    }
}
