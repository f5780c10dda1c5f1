//! Process-wide collection of live boards.

use std::sync::{Arc, Mutex, PoisonError};

use dashmap::DashMap;

use crate::core::{Board, BoardId};

/// A board behind its own lock; mutations on one board are serialized.
pub type SharedBoard = Arc<Mutex<Board>>;

/// Concurrent map from board identifier to board.
///
/// The map itself is sharded; each board carries its own mutex, so
/// requests against different boards never contend.
#[derive(Debug, Default)]
pub struct GameStateStore {
    boards: DashMap<BoardId, SharedBoard>,
}

impl GameStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `board` under its own identifier, returning any board it
    /// replaced.
    pub fn insert(&self, board: Board) -> Option<SharedBoard> {
        self.boards
            .insert(board.id(), Arc::new(Mutex::new(board)))
    }

    pub fn get(&self, id: BoardId) -> Option<SharedBoard> {
        self.boards.get(&id).map(|entry| Arc::clone(entry.value()))
    }

    pub fn remove(&self, id: BoardId) -> Option<SharedBoard> {
        self.boards.remove(&id).map(|(_, board)| board)
    }

    pub fn contains(&self, id: BoardId) -> bool {
        self.boards.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn ids(&self) -> Vec<BoardId> {
        self.boards.iter().map(|entry| *entry.key()).collect()
    }

    /// Run `f` with exclusive access to board `id`.
    ///
    /// The map shard is released before the board lock is taken.
    pub fn with_board<R>(&self, id: BoardId, f: impl FnOnce(&mut Board) -> R) -> Option<R> {
        let board = self.get(id)?;
        let mut guard = board.lock().unwrap_or_else(PoisonError::into_inner);
        Some(f(&mut guard))
    }
}
