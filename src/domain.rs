//! Outcome values returned across the service boundary.

use serde::{Deserialize, Serialize};

use crate::core::BoardId;

pub const BOARD_CREATED: &str = "Board created successfully.";
pub const INVALID_BOARD_SIZE: &str = "Board size must be greater than zero.";
pub const SHIP_ADDED: &str = "Ship added successfully.";
pub const SHIP_REJECTED: &str = "Failed to add ship (overlap or invalid position).";

/// Result of a board creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardCreation {
    pub success: bool,
    pub message: String,
    pub board_id: Option<BoardId>,
    pub size: Option<i32>,
}

impl BoardCreation {
    pub fn created(board_id: BoardId, size: i32) -> Self {
        Self {
            success: true,
            message: BOARD_CREATED.to_string(),
            board_id: Some(board_id),
            size: Some(size),
        }
    }

    pub fn invalid_size() -> Self {
        Self {
            success: false,
            message: INVALID_BOARD_SIZE.to_string(),
            board_id: None,
            size: None,
        }
    }
}

/// Result of a ship placement request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementOutcome {
    pub success: bool,
    pub message: String,
}

impl PlacementOutcome {
    pub fn added() -> Self {
        Self {
            success: true,
            message: SHIP_ADDED.to_string(),
        }
    }

    pub fn rejected() -> Self {
        Self::failed(SHIP_REJECTED)
    }

    /// The exact text callers match on for an unknown board.
    pub fn board_not_found(board_id: BoardId) -> Self {
        Self::failed(format!("AddShip failed: Board with ID {} not found", board_id))
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
