//! Persistence boundary.
//!
//! The host keeps session state in a flat string key-value store (a browser's
//! local storage, a file, a test map). Values are JSON documents. Loading is
//! tolerant: anything unreadable falls back to its default.

mod codec;
mod in_memory;

use std::fmt;

pub use codec::{load_state, save_state};
pub use in_memory::InMemoryKeyValueStore;

/// Storage keys, one per persisted value.
pub mod keys {
    pub const GAME_NAME: &str = "gameName";
    pub const OUR_SCORE: &str = "ourScore";
    pub const ENEMY_SCORE: &str = "enemyScore";
    pub const OUR_RESULT: &str = "ourResult";
    pub const ENEMY_RESULT: &str = "enemyResult";
    pub const CURRENT_ROUND: &str = "currentRound";
    pub const ROUNDS_DATA: &str = "roundsData";
    pub const SHOW_STATISTICS: &str = "showStatistics";
    pub const CURRENT_TEAM: &str = "currentTeam";
    pub const CURRENT_PAGE: &str = "currentPage";

    pub const ALL: [&str; 10] = [
        GAME_NAME,
        OUR_SCORE,
        ENEMY_SCORE,
        OUR_RESULT,
        ENEMY_RESULT,
        CURRENT_ROUND,
        ROUNDS_DATA,
        SHOW_STATISTICS,
        CURRENT_TEAM,
        CURRENT_PAGE,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    LockPoisoned(&'static str),
    Serde(String),
    Backend(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::LockPoisoned(operation) => {
                write!(f, "storage lock poisoned during {}", operation)
            }
            StorageError::Serde(message) => write!(f, "storage serialization error: {}", message),
            StorageError::Backend(message) => write!(f, "storage backend error: {}", message),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serde(err.to_string())
    }
}

/// Flat string key-value storage.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`. Returns None if not set.
    fn get_value(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write (or overwrite) the raw value under `key`.
    fn set_value(&self, key: &str, value: String) -> Result<(), StorageError>;

    /// Remove every key.
    fn clear(&self) -> Result<(), StorageError>;
}
