use async_trait::async_trait;
use quiz_core::model::LeaderboardEntry;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for the locally kept leaderboard.
///
/// Adapters store the list as given; ranking is the caller's job.
#[async_trait]
pub trait LeaderboardRepository: Send + Sync {
    /// Load the stored leaderboard, or an empty list when nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read or the stored
    /// value cannot be decoded.
    async fn load_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, StorageError>;

    /// Replace the stored leaderboard.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the entries cannot be stored.
    async fn save_leaderboard(&self, entries: &[LeaderboardEntry]) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    leaderboard: Arc<Mutex<Vec<LeaderboardEntry>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            leaderboard: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl LeaderboardRepository for InMemoryRepository {
    async fn load_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, StorageError> {
        let guard = self
            .leaderboard
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save_leaderboard(&self, entries: &[LeaderboardEntry]) -> Result<(), StorageError> {
        let mut guard = self
            .leaderboard
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = entries.to_vec();
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub leaderboard: Arc<dyn LeaderboardRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let leaderboard: Arc<dyn LeaderboardRepository> = Arc::new(InMemoryRepository::new());
        Self { leaderboard }
    }
}
