use async_trait::async_trait;
use chrono::Utc;
use quiz_core::model::LeaderboardEntry;
use sqlx::Row;

use crate::repository::{LeaderboardRepository, StorageError};

use super::SqliteRepository;

/// Fixed key the leaderboard JSON array is stored under.
pub const LEADERBOARD_KEY: &str = "leaderboard";

#[async_trait]
impl LeaderboardRepository for SqliteRepository {
    async fn load_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, StorageError> {
        let row = sqlx::query("SELECT value FROM local_store WHERE key = ?1")
            .bind(LEADERBOARD_KEY)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(Vec::new());
        };

        let raw: String = row
            .try_get("value")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        serde_json::from_str(&raw).map_err(|err| StorageError::Serialization(err.to_string()))
    }

    async fn save_leaderboard(&self, entries: &[LeaderboardEntry]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(entries)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        sqlx::query(
            r"
            INSERT INTO local_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            ",
        )
        .bind(LEADERBOARD_KEY)
        .bind(raw)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
