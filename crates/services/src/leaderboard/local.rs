use std::sync::Arc;

use async_trait::async_trait;
use quiz_core::model::{DEFAULT_LEADERBOARD_CAP, LeaderboardEntry, rank_entries};
use storage::repository::LeaderboardRepository;

use super::LeaderboardClient;
use crate::error::LeaderboardError;

/// Leaderboard kept in local storage instead of a remote service.
///
/// Plays the service's role itself: ranks by score and keeps the top `cap`.
#[derive(Clone)]
pub struct LocalLeaderboard {
    repo: Arc<dyn LeaderboardRepository>,
    cap: usize,
}

impl LocalLeaderboard {
    #[must_use]
    pub fn new(repo: Arc<dyn LeaderboardRepository>) -> Self {
        Self {
            repo,
            cap: DEFAULT_LEADERBOARD_CAP,
        }
    }

    #[must_use]
    pub fn with_cap(mut self, cap: usize) -> Self {
        self.cap = cap;
        self
    }
}

#[async_trait]
impl LeaderboardClient for LocalLeaderboard {
    async fn fetch_top(&self) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        let mut entries = self.repo.load_leaderboard().await?;
        rank_entries(&mut entries, self.cap);
        Ok(entries)
    }

    async fn submit(
        &self,
        entry: &LeaderboardEntry,
    ) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        let mut entries = self.repo.load_leaderboard().await?;
        entries.push(entry.clone());
        rank_entries(&mut entries, self.cap);
        self.repo.save_leaderboard(&entries).await?;
        Ok(entries)
    }
}
