mod http;
mod local;

use async_trait::async_trait;
use quiz_core::model::LeaderboardEntry;

use crate::error::LeaderboardError;

pub use http::{DEFAULT_API_URL, HttpLeaderboard, LeaderboardConfig};
pub use local::LocalLeaderboard;

/// Remote boundary the quiz controller talks to.
///
/// Both calls return the service's ranked list, highest score first.
#[async_trait]
pub trait LeaderboardClient: Send + Sync {
    /// Fetch the current top scores.
    ///
    /// # Errors
    ///
    /// Returns `LeaderboardError` when the request fails or the response is
    /// not a leaderboard.
    async fn fetch_top(&self) -> Result<Vec<LeaderboardEntry>, LeaderboardError>;

    /// Submit a finished score and receive the leaderboard after insertion.
    ///
    /// # Errors
    ///
    /// Returns `LeaderboardError` when the request fails or the response is
    /// not a leaderboard.
    async fn submit(
        &self,
        entry: &LeaderboardEntry,
    ) -> Result<Vec<LeaderboardEntry>, LeaderboardError>;
}
