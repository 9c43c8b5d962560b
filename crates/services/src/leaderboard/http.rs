use std::env;

use async_trait::async_trait;
use quiz_core::model::LeaderboardEntry;
use reqwest::Client;

use super::LeaderboardClient;
use crate::error::LeaderboardError;

/// Hosted leaderboard used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://quiz-backend-eta-seven.vercel.app/api";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardConfig {
    pub base_url: String,
}

impl LeaderboardConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reads `QUIZ_API_URL`, falling back to [`DEFAULT_API_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("QUIZ_API_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.into());
        Self { base_url }
    }

    #[must_use]
    pub fn leaderboard_url(&self) -> String {
        format!("{}/leaderboard", self.base_url.trim_end_matches('/'))
    }
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// `reqwest` client for the `{base}/leaderboard` endpoints.
#[derive(Clone)]
pub struct HttpLeaderboard {
    client: Client,
    config: LeaderboardConfig,
}

impl HttpLeaderboard {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(LeaderboardConfig::from_env())
    }

    #[must_use]
    pub fn new(config: LeaderboardConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &LeaderboardConfig {
        &self.config
    }

    async fn read_entries(
        response: reqwest::Response,
    ) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        if !response.status().is_success() {
            return Err(LeaderboardError::HttpStatus(response.status()));
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl LeaderboardClient for HttpLeaderboard {
    async fn fetch_top(&self) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        let response = self
            .client
            .get(self.config.leaderboard_url())
            .send()
            .await?;
        Self::read_entries(response).await
    }

    async fn submit(
        &self,
        entry: &LeaderboardEntry,
    ) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        let response = self
            .client
            .post(self.config.leaderboard_url())
            .json(entry)
            .send()
            .await?;
        Self::read_entries(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaderboard_url_tolerates_trailing_slash() {
        let config = LeaderboardConfig::new("http://localhost:3000/api/");
        assert_eq!(config.leaderboard_url(), "http://localhost:3000/api/leaderboard");
        let config = LeaderboardConfig::new("http://localhost:3000/api");
        assert_eq!(config.leaderboard_url(), "http://localhost:3000/api/leaderboard");
    }

    #[test]
    fn default_config_points_at_hosted_service() {
        assert_eq!(LeaderboardConfig::default().base_url, DEFAULT_API_URL);
    }
}
