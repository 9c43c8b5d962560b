//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::Stage;
use storage::repository::StorageError;

/// Errors emitted by leaderboard clients.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LeaderboardError {
    #[error("leaderboard request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by the quiz session controller.
///
/// Remote failures are not listed here: the controller recovers from them and
/// reports them through the session's last error instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("name required")]
    NameRequired,
    #[error("operation not allowed while {stage}")]
    InvalidState { stage: Stage },
    #[error("answer already revealed for this question")]
    AnswerLocked,
    #[error("{0:?} is not an option of the current question")]
    UnknownOption(String),
    #[error("score submission already in flight")]
    Busy,
}
