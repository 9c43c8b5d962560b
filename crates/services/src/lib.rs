#![forbid(unsafe_code)]

pub mod error;
pub mod leaderboard;
pub mod quiz;

pub use error::{LeaderboardError, QuizError};
pub use leaderboard::{HttpLeaderboard, LeaderboardClient, LeaderboardConfig, LocalLeaderboard};
pub use quiz::{Advance, ErrorKind, LastError, QuizController, QuizSnapshot};
