mod bank;
mod ids;
mod leaderboard;
mod question;
mod stage;

pub use bank::{BankError, QuestionBank};
pub use ids::QuestionId;
pub use leaderboard::{DEFAULT_LEADERBOARD_CAP, LeaderboardEntry, rank_entries};
pub use question::{OPTION_COUNT, Question, QuestionDraft, QuestionError};
pub use stage::Stage;
