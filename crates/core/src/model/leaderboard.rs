use serde::{Deserialize, Serialize};

/// Number of entries the leaderboard service keeps.
pub const DEFAULT_LEADERBOARD_CAP: usize = 10;

/// One ranked row of the leaderboard, also the shape of a score submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
}

impl LeaderboardEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Sort entries by score, highest first, and keep at most `cap` of them.
///
/// The sort is stable: among equal scores the earlier entry ranks higher.
pub fn rank_entries(entries: &mut Vec<LeaderboardEntry>, cap: usize) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(cap);
}
