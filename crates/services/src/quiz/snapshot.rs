use quiz_core::model::{LeaderboardEntry, Question, Stage};

use super::session::{LastError, Session};

/// Read-only copy of everything the display layer needs.
///
/// Carries no formatting; the UI decides how to present it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSnapshot {
    pub stage: Stage,
    pub player_name: String,
    pub current_question: Option<Question>,
    /// 1-based position of `current_question`.
    pub question_number: usize,
    pub total_questions: usize,
    pub is_last_question: bool,
    pub selected_answer: Option<String>,
    pub answer_revealed: bool,
    pub score: u32,
    pub leaderboard: Vec<LeaderboardEntry>,
    /// A remote call is in flight (leaderboard fetch or score submission).
    pub busy: bool,
    /// The final score is being submitted; answering is locked.
    pub submitting: bool,
    pub last_error: Option<LastError>,
}

impl QuizSnapshot {
    pub(crate) fn capture(session: &Session, leaderboard: &[LeaderboardEntry], busy: bool) -> Self {
        Self {
            stage: session.stage(),
            player_name: session.player_name().to_owned(),
            current_question: session.current_question().cloned(),
            question_number: session.current_index() + 1,
            total_questions: session.order().len(),
            is_last_question: session.is_last_question(),
            selected_answer: session.selected().map(str::to_owned),
            answer_revealed: session.revealed(),
            score: session.score(),
            leaderboard: leaderboard.to_vec(),
            busy,
            submitting: session.is_submitting(),
            last_error: session.last_error().cloned(),
        }
    }

    /// The message to show, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.last_error.as_ref().map(|err| err.message.as_str())
    }
}
