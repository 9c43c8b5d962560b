use quiz_core::model::{Question, Stage};

use crate::error::QuizError;

/// Category of the most recent user-visible failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    RemoteFetch,
    RemoteSubmit,
}

/// The message shown until the next successful action replaces or clears it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LastError {
    pub kind: ErrorKind,
    pub message: String,
}

impl LastError {
    pub(crate) fn name_required() -> Self {
        Self {
            kind: ErrorKind::Validation,
            message: "Please enter your name to start the quiz.".into(),
        }
    }

    pub(crate) fn fetch_failed() -> Self {
        Self {
            kind: ErrorKind::RemoteFetch,
            message: "Failed to fetch leaderboard. Please try again.".into(),
        }
    }

    pub(crate) fn submit_failed(final_score: u32) -> Self {
        Self {
            kind: ErrorKind::RemoteSubmit,
            message: format!("Failed to update leaderboard. Your score: {final_score}"),
        }
    }
}

/// What `Session::advance` asks the controller to do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Revealed { correct: bool },
    Moved { number: usize },
    Complete { final_score: u32 },
}

/// State of one quiz attempt. Pure and synchronous; remote calls live in the
/// controller.
#[derive(Debug, Clone)]
pub(crate) struct Session {
    stage: Stage,
    player_name: String,
    order: Vec<Question>,
    current: usize,
    selected: Option<String>,
    revealed: bool,
    score: u32,
    last_error: Option<LastError>,
    submitting: bool,
}

impl Session {
    pub(crate) fn new(order: Vec<Question>) -> Self {
        Self {
            stage: Stage::Registration,
            player_name: String::new(),
            order,
            current: 0,
            selected: None,
            revealed: false,
            score: 0,
            last_error: None,
            submitting: false,
        }
    }

    pub(crate) fn reset(&mut self, order: Vec<Question>) {
        *self = Self::new(order);
    }

    pub(crate) fn stage(&self) -> Stage {
        self.stage
    }

    pub(crate) fn player_name(&self) -> &str {
        &self.player_name
    }

    pub(crate) fn order(&self) -> &[Question] {
        &self.order
    }

    pub(crate) fn current_index(&self) -> usize {
        self.current
    }

    pub(crate) fn current_question(&self) -> Option<&Question> {
        self.order.get(self.current)
    }

    pub(crate) fn is_last_question(&self) -> bool {
        self.current + 1 >= self.order.len()
    }

    pub(crate) fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub(crate) fn revealed(&self) -> bool {
        self.revealed
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn last_error(&self) -> Option<&LastError> {
        self.last_error.as_ref()
    }

    pub(crate) fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub(crate) fn require(&self, stage: Stage) -> Result<(), QuizError> {
        if self.stage == stage {
            Ok(())
        } else {
            Err(QuizError::InvalidState { stage: self.stage })
        }
    }

    pub(crate) fn set_last_error(&mut self, error: LastError) {
        self.last_error = Some(error);
    }

    /// Clear the last error only if it is of the given kind.
    pub(crate) fn clear_error(&mut self, kind: ErrorKind) {
        if self.last_error.as_ref().is_some_and(|err| err.kind == kind) {
            self.last_error = None;
        }
    }

    pub(crate) fn set_player_name(&mut self, name: String) -> Result<(), QuizError> {
        self.require(Stage::Registration)?;
        self.player_name = name;
        Ok(())
    }

    pub(crate) fn start(&mut self) -> Result<(), QuizError> {
        self.require(Stage::Registration)?;
        if self.player_name.trim().is_empty() {
            self.last_error = Some(LastError::name_required());
            return Err(QuizError::NameRequired);
        }
        self.stage = Stage::InProgress;
        self.last_error = None;
        Ok(())
    }

    pub(crate) fn select_answer(&mut self, option: &str) -> Result<(), QuizError> {
        self.require(Stage::InProgress)?;
        if self.submitting {
            return Err(QuizError::Busy);
        }
        if self.revealed {
            return Err(QuizError::AnswerLocked);
        }
        let known = self
            .current_question()
            .is_some_and(|question| question.has_option(option));
        if !known {
            return Err(QuizError::UnknownOption(option.to_owned()));
        }
        self.selected = Some(option.to_owned());
        Ok(())
    }

    /// Two-step advance: the first call reveals and scores, the second moves on
    /// or, on the last question, hands the final score to the controller.
    pub(crate) fn advance(&mut self) -> Result<Step, QuizError> {
        self.require(Stage::InProgress)?;
        if self.submitting {
            return Err(QuizError::Busy);
        }

        if !self.revealed {
            let correct = self.score_current();
            return Ok(Step::Revealed { correct });
        }

        // No-op after a reveal; keeps the exactly-once rule local to one place.
        self.score_current();

        if self.is_last_question() {
            self.submitting = true;
            return Ok(Step::Complete {
                final_score: self.score,
            });
        }

        self.current += 1;
        self.selected = None;
        self.revealed = false;
        Ok(Step::Moved {
            number: self.current + 1,
        })
    }

    /// Score the current question unless it has been scored already.
    /// Returns whether the selected answer is correct.
    fn score_current(&mut self) -> bool {
        let correct = match (self.current_question(), self.selected.as_deref()) {
            (Some(question), Some(answer)) => question.is_correct(answer),
            _ => false,
        };
        if !self.revealed {
            self.revealed = true;
            if correct {
                self.score += 1;
            }
        }
        correct
    }

    /// Close the session after the submission attempt, successful or not.
    pub(crate) fn complete(&mut self, error: Option<LastError>) {
        self.submitting = false;
        self.stage = Stage::Finished;
        self.last_error = error;
    }
}
