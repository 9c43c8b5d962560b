use quiz_core::model::{LeaderboardEntry, Question, Stage};
use services::QuizSnapshot;

pub const REGISTRATION_TITLE: &str = "The Quiz Battle: Are You Ready?";
pub const RESULTS_TITLE: &str = "Quiz Results";
pub const EMPTY_LEADERBOARD: &str = "No leaderboard data available.";

/// Everything one frame of the quiz screen shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenVm {
    pub body: QuizDisplay,
    pub error: Option<String>,
    pub busy: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizDisplay {
    Registration(RegistrationVm),
    Question(QuestionVm),
    Results(ResultsVm),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationVm {
    pub title: &'static str,
    pub player_name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Neutral,
    Correct,
    Incorrect,
}

impl OptionState {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Neutral => "quiz-option",
            Self::Correct => "quiz-option quiz-option--correct",
            Self::Incorrect => "quiz-option quiz-option--incorrect",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub label: String,
    pub selected: bool,
    pub state: OptionState,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub heading: String,
    /// Radio group name; unique per question.
    pub group: String,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub action_label: &'static str,
    pub action_enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardRowVm {
    pub rank: usize,
    pub name: String,
    pub score: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LeaderboardVm {
    Loading,
    Empty,
    Rows(Vec<LeaderboardRowVm>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub title: &'static str,
    pub score_label: String,
    pub leaderboard: LeaderboardVm,
    pub restart_enabled: bool,
}

/// Map a controller snapshot to what the screen shows.
#[must_use]
pub fn screen_model(snapshot: &QuizSnapshot) -> ScreenVm {
    let body = match snapshot.stage {
        Stage::Registration => QuizDisplay::Registration(RegistrationVm {
            title: REGISTRATION_TITLE,
            player_name: snapshot.player_name.clone(),
        }),
        Stage::InProgress => match snapshot.current_question.as_ref() {
            Some(question) => QuizDisplay::Question(question_vm(snapshot, question)),
            None => results(snapshot),
        },
        Stage::Finished => results(snapshot),
    };

    ScreenVm {
        body,
        error: snapshot.error_message().map(str::to_owned),
        busy: snapshot.busy,
    }
}

fn question_vm(snapshot: &QuizSnapshot, question: &Question) -> QuestionVm {
    let revealed = snapshot.answer_revealed;
    let selected = snapshot.selected_answer.as_deref();

    let options = question
        .options()
        .iter()
        .map(|option| {
            let is_selected = selected == Some(option.as_str());
            let state = if !revealed {
                OptionState::Neutral
            } else if question.is_correct(option) {
                OptionState::Correct
            } else if is_selected {
                OptionState::Incorrect
            } else {
                OptionState::Neutral
            };
            OptionVm {
                label: option.clone(),
                selected: is_selected,
                state,
                disabled: revealed || snapshot.submitting,
            }
        })
        .collect();

    let action_label = match (revealed, snapshot.is_last_question) {
        (false, _) => "Check Answer",
        (true, false) => "Next Question",
        (true, true) => "Finish Quiz",
    };

    QuestionVm {
        heading: format!(
            "Question {} of {}",
            snapshot.question_number, snapshot.total_questions
        ),
        group: format!("question-{}", question.id()),
        prompt: question.prompt().to_owned(),
        options,
        action_label,
        action_enabled: (selected.is_some() || revealed) && !snapshot.submitting,
    }
}

fn results(snapshot: &QuizSnapshot) -> QuizDisplay {
    QuizDisplay::Results(ResultsVm {
        title: RESULTS_TITLE,
        score_label: format!(
            "Your score: {} out of {}",
            snapshot.score, snapshot.total_questions
        ),
        leaderboard: leaderboard_vm(&snapshot.leaderboard, snapshot.busy),
        restart_enabled: !snapshot.busy,
    })
}

fn leaderboard_vm(entries: &[LeaderboardEntry], busy: bool) -> LeaderboardVm {
    if busy {
        return LeaderboardVm::Loading;
    }
    if entries.is_empty() {
        return LeaderboardVm::Empty;
    }
    LeaderboardVm::Rows(
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| LeaderboardRowVm {
                rank: index + 1,
                name: entry.name.clone(),
                score: entry.score,
            })
            .collect(),
    )
}
