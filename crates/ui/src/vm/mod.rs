mod quiz_vm;

pub use quiz_vm::{
    EMPTY_LEADERBOARD, LeaderboardRowVm, LeaderboardVm, OptionState, OptionVm, QuestionVm,
    QuizDisplay, REGISTRATION_TITLE, RESULTS_TITLE, RegistrationVm, ResultsVm, ScreenVm,
    screen_model,
};
