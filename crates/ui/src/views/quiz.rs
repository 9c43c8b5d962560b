use dioxus::prelude::*;
use services::{Advance, QuizError};
use tracing::debug;

use super::panels::{QuestionPanel, RegistrationPanel, ResultsPanel};
use crate::context::AppContext;
use crate::vm::{QuizDisplay, ScreenVm, screen_model};

#[derive(Clone, Debug, PartialEq, Eq)]
enum QuizAction {
    Initialize,
    SetName(String),
    Start,
    Select(String),
    Advance,
    Restart,
}

fn report(action: &str, result: Result<(), QuizError>) {
    // Rejections surface through the snapshot's last error or disabled controls.
    if let Err(err) = result {
        debug!(action, error = %err, "quiz action rejected");
    }
}

/// The single quiz screen. Reads a snapshot after every action and renders
/// the panel for the current stage.
#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = ctx.quiz();

    let snapshot = use_signal({
        let quiz = quiz.clone();
        move || quiz.snapshot()
    });
    // Remote calls still running; the snapshot only refreshes after each one.
    let in_flight = use_signal(|| 0_usize);

    let dispatch = use_callback(move |action: QuizAction| {
        let quiz = quiz.clone();
        let mut snapshot = snapshot;
        let mut in_flight = in_flight;

        let remote = match action {
            QuizAction::SetName(name) => {
                report("set_name", quiz.set_player_name(name));
                snapshot.set(quiz.snapshot());
                return;
            }
            QuizAction::Start => {
                report("start", quiz.start_quiz());
                snapshot.set(quiz.snapshot());
                return;
            }
            QuizAction::Select(option) => {
                report("select", quiz.select_answer(&option));
                snapshot.set(quiz.snapshot());
                return;
            }
            remote => remote,
        };

        *in_flight.write() += 1;
        spawn(async move {
            match remote {
                QuizAction::Initialize => quiz.initialize().await,
                QuizAction::Restart => report("restart", quiz.restart().await),
                _ => match quiz.advance().await {
                    Ok(Advance::Superseded) => debug!("advance superseded by a new session"),
                    Ok(outcome) => debug!(?outcome, "advanced"),
                    Err(err) => report("advance", Err(err)),
                },
            }
            snapshot.set(quiz.snapshot());
            *in_flight.write() -= 1;
        });
    });

    use_effect(move || dispatch.call(QuizAction::Initialize));

    let mut current = snapshot();
    current.busy |= in_flight() > 0;
    let ScreenVm { body, error, .. } = screen_model(&current);

    rsx! {
        div { class: "page quiz-page",
            match body {
                QuizDisplay::Registration(registration) => rsx! {
                    RegistrationPanel {
                        vm: registration,
                        on_name: move |name| dispatch.call(QuizAction::SetName(name)),
                        on_start: move |()| dispatch.call(QuizAction::Start),
                    }
                },
                QuizDisplay::Question(question) => rsx! {
                    QuestionPanel {
                        vm: question,
                        on_select: move |option| dispatch.call(QuizAction::Select(option)),
                        on_advance: move |()| dispatch.call(QuizAction::Advance),
                    }
                },
                QuizDisplay::Results(results) => rsx! {
                    ResultsPanel {
                        vm: results,
                        on_restart: move |()| dispatch.call(QuizAction::Restart),
                    }
                },
            }
            if let Some(message) = error {
                p { class: "quiz-error", "{message}" }
            }
        }
    }
}
