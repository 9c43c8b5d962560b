use dioxus::prelude::*;
use quiz_core::model::{LeaderboardEntry, Stage};
use services::QuizSnapshot;

use super::panels::{QuestionPanel, ResultsPanel};
use super::test_harness::{OfflineLeaderboard, local_leaderboard, setup_quiz_harness, small_bank};
use crate::vm::{
    EMPTY_LEADERBOARD, QuestionVm, QuizDisplay, REGISTRATION_TITLE, ResultsVm, screen_model,
};

#[component]
fn QuestionFixture(vm: QuestionVm) -> Element {
    rsx! {
        QuestionPanel { vm, on_select: |_: String| {}, on_advance: |()| {} }
    }
}

#[component]
fn ResultsFixture(vm: ResultsVm) -> Element {
    rsx! {
        ResultsPanel { vm, on_restart: |()| {} }
    }
}

fn snapshot(stage: Stage) -> QuizSnapshot {
    let bank = small_bank();
    QuizSnapshot {
        stage,
        player_name: "ana".into(),
        current_question: bank.questions().last().cloned(),
        question_number: 2,
        total_questions: bank.len(),
        is_last_question: true,
        selected_answer: None,
        answer_revealed: false,
        score: 1,
        leaderboard: Vec::new(),
        busy: false,
        submitting: false,
        last_error: None,
    }
}

fn render_question(snap: &QuizSnapshot) -> String {
    let QuizDisplay::Question(vm) = screen_model(snap).body else {
        panic!("expected question display");
    };
    let mut dom = VirtualDom::new_with_props(QuestionFixture, QuestionFixtureProps { vm });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn render_results(snap: &QuizSnapshot) -> String {
    let QuizDisplay::Results(vm) = screen_model(snap).body else {
        panic!("expected results display");
    };
    let mut dom = VirtualDom::new_with_props(ResultsFixture, ResultsFixtureProps { vm });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_registration() {
    let mut harness = setup_quiz_harness(local_leaderboard());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains(REGISTRATION_TITLE), "missing title in {html}");
    assert!(html.contains("Enter your name"), "missing input in {html}");
    assert!(html.contains("Start Quiz"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_quiz_harness(local_leaderboard());
    harness.quiz.set_player_name("ana").unwrap();
    harness.quiz.start_quiz().unwrap();

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 1 of 2"), "missing heading in {html}");
    assert!(html.contains("Check Answer"), "missing action in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_fetch_error() {
    let mut harness = setup_quiz_harness(std::sync::Arc::new(OfflineLeaderboard));
    harness.quiz.initialize().await;

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Failed to fetch leaderboard. Please try again."),
        "missing error in {html}"
    );
}

#[test]
fn question_panel_smoke_marks_revealed_options() {
    let mut snap = snapshot(Stage::InProgress);
    snap.selected_answer = Some("Venus".into());
    snap.answer_revealed = true;

    let html = render_question(&snap);
    assert!(html.contains("Question 2 of 2"), "missing heading in {html}");
    assert!(html.contains("quiz-option--correct"), "missing correct mark in {html}");
    assert!(html.contains("quiz-option--incorrect"), "missing wrong mark in {html}");
    assert!(html.contains("Finish Quiz"), "missing finish label in {html}");
}

#[test]
fn results_panel_smoke_renders_ranked_rows() {
    let mut snap = snapshot(Stage::Finished);
    snap.leaderboard = vec![LeaderboardEntry::new("bo", 2), LeaderboardEntry::new("ana", 1)];

    let html = render_results(&snap);
    assert!(html.contains("Your score: 1 out of 2"), "missing score in {html}");
    assert!(html.contains("bo: 2"), "missing first row in {html}");
    assert!(html.contains("ana: 1"), "missing second row in {html}");
    assert!(html.contains("Play Again"), "missing restart in {html}");
}

#[test]
fn results_panel_smoke_renders_empty_and_loading() {
    let mut snap = snapshot(Stage::Finished);
    let html = render_results(&snap);
    assert!(html.contains(EMPTY_LEADERBOARD), "missing empty text in {html}");

    snap.busy = true;
    let html = render_results(&snap);
    assert!(html.contains("Loading leaderboard..."), "missing loading text in {html}");
}
