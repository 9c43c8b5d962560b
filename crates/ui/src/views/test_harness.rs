use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::{LeaderboardEntry, Question, QuestionBank, QuestionId};
use services::{LeaderboardClient, LeaderboardError, LocalLeaderboard, QuizController};
use storage::repository::{InMemoryRepository, StorageError};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;

#[derive(Clone)]
struct TestApp {
    quiz: Arc<QuizController>,
}

impl UiApp for TestApp {
    fn quiz(&self) -> Arc<QuizController> {
        Arc::clone(&self.quiz)
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for QuizHarnessProps {}

#[component]
fn QuizHarness(props: QuizHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { QuizView {} }
}

/// Leaderboard that is always unreachable.
pub struct OfflineLeaderboard;

#[async_trait]
impl LeaderboardClient for OfflineLeaderboard {
    async fn fetch_top(&self) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        Err(StorageError::Connection("offline".into()).into())
    }

    async fn submit(
        &self,
        _entry: &LeaderboardEntry,
    ) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        Err(StorageError::Connection("offline".into()).into())
    }
}

pub fn local_leaderboard() -> Arc<dyn LeaderboardClient> {
    Arc::new(LocalLeaderboard::new(Arc::new(InMemoryRepository::new())))
}

pub fn small_bank() -> QuestionBank {
    QuestionBank::new(vec![
        Question::new(
            QuestionId::new(1),
            "What is the capital of France?",
            ["London", "Berlin", "Paris", "Madrid"],
            "Paris",
        )
        .expect("valid question"),
        Question::new(
            QuestionId::new(2),
            "Which planet is known as the Red Planet?",
            ["Venus", "Mars", "Jupiter", "Saturn"],
            "Mars",
        )
        .expect("valid question"),
    ])
    .expect("valid bank")
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub quiz: Arc<QuizController>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_quiz_harness(client: Arc<dyn LeaderboardClient>) -> ViewHarness {
    let quiz = Arc::new(QuizController::new(small_bank(), client).with_seed(7));
    let app = Arc::new(TestApp {
        quiz: Arc::clone(&quiz),
    });
    let dom = VirtualDom::new_with_props(QuizHarness, QuizHarnessProps { app });
    ViewHarness { dom, quiz }
}
