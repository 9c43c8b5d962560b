#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use quiz_core::model::{
    DEFAULT_LEADERBOARD_CAP, LeaderboardEntry, Question, QuestionBank, QuestionId, rank_entries,
};
use services::{LeaderboardClient, LeaderboardError};
use tokio::sync::Notify;

/// In-process stand-in for the leaderboard service.
///
/// Can fail either endpoint on demand and can hold the first fetch or every
/// submission until the test releases it.
#[derive(Default)]
pub struct FakeLeaderboard {
    board: Mutex<Vec<LeaderboardEntry>>,
    submissions: Mutex<Vec<LeaderboardEntry>>,
    fail_fetch: AtomicBool,
    fail_submit: AtomicBool,
    fetch_calls: AtomicUsize,
    gate_first_fetch: bool,
    gate_submit: bool,
    pub started: Notify,
    pub release: Notify,
}

impl FakeLeaderboard {
    pub fn new(entries: Vec<LeaderboardEntry>) -> Self {
        Self {
            board: Mutex::new(entries),
            ..Self::default()
        }
    }

    pub fn gated_first_fetch(mut self) -> Self {
        self.gate_first_fetch = true;
        self
    }

    pub fn gated_submit(mut self) -> Self {
        self.gate_submit = true;
        self
    }

    pub fn set_fail_fetch(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_submit(&self, fail: bool) {
        self.fail_submit.store(fail, Ordering::SeqCst);
    }

    pub fn set_board(&self, entries: Vec<LeaderboardEntry>) {
        *self.board.lock().unwrap() = entries;
    }

    pub fn submissions(&self) -> Vec<LeaderboardEntry> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

fn server_error() -> LeaderboardError {
    LeaderboardError::HttpStatus(reqwest::StatusCode::INTERNAL_SERVER_ERROR)
}

#[async_trait]
impl LeaderboardClient for FakeLeaderboard {
    async fn fetch_top(&self) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        let call = self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.gate_first_fetch && call == 0 {
            self.started.notify_one();
            self.release.notified().await;
        }
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(server_error());
        }
        Ok(self.board.lock().unwrap().clone())
    }

    async fn submit(
        &self,
        entry: &LeaderboardEntry,
    ) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        self.submissions.lock().unwrap().push(entry.clone());
        if self.gate_submit {
            self.started.notify_one();
            self.release.notified().await;
        }
        if self.fail_submit.load(Ordering::SeqCst) {
            return Err(server_error());
        }
        let mut board = self.board.lock().unwrap();
        board.push(entry.clone());
        rank_entries(&mut board, DEFAULT_LEADERBOARD_CAP);
        Ok(board.clone())
    }
}

/// Three general-knowledge questions with correct answers
/// "Paris", "Mars" and "Leonardo da Vinci".
pub fn trivia_bank() -> QuestionBank {
    QuestionBank::new(vec![
        Question::new(
            QuestionId::new(1),
            "What is the capital of France?",
            ["London", "Berlin", "Paris", "Madrid"],
            "Paris",
        )
        .unwrap(),
        Question::new(
            QuestionId::new(2),
            "Which planet is known as the Red Planet?",
            ["Venus", "Mars", "Jupiter", "Saturn"],
            "Mars",
        )
        .unwrap(),
        Question::new(
            QuestionId::new(3),
            "Who painted the Mona Lisa?",
            [
                "Vincent van Gogh",
                "Leonardo da Vinci",
                "Pablo Picasso",
                "Claude Monet",
            ],
            "Leonardo da Vinci",
        )
        .unwrap(),
    ])
    .unwrap()
}

/// The answers a player gives in the scripted scenario: the second is wrong.
pub fn scripted_answer(question: &Question) -> &'static str {
    match question.id().value() {
        1 => "Paris",
        2 => "Venus",
        _ => "Leonardo da Vinci",
    }
}
