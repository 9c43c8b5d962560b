use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use quiz_core::model::{LeaderboardEntry, Question, QuestionBank, QuestionId, Stage};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use super::session::{ErrorKind, LastError, Session, Step};
use super::snapshot::QuizSnapshot;
use crate::error::QuizError;
use crate::leaderboard::LeaderboardClient;

/// Outcome of a single `advance()` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// The current answer was checked; call `advance()` again to move on.
    Revealed { correct: bool },
    /// Moved to the question with this 1-based number.
    NextQuestion { number: usize },
    /// The quiz is over. `synced` is false when the submission failed.
    Finished { final_score: u32, synced: bool },
    /// The session was reset while the submission was in flight; its response
    /// was dropped.
    Superseded,
}

struct Inner {
    session: Session,
    leaderboard: Vec<LeaderboardEntry>,
    /// Bumped on every new session; stale responses compare against it.
    generation: u64,
    /// Token of the leaderboard fetch whose response is still wanted.
    pending_fetch: Option<u64>,
    rng: StdRng,
}

impl Inner {
    fn busy(&self) -> bool {
        self.pending_fetch.is_some() || self.session.is_submitting()
    }

    /// Reshuffle into a fresh Registration session and return the token for
    /// the leaderboard fetch that goes with it.
    fn begin_session(&mut self, bank: &QuestionBank) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        let order = bank.shuffled(&mut self.rng);
        self.session.reset(order);
        let token = self.generation;
        self.pending_fetch = Some(token);
        token
    }
}

/// Drives one quiz attempt at a time: registration, the check/next cycle for
/// every question, and leaderboard sync at both ends of the session.
///
/// All methods take `&self`; the state lock is never held across a remote
/// call, so `snapshot()` stays readable (and reports `busy`) while one is in
/// flight.
pub struct QuizController {
    bank: QuestionBank,
    client: Arc<dyn LeaderboardClient>,
    inner: Mutex<Inner>,
}

impl QuizController {
    /// Create a controller in the Registration stage with a first shuffle.
    ///
    /// Call [`Self::initialize`] to load the leaderboard.
    #[must_use]
    pub fn new(bank: QuestionBank, client: Arc<dyn LeaderboardClient>) -> Self {
        let mut rng = StdRng::from_os_rng();
        let order = bank.shuffled(&mut rng);
        Self {
            bank,
            client,
            inner: Mutex::new(Inner {
                session: Session::new(order),
                leaderboard: Vec::new(),
                generation: 0,
                pending_fetch: None,
                rng,
            }),
        }
    }

    /// Replace the random source and reshuffle the current order.
    #[must_use]
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        let inner = self.inner.get_mut().unwrap_or_else(PoisonError::into_inner);
        inner.rng = rng;
        let order = self.bank.shuffled(&mut inner.rng);
        inner.session.reset(order);
        self
    }

    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(StdRng::seed_from_u64(seed))
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        let inner = self.lock();
        QuizSnapshot::capture(&inner.session, &inner.leaderboard, inner.busy())
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.lock().busy()
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.lock().session.stage()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.lock().session.current_index()
    }

    /// Ids of the current session's questions, in play order.
    #[must_use]
    pub fn question_order(&self) -> Vec<QuestionId> {
        self.lock()
            .session
            .order()
            .iter()
            .map(Question::id)
            .collect()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Start a fresh session and load the leaderboard.
    ///
    /// A failed fetch keeps the previously held leaderboard and records a
    /// `RemoteFetch` error.
    pub async fn initialize(&self) {
        let token = self.lock().begin_session(&self.bank);
        debug!(generation = token, "session initialized");
        self.fetch_leaderboard(token).await;
    }

    /// Play again after a finished session.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidState` unless the session is `Finished`.
    pub async fn restart(&self) -> Result<(), QuizError> {
        let token = {
            let mut inner = self.lock();
            inner.session.require(Stage::Finished)?;
            inner.begin_session(&self.bank)
        };
        debug!(generation = token, "session restarted");
        self.fetch_leaderboard(token).await;
        Ok(())
    }

    /// Store the name as typed; it is validated by [`Self::start_quiz`].
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidState` outside the Registration stage.
    pub fn set_player_name(&self, candidate: impl Into<String>) -> Result<(), QuizError> {
        self.lock().session.set_player_name(candidate.into())
    }

    /// # Errors
    ///
    /// Returns `QuizError::NameRequired` for a blank name (and records a
    /// validation error), or `QuizError::InvalidState` outside Registration.
    pub fn start_quiz(&self) -> Result<(), QuizError> {
        let mut inner = self.lock();
        inner.session.start()?;
        info!(
            player = inner.session.player_name(),
            questions = inner.session.order().len(),
            "quiz started"
        );
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `QuizError::InvalidState` outside InProgress,
    /// `QuizError::AnswerLocked` once the answer is revealed,
    /// `QuizError::UnknownOption` for a string that is not an option, and
    /// `QuizError::Busy` while the final score is being submitted.
    pub fn select_answer(&self, option: &str) -> Result<(), QuizError> {
        self.lock().session.select_answer(option)
    }

    /// Reveal the current answer, or move past a revealed one.
    ///
    /// Moving past the last question submits the final score. A failed
    /// submission still finishes the session; the error message then carries
    /// the score so the result is not lost.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidState` outside InProgress (no state is
    /// touched) and `QuizError::Busy` while a submission is in flight.
    pub async fn advance(&self) -> Result<Advance, QuizError> {
        let (token, entry) = {
            let mut inner = self.lock();
            match inner.session.advance()? {
                Step::Revealed { correct } => {
                    debug!(
                        index = inner.session.current_index(),
                        correct, "answer revealed"
                    );
                    return Ok(Advance::Revealed { correct });
                }
                Step::Moved { number } => return Ok(Advance::NextQuestion { number }),
                Step::Complete { final_score } => (
                    inner.generation,
                    LeaderboardEntry::new(inner.session.player_name(), final_score),
                ),
            }
        };
        self.finish(token, entry).await
    }

    async fn finish(&self, token: u64, entry: LeaderboardEntry) -> Result<Advance, QuizError> {
        let final_score = entry.score;
        info!(player = %entry.name, score = final_score, "submitting final score");
        let result = self.client.submit(&entry).await;

        let mut inner = self.lock();
        if inner.generation != token {
            debug!(token, "discarding submission response for a reset session");
            return Ok(Advance::Superseded);
        }
        // Any fetch still in flight is older than the submission.
        inner.pending_fetch = None;

        match result {
            Ok(entries) => {
                inner.leaderboard = entries;
                inner.session.complete(None);
                Ok(Advance::Finished {
                    final_score,
                    synced: true,
                })
            }
            Err(err) => {
                warn!(error = %err, score = final_score, "failed to update leaderboard");
                inner
                    .session
                    .complete(Some(LastError::submit_failed(final_score)));
                Ok(Advance::Finished {
                    final_score,
                    synced: false,
                })
            }
        }
    }

    async fn fetch_leaderboard(&self, token: u64) {
        let result = self.client.fetch_top().await;

        let mut inner = self.lock();
        if inner.pending_fetch != Some(token) {
            debug!(token, "discarding stale leaderboard response");
            return;
        }
        inner.pending_fetch = None;

        match result {
            Ok(entries) => {
                inner.leaderboard = entries;
                inner.session.clear_error(ErrorKind::RemoteFetch);
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch leaderboard");
                inner.session.set_last_error(LastError::fetch_failed());
            }
        }
    }
}

impl fmt::Debug for QuizController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("QuizController")
            .field("bank_len", &self.bank.len())
            .field("stage", &inner.session.stage())
            .field("current", &inner.session.current_index())
            .field("score", &inner.session.score())
            .field("generation", &inner.generation)
            .field("busy", &inner.busy())
            .finish_non_exhaustive()
    }
}
