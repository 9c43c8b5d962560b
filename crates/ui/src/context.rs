use std::sync::Arc;

use services::QuizController;

pub trait UiApp: Send + Sync {
    fn quiz(&self) -> Arc<QuizController>;
}

#[derive(Clone)]
pub struct AppContext {
    quiz: Arc<QuizController>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self { quiz: app.quiz() }
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizController> {
        Arc::clone(&self.quiz)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
