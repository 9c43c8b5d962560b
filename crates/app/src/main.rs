use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::QuestionBank;
use services::leaderboard::DEFAULT_API_URL;
use services::{
    HttpLeaderboard, LeaderboardClient, LeaderboardConfig, LocalLeaderboard, QuizController,
};
use storage::repository::Storage;
use tracing::info;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --local-db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Parser, Debug)]
#[command(version, about = "The Quiz Battle desktop client")]
struct Args {
    /// Base URL of the leaderboard API.
    #[arg(long, env = "QUIZ_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Keep the leaderboard in a local SQLite database instead of the API.
    #[arg(long, env = "QUIZ_DB_URL")]
    local_db: Option<String>,

    /// JSON file with the question bank. The built-in bank is used otherwise.
    #[arg(long, env = "QUIZ_QUESTIONS")]
    questions: Option<PathBuf>,

    /// Seed for a reproducible question order.
    #[arg(long, env = "QUIZ_SEED")]
    seed: Option<u64>,
}

struct DesktopApp {
    quiz: Arc<QuizController>,
}

impl UiApp for DesktopApp {
    fn quiz(&self) -> Arc<QuizController> {
        Arc::clone(&self.quiz)
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn load_bank(path: Option<&Path>) -> Result<QuestionBank, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(QuestionBank::builtin());
    };
    let json = std::fs::read_to_string(path)?;
    let bank = QuestionBank::from_json(&json)?;
    info!(path = %path.display(), questions = bank.len(), "loaded question bank");
    Ok(bank)
}

async fn build_client(
    args: &Args,
) -> Result<Arc<dyn LeaderboardClient>, Box<dyn std::error::Error>> {
    match args.local_db.as_deref() {
        Some(raw) => {
            if raw.trim().is_empty() {
                return Err(ArgsError::InvalidDbUrl {
                    raw: raw.to_string(),
                }
                .into());
            }
            let db_url = normalize_sqlite_url(raw.to_string());
            // Open + migrate SQLite at startup. Keep this in the binary glue so services stay pure.
            prepare_sqlite_file(&db_url)?;
            let storage = Storage::sqlite(&db_url).await?;
            info!(db = %db_url, "using local leaderboard");
            Ok(Arc::new(LocalLeaderboard::new(storage.leaderboard)))
        }
        None => {
            let config = LeaderboardConfig::new(args.api_url.clone());
            info!(url = %config.leaderboard_url(), "using hosted leaderboard");
            Ok(Arc::new(HttpLeaderboard::new(config)))
        }
    }
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "warn,app=info,services=info,ui=info".to_owned());
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing();

    let bank = load_bank(args.questions.as_deref())?;
    let client = build_client(&args).await?;

    let mut quiz = QuizController::new(bank, client);
    if let Some(seed) = args.seed {
        quiz = quiz.with_seed(seed);
    }

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz: Arc::new(quiz),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz Battle")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_keeps_memory_and_absolute_urls() {
        assert_eq!(
            normalize_sqlite_url("sqlite::memory:".into()),
            "sqlite::memory:"
        );
        assert_eq!(
            normalize_sqlite_url("sqlite:///tmp/quiz.sqlite3".into()),
            "sqlite:///tmp/quiz.sqlite3"
        );
        assert_eq!(
            normalize_sqlite_url("sqlite:/tmp/quiz.sqlite3".into()),
            "sqlite:///tmp/quiz.sqlite3"
        );
    }

    #[test]
    fn normalize_makes_relative_paths_absolute() {
        let url = normalize_sqlite_url("quiz.sqlite3".into());
        assert!(url.starts_with("sqlite:///"), "{url}");
        assert!(url.ends_with("quiz.sqlite3"), "{url}");
    }

    #[test]
    fn prepare_rejects_non_file_urls() {
        assert!(prepare_sqlite_file("sqlite::memory:").is_ok());
        assert!(prepare_sqlite_file("postgres://db").is_err());
        assert!(prepare_sqlite_file("sqlite://").is_err());
    }

    #[test]
    fn args_parse_flags() {
        let args = Args::try_parse_from([
            "app",
            "--api-url",
            "http://localhost:3000/api",
            "--local-db",
            "quiz.sqlite3",
            "--seed",
            "42",
        ])
        .unwrap();
        assert_eq!(args.api_url, "http://localhost:3000/api");
        assert_eq!(args.local_db.as_deref(), Some("quiz.sqlite3"));
        assert_eq!(args.seed, Some(42));
        assert!(args.questions.is_none());
    }

    #[test]
    fn builtin_bank_is_used_without_a_file() {
        let bank = load_bank(None).unwrap();
        assert_eq!(bank.len(), QuestionBank::builtin().len());
    }
}
