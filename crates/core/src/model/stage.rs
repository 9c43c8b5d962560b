use serde::{Deserialize, Serialize};
use std::fmt;

/// Which part of the quiz flow a session is in.
///
/// Transitions run `Registration -> InProgress -> Finished`, and back to
/// `Registration` only through an explicit restart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    #[default]
    Registration,
    InProgress,
    Finished,
}

impl Stage {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Registration => "registration",
            Stage::InProgress => "in_progress",
            Stage::Finished => "finished",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
