mod controller;
mod session;
mod snapshot;

// Public API of the quiz subsystem.
pub use controller::{Advance, QuizController};
pub use session::{ErrorKind, LastError};
pub use snapshot::QuizSnapshot;
