use std::fmt::{self, Display};

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The attempt is already scored; the cursor no longer advances.
    AttemptFinished,
    /// Selection index outside the current question's option set.
    UnknownChoice,
    /// The quiz already has a live attempt.
    AlreadyRunning,
    /// No live attempt under that quiz id.
    UnknownAttempt,
    /// A quiz document with no questions cannot be attempted.
    EmptyQuiz,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;
        f.write_str(match self {
            AttemptFinished => "The attempt is already scored.",
            UnknownChoice => "That option does not exist.",
            AlreadyRunning => "This quiz already has a live attempt.",
            UnknownAttempt => "No live attempt for this quiz.",
            EmptyQuiz => "This quiz has no questions.",
        })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
