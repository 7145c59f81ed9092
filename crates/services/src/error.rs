//! Error types shared across the services crate.

use thiserror::Error;

use quiz_core::model::{AttemptError, QuestionError, QuizId};

/// Errors emitted by a quiz-taking session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("quiz has no questions")]
    EmptyQuiz,

    #[error("navigation would leave the question range")]
    OutOfRange,

    #[error("session already completed")]
    Completed,

    #[error("option {index} does not exist for the current question")]
    InvalidOption { index: usize },

    #[error("session was started on quiz {expected}, not quiz {actual}")]
    QuizMismatch { expected: QuizId, actual: QuizId },

    #[error(transparent)]
    Attempt(#[from] AttemptError),
}

/// Errors emitted by `CatalogService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogServiceError {
    #[error("quiz name cannot be empty")]
    EmptyName,

    #[error("no quiz with id {0}")]
    QuizNotFound(QuizId),

    #[error(transparent)]
    Question(#[from] QuestionError),

    #[error(transparent)]
    Session(#[from] SessionError),
}
