use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::ids::QuizId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AttemptError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("score {score} exceeds question count {total}")]
    ScoreExceedsTotal { score: u32, total: u32 },

    #[error("too many questions for a single attempt: {len}")]
    TooManyQuestions { len: usize },
}

/// Immutable record of one submitted attempt at a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptSummary {
    quiz_id: QuizId,
    score: u32,
    total: u32,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl AttemptSummary {
    /// Builds a summary, checking its invariants.
    ///
    /// # Errors
    ///
    /// Returns `AttemptError::InvalidTimeRange` if `completed_at` is before
    /// `started_at`, and `AttemptError::ScoreExceedsTotal` if the score is
    /// larger than the question count.
    pub fn new(
        quiz_id: QuizId,
        score: u32,
        total: u32,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, AttemptError> {
        if completed_at < started_at {
            return Err(AttemptError::InvalidTimeRange);
        }
        if score > total {
            return Err(AttemptError::ScoreExceedsTotal { score, total });
        }

        Ok(Self {
            quiz_id,
            score,
            total,
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn quiz_id(&self) -> QuizId {
        self.quiz_id
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// Score as a percentage of the question count, 0 when there are no
    /// questions. Presentation layers format this to one decimal place.
    #[must_use]
    pub fn percentage(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.score as f32 / self.total as f32 * 100.0
    }
}
