use chrono::{DateTime, Utc};

use quiz_core::model::{AttemptError, AttemptSummary, Question, Quiz, QuizId};

use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── NAVIGATION ────────────────────────────────────────────────────────────────
//

/// One navigation move between adjacent questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Back,
    Forward,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One in-progress attempt at answering a quiz's questions in order.
///
/// The session snapshots the quiz's questions at start and runs independently
/// of the catalog; only [`QuizSession::submit`] touches the quiz again, to
/// write the result back. A retake is a brand-new session; answers are never
/// carried over.
#[derive(Debug)]
pub struct QuizSession {
    quiz_id: QuizId,
    questions: Vec<Question>,
    answers: Vec<Option<usize>>,
    cursor: usize,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Starts an attempt at the given quiz.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyQuiz` if the quiz has no questions; no
    /// session exists in that case.
    pub fn start(quiz: &Quiz, started_at: DateTime<Utc>) -> Result<Self, SessionError> {
        let questions = quiz.questions().to_vec();
        if questions.is_empty() {
            return Err(SessionError::EmptyQuiz);
        }

        let answers = vec![None; questions.len()];
        Ok(Self {
            quiz_id: quiz.id(),
            questions,
            answers,
            cursor: 0,
            started_at,
            completed_at: None,
        })
    }

    // Accessors
    #[must_use]
    pub fn quiz_id(&self) -> QuizId {
        self.quiz_id
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Index of the question currently presented.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.cursor]
    }

    /// The recorded answer for the current question, `None` if unanswered.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.answers[self.cursor]
    }

    /// All recorded answers, index-aligned with the question order.
    #[must_use]
    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    /// True at the first question; shells disable their back control here.
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.cursor == 0
    }

    /// True at the last question; shells offer submit here and disable the
    /// forward control.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.cursor + 1 == self.questions.len()
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.total_questions(),
            answered: self.answered_count(),
            current: self.cursor,
            is_complete: self.is_complete(),
        }
    }

    /// Records `index` as the answer for the current question, overwriting
    /// any prior selection. Changing your mind before navigating away is
    /// just another call.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` after submission and
    /// `SessionError::InvalidOption` when `index` does not name an option of
    /// the current question.
    pub fn select_option(&mut self, index: usize) -> Result<(), SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        if index >= self.questions[self.cursor].options().len() {
            return Err(SessionError::InvalidOption { index });
        }

        self.answers[self.cursor] = Some(index);
        Ok(())
    }

    /// Moves the cursor one question back or forward, returning the new
    /// cursor. Selections are recorded eagerly by [`QuizSession::select_option`],
    /// so nothing is lost by navigating away and back.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` after submission and
    /// `SessionError::OutOfRange` when the move would leave the question
    /// range; the cursor is unchanged on failure.
    pub fn goto(&mut self, step: Step) -> Result<usize, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }

        let next = match step {
            Step::Back => self.cursor.checked_sub(1),
            Step::Forward => {
                let candidate = self.cursor + 1;
                (candidate < self.questions.len()).then_some(candidate)
            }
        };

        match next {
            Some(next) => {
                self.cursor = next;
                Ok(next)
            }
            None => Err(SessionError::OutOfRange),
        }
    }

    /// Scores the attempt and writes the result back into the quiz.
    ///
    /// Every unanswered question counts as incorrect. The session transitions
    /// to completed; any further call on it fails with
    /// `SessionError::Completed`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` on re-submission and
    /// `SessionError::QuizMismatch` if `quiz` is not the quiz this session
    /// was started on. Summary invariant violations surface as
    /// `SessionError::Attempt`.
    pub fn submit(
        &mut self,
        quiz: &mut Quiz,
        completed_at: DateTime<Utc>,
    ) -> Result<AttemptSummary, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        if quiz.id() != self.quiz_id {
            return Err(SessionError::QuizMismatch {
                expected: self.quiz_id,
                actual: quiz.id(),
            });
        }

        let matches = self
            .questions
            .iter()
            .zip(&self.answers)
            .filter(|(question, answer)| **answer == Some(question.correct_index()))
            .count();

        let total = u32::try_from(self.questions.len()).map_err(|_| {
            AttemptError::TooManyQuestions {
                len: self.questions.len(),
            }
        })?;
        let score = u32::try_from(matches).map_err(|_| AttemptError::TooManyQuestions {
            len: matches,
        })?;

        let summary = AttemptSummary::new(
            self.quiz_id,
            score,
            total,
            self.started_at,
            completed_at,
        )?;

        quiz.record_attempt(score);
        self.completed_at = Some(completed_at);
        Ok(summary)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
