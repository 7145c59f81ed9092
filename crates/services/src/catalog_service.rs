use quiz_core::Clock;
use quiz_core::model::{AttemptSummary, Catalog, Question, QuestionDraft, Quiz, QuizId};

use crate::error::CatalogServiceError;
use crate::sessions::QuizSession;

/// Orchestrates quiz authoring, deletion, and the taking flow against the
/// in-memory catalog it owns.
///
/// The presentation layer talks to this service and to the [`QuizSession`]
/// it hands out; it never touches the catalog directly.
#[derive(Debug)]
pub struct CatalogService {
    clock: Clock,
    catalog: Catalog,
}

impl CatalogService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            catalog: Catalog::new(),
        }
    }

    /// Creates a quiz and inserts it into the catalog under a fresh ID.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::EmptyName` when the trimmed name is
    /// empty; nothing is inserted and no ID is consumed.
    pub fn create_quiz(
        &mut self,
        name: impl Into<String>,
        initial_questions: Vec<Question>,
    ) -> Result<QuizId, CatalogServiceError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogServiceError::EmptyName);
        }

        let id = self.catalog.next_id();
        let quiz = Quiz::new(id, name, initial_questions, self.clock.now());
        self.catalog.add(quiz);
        Ok(id)
    }

    /// Renames an existing quiz.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::EmptyName` for a blank name and
    /// `CatalogServiceError::QuizNotFound` for an unknown ID.
    pub fn rename_quiz(
        &mut self,
        id: QuizId,
        name: impl Into<String>,
    ) -> Result<(), CatalogServiceError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogServiceError::EmptyName);
        }

        let quiz = self
            .catalog
            .get_mut(id)
            .ok_or(CatalogServiceError::QuizNotFound(id))?;
        quiz.rename(name);
        Ok(())
    }

    /// Validates a question draft and appends it to the quiz, returning the
    /// new question count.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::QuizNotFound` for an unknown ID;
    /// validation failures surface as `CatalogServiceError::Question`.
    pub fn add_question(
        &mut self,
        id: QuizId,
        draft: QuestionDraft,
    ) -> Result<usize, CatalogServiceError> {
        let question = draft.validate()?;
        let quiz = self
            .catalog
            .get_mut(id)
            .ok_or(CatalogServiceError::QuizNotFound(id))?;
        quiz.add_question(question);
        Ok(quiz.question_count())
    }

    /// Removes a quiz. Returns whether anything was removed; deleting an
    /// unknown ID is a no-op.
    pub fn delete_quiz(&mut self, id: QuizId) -> bool {
        self.catalog.remove_by_id(id)
    }

    /// All quizzes in insertion order.
    #[must_use]
    pub fn quizzes(&self) -> &[Quiz] {
        self.catalog.quizzes()
    }

    #[must_use]
    pub fn quiz(&self, id: QuizId) -> Option<&Quiz> {
        self.catalog.get(id)
    }

    /// Starts a taking session against the quiz with the given ID.
    ///
    /// The session holds its own snapshot of the questions; the catalog is
    /// not locked while the attempt runs.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::QuizNotFound` for an unknown ID; a quiz
    /// without questions surfaces as `SessionError::EmptyQuiz` through
    /// `CatalogServiceError::Session`.
    pub fn start_session(&self, id: QuizId) -> Result<QuizSession, CatalogServiceError> {
        let quiz = self
            .catalog
            .get(id)
            .ok_or(CatalogServiceError::QuizNotFound(id))?;
        let session = QuizSession::start(quiz, self.clock.now())?;
        Ok(session)
    }

    /// Submits a session, writing the score back onto its quiz.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::QuizNotFound` if the quiz was deleted
    /// while the attempt ran; submission failures surface as
    /// `CatalogServiceError::Session`.
    pub fn submit_session(
        &mut self,
        session: &mut QuizSession,
    ) -> Result<AttemptSummary, CatalogServiceError> {
        let id = session.quiz_id();
        let quiz = self
            .catalog
            .get_mut(id)
            .ok_or(CatalogServiceError::QuizNotFound(id))?;
        let summary = session.submit(quiz, self.clock.now())?;
        Ok(summary)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
