use crate::model::ids::QuizId;
use crate::model::quiz::Quiz;

/// The ordered collection of all quizzes, with unique-ID issuance.
///
/// Insertion order is display order. IDs are issued by [`Catalog::next_id`]
/// and never reused, even after a deletion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    quizzes: Vec<Quiz>,
    next_id: u64,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a fresh ID, strictly greater than every ID issued before by
    /// this catalog instance.
    pub fn next_id(&mut self) -> QuizId {
        let id = QuizId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Appends a quiz. The caller keeps IDs unique by building the quiz with
    /// an ID from [`Catalog::next_id`]; no dedup check happens here.
    pub fn add(&mut self, quiz: Quiz) {
        self.quizzes.push(quiz);
    }

    /// Removes the quiz with the given ID. Returns whether anything was
    /// removed; a missing ID is a no-op, not an error.
    pub fn remove_by_id(&mut self, id: QuizId) -> bool {
        let before = self.quizzes.len();
        self.quizzes.retain(|quiz| quiz.id() != id);
        self.quizzes.len() != before
    }

    /// The quizzes in insertion order. Live view: catalog mutations are
    /// observable through subsequent calls.
    #[must_use]
    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    #[must_use]
    pub fn get(&self, id: QuizId) -> Option<&Quiz> {
        self.quizzes.iter().find(|quiz| quiz.id() == id)
    }

    pub fn get_mut(&mut self, id: QuizId) -> Option<&mut Quiz> {
        self.quizzes.iter_mut().find(|quiz| quiz.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
