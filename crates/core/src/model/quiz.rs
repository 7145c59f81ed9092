use chrono::{DateTime, Utc};
use std::fmt;

use crate::model::ids::QuizId;
use crate::model::question::Question;

//
// ─── QUIZ ──────────────────────────────────────────────────────────────────────
//

/// A named collection of questions plus the outcome of the most recent attempt.
///
/// Questions are append-only; their order defines question numbering during an
/// attempt. The name may be empty while the quiz is still being authored;
/// the catalog service rejects empty names at insertion time, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct Quiz {
    id: QuizId,
    name: String,
    questions: Vec<Question>,
    taken: bool,
    last_score: Option<u32>,
    created_at: DateTime<Utc>,
}

impl Quiz {
    /// Creates a new quiz. The name is trimmed; an empty name is accepted
    /// (deferred validation), the caller just cannot insert it into the
    /// catalog until it has one.
    #[must_use]
    pub fn new(
        id: QuizId,
        name: impl Into<String>,
        initial_questions: Vec<Question>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into().trim().to_owned(),
            questions: initial_questions,
            taken: false,
            last_score: None,
            created_at,
        }
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> QuizId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// False until a session has submitted a result for this quiz.
    #[must_use]
    pub fn taken(&self) -> bool {
        self.taken
    }

    /// Correct-answer count of the most recent attempt, `None` before the
    /// first submission.
    #[must_use]
    pub fn last_score(&self) -> Option<u32> {
        self.last_score
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces the name. Trimmed like at construction; empty-name policy is
    /// the catalog service's concern.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into().trim().to_owned();
    }

    /// Appends a question. There is no upper bound on question count.
    pub fn add_question(&mut self, question: Question) {
        self.questions.push(question);
    }

    /// Records the outcome of an attempt, overwriting any prior score.
    pub fn record_attempt(&mut self, score: u32) {
        self.taken = true;
        self.last_score = Some(score);
    }

    /// The score line a dashboard shows for this quiz.
    #[must_use]
    pub fn score_display(&self) -> ScoreDisplay {
        if !self.taken {
            return ScoreDisplay::NotTaken;
        }
        if self.questions.is_empty() {
            return ScoreDisplay::NoQuestions;
        }
        ScoreDisplay::Fraction {
            score: self.last_score.unwrap_or(0),
            total: self.questions.len(),
        }
    }
}

//
// ─── SCORE DISPLAY ─────────────────────────────────────────────────────────────
//

/// How a quiz's latest result reads on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreDisplay {
    NotTaken,
    /// Taken, but the quiz has no questions to score against.
    NoQuestions,
    Fraction {
        score: u32,
        total: usize,
    },
}

impl fmt::Display for ScoreDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreDisplay::NotTaken => write!(f, "not taken"),
            ScoreDisplay::NoQuestions => write!(f, "N/A (no questions)"),
            ScoreDisplay::Fraction { score, total } => write!(f, "{score}/{total}"),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
