mod attempt;
mod catalog;
mod ids;
mod question;
mod quiz;

pub use attempt::{AttemptError, AttemptSummary};
pub use catalog::Catalog;
pub use ids::{ParseIdError, QuizId};
pub use question::{Question, QuestionDraft, QuestionError, option_placeholder};
pub use quiz::{Quiz, ScoreDisplay};
