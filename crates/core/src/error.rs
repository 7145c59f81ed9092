use thiserror::Error;

use crate::model::AttemptError;
use crate::model::QuestionError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    QuestionValidation(#[from] QuestionError),
    #[error(transparent)]
    AttemptValidation(#[from] AttemptError),
}
