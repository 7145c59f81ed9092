use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Reasons a question draft is rejected by the authoring flow.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("a question needs at least two options, got {count}")]
    NotEnoughOptions { count: usize },

    #[error("option {} cannot be empty", .index + 1)]
    EmptyOption { index: usize },

    #[error("option {} was left at its placeholder text", .index + 1)]
    PlaceholderOption { index: usize },

    #[error("correct answer index {index} is out of bounds for {count} options")]
    CorrectIndexOutOfBounds { index: usize, count: usize },
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Raw authoring input for a single question, before validation.
///
/// Editors fill a draft from their text fields and call [`QuestionDraft::validate`]
/// to obtain an immutable [`Question`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub text: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

impl QuestionDraft {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
    ) -> Self {
        Self {
            text: text.into(),
            options,
            correct_index,
        }
    }

    /// Validates the draft and produces a read-only [`Question`].
    ///
    /// All strings are trimmed before validation and stored trimmed.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` if the prompt is empty or whitespace.
    /// Returns `QuestionError::NotEnoughOptions` for fewer than two options.
    /// Returns `QuestionError::EmptyOption` or `QuestionError::PlaceholderOption`
    /// for an option that is blank or still reads as its editor placeholder.
    /// Returns `QuestionError::CorrectIndexOutOfBounds` if the marked answer
    /// does not name an option.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let text = self.text.trim().to_owned();
        if text.is_empty() {
            return Err(QuestionError::EmptyText);
        }

        if self.options.len() < 2 {
            return Err(QuestionError::NotEnoughOptions {
                count: self.options.len(),
            });
        }

        let mut options = Vec::with_capacity(self.options.len());
        for (index, option) in self.options.iter().enumerate() {
            let option = option.trim();
            if option.is_empty() {
                return Err(QuestionError::EmptyOption { index });
            }
            if option == option_placeholder(index) {
                return Err(QuestionError::PlaceholderOption { index });
            }
            options.push(option.to_owned());
        }

        if self.correct_index >= options.len() {
            return Err(QuestionError::CorrectIndexOutOfBounds {
                index: self.correct_index,
                count: options.len(),
            });
        }

        Ok(Question {
            text,
            options,
            correct_index: self.correct_index,
        })
    }
}

/// The placeholder an editor shows in option slot `index` before the author
/// types anything. Slot numbering is 1-based in the visible text.
#[must_use]
pub fn option_placeholder(index: usize) -> String {
    format!("Option {}", index + 1)
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// One prompt with its ordered answer options and the index of the correct one.
///
/// Immutable after construction; editing produces a new `Question`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct_index: usize,
}

impl Question {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The answer options in display order. Order is meaningful; answers are
    /// recorded by index into this list.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn options(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn validate_rejects_empty_text() {
        let err = QuestionDraft::new("   ", options(&["a", "b"]), 0)
            .validate()
            .unwrap_err();
        assert_eq!(err, QuestionError::EmptyText);
    }

    #[test]
    fn validate_rejects_single_option() {
        let err = QuestionDraft::new("2 + 2?", options(&["4"]), 0)
            .validate()
            .unwrap_err();
        assert_eq!(err, QuestionError::NotEnoughOptions { count: 1 });
    }

    #[test]
    fn validate_rejects_blank_option() {
        let err = QuestionDraft::new("2 + 2?", options(&["4", "  "]), 0)
            .validate()
            .unwrap_err();
        assert_eq!(err, QuestionError::EmptyOption { index: 1 });
    }

    #[test]
    fn validate_rejects_untouched_placeholder() {
        let err = QuestionDraft::new("2 + 2?", options(&["4", "Option 2"]), 0)
            .validate()
            .unwrap_err();
        assert_eq!(err, QuestionError::PlaceholderOption { index: 1 });
    }

    #[test]
    fn placeholder_check_is_positional() {
        // "Option 2" is only the placeholder for slot 2; in slot 1 it is a
        // legitimate answer.
        let question = QuestionDraft::new("Pick one", options(&["Option 2", "other"]), 1)
            .validate()
            .unwrap();
        assert_eq!(question.options()[0], "Option 2");
    }

    #[test]
    fn validate_rejects_out_of_bounds_correct_index() {
        let err = QuestionDraft::new("2 + 2?", options(&["4", "5"]), 2)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            QuestionError::CorrectIndexOutOfBounds { index: 2, count: 2 }
        );
    }

    #[test]
    fn validate_trims_text_and_options() {
        let question = QuestionDraft::new("  2 + 2?  ", options(&[" 4 ", "5"]), 0)
            .validate()
            .unwrap();
        assert_eq!(question.text(), "2 + 2?");
        assert_eq!(question.options(), ["4", "5"]);
        assert_eq!(question.correct_index(), 0);
    }

    #[test]
    fn validate_accepts_more_than_four_options() {
        let question = QuestionDraft::new(
            "Pick a prime",
            options(&["4", "6", "7", "8", "9", "10"]),
            2,
        )
        .validate()
        .unwrap();
        assert_eq!(question.options().len(), 6);
    }
}
