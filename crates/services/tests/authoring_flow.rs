use quiz_core::model::{QuestionDraft, QuestionError, ScoreDisplay};
use quiz_core::time::fixed_clock;
use services::{CatalogService, CatalogServiceError};

fn draft(text: &str, options: &[&str], correct: usize) -> QuestionDraft {
    QuestionDraft::new(
        text,
        options.iter().map(|s| (*s).to_owned()).collect(),
        correct,
    )
}

#[test]
fn author_a_quiz_end_to_end() {
    let mut service = CatalogService::new(fixed_clock());

    let id = service.create_quiz("Rust Basics", Vec::new()).unwrap();
    service
        .add_question(
            id,
            draft(
                "Which keyword introduces an immutable binding?",
                &["let", "mut", "static"],
                0,
            ),
        )
        .unwrap();
    service
        .add_question(id, draft("What is 7 * 8?", &["54", "56", "63", "49"], 1))
        .unwrap();

    let quiz = service.quiz(id).unwrap();
    assert_eq!(quiz.name(), "Rust Basics");
    assert_eq!(quiz.question_count(), 2);
    assert_eq!(quiz.score_display(), ScoreDisplay::NotTaken);
}

#[test]
fn authoring_mistakes_are_reported_and_recoverable() {
    let mut service = CatalogService::new(fixed_clock());
    let id = service.create_quiz("Error Cases", Vec::new()).unwrap();

    // An untouched placeholder field in slot 3 is rejected with its position.
    let err = service
        .add_question(id, draft("Pick one", &["a", "b", "Option 3"], 0))
        .unwrap_err();
    assert!(matches!(
        err,
        CatalogServiceError::Question(QuestionError::PlaceholderOption { index: 2 })
    ));

    // The failure was local: the same quiz accepts the corrected question.
    let count = service
        .add_question(id, draft("Pick one", &["a", "b", "c"], 0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn deletion_keeps_remaining_quizzes_in_order() {
    let mut service = CatalogService::new(fixed_clock());
    let a = service.create_quiz("A", Vec::new()).unwrap();
    let _b = service.create_quiz("B", Vec::new()).unwrap();
    let _c = service.create_quiz("C", Vec::new()).unwrap();

    assert!(service.delete_quiz(a));

    let names: Vec<_> = service.quizzes().iter().map(|q| q.name()).collect();
    assert_eq!(names, ["B", "C"]);

    // A later creation gets an ID no earlier quiz ever had.
    let d = service.create_quiz("D", Vec::new()).unwrap();
    assert!(service.quizzes().iter().all(|q| q.id() <= d));
    assert_ne!(d, a);
}
