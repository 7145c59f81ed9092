use quiz_core::model::QuestionDraft;
use quiz_core::time::fixed_clock;
use services::{CatalogService, Step};

fn seeded_service() -> (CatalogService, quiz_core::model::QuizId) {
    let mut service = CatalogService::new(fixed_clock());
    let id = service.create_quiz("Walkthrough", Vec::new()).unwrap();
    service
        .add_question(
            id,
            QuestionDraft::new("first", vec!["a".into(), "b".into()], 0),
        )
        .unwrap();
    service
        .add_question(
            id,
            QuestionDraft::new(
                "second",
                vec!["a".into(), "b".into(), "c".into()],
                2,
            ),
        )
        .unwrap();
    (service, id)
}

#[test]
fn take_a_quiz_end_to_end() {
    let (mut service, id) = seeded_service();

    let mut session = service.start_session(id).unwrap();
    assert!(session.is_first());
    assert!(!session.is_last());

    session.select_option(0).unwrap();
    session.goto(Step::Forward).unwrap();
    assert!(session.is_last());
    session.select_option(2).unwrap();

    let summary = service.submit_session(&mut session).unwrap();
    assert_eq!(summary.score(), 2);
    assert_eq!(summary.total(), 2);
    assert_eq!(format!("{:.1}%", summary.percentage()), "100.0%");

    let quiz = service.quiz(id).unwrap();
    assert!(quiz.taken());
    assert_eq!(quiz.last_score(), Some(2));
    assert_eq!(quiz.score_display().to_string(), "2/2");
}

#[test]
fn changing_an_answer_before_submitting_counts_the_last_choice() {
    let (mut service, id) = seeded_service();
    let mut session = service.start_session(id).unwrap();

    session.select_option(1).unwrap();
    session.select_option(0).unwrap();
    session.goto(Step::Forward).unwrap();
    session.goto(Step::Back).unwrap();
    assert_eq!(session.selected(), Some(0));

    session.goto(Step::Forward).unwrap();
    let summary = service.submit_session(&mut session).unwrap();
    assert_eq!(summary.score(), 1);
}

#[test]
fn retake_overwrites_the_previous_score() {
    let (mut service, id) = seeded_service();

    let mut first = service.start_session(id).unwrap();
    first.select_option(0).unwrap();
    let summary = service.submit_session(&mut first).unwrap();
    assert_eq!(summary.score(), 1);
    assert_eq!(service.quiz(id).unwrap().last_score(), Some(1));

    // A retake is a fresh session with a clean answer sheet.
    let mut second = service.start_session(id).unwrap();
    assert_eq!(second.answers(), [None, None]);
    second.select_option(0).unwrap();
    second.goto(Step::Forward).unwrap();
    second.select_option(2).unwrap();
    let summary = service.submit_session(&mut second).unwrap();
    assert_eq!(summary.score(), 2);
    assert_eq!(service.quiz(id).unwrap().last_score(), Some(2));
}

#[test]
fn questions_added_mid_attempt_do_not_reach_the_running_session() {
    let (mut service, id) = seeded_service();
    let mut session = service.start_session(id).unwrap();

    service
        .add_question(
            id,
            QuestionDraft::new("late", vec!["x".into(), "y".into()], 0),
        )
        .unwrap();

    assert_eq!(session.total_questions(), 2);
    session.select_option(0).unwrap();
    session.goto(Step::Forward).unwrap();
    session.select_option(2).unwrap();

    let summary = service.submit_session(&mut session).unwrap();
    assert_eq!(summary.total(), 2);
    assert_eq!(summary.score(), 2);

    // The quiz itself now has three questions and keeps the recorded score.
    let quiz = service.quiz(id).unwrap();
    assert_eq!(quiz.question_count(), 3);
    assert_eq!(quiz.last_score(), Some(2));
}
