use std::io::{stderr, stdout};

use anyhow::Result;
use crossterm::execute;
use crossterm::style::{
    Attribute, Color, Print, PrintStyledContent, SetAttribute, SetForegroundColor, Stylize,
};
use derive_more::Display;
use inquire::{Confirm, InquireError, Select, Text};

use quiz_core::model::{AttemptSummary, Question, QuestionDraft, QuizId, ScoreDisplay};
use services::{CatalogService, Clock, QuizSession, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
enum MainAction {
    #[display("Take a quiz")]
    Take,
    #[display("Create a new quiz")]
    Create,
    #[display("Delete a quiz")]
    Delete,
    #[display("Quit")]
    Quit,
}

impl MainAction {
    const ALL: [MainAction; 4] = [
        MainAction::Take,
        MainAction::Create,
        MainAction::Delete,
        MainAction::Quit,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
enum TakingAction {
    #[display("Answer this question")]
    Answer,
    #[display("Previous question")]
    Previous,
    #[display("Next question")]
    Next,
    #[display("Submit quiz")]
    Submit,
}

fn main() {
    pretty_env_logger::init();

    if let Err(err) = run() {
        print_error(&err.to_string());
        std::process::exit(2);
    }
}

fn run() -> Result<()> {
    let mut service = CatalogService::new(Clock::default_clock());
    seed_sample_quizzes(&mut service)?;

    loop {
        print_dashboard(&service)?;

        let action = match Select::new("What would you like to do?", MainAction::ALL.to_vec())
            .prompt()
        {
            Ok(action) => action,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        let outcome = match action {
            MainAction::Take => take_quiz(&mut service),
            MainAction::Create => create_quiz(&mut service),
            MainAction::Delete => delete_quiz(&mut service),
            MainAction::Quit => break,
        };

        if let Err(err) = outcome {
            // Esc inside a flow abandons that flow, not the whole app.
            if cancelled(&err) {
                continue;
            }
            return Err(err);
        }
    }

    Ok(())
}

fn cancelled(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<InquireError>(),
        Some(InquireError::OperationCanceled | InquireError::OperationInterrupted)
    )
}

// The two starter quizzes every fresh launch shows on the dashboard.
fn seed_sample_quizzes(service: &mut CatalogService) -> Result<()> {
    let rust_basics = vec![
        QuestionDraft::new(
            "What does IDE stand for?",
            vec![
                "Integrated Development Environment".into(),
                "Internal Drive Error".into(),
                "Ideal Design Example".into(),
                "Interface Docker Engine".into(),
            ],
            0,
        )
        .validate()?,
        QuestionDraft::new(
            "Which keyword introduces an immutable binding in Rust?",
            vec!["let".into(), "mut".into(), "const".into(), "static".into()],
            0,
        )
        .validate()?,
    ];
    service.create_quiz("Rust Basics", rust_basics)?;

    let simple_math = vec![
        QuestionDraft::new(
            "What is 7 * 8?",
            vec!["54".into(), "56".into(), "63".into(), "49".into()],
            1,
        )
        .validate()?,
        QuestionDraft::new(
            "What is the value of Pi (approx)?",
            vec!["3.14".into(), "2.71".into(), "1.61".into(), "4.00".into()],
            0,
        )
        .validate()?,
    ];
    service.create_quiz("Simple Math", simple_math)?;

    Ok(())
}

//
// ─── DASHBOARD ─────────────────────────────────────────────────────────────────
//

fn print_dashboard(service: &CatalogService) -> Result<()> {
    execute!(
        stdout(),
        Print("\n"),
        PrintStyledContent("Quiz Dashboard".bold()),
        Print("\n"),
    )?;

    if service.quizzes().is_empty() {
        execute!(stdout(), Print("  (no quizzes yet)\n"))?;
        return Ok(());
    }

    for quiz in service.quizzes() {
        let score_line = match quiz.score_display() {
            ScoreDisplay::NotTaken => "not taken yet".to_owned(),
            other => format!("score {other}"),
        };
        execute!(
            stdout(),
            Print(format!(
                "  {} - {} questions, {}\n",
                quiz.name(),
                quiz.question_count(),
                score_line
            )),
        )?;
    }

    Ok(())
}

fn pick_quiz(service: &CatalogService, prompt: &str) -> Result<Option<QuizId>> {
    if service.quizzes().is_empty() {
        print_error("There are no quizzes yet.");
        return Ok(None);
    }

    let labels: Vec<String> = service
        .quizzes()
        .iter()
        .map(|quiz| format!("{} ({} questions)", quiz.name(), quiz.question_count()))
        .collect();
    let choice = Select::new(prompt, labels).raw_prompt()?;
    Ok(Some(service.quizzes()[choice.index].id()))
}

//
// ─── AUTHORING ─────────────────────────────────────────────────────────────────
//

fn create_quiz(service: &mut CatalogService) -> Result<()> {
    let name = loop {
        let name = Text::new("Quiz title:").prompt()?;
        if name.trim().is_empty() {
            print_error("Quiz name cannot be empty.");
            continue;
        }
        break name;
    };

    let mut questions = Vec::new();
    loop {
        if let Some(question) = author_question()? {
            questions.push(question);
            print_ok("Question added.");
        }

        if Confirm::new("Add another question?")
            .with_default(questions.is_empty())
            .prompt()?
        {
            continue;
        }
        if questions.is_empty() {
            // A quiz is only worth saving once it can be taken.
            print_error("A quiz must have at least one question.");
            continue;
        }
        break;
    }

    let id = service.create_quiz(name, questions)?;
    log::info!("created quiz {id}");
    print_ok("Quiz saved.");
    Ok(())
}

fn author_question() -> Result<Option<Question>> {
    let text = Text::new("Question text:").prompt()?;

    let mut options: Vec<String> = Vec::new();
    loop {
        let prompt = format!("Option {}:", options.len() + 1);
        let entry = Text::new(&prompt)
            .with_help_message("leave empty to stop adding options")
            .prompt()?;
        if entry.trim().is_empty() {
            if options.len() >= 2 {
                break;
            }
            print_error("A question needs at least two options.");
            continue;
        }
        options.push(entry);
    }

    let correct = Select::new("Which option is correct?", options.clone()).raw_prompt()?;

    match QuestionDraft::new(text, options, correct.index).validate() {
        Ok(question) => Ok(Some(question)),
        Err(err) => {
            print_error(&err.to_string());
            Ok(None)
        }
    }
}

fn delete_quiz(service: &mut CatalogService) -> Result<()> {
    let Some(id) = pick_quiz(service, "Delete which quiz?")? else {
        return Ok(());
    };

    let confirmed = Confirm::new("Are you sure you want to delete this quiz?")
        .with_default(false)
        .prompt()?;
    if confirmed && service.delete_quiz(id) {
        log::info!("deleted quiz {id}");
        print_ok("Quiz deleted.");
    }

    Ok(())
}

//
// ─── TAKING ────────────────────────────────────────────────────────────────────
//

fn take_quiz(service: &mut CatalogService) -> Result<()> {
    let Some(id) = pick_quiz(service, "Take which quiz?")? else {
        return Ok(());
    };

    let mut session = match service.start_session(id) {
        Ok(session) => session,
        Err(err) => {
            // Usually an empty quiz; show the blocking notice and stay on the menu.
            print_error(&err.to_string());
            return Ok(());
        }
    };
    log::info!("started attempt on quiz {id}");

    loop {
        render_question(&session)?;

        let mut actions = vec![TakingAction::Answer];
        if !session.is_first() {
            actions.push(TakingAction::Previous);
        }
        if session.is_last() {
            actions.push(TakingAction::Submit);
        } else {
            actions.push(TakingAction::Next);
        }

        match Select::new("Controls:", actions).prompt()? {
            TakingAction::Answer => {
                let options = session.current_question().options().to_vec();
                let start = session.selected().unwrap_or(0);
                let pick = Select::new("Choose an answer:", options)
                    .with_starting_cursor(start)
                    .raw_prompt()?;
                session.select_option(pick.index)?;
            }
            TakingAction::Previous => {
                session.goto(Step::Back)?;
            }
            TakingAction::Next => {
                session.goto(Step::Forward)?;
            }
            TakingAction::Submit => {
                let summary = service.submit_session(&mut session)?;
                log::info!(
                    "quiz {id} submitted: {}/{}",
                    summary.score(),
                    summary.total()
                );
                let name = service
                    .quiz(id)
                    .map(|quiz| quiz.name().to_owned())
                    .unwrap_or_default();
                render_result(&name, &summary)?;
                break;
            }
        }
    }

    Ok(())
}

fn render_question(session: &QuizSession) -> Result<()> {
    let question = session.current_question();
    execute!(
        stdout(),
        Print("\n"),
        PrintStyledContent(
            format!(
                "Question {} of {}: ",
                session.cursor() + 1,
                session.total_questions()
            )
            .bold()
        ),
        Print(question.text()),
        Print("\n"),
    )?;

    for (index, option) in question.options().iter().enumerate() {
        let marker = if session.selected() == Some(index) {
            "●"
        } else {
            "○"
        };
        execute!(
            stdout(),
            Print(format!("  {marker} {}. {option}\n", index + 1)),
        )?;
    }

    Ok(())
}

fn render_result(quiz_name: &str, summary: &AttemptSummary) -> Result<()> {
    execute!(
        stdout(),
        Print("\n"),
        PrintStyledContent(quiz_name.to_owned().bold()),
        Print("\n"),
        Print("Your Score: "),
        PrintStyledContent(format!("{} / {}", summary.score(), summary.total()).bold()),
        Print("\n"),
        Print(format!("Percentage: {:.1}%\n", summary.percentage())),
    )?;
    Ok(())
}

//
// ─── STYLED OUTPUT ─────────────────────────────────────────────────────────────
//

fn print_error(err: &str) {
    let _ = execute!(
        stderr(),
        SetForegroundColor(Color::Red),
        SetAttribute(Attribute::Bold),
        Print("Error:"),
        SetAttribute(Attribute::Reset),
        Print(format!(" {err}\n")),
    );
}

fn print_ok(msg: &str) {
    let _ = execute!(
        stdout(),
        SetForegroundColor(Color::Green),
        SetAttribute(Attribute::Bold),
        Print("Success:"),
        SetAttribute(Attribute::Reset),
        Print(format!(" {msg}\n")),
    );
}
