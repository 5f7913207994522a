use anyhow::{Context, Result};

use tango_lib::app::{App, AppStage};
use tango_lib::hints::AiHint;
use tango_lib::quiz::{QuizOrder, QuizSettings, DEFAULT_QUESTION_COUNT};

use super::{prompt, resolve_notebook};

pub fn run(
    app: &mut App,
    notebook: &str,
    start: Option<u32>,
    end: Option<u32>,
    count: Option<usize>,
    order: QuizOrder,
) -> Result<()> {
    let id = resolve_notebook(app, notebook)?;
    app.select_notebook(id)?;

    let max_no = app.active_notebook().map(|n| n.max_no()).unwrap_or(0);
    let settings = QuizSettings {
        range_start: start.unwrap_or(1),
        range_end: end.unwrap_or(max_no),
        question_count: count.unwrap_or(DEFAULT_QUESTION_COUNT),
        order,
    };

    let range_start = settings.range_start;
    let range_end = settings.range_end;
    app.start_quiz(settings)?;

    if app.stage() == AppStage::Result && app.results().is_empty() {
        println!("No words in range {}..={}.", range_start, range_end);
        return Ok(());
    }

    if !run_session(app)? {
        return Ok(());
    }
    show_results(app)
}

/// Walk the session to completion; false means the user cancelled
fn run_session(app: &mut App) -> Result<bool> {
    while app.stage() == AppStage::Quiz {
        let word = app
            .current_word()
            .context("Quiz stage without a current word")?
            .clone();
        let (answered, total) = app.progress().unwrap_or((0, 0));

        println!();
        println!("[{}/{}] No. {}  {}", answered + 1, total, word.no, word.word);

        loop {
            let line = prompt("(Enter: reveal, h: hint, q: quit) > ")?;
            match line.as_str() {
                "q" => return cancel(app),
                "h" => print_hint(&app.fetch_hint()?),
                _ => break,
            }
        }

        app.reveal()?;
        println!("  {}", word.meaning);

        loop {
            let line = prompt("(y: knew it, n: missed, q: quit) > ")?;
            match line.as_str() {
                "y" => {
                    app.judge(true)?;
                    break;
                }
                "n" => {
                    app.judge(false)?;
                    break;
                }
                "q" => return cancel(app),
                _ => {}
            }
        }
    }
    Ok(true)
}

fn cancel(app: &mut App) -> Result<bool> {
    app.cancel_quiz()?;
    println!("Session cancelled; nothing was recorded.");
    Ok(false)
}

fn print_hint(hint: &AiHint) {
    println!();
    println!("  Example:     {}", hint.example_sentence);
    println!("  Translation: {}", hint.translation);
    println!("  Tips:        {}", hint.tips);
}

/// Print the result screen and offer retry / review-missed
fn show_results(app: &mut App) -> Result<()> {
    while app.stage() == AppStage::Result {
        let stats = app.session_stats();

        println!();
        println!(
            "Done: {} correct, {} missed ({}%)",
            stats.correct_count, stats.missed_count, stats.accuracy
        );
        for result in app.results() {
            let mark = if result.is_correct { "o" } else { "x" };
            println!(
                "  {}  No. {:<4} {}  {}",
                mark, result.word.no, result.word.word, result.word.meaning
            );
        }

        let choices = if stats.missed_count > 0 {
            "(r: same again, m: review missed, Enter: done) > "
        } else {
            "(r: same again, Enter: done) > "
        };
        let line = prompt(choices)?;
        match line.as_str() {
            "r" => {
                app.restart_same()?;
                if !run_session(app)? {
                    return Ok(());
                }
            }
            "m" if stats.missed_count > 0 => {
                app.review_missed()?;
                if !run_session(app)? {
                    return Ok(());
                }
            }
            _ => return Ok(()),
        }
    }
    Ok(())
}
