// Terminal front end: one question per line on stdin.
// The browser version lives in ../web.

use anyhow::Result;
use legal_assistant::render::NO_CONTENT_PLACEHOLDER;
use legal_assistant::*;
use tokio::io::{AsyncBufReadExt, BufReader};

fn print_answer(text: &str) {
    match AnswerLayout::of(text) {
        AnswerLayout::Steps(steps) => {
            for (idx, step) in steps.iter().enumerate() {
                println!("  {}. {}", idx + 1, step);
            }
        }
        AnswerLayout::Plain(text) => println!("  {}", text),
    }
}

fn print_state(state: &ViewState) {
    if let Some(error) = &state.error {
        println!("{}", error);
        return;
    }

    if !state.answer.is_empty() {
        println!("\nAnswer:");
        print_answer(&state.answer);
    }

    if !state.documents.is_empty() {
        println!("\nRelevant Documents:");
        for doc in &state.documents {
            println!("  - {}", doc.content().unwrap_or(NO_CONTENT_PLACEHOLDER));
        }
    }
}

fn print_history(state: &ViewState) {
    if state.history.is_empty() {
        return;
    }

    println!("\nPast Queries:");
    for entry in &state.history {
        println!("Q: {}", entry.question);
        print_answer(&entry.answer);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = AssistantConfig::from_env()?;
    log::info!("Using endpoint {}", config.endpoint);

    let service = AskService::new(config);
    let mut view = QueryView::new();

    println!("Legal Assistant. Enter your legal question (Ctrl-D to quit):");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        view.set_draft(line);
        println!("Loading...");
        view.submit(&service).await;
        print_state(view.state());
        println!();
    }

    print_history(view.state());
    Ok(())
}
