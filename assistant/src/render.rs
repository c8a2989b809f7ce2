//! Server-side HTML for the question page.

use crate::models::{DocumentSnippet, HistoryEntry};
use crate::query_view::ViewState;
use crate::segment::AnswerLayout;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

pub const NO_CONTENT_PLACEHOLDER: &str = "No content available";

const STYLE: &str = r#"
body { margin: 0; font-family: 'Segoe UI', Arial, sans-serif; background: #f8fafc; color: #334155; }
header { background: rgba(45,55,72,0.95); color: #fff; padding: 2em 0; margin-bottom: 2em; text-align: center; }
header h1 { font-weight: 700; font-size: 2.5em; margin: 0 0 0.2em; }
header p { font-size: 1.1em; color: #cbd5e1; margin: 0 0 0.5em; }
main { display: flex; flex-direction: column; align-items: center; }
.card { max-width: 600px; width: 100%; background: #fff; border-radius: 12px; box-shadow: 0 2px 8px rgba(0,0,0,0.07); padding: 2em; margin-bottom: 2em; box-sizing: border-box; }
form { margin-bottom: 2em; text-align: center; }
label { font-weight: 500; font-size: 1.1em; }
textarea { width: 100%; padding: 0.7em; font-size: 1em; border-radius: 8px; border: 1px solid #cbd5e1; margin: 0.5em 0 1em; resize: vertical; box-sizing: border-box; }
button { background: #2563eb; color: #fff; border: none; border-radius: 8px; padding: 0.7em 2em; font-size: 1.1em; font-weight: 600; cursor: pointer; }
button:disabled { opacity: 0.6; cursor: default; }
.error { color: #e53e3e; margin-bottom: 1em; }
.answer { background: #f1f5f9; padding: 1em; border-radius: 8px; font-size: 1.1em; white-space: pre-line; }
.answer li { margin-bottom: 0.7em; }
.doc { background: #f8fafc; border: 1px solid #e2e8f0; border-radius: 8px; padding: 1em; margin-bottom: 1em; color: #475569; white-space: pre-line; }
.placeholder { color: #64748b; }
.history ul { list-style: none; padding: 0; }
.history li.entry { margin-bottom: 1.2em; border-bottom: 1px solid #e2e8f0; padding-bottom: 1em; }
.history .question { font-weight: 500; margin-bottom: 0.3em; }
footer { text-align: center; color: #64748b; font-size: 0.95em; padding: 1em 0; border-top: 1px solid #e2e8f0; }
"#;

/// An answer as an ordered list of steps, or as plain text.
///
/// History entries go through here on every render, so they always follow
/// the current segmentation rule.
#[component]
pub fn AnswerBody(#[prop(into)] text: String) -> impl IntoView {
    match AnswerLayout::of(&text) {
        AnswerLayout::Steps(steps) => view! {
            <ol>
                {steps.into_iter().map(|step| view! { <li>{step}</li> }).collect_view()}
            </ol>
        }
        .into_any(),
        AnswerLayout::Plain(plain) => {
            let plain = plain.to_string();
            view! { <span>{plain}</span> }.into_any()
        }
    }
}

#[component]
pub fn DocumentEntry(doc: DocumentSnippet) -> impl IntoView {
    match doc.content() {
        Some(content) => {
            let content = content.to_string();
            view! { <div class="doc">{content}</div> }.into_any()
        }
        None => view! {
            <div class="doc"><span class="placeholder">{NO_CONTENT_PLACEHOLDER}</span></div>
        }
        .into_any(),
    }
}

#[component]
fn QuestionForm(draft: String, loading: bool) -> impl IntoView {
    let label = if loading { "Loading..." } else { "Ask" };

    view! {
        <form method="post" action="/ask">
            <label for="question">"Enter your legal question:"</label>
            <textarea
                id="question"
                name="question"
                rows="3"
                required=true
                placeholder="e.g. What are the requirements for a valid contract?"
            >
                {draft}
            </textarea>
            <button type="submit" disabled=loading>{label}</button>
        </form>
    }
}

#[component]
fn PastQueries(history: Vec<HistoryEntry>) -> impl IntoView {
    view! {
        <div class="card history">
            <h3>"Past Queries"</h3>
            <ul>
                {history
                    .into_iter()
                    .map(|entry| {
                        let question = format!("Q: {}", entry.question);
                        view! {
                            <li class="entry">
                                <div class="question">{question}</div>
                                <div class="answer"><AnswerBody text=entry.answer /></div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn QueryPage(state: ViewState) -> impl IntoView {
    let ViewState {
        draft,
        answer,
        documents,
        loading,
        error,
        history,
    } = state;

    let error = error.map(|error| view! { <div class="error">{error}</div> });

    let answer = (!answer.is_empty()).then(|| {
        view! {
            <section>
                <h2>"Answer"</h2>
                <div class="answer"><AnswerBody text=answer /></div>
            </section>
        }
    });

    let documents = (!documents.is_empty()).then(|| {
        view! {
            <section>
                <h3>"Relevant Documents"</h3>
                {documents
                    .into_iter()
                    .map(|doc| view! { <DocumentEntry doc=doc /> })
                    .collect_view()}
            </section>
        }
    });

    let history: Vec<HistoryEntry> = history.into_iter().collect();
    let history = (!history.is_empty()).then(|| view! { <PastQueries history=history /> });

    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>"Legal Assistant"</title>
                <style>{STYLE}</style>
            </head>
            <body>
                <header>
                    <h1>"Legal Assistant"</h1>
                    <p>"Ask legal questions and get AI-powered answers instantly."</p>
                </header>
                <main>
                    <div class="card">
                        <QuestionForm draft=draft loading=loading />
                        {error}
                        {answer}
                        {documents}
                    </div>
                    {history}
                </main>
                <footer>"Legal Assistant. Powered by Rust and axum."</footer>
            </body>
        </html>
    }
}

/// Renders the whole page for one view.
pub fn render_page(state: &ViewState) -> String {
    let state = state.clone();
    let owner = Owner::new();
    let html = owner.with(|| view! { <QueryPage state=state /> }.to_html());
    format!("<!DOCTYPE html>{}", html)
}
