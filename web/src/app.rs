use crate::sessions::{SessionLimits, SessionStore};
use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use legal_assistant::{render_page, AnswerBackend, ViewState};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "la_session";

pub struct AppState<B> {
    pub sessions: Arc<SessionStore>,
    backend: Arc<B>,
}

impl<B> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            sessions: self.sessions.clone(),
            backend: self.backend.clone(),
        }
    }
}

impl<B: AnswerBackend> AppState<B> {
    pub fn new(backend: B, limits: SessionLimits) -> Self {
        Self {
            sessions: Arc::new(SessionStore::new(limits)),
            backend: Arc::new(backend),
        }
    }
}

#[derive(Deserialize)]
pub struct AskForm {
    #[serde(default)]
    pub question: String,
}

pub fn router<B: AnswerBackend + 'static>(state: AppState<B>) -> Router {
    Router::new()
        .route("/", get(index::<B>))
        .route("/ask", post(ask::<B>))
        .route("/health", get(health))
        .with_state(state)
}

/// Reads the session id from the cookie, or mints a new one and sets it.
/// Minting an id does not create a session; only asking a question does.
fn session_id(jar: CookieJar) -> (CookieJar, Uuid) {
    let existing = jar
        .get(SESSION_COOKIE)
        .and_then(|c| Uuid::parse_str(c.value()).ok());

    if let Some(id) = existing {
        return (jar, id);
    }

    let id = Uuid::new_v4();
    let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
        .path("/")
        .http_only(true);
    (jar.add(cookie), id)
}

/// Browsers post textarea line breaks as CRLF; the backend gets plain LF.
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n")
}

async fn index<B: AnswerBackend + 'static>(
    State(state): State<AppState<B>>,
    jar: CookieJar,
) -> impl IntoResponse {
    let (jar, id) = session_id(jar);

    let html = match state.sessions.read(&id, |view| render_page(view.state())).await {
        Some(html) => html,
        None => render_page(&ViewState::default()),
    };

    (jar, Html(html))
}

async fn ask<B: AnswerBackend + 'static>(
    State(state): State<AppState<B>>,
    jar: CookieJar,
    Form(form): Form<AskForm>,
) -> impl IntoResponse {
    let (jar, id) = session_id(jar);
    let question = normalize_newlines(&form.question);

    let query = state
        .sessions
        .update(id, |view| {
            view.set_draft(question);
            view.begin_submit()
        })
        .await;

    if let Some(query) = query {
        // The call runs in its own task so the view still leaves the loading
        // state when the browser gives up on this request.
        let task_state = state.clone();
        let call = tokio::spawn(async move {
            let outcome = task_state.backend.ask(&query.question).await;
            task_state
                .sessions
                .update_existing(&id, |view| view.finish_submit(query, outcome))
                .await;
        });

        if let Err(e) = call.await {
            log::warn!("Submission for session {} did not complete: {}", id, e);
        }
    }

    (jar, Redirect::to("/"))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
