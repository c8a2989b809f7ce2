use crate::ask_service::AnswerBackend;
use crate::models::*;
use anyhow::Result;
use std::collections::VecDeque;

pub const FETCH_ERROR_MESSAGE: &str = "Error fetching answer. Is the backend running?";

/// Everything the view shows. Owned by a single `QueryView`.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub draft: String,
    pub answer: String,
    pub documents: Vec<DocumentSnippet>,
    pub loading: bool,
    pub error: Option<String>,
    /// Most recent first.
    pub history: VecDeque<HistoryEntry>,
}

#[derive(Debug, Default)]
pub struct QueryView {
    state: ViewState,
}

impl QueryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.state.draft = text.into();
    }

    /// Enters the loading state and captures the draft as a query.
    ///
    /// Returns `None` when the draft is empty, in which case nothing changes.
    /// An in-flight submission does not block a new one.
    pub fn begin_submit(&mut self) -> Option<Query> {
        if self.state.draft.is_empty() {
            return None;
        }

        self.state.loading = true;
        self.state.error = None;
        self.state.answer.clear();
        self.state.documents.clear();

        Some(Query {
            question: self.state.draft.clone(),
        })
    }

    /// Applies the outcome of the call started by `begin_submit`.
    pub fn finish_submit(&mut self, query: Query, outcome: Result<AskResponse>) {
        match outcome {
            Ok(response) => {
                self.state.history.push_front(HistoryEntry {
                    question: query.question,
                    answer: response.answer.clone(),
                });
                self.state.answer = response.answer;
                self.state.documents = response.docs;
            }
            Err(e) => {
                log::warn!("Question failed: {:#}", e);
                self.state.error = Some(FETCH_ERROR_MESSAGE.to_string());
            }
        }
        self.state.loading = false;
    }

    /// Submits the current draft and waits for the answer.
    ///
    /// Returns `false` if there was nothing to submit.
    pub async fn submit<B: AnswerBackend>(&mut self, backend: &B) -> bool {
        let Some(query) = self.begin_submit() else {
            return false;
        };
        let outcome = backend.ask(&query.question).await;
        self.finish_submit(query, outcome);
        true
    }
}
