use crate::config::AssistantConfig;
use crate::models::*;
use anyhow::Result;
use reqwest::Client;
use std::future::Future;

/// Anything that can turn a question into an answer with supporting documents.
pub trait AnswerBackend: Send + Sync {
    fn ask(&self, question: &str) -> impl Future<Output = Result<AskResponse>> + Send;
}

/// Talks to the remote question-answering endpoint over HTTP.
pub struct AskService {
    client: Client,
    config: AssistantConfig,
}

impl AskService {
    pub fn new(config: AssistantConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    pub fn build_request(&self, question: &str) -> AskRequest {
        AskRequest {
            question: question.to_string(),
            temperature: self.config.temperature,
            top_k: self.config.top_k,
        }
    }
}

impl AnswerBackend for AskService {
    async fn ask(&self, question: &str) -> Result<AskResponse> {
        let request = self.build_request(question);

        log::info!("Asking {} (top_k={})", self.config.endpoint, request.top_k);

        let response = self.client
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Backend returned {}: {}", status, error_text));
        }

        let ask_response: AskResponse = response.json().await?;

        log::info!("Received answer with {} documents", ask_response.docs.len());
        Ok(ask_response)
    }
}
