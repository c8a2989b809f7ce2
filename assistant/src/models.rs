use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A question captured from the draft at the moment it was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub question: String,
}

/// Body of the outgoing call to the question-answering endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
    pub temperature: f32,
    pub top_k: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    pub docs: Vec<DocumentSnippet>,
}

/// A supporting fragment returned alongside the answer.
///
/// Backends attach arbitrary fields to each document. Only a string
/// `page_content` is kept, anything else leaves the snippet without content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct DocumentSnippet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_content: Option<String>,
}

impl DocumentSnippet {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            page_content: Some(content.into()),
        }
    }

    /// Content worth displaying, if any. Empty strings count as missing.
    pub fn content(&self) -> Option<&str> {
        self.page_content.as_deref().filter(|c| !c.is_empty())
    }
}

impl From<Value> for DocumentSnippet {
    fn from(value: Value) -> Self {
        let page_content = value
            .get("page_content")
            .and_then(Value::as_str)
            .map(str::to_string);
        Self { page_content }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub question: String,
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_expected_fields() {
        let request = AskRequest {
            question: "Is a verbal contract binding?".to_string(),
            temperature: 0.3,
            top_k: 3,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["question"], "Is a verbal contract binding?");
        assert_eq!(value["top_k"], 3);
        assert!((value["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
        assert_eq!(value.as_object().unwrap().len(), 3);
    }

    #[test]
    fn response_tolerates_odd_documents() {
        let body = json!({
            "answer": "Yes.",
            "docs": [
                {"page_content": "A", "metadata": {"keyword": "contract"}},
                {"metadata": {}},
                {"page_content": null},
                {"page_content": 42},
                "bare string",
                {"page_content": ""}
            ]
        });
        let response: AskResponse = serde_json::from_value(body).unwrap();
        let contents: Vec<_> = response.docs.iter().map(DocumentSnippet::content).collect();
        assert_eq!(contents, vec![Some("A"), None, None, None, None, None]);
    }

    #[test]
    fn response_without_docs_is_rejected() {
        let body = json!({ "answer": "Yes." });
        assert!(serde_json::from_value::<AskResponse>(body).is_err());
    }

    #[test]
    fn response_with_non_string_answer_is_rejected() {
        let body = json!({ "answer": 7, "docs": [] });
        assert!(serde_json::from_value::<AskResponse>(body).is_err());
    }
}
