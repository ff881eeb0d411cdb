//! Chatbot request and reply bodies.

use serde::{Deserialize, Serialize};

use super::{require_non_empty, Validate};
use crate::{Error, MediaResolver};

/// Body of a chatbot POST. `session_id` is left out entirely when the
/// caller has no session yet, which tells the backend to start one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub query: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub session_id: Option<String>,
}

impl ChatRequest {
    pub fn new(query: &str, session_id: Option<&str>) -> Self {
        Self {
            query: query.to_string(),
            session_id: session_id.map(String::from),
        }
    }
}

/// Chatbot answer. The returned `session_id` replaces whatever the caller
/// sent; the backend may rotate it at any time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub answer: String,

    #[serde(default)]
    pub document_name: Option<String>,

    #[serde(default)]
    pub document_url: Option<String>,

    pub session_id: String,
}

impl ChatReply {
    /// Absolute URL of the cited source document, if the answer cites one.
    pub fn resolve_document_url(&self, media: &MediaResolver) -> Result<Option<String>, Error> {
        media.resolve_optional(self.document_url.as_deref())
    }
}

impl Validate for ChatReply {
    fn validate(&self) -> Result<(), String> {
        require_non_empty("session_id", &self.session_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_document_url_resolves() {
        let media = MediaResolver::from_api_base("http://host/api").unwrap();
        let reply = ChatReply {
            answer: "a".into(),
            document_name: Some("Hansard".into()),
            document_url: Some("media/hansard.pdf".into()),
            session_id: "abc".into(),
        };
        assert_eq!(
            reply.resolve_document_url(&media).unwrap().as_deref(),
            Some("http://host/media/hansard.pdf")
        );
    }

    #[test]
    fn request_without_session_omits_the_field() {
        let body = serde_json::to_value(ChatRequest::new("hello", None)).unwrap();
        assert_eq!(body, serde_json::json!({"query": "hello"}));
    }

    #[test]
    fn request_with_session_sends_it() {
        let body = serde_json::to_value(ChatRequest::new("hello", Some("abc"))).unwrap();
        assert_eq!(body, serde_json::json!({"query": "hello", "session_id": "abc"}));
    }

    #[test]
    fn reply_requires_session_id() {
        let reply: ChatReply =
            serde_json::from_str(r#"{"answer": "hi", "session_id": ""}"#).unwrap();
        assert!(reply.validate().is_err());
    }
}
