//! Chatbot session controller.
//!
//! State machine: no session until the first successful exchange, then the
//! backend-issued session id is adopted, persisted through the injected
//! [`SessionStore`] and sent with every later query. Only successful
//! exchanges are recorded, in a history that keeps the most recent
//! [`HISTORY_LIMIT`] pairs.

use std::collections::VecDeque;

use parliament_api::types::{ChatReply, ChatRequest};
use parliament_api::Client;

use crate::error::ParliamentError;
use crate::session::SessionStore;
use crate::validation;

/// Number of exchanges kept in the rolling history.
pub const HISTORY_LIMIT: usize = 5;

/// One query and the reply it received.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatExchange {
    pub query: String,
    pub reply: ChatReply,
}

/// Sliding window over the most recent exchanges, oldest first.
#[derive(Debug, Clone)]
pub struct ChatHistory {
    entries: VecDeque<ChatExchange>,
    limit: usize,
}

impl Default for ChatHistory {
    fn default() -> Self {
        Self::with_limit(HISTORY_LIMIT)
    }
}

impl ChatHistory {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit + 1),
            limit,
        }
    }

    /// Appends an exchange, dropping the oldest ones beyond the limit.
    pub fn push(&mut self, exchange: ChatExchange) {
        self.entries.push_back(exchange);
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatExchange> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&ChatExchange> {
        self.entries.back()
    }

    /// The queries in history order.
    pub fn queries(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.query.as_str()).collect()
    }
}

/// Chat controller bound to a session store.
pub struct ChatSession<S: SessionStore> {
    store: S,
    session_id: Option<String>,
    history: ChatHistory,
    error: Option<String>,
    last_reply: Option<ChatReply>,
}

impl<S: SessionStore> ChatSession<S> {
    /// Mounts the controller, silently reusing a persisted session id.
    pub fn mount(store: S) -> Self {
        let session_id = store.get();
        if let Some(id) = &session_id {
            tracing::debug!("Resuming chat session {}", id);
        }
        Self {
            store,
            session_id,
            history: ChatHistory::default(),
            error: None,
            last_reply: None,
        }
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn history(&self) -> &ChatHistory {
        &self.history
    }

    /// Error from the latest failed exchange, cleared by the next success.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn last_reply(&self) -> Option<&ChatReply> {
        self.last_reply.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Sends `query` with the current session id.
    ///
    /// A blank query is rejected before any request and leaves all state
    /// untouched. A failed request records its message in [`Self::error`]
    /// and leaves history and session as they were.
    pub async fn submit(&mut self, client: &Client, query: &str) -> Result<ChatExchange, ParliamentError> {
        let query = validation::validate_query(query)?;
        let request = ChatRequest::new(&query, self.session_id.as_deref());

        let reply = match client.chat(&request).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!("Chat request failed: {}", e);
                self.error = Some(e.to_string());
                return Err(e.into());
            }
        };

        if self.session_id.as_deref() != Some(reply.session_id.as_str()) {
            tracing::info!("Adopting chat session {}", reply.session_id);
            if let Err(e) = self.store.set(&reply.session_id) {
                tracing::warn!("Chat session not persisted: {}", e);
            }
            self.session_id = Some(reply.session_id.clone());
        }
        self.error = None;
        self.last_reply = Some(reply.clone());
        let exchange = ChatExchange { query, reply };
        self.history.push(exchange.clone());
        Ok(exchange)
    }

    /// Forgets everything: history, session id (in memory and in the
    /// store), error and last reply. The next query opens a new session.
    pub fn clear(&mut self) {
        self.history.clear();
        self.session_id = None;
        if let Err(e) = self.store.clear() {
            tracing::warn!("Saved chat session not removed: {}", e);
        }
        self.error = None;
        self.last_reply = None;
    }
}
