//! Chat panel session handling.
//!
//! The server hands out an opaque session id on the first reply. The panel
//! keeps the first id it sees for the lifetime of the tab and sends it with
//! every later message.

use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::Infallible;

use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "chatbot";
pub const USER_CLASS: &str = "user-message";
pub const BOT_CLASS: &str = "bot-message";
pub const CONNECTION_ERROR_REPLY: &str = "Sorry, I am having trouble connecting to the server.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Key/value storage scoped to the browser tab.
pub trait SessionStore {
    type Error;

    fn load(&self, key: &str) -> Result<Option<String>, Self::Error>;
    fn save(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// In-process store, used off the browser.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.items.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl SessionStore for MemoryStore {
    type Error = Infallible;

    fn load(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub struct ChatSession<S: SessionStore> {
    store: S,
    key: String,
    session_id: Option<String>,
}

impl<S: SessionStore> ChatSession<S> {
    /// Restores any id already held by the store under `key`.
    pub fn new(store: S, key: impl Into<String>) -> Result<Self, S::Error> {
        let key = key.into();
        let session_id = store.load(&key)?.filter(|id| !id.is_empty());
        Ok(Self {
            store,
            key,
            session_id,
        })
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Builds the request for raw input text, or `None` when it is blank.
    /// The message is sent as typed; callers display the trimmed text.
    pub fn prepare(&self, input: &str) -> Option<ChatRequest> {
        if input.trim().is_empty() {
            return None;
        }
        Some(ChatRequest {
            message: input.to_string(),
            session_id: self.session_id.clone(),
        })
    }

    /// Adopts the reply's session id if none is held yet and returns the
    /// text to show. A null response shows as an empty bubble.
    pub fn accept(&mut self, reply: ChatReply) -> Result<String, S::Error> {
        if self.session_id.is_none() {
            if let Some(id) = reply.session_id.filter(|id| !id.is_empty()) {
                self.store.save(&self.key, &id)?;
                self.session_id = Some(id);
            }
        }
        Ok(reply.response.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "geneverse_session_id";

    fn reply(text: &str, id: Option<&str>) -> ChatReply {
        ChatReply {
            response: Some(text.into()),
            session_id: id.map(str::to_string),
        }
    }

    #[test]
    fn blank_input_is_not_sent() {
        let session = ChatSession::new(MemoryStore::new(), KEY).unwrap();
        assert!(session.prepare("").is_none());
        assert!(session.prepare("  \n\t").is_none());
    }

    #[test]
    fn first_request_has_null_session() {
        let session = ChatSession::new(MemoryStore::new(), KEY).unwrap();
        let req = session.prepare(" what is BRCA1? ").unwrap();
        assert_eq!(req.message, " what is BRCA1? ");
        assert_eq!(req.session_id, None);
        let json = serde_json::to_value(&req).unwrap();
        assert!(json["session_id"].is_null());
    }

    #[test]
    fn adopts_first_server_id_and_persists_it() {
        let mut session = ChatSession::new(MemoryStore::new(), KEY).unwrap();
        let text = session.accept(reply("hello", Some("abc"))).unwrap();
        assert_eq!(text, "hello");
        assert_eq!(session.session_id(), Some("abc"));
        assert_eq!(session.store().get(KEY).as_deref(), Some("abc"));
        assert_eq!(session.prepare("next").unwrap().session_id.as_deref(), Some("abc"));
    }

    #[test]
    fn held_id_is_never_replaced() {
        let mut session = ChatSession::new(MemoryStore::with_item(KEY, "first"), KEY).unwrap();
        assert_eq!(session.session_id(), Some("first"));
        session.accept(reply("hi", Some("second"))).unwrap();
        assert_eq!(session.session_id(), Some("first"));
        assert_eq!(session.store().get(KEY).as_deref(), Some("first"));
    }

    #[test]
    fn reply_without_id_keeps_session_empty() {
        let mut session = ChatSession::new(MemoryStore::new(), KEY).unwrap();
        session.accept(reply("no id", None)).unwrap();
        session.accept(reply("empty id", Some(""))).unwrap();
        assert_eq!(session.session_id(), None);
        assert!(session.store().get(KEY).is_none());
    }

    #[test]
    fn reply_decodes_without_session_field() {
        let r: ChatReply = serde_json::from_str(r#"{"response": "model unavailable"}"#).unwrap();
        assert_eq!(r.session_id, None);
        assert_eq!(r.response.as_deref(), Some("model unavailable"));
    }

    #[test]
    fn null_response_still_adopts_session() {
        let r: ChatReply = serde_json::from_str(r#"{"response": null, "session_id": "abc"}"#).unwrap();
        let mut session = ChatSession::new(MemoryStore::new(), KEY).unwrap();
        let text = session.accept(r).unwrap();
        assert_eq!(text, "");
        assert_eq!(session.session_id(), Some("abc"));
        assert_eq!(session.store().get(KEY).as_deref(), Some("abc"));
    }
}
