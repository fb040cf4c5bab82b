use std::collections::HashMap;
use std::sync::Mutex;

use crate::llm::models::Message;

/// Snapshot of one conversation at resolve time.
#[derive(Debug, Clone)]
pub struct Conversation {
    pub system_prompt: String,
    pub history: Vec<Message>,
}

struct SessionState {
    system_prompt: String,
    history: Vec<Message>,
}

/// Maps caller-supplied opaque session identifiers to in-memory conversation
/// state. First use of an identifier creates the state with the fixed system
/// prompt and empty history; later uses return it unchanged. No ownership
/// check binds an identifier to a caller: any party holding the same string
/// extends the same conversation.
///
/// One mutex over the whole map serializes lookup-or-insert; it is held only
/// for the map operation, never across a provider call.
pub struct SessionRegistry {
    system_prompt: String,
    sessions: Mutex<HashMap<String, SessionState>>,
}

impl SessionRegistry {
    pub fn new(system_prompt: String) -> Self {
        Self {
            system_prompt,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve-or-create, returning a snapshot the caller can extend without
    /// touching the shared state.
    pub fn resolve(&self, session_id: &str) -> Conversation {
        let mut sessions = self.sessions.lock().unwrap();
        let state = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| SessionState {
                system_prompt: self.system_prompt.clone(),
                history: Vec::new(),
            });
        Conversation {
            system_prompt: state.system_prompt.clone(),
            history: state.history.clone(),
        }
    }

    /// Record one completed exchange. Called only after the provider has
    /// replied successfully, so a failed call leaves history untouched.
    pub fn commit(&self, session_id: &str, user_message: &str, assistant_reply: &str) {
        let mut sessions = self.sessions.lock().unwrap();
        let state = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| SessionState {
                system_prompt: self.system_prompt.clone(),
                history: Vec::new(),
            });
        state.history.push(Message::user(user_message));
        state.history.push(Message::assistant(assistant_reply));
    }

    pub fn history_len(&self, session_id: &str) -> usize {
        let sessions = self.sessions.lock().unwrap();
        sessions.get(session_id).map(|s| s.history.len()).unwrap_or(0)
    }
}
