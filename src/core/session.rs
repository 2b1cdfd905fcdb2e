//! Per-invocation session state
//!
//! The interactive handlers take an explicit [`Session`] instead of reading
//! ambient globals: who the user is, which project is active, and the chat
//! transcript accumulated during the invocation.

use crate::chat::ChatMessage;

/// Greeting shown when a chat session starts
pub const CHAT_GREETING: &str = "Hello! I'm your research assistant. How can I help you today? \
You can ask me to explain research papers or anything else you're curious about!";

/// Message shown after the transcript is cleared
pub const CHAT_CLEARED: &str = "Conversation cleared! How can I assist you now?";

/// Request-scoped state threaded through interactive handlers
#[derive(Debug)]
pub struct Session {
    /// Display name from the profile, if one is set
    pub user_name: Option<String>,

    /// Title of the active project, if one was selected
    pub active_project: Option<String>,

    /// Chat transcript, oldest first. Starts with the assistant greeting.
    pub messages: Vec<ChatMessage>,
}

impl Session {
    pub fn new(user_name: Option<String>, active_project: Option<String>) -> Self {
        Self {
            user_name,
            active_project,
            messages: vec![ChatMessage::assistant(CHAT_GREETING)],
        }
    }

    /// Append a user message to the transcript
    pub fn push_user(&mut self, content: &str) {
        self.messages.push(ChatMessage::user(content));
    }

    /// Append an assistant message to the transcript.
    ///
    /// Fallback text on service failure goes through here too, so the
    /// transcript stays consistent with what was shown.
    pub fn push_assistant(&mut self, content: &str) {
        self.messages.push(ChatMessage::assistant(content));
    }

    /// Reset the transcript to a fresh greeting
    pub fn clear(&mut self) {
        self.messages = vec![ChatMessage::assistant(CHAT_CLEARED)];
    }
}
