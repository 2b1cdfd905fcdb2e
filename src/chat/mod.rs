//! Research-assistant chat
//!
//! Forwards the conversation to an OpenAI-compatible chat-completion API.
//! The request is blocking and non-streaming; the only consumed field is the
//! top completion's message text. Failures are not retried: the caller
//! substitutes [`FALLBACK_REPLY`] and keeps the transcript consistent.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Config;

/// System prompt sent ahead of the conversation history
pub const SYSTEM_PROMPT: &str = "You are a helpful research assistant. Provide clear, concise \
explanations about research topics and papers when asked.";

/// Static reply shown (and recorded) when the service is unavailable
pub const FALLBACK_REPLY: &str = "I apologize, but I'm having trouble generating a response \
right now. Please try again in a moment.";

const DEFAULT_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_MODEL: &str = "deepseek-r1-distill-qwen-32b";

/// One message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: &str) -> Self {
        Self {
            role: "system".to_string(),
            content: content.to_string(),
        }
    }

    pub fn user(content: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: content.to_string(),
        }
    }

    pub fn assistant(content: &str) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.to_string(),
        }
    }
}

#[derive(Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Errors from the chat-completion call
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("chat API credential not configured. Set MRT_API_KEY or 'api_key' in the config file.")]
    MissingCredential,

    #[error("chat request failed: {0}")]
    Request(String),

    #[error("chat service returned an unexpected response: {0}")]
    MalformedResponse(String),
}

/// Client for the chat-completion service
pub struct ChatClient {
    http: reqwest::blocking::Client,
    url: String,
    model: String,
    api_key: String,
}

impl ChatClient {
    /// Build a client from config. Fails when no credential is configured.
    pub fn from_config(config: &Config) -> Result<Self, ChatError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or(ChatError::MissingCredential)?;

        Ok(Self {
            http: reqwest::blocking::Client::new(),
            url: config
                .chat_url
                .clone()
                .unwrap_or_else(|| DEFAULT_URL.to_string()),
            model: config
                .chat_model
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key,
        })
    }

    /// Request a single completion for the system prompt plus full history
    pub fn complete(&self, history: &[ChatMessage]) -> Result<String, ChatError> {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages: build_messages(history),
            stream: false,
        };

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(|e| ChatError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ChatError::Request(format!(
                "service responded with status {}",
                response.status()
            )));
        }

        let completion: CompletionResponse = response
            .json()
            .map_err(|e| ChatError::MalformedResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ChatError::MalformedResponse("no choices returned".to_string()))
    }
}

/// System prompt followed by the full conversation history
fn build_messages(history: &[ChatMessage]) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(ChatMessage::system(SYSTEM_PROMPT));
    messages.extend_from_slice(history);
    messages
}
