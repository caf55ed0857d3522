// Assist.chat transcript
// The window keeps its own history; replies come from the chat relay.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;
use uuid::Uuid;

pub const WELCOME_MESSAGE: &str = "👋 Hey! I can tell you about Dayyan's projects, skills, \
experience, or personal interests. Try asking me something like \"Tell me about your projects\" \
or \"What are your skills?\"";

pub const FALLBACK_REPLY: &str = "I'm still working on this feature. Please check back soon!";

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("relay request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("relay returned HTTP {0}")]
    Status(u16),
    #[error("relay reply had no message content")]
    MissingContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    /// A message is waiting on the relay
    awaiting_reply: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::new(Sender::Bot, WELCOME_MESSAGE)],
            awaiting_reply: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    /// Record the user's message. Blank input is ignored (returns None),
    /// otherwise returns the text to send to the relay.
    pub fn submit(&mut self, input: &str) -> Option<String> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::new(Sender::User, text));
        self.awaiting_reply = true;
        Some(text.to_string())
    }

    /// Append the bot's answer; any failure becomes the fallback reply
    pub fn receive(&mut self, reply: Result<String, ChatError>) -> &ChatMessage {
        let text = match reply {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("[Chat] relay unavailable: {}", e);
                FALLBACK_REPLY.to_string()
            }
        };
        self.awaiting_reply = false;
        self.messages.push(ChatMessage::new(Sender::Bot, text));
        &self.messages[self.messages.len() - 1]
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

/// `choices[0].message.content` of a chat-completion response
pub fn extract_reply(body: &Value) -> Option<String> {
    body.get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
        .map(str::to_string)
}

pub async fn ask_relay(
    http: &reqwest::Client,
    relay_url: &str,
    message: &str,
) -> Result<String, ChatError> {
    let response = http
        .post(relay_url)
        .json(&json!({ "message": message }))
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(ChatError::Status(response.status().as_u16()));
    }
    let body = response.json::<Value>().await?;
    extract_reply(&body).ok_or(ChatError::MissingContent)
}
