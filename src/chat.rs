use async_trait::async_trait;
use ollama_rs::Ollama;
use ollama_rs::generation::chat::request::ChatMessageRequest;
use ollama_rs::generation::chat::ChatMessage as OllamaMessage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instruction text that steers the model, independent of user content
    System,
    /// Per-request content the model should respond to
    User,
}

/// A single role-tagged message sent to the chat endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who the message speaks as
    pub role: Role,
    /// Message body
    pub content: String,
}

impl ChatMessage {
    /// Creates a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Creates a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Errors from the chat endpoint
#[derive(Debug, Error)]
pub enum ChatError {
    /// The endpoint was unreachable or rejected the request
    #[error("chat request failed: {0}")]
    Request(String),

    /// The endpoint answered but returned no message content
    #[error("model returned an empty response")]
    EmptyResponse,
}

/// A chat-style language model client
///
/// Implemented by [`OllamaChat`] for a locally hosted Ollama endpoint and by
/// hand-written mocks in tests.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Sends an ordered message sequence to the given model and returns the
    /// generated content
    async fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<String, ChatError>;

    /// Lists the models installed on the endpoint
    async fn installed_models(&self) -> Result<Vec<String>, ChatError>;
}

/// Chat client backed by a locally hosted Ollama instance
pub struct OllamaChat {
    client: Ollama,
}

impl OllamaChat {
    /// Creates a client for the Ollama endpoint at the given host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            client: Ollama::new(host.into(), port),
        }
    }
}

#[async_trait]
impl ChatClient for OllamaChat {
    async fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<String, ChatError> {
        let request = ChatMessageRequest::new(
            model.to_string(),
            messages.iter().map(to_ollama_message).collect(),
        );

        let response = self
            .client
            .send_chat_messages(request)
            .await
            .map_err(|e| ChatError::Request(e.to_string()))?;

        match response.message {
            Some(message) => Ok(message.content),
            None => Err(ChatError::EmptyResponse),
        }
    }

    async fn installed_models(&self) -> Result<Vec<String>, ChatError> {
        let models = self
            .client
            .list_local_models()
            .await
            .map_err(|e| ChatError::Request(e.to_string()))?;

        Ok(models.into_iter().map(|model| model.name).collect())
    }
}

/// Converts our fixed two-field message record into the wire type
fn to_ollama_message(message: &ChatMessage) -> OllamaMessage {
    match message.role {
        Role::System => OllamaMessage::system(message.content.clone()),
        Role::User => OllamaMessage::user(message.content.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let system = ChatMessage::system("steer");
        assert_eq!(system.role, Role::System);
        assert_eq!(system.content, "steer");

        let user = ChatMessage::user("ask");
        assert_eq!(user.role, Role::User);
        assert_eq!(user.content, "ask");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let message = ChatMessage::system("s");
        let json = serde_json::to_string(&message).unwrap();
        assert_eq!(json, r#"{"role":"system","content":"s"}"#);
    }
}
