//! Conversation records and the webhook wire format.

use serde::{Deserialize, Serialize};

/// Author of a conversation message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
	User,
	Assistant,
}

/// One entry of the conversation log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
	pub role: Role,
	pub content: String,
}

impl ChatMessage {
	pub fn user(content: impl Into<String>) -> Self {
		Self {
			role: Role::User,
			content: content.into(),
		}
	}

	pub fn assistant(content: impl Into<String>) -> Self {
		Self {
			role: Role::Assistant,
			content: content.into(),
		}
	}
}

/// JSON body POSTed to the assistant webhook for every user turn.
///
/// `query` and `message` carry the same text; the webhook reads either.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
	pub query: String,
	pub message: String,
	pub sender: &'static str,
	#[serde(rename = "type")]
	pub kind: &'static str,
	/// ISO-8601 send time.
	pub timestamp: String,
	/// Trailing window of the log, oldest first.
	pub conversation_history: Vec<ChatMessage>,
}

impl ChatRequest {
	pub fn new(text: &str, timestamp: String, conversation_history: Vec<ChatMessage>) -> Self {
		Self {
			query: text.to_string(),
			message: text.to_string(),
			sender: "user",
			kind: "message",
			timestamp,
			conversation_history,
		}
	}
}
