//! Chat widget configuration.

use serde::Deserialize;

/// Webhook the assistant listens on when the page does not override it.
pub const DEFAULT_ENDPOINT: &str =
	"https://thayneautomations.app.n8n.cloud/webhook/ai-agent-path-Ava-User-prompt";

/// Everything the chat session needs to know about its environment.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
	/// Assistant webhook URL.
	pub endpoint: String,
	/// Maximum number of trailing messages sent as context.
	pub history_window: usize,
	/// Milliseconds between status label rotations while a reply is pending.
	pub status_interval_ms: u32,
	/// Labels shown, in order, while a reply is pending.
	pub status_phrases: Vec<String>,
	/// Upper bound on a single webhook round trip; 0 waits indefinitely.
	pub request_timeout_ms: u32,
	/// First assistant message, added when the widget is first opened.
	pub greeting: String,
	/// First-turn example questions.
	pub suggestions: Vec<String>,
}

impl Default for ChatConfig {
	fn default() -> Self {
		Self {
			endpoint: DEFAULT_ENDPOINT.to_string(),
			history_window: 10,
			status_interval_ms: 2500,
			status_phrases: [
				"Stoking the forge...",
				"Heating the metal...",
				"Hammering out a reply...",
				"Tempering the answer...",
				"Quenching the steel...",
			]
			.into_iter()
			.map(String::from)
			.collect(),
			request_timeout_ms: 30_000,
			greeting: "Welcome to IronForge Automations! ⚒️ I'm here to help you learn about our \
			           automation solutions and how we can streamline your business processes. \
			           What can I help you with today?"
				.to_string(),
			suggestions: [
				"What types of automation solutions do you offer?",
				"How can you help streamline my manufacturing processes?",
				"What's your approach to implementing AI in traditional businesses?",
			]
			.into_iter()
			.map(String::from)
			.collect(),
		}
	}
}
