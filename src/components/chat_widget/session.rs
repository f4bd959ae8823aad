//! Conversation state for the chat widget.
//!
//! A session moves between three states:
//!
//! ```text
//! Closed --open--> Open/Idle --begin_send--> Open/Pending
//!   ^                 |  ^                        |
//!   +------close------+  +---------settle---------+
//! ```
//!
//! Closing keeps the log and the draft; reopening never reseeds the greeting.
//! Sending is split at its only suspension point: [`ChatSession::begin_send`]
//! records the user turn and produces the request, the caller delivers it, and
//! [`ChatSession::settle`] records the outcome. At most one request is in
//! flight because `begin_send` refuses to run while a reply is pending.

use log::warn;
use serde_json::Value;

use super::config::ChatConfig;
use super::reply::{CONNECTION_APOLOGY, UNRECOGNIZED_REPLY, extract_reply};
use super::transport::ChatError;
use super::types::{ChatMessage, ChatRequest};

/// What a keypress in the compose box should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
	/// Send the draft and suppress the default newline.
	Send,
	/// Let the browser handle the key.
	Default,
}

/// Enter sends; Shift+Enter composes a multi-line message.
pub fn submit_key_action(key: &str, shift_held: bool) -> KeyAction {
	if key == "Enter" && !shift_held {
		KeyAction::Send
	} else {
		KeyAction::Default
	}
}

/// Client-held chat conversation.
#[derive(Clone, Debug)]
pub struct ChatSession {
	config: ChatConfig,
	messages: Vec<ChatMessage>,
	draft: String,
	open: bool,
	pending: bool,
	status_index: usize,
}

impl ChatSession {
	pub fn new(config: ChatConfig) -> Self {
		Self {
			config,
			messages: Vec::new(),
			draft: String::new(),
			open: false,
			pending: false,
			status_index: 0,
		}
	}

	pub fn config(&self) -> &ChatConfig {
		&self.config
	}

	pub fn messages(&self) -> &[ChatMessage] {
		&self.messages
	}

	pub fn draft(&self) -> &str {
		&self.draft
	}

	pub fn is_open(&self) -> bool {
		self.open
	}

	pub fn is_pending(&self) -> bool {
		self.pending
	}

	/// Show the chat window, greeting the visitor on first open.
	pub fn open(&mut self) {
		self.open = true;
		if self.messages.is_empty() {
			self.messages
				.push(ChatMessage::assistant(self.config.greeting.clone()));
		}
	}

	/// Hide the chat window. Log and draft survive for the next open.
	pub fn close(&mut self) {
		self.open = false;
	}

	pub fn update_draft(&mut self, text: impl Into<String>) {
		self.draft = text.into();
	}

	/// Whether the first-turn suggestions are on offer.
	pub fn show_suggestions(&self) -> bool {
		self.messages.len() <= 1 && self.draft.trim().is_empty()
	}

	pub fn suggestions(&self) -> &[String] {
		&self.config.suggestions
	}

	/// Copy a suggestion into the draft. Ignored once suggestions are withdrawn.
	pub fn select_suggestion(&mut self, text: impl Into<String>) {
		if self.show_suggestions() {
			self.update_draft(text);
		}
	}

	pub fn can_send(&self) -> bool {
		!self.pending && !self.draft.trim().is_empty()
	}

	/// Record the user's turn and build the webhook request for it.
	///
	/// Returns `None` without touching any state when the draft is blank or a
	/// reply is already pending. Otherwise the trimmed draft is appended to the
	/// log, the draft is cleared, the session becomes pending, and the request
	/// carries the trailing history window, which includes the new message.
	pub fn begin_send(&mut self, timestamp: impl Into<String>) -> Option<ChatRequest> {
		if !self.can_send() {
			return None;
		}
		let text = self.draft.trim().to_string();
		self.draft.clear();
		self.messages.push(ChatMessage::user(text.clone()));
		self.pending = true;
		self.status_index = 0;

		Some(ChatRequest::new(&text, timestamp.into(), self.history_window().to_vec()))
	}

	/// Most recent messages, oldest first, bounded by the configured window.
	pub fn history_window(&self) -> &[ChatMessage] {
		let start = self.messages.len().saturating_sub(self.config.history_window);
		&self.messages[start..]
	}

	/// Record the outcome of the request issued by [`Self::begin_send`].
	///
	/// Failures become an apology message; unrecognized bodies become a
	/// generic "trouble processing" message. Either way the session leaves
	/// the pending state and can send again.
	pub fn settle(&mut self, outcome: Result<Value, ChatError>) -> &ChatMessage {
		let content = match outcome {
			Ok(body) => match extract_reply(&body) {
				Some(text) => text.to_string(),
				None => {
					warn!("forge-site: unexpected chat reply shape: {body}");
					UNRECOGNIZED_REPLY.to_string()
				}
			},
			Err(e) => {
				warn!("forge-site: chat request failed: {e}");
				CONNECTION_APOLOGY.to_string()
			}
		};
		self.messages.push(ChatMessage::assistant(content));
		self.pending = false;
		self.status_index = 0;
		&self.messages[self.messages.len() - 1]
	}

	/// Rotating label shown while a reply is pending.
	pub fn status_label(&self) -> Option<&str> {
		if !self.pending {
			return None;
		}
		let phrases = &self.config.status_phrases;
		phrases
			.get(self.status_index % phrases.len().max(1))
			.map(String::as_str)
	}

	/// Move the pending label to the next phrase, wrapping at the end.
	pub fn advance_status(&mut self) {
		if self.pending && !self.config.status_phrases.is_empty() {
			self.status_index = (self.status_index + 1) % self.config.status_phrases.len();
		}
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use futures::executor::block_on;
	use serde_json::json;

	use super::super::transport::ChatTransport;
	use super::super::types::Role;
	use super::*;

	const TS: &str = "2026-10-19T09:30:00.000Z";

	fn session() -> ChatSession {
		ChatSession::new(ChatConfig::default())
	}

	fn sent(session: &mut ChatSession, text: &str) -> ChatRequest {
		session.update_draft(text);
		session.begin_send(TS).expect("draft should be sendable")
	}

	/// Transport double that answers with a canned outcome and counts calls.
	struct MockTransport {
		reply: fn() -> Result<Value, ChatError>,
		calls: Cell<usize>,
	}

	impl MockTransport {
		fn new(reply: fn() -> Result<Value, ChatError>) -> Self {
			Self {
				reply,
				calls: Cell::new(0),
			}
		}
	}

	impl ChatTransport for MockTransport {
		async fn send(&self, _request: &ChatRequest) -> Result<Value, ChatError> {
			self.calls.set(self.calls.get() + 1);
			(self.reply)()
		}
	}

	/// The widget's send flow with the browser bits stripped out.
	async fn send_turn(session: &mut ChatSession, transport: &impl ChatTransport) {
		let Some(request) = session.begin_send(TS) else {
			return;
		};
		let outcome = transport.send(&request).await;
		session.settle(outcome);
	}

	#[test]
	fn first_open_seeds_greeting_once() {
		let mut s = session();
		assert!(!s.is_open());
		s.open();
		assert!(s.is_open());
		assert_eq!(s.messages().len(), 1);
		assert_eq!(s.messages()[0].role, Role::Assistant);
		assert_eq!(s.messages()[0].content, ChatConfig::default().greeting);

		s.open();
		assert_eq!(s.messages().len(), 1);
	}

	#[test]
	fn close_keeps_log_and_draft() {
		let mut s = session();
		s.open();
		s.update_draft("half-written");
		s.close();
		assert!(!s.is_open());
		assert_eq!(s.draft(), "half-written");

		s.open();
		assert_eq!(s.messages().len(), 1);
		assert_eq!(s.draft(), "half-written");
	}

	#[test]
	fn blank_draft_is_not_sent() {
		let mut s = session();
		s.open();
		for draft in ["", "   ", "\n\t "] {
			s.update_draft(draft);
			assert!(!s.can_send());
			assert!(s.begin_send(TS).is_none());
			assert_eq!(s.messages().len(), 1);
			assert!(!s.is_pending());
		}
	}

	#[test]
	fn begin_send_records_trimmed_turn() {
		let mut s = session();
		s.open();
		let request = sent(&mut s, "  Do you build chatbots?  \n");

		assert_eq!(request.query, "Do you build chatbots?");
		assert_eq!(request.message, "Do you build chatbots?");
		assert_eq!(request.timestamp, TS);
		assert_eq!(s.draft(), "");
		assert!(s.is_pending());
		assert_eq!(s.messages().last(), Some(&ChatMessage::user("Do you build chatbots?")));
		// The window already contains the message being sent.
		assert_eq!(request.conversation_history, s.messages());
	}

	#[test]
	fn send_while_pending_is_rejected() {
		let mut s = session();
		s.open();
		sent(&mut s, "first");
		let log_len = s.messages().len();

		s.update_draft("second");
		assert!(!s.can_send());
		assert!(s.begin_send(TS).is_none());
		assert_eq!(s.messages().len(), log_len);
		assert_eq!(s.draft(), "second");
	}

	#[test]
	fn rapid_double_send_dispatches_once() {
		let mut s = session();
		let transport = MockTransport::new(|| Ok(json!({ "text": "ok" })));
		s.open();
		s.update_draft("hello");

		let first = s.begin_send(TS);
		let second = s.begin_send(TS);
		assert!(first.is_some());
		assert!(second.is_none());

		for request in [first, second].into_iter().flatten() {
			let outcome = block_on(transport.send(&request));
			s.settle(outcome);
		}
		assert_eq!(transport.calls.get(), 1);
		assert_eq!(s.messages().len(), 3);
	}

	#[test]
	fn array_reply_is_appended() {
		let mut s = session();
		let transport = MockTransport::new(|| Ok(json!([{ "text": "hello" }])));
		s.open();
		s.update_draft("hi");
		block_on(send_turn(&mut s, &transport));

		assert_eq!(s.messages().last(), Some(&ChatMessage::assistant("hello")));
		assert!(!s.is_pending());
	}

	#[test]
	fn ai_response_reply_is_appended() {
		let mut s = session();
		let transport = MockTransport::new(|| Ok(json!({ "aiResponse": "hi there" })));
		s.open();
		s.update_draft("hi");
		block_on(send_turn(&mut s, &transport));

		assert_eq!(s.messages().last().unwrap().content, "hi there");
	}

	#[test]
	fn unknown_reply_shape_gets_fallback() {
		let mut s = session();
		let transport = MockTransport::new(|| Ok(json!({ "output": "???" })));
		s.open();
		s.update_draft("hi");
		block_on(send_turn(&mut s, &transport));

		assert_eq!(s.messages().last(), Some(&ChatMessage::assistant(UNRECOGNIZED_REPLY)));
		assert!(!s.is_pending());
	}

	#[test]
	fn network_failure_becomes_apology() {
		let mut s = session();
		let transport =
			MockTransport::new(|| Err(ChatError::Network("connection refused".into())));
		s.open();
		s.update_draft("hi");
		block_on(send_turn(&mut s, &transport));

		assert_eq!(s.messages().last(), Some(&ChatMessage::assistant(CONNECTION_APOLOGY)));
		assert!(!s.is_pending());
		assert!(s.status_label().is_none());

		// The session stays usable after a failure.
		s.update_draft("retry");
		assert!(s.can_send());
	}

	#[test]
	fn decode_and_timeout_failures_become_apology() {
		for error in [ChatError::Decode("expected value".into()), ChatError::Timeout(30_000)] {
			let mut s = session();
			s.open();
			sent(&mut s, "hi");
			let reply = s.settle(Err(error));
			assert_eq!(reply.content, CONNECTION_APOLOGY);
			assert!(!s.is_pending());
		}
	}

	#[test]
	fn history_window_is_bounded_and_ordered() {
		let mut s = session();
		s.open();
		let mut last_request = None;
		for turn in 0..50 {
			let request = sent(&mut s, &format!("question {turn}"));
			assert!(request.conversation_history.len() <= 10);
			s.settle(Ok(json!({ "text": format!("answer {turn}") })));
			last_request = Some(request);
		}

		let request = last_request.unwrap();
		let log = s.messages();
		// Window was cut before the final answer arrived.
		assert_eq!(request.conversation_history, log[log.len() - 11..log.len() - 1]);
		assert_eq!(
			request.conversation_history.last(),
			Some(&ChatMessage::user("question 49"))
		);
		assert_eq!(
			request.conversation_history.first(),
			Some(&ChatMessage::assistant("answer 44"))
		);
	}

	#[test]
	fn suggestions_offered_only_for_first_turn() {
		let mut s = session();
		s.open();
		assert!(s.show_suggestions());
		assert_eq!(s.suggestions().len(), 3);

		let suggestion = s.suggestions()[1].clone();
		s.select_suggestion(suggestion.clone());
		assert_eq!(s.draft(), suggestion);
		assert!(!s.show_suggestions());

		s.begin_send(TS);
		s.settle(Ok(json!({ "text": "sure" })));
		assert!(!s.show_suggestions());

		s.select_suggestion("ignored");
		assert_eq!(s.draft(), "");
	}

	#[test]
	fn status_label_rotates_only_while_pending() {
		let mut s = session();
		let phrases = s.config().status_phrases.clone();
		s.open();
		assert!(s.status_label().is_none());
		s.advance_status();
		assert!(s.status_label().is_none());

		sent(&mut s, "hi");
		assert_eq!(s.status_label(), Some(phrases[0].as_str()));
		for expected in phrases.iter().skip(1).chain(phrases.first()) {
			s.advance_status();
			assert_eq!(s.status_label(), Some(expected.as_str()));
		}

		s.settle(Ok(json!({ "text": "done" })));
		assert!(s.status_label().is_none());

		// A new request starts from the first phrase again.
		sent(&mut s, "again");
		assert_eq!(s.status_label(), Some(phrases[0].as_str()));
	}

	#[test]
	fn empty_phrase_list_has_no_label() {
		let mut s = ChatSession::new(ChatConfig {
			status_phrases: Vec::new(),
			..ChatConfig::default()
		});
		s.open();
		sent(&mut s, "hi");
		s.advance_status();
		assert!(s.status_label().is_none());
	}

	#[test]
	fn custom_window_size_is_honored() {
		let mut s = ChatSession::new(ChatConfig {
			history_window: 2,
			..ChatConfig::default()
		});
		s.open();
		let request = sent(&mut s, "one");
		assert_eq!(request.conversation_history.len(), 2);
		assert_eq!(request.conversation_history[0].role, Role::Assistant);
	}

	#[test]
	fn enter_sends_and_shift_enter_composes() {
		assert_eq!(submit_key_action("Enter", false), KeyAction::Send);
		assert_eq!(submit_key_action("Enter", true), KeyAction::Default);
		assert_eq!(submit_key_action("a", false), KeyAction::Default);
	}
}
