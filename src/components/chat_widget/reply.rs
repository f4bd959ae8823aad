//! Mapping of webhook reply bodies onto assistant text.
//!
//! The webhook has answered in several shapes over time. Each accepted shape
//! has its own extractor; they are tried in order and the first non-empty
//! string wins.

use serde_json::Value;

/// Shown when the body parsed but matched no known shape.
pub const UNRECOGNIZED_REPLY: &str =
	"I've received your message but I'm having trouble processing it. Please try again.";

/// Shown when the request itself failed.
pub const CONNECTION_APOLOGY: &str = "Sorry, I'm having trouble connecting. Please try again later.";

type Extractor = fn(&Value) -> Option<&str>;

fn non_empty(value: Option<&Value>) -> Option<&str> {
	value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// `[{ "text": "..." }, ...]`
pub fn first_item_text(body: &Value) -> Option<&str> {
	non_empty(body.as_array()?.first()?.get("text"))
}

/// `{ "aiResponse": "..." }`
pub fn ai_response_field(body: &Value) -> Option<&str> {
	non_empty(body.as_object()?.get("aiResponse"))
}

/// `{ "response": "..." }`
pub fn response_field(body: &Value) -> Option<&str> {
	non_empty(body.as_object()?.get("response"))
}

/// `{ "text": "..." }`
pub fn text_field(body: &Value) -> Option<&str> {
	non_empty(body.as_object()?.get("text"))
}

/// Accepted reply shapes, in priority order.
pub const EXTRACTORS: [Extractor; 4] = [
	first_item_text,
	ai_response_field,
	response_field,
	text_field,
];

/// Pick the assistant text out of a reply body.
pub fn extract_reply(body: &Value) -> Option<&str> {
	EXTRACTORS.iter().find_map(|extract| extract(body))
}
