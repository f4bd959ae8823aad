//! Inline formatting for chat bubbles.
//!
//! Assistant replies come from a remote service and are untrusted. Only two
//! constructs are recognized: `**bold**` runs and line breaks. Everything else,
//! angle brackets included, stays literal text and is rendered as text nodes.

/// A piece of formatted message content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Span {
	Text(String),
	Bold(String),
	LineBreak,
}

/// Split message content into renderable spans.
///
/// Bold markers pair up left to right within a line; an unmatched `**` is
/// kept as literal text.
pub fn format_spans(content: &str) -> Vec<Span> {
	let mut spans = Vec::new();
	for (i, line) in content.split('\n').enumerate() {
		if i > 0 {
			spans.push(Span::LineBreak);
		}
		push_line(line, &mut spans);
	}
	spans
}

fn push_line(line: &str, spans: &mut Vec<Span>) {
	let mut rest = line;
	while let Some(open) = rest.find("**") {
		let after_open = &rest[open + 2..];
		let Some(close) = after_open.find("**") else {
			break;
		};
		push_text(&rest[..open], spans);
		let bold = &after_open[..close];
		if !bold.is_empty() {
			spans.push(Span::Bold(bold.to_string()));
		}
		rest = &after_open[close + 2..];
	}
	push_text(rest, spans);
}

fn push_text(text: &str, spans: &mut Vec<Span>) {
	if text.is_empty() {
		return;
	}
	// Merge with a preceding text span so an unmatched marker doesn't split text.
	if let Some(Span::Text(prev)) = spans.last_mut() {
		prev.push_str(text);
	} else {
		spans.push(Span::Text(text.to_string()));
	}
}
