//! Leptos component for the floating assistant chat.
//!
//! State lives in a single [`ChatSession`] signal. Sending runs the session's
//! `begin_send`, hands the request to the transport on a local task, and
//! settles the session with whatever comes back. While the request is in
//! flight a `gloo-timers` interval rotates the pending status label; the
//! interval is dropped when the request settles or the widget unmounts.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::config::ChatConfig;
use super::format::{Span, format_spans};
use super::session::{ChatSession, KeyAction, submit_key_action};
use super::transport::{ChatTransport, FetchTransport};
use super::types::Role;

fn render_spans(content: &str) -> Vec<AnyView> {
	format_spans(content)
		.into_iter()
		.map(|span| match span {
			Span::Text(text) => text.into_any(),
			Span::Bold(text) => view! { <strong>{text}</strong> }.into_any(),
			Span::LineBreak => view! { <br /> }.into_any(),
		})
		.collect()
}

fn now_iso8601() -> String {
	js_sys::Date::new_0().to_iso_string().into()
}

/// Chat launcher button and conversation window.
///
/// Replies are requested from `config.endpoint`; transport failures and
/// unrecognized replies show up as assistant messages, never as errors.
#[component]
pub fn ChatWidget(#[prop(optional)] config: Option<ChatConfig>) -> impl IntoView {
	let config = config.unwrap_or_default();
	let transport = StoredValue::new(FetchTransport::new(
		config.endpoint.clone(),
		config.request_timeout_ms,
	));
	let status_interval_ms = config.status_interval_ms;
	let session = RwSignal::new(ChatSession::new(config));
	let status_timer = StoredValue::new_local(None::<Interval>);
	let messages_ref = NodeRef::<leptos::html::Div>::new();
	let input_ref = NodeRef::<leptos::html::Textarea>::new();

	let stop_status = move || {
		status_timer.try_update_value(|timer| timer.take());
	};

	let do_send = move || {
		let Some(request) = session.try_update(|s| s.begin_send(now_iso8601())).flatten() else {
			return;
		};
		status_timer.set_value(Some(Interval::new(status_interval_ms, move || {
			session.try_update(ChatSession::advance_status);
		})));

		let transport = transport.get_value();
		spawn_local(async move {
			let outcome = transport.send(&request).await;
			stop_status();
			session.try_update(|s| {
				s.settle(outcome);
			});
		});
	};

	Effect::new(move || {
		let _ = session.with(|s| s.messages().len());
		if let Some(el) = messages_ref.get() {
			el.set_scroll_top(el.scroll_height());
		}
	});

	on_cleanup(stop_status);

	let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
		if submit_key_action(&ev.key(), ev.shift_key()) == KeyAction::Send {
			ev.prevent_default();
			do_send();
		}
	};

	let messages = move || {
		session.with(|s| {
			s.messages()
				.iter()
				.map(|msg| {
					let is_user = msg.role == Role::User;
					view! {
						<div
							class="chat-widget__bubble"
							class:chat-widget__bubble--user=is_user
							class:chat-widget__bubble--assistant=!is_user
						>
							{render_spans(&msg.content)}
						</div>
					}
				})
				.collect::<Vec<_>>()
		})
	};

	let pending = move || {
		session.with(ChatSession::is_pending).then(|| {
			view! {
				<div class="chat-widget__bubble chat-widget__bubble--assistant chat-widget__bubble--pending">
					<span class="chat-widget__typing" aria-hidden="true">
						<span></span>
						<span></span>
						<span></span>
					</span>
					<span class="chat-widget__status">
						{move || session.with(|s| s.status_label().unwrap_or_default().to_string())}
					</span>
				</div>
			}
		})
	};

	let suggestions = move || {
		let offered = session.with(|s| {
			if s.show_suggestions() {
				s.suggestions().to_vec()
			} else {
				Vec::new()
			}
		});
		offered
			.into_iter()
			.map(|suggestion| {
				let label = suggestion.clone();
				view! {
					<button
						class="chat-widget__suggestion"
						on:click=move |_| {
							session.update(|s| s.select_suggestion(suggestion.clone()));
							if let Some(input) = input_ref.get() {
								let _ = input.focus();
							}
						}
					>
						{label}
					</button>
				}
			})
			.collect::<Vec<_>>()
	};

	let window = move || {
		session.with(ChatSession::is_open).then(|| {
			view! {
				<div class="chat-widget__window" role="dialog" aria-label="Chat with IronForge AI">
					<div class="chat-widget__header">
						<h3 class="chat-widget__title">"Chat with IronForge AI"</h3>
						<button
							class="chat-widget__close"
							aria-label="Close chat"
							on:click=move |_| session.update(ChatSession::close)
						>
							"×"
						</button>
					</div>
					<div class="chat-widget__messages" node_ref=messages_ref>
						{messages}
						{pending}
					</div>
					<div class="chat-widget__suggestions">{suggestions}</div>
					<div class="chat-widget__input-row">
						<textarea
							node_ref=input_ref
							class="chat-widget__input"
							rows="1"
							placeholder="Type your message..."
							prop:value=move || session.with(|s| s.draft().to_string())
							on:input=move |ev| session.update(|s| s.update_draft(event_target_value(&ev)))
							on:keydown=on_keydown
						></textarea>
						<button
							class="chat-widget__send"
							aria-label="Send message"
							disabled=move || !session.with(ChatSession::can_send)
							on:click=move |_| do_send()
						>
							"Send"
						</button>
					</div>
				</div>
			}
		})
	};

	view! {
		<div class="chat-widget">
			<button
				class="chat-widget__launcher"
				class:chat-widget__launcher--hidden=move || session.with(ChatSession::is_open)
				aria-label="Open chat"
				on:click=move |_| session.update(ChatSession::open)
			>
				"💬"
			</button>
			{window}
		</div>
	}
}
