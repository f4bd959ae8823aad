//! Leptos component for the contact form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;

use super::form::{ContactConfig, ContactFields, Field, FieldErrors, SubmitState, submit};

/// Validated contact form posting to a hosted form service.
///
/// Fields are validated when they lose focus and again on submit. Without a
/// configured form id every input is disabled and a notice explains why.
#[component]
pub fn ContactForm(#[prop(optional)] config: Option<ContactConfig>) -> impl IntoView {
	let endpoint = config.unwrap_or_default().endpoint();
	let configured = endpoint.is_some();
	let fields = RwSignal::new(ContactFields::default());
	let errors = RwSignal::new(FieldErrors::default());
	let state = RwSignal::new(SubmitState::Idle);

	let validate_on_blur = move |field: Field| {
		let error = fields.with(|f| f.validate_field(field));
		errors.update(|e| e.set(field, error));
	};

	let on_submit = move |ev: leptos::ev::SubmitEvent| {
		ev.prevent_default();
		let Some(endpoint) = endpoint.clone() else {
			warn!("forge-site: contact form submitted without a form id");
			return;
		};
		if state.get_untracked() == SubmitState::Submitting {
			return;
		}
		let snapshot = fields.get_untracked();
		if let Err(found) = snapshot.validate() {
			errors.set(found);
			return;
		}
		errors.set(FieldErrors::default());
		state.set(SubmitState::Submitting);

		spawn_local(async move {
			match submit(&endpoint, &snapshot).await {
				Ok(()) => {
					fields.try_set(ContactFields::default());
					state.try_set(SubmitState::Succeeded);
				}
				Err(e) => {
					warn!("forge-site: contact submission failed: {e}");
					state.try_set(SubmitState::Failed);
				}
			}
		});
	};

	let input_disabled = move || !configured;
	let submit_disabled = move || !configured || state.get() == SubmitState::Submitting;

	let field_input = move |field: Field, id: &'static str, label: &'static str, kind: &'static str| {
		let error_id = format!("{id}-error");
		let describedby = error_id.clone();
		let on_input = move |ev: leptos::ev::Event| {
			let value = event_target_value(&ev);
			fields.update(|f| f.set(field, value));
		};
		let value = move || fields.with(|f| f.get(field).to_string());
		let invalid = move || errors.with(|e| e.get(field).is_some());
		let control = if kind == "textarea" {
			view! {
				<textarea
					id=id
					rows="5"
					class="contact-form__input"
					class:contact-form__input--invalid=invalid
					aria-invalid=move || invalid().to_string()
					aria-describedby=describedby
					disabled=input_disabled
					prop:value=value
					on:input=on_input
					on:blur=move |_| validate_on_blur(field)
				></textarea>
			}
			.into_any()
		} else {
			view! {
				<input
					id=id
					type=kind
					class="contact-form__input"
					class:contact-form__input--invalid=invalid
					aria-invalid=move || invalid().to_string()
					aria-describedby=describedby
					disabled=input_disabled
					prop:value=value
					on:input=on_input
					on:blur=move |_| validate_on_blur(field)
				/>
			}
			.into_any()
		};
		view! {
			<div class="contact-form__field">
				<label for=id class="contact-form__label">
					{label}
				</label>
				{control}
				{move || {
					errors
						.with(|e| e.get(field))
						.map(|msg| {
							view! {
								<p id=error_id.clone() class="contact-form__error">
									{msg}
								</p>
							}
						})
				}}
			</div>
		}
	};

	view! {
		<form class="contact-form" novalidate=true on:submit=on_submit>
			{(!configured)
				.then(|| {
					view! {
						<div class="contact-form__notice contact-form__notice--warning">
							"Contact form is currently unavailable. Configuration is pending."
						</div>
					}
				})}
			{move || {
				(state.get() == SubmitState::Succeeded)
					.then(|| {
						view! {
							<div class="contact-form__notice contact-form__notice--success">
								"Thank you! Your message has been sent successfully."
							</div>
						}
					})
			}}
			{move || {
				(state.get() == SubmitState::Failed)
					.then(|| {
						view! {
							<div class="contact-form__notice contact-form__notice--error">
								"Something went wrong. Please try again."
							</div>
						}
					})
			}}
			{field_input(Field::Name, "name", "Full Name", "text")}
			{field_input(Field::Email, "email", "Email Address", "email")}
			{field_input(Field::Message, "message", "Message", "textarea")}
			<div class="contact-form__actions">
				<button type="submit" class="contact-form__submit" disabled=submit_disabled>
					{move || {
						if state.get() == SubmitState::Submitting { "Sending..." } else { "Send Message" }
					}}
				</button>
			</div>
		</form>
	}
}
