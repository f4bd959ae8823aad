//! Contact form fields, validation rules, and submission.

use std::sync::LazyLock;

use gloo_net::http::Request;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters long.";
pub const INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters long.";

/// Hosted form service configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
	/// Form id issued by the hosted service. Without it the form is disabled.
	pub form_id: Option<String>,
	/// Submission URL prefix; the form id is appended as the last path segment.
	pub base_url: String,
}

impl Default for ContactConfig {
	fn default() -> Self {
		Self {
			form_id: None,
			base_url: "https://formspree.io/f".to_string(),
		}
	}
}

impl ContactConfig {
	/// Submission URL, or `None` while the form id is unset.
	pub fn endpoint(&self) -> Option<String> {
		let id = self.form_id.as_deref().map(str::trim).filter(|id| !id.is_empty())?;
		Some(format!("{}/{id}", self.base_url.trim_end_matches('/')))
	}
}

/// One input of the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
	Name,
	Email,
	Message,
}

/// Raw form input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactFields {
	pub name: String,
	pub email: String,
	pub message: String,
}

/// Per-field validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
	pub name: Option<&'static str>,
	pub email: Option<&'static str>,
	pub message: Option<&'static str>,
}

impl FieldErrors {
	pub fn get(&self, field: Field) -> Option<&'static str> {
		match field {
			Field::Name => self.name,
			Field::Email => self.email,
			Field::Message => self.message,
		}
	}

	pub fn set(&mut self, field: Field, error: Option<&'static str>) {
		match field {
			Field::Name => self.name = error,
			Field::Email => self.email = error,
			Field::Message => self.message = error,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.name.is_none() && self.email.is_none() && self.message.is_none()
	}
}

impl ContactFields {
	pub fn get(&self, field: Field) -> &str {
		match field {
			Field::Name => &self.name,
			Field::Email => &self.email,
			Field::Message => &self.message,
		}
	}

	pub fn set(&mut self, field: Field, value: String) {
		match field {
			Field::Name => self.name = value,
			Field::Email => self.email = value,
			Field::Message => self.message = value,
		}
	}

	/// Check one field, as done when it loses focus.
	pub fn validate_field(&self, field: Field) -> Option<&'static str> {
		let value = self.get(field);
		match field {
			Field::Name => (value.chars().count() < 2).then_some(NAME_TOO_SHORT),
			Field::Email => (!EMAIL.is_match(value)).then_some(INVALID_EMAIL),
			Field::Message => (value.chars().count() < 10).then_some(MESSAGE_TOO_SHORT),
		}
	}

	/// Check every field; the fields themselves are the submission on success.
	pub fn validate(&self) -> Result<&Self, FieldErrors> {
		let mut errors = FieldErrors::default();
		for field in [Field::Name, Field::Email, Field::Message] {
			errors.set(field, self.validate_field(field));
		}
		if errors.is_empty() { Ok(self) } else { Err(errors) }
	}
}

/// Lifecycle of a submission attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
	#[default]
	Idle,
	Submitting,
	Succeeded,
	Failed,
}

/// Why the hosted service did not accept a submission.
#[derive(Debug, Error)]
pub enum ContactError {
	#[error("request failed: {0}")]
	Network(String),
	#[error("form service answered {0}")]
	Rejected(u16),
}

/// POST validated fields to the hosted form service.
pub async fn submit(endpoint: &str, fields: &ContactFields) -> Result<(), ContactError> {
	let response = Request::post(endpoint)
		.header("Accept", "application/json")
		.json(fields)
		.map_err(|e| ContactError::Network(e.to_string()))?
		.send()
		.await
		.map_err(|e| ContactError::Network(e.to_string()))?;
	if response.ok() {
		Ok(())
	} else {
		Err(ContactError::Rejected(response.status()))
	}
}
