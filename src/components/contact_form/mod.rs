//! Contact form submitted to a hosted form-processing service.

mod component;
mod form;

pub use component::ContactForm;
pub use form::{
	ContactConfig, ContactError, ContactFields, Field, FieldErrors, SubmitState, submit,
};
