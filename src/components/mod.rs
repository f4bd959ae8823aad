//! Page components.

pub mod chat_widget;
pub mod contact_form;
pub mod particle_field;
pub mod testimonials;
