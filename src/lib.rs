//! forge-site: single-page site for an automation consultancy.
//!
//! This crate renders the page as a WASM application: an ambient particle
//! background behind the hero, a testimonial carousel, a contact form posting
//! to a hosted form service, and a chat widget relaying questions to a
//! webhook-driven assistant.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;
pub mod config;

pub use components::chat_widget::{ChatConfig, ChatSession, ChatWidget};
pub use components::contact_form::{ContactConfig, ContactForm};
pub use components::particle_field::{ParticleCanvas, ParticleField, ParticleStyle};
pub use components::testimonials::{Testimonial, Testimonials};
pub use config::{SiteConfig, load_site_config};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("forge-site: logging initialized");
}

/// Main application component.
/// Loads page configuration from the DOM and lays out the sections.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let SiteConfig {
		chat,
		particles,
		contact,
		testimonials,
	} = load_site_config();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="IronForge Automations" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<main>
			<section id="home" class="hero">
				<ParticleCanvas config=particles />
				<div class="hero__content">
					<h1>"Forging the Future of Your Business"</h1>
					<p class="hero__subtitle">"Automation and AI for the businesses that build things."</p>
					<a class="hero__cta" href="#contact">"Get in Touch"</a>
				</div>
			</section>
			<section id="testimonials" class="section">
				<h2>"What Our Clients Say"</h2>
				<Testimonials items=testimonials />
			</section>
			<section id="contact" class="section">
				<h2>"Get in Touch"</h2>
				<ContactForm config=contact />
			</section>
		</main>
		<ChatWidget config=chat />
	}
}
