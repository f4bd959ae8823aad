//! Page configuration embedded in the host HTML.
//!
//! The page may carry a `<script id="site-config" type="application/json">`
//! element. Every key is optional; anything left out keeps its default.

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

use crate::components::chat_widget::ChatConfig;
use crate::components::contact_form::ContactConfig;
use crate::components::particle_field::ParticleStyle;
use crate::components::testimonials::Testimonial;

/// Id of the script element holding the configuration document.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Complete runtime configuration for the site.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
	/// Chat widget endpoint and conversation tuning.
	pub chat: ChatConfig,
	/// Hero background appearance.
	pub particles: ParticleStyle,
	/// Contact form destination.
	pub contact: ContactConfig,
	/// Carousel entries, in display order.
	pub testimonials: Vec<Testimonial>,
}

impl SiteConfig {
	/// Parse a configuration document, falling back to defaults when malformed.
	pub fn from_json(json_text: &str) -> Self {
		match serde_json::from_str::<SiteConfig>(json_text) {
			Ok(config) => config,
			Err(e) => {
				warn!("forge-site: failed to parse site config: {}", e);
				Self::default()
			}
		}
	}
}

fn config_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Load the configuration from the DOM, or defaults if the page has none.
pub fn load_site_config() -> SiteConfig {
	let Some(json_text) = config_text() else {
		info!("forge-site: no #{CONFIG_ELEMENT_ID} element, using defaults");
		return SiteConfig::default();
	};
	let config = SiteConfig::from_json(&json_text);
	info!(
		"forge-site: config loaded (contact form {}, {} testimonials)",
		if config.contact.endpoint().is_some() {
			"enabled"
		} else {
			"disabled"
		},
		config.testimonials.len()
	);
	config
}
