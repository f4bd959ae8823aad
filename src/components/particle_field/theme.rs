//! Colors and tunables for the ambient particle field.

use serde::Deserialize;
use thiserror::Error;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

/// A CSS color string that could not be understood.
#[derive(Debug, Error, PartialEq)]
#[error("unsupported color `{0}`, expected #RRGGBB")]
pub struct ColorParseError(pub String);

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Parses `#RRGGBB` hex notation.
	pub fn from_hex(color_str: &str) -> Result<Self, ColorParseError> {
		let invalid = || ColorParseError(color_str.to_string());
		let hex = color_str.strip_prefix('#').ok_or_else(invalid)?;
		if hex.len() != 6 || !hex.is_ascii() {
			return Err(invalid());
		}
		let channel = |range: std::ops::Range<usize>| {
			u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
		};
		Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

impl TryFrom<String> for Color {
	type Error = ColorParseError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Color::from_hex(&value)
	}
}

/// Particle effect configuration.
///
/// The defaults reproduce the site's hero background; pages may override any
/// of them through the `particles` section of the site configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ParticleStyle {
	/// Number of particles allocated on every (re)initialization
	pub count: usize,
	/// Smallest starting radius (inclusive)
	pub radius_min: f64,
	/// Largest starting radius (exclusive)
	pub radius_max: f64,
	/// Per-axis speed bound; velocities are drawn from `[-speed, speed)`
	pub speed: f64,
	/// Radius lost per frame
	pub decay: f64,
	/// Radius below which particles stop shrinking
	pub radius_floor: f64,
	/// Color given to most particles
	pub neutral_color: Color,
	/// Highlight color
	pub accent_color: Color,
	/// Probability that a particle takes the accent color
	pub accent_ratio: f64,
}

impl Default for ParticleStyle {
	fn default() -> Self {
		Self {
			count: 70,
			radius_min: 1.0,
			radius_max: 3.0,
			speed: 0.5,
			decay: 0.01,
			radius_floor: 0.2,
			neutral_color: Color::rgb(71, 85, 105),  // slate-600
			accent_color: Color::rgb(251, 146, 60), // orange-400
			accent_ratio: 0.1,
		}
	}
}
