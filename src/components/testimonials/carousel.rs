//! Slide index bookkeeping for the testimonial carousel.

use serde::Deserialize;

/// A quote shown in the carousel.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Testimonial {
	pub quote: String,
	pub author: String,
	pub company: String,
}

/// Current slide of a fixed-length carousel. Navigation wraps at both ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
	index: usize,
	len: usize,
}

impl Carousel {
	pub fn new(len: usize) -> Self {
		Self { index: 0, len }
	}

	pub fn current(&self) -> usize {
		self.index
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn next(&mut self) {
		if self.len > 0 {
			self.index = (self.index + 1) % self.len;
		}
	}

	pub fn prev(&mut self) {
		if self.len > 0 {
			self.index = (self.index + self.len - 1) % self.len;
		}
	}

	/// Jump to a slide; out-of-range indices are ignored.
	pub fn go_to(&mut self, index: usize) {
		if index < self.len {
			self.index = index;
		}
	}
}
