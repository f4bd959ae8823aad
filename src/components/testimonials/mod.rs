//! Client testimonial carousel.

mod carousel;
mod component;

pub use carousel::{Carousel, Testimonial};
pub use component::Testimonials;
