//! Ambient particle background for the hero section.
//!
//! A fixed pool of small circles drifts across a full-viewport canvas,
//! bouncing off the edges and shrinking to a floor radius:
//! - Simulation in [`ParticleField`], independent of the browser
//! - Canvas drawing and the `requestAnimationFrame` loop in [`ParticleCanvas`]
//! - Reduced-motion preference disables the effect entirely
//!
//! # Example
//!
//! ```ignore
//! view! {
//!     <section class="hero">
//!         <ParticleCanvas />
//!         <h1>"Forging the Future of Your Business"</h1>
//!     </section>
//! }
//! ```

mod component;
mod field;
mod render;
pub mod theme;

pub use component::ParticleCanvas;
pub use field::{MotionPreference, Particle, ParticleField};
pub use theme::{Color, ParticleStyle};
